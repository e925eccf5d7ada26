//! Per-character predicates for pattern elements.

use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

use super::ast::{BracketGroup, ClassKind, Element};

/// Test whether `ch` satisfies `element`.
pub fn element_matches(element: &Element, ch: char) -> bool {
    match element {
        Element::Literal(c) => *c == ch,
        Element::Class(kind) => class_matches(*kind, ch),
        Element::Group(group) => group_matches(group, ch),
    }
}

/// Test whether `ch` belongs to an escape class.
pub fn class_matches(kind: ClassKind, ch: char) -> bool {
    match kind {
        ClassKind::Digit => is_digit(ch),
        ClassKind::Word => is_letter(ch) || is_digit(ch) || ch == '_',
        ClassKind::Unknown(_) => false,
    }
}

/// Test whether `ch` is (or, for `[^...]`, is not) a member of `group`.
///
/// An empty positive group matches nothing; an empty negated group matches
/// everything.
pub fn group_matches(group: &BracketGroup, ch: char) -> bool {
    let member = group.members.contains(&ch);
    if group.negated { !member } else { member }
}

/// Unicode general category Nd.
fn is_digit(ch: char) -> bool {
    ch.general_category() == GeneralCategory::DecimalNumber
}

/// Unicode general category L (Lu, Ll, Lt, Lm, Lo).
fn is_letter(ch: char) -> bool {
    ch.general_category_group() == GeneralCategoryGroup::Letter
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn group(negated: bool, members: &str) -> BracketGroup {
        BracketGroup {
            negated,
            members: members.chars().collect(),
        }
    }

    #[rstest]
    #[case('0', true)]
    #[case('9', true)]
    #[case('a', false)]
    #[case('_', false)]
    #[case('٣', true)]
    #[case('７', true)]
    #[case('²', false)]
    #[case('½', false)]
    #[case('Ⅻ', false)]
    fn digit_class(#[case] ch: char, #[case] expected: bool) {
        assert_eq!(class_matches(ClassKind::Digit, ch), expected);
    }

    #[rstest]
    #[case('a', true)]
    #[case('Z', true)]
    #[case('7', true)]
    #[case('_', true)]
    #[case('é', true)]
    #[case('ǅ', true)]
    #[case('ʰ', true)]
    #[case('中', true)]
    #[case('٣', true)]
    #[case('Ⅻ', false)]
    #[case('²', false)]
    #[case('-', false)]
    #[case(' ', false)]
    #[case('[', false)]
    fn word_class(#[case] ch: char, #[case] expected: bool) {
        assert_eq!(class_matches(ClassKind::Word, ch), expected);
    }

    #[test]
    fn unknown_escape_never_matches() {
        for escaped in ['q', '\\', '.', ' ', 'D', 'é'] {
            assert!(
                !class_matches(ClassKind::Unknown(escaped), escaped),
                "{escaped:?} against itself"
            );
            assert!(!class_matches(ClassKind::Unknown(escaped), 'x'), "{escaped:?}");
        }
    }

    #[test]
    fn literal_is_exact() {
        assert!(element_matches(&Element::Literal('a'), 'a'));
        assert!(!element_matches(&Element::Literal('a'), 'A'));
        assert!(element_matches(&Element::Literal('ß'), 'ß'));
    }

    #[test]
    fn positive_group() {
        let g = group(false, "abc");
        assert!(group_matches(&g, 'b'));
        assert!(!group_matches(&g, 'd'));
    }

    #[test]
    fn negated_group() {
        let g = group(true, "abc");
        assert!(!group_matches(&g, 'a'));
        assert!(group_matches(&g, 'd'));
    }

    #[test]
    fn duplicate_members_are_harmless() {
        assert!(group_matches(&group(false, "aaa"), 'a'));
        assert!(!group_matches(&group(true, "aaa"), 'a'));
    }

    #[test]
    fn empty_groups() {
        assert!(!group_matches(&group(false, ""), 'a'));
        assert!(group_matches(&group(true, ""), 'a'));
    }

    #[test]
    fn multibyte_members() {
        let g = group(false, "é€");
        assert!(group_matches(&g, '€'));
        assert!(!group_matches(&g, 'e'));
    }

    #[test]
    fn element_dispatches_to_group() {
        let element = Element::Group(group(false, "xyz"));
        assert!(element_matches(&element, 'y'));
        assert!(!element_matches(&element, 'a'));
    }
}
