use thiserror::Error;

/// Rejection raised when an explicit selection fails the wrappable-construct
/// heuristic.
#[derive(Debug, Error, PartialEq, Eq)]
#[error(
    "the selected text does not look like a wrappable construct; widgets start with an uppercase letter"
)]
pub struct SelectionRejected;

/// Check that an explicit selection plausibly covers a widget construct.
///
/// The first non-whitespace character must be an uppercase letter. This is a
/// cheap guard against wrapping stray literals or punctuation, not a parser;
/// trailing content is never inspected.
pub fn validate_selection(text: &str) -> Result<(), SelectionRejected> {
    match text.trim_start().chars().next() {
        Some(first) if first.is_uppercase() => Ok(()),
        _ => Err(SelectionRejected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Container()")]
    #[case("Text('hi')")]
    #[case("  \n\tPadding(child: x)")]
    #[case("Widget")]
    #[case("X")]
    #[case("Ünicode()")]
    #[case("Текст('п')")]
    fn accepts_uppercase_starts(#[case] text: &str) {
        assert_eq!(validate_selection(text), Ok(()));
    }

    #[rstest]
    #[case("container()")]
    #[case("'a literal'")]
    #[case(",")]
    #[case("42")]
    #[case("_Private()")]
    #[case("")]
    #[case("   \n  ")]
    fn rejects_everything_else(#[case] text: &str) {
        assert_eq!(validate_selection(text), Err(SelectionRejected));
    }

    #[test]
    fn accepts_uppercase_regardless_of_trailing_content() {
        // The heuristic only looks at the first character.
        assert_eq!(validate_selection("Text(unbalanced"), Ok(()));
        assert_eq!(validate_selection("T)))"), Ok(()));
    }

    #[test]
    fn rejection_reason_names_the_heuristic() {
        let reason = SelectionRejected.to_string();
        assert!(reason.contains("does not look like a wrappable construct"));
    }
}
