//! Indentation consistency checking.

use crate::result::SyntaxIssue;

/// Report mixed indentation when some line starts with a tab and another
/// starts with two or more spaces. Fires at most once per document.
#[must_use]
pub fn check_indentation<'a>(lines: impl IntoIterator<Item = &'a str>) -> Option<SyntaxIssue> {
    let mut has_tab_lines = false;
    let mut has_space_indented_lines = false;

    for line in lines {
        has_tab_lines |= line.starts_with('\t');
        has_space_indented_lines |= line.starts_with("  ");
        if has_tab_lines && has_space_indented_lines {
            return Some(SyntaxIssue::new("mixed tabs and spaces for indentation"));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_indentation_detected_once() {
        let text = "intro\n\tstep one\n  step two\n\tstep three\n    step four\n";
        let issue = check_indentation(text.lines()).unwrap();
        assert_eq!(issue.message, "mixed tabs and spaces for indentation");
    }

    #[test]
    fn test_tabs_only() {
        assert!(check_indentation("\tone\n\ttwo".lines()).is_none());
    }

    #[test]
    fn test_spaces_only() {
        assert!(check_indentation("  one\n    two".lines()).is_none());
    }

    #[test]
    fn test_single_space_is_not_indentation() {
        assert!(check_indentation("\tone\n two".lines()).is_none());
    }

    #[test]
    fn test_tab_after_spaces_on_same_line_does_not_count() {
        assert!(check_indentation(" \tone\ntwo".lines()).is_none());
    }
}
