//! Delimiter balance checking.
//!
//! A single left-to-right scan with an explicit stack of open delimiters.
//! Positions are zero-based character offsets into the document.
//! Delimiters inside quoted text are counted like any other.

use crate::result::SyntaxIssue;

/// A delimiter that has been opened and not yet closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BalanceFrame {
    opening: char,
    position: usize,
}

/// The closer expected for `opening`, or `None` if it is not an opener.
const fn closer_for(opening: char) -> Option<char> {
    match opening {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}

const fn is_closer(c: char) -> bool {
    matches!(c, ')' | ']' | '}')
}

/// Scanner state: the open-delimiter stack plus the issues found so far.
#[derive(Debug, Default)]
struct DelimiterScanner {
    stack: Vec<BalanceFrame>,
    issues: Vec<SyntaxIssue>,
}

impl DelimiterScanner {
    fn feed(&mut self, position: usize, c: char) {
        if closer_for(c).is_some() {
            self.stack.push(BalanceFrame {
                opening: c,
                position,
            });
            return;
        }
        if !is_closer(c) {
            return;
        }

        match self.stack.pop() {
            None => self.issues.push(SyntaxIssue::new(format!(
                "unmatched closing delimiter `{c}` at position {position}"
            ))),
            // A mismatched frame is still consumed; scanning continues with the rest of the stack.
            Some(frame) if closer_for(frame.opening) != Some(c) => {
                self.issues.push(SyntaxIssue::new(format!(
                    "mismatched `{}` with `{c}` at position {position}",
                    frame.opening
                )));
            }
            Some(_) => {}
        }
    }

    /// Report every frame left on the stack, outermost (earliest opened) first.
    fn finish(mut self) -> Vec<SyntaxIssue> {
        self.issues.extend(self.stack.into_iter().map(|frame| {
            SyntaxIssue::new(format!(
                "unclosed `{}` starting at position {}",
                frame.opening, frame.position
            ))
        }));
        self.issues
    }
}

/// Check that `(`/`)`, `[`/`]` and `{`/`}` are balanced and properly nested.
#[must_use]
pub fn check_delimiters(text: &str) -> Vec<SyntaxIssue> {
    let mut scanner = DelimiterScanner::default();
    for (position, c) in text.chars().enumerate() {
        scanner.feed(position, c);
    }
    scanner.finish()
}
