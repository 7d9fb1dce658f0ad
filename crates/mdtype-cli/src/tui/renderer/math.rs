//! Bracket-delimited math spans
//!
//! Recognizes `\[ ... \]` (display) and `\( ... \)` (inline). The body is
//! passed through untouched; nothing is typeset.

/// A run of source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Math {
        body: &'a str,
        display: bool,
        /// False when the closing delimiter hasn't been revealed yet
        closed: bool,
    },
}

const DISPLAY_OPEN: &str = "\\[";
const DISPLAY_CLOSE: &str = "\\]";
const INLINE_OPEN: &str = "\\(";
const INLINE_CLOSE: &str = "\\)";

/// Split `text` into plain and math segments
///
/// An opening delimiter without a matching close makes the rest of the
/// text math, which is what the reveal frontier looks like mid-formula.
pub fn split_math(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let next_open = [(DISPLAY_OPEN, true), (INLINE_OPEN, false)]
            .into_iter()
            .filter_map(|(open, display)| rest.find(open).map(|at| (at, display)))
            .min_by_key(|(at, _)| *at);

        let Some((at, display)) = next_open else {
            segments.push(Segment::Text(rest));
            break;
        };

        if at > 0 {
            segments.push(Segment::Text(&rest[..at]));
        }

        let after_open = &rest[at + 2..];
        let close = if display { DISPLAY_CLOSE } else { INLINE_CLOSE };
        match after_open.find(close) {
            Some(end) => {
                segments.push(Segment::Math {
                    body: &after_open[..end],
                    display,
                    closed: true,
                });
                rest = &after_open[end + close.len()..];
            }
            None => {
                segments.push(Segment::Math {
                    body: after_open,
                    display,
                    closed: false,
                });
                break;
            }
        }
    }

    segments
}
