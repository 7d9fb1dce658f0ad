//! Turn revealed text into styled, wrapped terminal lines

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::math::{split_math, Segment};
use crate::tui::themes::Theme;

/// Indent for display math bodies
const DISPLAY_INDENT: &str = "    ";

/// Render `text` to lines no wider than `width` columns
///
/// With `math` on, bracket-delimited spans lose their delimiters and take
/// the theme's math color; with it off the raw source is shown.
pub fn render_lines(text: &str, width: usize, theme: &Theme, math: bool) -> Vec<Line<'static>> {
    let base = Style::default().fg(theme.text_color);
    let math_style = Style::default()
        .fg(theme.math_color)
        .add_modifier(Modifier::ITALIC);

    let pieces: Vec<(String, Style)> = if math {
        split_math(text)
            .into_iter()
            .map(|segment| match segment {
                Segment::Text(s) => (s.to_string(), base),
                Segment::Math {
                    body,
                    display: false,
                    ..
                } => (body.to_string(), math_style),
                Segment::Math {
                    body,
                    display: true,
                    ..
                } => (indent_display(body), math_style),
            })
            .collect()
    } else {
        vec![(text.to_string(), base)]
    };

    let mut lines = Vec::new();
    for logical in split_logical_lines(pieces) {
        if logical.is_empty() {
            lines.push(Line::from(""));
        } else {
            lines.extend(wrap_styled(logical, width));
        }
    }
    lines
}

fn indent_display(body: &str) -> String {
    body.split('\n')
        .map(|line| {
            let line = line.trim();
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", DISPLAY_INDENT, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Break styled pieces on newlines
fn split_logical_lines(pieces: Vec<(String, Style)>) -> Vec<Vec<(String, Style)>> {
    let mut result = Vec::new();
    let mut current: Vec<(String, Style)> = Vec::new();

    for (text, style) in pieces {
        let mut parts = text.split('\n');
        if let Some(first) = parts.next() {
            if !first.is_empty() {
                current.push((first.to_string(), style));
            }
        }
        for part in parts {
            result.push(std::mem::take(&mut current));
            if !part.is_empty() {
                current.push((part.to_string(), style));
            }
        }
    }
    if !current.is_empty() {
        result.push(current);
    }
    result
}

/// Split into alternating word / whitespace runs, keeping styles
fn tokenize(pieces: Vec<(String, Style)>) -> Vec<(String, Style, bool)> {
    let mut tokens = Vec::new();
    for (text, style) in pieces {
        let mut run = String::new();
        let mut run_is_ws = false;
        for c in text.chars() {
            let is_ws = c.is_whitespace();
            if !run.is_empty() && is_ws != run_is_ws {
                tokens.push((std::mem::take(&mut run), style, run_is_ws));
            }
            run_is_ws = is_ws;
            run.push(c);
        }
        if !run.is_empty() {
            tokens.push((run, style, run_is_ws));
        }
    }
    tokens
}

/// Greedy word wrap over styled pieces
fn wrap_styled(pieces: Vec<(String, Style)>, width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        let spans: Vec<Span<'static>> = pieces
            .into_iter()
            .map(|(text, style)| Span::styled(text, style))
            .collect();
        return vec![Line::from(spans)];
    }

    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut current_width = 0;

    for (token, style, is_ws) in tokenize(pieces) {
        let token_width = token.width();

        // Leading whitespace is kept on the first row only (indentation)
        if is_ws && current_width == 0 && !lines.is_empty() {
            continue;
        }

        if current_width + token_width <= width {
            current.push(Span::styled(token, style));
            current_width += token_width;
            continue;
        }

        if is_ws {
            lines.push(Line::from(std::mem::take(&mut current)));
            current_width = 0;
            continue;
        }

        if current_width > 0 {
            lines.push(Line::from(std::mem::take(&mut current)));
            current_width = 0;
        }

        if token_width <= width {
            current.push(Span::styled(token, style));
            current_width = token_width;
            continue;
        }

        // Word longer than the row: hard split
        let mut chunk = String::new();
        for c in token.chars() {
            let char_width = c.width().unwrap_or(0);
            if current_width + char_width > width && current_width > 0 {
                current.push(Span::styled(std::mem::take(&mut chunk), style));
                lines.push(Line::from(std::mem::take(&mut current)));
                current_width = 0;
            }
            chunk.push(c);
            current_width += char_width;
        }
        if !chunk.is_empty() {
            current.push(Span::styled(chunk, style));
        }
    }

    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}
