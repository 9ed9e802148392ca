//! Word wrapping into a fixed number of lines
//!
//! Text that does not fit in the allowed lines is cut and the last line
//! ends with an ellipsis, so truncation is always visible.

use std::collections::VecDeque;

pub const ELLIPSIS: &str = "...";

/// Pixel width of rendered text
pub trait TextMeasure {
    fn width(&self, text: &str) -> f32;
}

/// Every character has the same advance. Used for headless runs and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedWidthFont {
    pub char_width: f32,
}

impl TextMeasure for FixedWidthFont {
    fn width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.char_width
    }
}

/// Wrap `text` into at most `max_lines` lines no wider than `max_width`.
///
/// Trailing empty lines are dropped. A word wider than a whole line is
/// broken at a character boundary.
pub fn wrap_lines(
    text: &str,
    font: &impl TextMeasure,
    max_width: f32,
    max_lines: usize,
) -> Vec<String> {
    if max_lines == 0 {
        return Vec::new();
    }

    let mut words: VecDeque<String> = text.split_whitespace().map(str::to_owned).collect();
    let mut lines = Vec::new();
    let mut line = String::new();

    while let Some(word) = words.pop_front() {
        let candidate = if line.is_empty() {
            word.clone()
        } else {
            format!("{line} {word}")
        };

        if font.width(&candidate) <= max_width {
            line = candidate;
            continue;
        }

        if line.is_empty() {
            let split = fitting_prefix(&word, font, max_width);
            let (head, tail) = word.split_at(split);
            line = head.to_owned();
            if !tail.is_empty() {
                words.push_front(tail.to_owned());
            }
        } else {
            words.push_front(word);
        }

        if lines.len() + 1 == max_lines {
            break;
        }
        lines.push(std::mem::take(&mut line));
    }

    if !words.is_empty() {
        while !line.is_empty() && font.width(&format!("{line}{ELLIPSIS}")) > max_width {
            line.pop();
            let trimmed = line.trim_end().len();
            line.truncate(trimmed);
        }
        line.push_str(ELLIPSIS);
    }
    lines.push(line);

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

/// Byte length of the longest prefix of `word` that fits (at least one char)
fn fitting_prefix(word: &str, font: &impl TextMeasure, max_width: f32) -> usize {
    let mut end = word.chars().next().map_or(0, char::len_utf8);
    for (idx, ch) in word.char_indices().skip(1) {
        let next = idx + ch.len_utf8();
        if font.width(&word[..next]) > max_width {
            break;
        }
        end = next;
    }
    end
}
