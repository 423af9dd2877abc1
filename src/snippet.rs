//! Single-line shortening of issue bodies.
//!
//! Whitespace is collapsed first, then the text is cut back to whole chunks
//! (words, or word pieces that end in a hyphen) so that the kept text plus the
//! placeholder fits in `width` characters. Widths count `char`s, not bytes.

use std::collections::VecDeque;

/// Collapses whitespace and, if the result is wider than `width`, cuts it at a
/// chunk boundary and appends `placeholder`.
pub fn shorten(text: &str, width: usize, placeholder: &str) -> String {
    let collapsed = collapse_whitespace(text);
    let chunks = split_chunks(&collapsed);
    first_line(chunks, width, placeholder)
}

fn collapse_whitespace(text: &str) -> String {
    text.split(is_space)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

// U+001C..U+001F are separators for splitting purposes even though they are
// not Unicode White_Space.
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_letter(c: char) -> bool {
    is_word(c) && !c.is_numeric()
}

fn is_word_punct(c: char) -> bool {
    is_word(c) || matches!(c, '!' | '"' | '\'' | '&' | '.' | ',' | '?')
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Splits single-space separated text into space chunks and word chunks.
fn split_chunks(text: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    for (i, word) in text.split(' ').enumerate() {
        if i > 0 {
            chunks.push(" ");
        }
        chunks.extend(split_word(word));
    }
    chunks.retain(|chunk| !chunk.is_empty());
    chunks
}

/// Splits a whitespace-free word after qualifying hyphens and around `--`
/// dashes that sit between words.
fn split_word(word: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    let n = chars.len();
    let c = |i: usize| chars[i].1;
    let offset = |i: usize| if i == n { word.len() } else { chars[i].0 };

    // Length of a run of two or more hyphens at `i` that is followed by a
    // word character.
    let dash_run = |i: usize| {
        let run = chars[i..].iter().take_while(|(_, ch)| *ch == '-').count();
        (run >= 2 && i + run < n && is_word(c(i + run))).then_some(run)
    };

    // The hyphen at `j` ends a chunk when it follows "xx" or "x-x" and is
    // followed by "xx" or "x-x", letters only.
    let hyphen_break = |j: usize| {
        let before = (j >= 2 && is_letter(c(j - 2)) && is_letter(c(j - 1)))
            || (j >= 3 && is_letter(c(j - 3)) && c(j - 2) == '-' && is_letter(c(j - 1)));
        let after = j + 2 < n
            && is_letter(c(j + 1))
            && (is_letter(c(j + 2)) || (c(j + 2) == '-' && j + 3 < n && is_letter(c(j + 3))));
        before && after
    };

    let mut pieces = Vec::new();
    let mut start = 0;
    while start < n {
        if start > 0 && is_word_punct(c(start - 1)) {
            if let Some(run) = dash_run(start) {
                pieces.push(&word[offset(start)..offset(start + run)]);
                start += run;
                continue;
            }
        }

        let mut end = start + 1;
        while end < n {
            if c(end) == '-' && hyphen_break(end) {
                end += 1;
                break;
            }
            if is_word_punct(c(end - 1)) && dash_run(end).is_some() {
                break;
            }
            end += 1;
        }
        pieces.push(&word[offset(start)..offset(end)]);
        start = end;
    }
    pieces
}

/// Splits `s` after its first `n` chars.
fn split_at_char(s: &str, n: usize) -> (&str, &str) {
    let at = s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    s.split_at(at)
}

/// Breaks an over-wide chunk so its head fills `space_left`, preferring a cut
/// just after the last hyphen inside that space.
fn break_long_chunk(chunk: &str, space_left: usize) -> (&str, &str) {
    let mut end = space_left;
    if char_len(chunk) > space_left {
        let head: Vec<char> = chunk.chars().take(space_left).collect();
        if let Some(hyphen) = head.iter().rposition(|&ch| ch == '-') {
            if hyphen > 0 && head[..hyphen].iter().any(|&ch| ch != '-') {
                end = hyphen + 1;
            }
        }
    }
    split_at_char(chunk, end)
}

fn first_line(chunks: Vec<&str>, width: usize, placeholder: &str) -> String {
    let mut pending: VecDeque<&str> = chunks.into();
    let mut line: Vec<&str> = Vec::new();
    let mut len = 0;

    while let Some(&chunk) = pending.front() {
        let chunk_len = char_len(chunk);
        if len + chunk_len > width {
            break;
        }
        line.push(chunk);
        len += chunk_len;
        pending.pop_front();
    }

    if let Some(slot) = pending.front_mut() {
        let chunk: &str = *slot;
        if char_len(chunk) > width {
            let space_left = if width < 1 { 1 } else { width - len };
            if space_left > 0 {
                let (head, tail) = break_long_chunk(chunk, space_left);
                line.push(head);
                len += char_len(head);
                *slot = tail;
            }
        }
    }

    if line.last().is_some_and(|last| is_blank(last)) {
        len -= line.pop().map_or(0, char_len);
    }

    if line.is_empty() {
        return String::new();
    }

    let rest_is_blank =
        pending.is_empty() || (pending.len() == 1 && is_blank(pending[0]));
    if rest_is_blank && len <= width {
        return line.concat();
    }

    let placeholder_len = char_len(placeholder);
    while let Some(&last) = line.last() {
        if !is_blank(last) && len + placeholder_len <= width {
            line.push(placeholder);
            return line.concat();
        }
        len -= char_len(last);
        line.pop();
    }
    placeholder.trim_start().to_string()
}
