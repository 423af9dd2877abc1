use core::fmt;
use std::io::Write;

use serde_json::Value;
use tracing::debug;
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::error::{Result, SummaryError};
use crate::models::{Config, Issue};
use crate::snippet::shorten;

/// One printed block: header line, indented snippet, blank line.
pub struct Summary<'a> {
    issue: &'a Issue,
    snippet: String,
    indent: &'a str,
}

impl<'a> Summary<'a> {
    pub fn new(issue: &'a Issue, config: &'a Config) -> Self {
        let snippet = shorten(&issue.flat_body(), config.snippet_width, &config.placeholder);
        Self {
            issue,
            snippet,
            indent: &config.snippet_indent,
        }
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} :: labels={}",
            self.issue,
            label_list(&self.issue.label_names())
        )?;
        writeln!(f, "{}{}", self.indent, self.snippet)?;
        writeln!(f)
    }
}

/// Decodes and prints each record in order, stopping at the first one that
/// cannot be decoded. Returns the number of blocks written.
pub fn write_summaries<W: Write>(
    records: Vec<Value>,
    config: &Config,
    out: &mut W,
) -> Result<usize> {
    let mut written = 0;
    for (index, record) in records.into_iter().enumerate() {
        let issue = Issue::from_value(record)
            .map_err(|source| SummaryError::RecordMalformed { index, source })?;
        let block = Summary::new(&issue, config).to_string();
        out.write_all(block.as_bytes())?;
        written += 1;
    }
    out.flush()?;
    debug!(count = written, "wrote issue summaries");
    Ok(written)
}

/// Renders labels as a bracketed list of quoted strings, e.g. `['bug', 'p1']`.
pub fn label_list(labels: &[&str]) -> String {
    let items: Vec<String> = labels.iter().map(|label| quote(label)).collect();
    format!("[{}]", items.join(", "))
}

fn quote(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            ' ' => out.push(' '),
            c if !is_printable(c) => out.push_str(&escape(c)),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

fn escape(c: char) -> String {
    match c as u32 {
        code @ 0..=0xff => format!("\\x{code:02x}"),
        code @ 0x100..=0xffff => format!("\\u{code:04x}"),
        code => format!("\\U{code:08x}"),
    }
}

/// Everything except separators, control, format, surrogate, private-use and
/// unassigned code points. The ASCII space is handled by the caller.
fn is_printable(c: char) -> bool {
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
            | GeneralCategory::SpaceSeparator
    )
}
