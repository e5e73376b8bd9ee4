//! Front-matter detection - single source of truth for block boundaries.
//!
//! A block must open at offset 0 with the header delimiter. The metadata
//! region starts at the first newline after the header and ends at the
//! first `"\n" + footer` after that. The header line may carry a language
//! tag (`--- toml`).
//!
//! Delimiters are arbitrary user strings, so a 4-dash line can start with a
//! 3-dash delimiter. Strict mode rejects a delimiter immediately followed by
//! a repeat of its own last character, and requires the footer line to
//! contain nothing but whitespace after the delimiter. Loose mode skips
//! both checks.
//!
//! Both `extract` and `test` delegate to [`detect`].

use matterkit_core::Delimiters;

/// Byte order mark stripped from the start of every document.
pub const BOM: char = '\u{feff}';

/// Strip a single leading byte-order mark.
#[inline]
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix(BOM).unwrap_or(text)
}

/// Location of a detected front-matter block.
///
/// All offsets are byte offsets into the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatterSpan {
    /// Newline that ends the header line; metadata begins one byte later
    pub data_start: usize,
    /// Newline that precedes the footer delimiter
    pub data_end: usize,
    /// First byte of the body
    pub body_start: usize,
    /// Lowercased language tag from the header line
    pub tag: Option<String>,
}

impl FrontMatterSpan {
    /// Trimmed metadata text between the delimiters.
    pub fn metadata<'a>(&self, text: &'a str) -> &'a str {
        text[self.data_start..self.data_end].trim()
    }

    /// Document content after the block.
    pub fn body<'a>(&self, text: &'a str) -> &'a str {
        &text[self.body_start..]
    }
}

/// Locate a front-matter block at the start of `text`.
///
/// Returns `None` when there is no block. Empty delimiters never match.
pub fn detect(text: &str, delimiters: &Delimiters, strict: bool) -> Option<FrontMatterSpan> {
    let header = delimiters.header.as_str();
    let footer = delimiters.footer.as_str();

    if header.is_empty() || footer.is_empty() || !text.starts_with(header) {
        return None;
    }

    let after_header = &text[header.len()..];
    if strict && continues_run(after_header, header) {
        log::trace!("Header {:?} runs into a longer delimiter", header);
        return None;
    }

    let data_start = header.len() + after_header.find('\n')?;

    let closing = format!("\n{footer}");
    let data_end = data_start + text[data_start..].find(&closing)?;

    let mut body_start = data_end + 1 + footer.len();
    if strict {
        body_start = footer_line_end(text, body_start, footer)?;
    } else if text[body_start..].starts_with('\n') {
        body_start += 1;
    }

    let tag = text[header.len()..data_start].trim();
    let tag = (!tag.is_empty()).then(|| tag.to_lowercase());

    Some(FrontMatterSpan {
        data_start,
        data_end,
        body_start,
        tag,
    })
}

/// Whether `rest` begins with another copy of the delimiter's last character.
///
/// Only delimiters ending in a repeated character are guarded this way;
/// other trailing characters fall through to the newline checks.
#[inline]
fn continues_run(rest: &str, delimiter: &str) -> bool {
    match (rest.chars().next(), delimiter.chars().last()) {
        (Some(next), Some(last)) => next != '\n' && next == last,
        _ => false,
    }
}

/// Strict handling of the footer line: returns the offset just past it,
/// or `None` if anything but whitespace follows the delimiter.
fn footer_line_end(text: &str, body_start: usize, footer: &str) -> Option<usize> {
    let rest = &text[body_start..];
    if rest.is_empty() {
        return Some(body_start);
    }

    if continues_run(rest, footer) {
        log::trace!("Footer {:?} runs into a longer delimiter", footer);
        return None;
    }

    let (line, consumed) = match rest.find('\n') {
        Some(newline) => (&rest[..newline], newline + 1),
        None => (rest, rest.len()),
    };

    if !line.chars().all(char::is_whitespace) {
        log::trace!("Trailing content after footer {:?}: {:?}", footer, line);
        return None;
    }

    Some(body_start + consumed)
}
