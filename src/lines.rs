use std::io;
use std::io::prelude::*;

use log::debug;

use crate::models::{SeenLines, Summary};

/// Splits on `\n`, `\r\n` and a lone `\r`. A final terminator does not start
/// an extra empty line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\n', '\r']) {
            Some(i) => {
                let line = &rest[..i];
                let skip = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[i + skip..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

/// Strips whitespace from both ends, counting the ASCII separators
/// U+001C..=U+001F as whitespace.
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}

/// Makes one pass over `reader`, keeping each distinct non-blank trimmed line.
pub fn dedup_reader<R: BufRead>(mut reader: R) -> io::Result<(SeenLines, Summary)> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut seen = SeenLines::new();
    let mut summary = Summary::default();

    for line in split_lines(&text) {
        summary.read += 1;

        let line = trim_line(line);
        if line.is_empty() {
            summary.blank += 1;
        } else if seen.insert(line) {
            summary.kept += 1;
        } else {
            debug!("duplicate at line {}: {}", summary.read, line);
            summary.duplicates += 1;
        }
    }
    debug_assert_eq!(summary.kept, seen.len() as u64);
    Ok((seen, summary))
}

/// Writes every entry on its own line, each terminated by `\n`.
pub fn write_lines<W: Write>(writer: W, seen: &SeenLines) -> io::Result<()> {
    let mut writer = io::BufWriter::new(writer);
    for line in seen.iter() {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}
