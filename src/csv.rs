// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

use thiserror::Error;

/* ---------------- Parsing ---------------- */

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("quoted field opened on line {line} is never closed")]
    UnterminatedQuote { line: usize },
}

/// Minimal CSV parser (quotes, doubled quotes, CRLF, leading BOM).
/// Blank lines are dropped; quoted fields may span lines.
pub fn parse_rows(text: &str, sep: char) -> Result<Vec<Vec<String>>, ParseError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut line = 1usize;
    let mut quote_line = 0usize;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\n' { line += 1; }
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                    quote_line = line;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) {
                    chars.next();
                    line += 1;
                }
                row.push(take(&mut field));
                push_row(&mut rows, &mut row);
            }
            _ => field.push(ch),
        }
    }

    if in_quotes {
        return Err(ParseError::UnterminatedQuote { line: quote_line });
    }

    // Last row may lack a trailing newline.
    row.push(field);
    push_row(&mut rows, &mut row);

    Ok(rows)
}

fn push_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>) {
    if row.len() == 1 && row[0].trim().is_empty() {
        row.clear();
    } else {
        rows.push(take(row));
    }
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[&str], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}
