//! Single-pass field splitting with quote-aware delimiter handling

use crate::error::{Result, SplitError, SplitErrorKind};

/// Field delimiter
pub const DELIMITER: u8 = b',';
/// Double quote character - opens a span closed only by the next `"`
pub const DOUBLE_QUOTE: u8 = b'"';
/// Single quote character - opens a span closed only by the next `'`
pub const SINGLE_QUOTE: u8 = b'\'';

/// Initial capacity of the field vector
const START_SIZE: usize = 10;

/// Operation name reported in errors
const OP_SPLIT: &str = "split";

/// Split one line into fields on commas, treating quoted spans as opaque
///
/// Either `"` or `'` opens a quoted span; only the exact same character
/// closes it. A comma inside a span is ordinary content and does not
/// separate fields. Quote characters are kept in the output verbatim -
/// nothing is stripped, trimmed, or unescaped, and there is no
/// quote-doubling escape convention.
///
/// Fields are returned in left-to-right order and may be empty: two
/// adjacent delimiters produce an empty field between them, and a leading
/// or trailing delimiter produces an empty first or last field.
///
/// # Errors
///
/// - [`SplitErrorKind::NullInput`] if `line` is empty (checked before any
///   scanning).
/// - [`SplitErrorKind::UnmatchedQuote`] if a span is still open at end of
///   input. No partial field list is returned.
///
/// # Examples
///
/// ```
/// use csvsplit::split;
///
/// let fields = split("a,\"b,c\",d").unwrap();
/// assert_eq!(fields, vec!["a", "\"b,c\"", "d"]);
///
/// let fields = split("a,'b,c',d").unwrap();
/// assert_eq!(fields, vec!["a", "'b,c'", "d"]);
/// ```
pub fn split(line: &str) -> Result<Vec<String>> {
    if line.is_empty() {
        return Err(SplitError::new(OP_SPLIT, line, SplitErrorKind::NullInput));
    }

    let mut fields: Vec<String> = Vec::with_capacity(START_SIZE);
    let mut startpos = 0;
    // Some(q) while inside a span; q is the byte that closes it.
    let mut in_quote: Option<u8> = None;

    // Byte-wise scan is UTF-8 safe: all structural bytes are ASCII, so
    // every slice boundary below lands on a char boundary.
    for (p, &byte) in line.as_bytes().iter().enumerate() {
        match in_quote {
            Some(quote) => {
                if byte == quote {
                    in_quote = None;
                }
            }
            None => {
                if byte == DELIMITER {
                    // Slicing [startpos, p) already yields "" for adjacent
                    // or leading delimiters; no look-behind needed.
                    fields.push(line[startpos..p].to_string());
                    startpos = p + 1;
                } else if byte == DOUBLE_QUOTE || byte == SINGLE_QUOTE {
                    in_quote = Some(byte);
                }
            }
        }
    }

    if in_quote.is_some() {
        return Err(SplitError::new(
            OP_SPLIT,
            line,
            SplitErrorKind::UnmatchedQuote,
        ));
    }

    // Trailing field after the last delimiter, even if empty.
    fields.push(line[startpos..].to_string());
    Ok(fields)
}
