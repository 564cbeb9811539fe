//! # csvsplit
//!
//! Single-pass CSV line splitter that handles quoted fields, including
//! nested quotes of the other kind (e.g. `text, "quoted", with commas`).
//!
//! One line in, one ordered field list out. The delimiter is a comma and
//! the quote characters are single and double quotes (`'` and `"`); either
//! opens a quoted span and only the same character closes it. Commas inside
//! a span do not separate fields. Quote characters stay in the output -
//! no trimming, no unescaping, no type conversion. What a field means is
//! left to the caller.
//!
//! # Examples
//!
//! ```
//! use csvsplit::split;
//!
//! let fields = split("name,\"address, street\",age").unwrap();
//! assert_eq!(fields, vec!["name", "\"address, street\"", "age"]);
//! ```
//!
//! Failures are classified and carry the offending input:
//!
//! ```
//! use csvsplit::{split, SplitErrorKind};
//!
//! assert_eq!(split("").unwrap_err().kind, SplitErrorKind::NullInput);
//! assert_eq!(split("a,\"b").unwrap_err().kind, SplitErrorKind::UnmatchedQuote);
//! ```

pub mod error;
pub mod splitter;

pub use error::{Result, SplitError, SplitErrorKind};
pub use splitter::{split, DELIMITER, DOUBLE_QUOTE, SINGLE_QUOTE};
