//! Measure UTF-8 text in storage units (bytes) and in characters (Unicode scalars).
//!
//! ## Notes
//! - **Bytes**: the length of the UTF-8 encoding, i.e. `str::len`.
//! - **Characters**: Unicode scalar values (Rust `char`), not grapheme clusters. One character spans
//!   1 to 4 bytes.
//! - The two counts agree exactly when every character is ASCII; otherwise `bytes > chars`.
//! - `&str` is always valid UTF-8, so malformed input cannot reach these helpers.

/// Return the number of UTF-8 bytes backing `text`.
///
/// ## Examples
/// ```rust
/// use tally_core::text::byte_len;
/// assert_eq!(byte_len("carl"), 4);
/// assert_eq!(byte_len("İnanç"), 7);
/// ```
pub fn byte_len(text: &str) -> usize {
    text.len()
}

/// Return the number of Unicode scalars in `text`.
///
/// ## Examples
/// ```rust
/// use tally_core::text::char_len;
/// assert_eq!(char_len("carl"), 4);
/// assert_eq!(char_len("İnanç"), 5);
/// ```
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Both lengths of a text value, measured together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextLength {
    /// UTF-8 bytes.
    pub bytes: usize,
    /// Unicode scalars.
    pub chars: usize,
}

impl TextLength {
    /// Measure `text` in both units.
    pub fn measure(text: &str) -> Self {
        Self {
            bytes: byte_len(text),
            chars: char_len(text),
        }
    }

    /// Whether every character of the measured text fits in one byte.
    pub fn is_single_byte(&self) -> bool {
        self.bytes == self.chars
    }
}

/// Shout `text`: upper-case it and append one `!` per byte of the original.
///
/// ## Parameters
/// - `text`: the message to shout.
///
/// ## Returns
/// - (`String`): the upper-cased text followed by `byte_len(text)` exclamation marks.
///
/// ## Notes
/// - The `!` count follows the byte length, so multi-byte characters earn more than one `!`.
/// - Upper-casing uses Unicode full case mapping (`str::to_uppercase`), so one character may become
///   several: `ß` shouts as `SS`. The `!` count still comes from the original text.
///
/// ## Examples
/// ```rust
/// use tally_core::text::banger;
/// assert_eq!(banger("hello"), "HELLO!!!!!");
/// assert_eq!(banger("ç"), "Ç!!");
/// ```
pub fn banger(text: &str) -> String {
    let marks = byte_len(text);
    let upper = text.to_uppercase();
    let mut out = String::with_capacity(upper.len() + marks);
    out.push_str(&upper);
    out.extend(std::iter::repeat_n('!', marks));
    out
}
