//! Double-quoted string literals for text output.

use std::borrow::Cow;

/// Quote `value` as a double-quoted string literal when `quote` is set.
///
/// `"` and `\` are backslash-escaped and the C control characters use their
/// short escapes (`\a \b \f \n \r \t \v`). Other ASCII controls become
/// `\xNN`; remaining non-printable characters become `\uNNNN` or
/// `\UNNNNNNNN`. Printable text, combining marks included, is kept verbatim.
pub fn quote_if(value: &str, quote: bool) -> Cow<'_, str> {
  if !quote {
    return Cow::Borrowed(value);
  }

  let mut out = String::with_capacity(value.len() + 2);
  out.push('"');
  for c in value.chars() {
    match c {
      '"' => out.push_str("\\\""),
      '\\' => out.push_str("\\\\"),
      '\u{7}' => out.push_str("\\a"),
      '\u{8}' => out.push_str("\\b"),
      '\u{c}' => out.push_str("\\f"),
      '\n' => out.push_str("\\n"),
      '\r' => out.push_str("\\r"),
      '\t' => out.push_str("\\t"),
      '\u{b}' => out.push_str("\\v"),
      c if is_printable(c) => out.push(c),
      c if c < ' ' || c == '\u{7f}' => out.push_str(&format!("\\x{:02x}", c as u32)),
      c if (c as u32) < 0x10000 => out.push_str(&format!("\\u{:04x}", c as u32)),
      c => out.push_str(&format!("\\U{:08x}", c as u32)),
    }
  }
  out.push('"');

  Cow::Owned(out)
}

/// Letters, marks, numbers, punctuation, symbols and the ASCII space.
///
/// Controls, separators other than `' '`, format characters, private-use
/// characters and noncharacters are not printable. Unassigned code points
/// are treated as printable.
fn is_printable(c: char) -> bool {
  if c == ' ' {
    return true;
  }
  if c.is_control() || c.is_whitespace() {
    return false;
  }
  !matches!(
    c as u32,
    0x00AD
      | 0x0600..=0x0605
      | 0x061C
      | 0x06DD
      | 0x070F
      | 0x08E2
      | 0x180E
      | 0x200B..=0x200F
      | 0x202A..=0x202E
      | 0x2060..=0x2064
      | 0x2066..=0x206F
      | 0xFEFF
      | 0xFFF9..=0xFFFB
      | 0x110BD
      | 0x110CD
      | 0x1BCA0..=0x1BCA3
      | 0x1D173..=0x1D17A
      | 0xE0001
      | 0xE0020..=0xE007F
      | 0xE000..=0xF8FF
      | 0xF0000..=0xFFFFD
      | 0x100000..=0x10FFFD
      | 0xFDD0..=0xFDEF
  ) && (c as u32) & 0xFFFE != 0xFFFE
}
