//! JSON output helpers

use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};

/// Compact formatter that escapes every non-ASCII character (and DEL) as `\uXXXX`.
///
/// Characters outside the Basic Multilingual Plane are written as a
/// surrogate pair, so the output is pure ASCII.
#[derive(Debug, Default)]
pub struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if c.is_ascii() && c != '\x7f' {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..i])?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}

/// Serialize `value` to compact, ASCII-only JSON.
pub fn to_ascii_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, AsciiFormatter);
    value.serialize(&mut ser)?;
    // Only ASCII is ever written.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_compact_ascii_output() {
        let value = json!({"ps": "节点", "n": [1, 2]});
        assert_eq!(
            to_ascii_json(&value).unwrap(),
            r#"{"n":[1,2],"ps":"\u8282\u70b9"}"#
        );
    }

    #[test]
    fn test_astral_plane_uses_surrogates() {
        assert_eq!(to_ascii_json("a🚀").unwrap(), r#""a\ud83d\ude80""#);
    }

    #[test]
    fn test_control_characters_still_escaped() {
        assert_eq!(to_ascii_json("a\"b\n").unwrap(), r#""a\"b\n""#);
    }
}
