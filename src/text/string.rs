const HEX: &[u8; 16] = b"0123456789abcdef";

/// Appends `value` as a double-quoted JSON string.
pub fn push_quoted(out: &mut String, value: &str, escape_non_ascii: bool) {
    out.push('"');
    escape_string_into(out, value, escape_non_ascii);
    out.push('"');
}

pub fn escape_string_into(out: &mut String, value: &str, escape_non_ascii: bool) {
    let mut start = 0;
    for (idx, ch) in value.char_indices() {
        let escaped = match ch {
            '"' => "\\\"",
            '\\' => "\\\\",
            '\n' => "\\n",
            '\r' => "\\r",
            '\t' => "\\t",
            '\u{08}' => "\\b",
            '\u{0c}' => "\\f",
            ch if (ch as u32) < 0x20 || (escape_non_ascii && !ch.is_ascii()) => {
                if start < idx {
                    out.push_str(&value[start..idx]);
                }
                push_unicode_escape(out, ch);
                start = idx + ch.len_utf8();
                continue;
            }
            _ => continue,
        };
        if start < idx {
            out.push_str(&value[start..idx]);
        }
        out.push_str(escaped);
        start = idx + 1;
    }
    if start < value.len() {
        out.push_str(&value[start..]);
    }
}

fn push_unicode_escape(out: &mut String, ch: char) {
    let mut units = [0u16; 2];
    for unit in ch.encode_utf16(&mut units) {
        out.push_str("\\u");
        for shift in [12, 8, 4, 0] {
            out.push(HEX[((*unit >> shift) & 0xf) as usize] as char);
        }
    }
}

/// Characters allowed in an unquoted object key.
pub fn is_identifier_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '$'
}
