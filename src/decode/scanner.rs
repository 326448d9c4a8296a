use memchr::{memchr, memchr2, memchr_iter, memmem};

use crate::num::number::parse_number;
use crate::text::string::is_identifier_char;
use crate::types::Number;
use crate::{Error, Location, Result};

const BOM: &str = "\u{feff}";

/// Byte cursor over the input that keeps a running line and column so errors
/// can be reported with a location.
pub struct Scanner<'a> {
    input: &'a str,
    bytes: &'a [u8],
    position: usize,
    line: usize,
    column: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        let position = if input.starts_with(BOM) { BOM.len() } else { 0 };
        Self {
            input,
            bytes: input.as_bytes(),
            position,
            line: 1,
            column: 1,
        }
    }

    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.position).copied()
    }

    fn peek_at(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.position + ahead).copied()
    }

    pub fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    pub fn is_eof(&self) -> bool {
        self.position >= self.bytes.len()
    }

    /// Steps over one ASCII byte that is not a newline.
    pub fn bump(&mut self) {
        self.skip_ascii(1);
    }

    fn skip_ascii(&mut self, count: usize) {
        self.position += count;
        self.column += count;
    }

    pub fn location(&self) -> Location {
        Location {
            offset: self.position,
            line: self.line,
            column: self.column,
        }
    }

    pub fn error(&self, message: impl Into<String>) -> Error {
        Error::parse(message, self.location())
    }

    fn advance_to(&mut self, end: usize) {
        let skipped = &self.bytes[self.position..end];
        let mut tail = skipped;
        for idx in memchr_iter(b'\n', skipped) {
            self.line += 1;
            self.column = 1;
            tail = &skipped[idx + 1..];
        }
        self.column += char_count(tail);
        self.position = end;
    }

    /// Skips whitespace and, when `comments` is set, `//` and `/* */` comments.
    pub fn skip_trivia(&mut self, comments: bool) -> Result<()> {
        loop {
            match self.peek() {
                Some(b' ' | b'\t' | b'\r') => self.bump(),
                Some(b'\n') => self.advance_to(self.position + 1),
                Some(b'/') => {
                    if !comments {
                        return Err(self.error("comments are not allowed"));
                    }
                    self.skip_comment()?;
                }
                _ => return Ok(()),
            }
        }
    }

    fn skip_comment(&mut self) -> Result<()> {
        let start = self.location();
        match self.peek_at(1) {
            Some(b'/') => {
                let body = &self.bytes[self.position..];
                let end = memchr(b'\n', body).map_or(self.bytes.len(), |idx| self.position + idx);
                self.advance_to(end);
                Ok(())
            }
            Some(b'*') => {
                let body = &self.bytes[self.position + 2..];
                match memmem::find(body, b"*/") {
                    Some(idx) => {
                        self.advance_to(self.position + 2 + idx + 2);
                        Ok(())
                    }
                    None => Err(Error::parse("unterminated block comment", start)),
                }
            }
            _ => Err(self.error("unexpected character '/'")),
        }
    }

    /// Consumes a run of identifier characters (possibly empty).
    pub fn scan_word(&mut self) -> &'a str {
        let input = self.input;
        let start = self.position;
        let rest = &input[start..];
        let len = rest
            .char_indices()
            .find(|(_, ch)| !is_identifier_char(*ch))
            .map_or(rest.len(), |(idx, _)| idx);
        let word = &rest[..len];
        self.position += len;
        self.column += word.chars().count();
        word
    }

    /// Scans a string delimited by `quote`, positioned on the opening quote.
    pub fn scan_string(&mut self, quote: u8, flags: StringFlags) -> Result<String> {
        let start = self.location();
        self.bump();
        let mut out = String::new();
        let bytes = self.bytes;
        loop {
            let rest = &bytes[self.position..];
            let Some(offset) = memchr2(quote, b'\\', rest) else {
                return Err(Error::parse("unterminated string", start));
            };
            let end = self.position + offset;
            if !flags.control_chars {
                if let Some(idx) = rest[..offset].iter().position(|b| *b < 0x20) {
                    self.advance_to(self.position + idx);
                    return Err(self.error("control character in string"));
                }
            }
            out.push_str(&self.input[self.position..end]);
            self.advance_to(end);

            if bytes[end] == quote {
                self.bump();
                return Ok(out);
            }
            self.scan_escape(&mut out, quote, flags, start)?;
        }
    }

    fn scan_escape(
        &mut self,
        out: &mut String,
        quote: u8,
        flags: StringFlags,
        string_start: Location,
    ) -> Result<()> {
        let escape_start = self.location();
        self.bump();
        let Some(byte) = self.peek() else {
            return Err(Error::parse("unterminated string", string_start));
        };
        let decoded = match byte {
            b'"' => '"',
            b'\'' if quote == b'\'' || flags.single_quote_escape => '\'',
            b'\\' => '\\',
            b'/' => '/',
            b'b' => '\u{08}',
            b'f' => '\u{0c}',
            b'n' => '\n',
            b'r' => '\r',
            b't' => '\t',
            b'u' => {
                self.bump();
                return self.scan_unicode_escape(out, flags, escape_start);
            }
            _ => {
                let shown = self.peek_char().unwrap_or('?');
                return Err(Error::parse(
                    format!("invalid escape sequence '\\{shown}'"),
                    escape_start,
                ));
            }
        };
        self.bump();
        out.push(decoded);
        Ok(())
    }

    fn scan_unicode_escape(
        &mut self,
        out: &mut String,
        flags: StringFlags,
        escape_start: Location,
    ) -> Result<()> {
        let unit = self.scan_hex4(escape_start)?;
        let ch = match unit {
            0xD800..=0xDBFF => {
                if self.peek() == Some(b'\\') && self.peek_at(1) == Some(b'u') {
                    let checkpoint = (self.position, self.column);
                    self.skip_ascii(2);
                    let low = self.scan_hex4(escape_start)?;
                    if (0xDC00..=0xDFFF).contains(&low) {
                        let combined =
                            0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
                        char::from_u32(combined)
                    } else {
                        (self.position, self.column) = checkpoint;
                        None
                    }
                } else {
                    None
                }
            }
            0xDC00..=0xDFFF => None,
            _ => char::from_u32(u32::from(unit)),
        };
        match ch {
            Some(ch) => out.push(ch),
            None if flags.lone_surrogates => out.push(char::REPLACEMENT_CHARACTER),
            None => {
                return Err(Error::parse(
                    "lone surrogate in \\u escape",
                    escape_start,
                ))
            }
        }
        Ok(())
    }

    fn scan_hex4(&mut self, escape_start: Location) -> Result<u16> {
        let digits = self
            .bytes
            .get(self.position..self.position + 4)
            .filter(|digits| digits.iter().all(u8::is_ascii_hexdigit))
            .ok_or_else(|| Error::parse("invalid \\u escape", escape_start))?;
        let unit = digits.iter().fold(0u16, |acc, digit| {
            let nibble = (*digit as char).to_digit(16).unwrap_or(0) as u16;
            (acc << 4) | nibble
        });
        self.skip_ascii(4);
        Ok(unit)
    }

    /// Scans a number following the JSON number grammar.
    pub fn scan_number(&mut self) -> Result<Number> {
        let start = self.location();
        let begin = self.position;
        if self.peek() == Some(b'-') {
            self.bump();
        }
        match self.peek() {
            Some(b'0') => {
                self.bump();
                if matches!(self.peek(), Some(b'0'..=b'9')) {
                    return Err(self.error("leading zeros are not allowed"));
                }
            }
            Some(b'1'..=b'9') => self.skip_digits(),
            _ => return Err(self.error("expected digit")),
        }

        let mut integer = true;
        if self.peek() == Some(b'.') {
            self.bump();
            integer = false;
            if !matches!(self.peek(), Some(b'0'..=b'9')) {
                return Err(self.error("expected digit after decimal point"));
            }
            self.skip_digits();
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            self.bump();
            integer = false;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.bump();
            }
            if !matches!(self.peek(), Some(b'0'..=b'9')) {
                return Err(self.error("expected digit in exponent"));
            }
            self.skip_digits();
        }

        let text = &self.input[begin..self.position];
        parse_number(text, integer).ok_or_else(|| Error::parse("number out of range", start))
    }

    fn skip_digits(&mut self) {
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.bump();
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StringFlags {
    pub control_chars: bool,
    pub lone_surrogates: bool,
    pub single_quote_escape: bool,
}

fn char_count(bytes: &[u8]) -> usize {
    bytes.iter().filter(|byte| (**byte & 0xC0) != 0x80).count()
}

/// Computes the location of byte `offset` within `input`.
pub fn location_of(input: &str, offset: usize) -> Location {
    let mut scanner = Scanner::new(input);
    let offset = offset.clamp(scanner.position, input.len());
    scanner.advance_to(offset);
    scanner.location()
}
