use indexmap::map::Entry;

use super::scanner::{Scanner, StringFlags};
use crate::options::{DuplicateKeys, ParseOptions};
use crate::types::{Map, Value};
use crate::{Error, Location, Result};

/// Recursive-descent parser over a [`Scanner`].
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    options: &'a ParseOptions,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, options: &'a ParseOptions) -> Self {
        Self {
            scanner: Scanner::new(input),
            options,
            depth: 0,
        }
    }

    /// Parses a complete document and returns the root value together with
    /// the location where it starts.
    pub fn parse_document(mut self) -> Result<(Location, Value)> {
        self.skip_trivia()?;
        if self.scanner.is_eof() {
            return Err(self.scanner.error("unexpected end of input"));
        }
        let start = self.scanner.location();
        let value = self.parse_value()?;
        self.skip_trivia()?;
        if !self.scanner.is_eof() {
            return Err(self
                .scanner
                .error("unexpected trailing content after document"));
        }
        Ok((start, value))
    }

    fn skip_trivia(&mut self) -> Result<()> {
        self.scanner.skip_trivia(self.options.comments)
    }

    fn string_flags(&self) -> StringFlags {
        StringFlags {
            control_chars: self.options.control_chars_in_strings,
            lone_surrogates: self.options.lone_surrogates,
            single_quote_escape: self.options.single_quotes,
        }
    }

    fn parse_value(&mut self) -> Result<Value> {
        match self.scanner.peek() {
            None => Err(self.scanner.error("unexpected end of input")),
            Some(b'{') => self.parse_object().map(Value::Object),
            Some(b'[') => self.parse_array().map(Value::Array),
            Some(b'"') => self
                .scanner
                .scan_string(b'"', self.string_flags())
                .map(Value::String),
            Some(b'\'') if self.options.single_quotes => self
                .scanner
                .scan_string(b'\'', self.string_flags())
                .map(Value::String),
            Some(b'-' | b'0'..=b'9') => self.scanner.scan_number().map(Value::Number),
            Some(_) => self.parse_literal(),
        }
    }

    fn parse_literal(&mut self) -> Result<Value> {
        let start = self.scanner.location();
        match self.scanner.scan_word() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            "null" => Ok(Value::Null),
            "undefined" if self.options.undefined_literal => Ok(Value::Null),
            "" => {
                let ch = self.scanner.peek_char().unwrap_or('?');
                Err(Error::parse(format!("unexpected character {ch:?}"), start))
            }
            word => Err(Error::parse(format!("unexpected token '{word}'"), start)),
        }
    }

    fn enter(&mut self) -> Result<()> {
        let limit = self.options.depth_limit();
        if self.depth >= limit {
            return Err(self
                .scanner
                .error(format!("maximum nesting depth of {limit} exceeded")));
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_object(&mut self) -> Result<Map> {
        let open = self.scanner.location();
        self.enter()?;
        self.scanner.bump();
        let mut map = Map::new();
        let mut after_comma = false;
        loop {
            self.skip_trivia()?;
            match self.scanner.peek() {
                Some(b'}') => {
                    if after_comma && !self.options.trailing_commas {
                        return Err(self.scanner.error("trailing comma before '}'"));
                    }
                    self.scanner.bump();
                    break;
                }
                None => return Err(Error::parse("unterminated object", open)),
                _ => {}
            }

            let key_start = self.scanner.location();
            let key = self.parse_key()?;
            self.skip_trivia()?;
            if self.scanner.peek() != Some(b':') {
                return Err(self.scanner.error("expected ':' after object key"));
            }
            self.scanner.bump();
            self.skip_trivia()?;
            let value = self.parse_value()?;
            self.insert_entry(&mut map, key, value, key_start)?;

            self.skip_trivia()?;
            match self.scanner.peek() {
                Some(b',') => {
                    self.scanner.bump();
                    after_comma = true;
                }
                Some(b'}') => {
                    self.scanner.bump();
                    break;
                }
                None => return Err(Error::parse("unterminated object", open)),
                Some(_) => {
                    return Err(self.scanner.error("expected ',' or '}' after object entry"))
                }
            }
        }
        self.depth -= 1;
        Ok(map)
    }

    fn parse_key(&mut self) -> Result<String> {
        match self.scanner.peek() {
            Some(b'"') => self.scanner.scan_string(b'"', self.string_flags()),
            Some(b'\'') if self.options.single_quotes => {
                self.scanner.scan_string(b'\'', self.string_flags())
            }
            _ if self.options.unquoted_keys => {
                let start = self.scanner.location();
                match self.scanner.scan_word() {
                    "" => Err(Error::parse("expected object key", start)),
                    word => Ok(word.to_string()),
                }
            }
            _ => Err(self.scanner.error("expected double-quoted object key")),
        }
    }

    fn insert_entry(
        &self,
        map: &mut Map,
        key: String,
        value: Value,
        key_start: Location,
    ) -> Result<()> {
        match map.entry(key) {
            Entry::Vacant(entry) => {
                entry.insert(value);
            }
            Entry::Occupied(mut entry) => match self.options.duplicate_keys {
                DuplicateKeys::Replace => {
                    tracing::debug!(key = %entry.key(), line = key_start.line, "duplicate key replaced");
                    entry.insert(value);
                }
                DuplicateKeys::Ignore => {
                    tracing::debug!(key = %entry.key(), line = key_start.line, "duplicate key ignored");
                }
                DuplicateKeys::Error => {
                    return Err(Error::parse(
                        format!("duplicate key '{}'", entry.key()),
                        key_start,
                    ));
                }
            },
        }
        Ok(())
    }

    fn parse_array(&mut self) -> Result<Vec<Value>> {
        let open = self.scanner.location();
        self.enter()?;
        self.scanner.bump();
        let mut items = Vec::new();
        let mut after_comma = false;
        loop {
            self.skip_trivia()?;
            match self.scanner.peek() {
                Some(b']') => {
                    if after_comma && !self.options.trailing_commas {
                        return Err(self.scanner.error("trailing comma before ']'"));
                    }
                    self.scanner.bump();
                    break;
                }
                None => return Err(Error::parse("unterminated array", open)),
                _ => {}
            }

            items.push(self.parse_value()?);

            self.skip_trivia()?;
            match self.scanner.peek() {
                Some(b',') => {
                    self.scanner.bump();
                    after_comma = true;
                }
                Some(b']') => {
                    self.scanner.bump();
                    break;
                }
                None => return Err(Error::parse("unterminated array", open)),
                Some(_) => {
                    return Err(self.scanner.error("expected ',' or ']' after array element"))
                }
            }
        }
        self.depth -= 1;
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::Parser;
    use crate::options::{DuplicateKeys, ParseOptions};
    use crate::types::Value;

    fn parse(input: &str, options: &ParseOptions) -> crate::Result<Value> {
        Parser::new(input, options)
            .parse_document()
            .map(|(_, value)| value)
    }

    #[rstest::rstest]
    fn test_sample_literal() {
        let value = parse("{'some':'value','another':1}", &ParseOptions::default()).unwrap();
        assert_eq!(value["some"], "value");
        assert_eq!(value["another"], 1i64);
        assert_eq!(value.as_object().unwrap().len(), 2);
    }

    #[rstest::rstest]
    fn test_root_location_skips_trivia() {
        let (start, _) = Parser::new("\n  /* c */ [1]", &ParseOptions::default())
            .parse_document()
            .unwrap();
        assert_eq!(start.line, 2);
        assert_eq!(start.column, 11);
    }

    #[rstest::rstest]
    fn test_duplicate_key_policies() {
        let input = "{\"a\": 1, \"b\": 2, \"a\": 3}";

        let replaced = parse(input, &ParseOptions::default()).unwrap();
        let keys: Vec<&str> = replaced
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(replaced["a"], 3i64);

        let ignored = parse(
            input,
            &ParseOptions::default().with_duplicate_keys(DuplicateKeys::Ignore),
        )
        .unwrap();
        assert_eq!(ignored["a"], 1i64);

        let err = parse(
            input,
            &ParseOptions::default().with_duplicate_keys(DuplicateKeys::Error),
        )
        .unwrap_err();
        assert_eq!(err.message, "duplicate key 'a'");
        assert_eq!(err.location.map(|l| l.column), Some(18));
    }

    #[rstest::rstest]
    fn test_max_depth() {
        let options = ParseOptions::default().with_max_depth(2);
        assert!(parse("[[1]]", &options).is_ok());
        let err = parse("[[[1]]]", &options).unwrap_err();
        assert_eq!(err.message, "maximum nesting depth of 2 exceeded");
        assert_eq!(err.location.map(|l| l.column), Some(3));
    }

    #[rstest::rstest]
    fn test_depth_is_released_between_siblings() {
        let options = ParseOptions::default().with_max_depth(2);
        assert!(parse("[[1], [2], {\"a\": [3]}]", &options).is_err());
        assert!(parse("[[1], [2], {\"a\": 3}]", &options).is_ok());
    }
}
