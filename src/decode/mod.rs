mod parser;
mod scanner;

use std::io::Read;

use serde::de::DeserializeOwned;

use crate::types::Value;
use crate::{Error, Location, ParseOptions, Result};

pub use parser::Parser;
pub(crate) use scanner::location_of;

pub fn parse_str(input: &str, options: &ParseOptions) -> Result<Value> {
    parse_root(input, options).map(|(_, value)| value)
}

/// Like [`parse_str`], also returning where the root value starts.
pub fn parse_root(input: &str, options: &ParseOptions) -> Result<(Location, Value)> {
    let (start, value) = Parser::new(input, options).parse_document()?;
    tracing::debug!(
        bytes = input.len(),
        root = value.type_name(),
        grammar = options.grammar_name(),
        "parsed document"
    );
    Ok((start, value))
}

pub fn parse_slice(input: &[u8], options: &ParseOptions) -> Result<Value> {
    parse_str(utf8(input)?, options)
}

pub(crate) fn utf8(input: &[u8]) -> Result<&str> {
    std::str::from_utf8(input).map_err(|err| {
        let valid = err.valid_up_to();
        let location = std::str::from_utf8(&input[..valid])
            .map(|prefix| location_of(prefix, valid))
            .unwrap_or(Location {
                offset: valid,
                line: 1,
                column: 1,
            });
        Error::parse(format!("invalid utf-8: {err}"), location)
    })
}

pub fn parse_reader<R: Read>(mut reader: R, options: &ParseOptions) -> Result<Value> {
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|err| Error::io(format!("read failed: {err}")))?;
    parse_slice(&buf, options)
}

pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value.into())
        .map_err(|err| Error::deserialize(format!("deserialize failed: {err}")))
}

pub fn from_str<T: DeserializeOwned>(input: &str, options: &ParseOptions) -> Result<T> {
    from_value(parse_str(input, options)?)
}

pub fn from_slice<T: DeserializeOwned>(input: &[u8], options: &ParseOptions) -> Result<T> {
    from_value(parse_slice(input, options)?)
}

pub fn from_reader<T: DeserializeOwned, R: Read>(reader: R, options: &ParseOptions) -> Result<T> {
    from_value(parse_reader(reader, options)?)
}

pub fn validate_str(input: &str, options: &ParseOptions) -> Result<()> {
    Parser::new(input, options).parse_document().map(|_| ())
}
