pub mod decode;
pub mod encode;
pub mod error;
pub mod loader;
mod num;
pub mod options;
pub mod text;
pub mod types;

use std::io::{Read, Write};

use serde::de::DeserializeOwned;
use serde::Serialize;

pub use crate::error::{Error, ErrorKind, Location};
pub use crate::loader::{print_field, write_field, Document, SAMPLE_DOCUMENT};
pub use crate::options::{
    DuplicateKeys, Indent, ParseOptions, WriteOptions, DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT,
};
pub use crate::types::{Map, Number, Value};

pub type Result<T> = std::result::Result<T, Error>;

/// Parses lenient JSON text into a [`Value`].
pub fn parse(input: &str) -> Result<Value> {
    parse_with_options(input, &ParseOptions::default())
}

pub fn parse_with_options(input: &str, options: &ParseOptions) -> Result<Value> {
    decode::parse_str(input, options)
}

pub fn from_str<T: DeserializeOwned>(input: &str) -> Result<T> {
    from_str_with_options(input, &ParseOptions::default())
}

pub fn from_str_with_options<T: DeserializeOwned>(
    input: &str,
    options: &ParseOptions,
) -> Result<T> {
    decode::from_str(input, options)
}

pub fn from_slice<T: DeserializeOwned>(input: &[u8]) -> Result<T> {
    from_slice_with_options(input, &ParseOptions::default())
}

pub fn from_slice_with_options<T: DeserializeOwned>(
    input: &[u8],
    options: &ParseOptions,
) -> Result<T> {
    decode::from_slice(input, options)
}

pub fn from_reader<T: DeserializeOwned, R: Read>(reader: R) -> Result<T> {
    from_reader_with_options(reader, &ParseOptions::default())
}

pub fn from_reader_with_options<T: DeserializeOwned, R: Read>(
    reader: R,
    options: &ParseOptions,
) -> Result<T> {
    decode::from_reader(reader, options)
}

pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    decode::from_value(value)
}

pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    encode::to_value(value)
}

pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    to_string_with_options(value, &WriteOptions::default())
}

pub fn to_string_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    to_string_with_options(value, &WriteOptions::pretty())
}

pub fn to_string_with_options<T: Serialize + ?Sized>(
    value: &T,
    options: &WriteOptions,
) -> Result<String> {
    encode::to_string(value, options)
}

pub fn to_vec<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    to_vec_with_options(value, &WriteOptions::default())
}

pub fn to_vec_with_options<T: Serialize + ?Sized>(
    value: &T,
    options: &WriteOptions,
) -> Result<Vec<u8>> {
    encode::to_vec(value, options)
}

pub fn to_writer<T: Serialize + ?Sized, W: Write>(writer: W, value: &T) -> Result<()> {
    to_writer_with_options(writer, value, &WriteOptions::default())
}

pub fn to_writer_with_options<T: Serialize + ?Sized, W: Write>(
    writer: W,
    value: &T,
    options: &WriteOptions,
) -> Result<()> {
    encode::to_writer(writer, value, options)
}

pub fn validate_str(input: &str) -> Result<()> {
    validate_str_with_options(input, &ParseOptions::default())
}

pub fn validate_str_with_options(input: &str, options: &ParseOptions) -> Result<()> {
    decode::validate_str(input, options)
}
