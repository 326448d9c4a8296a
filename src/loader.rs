//! Loading a keyed document, reading fields back and printing them.
//!
//! ```
//! use lenient_json::{Document, SAMPLE_DOCUMENT};
//!
//! let doc = Document::parse(SAMPLE_DOCUMENT).unwrap();
//! assert_eq!(doc.get("some").as_str(), Some("value"));
//! assert!(doc.get("missing").is_null());
//! ```

use std::fmt;
use std::io::{self, Write};
use std::ops::Index;
use std::str::FromStr;

use crate::decode;
use crate::encode::map_to_string;
use crate::types::value::NULL;
use crate::types::{Map, Value};
use crate::{Error, ParseOptions, Result, WriteOptions};

/// The built-in single-quoted object the CLI loads when given no input.
pub const SAMPLE_DOCUMENT: &str = "{'some':'value','another':1}";

/// A parsed document whose root is an object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    root: Map,
}

impl Document {
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with_options(text, &ParseOptions::default())
    }

    pub fn parse_with_options(text: &str, options: &ParseOptions) -> Result<Self> {
        match decode::parse_root(text, options)? {
            (_, Value::Object(root)) => Ok(Self { root }),
            (start, other) => Err(Error::parse(
                format!(
                    "expected object at document root, found {}",
                    other.type_name()
                ),
                start,
            )),
        }
    }

    pub fn parse_slice(input: &[u8], options: &ParseOptions) -> Result<Self> {
        Self::parse_with_options(decode::utf8(input)?, options)
    }

    /// Returns the value under `key`, or null when the key is absent.
    pub fn get(&self, key: &str) -> &Value {
        match self.root.get(key) {
            Some(value) => value,
            None => {
                tracing::trace!(key, "key not present, reading as null");
                &NULL
            }
        }
    }

    pub fn lookup(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.root.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.root.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    pub fn as_map(&self) -> &Map {
        &self.root
    }

    pub fn into_map(self) -> Map {
        self.root
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.root)
    }

    pub fn to_json_string(&self, options: &WriteOptions) -> String {
        map_to_string(&self.root, options)
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Index<&str> for Document {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.get(key)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json_string(&WriteOptions::pretty()))
    }
}

/// Writes `<label>: <value>` and a newline using the value's default string
/// conversion.
pub fn write_field<W: Write + ?Sized>(writer: &mut W, label: &str, value: &Value) -> Result<()> {
    writeln!(writer, "{label}: {value}").map_err(|err| Error::io(format!("write failed: {err}")))
}

pub fn print_field(label: &str, value: &Value) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_field(&mut handle, label, value)
}

#[cfg(test)]
mod tests {
    use super::{write_field, Document, SAMPLE_DOCUMENT};
    use crate::{ParseOptions, Value};

    fn render(label: &str, value: &Value) -> String {
        let mut out = Vec::new();
        write_field(&mut out, label, value).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[rstest::rstest]
    fn test_sample_document_fields() {
        let doc: Document = SAMPLE_DOCUMENT.parse().unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.keys().collect::<Vec<_>>(), ["some", "another"]);
        assert_eq!(doc["some"], "value");
        assert_eq!(doc.get("another").as_u64(), Some(1));
        assert!(doc.get("missing").is_null());
        assert!(doc.lookup("missing").is_none());
        assert!(doc.contains_key("another"));
    }

    #[rstest::rstest]
    fn test_write_field() {
        let doc = Document::parse(SAMPLE_DOCUMENT).unwrap();
        assert_eq!(render("Some", doc.get("some")), "Some: value\n");
        assert_eq!(render("Another", doc.get("another")), "Another: 1\n");
        assert_eq!(render("Missing", doc.get("missing")), "Missing: \n");
    }

    #[rstest::rstest]
    fn test_root_must_be_object() {
        let err = Document::parse("  [1, 2]").unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected object at document root, found array at line 1, column 3"
        );
    }

    #[rstest::rstest]
    fn test_strict_rejects_sample() {
        let err = Document::parse_with_options(SAMPLE_DOCUMENT, &ParseOptions::strict())
            .unwrap_err();
        assert_eq!(err.message, "expected double-quoted object key");
        assert_eq!(err.location.map(|l| l.column), Some(2));
    }

    #[rstest::rstest]
    fn test_display_is_pretty_json() {
        let doc = Document::parse(SAMPLE_DOCUMENT).unwrap();
        assert_eq!(
            doc.to_string(),
            "{\n  \"some\": \"value\",\n  \"another\": 1\n}"
        );
    }
}
