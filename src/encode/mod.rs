mod writer;

use std::io::Write;

use serde::Serialize;

use crate::types::{Map, Value};
use crate::{Error, Result, WriteOptions};

use writer::JsonWriter;

pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    serde_json::to_value(value)
        .map(Value::from)
        .map_err(|err| Error::serialize(format!("serialize failed: {err}")))
}

pub fn to_string<T: Serialize + ?Sized>(value: &T, options: &WriteOptions) -> Result<String> {
    let value = to_value(value)?;
    Ok(value_to_string(&value, options))
}

pub fn to_vec<T: Serialize + ?Sized>(value: &T, options: &WriteOptions) -> Result<Vec<u8>> {
    to_string(value, options).map(String::into_bytes)
}

pub fn to_writer<T: Serialize + ?Sized, W: Write>(
    mut writer: W,
    value: &T,
    options: &WriteOptions,
) -> Result<()> {
    let out = to_string(value, options)?;
    writer
        .write_all(out.as_bytes())
        .map_err(|err| Error::io(format!("write failed: {err}")))
}

pub fn value_to_string(value: &Value, options: &WriteOptions) -> String {
    let mut writer = JsonWriter::new(options);
    writer.write_value(value, 0);
    writer.finish()
}

pub fn map_to_string(map: &Map, options: &WriteOptions) -> String {
    let mut writer = JsonWriter::new(options);
    writer.write_map(map, 0);
    writer.finish()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde::Serialize;

    use super::{to_string, to_vec, to_writer};
    use crate::WriteOptions;

    #[derive(Serialize)]
    struct Pair<'a> {
        some: &'a str,
        another: i32,
        tags: Vec<&'a str>,
    }

    #[rstest::rstest]
    fn test_serialize_struct() {
        let pair = Pair {
            some: "value",
            another: 1,
            tags: vec!["x"],
        };
        assert_eq!(
            to_string(&pair, &WriteOptions::default()).unwrap(),
            r#"{"some":"value","another":1,"tags":["x"]}"#
        );
        assert_eq!(
            to_vec(&pair, &WriteOptions::default()).unwrap(),
            br#"{"some":"value","another":1,"tags":["x"]}"#.to_vec()
        );
    }

    #[rstest::rstest]
    fn test_to_writer_pretty() {
        let mut map = BTreeMap::new();
        map.insert("k", vec![1, 2]);
        let mut out = Vec::new();
        to_writer(&mut out, &map, &WriteOptions::pretty()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\n  \"k\": [\n    1,\n    2\n  ]\n}"
        );
    }

    #[rstest::rstest]
    fn test_non_string_keys_fail_to_serialize() {
        let mut map = BTreeMap::new();
        map.insert(vec![1u8], 1);
        let err = to_string(&map, &WriteOptions::default()).unwrap_err();
        assert_eq!(err.kind, crate::ErrorKind::Serialize);
    }
}
