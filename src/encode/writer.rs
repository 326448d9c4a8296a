use crate::num::number::push_number;
use crate::options::WriteOptions;
use crate::text::string::push_quoted;
use crate::types::{Map, Value};

pub(crate) struct JsonWriter<'o> {
    out: String,
    options: &'o WriteOptions,
    indent: usize,
}

impl<'o> JsonWriter<'o> {
    pub(crate) fn new(options: &'o WriteOptions) -> Self {
        Self {
            out: String::new(),
            options,
            indent: options.indent.map_or(0, |indent| indent.width()),
        }
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }

    pub(crate) fn write_value(&mut self, value: &Value, depth: usize) {
        match value {
            Value::Null => self.out.push_str("null"),
            Value::Bool(true) => self.out.push_str("true"),
            Value::Bool(false) => self.out.push_str("false"),
            Value::Number(number) => push_number(&mut self.out, number),
            Value::String(s) => self.write_str(s),
            Value::Array(items) => self.write_array(items, depth),
            Value::Object(map) => self.write_map(map, depth),
        }
    }

    fn write_str(&mut self, value: &str) {
        push_quoted(&mut self.out, value, self.options.escape_non_ascii);
    }

    fn write_array(&mut self, items: &[Value], depth: usize) {
        if items.is_empty() {
            self.out.push_str("[]");
            return;
        }
        self.out.push('[');
        for (idx, item) in items.iter().enumerate() {
            if idx > 0 {
                self.out.push(',');
            }
            self.newline(depth + 1);
            self.write_value(item, depth + 1);
        }
        self.newline(depth);
        self.out.push(']');
    }

    pub(crate) fn write_map(&mut self, map: &Map, depth: usize) {
        if map.is_empty() {
            self.out.push_str("{}");
            return;
        }
        let mut entries: Vec<(&String, &Value)> = map.iter().collect();
        if self.options.sort_keys {
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        }
        self.out.push('{');
        for (idx, (key, value)) in entries.into_iter().enumerate() {
            if idx > 0 {
                self.out.push(',');
            }
            self.newline(depth + 1);
            self.write_str(key);
            self.out.push(':');
            if self.options.indent.is_some() {
                self.out.push(' ');
            }
            self.write_value(value, depth + 1);
        }
        self.newline(depth);
        self.out.push('}');
    }

    fn newline(&mut self, depth: usize) {
        if self.options.indent.is_none() {
            return;
        }
        self.out.push('\n');
        self.out
            .extend(std::iter::repeat(' ').take(depth * self.indent));
    }
}
