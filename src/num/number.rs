use crate::types::number::{Number, N};

pub(crate) fn push_number(out: &mut String, number: &Number) {
    match number.n {
        N::PosInt(value) => {
            let mut buffer = itoa::Buffer::new();
            out.push_str(buffer.format(value));
        }
        N::NegInt(value) => {
            let mut buffer = itoa::Buffer::new();
            out.push_str(buffer.format(value));
        }
        N::Float(value) => push_f64(out, value),
    }
}

fn push_f64(out: &mut String, value: f64) {
    if !value.is_finite() {
        out.push_str("null");
        return;
    }
    let mut buffer = ryu::Buffer::new();
    out.push_str(buffer.format_finite(value));
}

/// Converts number text already validated against the JSON number grammar.
/// Returns `None` when the value does not fit a finite `f64`.
pub(crate) fn parse_number(text: &str, integer: bool) -> Option<Number> {
    if integer {
        if text.starts_with('-') {
            if let Ok(value) = text.parse::<i64>() {
                return Some(Number::from(value));
            }
        } else if let Ok(value) = text.parse::<u64>() {
            return Some(Number::from(value));
        }
    }
    let value: f64 = text.parse().ok()?;
    Number::from_f64(value)
}
