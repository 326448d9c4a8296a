use std::fmt;

/// A JSON number: an unsigned integer, a negative integer, or a finite float.
/// Non-negative integers are always stored unsigned so equality is structural.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Number {
    pub(crate) n: N,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum N {
    PosInt(u64),
    NegInt(i64),
    Float(f64),
}

impl Number {
    pub fn from_f64(f: f64) -> Option<Self> {
        if f.is_finite() {
            Some(Number { n: N::Float(f) })
        } else {
            None
        }
    }

    pub fn is_i64(&self) -> bool {
        match self.n {
            N::NegInt(_) => true,
            N::PosInt(u) => u <= i64::MAX as u64,
            N::Float(_) => false,
        }
    }

    pub fn is_u64(&self) -> bool {
        matches!(self.n, N::PosInt(_))
    }

    pub fn is_f64(&self) -> bool {
        matches!(self.n, N::Float(_))
    }

    pub fn is_integer(&self) -> bool {
        match self.n {
            N::PosInt(_) | N::NegInt(_) => true,
            N::Float(f) => f.fract() == 0.0,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self.n {
            N::PosInt(u) => i64::try_from(u).ok(),
            N::NegInt(i) => Some(i),
            N::Float(f) => {
                let i = f as i64;
                if i as f64 == f && i != i64::MAX {
                    Some(i)
                } else {
                    None
                }
            }
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self.n {
            N::PosInt(u) => Some(u),
            N::NegInt(_) => None,
            N::Float(f) => {
                if f >= 0.0 {
                    let u = f as u64;
                    if u as f64 == f && u != u64::MAX {
                        Some(u)
                    } else {
                        None
                    }
                } else {
                    None
                }
            }
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self.n {
            N::PosInt(u) => Some(u as f64),
            N::NegInt(i) => Some(i as f64),
            N::Float(f) => Some(f),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        crate::num::number::push_number(&mut out, self);
        f.write_str(&out)
    }
}

macro_rules! from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(n: $ty) -> Self {
                    Number { n: N::PosInt(n as u64) }
                }
            }
        )*
    };
}

macro_rules! from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(n: $ty) -> Self {
                    let n = n as i64;
                    if n >= 0 {
                        Number { n: N::PosInt(n as u64) }
                    } else {
                        Number { n: N::NegInt(n) }
                    }
                }
            }
        )*
    };
}

from_unsigned!(u8, u16, u32, u64, usize);
from_signed!(i8, i16, i32, i64, isize);

impl From<&serde_json::Number> for Number {
    fn from(number: &serde_json::Number) -> Self {
        if let Some(u) = number.as_u64() {
            Number::from(u)
        } else if let Some(i) = number.as_i64() {
            Number::from(i)
        } else {
            // serde_json never stores a non-finite float
            Number {
                n: N::Float(number.as_f64().unwrap_or(0.0)),
            }
        }
    }
}

impl From<Number> for serde_json::Number {
    fn from(number: Number) -> Self {
        match number.n {
            N::PosInt(u) => serde_json::Number::from(u),
            N::NegInt(i) => serde_json::Number::from(i),
            N::Float(f) => {
                serde_json::Number::from_f64(f).unwrap_or_else(|| serde_json::Number::from(0))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Number, N};

    #[rstest::rstest]
    fn test_from_f64_rejects_non_finite() {
        assert!(Number::from_f64(f64::NAN).is_none());
        assert!(Number::from_f64(f64::INFINITY).is_none());
        assert!(Number::from_f64(f64::NEG_INFINITY).is_none());
        assert!(Number::from_f64(1.5).is_some());
    }

    #[rstest::rstest]
    fn test_signed_zero_and_positive_are_unsigned() {
        assert_eq!(Number::from(0i64).n, N::PosInt(0));
        assert_eq!(Number::from(7i32).n, N::PosInt(7));
        assert_eq!(Number::from(-7i32).n, N::NegInt(-7));
        assert_eq!(Number::from(7i32), Number::from(7u8));
    }

    #[rstest::rstest]
    fn test_integer_conversions() {
        let too_large = Number::from(i64::MAX as u64 + 1);
        assert!(!too_large.is_i64());
        assert_eq!(too_large.as_i64(), None);
        assert_eq!(too_large.as_u64(), Some(i64::MAX as u64 + 1));

        let neg = Number::from(-5i64);
        assert_eq!(neg.as_u64(), None);
        assert_eq!(neg.as_f64(), Some(-5.0));

        let exact = Number::from_f64(7.0).unwrap();
        assert!(exact.is_integer());
        assert_eq!(exact.as_i64(), Some(7));
        assert_eq!(exact.as_u64(), Some(7));

        let frac = Number::from_f64(7.25).unwrap();
        assert!(!frac.is_integer());
        assert_eq!(frac.as_i64(), None);
    }

    #[rstest::rstest]
    fn test_display() {
        assert_eq!(Number::from(1u8).to_string(), "1");
        assert_eq!(Number::from(-42i64).to_string(), "-42");
        assert_eq!(Number::from_f64(2.5).unwrap().to_string(), "2.5");
        assert_eq!(Number::from_f64(1.0).unwrap().to_string(), "1.0");
    }

    #[rstest::rstest]
    fn test_serde_json_number_conversion() {
        let number = serde_json::Number::from(-3);
        assert_eq!(Number::from(&number), Number::from(-3i64));

        let back: serde_json::Number = Number::from_f64(0.5).unwrap().into();
        assert_eq!(back.as_f64(), Some(0.5));
    }
}
