pub mod number;
mod serde_impl;
pub mod value;

pub use number::Number;
pub use value::{Map, Value};
