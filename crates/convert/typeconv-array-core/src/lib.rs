//! typeconv-array-core: converts arbitrary runtime values into typed numeric arrays

pub mod array;
pub mod config;
pub mod element;
pub mod error;
pub mod numeric;
pub mod tokenize;

pub use array::{to_f64_array, ArrayConverter, DoubleArrayConverter};
pub use config::Config;
pub use element::{ElementConverter, StandardConverter};
pub use error::ConvertError;
pub use numeric::{Number, NumericElement, NumericType};
pub use tokenize::{split_tokens, Delimiters};
