//! Shared models

mod column;
mod complex;
mod frame;
mod value;

pub use column::Column;
pub use complex::{Complex, ParseComplexError};
pub use frame::Frame;
pub use value::Value;
