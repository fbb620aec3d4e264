
//! The operand stack used during evaluation.

mod error;
mod structure;

pub use error::StackError;
pub use structure::Stack;
