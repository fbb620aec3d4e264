
//! Tokens, operators, and infix-to-postfix conversion.

pub mod operator;
pub mod shunting_yard;
pub mod source;
pub mod token;
pub mod tokenizer;

pub use operator::{Operator, Precedence};
pub use shunting_yard::convert;
pub use token::Token;
pub use tokenizer::{tokenize, TokenizerError};
