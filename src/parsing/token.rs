
//! Tokens shared by the converter and the evaluator.

use super::operator::Operator;

use itertools::Itertools;
use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};

/// A single element of an infix or postfix sequence.
///
/// On the wire, numbers are bare JSON numbers and operators are
/// one-character strings, so `[3, "+", 4]` is a valid sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Token {
  Number(f64),
  Operator(Operator),
}

impl Token {
  pub fn is_number(&self) -> bool {
    matches!(self, Token::Number(_))
  }

  pub fn is_operator(&self) -> bool {
    matches!(self, Token::Operator(_))
  }

  pub fn as_number(&self) -> Option<f64> {
    match self {
      Token::Number(n) => Some(*n),
      Token::Operator(_) => None,
    }
  }

  pub fn as_operator(&self) -> Option<Operator> {
    match self {
      Token::Number(_) => None,
      Token::Operator(op) => Some(*op),
    }
  }
}

impl From<f64> for Token {
  fn from(n: f64) -> Self {
    Token::Number(n)
  }
}

impl From<i32> for Token {
  fn from(n: i32) -> Self {
    Token::Number(f64::from(n))
  }
}

impl From<Operator> for Token {
  fn from(op: Operator) -> Self {
    Token::Operator(op)
  }
}

impl Display for Token {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Token::Number(n) => write!(f, "{}", n),
      Token::Operator(op) => write!(f, "{}", op),
    }
  }
}

/// Renders a sequence the way the keypad display shows it: every
/// token concatenated, with no separators.
pub fn to_display_string<'a>(tokens: impl IntoIterator<Item = &'a Token>) -> String {
  tokens.into_iter().join("")
}
