
mod precedence;
mod table;

pub use precedence::Precedence;
pub use table::{lookup, is_recognized_symbol, recognized_operators};

use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};

/// A binary arithmetic operator, identified by the single symbol on
/// its key.
///
/// Symbols outside the recognized set are still representable, as
/// [`Operator::Unrecognized`]. They have the lowest possible
/// precedence and always evaluate to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "char", into = "char")]
pub enum Operator {
  Plus,
  Minus,
  Times,
  Divide,
  Modulo,
  Unrecognized(char),
}

impl Operator {
  /// The operator for the given symbol. Never fails: unknown symbols
  /// become [`Operator::Unrecognized`].
  pub fn from_symbol(symbol: char) -> Operator {
    lookup(symbol).unwrap_or(Operator::Unrecognized(symbol))
  }

  /// The symbol of the operator, as displayed to the user.
  pub fn symbol(self) -> char {
    match self {
      Operator::Plus => '+',
      Operator::Minus => '-',
      Operator::Times => '*',
      Operator::Divide => '/',
      Operator::Modulo => '%',
      Operator::Unrecognized(c) => c,
    }
  }

  pub fn precedence(self) -> Precedence {
    match self {
      Operator::Plus | Operator::Minus => Precedence::ADDITIVE,
      Operator::Times | Operator::Divide | Operator::Modulo => Precedence::MULTIPLICATIVE,
      Operator::Unrecognized(_) => Precedence::MIN,
    }
  }

  pub fn is_recognized(self) -> bool {
    !matches!(self, Operator::Unrecognized(_))
  }

  /// Applies the operator with IEEE 754 semantics. Division by zero
  /// produces an infinity or NaN, and `%` is the remainder with the
  /// sign of `left`.
  pub fn apply(self, left: f64, right: f64) -> f64 {
    match self {
      Operator::Plus => left + right,
      Operator::Minus => left - right,
      Operator::Times => left * right,
      Operator::Divide => left / right,
      Operator::Modulo => left % right,
      Operator::Unrecognized(_) => 0.0,
    }
  }
}

impl From<char> for Operator {
  fn from(symbol: char) -> Operator {
    Operator::from_symbol(symbol)
  }
}

impl From<Operator> for char {
  fn from(op: Operator) -> char {
    op.symbol()
  }
}

impl Display for Operator {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_from_symbol() {
    assert_eq!(Operator::from_symbol('*'), Operator::Times);
    assert_eq!(Operator::from_symbol('='), Operator::Unrecognized('='));
    assert!(!Operator::from_symbol('^').is_recognized());
  }

  #[test]
  fn test_multiplicative_binds_tighter() {
    assert!(Operator::Times.precedence() > Operator::Plus.precedence());
    assert_eq!(Operator::Divide.precedence(), Operator::Modulo.precedence());
    assert_eq!(Operator::Plus.precedence(), Operator::Minus.precedence());
    assert_eq!(Operator::Unrecognized('=').precedence(), Precedence::MIN);
  }

  #[test]
  fn test_apply() {
    assert_eq!(Operator::Plus.apply(3.0, 4.0), 7.0);
    assert_eq!(Operator::Minus.apply(3.0, 4.0), -1.0);
    assert_eq!(Operator::Times.apply(3.0, 4.0), 12.0);
    assert_eq!(Operator::Divide.apply(3.0, 4.0), 0.75);
    assert_eq!(Operator::Modulo.apply(10.0, 3.0), 1.0);
    assert_eq!(Operator::Modulo.apply(-10.0, 3.0), -1.0);
    assert_eq!(Operator::Unrecognized('^').apply(2.0, 3.0), 0.0);
  }

  #[test]
  fn test_divide_by_zero() {
    assert_eq!(Operator::Divide.apply(1.0, 0.0), f64::INFINITY);
    assert_eq!(Operator::Divide.apply(-1.0, 0.0), f64::NEG_INFINITY);
    assert!(Operator::Divide.apply(0.0, 0.0).is_nan());
    assert!(Operator::Modulo.apply(1.0, 0.0).is_nan());
  }

  #[test]
  fn test_serialize_as_symbol() {
    assert_eq!(serde_json::to_string(&Operator::Modulo).unwrap(), r#""%""#);
    let op: Operator = serde_json::from_str(r#""/""#).unwrap();
    assert_eq!(op, Operator::Divide);
    let op: Operator = serde_json::from_str(r#""=""#).unwrap();
    assert_eq!(op, Operator::Unrecognized('='));
  }
}
