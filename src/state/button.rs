
use crate::parsing::operator::{self, Operator};

use thiserror::Error;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A single decimal digit, 0 through 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

/// A key on the calculator keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
  Digit(Digit),
  Decimal,
  Operator(Operator),
  /// Removes the most recent keypress.
  Clear,
  /// Discards all input. Usually bound to a long press of the clear
  /// key.
  ClearAll,
  Equals,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ButtonParseError {
  #[error("No calculator button is labeled '{0}'")]
  UnknownLabel(String),
}

impl Digit {
  pub const ZERO: Digit = Digit(0);

  pub fn new(value: u8) -> Option<Digit> {
    (value < 10).then_some(Digit(value))
  }

  pub fn from_char(ch: char) -> Option<Digit> {
    // unwrap: to_digit(10) never exceeds 9.
    ch.to_digit(10).map(|d| Digit(u8::try_from(d).unwrap()))
  }

  pub fn value(self) -> u8 {
    self.0
  }

  pub fn into_char(self) -> char {
    char::from(b'0' + self.0)
  }
}

impl Display for Digit {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.into_char())
  }
}

impl Button {
  /// The label printed on the key.
  pub fn label(self) -> char {
    match self {
      Button::Digit(d) => d.into_char(),
      Button::Decimal => '.',
      Button::Operator(op) => op.symbol(),
      Button::Clear => 'c',
      Button::ClearAll => 'C',
      Button::Equals => '=',
    }
  }
}

impl From<Digit> for Button {
  fn from(digit: Digit) -> Self {
    Button::Digit(digit)
  }
}

impl TryFrom<char> for Button {
  type Error = ButtonParseError;

  fn try_from(label: char) -> Result<Self, Self::Error> {
    if let Some(digit) = Digit::from_char(label) {
      return Ok(Button::Digit(digit));
    }
    match label {
      '.' => Ok(Button::Decimal),
      'c' => Ok(Button::Clear),
      'C' => Ok(Button::ClearAll),
      '=' => Ok(Button::Equals),
      _ => operator::lookup(label)
        .map(Button::Operator)
        .ok_or_else(|| ButtonParseError::UnknownLabel(label.to_string())),
    }
  }
}

impl FromStr for Button {
  type Err = ButtonParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
      (Some(label), None) => Button::try_from(label),
      _ => Err(ButtonParseError::UnknownLabel(s.to_owned())),
    }
  }
}

impl Display for Button {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.label())
  }
}
