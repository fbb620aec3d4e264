
use super::button::Digit;

use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
  Negative,
  #[default]
  Positive,
}

/// A number in the middle of being typed. Digits are stored with the
/// most significant digit first and only become an `f64` when the
/// value is requested, so typing never accumulates rounding error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
  sign: Sign,
  /// The digits to the left of the decimal point.
  whole: Vec<Digit>,
  /// The digits to the right of the decimal point, or `None` if the
  /// decimal point hasn't been pressed yet.
  fraction: Option<Vec<Digit>>,
}

impl Sign {
  pub fn other(self) -> Self {
    match self {
      Self::Negative => Self::Positive,
      Self::Positive => Self::Negative,
    }
  }
}

impl Entry {
  /// An entry with no digits typed yet.
  pub fn new(sign: Sign) -> Self {
    Self { sign, whole: Vec::new(), fraction: None }
  }

  pub fn sign(&self) -> Sign {
    self.sign
  }

  pub fn is_empty(&self) -> bool {
    self.whole.is_empty() && self.fraction.is_none()
  }

  pub fn has_decimal_point(&self) -> bool {
    self.fraction.is_some()
  }

  pub fn push_digit(&mut self, digit: Digit) {
    match &mut self.fraction {
      Some(fraction) => {
        fraction.push(digit);
      }
      None => {
        // A lone leading zero is replaced, not extended.
        if self.whole == [Digit::ZERO] {
          self.whole.clear();
        }
        self.whole.push(digit);
      }
    }
  }

  /// Starts the fractional part. Does nothing if it's already
  /// started.
  pub fn push_decimal_point(&mut self) {
    if self.fraction.is_none() {
      self.fraction = Some(Vec::new());
    }
  }

  /// Removes the most recently typed digit or decimal point.
  pub fn backspace(&mut self) {
    match &mut self.fraction {
      Some(fraction) => {
        if fraction.pop().is_none() {
          self.fraction = None;
        }
      }
      None => {
        self.whole.pop();
      }
    }
  }

  /// Drops a decimal point with no digits after it.
  pub fn finish(&mut self) {
    if self.fraction.as_ref().is_some_and(Vec::is_empty) {
      self.fraction = None;
    }
  }

  pub fn value(&self) -> f64 {
    let mut literal = String::new();
    if self.sign == Sign::Negative {
      literal.push('-');
    }
    if self.whole.is_empty() {
      literal.push('0');
    } else {
      literal.extend(self.whole.iter().map(|d| d.into_char()));
    }
    if let Some(fraction) = self.fraction.as_ref().filter(|f| !f.is_empty()) {
      literal.push('.');
      literal.extend(fraction.iter().map(|d| d.into_char()));
    }
    // unwrap: An optional sign, digits, and an optional point followed
    // by digits always form a valid float literal.
    literal.parse().unwrap()
  }
}

impl Display for Entry {
  /// Shows the entry as typed, including a trailing decimal point.
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    if self.sign == Sign::Negative {
      write!(f, "-")?;
    }
    if self.whole.is_empty() {
      write!(f, "0")?;
    } else {
      for digit in &self.whole {
        write!(f, "{}", digit)?;
      }
    }
    if let Some(fraction) = &self.fraction {
      write!(f, ".")?;
      for digit in fraction {
        write!(f, "{}", digit)?;
      }
    }
    Ok(())
  }
}
