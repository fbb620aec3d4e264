
/// The precedence of an operator. Higher values bind more tightly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precedence(u64);

impl Precedence {
  /// Below every recognized operator. Symbols we don't know how to
  /// evaluate sit here, so they flush everything pending on the
  /// operator stack.
  pub const MIN: Precedence = Precedence(0);

  // Note: We borrow the Emacs Calc values for these two levels.
  pub const ADDITIVE: Precedence = Precedence(180);
  pub const MULTIPLICATIVE: Precedence = Precedence(190);

  pub const fn new(n: u64) -> Precedence {
    Precedence(n)
  }

  pub const fn value(self) -> u64 {
    self.0
  }
}

impl From<u64> for Precedence {
  fn from(n: u64) -> Precedence {
    Precedence::new(n)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_precedence_ordering() {
    assert!(Precedence::MIN < Precedence::ADDITIVE);
    assert!(Precedence::ADDITIVE < Precedence::MULTIPLICATIVE);
  }

  #[test]
  fn test_precedence_from_raw_value() {
    assert_eq!(Precedence::from(190), Precedence::MULTIPLICATIVE);
    assert_eq!(Precedence::ADDITIVE.value(), 180);
  }
}
