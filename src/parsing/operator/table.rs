
use super::Operator;

use phf::phf_map;

/// Every operator the evaluator knows how to apply, indexed by the
/// symbol shown on its key.
static RECOGNIZED_OPERATORS: phf::Map<char, Operator> = phf_map! {
  '+' => Operator::Plus,
  '-' => Operator::Minus,
  '*' => Operator::Times,
  '/' => Operator::Divide,
  '%' => Operator::Modulo,
};

/// Looks up a recognized operator by its symbol.
pub fn lookup(symbol: char) -> Option<Operator> {
  RECOGNIZED_OPERATORS.get(&symbol).copied()
}

pub fn is_recognized_symbol(symbol: char) -> bool {
  RECOGNIZED_OPERATORS.contains_key(&symbol)
}

/// Iterates over the recognized operators, in no particular order.
pub fn recognized_operators() -> impl Iterator<Item = Operator> {
  RECOGNIZED_OPERATORS.values().copied()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_lookup_known_symbols() {
    assert_eq!(lookup('+'), Some(Operator::Plus));
    assert_eq!(lookup('%'), Some(Operator::Modulo));
    assert_eq!(lookup('='), None);
    assert_eq!(lookup('^'), None);
  }

  #[test]
  fn test_table_agrees_with_symbols() {
    let mut count = 0;
    for op in recognized_operators() {
      assert_eq!(lookup(op.symbol()), Some(op));
      assert!(is_recognized_symbol(op.symbol()));
      count += 1;
    }
    assert_eq!(count, 5);
  }
}
