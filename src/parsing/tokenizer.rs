
//! Tokenizer for typed expressions, such as `3 + 4*2` or `-5 % 3`.
//!
//! This reads back the same notation the keypad display produces.

use super::operator::Operator;
use super::source::SourceOffset;
use super::token::Token;

use regex::Regex;
use once_cell::sync::Lazy;
use thiserror::Error;

use std::num::ParseFloatError;

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^(?:\d+(?:\.\d*)?|\.\d+)").unwrap()
});

/// A number with an optional leading minus sign. Only tried where an
/// operand is expected, so that `5-3` still reads as subtraction.
static SIGNED_NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^-?(?:\d+(?:\.\d*)?|\.\d+)").unwrap()
});

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*").unwrap());

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum TokenizerError {
  #[error("Unexpected character '{character}' at position {position}")]
  UnexpectedCharacter {
    character: char,
    position: SourceOffset,
  },
  #[error("Invalid number '{text}' at position {position}")]
  InvalidNumber {
    text: String,
    position: SourceOffset,
    #[source]
    source: ParseFloatError,
  },
}

#[derive(Debug, Clone)]
struct TokenizerState<'a> {
  input: &'a str,
  position: SourceOffset,
}

impl<'a> TokenizerState<'a> {
  fn new(input: &'a str) -> Self {
    Self { input, position: SourceOffset(0) }
  }

  fn peek(&self) -> Option<char> {
    self.input.chars().next()
  }

  fn current_pos(&self) -> SourceOffset {
    self.position
  }

  /// Advances by `amount` bytes, never beyond the end of the input.
  fn advance(&mut self, amount: usize) {
    let amount = amount.min(self.input.len());
    self.input = &self.input[amount..];
    self.position += amount;
  }

  /// If the current position matches the given regex, returns the
  /// matched string and advances past it. The regex MUST be anchored
  /// at the start of the input.
  fn read_regex(&mut self, regex: &Regex) -> Option<&'a str> {
    let input = self.input;
    let m = regex.find(input)?;
    debug_assert_eq!(m.start(), 0, "Regex must be anchored at the start of the input");
    self.advance(m.end());
    Some(&input[..m.end()])
  }

  fn consume_spaces(&mut self) {
    self.read_regex(&WHITESPACE_RE);
  }
}

/// Splits typed text into tokens.
///
/// A `-` that appears where an operand is expected (at the very start,
/// or right after an operator) and is immediately followed by a
/// number is read as part of that number. Any other ASCII punctuation
/// character becomes an operator token, recognized or not.
pub fn tokenize(input: &str) -> Result<Vec<Token>, TokenizerError> {
  let mut state = TokenizerState::new(input);
  let mut tokens = Vec::new();
  state.consume_spaces();
  while let Some(next_char) = state.peek() {
    let start = state.current_pos();
    let number_re = if expects_operand(&tokens) { &SIGNED_NUMBER_RE } else { &NUMBER_RE };
    if let Some(text) = state.read_regex(number_re) {
      let value = text.parse::<f64>().map_err(|source| TokenizerError::InvalidNumber {
        text: text.to_owned(),
        position: start,
        source,
      })?;
      tokens.push(Token::Number(value));
    } else if next_char.is_ascii_punctuation() {
      state.advance(next_char.len_utf8());
      tokens.push(Token::Operator(Operator::from_symbol(next_char)));
    } else {
      return Err(TokenizerError::UnexpectedCharacter { character: next_char, position: start });
    }
    state.consume_spaces();
  }
  Ok(tokens)
}

fn expects_operand(tokens: &[Token]) -> bool {
  tokens.last().map_or(true, Token::is_operator)
}
