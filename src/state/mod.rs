
//! Keypad input state.
//!
//! A [`CalculatorState`] is an immutable value. Each button press
//! produces a new state, leaving the old one untouched, so a caller
//! can keep the previous state around when evaluation fails.

mod button;
mod entry;

pub use button::{Button, ButtonParseError, Digit};
pub use entry::{Entry, Sign};

use crate::eval::{calculate_with, EvaluationError};
use crate::events::RefreshDisplayPayload;
use crate::parsing::{Operator, Token};
use crate::settings::CalculatorSettings;

use itertools::Itertools;
use tracing::{debug, trace};

use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculatorState {
  elements: Vec<Element>,
  /// Sign to give the first number of the expression. Toggled by
  /// pressing `-` on empty input.
  pending_sign: Sign,
}

#[derive(Debug, Clone, PartialEq)]
enum Element {
  /// A number still being typed.
  Entry(Entry),
  /// The result of the previous evaluation. Always the only element
  /// when present, until an operator is appended to it.
  Result(f64),
  Operator(Operator),
}

impl CalculatorState {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  pub fn pending_sign(&self) -> Sign {
    self.pending_sign
  }

  /// The evaluated result, if the state consists of nothing else.
  pub fn result(&self) -> Option<f64> {
    match self.elements.as_slice() {
      [Element::Result(value)] => Some(*value),
      _ => None,
    }
  }

  /// Presses a button with the default settings.
  pub fn press(&self, button: Button) -> Result<CalculatorState, EvaluationError> {
    self.press_with(button, &CalculatorSettings::default())
  }

  /// Returns the state after pressing `button`. Only
  /// [`Button::Equals`] can fail, in which case `self` is still the
  /// latest valid state.
  pub fn press_with(
    &self,
    button: Button,
    settings: &CalculatorSettings,
  ) -> Result<CalculatorState, EvaluationError> {
    trace!(%button, "button pressed");
    let mut next = self.clone();
    match button {
      Button::Digit(digit) => next.edit_entry(|entry| entry.push_digit(digit)),
      Button::Decimal => next.edit_entry(Entry::push_decimal_point),
      Button::Operator(op) => next.push_operator(op),
      Button::Clear => next.backspace(),
      Button::ClearAll => next = CalculatorState::new(),
      Button::Equals => next.evaluate(settings)?,
    }
    Ok(next)
  }

  /// Presses each button in turn with the default settings, stopping
  /// at the first failure.
  pub fn press_all<I>(&self, buttons: I) -> Result<CalculatorState, EvaluationError>
  where I: IntoIterator<Item = Button> {
    buttons.into_iter().try_fold(self.clone(), |state, button| state.press(button))
  }

  /// The infix sequence currently entered.
  pub fn tokens(&self) -> Vec<Token> {
    self.elements.iter().map(Element::to_token).collect()
  }

  /// The string shown on the calculator display.
  pub fn display(&self) -> String {
    if self.elements.is_empty() && self.pending_sign == Sign::Negative {
      return String::from("-");
    }
    self.elements.iter().join("")
  }

  pub fn refresh_payload(&self) -> RefreshDisplayPayload {
    RefreshDisplayPayload {
      display: self.display(),
      tokens: self.tokens(),
    }
  }

  /// Applies `edit` to the number being typed, starting a new one if
  /// necessary. Typing after a result starts a new expression.
  fn edit_entry<F>(&mut self, edit: F)
  where F: FnOnce(&mut Entry) {
    let mut entry = match self.elements.pop() {
      Some(Element::Entry(entry)) => entry,
      Some(Element::Operator(op)) => {
        self.elements.push(Element::Operator(op));
        Entry::new(Sign::Positive)
      }
      Some(Element::Result(_)) | None => {
        self.elements.clear();
        Entry::new(std::mem::take(&mut self.pending_sign))
      }
    };
    edit(&mut entry);
    self.elements.push(Element::Entry(entry));
  }

  fn push_operator(&mut self, op: Operator) {
    match self.elements.last_mut() {
      None if op == Operator::Minus => {
        self.pending_sign = self.pending_sign.other();
      }
      None => {
        debug!(%op, "ignoring operator with no operand");
      }
      Some(Element::Operator(last)) => {
        *last = op;
      }
      Some(Element::Entry(entry)) => {
        entry.finish();
        self.elements.push(Element::Operator(op));
      }
      Some(Element::Result(_)) => {
        self.elements.push(Element::Operator(op));
      }
    }
  }

  fn backspace(&mut self) {
    match self.elements.last_mut() {
      None => {
        self.pending_sign = Sign::Positive;
      }
      Some(Element::Entry(entry)) => {
        entry.backspace();
        if entry.is_empty() {
          let sign = entry.sign();
          self.elements.pop();
          if self.elements.is_empty() {
            self.pending_sign = sign;
          }
        }
      }
      Some(Element::Operator(_) | Element::Result(_)) => {
        self.elements.pop();
      }
    }
  }

  fn evaluate(&mut self, settings: &CalculatorSettings) -> Result<(), EvaluationError> {
    let result = if self.elements.is_empty() {
      0.0
    } else {
      calculate_with(self.tokens(), settings)?
    };
    debug!(result, "evaluated input");
    self.elements = vec![Element::Result(result)];
    self.pending_sign = Sign::Positive;
    Ok(())
  }
}

impl Element {
  fn to_token(&self) -> Token {
    match self {
      Element::Entry(entry) => Token::Number(entry.value()),
      Element::Result(value) => Token::Number(*value),
      Element::Operator(op) => Token::Operator(*op),
    }
  }
}

impl Display for Element {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Element::Entry(entry) => write!(f, "{}", entry),
      Element::Result(value) => write!(f, "{}", value),
      Element::Operator(op) => write!(f, "{}", op),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::stack::StackError;

  use approx::assert_abs_diff_eq;

  fn keys(labels: &str) -> Vec<Button> {
    labels.chars().map(|label| Button::try_from(label).unwrap()).collect()
  }

  fn type_keys(labels: &str) -> CalculatorState {
    CalculatorState::new().press_all(keys(labels)).unwrap()
  }

  #[test]
  fn test_simple_sum() {
    let state = type_keys("12+3=");
    assert_eq!(state.result(), Some(15.0));
    assert_eq!(state.display(), "15");
  }

  #[test]
  fn test_precedence_through_keypad() {
    assert_eq!(type_keys("3+4*2=").result(), Some(11.0));
    assert_eq!(type_keys("8-3-2=").result(), Some(3.0));
    assert_eq!(type_keys("10%3+1=").result(), Some(2.0));
  }

  #[test]
  fn test_display_while_typing() {
    assert_eq!(type_keys("3+4.").display(), "3+4.");
    assert_eq!(type_keys("3+4.2*").display(), "3+4.2*");
    assert_eq!(type_keys("5.+").display(), "5+");
    assert_eq!(type_keys(".5").display(), "0.5");
    assert_eq!(CalculatorState::new().display(), "");
  }

  #[test]
  fn test_tokens() {
    let state = type_keys("3+4*2");
    assert_eq!(
      state.tokens(),
      vec![
        Token::Number(3.0),
        Token::Operator(Operator::Plus),
        Token::Number(4.0),
        Token::Operator(Operator::Times),
        Token::Number(2.0),
      ],
    );
  }

  #[test]
  fn test_typed_decimals_are_exact() {
    assert_eq!(type_keys("0.1").tokens(), vec![Token::Number(0.1)]);
    let state = type_keys("0.1+0.2=");
    assert_abs_diff_eq!(state.result().unwrap(), 0.3, epsilon = 1e-12);
  }

  #[test]
  fn test_negate_first_number() {
    let state = type_keys("-");
    assert_eq!(state.pending_sign(), Sign::Negative);
    assert_eq!(state.display(), "-");
    assert_eq!(type_keys("-5*2=").result(), Some(-10.0));
    assert_eq!(type_keys("-.5").display(), "-0.5");
  }

  #[test]
  fn test_negation_toggles() {
    assert_eq!(type_keys("--5=").result(), Some(5.0));
  }

  #[test]
  fn test_negative_number_extends_correctly() {
    assert_eq!(type_keys("-53=").result(), Some(-53.0));
    assert_eq!(type_keys("-5.25=").result(), Some(-5.25));
  }

  #[test]
  fn test_other_operators_ignored_on_empty_input() {
    let state = type_keys("*/+%");
    assert!(state.is_empty());
    assert_eq!(state, CalculatorState::new());
  }

  #[test]
  fn test_operator_replaces_operator() {
    assert_eq!(type_keys("3+*4=").result(), Some(12.0));
    assert_eq!(type_keys("3+*-").display(), "3-");
  }

  #[test]
  fn test_clear_removes_last_keypress() {
    assert_eq!(type_keys("123c").display(), "12");
    assert_eq!(type_keys("12+c").display(), "12");
    assert_eq!(type_keys("1.5c").display(), "1.");
    assert_eq!(type_keys("5c").display(), "");
    assert_eq!(type_keys("12+3c4=").result(), Some(16.0));
  }

  #[test]
  fn test_clear_restores_pending_sign() {
    let state = type_keys("-5c");
    assert!(state.is_empty());
    assert_eq!(state.display(), "-");
    assert_eq!(type_keys("-5cc").display(), "");
  }

  #[test]
  fn test_clear_removes_result() {
    assert!(type_keys("2+2=c").is_empty());
  }

  #[test]
  fn test_clear_all() {
    assert_eq!(type_keys("12+3C"), CalculatorState::new());
    assert_eq!(type_keys("-C"), CalculatorState::new());
  }

  #[test]
  fn test_equals_on_empty_input_is_zero() {
    let state = type_keys("=");
    assert_eq!(state.result(), Some(0.0));
    assert_eq!(state.display(), "0");
  }

  #[test]
  fn test_digit_after_result_starts_new_expression() {
    assert_eq!(type_keys("2+3=4").display(), "4");
    assert_eq!(type_keys("2+3=.5").display(), "0.5");
  }

  #[test]
  fn test_operator_after_result_continues() {
    assert_eq!(type_keys("2+3=*2").display(), "5*2");
    assert_eq!(type_keys("2+3=*2=").result(), Some(10.0));
  }

  #[test]
  fn test_divide_by_zero_result() {
    let state = type_keys("1/0=");
    assert_eq!(state.result(), Some(f64::INFINITY));
    assert_eq!(state.display(), "inf");
  }

  #[test]
  fn test_trailing_operator_fails() {
    let state = type_keys("3+");
    let err = state.press(Button::Equals).unwrap_err();
    assert_eq!(
      err,
      EvaluationError::MissingOperand {
        operator: Operator::Plus,
        position: 1,
        source: StackError::NotEnoughElements { expected: 2, actual: 1 },
      },
    );
    // The state itself is untouched.
    assert_eq!(state.display(), "3+");
  }

  #[test]
  fn test_trailing_operator_lenient() {
    let state = type_keys("3+");
    let next = state.press_with(Button::Equals, &CalculatorSettings::lenient()).unwrap();
    assert!(next.result().unwrap().is_nan());
  }

  #[test]
  fn test_press_is_pure() {
    let state = type_keys("7");
    let next = state.press(Button::Digit(Digit::ZERO)).unwrap();
    assert_eq!(state.display(), "7");
    assert_eq!(next.display(), "70");
  }

  #[test]
  fn test_refresh_payload() {
    let payload = type_keys("3+4").refresh_payload();
    assert_eq!(payload.display, "3+4");
    assert_eq!(
      serde_json::to_string(&payload).unwrap(),
      r#"{"display":"3+4","tokens":[3.0,"+",4.0]}"#,
    );
    assert_eq!(RefreshDisplayPayload::EVENT_NAME, "refresh-display");
  }
}
