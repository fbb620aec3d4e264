
//! Stack-based evaluation of postfix sequences.

mod error;

pub use error::EvaluationError;

use crate::parsing::{convert, Operator, Token};
use crate::settings::{CalculatorSettings, MissingOperandPolicy};
use crate::stack::Stack;

use tracing::{debug, warn};

/// Evaluates a postfix sequence with the default (strict) settings.
pub fn evaluate<I>(postfix: I) -> Result<f64, EvaluationError>
where I: IntoIterator<Item = Token> {
  evaluate_with(postfix, &CalculatorSettings::default())
}

/// Evaluates a postfix sequence with a single operand stack.
///
/// Each operator takes the top of the stack as its right-hand operand
/// and the value beneath it as its left-hand operand. The evaluator
/// doesn't care whether the sequence came from well-formed infix: all
/// that matters is that exactly one value is left at the end.
pub fn evaluate_with<I>(postfix: I, settings: &CalculatorSettings) -> Result<f64, EvaluationError>
where I: IntoIterator<Item = Token> {
  let mut operand_stack: Stack<f64> = Stack::new();
  for (position, token) in postfix.into_iter().enumerate() {
    match token {
      Token::Number(n) => {
        operand_stack.push(n);
      }
      Token::Operator(op) => {
        let (left, right) = pop_operands(&mut operand_stack, op, position, settings.missing_operand)?;
        if !op.is_recognized() {
          warn!(symbol = %op, "unrecognized operator evaluates to zero");
        }
        let result = op.apply(left, right);
        debug!(%op, left, right, result, "applied operator");
        operand_stack.push(result);
      }
    }
  }

  let count = operand_stack.len();
  let mut residual = operand_stack.into_iter();
  match (residual.next(), residual.next()) {
    (Some(result), None) => Ok(result),
    _ => Err(EvaluationError::ResidualValues { count }),
  }
}

/// Converts an infix sequence to postfix and evaluates it.
pub fn calculate<I>(infix: I) -> Result<f64, EvaluationError>
where I: IntoIterator<Item = Token> {
  calculate_with(infix, &CalculatorSettings::default())
}

pub fn calculate_with<I>(infix: I, settings: &CalculatorSettings) -> Result<f64, EvaluationError>
where I: IntoIterator<Item = Token> {
  evaluate_with(convert(infix), settings)
}

/// Pops the (left, right) operand pair for `operator`.
fn pop_operands(
  stack: &mut Stack<f64>,
  operator: Operator,
  position: usize,
  policy: MissingOperandPolicy,
) -> Result<(f64, f64), EvaluationError> {
  match policy {
    MissingOperandPolicy::Strict => {
      let operands = stack.pop_several(2).map_err(|source| {
        EvaluationError::MissingOperand { operator, position, source }
      })?;
      Ok((operands[0], operands[1]))
    }
    MissingOperandPolicy::Lenient => {
      let right = stack.pop().unwrap_or(f64::NAN);
      let left = stack.pop().unwrap_or(f64::NAN);
      Ok((left, right))
    }
  }
}
