
//! Infix to postfix conversion.

use super::operator::Operator;
use super::token::Token;

use tracing::trace;

/// Converts an infix sequence into postfix (Reverse Polish) order,
/// using the shunting yard algorithm.
///
/// Only precedence is considered. There are no parentheses, and
/// operators of equal precedence resolve left-to-right. This function
/// never fails: malformed input (two operators in a row, two numbers
/// in a row) produces whatever the algorithm mechanically produces,
/// and it's up to the evaluator to reject it.
pub fn convert<I>(infix: I) -> Vec<Token>
where I: IntoIterator<Item = Token> {
  let mut operator_stack: Vec<Operator> = Vec::new();
  let mut output: Vec<Token> = Vec::new();
  for token in infix {
    match token {
      Token::Number(_) => {
        output.push(token);
      }
      Token::Operator(op) => {
        // Pop operators until we hit one with lower precedence.
        while let Some(stack_op) = operator_stack.pop() {
          if should_pop(stack_op, op) {
            trace!(popped = %stack_op, incoming = %op, "flushing operator to output");
            output.push(Token::Operator(stack_op));
          } else {
            operator_stack.push(stack_op);
            break;
          }
        }
        operator_stack.push(op);
      }
    }
  }

  // Pop remaining operators, most recently pushed first.
  output.extend(operator_stack.into_iter().rev().map(Token::Operator));
  output
}

fn should_pop(stack_op: Operator, current_op: Operator) -> bool {
  stack_op.precedence() >= current_op.precedence()
}
