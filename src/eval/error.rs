
use crate::parsing::Operator;
use crate::stack::StackError;

use thiserror::Error;

/// The ways a postfix sequence can fail to reduce to a single value.
///
/// Every variant is terminal for the evaluation that produced it. The
/// caller decides whether to reset its input or keep it for editing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EvaluationError {
  #[error("Operator '{operator}' at position {position} is missing an operand")]
  MissingOperand {
    operator: Operator,
    position: usize,
    #[source]
    source: StackError,
  },
  #[error("Expected exactly one value after evaluation, found {count}")]
  ResidualValues {
    count: usize,
  },
}
