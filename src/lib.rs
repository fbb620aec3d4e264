
pub mod eval;
pub mod events;
pub mod parsing;
pub mod settings;
pub mod stack;
pub mod state;

pub use eval::{calculate, calculate_with, evaluate, evaluate_with, EvaluationError};
pub use parsing::{convert, tokenize, Operator, Token};
pub use settings::{CalculatorSettings, MissingOperandPolicy};
pub use state::{Button, CalculatorState};
