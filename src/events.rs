
//! Serializable events that the calculator can send to a front end.

use crate::parsing::Token;

use serde::Serialize;

/// Instructs the front end to re-render the calculator display.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RefreshDisplayPayload {
  /// The display string, as the keypad shows it.
  pub display: String,
  /// The infix sequence behind the display.
  pub tokens: Vec<Token>,
}

impl RefreshDisplayPayload {
  pub const EVENT_NAME: &'static str = "refresh-display";
}
