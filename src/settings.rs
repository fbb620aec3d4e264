
//! User-configurable evaluation settings.

use serde::{Serialize, Deserialize};
use thiserror::Error;

use std::fs;
use std::io;
use std::path::Path;

/// What the evaluator does when an operator finds fewer than two
/// operands on the stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingOperandPolicy {
  /// Fail immediately with
  /// [`EvaluationError::MissingOperand`](crate::eval::EvaluationError::MissingOperand).
  #[default]
  Strict,
  /// Substitute NaN for each missing operand and keep going. The
  /// residual-value check at the end still applies.
  Lenient,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CalculatorSettings {
  pub missing_operand: MissingOperandPolicy,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
  #[error("Could not read settings file: {0}")]
  Io(#[from] io::Error),
  #[error("Malformed settings: {0}")]
  Json(#[from] serde_json::Error),
}

impl CalculatorSettings {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn lenient() -> Self {
    Self { missing_operand: MissingOperandPolicy::Lenient }
  }

  pub fn from_json(json: &str) -> Result<Self, SettingsError> {
    Ok(serde_json::from_str(json)?)
  }

  pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
    let contents = fs::read_to_string(path)?;
    Self::from_json(&contents)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_is_strict() {
    assert_eq!(CalculatorSettings::new().missing_operand, MissingOperandPolicy::Strict);
  }

  #[test]
  fn test_from_json() {
    let settings = CalculatorSettings::from_json(r#"{ "missing-operand": "lenient" }"#).unwrap();
    assert_eq!(settings, CalculatorSettings::lenient());
  }

  #[test]
  fn test_from_json_fills_defaults() {
    let settings = CalculatorSettings::from_json("{}").unwrap();
    assert_eq!(settings, CalculatorSettings::default());
  }

  #[test]
  fn test_from_json_rejects_unknown_policy() {
    let err = CalculatorSettings::from_json(r#"{ "missing-operand": "sloppy" }"#).unwrap_err();
    assert!(matches!(err, SettingsError::Json(_)));
  }

  #[test]
  fn test_from_missing_path() {
    let err = CalculatorSettings::from_path("/nonexistent/infix-calc/settings.json").unwrap_err();
    assert!(matches!(err, SettingsError::Io(_)));
  }
}
