
use infix_calc::{calculate_with, tokenize, Button, CalculatorSettings, CalculatorState, MissingOperandPolicy};

use anyhow::Context;
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use std::io::{self, BufRead};
use std::path::PathBuf;

/// Evaluates arithmetic over + - * / % with the usual precedence.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
  /// Treat each input character as a keypad press (digits, `.`,
  /// operators, `c` to clear, `C` to clear all, `=` to evaluate).
  #[arg(long)]
  keys: bool,

  /// JSON file with calculator settings.
  #[arg(long, value_name = "PATH")]
  settings: Option<PathBuf>,

  /// Treat missing operands as NaN instead of failing.
  #[arg(long)]
  lenient: bool,

  /// Expression to evaluate. Lines are read from stdin when omitted.
  expression: Vec<String>,
}

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(io::stderr)
    .init();

  let cli = Cli::parse();
  let settings = load_settings(&cli)?;

  if !cli.expression.is_empty() {
    let line = cli.expression.join(" ");
    if cli.keys {
      let state = press_keys(&CalculatorState::new(), &line, &settings)?;
      println!("{}", state.display());
    } else {
      println!("{}", evaluate_line(&line, &settings)?);
    }
    return Ok(());
  }

  let mut state = CalculatorState::new();
  for line in io::stdin().lock().lines() {
    let line = line.context("Failed to read from stdin")?;
    if cli.keys {
      match press_keys(&state, &line, &settings) {
        Ok(next) => {
          state = next;
          println!("{}", state.display());
        }
        Err(err) => {
          // Evaluation errors are terminal; start over.
          warn!(error = %err, "resetting calculator input");
          eprintln!("error: {err:#}");
          state = CalculatorState::new();
        }
      }
    } else if !line.trim().is_empty() {
      match evaluate_line(&line, &settings) {
        Ok(value) => println!("{value}"),
        Err(err) => eprintln!("error: {err:#}"),
      }
    }
  }
  Ok(())
}

fn load_settings(cli: &Cli) -> anyhow::Result<CalculatorSettings> {
  let mut settings = match &cli.settings {
    Some(path) => CalculatorSettings::from_path(path)
      .with_context(|| format!("Failed to load settings from {}", path.display()))?,
    None => CalculatorSettings::default(),
  };
  if cli.lenient {
    settings.missing_operand = MissingOperandPolicy::Lenient;
  }
  debug!(?settings, "settings loaded");
  Ok(settings)
}

fn evaluate_line(line: &str, settings: &CalculatorSettings) -> anyhow::Result<f64> {
  let tokens = tokenize(line)?;
  Ok(calculate_with(tokens, settings)?)
}

fn press_keys(
  state: &CalculatorState,
  line: &str,
  settings: &CalculatorSettings,
) -> anyhow::Result<CalculatorState> {
  let mut state = state.clone();
  for label in line.chars().filter(|c| !c.is_whitespace()) {
    let button = Button::try_from(label)?;
    state = state.press_with(button, settings)?;
  }
  Ok(state)
}
