//! Interactive confirmation

use crate::core::error::MaintResult;
use std::io::{self, BufRead, Write};

/// Asks the operator a yes/no question
pub trait Confirm {
  /// Show `message` and return the raw answer line (line ending included or not)
  fn ask(&mut self, message: &str) -> MaintResult<String>;
}

/// True only when the answer, minus its line ending and lowercased, is `yes`
pub fn is_affirmative(answer: &str) -> bool {
  answer.trim_end_matches(['\r', '\n']).to_lowercase() == "yes"
}

/// Reads the answer from a line-oriented reader, prompting on stdout
pub struct LineConfirm<R> {
  reader: R,
}

impl<R: BufRead> LineConfirm<R> {
  pub fn new(reader: R) -> Self {
    Self { reader }
  }
}

impl LineConfirm<io::StdinLock<'static>> {
  /// Confirmation from the process's stdin
  pub fn stdin() -> Self {
    Self::new(io::stdin().lock())
  }
}

impl<R: BufRead> Confirm for LineConfirm<R> {
  fn ask(&mut self, message: &str) -> MaintResult<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut input = String::new();
    self.reader.read_line(&mut input)?;
    Ok(input)
  }
}

/// Answers `yes` without reading anything (`--yes`)
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
  fn ask(&mut self, message: &str) -> MaintResult<String> {
    println!("{}yes", message);
    Ok("yes".to_string())
  }
}
