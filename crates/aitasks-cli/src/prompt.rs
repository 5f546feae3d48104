use aitasks_core::prompt::Prompt;
use aitasks_core::Result;
use std::io::{BufRead, Write};

/// Reads answers from stdin. Questions go to stderr so stdout stays parseable.
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        let mut err = std::io::stderr().lock();
        write!(err, "? {question} ")?;
        err.flush()?;

        let mut line = String::new();
        let n = std::io::stdin().lock().read_line(&mut line)?;
        if n == 0 {
            writeln!(err)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn reject(&mut self, reason: &str) {
        eprintln!(">> {reason}");
    }
}
