use crate::error::{Result, ScaffoldError};
use std::path::PathBuf;

/// How many answers are accepted before giving up on a prompt.
pub const MAX_PROMPT_ATTEMPTS: usize = 3;

/// Blocking line input from the user.
pub trait Prompt {
    /// Ask `question` and wait for one answer. `Ok(None)` means input ended.
    fn ask(&mut self, question: &str) -> Result<Option<String>>;

    /// Tell the user why the last answer was rejected.
    fn reject(&mut self, reason: &str);
}

/// Ask for the path of an existing file, re-asking on empty or unknown paths.
pub fn ask_existing_file(prompt: &mut dyn Prompt, question: &str) -> Result<PathBuf> {
    for _ in 0..MAX_PROMPT_ATTEMPTS {
        let Some(answer) = prompt.ask(question)? else {
            break;
        };
        let answer = answer.trim();
        if answer.is_empty() {
            prompt.reject("Please enter a file path");
            continue;
        }
        let path = PathBuf::from(answer);
        if !path.is_file() {
            prompt.reject(&format!("File does not exist: {answer}"));
            continue;
        }
        return Ok(path);
    }
    Err(ScaffoldError::PromptAborted(MAX_PROMPT_ATTEMPTS))
}

/// Prompt that replays canned answers in order, then reports end of input.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScriptedPrompt {
    answers: std::collections::VecDeque<String>,
    pub asked: Vec<String>,
    pub rejections: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
impl Prompt for ScriptedPrompt {
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        self.asked.push(question.to_string());
        Ok(self.answers.pop_front())
    }

    fn reject(&mut self, reason: &str) {
        self.rejections.push(reason.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn accepts_existing_file() {
        let dir = TempDir::new().unwrap();
        let prd = dir.path().join("prd-login.md");
        std::fs::write(&prd, "# PRD").unwrap();
        let mut prompt = ScriptedPrompt::new([prd.display().to_string()]);
        let got = ask_existing_file(&mut prompt, "PRD?").unwrap();
        assert_eq!(got, prd);
        assert!(prompt.rejections.is_empty());
    }

    #[test]
    fn reasks_after_empty_and_missing_answers() {
        let dir = TempDir::new().unwrap();
        let prd = dir.path().join("prd.md");
        std::fs::write(&prd, "# PRD").unwrap();
        let missing = dir.path().join("missing.md");
        let mut prompt = ScriptedPrompt::new([
            "   ".to_string(),
            missing.display().to_string(),
            format!("  {}  ", prd.display()),
        ]);
        let got = ask_existing_file(&mut prompt, "PRD?").unwrap();
        assert_eq!(got, prd);
        assert_eq!(prompt.asked.len(), 3);
        assert_eq!(prompt.rejections.len(), 2);
        assert!(prompt.rejections[1].starts_with("File does not exist"));
    }

    #[test]
    fn gives_up_after_max_attempts() {
        let mut prompt = ScriptedPrompt::new(["nope-1.md", "nope-2.md", "nope-3.md", "nope-4.md"]);
        let err = ask_existing_file(&mut prompt, "PRD?").unwrap_err();
        assert!(matches!(err, ScaffoldError::PromptAborted(MAX_PROMPT_ATTEMPTS)));
        assert_eq!(prompt.asked.len(), MAX_PROMPT_ATTEMPTS);
    }

    #[test]
    fn end_of_input_aborts() {
        let mut prompt = ScriptedPrompt::new(Vec::<String>::new());
        assert!(matches!(
            ask_existing_file(&mut prompt, "PRD?"),
            Err(ScaffoldError::PromptAborted(_))
        ));
    }
}
