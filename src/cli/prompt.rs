use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use crate::models::FolderType;

pub const FOLDER_PROMPT: &str = "Parse Inbox or Sent folder? [inbox/sent]: ";
pub const PLACES_PROMPT: &str = "Path to places.sqlite: ";

/// Line-oriented interactive prompts for values not given on the command line
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` and read one trimmed line.
    /// End of input is an error so validation loops can't spin forever.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("Failed to read from stdin")?;
        if read == 0 {
            bail!("No input provided for prompt: {}", question.trim_end());
        }

        Ok(line.trim().to_string())
    }

    /// Ask until the answer is `inbox` or `sent` (any case)
    pub fn ask_folder(&mut self) -> Result<FolderType> {
        loop {
            if let Ok(folder) = self.ask(FOLDER_PROMPT)?.parse() {
                return Ok(folder);
            }
        }
    }

    /// Ask until a non-empty path is given
    pub fn ask_path(&mut self, question: &str) -> Result<PathBuf> {
        loop {
            let answer = self.ask(question)?;
            if !answer.is_empty() {
                return Ok(PathBuf::from(answer));
            }
        }
    }

    pub fn ask_mbox_path(&mut self, folder: FolderType) -> Result<PathBuf> {
        self.ask_path(&format!("Enter path to Thunderbird {} mbox file: ", folder))
    }

    pub fn ask_places_path(&mut self) -> Result<PathBuf> {
        self.ask_path(PLACES_PROMPT)
    }
}
