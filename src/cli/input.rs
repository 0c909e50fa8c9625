//! Line sources feeding the shell: a `rustyline` editor for terminals and a
//! buffered reader for piped scripts.

use std::io::{BufRead, Write};

use rustyline::{error::ReadlineError, DefaultEditor};

use crate::errors::CliError;

/// Supplies one line of user input per prompt. `Ok(None)` means the user is
/// done (end of input or Ctrl-C).
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError>;

    /// Records a completed menu selection in history, when supported.
    fn remember(&mut self, _line: &str) {}
}

pub struct EditorInput {
    editor: DefaultEditor,
}

impl EditorInput {
    pub fn new() -> Result<Self, CliError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for EditorInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn remember(&mut self, line: &str) {
        self.editor.add_history_entry(line).ok();
    }
}

/// Reads from any buffered reader; prompts are echoed on their own line so a
/// piped transcript stays readable.
pub struct ScriptInput<R> {
    reader: R,
}

impl<R: BufRead> ScriptInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ScriptInput<R> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        let mut stdout = std::io::stdout();
        writeln!(stdout, "{}", prompt.trim_end())?;
        stdout.flush()?;

        let mut buffer = String::new();
        if self.reader.read_line(&mut buffer)? == 0 {
            return Ok(None);
        }
        let line = buffer.trim_end_matches(['\n', '\r']).to_string();
        Ok(Some(line))
    }
}
