// repl.rs

use crate::parser::LineSource;
use crate::session::Session;
use anyhow::Context;
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};

/// Terminal input through rustyline; Ctrl-C and Ctrl-D both end the session.
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    pub fn new() -> rustyline::Result<Self> {
        // results are recorded by the session, not the raw lines
        let config = Config::builder().auto_add_history(false).build();
        let editor = DefaultEditor::with_config(config)?;
        Ok(Self { editor })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ReadlineError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

pub fn start_repl() -> anyhow::Result<()> {
    let source = EditorSource::new().context("failed to create line editor")?;
    let mut session = Session::new(source, std::io::stdout());
    session.run().context("calculator session aborted")?;
    tracing::debug!(entries = session.history().len(), "session finished");
    Ok(())
}
