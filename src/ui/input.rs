use std::io::{self, BufRead, StdinLock};

use crate::error::SessionError;

/// Supplies one textual token per request.
pub trait InputSource {
    /// Returns [`SessionError::InputClosed`] once no more input will arrive.
    fn read_token(&mut self) -> Result<String, SessionError>;
}

/// Reads one line per token from any buffered reader.
pub struct LineInput<R> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        LineInput { reader }
    }
}

impl LineInput<StdinLock<'static>> {
    pub fn stdin() -> Self {
        LineInput::new(io::stdin().lock())
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn read_token(&mut self) -> Result<String, SessionError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
