use crate::libs::messages::Message;
use anyhow::Result;
use std::io::{BufRead, Write};

/// Line-oriented prompt over any buffered reader.
///
/// Prints the label to stdout, flushes, and reads one line. Only the line
/// terminator is stripped; callers decide how to treat surrounding
/// whitespace. Returns `None` once the input source is exhausted.
pub struct Prompt<R> {
    input: R,
}

impl<R: BufRead> Prompt<R> {
    pub fn new(input: R) -> Self {
        Prompt { input }
    }

    pub fn line(&mut self, label: Message) -> Result<Option<String>> {
        print!("{}: ", label);
        std::io::stdout().flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
    }
}
