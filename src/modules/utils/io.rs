use std::io::{self, BufRead, Write};

/// Source of interactive answers for the shells
pub trait Prompter {
    /// Show `message` and read one line; `None` at end of input
    fn line(&mut self, message: &str) -> io::Result<Option<String>>;

    /// Like [`Prompter::line`] but for secrets that must not be echoed
    fn secret(&mut self, message: &str) -> io::Result<Option<String>> {
        self.line(message)
    }
}

/// Prompter backed by the process terminal
pub struct Terminal;

impl Prompter for Terminal {
    fn line(&mut self, message: &str) -> io::Result<Option<String>> {
        print!("{}", message);
        io::stdout().flush()?;
        read_line()
    }

    fn secret(&mut self, message: &str) -> io::Result<Option<String>> {
        print!("{}", message);
        io::stdout().flush()?;
        match rpassword::read_password() {
            Ok(password) => Ok(Some(password)),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Prompter that answers from any buffered reader, one line per question
pub struct ScriptedInput<R> {
    reader: R,
}

impl<R: BufRead> ScriptedInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Prompter for ScriptedInput<R> {
    fn line(&mut self, _message: &str) -> io::Result<Option<String>> {
        read_line_from(&mut self.reader)
    }
}

/// Helper function to read a line from stdin; `None` at end of input
pub fn read_line() -> io::Result<Option<String>> {
    read_line_from(&mut io::stdin().lock())
}

pub fn read_line_from<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
}
