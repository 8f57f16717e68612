use std::io::{self, BufRead, IsTerminal, Write};

/// Yes/no decision point used before overwriting a file.
pub trait Confirm {
    fn confirm(&self, message: &str) -> io::Result<bool>;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> io::Result<bool>,
{
    fn confirm(&self, message: &str) -> io::Result<bool> {
        self(message)
    }
}

/// Asks on the terminal. Defaults to "no" on an empty answer.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, message: &str) -> io::Result<bool> {
        let stdin = io::stdin();
        if !stdin.is_terminal() {
            return Err(io::Error::other("not an interactive terminal"));
        }

        print!("{message} [y/N] ");
        io::stdout().flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no answer on stdin",
            ));
        }
        Ok(parse_answer(&input))
    }
}

fn parse_answer(input: &str) -> bool {
    let answer = input.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
