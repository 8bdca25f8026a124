//! User-facing output and the confirmation prompt.
//!
//! Everything the runner prints goes through a [`Console`], which also owns
//! the auto-agree flag. With auto-agree set, [`Console::confirm`] answers yes
//! without writing a prompt or touching the input stream.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

pub const ARROW: &str = "==>";

pub struct Console {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
    auto_agree: bool,
}

impl Console {
    pub fn new(input: Box<dyn BufRead>, output: Box<dyn Write>, auto_agree: bool) -> Self {
        Self {
            input,
            output,
            auto_agree,
        }
    }

    /// Console bound to the process's stdin and stdout.
    pub fn stdio(auto_agree: bool) -> Self {
        Self::new(
            Box::new(io::BufReader::new(io::stdin())),
            Box::new(io::stdout()),
            auto_agree,
        )
    }

    pub fn auto_agree(&self) -> bool {
        self.auto_agree
    }

    pub fn arrow(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.output, "{ARROW} {msg}")
    }

    pub fn line(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.output, "{msg}")
    }

    /// Overwrite the current line; used for progress indicators.
    pub fn spin(&mut self, msg: impl Display) -> io::Result<()> {
        write!(self.output, "{ARROW} {msg}\r")?;
        self.output.flush()
    }

    /// Ask a yes/no question. Only `y` or `yes` (any case) is affirmative;
    /// an unreadable answer counts as no.
    pub fn confirm(&mut self, msg: impl Display) -> io::Result<bool> {
        if self.auto_agree {
            return Ok(true);
        }
        write!(self.output, "{ARROW} {msg}")?;
        self.output.flush()?;
        let mut answer = String::new();
        if let Err(e) = self.input.read_line(&mut answer) {
            tracing::warn!(error = %e, "could not read answer, treating it as no");
            return Ok(false);
        }
        Ok(is_affirmative(&answer))
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}


#[cfg(test)]
mod tests {
    use super::testing::{scripted, scripted_bytes};
    use super::*;

    #[test]
    fn affirmative_answers() {
        for answer in ["y\n", "Y\n", "yes\n", "  YeS \n"] {
            assert!(is_affirmative(answer), "{answer:?}");
        }
        for answer in ["", "\n", "n\n", "no\n", "yep\n", "sure\n"] {
            assert!(!is_affirmative(answer), "{answer:?}");
        }
    }

    #[test]
    fn confirm_reads_one_line_per_prompt() {
        let (mut console, out) = scripted("yes\nno\n", false);
        assert!(console.confirm("first? ").unwrap());
        assert!(!console.confirm("second? ").unwrap());
        assert!(!console.confirm("eof? ").unwrap());
        let text = out.contents();
        assert!(text.contains("==> first? "));
        assert!(text.contains("==> second? "));
    }

    #[test]
    fn unreadable_answer_is_negative() {
        let (mut console, _) = scripted_bytes(&[0xff, 0xfe, b'\n', b'y', b'\n'], false);
        assert!(!console.confirm("agree? ").unwrap());
        assert!(console.confirm("again? ").unwrap());
    }

    #[test]
    fn auto_agree_never_prompts() {
        let (mut console, out) = scripted("", true);
        assert!(console.confirm("agree? ").unwrap());
        assert!(out.contents().is_empty());
    }

    #[test]
    fn spin_stays_on_one_line() {
        let (mut console, out) = scripted("", true);
        console.spin("Downloading... -").unwrap();
        assert_eq!(out.contents(), "==> Downloading... -\r");
    }
}
