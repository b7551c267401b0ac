//! Line-oriented terminal interaction.
//!
//! Generic over the reader and writer so the menus can be driven from a
//! byte buffer in tests.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use quizdesk_core::codec::DELIMITER;
use quizdesk_core::engine::AnswerSource;
use quizdesk_core::model::Question;

pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a line to the output.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }

    /// Ask until the response passes `check` and contains no delimiter.
    pub fn input_with(
        &mut self,
        prompt: &str,
        check: impl Fn(&str) -> bool,
        message: &str,
    ) -> io::Result<String> {
        loop {
            let response = self.read_line(prompt)?;
            if response.contains(DELIMITER) {
                self.say(format_args!("\"{DELIMITER}\" is a forbidden character"))?;
            } else if !check(&response) {
                self.say(message)?;
            } else {
                return Ok(response);
            }
        }
    }

    /// Ask for any non-empty response.
    pub fn input(&mut self, prompt: &str) -> io::Result<String> {
        self.input_with(prompt, |r| !r.is_empty(), "Invalid Input")
    }

    /// Print numbered options and return the index of the one picked.
    pub fn choose_index<T: Display>(&mut self, options: &[T]) -> io::Result<usize> {
        for (i, option) in options.iter().enumerate() {
            self.say(format_args!("{}. {option}", i + 1))?;
        }

        let count = options.len();
        let choice = self.input_with(
            "> ",
            |r| r.parse::<usize>().is_ok_and(|n| (1..=count).contains(&n)),
            "Invalid Choice",
        )?;
        self.say("")?;

        // Validated by the check above.
        Ok(choice.parse::<usize>().map_or(0, |n| n - 1))
    }

    /// Like [`Prompt::choose_index`] but returns the option itself.
    pub fn pick<'a, T: Display>(&mut self, options: &'a [T]) -> io::Result<&'a T> {
        let index = self.choose_index(options)?;
        Ok(&options[index])
    }
}

impl<R: BufRead, W: Write> AnswerSource for Prompt<R, W> {
    fn choose(&mut self, question: &Question, options: &[String]) -> io::Result<usize> {
        self.say(format_args!("Question: {}", question.question))?;
        self.choose_index(options)
    }

    fn on_feedback(&mut self, question: &Question, _chosen: &str, correct: bool) {
        let line = if correct {
            "Correct!".to_string()
        } else {
            format!("Incorrect! The answer was: {}", question.correct)
        };
        if let Err(e) = self.say(line) {
            tracing::debug!("failed to write feedback: {e}");
        }
    }
}
