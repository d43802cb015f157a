//! Operator prompts.
//!
//! Handlers talk to the operator only through [`Prompter`], so the same code
//! runs against a terminal or a scripted session.

use std::collections::HashMap;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::errors::AppError;

/// One selectable option: what the operator sees, and what it stands for.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice<T> {
    pub label: String,
    pub value: T,
}

impl<T> Choice<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Choice {
            label: label.into(),
            value,
        }
    }
}

/// Builds choices keyed by id. Any label shared by more than one record gets
/// ` (#id)` appended, repeated until every label is unique, so each label
/// resolves to exactly one record.
pub fn labelled_by_id<I>(items: I) -> Vec<Choice<i32>>
where
    I: IntoIterator<Item = (i32, String)>,
{
    let mut choices: Vec<Choice<i32>> = items
        .into_iter()
        .map(|(id, label)| Choice::new(label, id))
        .collect();

    // Ids are unique, so each round separates every remaining collision.
    for _ in 0..choices.len() {
        let mut seen: HashMap<String, usize> = HashMap::new();
        for choice in &choices {
            *seen.entry(choice.label.clone()).or_insert(0) += 1;
        }
        if seen.values().all(|count| *count == 1) {
            break;
        }
        for choice in choices.iter_mut() {
            if seen.get(&choice.label).copied().unwrap_or(0) > 1 {
                choice.label = format!("{} (#{})", choice.label, choice.value);
            }
        }
    }
    choices
}

pub trait Prompter {
    /// Asks for a line of free text, returned trimmed.
    fn input(&mut self, message: &str) -> Result<String, AppError>;

    /// Asks the operator to pick one of `labels`; returns its index.
    fn select_index(&mut self, message: &str, labels: &[String]) -> Result<usize, AppError>;

    fn show(&mut self, text: &str) -> Result<(), AppError>;
}

/// Asks for one of `choices` and returns the value behind it.
pub fn select<P, T>(prompter: &mut P, message: &str, choices: &[Choice<T>]) -> Result<T, AppError>
where
    P: Prompter + ?Sized,
    T: Clone,
{
    if choices.is_empty() {
        return Err(AppError::NotFound(format!("Nothing to choose for: {}", message)));
    }
    let labels: Vec<String> = choices.iter().map(|c| c.label.clone()).collect();
    let index = prompter.select_index(message, &labels)?;
    choices
        .get(index)
        .map(|choice| choice.value.clone())
        .ok_or_else(|| AppError::NotFound(format!("No choice number {}", index + 1)))
}

/// Line-oriented prompter: numbered menus, answers read one line at a time.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl LinePrompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        LinePrompter::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        LinePrompter { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_line(&mut self) -> Result<String, AppError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn input(&mut self, message: &str) -> Result<String, AppError> {
        write!(self.writer, "? {} ", message)?;
        self.writer.flush()?;
        self.read_line()
    }

    fn select_index(&mut self, message: &str, labels: &[String]) -> Result<usize, AppError> {
        writeln!(self.writer, "? {}", message)?;
        for (i, label) in labels.iter().enumerate() {
            writeln!(self.writer, "  {}) {}", i + 1, label)?;
        }

        loop {
            write!(self.writer, "  Answer [1-{}]: ", labels.len())?;
            self.writer.flush()?;
            let answer = self.read_line()?;
            match answer.parse::<usize>() {
                Ok(n) if (1..=labels.len()).contains(&n) => return Ok(n - 1),
                _ => writeln!(
                    self.writer,
                    "  Please enter a number between 1 and {}",
                    labels.len()
                )?,
            }
        }
    }

    fn show(&mut self, text: &str) -> Result<(), AppError> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()?;
        Ok(())
    }
}
