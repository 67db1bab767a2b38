//! Interactive operator prompts.
//!
//! Generic over the input and output streams so tests can drive them with
//! in-memory buffers.

use std::io::{BufRead, Write};

use archiver_core::{ArchiverError, ArchiverResult};
use archiver_inventory::SalesChannels;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self, what: &str) -> ArchiverResult<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ArchiverError::operator_input(format!(
                "input ended while waiting for {what}"
            )));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// List the channels and ask for one until a valid index is given.
    pub fn sales_channel(&mut self, channels: &SalesChannels) -> ArchiverResult<usize> {
        if channels.is_empty() {
            return Err(ArchiverError::malformed(
                "inventory export header has no sales channel columns",
            ));
        }

        writeln!(self.output, "What sales channel should be used?")?;
        for (index, label) in channels.iter() {
            writeln!(self.output, "{index}: {label}")?;
        }

        loop {
            writeln!(self.output, "Give channel ID:")?;
            let line = self.read_line("a sales channel")?;
            match line.trim().parse::<usize>() {
                Ok(index) if index < channels.len() => return Ok(index),
                Ok(index) => writeln!(
                    self.output,
                    "Channel {index} doesn't exist (0-{}). Try again",
                    channels.len() - 1
                )?,
                Err(_) => writeln!(self.output, "Given channel isn't an integer. Try again")?,
            }
        }
    }

    /// Whitespace-separated disqualifying tags.
    pub fn disqualifying_tags(&mut self) -> ArchiverResult<Vec<String>> {
        writeln!(self.output, "What tags should be archived?")?;
        let line = self.read_line("tags")?;
        Ok(line.split_whitespace().map(str::to_string).collect())
    }

    /// Stock threshold; a non-integer answer is fatal.
    pub fn min_stock(&mut self) -> ArchiverResult<i64> {
        writeln!(
            self.output,
            "Give minimum stock to not be archived (if less than this value, it gets archived)"
        )?;
        let line = self.read_line("a minimum stock")?;
        line.trim().parse::<i64>().map_err(|_| {
            ArchiverError::operator_input(format!("given minimum stock isn't an integer: {line:?}"))
        })
    }
}
