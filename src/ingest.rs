//! Process set ingestion.
//!
//! Three sources, all ending in [`ProcessSet::from_specs`]:
//!
//! - **Text**: a count line followed by that many `id arrival burst` lines.
//!   `#` starts a comment; blank lines are ignored.
//! - **JSON**: an array of `{"id", "arrival_time", "burst_time"}` objects.
//! - **Interactive**: prompts for the count, then each field of each process.
//!
//! Nothing reaches the engine unless every row is valid.

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::IngestError;
use crate::models::{ProcessSet, ProcessSpec};
use crate::validation::{validate_count, ValidationError};

/// Supported file formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Count line plus `id arrival burst` rows.
    #[default]
    Text,
    /// JSON array of process objects.
    Json,
}

/// Parses `input` in the given format.
pub fn parse(input: &str, format: InputFormat) -> Result<ProcessSet, IngestError> {
    match format {
        InputFormat::Text => parse_text(input),
        InputFormat::Json => parse_json(input),
    }
}

/// Parses the text format.
///
/// ```text
/// # n, then n rows of: id arrival burst
/// 2
/// 1 0 8
/// 2 1 4
/// ```
///
/// Every malformed or out-of-range field is reported, not just the first.
pub fn parse_text(input: &str) -> Result<ProcessSet, IngestError> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, strip_comment(line).trim()))
        .filter(|(_, line)| !line.is_empty());

    let Some((count_line, count_text)) = lines.next() else {
        return Err(ValidationError::malformed("Missing process count").into());
    };
    let count = parse_field(count_text, "process count", count_line)?;
    validate_count(count)?;

    let mut specs = Vec::new();
    let mut errors = Vec::new();
    let mut bad_rows = 0;

    for (line_no, line) in lines {
        match parse_row(line, line_no) {
            Ok(spec) => specs.push(spec),
            Err(mut row_errors) => {
                bad_rows += 1;
                errors.append(&mut row_errors);
            }
        }
    }

    let rows = (specs.len() + bad_rows) as i64;
    if rows != count {
        errors.push(ValidationError::malformed(format!(
            "Process count is {count} but {rows} process rows were given"
        )));
    }

    if !errors.is_empty() {
        return Err(errors.into());
    }

    debug!(count = specs.len(), "parsed text input");
    Ok(ProcessSet::from_specs(&specs)?)
}

/// Parses the JSON format.
pub fn parse_json(input: &str) -> Result<ProcessSet, IngestError> {
    let specs: Vec<ProcessSpec> = serde_json::from_str(input)
        .map_err(|e| ValidationError::malformed(format!("Malformed JSON input: {e}")))?;
    debug!(count = specs.len(), "parsed JSON input");
    Ok(ProcessSet::from_specs(&specs)?)
}

/// Runs the interactive dialogue.
///
/// Prompts are written to `output`; answers are read from `input` as
/// whitespace-separated tokens, so several answers may share one line.
/// Invalid values abort immediately; no defaults are substituted.
pub fn read_interactive<R: BufRead, W: Write>(
    input: R,
    mut output: W,
) -> Result<ProcessSet, IngestError> {
    let mut tokens = Tokens::new(input);

    write!(output, "Enter the total no of processes: ")?;
    output.flush()?;
    let count = tokens.next_int("process count")?;
    validate_count(count)?;

    let mut specs = Vec::new();
    for n in 1..=count {
        write!(output, "Enter Process ID: ")?;
        output.flush()?;
        let id = tokens.next_int(&format!("id of process #{n}"))?;

        write!(output, "Enter Process Arrival Time: ")?;
        output.flush()?;
        let arrival_time = tokens.next_int(&format!("arrival time of process #{n}"))?;

        write!(output, "Enter Process Burst time: ")?;
        output.flush()?;
        let burst_time = tokens.next_int(&format!("burst time of process #{n}"))?;

        specs.push(ProcessSpec::new(id, arrival_time, burst_time));
    }
    writeln!(output)?;

    Ok(ProcessSet::from_specs(&specs)?)
}

/// Renders a process set in the text format.
pub fn to_text(specs: &[ProcessSpec]) -> String {
    let mut out = format!("{}\n", specs.len());
    for s in specs {
        out.push_str(&format!("{} {} {}\n", s.id, s.arrival_time, s.burst_time));
    }
    out
}

fn strip_comment(line: &str) -> &str {
    line.split_once('#').map_or(line, |(before, _)| before)
}

fn parse_field(text: &str, field: &str, line_no: usize) -> Result<i64, ValidationError> {
    text.parse::<i64>().map_err(|_| {
        ValidationError::malformed(format!(
            "Line {line_no}: {field} is not an integer: '{text}'"
        ))
    })
}

fn parse_row(line: &str, line_no: usize) -> Result<ProcessSpec, Vec<ValidationError>> {
    const FIELDS: [&str; 3] = ["id", "arrival time", "burst time"];

    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != FIELDS.len() {
        return Err(vec![ValidationError::malformed(format!(
            "Line {line_no}: expected 3 fields (id arrival burst), found {}",
            parts.len()
        ))]);
    }

    let mut values = [0i64; 3];
    let mut errors = Vec::new();
    for (slot, (part, field)) in values.iter_mut().zip(parts.iter().zip(FIELDS)) {
        match parse_field(part, field, line_no) {
            Ok(v) => *slot = v,
            Err(e) => errors.push(e),
        }
    }

    if errors.is_empty() {
        Ok(ProcessSpec::new(values[0], values[1], values[2]))
    } else {
        Err(errors)
    }
}

/// Whitespace tokenizer over a line-oriented reader.
struct Tokens<R> {
    reader: R,
    pending: std::vec::IntoIter<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: Vec::new().into_iter(),
        }
    }

    fn next_token(&mut self) -> Result<Option<String>, std::io::Error> {
        loop {
            if let Some(token) = self.pending.next() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending = line
                .split_whitespace()
                .map(str::to_owned)
                .collect::<Vec<_>>()
                .into_iter();
        }
    }

    fn next_int(&mut self, field: &str) -> Result<i64, IngestError> {
        let Some(token) = self.next_token()? else {
            return Err(ValidationError::malformed(format!("Missing {field}")).into());
        };
        token.parse::<i64>().map_err(|_| {
            ValidationError::malformed(format!("{field} is not an integer: '{token}'")).into()
        })
    }
}
