//! Process list parsing
//!
//! One `pid,priority,burst` triple per line. Blank lines are skipped and
//! whitespace around fields is ignored. Range checks are left to the core,
//! so negative priorities and bursts parse fine here and are rejected when
//! submitted.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("line {line}: expected 3 comma-separated fields (pid, priority, burst time), found {found}")]
    WrongFieldCount { line: usize, found: usize },

    #[error("line {line}: {field} '{value}' is not an integer")]
    InvalidInteger {
        line: usize,
        field: &'static str,
        value: String,
    },
}

/// One parsed input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessLine {
    /// 1-based line number in the input
    pub line: usize,
    pub pid: i64,
    pub priority: i64,
    pub burst_time: i64,
}

pub fn parse_processes(text: &str) -> Result<Vec<ProcessLine>, InputError> {
    text.lines()
        .enumerate()
        .filter(|(_, raw)| !raw.trim().is_empty())
        .map(|(idx, raw)| parse_line(idx + 1, raw))
        .collect()
}

fn parse_line(line: usize, raw: &str) -> Result<ProcessLine, InputError> {
    let fields: Vec<&str> = raw.trim().split(',').map(str::trim).collect();
    let [pid, priority, burst_time] = fields.as_slice() else {
        return Err(InputError::WrongFieldCount {
            line,
            found: fields.len(),
        });
    };

    Ok(ProcessLine {
        line,
        pid: parse_field(line, "pid", pid)?,
        priority: parse_field(line, "priority", priority)?,
        burst_time: parse_field(line, "burst time", burst_time)?,
    })
}

fn parse_field(line: usize, field: &'static str, value: &str) -> Result<i64, InputError> {
    value.parse().map_err(|_| InputError::InvalidInteger {
        line,
        field,
        value: value.to_owned(),
    })
}
