//! JSON I/O handling for CLI
//!
//! - Input: one JSON object per line on stdin
//! - Output: one JSON object per line on stdout
//! - UTF-8 only

use std::io::{self, BufRead, Write};

use serde_json::{json, Value};

use super::errors::{CliError, CliResult};

/// Success envelope: `{"status":"ok","data":...}`
pub fn ok_response(data: Value) -> Value {
    json!({
        "status": "ok",
        "data": data
    })
}

/// Error envelope: `{"status":"error","code":...,"message":...}`
pub fn error_response(code: &str, message: &str) -> Value {
    json!({
        "status": "error",
        "code": code,
        "message": message
    })
}

/// Read a JSON request from stdin
pub fn read_request() -> CliResult<Value> {
    let stdin = io::stdin();
    let mut line = String::new();

    stdin.lock().read_line(&mut line)?;

    if line.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }

    parse_request(&line)
}

/// Read JSON requests from stdin until EOF (for start command).
///
/// Blank lines are skipped.
pub fn read_requests() -> impl Iterator<Item = CliResult<Value>> {
    let stdin = io::stdin();
    stdin.lock().lines().filter_map(|line| match line {
        Ok(line) if line.trim().is_empty() => None,
        Ok(line) => Some(parse_request(&line)),
        Err(e) => Some(Err(CliError::from(e))),
    })
}

fn parse_request(line: &str) -> CliResult<Value> {
    serde_json::from_str(line)
        .map_err(|e| CliError::invalid_request(format!("Malformed request: {}", e)))
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    write_json(&error_response(code, message))
}

/// Write a complete response object to stdout
pub fn write_json(response: &Value) -> CliResult<()> {
    let mut stdout = io::stdout();
    write_line(&mut stdout, response)
}

fn write_line<W: Write>(writer: &mut W, response: &Value) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, response)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}
