use crate::columns::column_letter;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IO(String),
    #[error("malformed row at line {line}, column {column}: {reason}")]
    MalformedRow {
        line: u64,
        column: usize,
        reason: String,
    },
    #[error("unclassified band at line {line}: {call} outputs on {freq:.4} MHz, outside every known band")]
    UnclassifiedBand { line: u64, call: String, freq: f64 },
    #[error("xml error: {0}")]
    Xml(String),
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self { AppError::IO(format!("{}", e)) }
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        let line = e.position().map(|p| p.line()).unwrap_or(0);
        let text = e.to_string();
        match e.into_kind() {
            csv::ErrorKind::Io(io) => AppError::IO(format!("{}", io)),
            csv::ErrorKind::Utf8 { err, .. } => AppError::MalformedRow {
                line,
                column: err.field(),
                reason: format!(
                    "column {} is not valid UTF-8 after byte {}",
                    column_letter(err.field()),
                    err.valid_up_to()
                ),
            },
            _ => AppError::MalformedRow {
                line,
                column: 0,
                reason: format!("unreadable CSV: {}", text),
            },
        }
    }
}
