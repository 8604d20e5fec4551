use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::domain::{Answer, QuestionId};

/// Encodings accepted for a stored submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerFormat {
    /// `[{"question_id": 1, "selected": 2}, ...]`
    Json,
    /// Headers `question_id,selected`.
    Csv,
}

impl AnswerFormat {
    /// Guess from the file extension; anything other than `.csv` is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => AnswerFormat::Csv,
            _ => AnswerFormat::Json,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnswerImportError {
    #[error("failed to read answers: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid answer CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid answer JSON data: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn read_answers(path: &Path) -> Result<Vec<Answer>, AnswerImportError> {
    let file = File::open(path)?;
    parse_answers(file, AnswerFormat::from_path(path))
}

pub fn parse_answers<R: Read>(reader: R, format: AnswerFormat) -> Result<Vec<Answer>, AnswerImportError> {
    match format {
        AnswerFormat::Json => Ok(serde_json::from_reader(reader)?),
        AnswerFormat::Csv => parse_csv(reader),
    }
}

fn parse_csv<R: Read>(reader: R) -> Result<Vec<Answer>, AnswerImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut answers = Vec::new();

    for record in csv_reader.deserialize::<AnswerRow>() {
        let row = record?;
        answers.push(Answer {
            question_id: QuestionId(row.question_id),
            selected: row.selected,
        });
    }

    Ok(answers)
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    question_id: u64,
    selected: usize,
}
