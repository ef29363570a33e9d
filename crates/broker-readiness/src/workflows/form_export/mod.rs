//! Batch scoring of questionnaire exports downloaded from the onboarding form.

mod parser;

use crate::workflows::onboarding::{
    compute_scores, validate, AnalysisResult, InvalidInputError, OnboardingResponse, ResponseId,
};
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum BatchImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidRow {
        row: usize,
        source: InvalidInputError,
    },
}

impl std::fmt::Display for BatchImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchImportError::Io(err) => write!(f, "failed to read form export: {}", err),
            BatchImportError::Csv(err) => write!(f, "invalid form export CSV data: {}", err),
            BatchImportError::InvalidRow { row, source } => {
                write!(f, "form export row {} rejected: {}", row, source)
            }
        }
    }
}

impl std::error::Error for BatchImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchImportError::Io(err) => Some(err),
            BatchImportError::Csv(err) => Some(err),
            BatchImportError::InvalidRow { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for BatchImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for BatchImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// One scored line of a form export. `row` is 1-based and excludes the header.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRow {
    pub row: usize,
    pub response_id: Option<ResponseId>,
    pub response: OnboardingResponse,
    pub result: AnalysisResult,
}

pub struct BatchImporter;

impl BatchImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ScoredRow>, BatchImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ScoredRow>, BatchImportError> {
        let records = parser::parse_records(reader)?;
        let mut scored = Vec::with_capacity(records.len());

        for (index, record) in records.into_iter().enumerate() {
            let row = index + 1;
            let response = validate(&record.raw)
                .map_err(|source| BatchImportError::InvalidRow { row, source })?;
            scored.push(ScoredRow {
                row,
                response_id: record.response_id,
                result: compute_scores(&response),
                response,
            });
        }

        Ok(scored)
    }
}
