//! Flow definition parsing and shape checks.

use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;

use crate::domain::AppError;

/// A flow definition document read from disk.
///
/// The document is held as uninterpreted JSON: deployment only requires that
/// it parses, while `validate` additionally checks the top-level shape.
#[derive(Debug, Clone)]
pub struct FlowDefinition {
    document: Value,
}

/// Shape summary produced by validating a flow definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowSummary {
    /// Number of processors declared under `flowContents`, if any.
    pub processor_count: Option<usize>,
}

impl FlowDefinition {
    /// Read and parse the flow file at `path`.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                AppError::FlowFileNotFound(path.display().to_string())
            } else {
                AppError::Io(err)
            }
        })?;
        Self::parse(&content)
    }

    /// Parse a flow definition from JSON content.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let document =
            serde_json::from_str(content).map_err(|err| AppError::FlowParse(err.to_string()))?;
        Ok(Self { document })
    }

    /// Validate the document shape and summarize it.
    ///
    /// Requires a top-level `flowContents` object. A `processors` entry is
    /// optional, but must be an array when present.
    pub fn summary(&self) -> Result<FlowSummary, AppError> {
        let contents = self
            .document
            .get("flowContents")
            .ok_or_else(|| AppError::InvalidFlow("missing 'flowContents'".into()))?;
        let contents = contents
            .as_object()
            .ok_or_else(|| AppError::InvalidFlow("'flowContents' must be an object".into()))?;

        match contents.get("processors") {
            None => Ok(FlowSummary { processor_count: None }),
            Some(Value::Array(processors)) => {
                Ok(FlowSummary { processor_count: Some(processors.len()) })
            }
            Some(_) => {
                Err(AppError::InvalidFlow("'flowContents.processors' must be an array".into()))
            }
        }
    }
}
