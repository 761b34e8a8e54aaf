//! Flow validation command.

use std::path::Path;

use crate::domain::{AppError, FlowDefinition, FlowSummary};

/// Execute the validate command: parse the flow file and check its shape.
pub fn execute(flow_file: &Path) -> Result<FlowSummary, AppError> {
    println!("🔍 Validating flow definition...");
    let flow = FlowDefinition::load(flow_file)?;
    flow.summary()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_path() {
        let err = execute(Path::new("no-such-flow.json")).unwrap_err();
        match err {
            AppError::FlowFileNotFound(path) => assert_eq!(path, "no-such-flow.json"),
            other => panic!("unexpected error variant: {}", other),
        }
    }
}
