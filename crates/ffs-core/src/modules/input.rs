use crate::domain::{ComputeResult, FfsError, InputArtifact};
use std::fs;
use std::path::Path;

pub fn read_input_source(path: &Path, artifact: InputArtifact) -> ComputeResult<String> {
    fs::read_to_string(path).map_err(|source| {
        FfsError::io_system(
            "IO.INPUT_READ",
            format!(
                "failed to read {} '{}': {}",
                artifact.as_str(),
                path.display(),
                source
            ),
        )
    })
}

/// Whole file as ordered lines with `\n` / `\r\n` terminators removed.
pub fn read_lines(path: &Path, artifact: InputArtifact) -> ComputeResult<Vec<String>> {
    let source = read_input_source(path, artifact)?;
    let lines = source.lines().map(str::to_owned).collect::<Vec<_>>();
    tracing::debug!(
        artifact = artifact.as_str(),
        path = %path.display(),
        lines = lines.len(),
        "read input"
    );
    Ok(lines)
}
