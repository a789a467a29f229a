use std::fmt;
use std::path::Path;

use uuid::Uuid;

/// Collision-free name for an upload inside the scratch directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScratchPath(String);

impl ScratchPath {
    pub fn new(filename: &str) -> Self {
        Self(format!("{}-{}", Uuid::new_v4(), safe_file_name(filename)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScratchPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn safe_file_name(filename: &str) -> String {
    let base = Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload");

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.trim_matches('.').is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}
