use proc_macro2::TokenStream;
use std::path::PathBuf;
use thiserror::Error as ThisError;

///
/// WriteError
///

#[derive(Debug, ThisError)]
#[error("failed to write artifact '{name}': {source}")]
pub struct WriteError {
    pub name: String,

    #[source]
    pub source: std::io::Error,
}

///
/// CodeWriter
///
/// Persistence seam for generated artifacts. The pipeline hands over one
/// named token tree per artifact and never looks at the result again.
///

pub trait CodeWriter {
    fn write(&mut self, name: &str, tokens: &TokenStream) -> Result<(), WriteError>;
}

/// Render an artifact with the generated-file banner.
#[must_use]
pub fn render(tokens: &TokenStream) -> String {
    format!(
        "// @generated by dynamap {}. DO NOT EDIT\n{tokens}\n",
        env!("CARGO_PKG_VERSION")
    )
}

///
/// FsWriter
///
/// Writes one `<name>.rs` file per artifact under a root directory,
/// typically `OUT_DIR`.
///

pub struct FsWriter {
    root: PathBuf,
}

impl FsWriter {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl CodeWriter for FsWriter {
    fn write(&mut self, name: &str, tokens: &TokenStream) -> Result<(), WriteError> {
        let path = self.root.join(format!("{name}.rs"));

        std::fs::write(&path, render(tokens)).map_err(|source| WriteError {
            name: name.to_string(),
            source,
        })
    }
}

///
/// MemoryWriter
///
/// Accumulates artifacts in memory; backs the single-string `generate`
/// form and the emission tests.
///

#[derive(Debug, Default)]
pub struct MemoryWriter {
    pub artifacts: Vec<(String, String)>,
}

impl MemoryWriter {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.artifacts
            .iter()
            .find(|(artifact, _)| artifact == name)
            .map(|(_, text)| text.as_str())
    }

    /// All artifacts as one module body, in write order.
    #[must_use]
    pub fn concat(&self) -> String {
        self.artifacts
            .iter()
            .map(|(_, text)| text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl CodeWriter for MemoryWriter {
    fn write(&mut self, name: &str, tokens: &TokenStream) -> Result<(), WriteError> {
        self.artifacts.push((name.to_string(), tokens.to_string()));
        Ok(())
    }
}

///
/// TESTS
///
