//! Docs JSON sources.
//!
//! The renderer only needs the compiler's docs JSON as text. It comes
//! either from running the compiler in docs mode inside the project
//! directory, or from a file the user already has.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use crate::error::{CompilerError, ElmDocsError, Result};

/// Project descriptor that must exist before the compiler is run.
pub const PROJECT_DESCRIPTOR: &str = "elm-package.json";

/// Intermediate file the compiler writes docs JSON to.
pub const DOCS_ARTIFACT: &str = ".elm-docs";

/// Something that yields the compiler's docs JSON.
pub trait DocsSource {
    /// Load the docs JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be produced or read.
    fn load(&self) -> Result<String>;
}

// ============================================================================
// Compiler Invocation
// ============================================================================

/// Runs `<program> --yes --docs=.elm-docs` in the project directory and
/// collects the artifact.
#[derive(Debug, Clone)]
pub struct CompilerSource {
    program: String,
    project_dir: PathBuf,
}

impl CompilerSource {
    /// Create a source invoking `program` inside `project_dir`.
    #[must_use]
    pub fn new(program: impl Into<String>, project_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            project_dir: project_dir.into(),
        }
    }

    /// Location of the project descriptor.
    #[must_use]
    pub fn descriptor_path(&self) -> PathBuf {
        self.project_dir.join(PROJECT_DESCRIPTOR)
    }

    /// Location of the intermediate docs artifact.
    #[must_use]
    pub fn artifact_path(&self) -> PathBuf {
        self.project_dir.join(DOCS_ARTIFACT)
    }

    /// Check that the project directory holds a project descriptor.
    ///
    /// # Errors
    ///
    /// Returns `ElmDocsError::MissingPrerequisite` if it does not.
    pub fn check_project(&self) -> Result<()> {
        let descriptor = self.descriptor_path();
        if descriptor.is_file() {
            Ok(())
        } else {
            Err(ElmDocsError::MissingPrerequisite { path: descriptor })
        }
    }

    fn run_compiler(&self) -> Result<()> {
        info!(program = %self.program, dir = %self.project_dir.display(), "running compiler");

        let output = Command::new(&self.program)
            .arg("--yes")
            .arg(format!("--docs={DOCS_ARTIFACT}"))
            .current_dir(&self.project_dir)
            .output()
            .map_err(|source| CompilerError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        debug!(status = %output.status, "compiler exited");

        if output.status.success() {
            Ok(())
        } else {
            Err(CompilerError::Failed {
                program: self.program.clone(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into())
        }
    }
}

impl DocsSource for CompilerSource {
    /// Check the project, run the compiler, then read and delete the
    /// artifact it wrote.
    fn load(&self) -> Result<String> {
        self.check_project()?;
        self.run_compiler()?;

        let artifact = self.artifact_path();
        let artifact_error = |source| CompilerError::Artifact {
            path: artifact.clone(),
            source,
        };

        let json = fs::read_to_string(&artifact).map_err(artifact_error)?;
        fs::remove_file(&artifact).map_err(artifact_error)?;
        debug!(path = %artifact.display(), bytes = json.len(), "consumed docs artifact");

        Ok(json)
    }
}

// ============================================================================
// Existing File
// ============================================================================

/// Reads docs JSON from a file the user supplies. The file is left in place.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source reading `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file being read.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocsSource for FileSource {
    fn load(&self) -> Result<String> {
        info!(path = %self.path.display(), "reading docs JSON");
        Ok(fs::read_to_string(&self.path)?)
    }
}
