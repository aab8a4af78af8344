use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::types::{Account, DumpResult, InstructionDescriptor, IxdumpError};

/// # Instruction Writer
///
/// Transforms one instruction request into a persisted JSON artifact,
/// computing the output path and guaranteeing required directories exist
/// first. Stateless between calls: each `write` is an independent,
/// blocking operation against the configured base directory.
pub struct InstructionWriter {
    base_dir: PathBuf,
}

impl InstructionWriter {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn with_config(config: &Config) -> Self {
        Self::new(config.base_output_dir.clone())
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Persists one instruction descriptor and returns the resolved path.
    ///
    /// The artifact lands at `<base>/<instruction_name>.json`, or under
    /// `<base>/<program_name>/` when `program_name` is given (for
    /// multi-program projects sharing one output root). The instruction
    /// name is used verbatim as the filename stem, so callers must supply
    /// filesystem-safe names. Missing directories are created; an
    /// existing artifact at the resolved path is replaced whole.
    pub fn write(
        &self,
        program_id: &str,
        instruction_name: &str,
        instruction_data: &[u8],
        accounts: Vec<Account>,
        program_name: Option<&str>,
    ) -> DumpResult<PathBuf> {
        if program_id.is_empty() {
            return Err(IxdumpError::Validation(
                "program id must be a non-empty string".into(),
            ));
        }

        let descriptor = InstructionDescriptor {
            program_id: program_id.into(),
            accounts,
            instruction_data: instruction_data.to_vec(),
        };
        // Rendered before any directory is touched, so encoding failures
        // leave the filesystem untouched as well.
        let rendered = json::to_string_pretty(&descriptor)?;

        fs::create_dir_all(&self.base_dir)?;
        let dir = match program_name {
            Some(name) => {
                let dir = self.base_dir.join(name);
                fs::create_dir_all(&dir)?;
                dir
            }
            None => self.base_dir.clone(),
        };

        let path = dir.join(format!("{instruction_name}.json"));
        fs::write(&path, rendered)?;

        tracing::info!("instruction descriptor written to {}", path.display());
        Ok(path)
    }
}
