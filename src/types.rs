use std::io;
use std::path::Path;

use json::{Deserialize, Serialize};
use thiserror::Error;

pub type DumpResult<T> = Result<T, IxdumpError>;

#[derive(Debug, Error)]
pub enum IxdumpError {
    /// Input rejected before any filesystem interaction.
    #[error("invalid instruction input: {0}")]
    Validation(String),
    /// Directory creation or file I/O failure, propagated verbatim.
    #[error("storage failure: {0}")]
    Storage(#[from] io::Error),
    /// JSON encoding or decoding failure.
    #[error("serialization failure: {0}")]
    Serialization(#[from] json::Error),
    #[error("malformed configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// One account referenced by an instruction, with its role flags.
///
/// Keys are opaque strings; duplicate keys and any flag combination are
/// accepted as supplied, correctness is the caller's responsibility.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Account {
    pub key: String,
    pub is_signer: bool,
    pub is_writable: bool,
}

impl Account {
    pub fn new(key: impl Into<String>, is_signer: bool, is_writable: bool) -> Self {
        Self {
            key: key.into(),
            is_signer,
            is_writable,
        }
    }
}

/// The persisted unit of output: everything a replayer needs to invoke
/// one instruction against a program.
///
/// Field names and order are the on-disk contract: `program_id`, then
/// `accounts` (positional, preserved exactly as supplied), then
/// `instruction_data` rendered as integers 0-255 in byte order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct InstructionDescriptor {
    pub program_id: String,
    pub accounts: Vec<Account>,
    pub instruction_data: Vec<u8>,
}

impl InstructionDescriptor {
    /// Reads a previously written descriptor back from disk.
    pub fn from_path(path: impl AsRef<Path>) -> DumpResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        json::from_str(&raw).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_serializes_with_stable_field_order() {
        let descriptor = InstructionDescriptor {
            program_id: "prog".into(),
            accounts: vec![Account::new("key", true, false)],
            instruction_data: vec![0, 255],
        };
        let rendered = json::to_string(&descriptor).unwrap();

        let program_id = rendered.find("\"program_id\"").unwrap();
        let accounts = rendered.find("\"accounts\"").unwrap();
        let data = rendered.find("\"instruction_data\"").unwrap();
        assert!(program_id < accounts && accounts < data);

        let key = rendered.find("\"key\"").unwrap();
        let signer = rendered.find("\"is_signer\"").unwrap();
        let writable = rendered.find("\"is_writable\"").unwrap();
        assert!(key < signer && signer < writable);
    }

    #[test]
    fn payload_renders_as_integer_array() {
        let descriptor = InstructionDescriptor {
            program_id: "prog".into(),
            accounts: vec![],
            instruction_data: vec![1, 2, 3],
        };
        let rendered = json::to_string(&descriptor).unwrap();
        assert!(rendered.contains("[1,2,3]"));
    }
}
