//! Persists fully-assembled Solana instruction descriptors (program id,
//! ordered account metas, raw payload bytes) as JSON fixtures, which test
//! harnesses and simulators replay without a live client library.
//!
//! This is not an instruction builder: discriminators and argument
//! encoding are the caller's business, the library only lays out and
//! writes descriptors that are already correct.

pub mod config;
pub mod types;
pub mod writer;

pub use config::Config;
pub use types::{Account, DumpResult, InstructionDescriptor, IxdumpError};
pub use writer::InstructionWriter;
