//! Flashplay (workspace facade crate).
//!
//! Exposes `flashplay::{core,adapter,types}` while the implementation lives in dedicated
//! crates under `crates/`, plus the argument handling shared by the binary.

pub mod cli;

pub use flashplay_adapter as adapter;
pub use flashplay_core as core;
pub use flashplay_types as types;
