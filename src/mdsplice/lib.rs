//! # Mdsplice Architecture
//!
//! Mdsplice is a **UI-agnostic markdown patching library**. The CLI binary is a
//! thin client; everything it can do is available as plain Rust functions.
//!
//! ## The Layer Stack
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, reads/writes files and stdin/stdout    │
//! │  - The ONLY place that knows about terminals and exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Resolves the effective chunk budget (flag > config)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Operates on strings, returns structured CmdResult        │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (chunk.rs, section.rs)                                │
//! │  - Pure text transforms: chunking and section splicing      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types, never writes to stdout/stderr, never calls
//! `std::process::exit`, and never assumes a terminal environment. The core
//! transforms are additionally pure: they consume and produce in-memory
//! strings, so a failed splice leaves nothing to roll back.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Command logic and the structured `CmdResult` type
//! - [`chunk`]: Byte-bounded markdown chunking
//! - [`section`]: Heading-scoped section replacement
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `args`/`main`: Argument parsing and terminal output for the binary
//!   (not part of the lib API)

pub mod api;
pub mod chunk;
pub mod commands;
pub mod config;
pub mod error;
pub mod section;
