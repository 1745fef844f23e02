//! Adapter module - line-delimited JSON front end for the game-content core
//!
//! External collaborators (an HTTP layer, a script, a test harness) talk to the
//! core through one JSON object per line. The adapter parses each request, runs the
//! matching generator or scorer and writes one response line back.
//!
//! # Message Types
//!
//! ## Client → Adapter
//!
//! - **generate**: build a game of `gameType` from `terms` (optional `category`)
//! - **score**: score a finished game from `gameData`
//!
//! ## Adapter → Client
//!
//! - **game**: the generated content (tagged by `gameType`) plus `termsUsed` and `category`
//! - **score**: the integer score
//! - **error**: `code` (`validation_error`, `unsupported_game_type`, `invalid_request`) and `message`
//!
//! # Environment Variables
//!
//! - `FLASHPLAY_SEED`: seed for reproducible games (default: thread RNG)
//! - `FLASHPLAY_DIRECTIONS`: word-search directions, `4` or `8` (default: 4)
//! - `FLASHPLAY_MAX_LINE_BYTES`: request line cap (default: 1 MiB)
//!
//! # Example Protocol Flow
//!
//! ```text
//! -> {"type":"generate","seq":1,"gameType":"memory","terms":[{"term":"atom","definition":"..."},...]}
//! <- {"type":"game","seq":1,"ts":1700000000000,"gameType":"memory","cards":[...],"totalPairs":2,"instructions":"...","termsUsed":2,"category":"all"}
//! -> {"type":"score","seq":2,"gameType":"memory","gameData":{"totalPairs":5,"correctPairs":5,"timeInSeconds":100}}
//! <- {"type":"score","seq":2,"ts":1700000000001,"score":900}
//! -> {"type":"generate","seq":3,"gameType":"bogus","terms":[...]}
//! <- {"type":"error","seq":3,"ts":1700000000002,"code":"unsupported_game_type","message":"unsupported game type: bogus"}
//! ```
//!
//! # Implementation
//!
//! - [`protocol`]: message structures and `parse_message`
//! - [`runtime`]: the [`Adapter`] request handler (owns the random source)
//! - [`server`]: configuration and the async `serve_lines` loop (tokio)

pub mod protocol;
pub mod runtime;
pub mod server;

pub use flashplay_core as core;
pub use flashplay_types as types;

// Re-export protocol types for convenience
pub use protocol::*;
pub use runtime::Adapter;
pub use server::*;
