//! # Docsync Architecture
//!
//! Docsync copies documentation fragments (files named `GUID-….md`) into the
//! `readme.md` of each application folder, rewriting the screenshot
//! references they embed so they point back at the shared docs directory.
//!
//! ```text
//! docs/GUID-A0F6….md  ──read──▶  rewrite GUID-….png  ──write──▶  ../apps/ip1553/…/readme.md
//!                                 as ../../docs/GUID-….png
//! ```
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, installs logging, prints results       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns store and config         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + rewrite.rs                 │
//! │  - sync, check, list, config, init                          │
//! │  - Pure text rewriting lives in rewrite.rs                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DocStore trait                                           │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Model
//!
//! Entries are processed one at a time, in table order. The first error
//! (a missing fragment, a missing application folder) stops the run.
//! Readmes already written are left in place; nothing is rolled back.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`rewrite`]: Image reference matching and prefixing
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Entry`, `MatchMode` and the built-in entry table
//! - [`config`]: `docsync.json` loading and saving
//! - [`init`]: Builds the production API for a directory
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod rewrite;
pub mod store;
