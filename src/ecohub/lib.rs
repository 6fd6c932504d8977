//! # Ecohub Architecture
//!
//! Ecohub is a **UI-agnostic publishing library**. This is not a CLI
//! application that happens to have some library code—it's a library
//! that happens to have a CLI client.
//!
//! ## The Layer Stack
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Enforces the admin gate on every mutating operation      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic operating on Rust types                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - PostStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The collection is persisted as one JSON array and always written
//! whole: load, mutate a copy, save. A store that has never persisted
//! anything seeds itself on first load.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The post entity and its display conventions
//! - [`filter`]: Pure category/query filtering for listings
//! - [`editor`]: Draft workflow and external editor integration
//! - [`image`]: Cover-art downscaling presets
//! - [`session`]: Admin authorization and credential strategy
//! - [`error`]: Error types
//! - `cli`: argument parsing and printing live in the binary, not here

pub mod api;
pub mod commands;
pub mod editor;
pub mod error;
pub mod filter;
pub mod image;
pub mod model;
pub mod session;
pub mod store;
