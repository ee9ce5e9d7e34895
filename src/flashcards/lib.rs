//! # Flashcards Architecture
//!
//! Flashcards is a study aid: a REST service storing term/definition/topic
//! records, and a client that reviews them one card at a time. Both halves
//! live in this library; the `flashcards` binary is a thin shell over it.
//!
//! ## Server Side
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  HTTP Layer (server/)                                       │
//! │  - axum routes, JSON bodies, status codes                   │
//! │  - The ONLY place that knows about HTTP                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Parses raw ids (malformed → InvalidId)                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation and CRUD logic, no I/O assumptions            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Client Side
//!
//! [`client::FlashcardClient`] turns HTTP responses into typed results.
//! [`controller::FlashcardController`] applies those results to a
//! [`session::ReviewSession`], the in-memory view state (topic filter,
//! cursor, review tracking). [`form::FlashcardForm`] holds the add/edit form.
//! None of these print anything; the terminal front-end in the binary does.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**, **session** and **form**: unit tests next to the code,
//!    commands running on `InMemoryStore`.
//! 2. **API**: id parsing and dispatch.
//! 3. **HTTP + client**: `tests/http_api.rs` serves the router on an
//!    ephemeral port and drives it through the client and controller.
//! 4. **Binary**: `tests/cli.rs` via `assert_cmd`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Flashcard`, `FlashcardId`, drafts and patches)
//! - [`validation`]: Field trimming, topic capitalization, required checks
//! - [`server`]: HTTP routes, error mapping, serving
//! - [`client`]: HTTP client adapter
//! - [`session`]: Review session view state
//! - [`form`]: Add/edit form state
//! - [`controller`]: Client + session reconciliation
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod client;
pub mod commands;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod model;
pub mod server;
pub mod session;
pub mod store;
pub mod validation;
