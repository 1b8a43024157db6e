//! # rahi - alt.f Assistant Terminal Client
//!
//! `rahi` is a terminal client for Rahi, the alt.f assistant. It speaks the
//! same HTTP contract as the website widget (`POST /api/chat`) and renders
//! the conversation as a markdown transcript in your terminal.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start a chat session against the default endpoint
//! rahi
//!
//! # Point at a different deployment
//! rahi --endpoint https://altf.example.com
//!
//! # Persist the endpoint
//! rahi configure --endpoint https://altf.example.com
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/rahi/config.toml`:
//!
//! ```toml
//! endpoint = "http://localhost:5000"
//! ```
//!
//! The one-way `profile_complete` latch lives under the XDG state dir and is
//! set automatically once the assistant signals that onboarding is finished.

/// HTTP client for the assistant chat API.
pub mod api;

/// Interactive chat session: view-model, transcript, REPL runner.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// Persisted one-way session flags.
pub mod flags;

/// File system utilities.
pub mod fs;

/// Layout hints derived from live terminal geometry.
pub mod layout;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration and state.
pub mod paths;

/// Markdown rendering for assistant messages.
pub mod render;

/// Terminal UI components (spinner, colors).
pub mod ui;
