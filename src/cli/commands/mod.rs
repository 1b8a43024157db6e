//! Subcommand implementations.

/// Chat session command handler (the default when no subcommand is given).
pub mod chat;

/// Configure command handler.
pub mod configure;
