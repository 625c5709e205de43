//! Sentry domain module.
//!
//! This module owns everything that talks to the upstream Sentry instance:
//! the configured REST client, the upstream error type, and helpers for
//! normalizing user-supplied issue references.

mod client;
mod error;
mod issue_ref;

pub use client::SentryClient;
pub use error::{SentryError, SentryResult};
pub use issue_ref::extract_issue_id;
