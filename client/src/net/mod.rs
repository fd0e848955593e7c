//! Networking modules for the auth backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the wire schema and the
//! response classification shared with the auth form.

pub mod api;
pub mod types;
