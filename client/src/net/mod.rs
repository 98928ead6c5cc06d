//! Networking modules for the poll's outbound calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` talks to the external form-collection and results endpoints, and
//! `types` defines the results wire schema.

pub mod api;
pub mod types;
