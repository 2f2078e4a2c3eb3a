//! Networking modules for the grocery REST collaborator.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the four item requests and `types` defines the JSON schema
//! they exchange.

pub mod api;
pub mod types;
