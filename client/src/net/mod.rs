//! Networking modules for the NoteHub REST service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `config` resolves the API root and bearer token baked in at build time,
//! and `api` issues the list, create, and delete calls.

pub mod api;
pub mod config;
