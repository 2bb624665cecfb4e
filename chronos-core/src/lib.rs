//! Chronos Core
//!
//! Shared types for the Chronos job SDK.
//!
//! This crate contains:
//! - Domain types: configuration, credentials, session tokens, callbacks
//! - DTOs: wire payloads exchanged with the auth and status services

pub mod domain;
pub mod dto;
