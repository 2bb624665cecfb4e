//! Domain types

pub mod callback;
pub mod config;
pub mod credentials;
pub mod token;
