//! Data Transfer Objects for the auth and status services
//!
//! Request types serialize to the exact JSON the services expect.
//! Response types are decoded in two steps by the client (raw JSON first,
//! then the typed shape) so that malformed bodies and missing fields can be
//! reported separately.

pub mod auth;
pub mod job;
