//! Plain read models exchanged with platform services.
//!
//! These are non-polymorphic data records; serde derive with camelCase
//! renaming covers their wire shape. Polymorphic families live in
//! [`crate::codec`].

pub mod auth;
pub mod capacity;
pub mod dataflow;
pub mod pipeline;
pub mod workspace;
