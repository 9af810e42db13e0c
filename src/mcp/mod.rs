//! Model Context Protocol server layer.

pub mod catalog;
pub mod handler;
pub mod sse;
pub mod tools;
pub mod transport;
