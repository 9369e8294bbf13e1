//! Shared types and pure logic for the chat client.
//!
//! Everything here is target-independent: the frontend crate supplies the
//! browser storage adapter, the HTTP transport and the Markdown renderer.

pub mod domain;
pub mod shared;
