//! Shared contracts between the Smart Clear frontend and the remote API.
//!
//! Everything here is plain data plus pure computation: wire types with their
//! serde mappings, and the derivations the UI applies on top of them
//! (discount recomputation, selection semantics, formatting). No wasm
//! dependencies, so the whole crate is testable natively.

pub mod domain;
pub mod shared;
