//! Word-level Markov chain text generation.
//!
//! This crate provides:
//! - Chain construction from a tokenized corpus (`model::chain`)
//! - A sliding word-window key (`model::prefix`)
//! - Random-walk generation with an explicitly owned random source
//!   (`model::generator`)
//! - Validated generation parameters (`model::generation_input`)
//! - Whitespace tokenization of input streams (`io`)

/// Chain model, prefixes, generation and its parameters.
pub mod model;

/// Error taxonomy shared by the library and its front-ends.
pub mod error;

/// Input reading and tokenization.
pub mod io;
