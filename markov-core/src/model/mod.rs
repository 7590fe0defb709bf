//! Markov chain model and generation.
//!
//! - Prefix-to-successors mapping (`Chain`)
//! - Sliding window key (`Prefix`)
//! - Random walk over the chain (`Generator`)
//! - Run parameters (`GenerationInput`)

/// Prefix-to-successors mapping built from a corpus.
///
/// Keeps every observation, so repeated successors weigh more when sampled.
pub mod chain;

/// Random-walk text generation over a `Chain`.
pub mod generator;

/// Generation parameters, their defaults and validation.
pub mod generation_input;

/// Fixed-length word window used as a chain key.
pub mod prefix;
