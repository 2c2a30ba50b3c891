//! Background keying.
//!
//! This module provides the [`ChromaKeyer`] builder, the lower-level
//! [`key_out`] pass, and the [`Tolerance`] threshold type.

mod keyer;
mod tolerance;

pub use keyer::{key_out, BackgroundSource, ChromaKeyer, KeyOutcome};
pub use tolerance::Tolerance;
