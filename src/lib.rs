//! logo-keyer
//!
//! Inspects logo images and removes flat backgrounds by color distance.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
