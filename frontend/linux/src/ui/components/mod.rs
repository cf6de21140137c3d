//! UI Components Module
//!
//! This module contains reusable UI components for the Passform Linux
//! frontend.

pub mod secret_field;

// Re-export commonly used components
pub use secret_field::*;
