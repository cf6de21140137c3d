//! UI Views Module
//!
//! This module contains the main views for the Passform Linux frontend.
//! Views represent complete screens or major UI sections.

pub mod register;
pub mod settings;
pub mod sign_in;

// Re-export components for easy access
pub use register::{RegisterMessage, RegisterView};
pub use settings::{SettingsMessage, SettingsView};
pub use sign_in::{SignInMessage, SignInView};
