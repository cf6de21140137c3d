//! UI Module for the Passform Linux frontend
//!
//! This module contains all user interface pieces for the Linux frontend:
//! the shared theme, reusable form components, and the application views.

pub mod components;
pub mod theme;
pub mod views;

// Re-export commonly used UI components
pub use components::*;
pub use theme::{button_styles, progress_bar_styles, text_input_styles, utils};
pub use views::{RegisterView, SettingsView, SignInView};
