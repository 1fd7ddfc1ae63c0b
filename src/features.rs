//! Feature modules - business logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly.

pub mod settings;
pub mod users;

pub use settings::{Settings, ThemeChoice};
