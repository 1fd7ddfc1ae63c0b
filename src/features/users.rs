//! User roster feature
//!
//! Handles:
//! - The in-memory user collection and its seed data
//! - Per-field validation of the user form
//! - Form state (field values + error set)
//! - Create/edit/delete orchestration with simulated latency

mod controller;
mod executor;
mod form;
mod model;
mod validation;

pub use controller::{DialogState, FormDialog, Modal, PendingAction, UserList};
pub use executor::{ActionExecutor, ImmediateExecutor, Latency, TimerExecutor};
pub use form::UserForm;
pub use model::{User, UserDraft, UserId, UserStore};
pub use validation::{FieldError, FieldErrors, FormField, validate};

/// Maximum length of first and last names, in characters
pub const MAX_NAME_LEN: usize = 20;

/// Largest accepted age
pub const MAX_AGE: f64 = 100.0;
