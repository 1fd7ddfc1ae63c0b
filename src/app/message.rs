//! Application messages

use iced::time::Instant;

use crate::features::users::{FormField, PendingAction, UserId};

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// No-op message for event interception (modal card clicks)
    Noop,

    // ============ Shell ============
    /// Switch to the other named theme
    ToggleTheme,
    /// Dismiss the toast with this generation
    HideToast(u64),
    /// Animation frame
    AnimationTick(Instant),

    // ============ User list ============
    /// Initial fetch finished
    UsersLoaded,
    /// Add button pressed
    AddUser,
    /// Edit icon pressed on a row
    EditUser(UserId),
    /// Delete icon pressed on a row
    DeleteUser(UserId),
    /// Cursor entered a table row
    RowHovered(UserId),
    /// Cursor left a table row
    RowUnhovered(UserId),

    // ============ Dialogs ============
    /// Input in a form field
    FieldChanged(FormField, String),
    /// Confirm button of the open modal
    ConfirmDialog,
    /// Cancel, close icon, backdrop click or Escape
    CloseDialog,
    /// Simulated latency elapsed for a confirmed action
    ActionFinished(PendingAction),
}
