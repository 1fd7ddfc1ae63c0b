//! User roster update handlers
//!
//! Confirmed actions are handed to the latency executor; the roster is only
//! mutated once `ActionFinished` comes back.

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::users::{Latency, PendingAction};
use crate::ui::components::user_form_dialog::FIRST_NAME_INPUT;

impl App {
    pub fn handle_users(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::UsersLoaded => {
                self.users.finish_loading();
                tracing::info!("Loaded {} users", self.users.store().len());
                Some(Task::none())
            }

            Message::AddUser => {
                if self.users.open_add() {
                    tracing::info!("Opened add user dialog");
                    return Some(self.dialog_opened(true));
                }
                Some(Task::none())
            }

            Message::EditUser(id) => {
                if self.users.open_edit(*id) {
                    tracing::info!("Opened edit dialog for user {}", id);
                    return Some(self.dialog_opened(true));
                }
                tracing::debug!("Edit ignored for user {}", id);
                Some(Task::none())
            }

            Message::DeleteUser(id) => {
                if self.users.request_delete(*id) {
                    tracing::info!("Requesting delete for user {}", id);
                    return Some(self.dialog_opened(false));
                }
                Some(Task::none())
            }

            Message::FieldChanged(field, value) => {
                if !self.users.update_field(*field, value.clone()) {
                    tracing::debug!("Rejected input for {:?}", field);
                }
                Some(Task::none())
            }

            Message::ConfirmDialog => match self.users.confirm() {
                Some(action) => {
                    tracing::info!("Starting {:?}", action);
                    Some(self.run_action(action))
                }
                None => Some(Task::none()),
            },

            Message::CloseDialog => {
                if self.users.close() {
                    self.ui.reset_dialog_animation();
                }
                Some(Task::none())
            }

            Message::ActionFinished(action) => {
                tracing::info!("Finished {:?}", action);
                let notice = self.core.locale.get(action.success_key());
                self.users.complete(action.clone());
                if self.users.dialog().modal().is_none() {
                    self.ui.reset_dialog_animation();
                }
                Some(self.show_toast(notice))
            }

            _ => None,
        }
    }

    /// Fade the new modal in; form dialogs also focus their first field
    fn dialog_opened(&mut self, focus_form: bool) -> Task<Message> {
        self.ui.start_dialog_animation();
        if focus_form {
            iced::widget::operation::focus(iced::widget::Id::new(FIRST_NAME_INPUT))
        } else {
            Task::none()
        }
    }

    fn run_action(&self, action: PendingAction) -> Task<Message> {
        Task::perform(self.core.executor.delay(Latency::Action), move |_| {
            Message::ActionFinished(action)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::app::{App, Message};
    use crate::features::Settings;
    use crate::features::users::{
        DialogState, FieldError, FormField, ImmediateExecutor, Modal, PendingAction, UserDraft,
    };

    fn loaded_app() -> App {
        let (mut app, _) = App::with_settings(Settings::default(), Arc::new(ImmediateExecutor));
        assert!(app.users.is_loading());
        let _ = app.update(Message::UsersLoaded);
        assert!(!app.users.is_loading());
        app
    }

    fn type_into(app: &mut App, field: FormField, value: &str) {
        let _ = app.update(Message::FieldChanged(field, value.to_string()));
    }

    fn toast(app: &App) -> Option<&str> {
        app.ui.toast.as_ref().map(|t| t.message.as_str())
    }

    #[test]
    fn test_add_flow() {
        let mut app = loaded_app();
        let _ = app.update(Message::AddUser);
        type_into(&mut app, FormField::FirstName, "Ann");
        type_into(&mut app, FormField::LastName, "Lee");
        type_into(&mut app, FormField::Age, "30");

        let _ = app.update(Message::ConfirmDialog);
        assert!(app.users.is_pending());
        // Add stays disabled while the action is in flight
        let _ = app.update(Message::AddUser);
        assert!(app.users.is_pending());

        let draft = UserDraft::new("Ann", "Lee", "30");
        let _ = app.update(Message::ActionFinished(PendingAction::Create(draft)));
        assert_eq!(app.users.dialog(), &DialogState::Closed);
        assert_eq!(app.users.store().len(), 4);
        assert_eq!(app.users.store().get(4).map(|u| u.first_name.as_str()), Some("Ann"));
        assert_eq!(toast(&app), Some("User created successfully"));
    }

    #[test]
    fn test_invalid_add_shows_errors_without_toast() {
        let mut app = loaded_app();
        let _ = app.update(Message::AddUser);
        type_into(&mut app, FormField::FirstName, &"x".repeat(21));
        let _ = app.update(Message::ConfirmDialog);

        assert!(!app.users.is_pending());
        let Some(Modal::Form(dialog)) = app.users.dialog().modal() else {
            panic!("form dialog should stay open");
        };
        assert_eq!(dialog.form.errors().get(FormField::FirstName), Some(FieldError::TooLong));
        assert_eq!(dialog.form.errors().get(FormField::Age), Some(FieldError::Required));
        assert_eq!(toast(&app), None);

        // Closing drops the error set
        let _ = app.update(Message::CloseDialog);
        let _ = app.update(Message::AddUser);
        let Some(Modal::Form(dialog)) = app.users.dialog().modal() else {
            panic!("form dialog should be open");
        };
        assert!(dialog.form.errors().is_empty());
    }

    #[test]
    fn test_unchanged_edit_keeps_dialog_open() {
        let mut app = loaded_app();
        let _ = app.update(Message::EditUser(1));
        let _ = app.update(Message::ConfirmDialog);
        assert!(matches!(app.users.dialog(), DialogState::Open(Modal::Form(_))));
        assert_eq!(toast(&app), None);
    }

    #[test]
    fn test_edit_unknown_user() {
        let mut app = loaded_app();
        let _ = app.update(Message::EditUser(99));
        assert_eq!(app.users.dialog(), &DialogState::Closed);
    }

    #[test]
    fn test_delete_flow() {
        let mut app = loaded_app();
        let _ = app.update(Message::DeleteUser(3));
        assert_eq!(app.users.dialog(), &DialogState::Open(Modal::ConfirmDelete(3)));

        // Escape is ignored once the deletion is in flight
        let _ = app.update(Message::ConfirmDialog);
        let _ = app.update(Message::CloseDialog);
        assert!(app.users.is_pending());

        let _ = app.update(Message::ActionFinished(PendingAction::Delete(3)));
        assert!(app.users.store().get(3).is_none());
        assert_eq!(app.users.store().len(), 2);
        assert_eq!(toast(&app), Some("User deleted successfully"));
    }

    #[test]
    fn test_cancel_delete_clears_target() {
        let mut app = loaded_app();
        let _ = app.update(Message::DeleteUser(2));
        let _ = app.update(Message::CloseDialog);
        assert_eq!(app.users.dialog(), &DialogState::Closed);
        assert_eq!(app.users.store().len(), 3);
    }
}
