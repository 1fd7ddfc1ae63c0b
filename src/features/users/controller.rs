//! Roster controller: owns the collection and drives the create/edit/delete flows
//!
//! The controller is synchronous. Confirming a modal yields a [`PendingAction`];
//! the caller waits out the simulated latency and hands the action back to
//! [`UserList::complete`].

use crate::i18n::Key;

use super::{FormField, UserDraft, UserForm, UserId, UserStore};

/// What the form dialog was opened for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(UserId),
}

/// Title and confirm label of the form dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogConfig {
    pub title: Key,
    pub confirm_label: Key,
}

impl FormMode {
    pub fn config(&self) -> DialogConfig {
        match self {
            FormMode::Create => DialogConfig {
                title: Key::AddUserTitle,
                confirm_label: Key::AddUserConfirm,
            },
            FormMode::Edit(_) => DialogConfig {
                title: Key::EditUserTitle,
                confirm_label: Key::EditUserConfirm,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDialog {
    pub mode: FormMode,
    pub form: UserForm,
}

/// A modal shown over the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    Form(FormDialog),
    /// Delete prompt holding the identifier captured when it was opened
    ConfirmDelete(UserId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    /// Modal accepting input
    Open(Modal),
    /// Modal whose action is waiting on simulated latency; inputs disabled
    Pending(Modal),
}

impl DialogState {
    pub fn modal(&self) -> Option<&Modal> {
        match self {
            DialogState::Closed => None,
            DialogState::Open(modal) | DialogState::Pending(modal) => Some(modal),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, DialogState::Pending(_))
    }
}

/// Mutation confirmed by the user, applied once its latency has elapsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    Create(UserDraft),
    Update(UserId, UserDraft),
    Delete(UserId),
}

impl PendingAction {
    /// Notification shown once the action has been applied
    pub fn success_key(&self) -> Key {
        match self {
            PendingAction::Create(_) => Key::UserCreated,
            PendingAction::Update(..) => Key::UserUpdated,
            PendingAction::Delete(_) => Key::UserDeleted,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserList {
    store: UserStore,
    loading: bool,
    dialog: DialogState,
}

impl Default for UserList {
    fn default() -> Self {
        Self::new()
    }
}

impl UserList {
    /// Controller in its initial loading state over the seed collection
    pub fn new() -> Self {
        Self::with_store(UserStore::seeded())
    }

    pub fn with_store(store: UserStore) -> Self {
        Self {
            store,
            loading: true,
            dialog: DialogState::Closed,
        }
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    #[cfg(test)]
    pub fn store_mut(&mut self) -> &mut UserStore {
        &mut self.store
    }

    pub fn dialog(&self) -> &DialogState {
        &self.dialog
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_pending(&self) -> bool {
        self.dialog.is_pending()
    }

    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    /// Row and add triggers are live once loaded and while no modal is shown
    pub fn accepts_triggers(&self) -> bool {
        !self.loading && self.dialog == DialogState::Closed
    }

    /// Open the form dialog with empty fields for creating a user
    pub fn open_add(&mut self) -> bool {
        if !self.accepts_triggers() {
            return false;
        }
        self.dialog = DialogState::Open(Modal::Form(FormDialog {
            mode: FormMode::Create,
            form: UserForm::new(),
        }));
        true
    }

    /// Open the form dialog pre-filled from a stored user.
    /// No-op when the identifier is unknown.
    pub fn open_edit(&mut self, id: UserId) -> bool {
        if !self.accepts_triggers() {
            return false;
        }
        let Some(user) = self.store.get(id) else {
            return false;
        };
        self.dialog = DialogState::Open(Modal::Form(FormDialog {
            mode: FormMode::Edit(id),
            form: UserForm::from_user(user),
        }));
        true
    }

    /// Open the delete prompt for this identifier
    pub fn request_delete(&mut self, id: UserId) -> bool {
        if !self.accepts_triggers() {
            return false;
        }
        self.dialog = DialogState::Open(Modal::ConfirmDelete(id));
        true
    }

    /// Feed input into the open form
    pub fn update_field(&mut self, field: FormField, value: String) -> bool {
        match &mut self.dialog {
            DialogState::Open(Modal::Form(dialog)) => dialog.form.set(field, value),
            _ => false,
        }
    }

    /// Dismiss the open modal, dropping its form state.
    /// A pending modal cannot be dismissed.
    pub fn close(&mut self) -> bool {
        match self.dialog {
            DialogState::Open(_) => {
                self.dialog = DialogState::Closed;
                true
            }
            _ => false,
        }
    }

    /// Confirm the open modal.
    ///
    /// Returns the action to run after the simulated latency, or `None` when
    /// nothing should happen: validation failed, the edit changes no field,
    /// the edited user no longer exists, or no modal is open.
    pub fn confirm(&mut self) -> Option<PendingAction> {
        let DialogState::Open(modal) = &mut self.dialog else {
            return None;
        };

        let action = match modal {
            Modal::Form(dialog) => {
                let draft = dialog.form.submit()?;
                match dialog.mode {
                    FormMode::Create => PendingAction::Create(draft),
                    FormMode::Edit(id) => {
                        let user = self.store.get(id)?;
                        if user.matches(&draft) {
                            return None;
                        }
                        PendingAction::Update(id, draft)
                    }
                }
            }
            Modal::ConfirmDelete(id) => PendingAction::Delete(*id),
        };

        if let DialogState::Open(modal) = std::mem::take(&mut self.dialog) {
            self.dialog = DialogState::Pending(modal);
        }
        Some(action)
    }

    /// Apply an action whose latency has elapsed and close its modal
    pub fn complete(&mut self, action: PendingAction) {
        match action {
            PendingAction::Create(draft) => {
                self.store.insert(draft);
            }
            PendingAction::Update(id, draft) => {
                self.store.update(id, draft);
            }
            PendingAction::Delete(id) => {
                self.store.remove(id);
            }
        }
        if self.dialog.is_pending() {
            self.dialog = DialogState::Closed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::users::{FieldError, UserId};

    fn loaded() -> UserList {
        let mut list = UserList::new();
        list.finish_loading();
        list
    }

    fn fill(list: &mut UserList, first: &str, last: &str, age: &str) {
        list.update_field(FormField::FirstName, first.to_string());
        list.update_field(FormField::LastName, last.to_string());
        list.update_field(FormField::Age, age.to_string());
    }

    fn form(list: &UserList) -> &FormDialog {
        match list.dialog().modal() {
            Some(Modal::Form(dialog)) => dialog,
            other => panic!("expected form dialog, got {:?}", other),
        }
    }

    #[test]
    fn test_triggers_disabled_while_loading() {
        let mut list = UserList::new();
        assert!(list.is_loading());
        assert!(!list.open_add());
        assert!(!list.open_edit(1));
        assert!(!list.request_delete(1));
        assert_eq!(list.dialog(), &DialogState::Closed);

        list.finish_loading();
        assert!(list.open_add());
    }

    #[test]
    fn test_create_on_empty_collection() {
        let mut list = UserList::with_store(UserStore::new());
        list.finish_loading();
        assert!(list.open_add());
        assert_eq!(form(&list).mode.config().title, Key::AddUserTitle);
        fill(&mut list, "Ann", "Lee", "30");

        let action = list.confirm().expect("valid form");
        assert!(list.is_pending());
        // Further confirms are ignored while pending
        assert_eq!(list.confirm(), None);

        list.complete(action);
        assert_eq!(list.dialog(), &DialogState::Closed);
        let users: Vec<_> = list.store().iter().collect();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, 1);
        assert_eq!(users[0].first_name, "Ann");
    }

    #[test]
    fn test_create_appends_after_maximum() {
        let mut list = loaded();
        list.open_add();
        fill(&mut list, "Ann", "Lee", "30");
        let action = list.confirm().unwrap();
        list.complete(action);
        assert_eq!(list.store().iter().last().map(|u| u.id), Some(4));
    }

    #[test]
    fn test_invalid_create_stays_open() {
        let mut list = loaded();
        list.open_add();
        fill(&mut list, "Ann", "", "101");
        assert_eq!(list.confirm(), None);
        assert!(!list.is_pending());

        let errors = form(&list).form.errors();
        assert_eq!(errors.get(FormField::LastName), Some(FieldError::Required));
        assert_eq!(errors.get(FormField::Age), Some(FieldError::TooLarge));
        assert_eq!(list.store().len(), 3);
    }

    #[test]
    fn test_add_starts_from_empty_fields() {
        let mut list = loaded();
        list.open_edit(2);
        list.close();
        list.open_add();
        for field in FormField::all() {
            assert_eq!(form(&list).form.value(*field), "");
        }
    }

    #[test]
    fn test_edit_prefills_and_updates() {
        let mut list = loaded();
        assert!(list.open_edit(2));
        let dialog = form(&list);
        assert_eq!(dialog.mode, FormMode::Edit(2));
        assert_eq!(dialog.mode.config().confirm_label, Key::EditUserConfirm);
        assert_eq!(dialog.form.value(FormField::FirstName), "Rupert");

        list.update_field(FormField::Age, "56".into());
        let action = list.confirm().unwrap();
        assert_eq!(action.success_key(), Key::UserUpdated);
        list.complete(action);

        assert_eq!(list.store().get(2).map(|u| u.age.as_str()), Some("56"));
        assert_eq!(list.store().len(), 3);
        assert_eq!(list.dialog(), &DialogState::Closed);
    }

    #[test]
    fn test_unchanged_edit_is_noop() {
        let mut list = loaded();
        list.open_edit(1);
        let before = list.store().clone();

        assert_eq!(list.confirm(), None);
        assert!(!list.is_pending());
        assert!(matches!(list.dialog(), DialogState::Open(Modal::Form(_))));
        let ids: Vec<UserId> = list.store().iter().map(|u| u.id).collect();
        let before_ids: Vec<UserId> = before.iter().map(|u| u.id).collect();
        assert_eq!(ids, before_ids);
        assert_eq!(list.store().get(1), before.get(1));
    }

    #[test]
    fn test_edit_unknown_id_is_noop() {
        let mut list = loaded();
        assert!(!list.open_edit(42));
        assert_eq!(list.dialog(), &DialogState::Closed);
        assert_eq!(list.store().len(), 3);
    }

    #[test]
    fn test_delete_uses_captured_id() {
        let mut list = loaded();
        assert!(list.request_delete(2));

        // The collection changes shape before the prompt is confirmed
        list.store_mut().remove(1);
        list.store_mut().insert(UserDraft::new("Ann", "Lee", "30"));

        let action = list.confirm().unwrap();
        assert_eq!(action, PendingAction::Delete(2));
        list.complete(action);

        let ids: Vec<UserId> = list.store().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![3, 4]);
        assert_eq!(list.dialog(), &DialogState::Closed);
    }

    #[test]
    fn test_close_resets_form_and_delete_target() {
        let mut list = loaded();
        list.open_add();
        list.confirm();
        assert!(!form(&list).form.errors().is_empty());
        assert!(list.close());
        list.open_add();
        assert!(form(&list).form.errors().is_empty());

        list.close();
        list.request_delete(3);
        assert!(list.close());
        assert_eq!(list.dialog().modal(), None);
    }

    #[test]
    fn test_pending_modal_cannot_close_or_take_input() {
        let mut list = loaded();
        list.open_edit(3);
        list.update_field(FormField::FirstName, "Jake".into());
        let action = list.confirm().unwrap();

        assert!(!list.close());
        assert!(!list.update_field(FormField::FirstName, "Jay".into()));
        assert!(!list.open_add());

        list.complete(action);
        assert_eq!(list.store().get(3).map(|u| u.first_name.as_str()), Some("Jake"));
    }
}
