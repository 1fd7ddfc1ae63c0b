//! User form state: the three field values and their displayed errors

use super::{FieldErrors, FormField, User, UserDraft, validate};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    values: UserDraft,
    errors: FieldErrors,
}

impl UserForm {
    /// Empty form, used for creation
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled from a stored record, used for editing
    pub fn from_user(user: &User) -> Self {
        Self {
            values: user.draft(),
            errors: FieldErrors::default(),
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.values.first_name,
            FormField::LastName => &self.values.last_name,
            FormField::Age => &self.values.age,
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Apply user input to a field.
    ///
    /// The age field only takes ASCII digits; other input is rejected and
    /// the previous value kept. An accepted edit clears that field's error
    /// without re-validating.
    pub fn set(&mut self, field: FormField, value: String) -> bool {
        if field == FormField::Age && !value.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        let slot = match field {
            FormField::FirstName => &mut self.values.first_name,
            FormField::LastName => &mut self.values.last_name,
            FormField::Age => &mut self.values.age,
        };
        *slot = value;
        self.errors.clear(field);
        true
    }

    /// Validate the current values, merging any errors into the displayed set.
    /// Returns the captured values when the form is valid.
    pub fn submit(&mut self) -> Option<UserDraft> {
        let found = validate(&self.values);
        if found.is_empty() {
            Some(self.values.clone())
        } else {
            self.errors.merge(&found);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::users::FieldError;

    #[test]
    fn test_submit_valid_form() {
        let mut form = UserForm::new();
        form.set(FormField::FirstName, "Ann".into());
        form.set(FormField::LastName, "Lee".into());
        form.set(FormField::Age, "30".into());
        assert_eq!(form.submit(), Some(UserDraft::new("Ann", "Lee", "30")));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_submit_invalid_merges_errors() {
        let mut form = UserForm::new();
        form.set(FormField::FirstName, "Ann".into());
        assert_eq!(form.submit(), None);
        assert_eq!(form.errors().get(FormField::FirstName), None);
        assert_eq!(form.errors().get(FormField::LastName), Some(FieldError::Required));
        assert_eq!(form.errors().get(FormField::Age), Some(FieldError::Required));
    }

    #[test]
    fn test_stale_error_survives_next_submit() {
        let mut form = UserForm::new();
        form.submit();
        // Fix last name and age but leave first name's error in place
        form.set(FormField::LastName, "Lee".into());
        form.set(FormField::Age, "30".into());
        form.set(FormField::FirstName, "x".repeat(21));
        assert_eq!(form.errors().get(FormField::FirstName), None);

        assert_eq!(form.submit(), None);
        assert_eq!(form.errors().get(FormField::FirstName), Some(FieldError::TooLong));
        assert_eq!(form.errors().get(FormField::LastName), None);
    }

    #[test]
    fn test_editing_clears_only_that_field() {
        let mut form = UserForm::new();
        form.submit();
        form.set(FormField::Age, "500".into());
        // Cleared optimistically even though 500 is out of range
        assert_eq!(form.errors().get(FormField::Age), None);
        assert_eq!(form.errors().get(FormField::FirstName), Some(FieldError::Required));
    }

    #[test]
    fn test_age_rejects_non_digits() {
        let mut form = UserForm::new();
        assert!(form.set(FormField::Age, "42".into()));
        assert!(!form.set(FormField::Age, "42a".into()));
        assert!(!form.set(FormField::Age, "-1".into()));
        assert_eq!(form.value(FormField::Age), "42");
        assert!(form.set(FormField::Age, String::new()));
        assert_eq!(form.value(FormField::Age), "");
    }
}
