//! User form validation

use super::{MAX_AGE, MAX_NAME_LEN, UserDraft};

/// Fields of the user form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    FirstName,
    LastName,
    Age,
}

impl FormField {
    pub fn all() -> &'static [FormField] {
        &[FormField::FirstName, FormField::LastName, FormField::Age]
    }
}

/// A validation failure on a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Field left empty
    Required,
    /// Name longer than the allowed number of characters
    TooLong,
    /// Age larger than the allowed maximum
    TooLarge,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::Required => write!(f, "Required"),
            FieldError::TooLong => write!(f, "Must not exceed 20 characters"),
            FieldError::TooLarge => write!(f, "Must not be larger than 100"),
        }
    }
}

/// Error currently displayed for each field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    first_name: Option<FieldError>,
    last_name: Option<FieldError>,
    age: Option<FieldError>,
}

impl FieldErrors {
    pub fn get(&self, field: FormField) -> Option<FieldError> {
        *self.slot(field)
    }

    pub fn set(&mut self, field: FormField, error: FieldError) {
        *self.slot_mut(field) = Some(error);
    }

    /// Clear the error of one field, returning whether there was one
    pub fn clear(&mut self, field: FormField) -> bool {
        self.slot_mut(field).take().is_some()
    }

    /// Overlay freshly found errors; fields without a new error keep their current state
    pub fn merge(&mut self, found: &[(FormField, FieldError)]) {
        for (field, error) in found {
            self.set(*field, *error);
        }
    }

    pub fn is_empty(&self) -> bool {
        FormField::all().iter().all(|f| self.get(*f).is_none())
    }

    fn slot(&self, field: FormField) -> &Option<FieldError> {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Age => &self.age,
        }
    }

    fn slot_mut(&mut self, field: FormField) -> &mut Option<FieldError> {
        match field {
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::Age => &mut self.age,
        }
    }
}

fn check_name(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        Some(FieldError::Required)
    } else if value.chars().count() > MAX_NAME_LEN {
        Some(FieldError::TooLong)
    } else {
        None
    }
}

fn check_age(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError::Required);
    }
    match value.parse::<f64>() {
        Ok(age) if age > MAX_AGE => Some(FieldError::TooLarge),
        _ => None,
    }
}

/// Validate all fields of a draft, returning the errors found in field order
pub fn validate(draft: &UserDraft) -> Vec<(FormField, FieldError)> {
    [
        (FormField::FirstName, check_name(&draft.first_name)),
        (FormField::LastName, check_name(&draft.last_name)),
        (FormField::Age, check_age(&draft.age)),
    ]
    .into_iter()
    .filter_map(|(field, error)| error.map(|e| (field, e)))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> UserDraft {
        UserDraft::new("Ann", "Lee", "30")
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        assert!(validate(&valid()).is_empty());
    }

    #[test]
    fn test_empty_fields_are_required_only() {
        let errors = validate(&UserDraft::default());
        assert_eq!(
            errors,
            vec![
                (FormField::FirstName, FieldError::Required),
                (FormField::LastName, FieldError::Required),
                (FormField::Age, FieldError::Required),
            ]
        );
        for (_, error) in errors {
            assert_eq!(error.to_string(), "Required");
        }
    }

    #[test]
    fn test_name_length_boundary() {
        let mut draft = valid();
        draft.first_name = "a".repeat(20);
        draft.last_name = "b".repeat(20);
        assert!(validate(&draft).is_empty());

        draft.first_name = "a".repeat(21);
        draft.last_name = "b".repeat(21);
        let errors = validate(&draft);
        assert_eq!(
            errors,
            vec![
                (FormField::FirstName, FieldError::TooLong),
                (FormField::LastName, FieldError::TooLong),
            ]
        );
        assert_eq!(errors[0].1.to_string(), "Must not exceed 20 characters");
    }

    #[test]
    fn test_name_length_counts_characters() {
        let mut draft = valid();
        // 20 multi-byte characters is still within the limit
        draft.first_name = "é".repeat(20);
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn test_age_boundary() {
        let mut draft = valid();
        draft.age = "100".to_string();
        assert!(validate(&draft).is_empty());

        draft.age = "101".to_string();
        let errors = validate(&draft);
        assert_eq!(errors, vec![(FormField::Age, FieldError::TooLarge)]);
        assert_eq!(errors[0].1.to_string(), "Must not be larger than 100");
    }

    #[test]
    fn test_merge_leaves_other_fields_untouched() {
        let mut errors = FieldErrors::default();
        errors.set(FormField::LastName, FieldError::TooLong);

        errors.merge(&[(FormField::Age, FieldError::Required)]);
        assert_eq!(errors.get(FormField::LastName), Some(FieldError::TooLong));
        assert_eq!(errors.get(FormField::Age), Some(FieldError::Required));
        assert_eq!(errors.get(FormField::FirstName), None);
    }

    #[test]
    fn test_clear_single_field() {
        let mut errors = FieldErrors::default();
        errors.merge(&[
            (FormField::FirstName, FieldError::Required),
            (FormField::Age, FieldError::TooLarge),
        ]);
        assert!(errors.clear(FormField::FirstName));
        assert!(!errors.clear(FormField::FirstName));
        assert_eq!(errors.get(FormField::Age), Some(FieldError::TooLarge));
        assert!(!errors.is_empty());
    }
}
