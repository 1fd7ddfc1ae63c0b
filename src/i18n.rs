//! Internationalization (i18n) support for Rosterdeck
//!
//! Structure:
//! - i18n.rs: Core types (Language, Key, Locale) and translation lookup
//! - en.rs: English translations
//! - zh.rs: Chinese translations

mod en;
mod zh;

use std::collections::HashMap;

use crate::features::users::FieldError;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }

    /// All available languages
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::Chinese]
    }

    /// Resolve a language code, falling back to English
    pub fn from_code(code: &str) -> Self {
        Language::all()
            .iter()
            .copied()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
            .unwrap_or_default()
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // App
    AppName,
    AppBanner,
    ChangeTheme,

    // User table
    AddUser,
    ColumnFirstName,
    ColumnLastName,
    ColumnAge,
    Loading,
    NoUsers,

    // User form dialog
    AddUserTitle,
    AddUserConfirm,
    EditUserTitle,
    EditUserConfirm,
    FieldFirstName,
    FieldLastName,
    FieldAge,
    FirstNamePlaceholder,
    LastNamePlaceholder,
    AgePlaceholder,

    // Validation
    ErrorRequired,
    ErrorTooLong,
    ErrorTooLarge,

    // Delete prompt
    DeleteUserTitle,
    DeleteUserMessage,

    // Notifications
    UserCreated,
    UserUpdated,
    UserDeleted,

    // Common UI
    Cancel,
    Delete,
    Working,
}

impl Key {
    pub fn for_error(error: FieldError) -> Self {
        match error {
            FieldError::Required => Key::ErrorRequired,
            FieldError::TooLong => Key::ErrorTooLong,
            FieldError::TooLarge => Key::ErrorTooLarge,
        }
    }
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::English => en::translations(),
        Language::Chinese => zh::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }

    /// Message for a validation error
    pub fn error(&self, error: FieldError) -> &'static str {
        self.get(Key::for_error(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYS: &[Key] = &[
        Key::AppName,
        Key::AppBanner,
        Key::ChangeTheme,
        Key::AddUser,
        Key::ColumnFirstName,
        Key::ColumnLastName,
        Key::ColumnAge,
        Key::Loading,
        Key::NoUsers,
        Key::AddUserTitle,
        Key::AddUserConfirm,
        Key::EditUserTitle,
        Key::EditUserConfirm,
        Key::FieldFirstName,
        Key::FieldLastName,
        Key::FieldAge,
        Key::FirstNamePlaceholder,
        Key::LastNamePlaceholder,
        Key::AgePlaceholder,
        Key::ErrorRequired,
        Key::ErrorTooLong,
        Key::ErrorTooLarge,
        Key::DeleteUserTitle,
        Key::DeleteUserMessage,
        Key::UserCreated,
        Key::UserUpdated,
        Key::UserDeleted,
        Key::Cancel,
        Key::Delete,
        Key::Working,
    ];

    #[test]
    fn test_every_key_translated() {
        for lang in Language::all() {
            for key in ALL_KEYS {
                assert_ne!(t(*lang, *key), "???", "{:?} missing for {:?}", key, lang);
            }
        }
    }

    #[test]
    fn test_english_errors_match_validation() {
        let locale = Locale::new(Language::English);
        for error in [FieldError::Required, FieldError::TooLong, FieldError::TooLarge] {
            assert_eq!(locale.error(error), error.to_string());
        }
    }

    #[test]
    fn test_language_from_code() {
        assert_eq!(Language::from_code("zh"), Language::Chinese);
        assert_eq!(Language::from_code("EN"), Language::English);
        assert_eq!(Language::from_code("fr"), Language::English);
    }
}
