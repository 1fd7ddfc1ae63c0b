//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Rosterdeck");
    m.insert(Key::AppBanner, "HARUSAME UI");
    m.insert(Key::ChangeTheme, "Change Theme");

    // User table
    m.insert(Key::AddUser, "Add User");
    m.insert(Key::ColumnFirstName, "First Name");
    m.insert(Key::ColumnLastName, "Last Name");
    m.insert(Key::ColumnAge, "Age");
    m.insert(Key::Loading, "Loading...");
    m.insert(Key::NoUsers, "No users");

    // User form dialog
    m.insert(Key::AddUserTitle, "Add User");
    m.insert(Key::AddUserConfirm, "Add");
    m.insert(Key::EditUserTitle, "Edit User");
    m.insert(Key::EditUserConfirm, "Edit");
    m.insert(Key::FieldFirstName, "First Name");
    m.insert(Key::FieldLastName, "Last Name");
    m.insert(Key::FieldAge, "Age");
    m.insert(Key::FirstNamePlaceholder, "Enter first name");
    m.insert(Key::LastNamePlaceholder, "Enter last name");
    m.insert(Key::AgePlaceholder, "Enter age");

    // Validation
    m.insert(Key::ErrorRequired, "Required");
    m.insert(Key::ErrorTooLong, "Must not exceed 20 characters");
    m.insert(Key::ErrorTooLarge, "Must not be larger than 100");

    // Delete prompt
    m.insert(Key::DeleteUserTitle, "Delete User");
    m.insert(
        Key::DeleteUserMessage,
        "Are you sure you want to delete this user?\nThis action is irreversible.",
    );

    // Notifications
    m.insert(Key::UserCreated, "User created successfully");
    m.insert(Key::UserUpdated, "User updated successfully");
    m.insert(Key::UserDeleted, "User deleted successfully");

    // Common UI
    m.insert(Key::Cancel, "Cancel");
    m.insert(Key::Delete, "Delete");
    m.insert(Key::Working, "Working...");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
