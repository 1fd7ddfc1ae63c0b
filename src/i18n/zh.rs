//! Chinese translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Rosterdeck");
    m.insert(Key::AppBanner, "HARUSAME UI");
    m.insert(Key::ChangeTheme, "切换主题");

    // User table
    m.insert(Key::AddUser, "添加用户");
    m.insert(Key::ColumnFirstName, "名");
    m.insert(Key::ColumnLastName, "姓");
    m.insert(Key::ColumnAge, "年龄");
    m.insert(Key::Loading, "加载中...");
    m.insert(Key::NoUsers, "暂无用户");

    // User form dialog
    m.insert(Key::AddUserTitle, "添加用户");
    m.insert(Key::AddUserConfirm, "添加");
    m.insert(Key::EditUserTitle, "编辑用户");
    m.insert(Key::EditUserConfirm, "保存");
    m.insert(Key::FieldFirstName, "名");
    m.insert(Key::FieldLastName, "姓");
    m.insert(Key::FieldAge, "年龄");
    m.insert(Key::FirstNamePlaceholder, "请输入名");
    m.insert(Key::LastNamePlaceholder, "请输入姓");
    m.insert(Key::AgePlaceholder, "请输入年龄");

    // Validation
    m.insert(Key::ErrorRequired, "必填");
    m.insert(Key::ErrorTooLong, "不能超过 20 个字符");
    m.insert(Key::ErrorTooLarge, "不能大于 100");

    // Delete prompt
    m.insert(Key::DeleteUserTitle, "删除用户");
    m.insert(Key::DeleteUserMessage, "确定要删除该用户吗？\n此操作无法撤销。");

    // Notifications
    m.insert(Key::UserCreated, "用户已创建");
    m.insert(Key::UserUpdated, "用户已更新");
    m.insert(Key::UserDeleted, "用户已删除");

    // Common UI
    m.insert(Key::Cancel, "取消");
    m.insert(Key::Delete, "删除");
    m.insert(Key::Working, "处理中...");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
