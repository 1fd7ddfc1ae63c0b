//! Main application module

mod message;
mod state;
mod update;
mod view;

use std::sync::Arc;

use iced::{Task, Theme};

use crate::features::Settings;
use crate::features::users::{ActionExecutor, Latency, TimerExecutor};
use crate::i18n::{Language, Locale};
use crate::ui::theme;
pub use message::Message;
pub use state::{App, CoreState, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let executor = TimerExecutor::new(
            settings.latency.initial_load(),
            settings.latency.action(),
        );
        Self::with_settings(settings, Arc::new(executor))
    }

    /// Create the application with explicit settings and latency executor.
    /// The returned task finishes the initial user fetch.
    pub fn with_settings(
        settings: Settings,
        executor: Arc<dyn ActionExecutor>,
    ) -> (Self, Task<Message>) {
        let locale = Locale::new(Language::from_code(&settings.display.language));
        tracing::info!(
            "Starting with theme {:?}, language {}",
            settings.display.theme,
            locale.language.code()
        );

        let core = CoreState::new(settings, locale, executor);
        let load = Task::perform(core.executor.delay(Latency::InitialLoad), |_| {
            Message::UsersLoaded
        });

        let app = Self {
            core,
            users: Default::default(),
            ui: UiState::new(),
        };
        (app, load)
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        theme::iced_theme(self.core.theme)
    }

    /// Window title with the active theme name
    pub fn title(&self) -> String {
        format!(
            "{} - {}",
            self.core.locale.get(crate::i18n::Key::AppName),
            self.core.theme.display_name()
        )
    }

    /// Subscriptions for dialog animation frames and modal keyboard shortcuts
    pub fn subscription(&self) -> iced::Subscription<Message> {
        // Judged at the last frame seen so the final frame is always delivered
        let animation_sub = if subscription_logic::needs_animation_subscription(
            self.ui.has_active_animations(self.ui.now),
        ) {
            iced::window::frames().map(Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        let keyboard_sub = if subscription_logic::needs_keyboard_subscription(self.users.dialog())
        {
            iced::event::listen_with(modal_key)
        } else {
            iced::Subscription::none()
        };

        iced::Subscription::batch([animation_sub, keyboard_sub])
    }
}

/// Escape dismisses and Enter confirms the open modal
fn modal_key(
    event: iced::Event,
    _status: iced::event::Status,
    _window: iced::window::Id,
) -> Option<Message> {
    match event {
        iced::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, .. }) => {
            subscription_logic::modal_shortcut(&key)
        }
        _ => None,
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    use iced::keyboard::{Key, key::Named};

    use super::Message;
    use crate::features::users::DialogState;

    pub fn needs_animation_subscription(has_animations: bool) -> bool {
        has_animations
    }

    /// Modal shortcuts are only listened for while a modal is shown
    pub fn needs_keyboard_subscription(dialog: &DialogState) -> bool {
        dialog.modal().is_some()
    }

    pub fn modal_shortcut(key: &Key) -> Option<Message> {
        match key {
            Key::Named(Named::Escape) => Some(Message::CloseDialog),
            Key::Named(Named::Enter) => Some(Message::ConfirmDialog),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use iced::keyboard::{Key, Modifiers, key::Named};

    use super::subscription_logic::*;
    use super::*;
    use crate::features::users::{ImmediateExecutor, PendingAction};

    fn app() -> App {
        let (mut app, _) = App::with_settings(Settings::default(), Arc::new(ImmediateExecutor));
        let _ = app.update(Message::UsersLoaded);
        app
    }

    fn shortcut(named: Named) -> Message {
        modal_shortcut(&Key::Named(named)).expect("modal shortcut")
    }

    #[test]
    fn test_escape_and_enter_map_to_dialog_messages() {
        assert!(matches!(shortcut(Named::Escape), Message::CloseDialog));
        assert!(matches!(shortcut(Named::Enter), Message::ConfirmDialog));
        assert!(modal_shortcut(&Key::Named(Named::Tab)).is_none());
        assert!(modal_shortcut(&Key::Character("a".into())).is_none());
    }

    #[test]
    fn test_non_key_events_ignored_for_any_status() {
        let window = iced::window::Id::unique();
        for status in [iced::event::Status::Ignored, iced::event::Status::Captured] {
            let event = iced::Event::Keyboard(iced::keyboard::Event::ModifiersChanged(
                Modifiers::default(),
            ));
            assert!(modal_key(event, status, window).is_none());
        }
    }

    #[test]
    fn test_keyboard_listener_follows_modal() {
        let mut app = app();
        assert!(!needs_keyboard_subscription(app.users.dialog()));

        let _ = app.update(Message::AddUser);
        assert!(needs_keyboard_subscription(app.users.dialog()));

        let _ = app.update(Message::CloseDialog);
        assert!(!needs_keyboard_subscription(app.users.dialog()));

        let _ = app.update(Message::DeleteUser(1));
        let _ = app.update(Message::ConfirmDialog);
        assert!(app.users.is_pending());
        assert!(needs_keyboard_subscription(app.users.dialog()));
    }

    #[test]
    fn test_shortcuts_while_pending_keep_modal_pending() {
        let mut app = app();
        let _ = app.update(Message::DeleteUser(2));
        let _ = app.update(shortcut(Named::Enter));
        assert!(app.users.is_pending());

        let _ = app.update(shortcut(Named::Enter));
        let _ = app.update(shortcut(Named::Escape));
        assert!(app.users.is_pending());
        assert_eq!(app.users.store().len(), 3);

        let _ = app.update(Message::ActionFinished(PendingAction::Delete(2)));
        assert!(!app.users.is_pending());
        assert!(app.users.store().get(2).is_none());
    }

    #[test]
    fn test_animation_subscription_only_while_animating() {
        assert!(needs_animation_subscription(true));
        assert!(!needs_animation_subscription(false));
    }
}
