//! Application state definitions

use std::sync::Arc;

use iced::animation::Animation;
use iced::time::Instant;

use crate::features::users::{ActionExecutor, UserId, UserList};
use crate::features::{Settings, ThemeChoice};
use crate::i18n::Locale;
use crate::ui::widgets::Toast;

/// Main application state
pub struct App {
    /// Settings, locale, theme and the latency executor
    pub core: CoreState,
    /// The user roster and its dialogs
    pub users: UserList,
    /// Transient UI state (toast, animations)
    pub ui: UiState,
}

/// Core services
pub struct CoreState {
    pub settings: Settings,
    pub locale: Locale,
    /// Active theme; starts from settings, never written back
    pub theme: ThemeChoice,
    /// Stands in for the network calls behind every roster action
    pub executor: Arc<dyn ActionExecutor>,
}

impl CoreState {
    pub fn new(settings: Settings, locale: Locale, executor: Arc<dyn ActionExecutor>) -> Self {
        Self {
            theme: settings.display.theme,
            settings,
            locale,
            executor,
        }
    }
}

/// UI View State
pub struct UiState {
    pub toast: Option<Toast>,
    /// Generation of the last toast shown
    pub toast_generation: u64,
    /// Fade-in of the modal that is currently open
    pub dialog_animation: Animation<bool>,
    /// Timestamp of the latest animation frame
    pub now: Instant,
    /// Table row under the cursor
    pub hovered_user: Option<UserId>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            toast: None,
            toast_generation: 0,
            dialog_animation: Animation::new(false),
            now: Instant::now(),
            hovered_user: None,
        }
    }

    /// Check if any UI animation is currently active
    pub fn has_active_animations(&self, now: Instant) -> bool {
        self.dialog_animation.is_animating(now)
    }

    /// Current modal opacity (0.0 to 1.0) as of the latest frame
    pub fn dialog_opacity(&self) -> f32 {
        self.dialog_animation.interpolate(0.0, 1.0, self.now)
    }

    pub fn start_dialog_animation(&mut self) {
        let now = Instant::now();
        self.now = now;
        self.dialog_animation = Animation::new(false);
        self.dialog_animation.go_mut(true, now);
    }

    pub fn reset_dialog_animation(&mut self) {
        self.dialog_animation = Animation::new(false);
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
