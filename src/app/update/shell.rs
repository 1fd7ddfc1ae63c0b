//! Shell update handlers: theme switching, toasts, row hover and animation frames

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::ui::widgets::Toast;

impl App {
    pub fn handle_shell(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Noop => Some(Task::none()),

            Message::ToggleTheme => {
                self.core.theme = self.core.theme.toggled();
                tracing::info!("Theme switched to {}", self.core.theme.display_name());
                Some(Task::none())
            }

            Message::HideToast(generation) => {
                if self
                    .ui
                    .toast
                    .as_ref()
                    .is_some_and(|t| t.generation == *generation)
                {
                    self.ui.toast = None;
                }
                Some(Task::none())
            }

            Message::RowHovered(id) => {
                self.ui.hovered_user = Some(*id);
                Some(Task::none())
            }

            // Leaving an old row may arrive after entering the next one
            Message::RowUnhovered(id) => {
                if self.ui.hovered_user == Some(*id) {
                    self.ui.hovered_user = None;
                }
                Some(Task::none())
            }

            Message::AnimationTick(now) => {
                self.ui.now = *now;
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Show a toast and schedule its dismissal
    pub(super) fn show_toast(&mut self, message: impl Into<String>) -> Task<Message> {
        self.ui.toast_generation += 1;
        let generation = self.ui.toast_generation;
        self.ui.toast = Some(Toast::new(message, generation));

        let duration = self.core.settings.notifications.toast_duration();
        Task::perform(
            async move {
                tokio::time::sleep(duration).await;
            },
            move |_| Message::HideToast(generation),
        )
    }
}
