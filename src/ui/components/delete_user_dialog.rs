//! Delete user confirmation prompt

use iced::widget::{Space, button, column, row, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::theme::{self, BOLD_WEIGHT};
use crate::ui::widgets;

/// Build the delete confirmation prompt
pub fn view<'a>(pending: bool, opacity: f32, locale: Locale) -> Element<'a, Message> {
    let title = text(locale.get(Key::DeleteUserTitle))
        .size(18)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        });

    let message = text(locale.get(Key::DeleteUserMessage))
        .size(14)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        });

    let delete_label = if pending {
        locale.get(Key::Working)
    } else {
        locale.get(Key::Delete)
    };
    let delete_btn = button(text(delete_label).size(14))
        .padding([10, 24])
        .style(theme::danger_button)
        .on_press_maybe((!pending).then_some(Message::ConfirmDialog));

    let cancel_btn = button(text(locale.get(Key::Cancel)).size(14))
        .padding([10, 24])
        .style(theme::outlined_button)
        .on_press_maybe((!pending).then_some(Message::CloseDialog));

    let buttons = row![
        Space::new().width(Fill),
        cancel_btn,
        Space::new().width(12),
        delete_btn,
    ]
    .align_y(Alignment::Center);

    let content = column![
        title,
        Space::new().height(12),
        message,
        Space::new().height(24),
        buttons,
    ]
    .width(380)
    .padding(24);

    let on_backdrop = if pending {
        Message::Noop
    } else {
        Message::CloseDialog
    };
    widgets::modal(content, opacity, on_backdrop, Message::Noop)
}
