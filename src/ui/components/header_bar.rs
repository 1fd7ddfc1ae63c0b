//! Application header bar with title and theme switch

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::theme::{self, BOLD_WEIGHT};

/// Header bar height in pixels
pub const HEADER_HEIGHT: f32 = 48.0;

/// Build the header bar
pub fn view<'a>(locale: Locale) -> Element<'a, Message> {
    let title = text(locale.get(Key::AppBanner))
        .size(22)
        .color(theme::WHITE)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        });

    let change_theme = button(text(locale.get(Key::ChangeTheme)).size(14))
        .padding(Padding::new(6.0).left(16.0).right(16.0))
        .style(theme::header_button)
        .on_press(Message::ToggleTheme);

    container(
        row![title, Space::new().width(Fill), change_theme]
            .align_y(Alignment::Center)
            .padding(Padding::new(0.0).left(16.0).right(16.0)),
    )
    .width(Fill)
    .height(HEADER_HEIGHT)
    .center_y(HEADER_HEIGHT)
    .style(theme::header_bar)
    .into()
}
