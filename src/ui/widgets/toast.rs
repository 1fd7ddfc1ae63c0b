//! Toast notification widget
//!
//! Light card with an accent bar and check icon, floated in a corner by the caller.

use iced::widget::{Space, container, row, svg, text};
use iced::{Alignment, Element, Padding};

use crate::ui::{icons, theme};

/// Toast notification data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    /// Increases with every toast shown; a hide timer only dismisses its own toast
    pub generation: u64,
}

impl Toast {
    pub fn new(message: impl Into<String>, generation: u64) -> Self {
        Self {
            message: message.into(),
            generation,
        }
    }
}

/// Build a toast notification widget
pub fn view_toast<'a, Message: 'a>(toast: &Toast) -> Element<'a, Message> {
    let message = toast.message.clone();

    // Left accent bar (thin vertical line)
    let accent_bar = container(Space::new().width(3).height(20)).style(|theme: &iced::Theme| {
        iced::widget::container::Style {
            background: Some(iced::Background::Color(theme.palette().success)),
            border: iced::Border {
                radius: 2.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    });

    let icon_widget = svg(svg::Handle::from_memory(icons::CHECK.as_bytes()))
        .width(16)
        .height(16)
        .style(|theme: &iced::Theme, _status| svg::Style {
            color: Some(theme.palette().success),
        });

    let message_widget = text(message).size(14).style(|theme| text::Style {
        color: Some(theme::text_primary(theme)),
    });

    let content = row![
        accent_bar,
        Space::new().width(12),
        icon_widget,
        Space::new().width(10),
        message_widget,
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(14.0).left(12.0).right(20.0));

    container(content).style(theme::toast).into()
}
