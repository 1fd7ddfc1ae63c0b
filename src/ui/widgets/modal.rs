//! Modal overlay widget
//!
//! Centers a card over a dimmed backdrop and swallows every click beneath it.

use iced::mouse::Interaction;
use iced::widget::{container, mouse_area, opaque};
use iced::{Element, Fill};

use crate::ui::theme;

/// Wrap dialog content into a blocking modal layer.
///
/// `opacity` fades card and backdrop together. `on_backdrop` is sent when the
/// dimmed area outside the card is clicked; `on_card` absorbs clicks on the
/// card itself that no inner widget handled.
pub fn modal<'a, Message: Clone + 'a>(
    content: impl Into<Element<'a, Message>>,
    opacity: f32,
    on_backdrop: Message,
    on_card: Message,
) -> Element<'a, Message> {
    let card = container(content).style(move |theme| theme::dialog_box(theme, opacity));
    let card = mouse_area(card)
        .interaction(Interaction::Idle)
        .on_press(on_card);

    let backdrop = container(card)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .style(move |_theme| theme::overlay_backdrop(opacity));

    let event_blocker = mouse_area(backdrop)
        .interaction(Interaction::Idle)
        .on_press(on_backdrop);

    opaque(event_blocker).into()
}
