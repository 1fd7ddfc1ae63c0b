//! Add/edit user form dialog component

use iced::widget::{Space, button, column, container, row, svg, text, text_input};
use iced::{Alignment, Element, Fill, Length, Padding};

use crate::app::Message;
use crate::features::users::{FormDialog, FormField};
use crate::i18n::{Key, Locale};
use crate::ui::theme::{self, BOLD_WEIGHT};
use crate::ui::{icons, widgets};

/// Widget id of the first name input, focused when the dialog opens
pub const FIRST_NAME_INPUT: &str = "user-form-first-name";

const NAME_FIELD_WIDTH: f32 = 220.0;
const AGE_FIELD_WIDTH: f32 = 120.0;

/// Build the user form dialog
pub fn view<'a>(
    dialog: &'a FormDialog,
    pending: bool,
    opacity: f32,
    locale: Locale,
) -> Element<'a, Message> {
    let config = dialog.mode.config();

    let title = text(locale.get(config.title)).size(20).font(iced::Font {
        weight: BOLD_WEIGHT,
        ..Default::default()
    });

    let close_btn = button(
        svg(svg::Handle::from_memory(icons::CLOSE.as_bytes()))
            .width(18)
            .height(18)
            .style(theme::icon),
    )
    .padding(6)
    .style(theme::icon_button)
    .on_press_maybe((!pending).then_some(Message::CloseDialog));

    let header = row![title, Space::new().width(Fill), close_btn]
        .align_y(Alignment::Center)
        .padding(Padding::new(12.0).left(16.0).right(8.0));

    let names = row![
        field(dialog, FormField::FirstName, NAME_FIELD_WIDTH, pending, locale),
        field(dialog, FormField::LastName, NAME_FIELD_WIDTH, pending, locale),
    ]
    .spacing(8);

    let fields = column![
        names,
        field(dialog, FormField::Age, AGE_FIELD_WIDTH, pending, locale)
    ]
    .spacing(8)
    .padding(16);

    let confirm_label = if pending {
        locale.get(Key::Working)
    } else {
        locale.get(config.confirm_label)
    };
    let confirm_btn = button(text(confirm_label).size(14))
        .padding(Padding::new(8.0).left(20.0).right(20.0))
        .style(theme::contained_button)
        .on_press_maybe((!pending).then_some(Message::ConfirmDialog));

    let cancel_btn = button(text(locale.get(Key::Cancel)).size(14))
        .padding(Padding::new(8.0).left(20.0).right(20.0))
        .style(theme::outlined_button)
        .on_press_maybe((!pending).then_some(Message::CloseDialog));

    let footer = container(
        row![confirm_btn, cancel_btn]
            .spacing(8)
            .align_y(Alignment::Center),
    )
    .width(Fill)
    .align_x(Alignment::End)
    .padding(8);

    let content = column![
        header,
        separator(),
        fields,
        separator(),
        footer
    ]
    .width(Length::Shrink);

    widgets::modal(content, opacity, close_or_noop(pending), Message::Noop)
}

fn separator<'a>() -> Element<'a, Message> {
    container(Space::new().height(1))
        .width(Fill)
        .style(theme::separator)
        .into()
}

fn close_or_noop(pending: bool) -> Message {
    if pending {
        Message::Noop
    } else {
        Message::CloseDialog
    }
}

/// Labelled input with its error line underneath
fn field<'a>(
    dialog: &'a FormDialog,
    field: FormField,
    width: f32,
    pending: bool,
    locale: Locale,
) -> Element<'a, Message> {
    let (label, placeholder) = match field {
        FormField::FirstName => (Key::FieldFirstName, Key::FirstNamePlaceholder),
        FormField::LastName => (Key::FieldLastName, Key::LastNamePlaceholder),
        FormField::Age => (Key::FieldAge, Key::AgePlaceholder),
    };
    let error = dialog.form.errors().get(field);
    let has_error = error.is_some();

    let label = text(format!("{} *", locale.get(label)))
        .size(13)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        });

    let mut input = text_input(locale.get(placeholder), dialog.form.value(field))
        .padding(10)
        .size(14)
        .style(move |theme, status| theme::text_field(theme, status, has_error));
    if field == FormField::FirstName {
        input = input.id(iced::widget::Id::new(FIRST_NAME_INPUT));
    }
    if !pending {
        input = input.on_input(move |value| Message::FieldChanged(field, value));
    }

    let error_line = text(error.map(|e| locale.error(e)).unwrap_or(""))
        .size(12)
        .style(|theme| text::Style {
            color: Some(theme::danger(theme)),
        });

    column![label, input, error_line]
        .spacing(4)
        .width(width)
        .into()
}
