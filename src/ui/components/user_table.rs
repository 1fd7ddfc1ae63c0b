//! User table with add button and per-row edit/delete actions

use iced::widget::{Space, button, column, container, mouse_area, row, scrollable, svg, text};
use iced::{Alignment, Element, Fill, Length, Padding};

use crate::app::Message;
use crate::features::users::{User, UserId, UserList};
use crate::i18n::{Key, Locale};
use crate::ui::icons;
use crate::ui::theme::{self, BOLD_WEIGHT};

const AGE_COLUMN_WIDTH: f32 = 64.0;
const ACTIONS_COLUMN_WIDTH: f32 = 128.0;
const ROW_HEIGHT: f32 = 48.0;

/// Build the list view: add button above the table
pub fn view<'a>(
    users: &'a UserList,
    hovered: Option<UserId>,
    locale: Locale,
) -> Element<'a, Message> {
    let add_btn = button(text(locale.get(Key::AddUser)).size(13))
        .padding(Padding::new(6.0).left(14.0).right(14.0))
        .style(theme::contained_button)
        .on_press_maybe(users.accepts_triggers().then_some(Message::AddUser));

    let toolbar = container(add_btn)
        .height(48)
        .center_y(48)
        .padding(Padding::new(0.0).left(16.0).right(16.0));

    let body: Element<'a, Message> = if users.is_loading() {
        placeholder(locale.get(Key::Loading))
    } else if users.store().is_empty() {
        placeholder(locale.get(Key::NoUsers))
    } else {
        let enabled = users.accepts_triggers();
        let rows = users
            .store()
            .iter()
            .enumerate()
            .map(|(index, user)| {
                user_row(user, index % 2 == 1, hovered == Some(user.id), enabled)
            });
        scrollable(column(rows)).height(Length::Shrink).into()
    };

    let table = container(column![header_row(locale), body])
        .width(Fill)
        .style(theme::table_card);

    column![toolbar, table].width(Fill).max_width(960).into()
}

fn header_cell<'a>(label: &'static str) -> iced::widget::Text<'a> {
    text(label).size(14).font(iced::Font {
        weight: BOLD_WEIGHT,
        ..Default::default()
    })
}

fn header_row<'a>(locale: Locale) -> Element<'a, Message> {
    container(
        row![
            container(header_cell(locale.get(Key::ColumnFirstName)))
                .width(Fill),
            container(header_cell(locale.get(Key::ColumnLastName)))
                .width(Fill),
            container(header_cell(locale.get(Key::ColumnAge)))
                .width(AGE_COLUMN_WIDTH)
                .align_x(Alignment::End),
            Space::new().width(ACTIONS_COLUMN_WIDTH),
        ]
        .align_y(Alignment::Center)
        .padding(Padding::new(0.0).left(16.0).right(16.0)),
    )
    .height(ROW_HEIGHT)
    .center_y(ROW_HEIGHT)
    .style(theme::table_header)
    .into()
}

fn action_icon<'a>(icon: &'static str, on_press: Option<Message>) -> Element<'a, Message> {
    button(
        svg(svg::Handle::from_memory(icon.as_bytes()))
            .width(20)
            .height(20)
            .style(theme::icon),
    )
    .padding(6)
    .style(theme::icon_button)
    .on_press_maybe(on_press)
    .into()
}

fn user_row<'a>(user: &'a User, odd: bool, hovered: bool, enabled: bool) -> Element<'a, Message> {
    let id = user.id;
    let actions = row![
        action_icon(icons::EDIT, enabled.then_some(Message::EditUser(id))),
        action_icon(icons::DELETE, enabled.then_some(Message::DeleteUser(id))),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let cells = container(
        row![
            container(text(&user.first_name).size(14))
                .width(Fill),
            container(text(&user.last_name).size(14))
                .width(Fill),
            container(text(&user.age).size(14))
                .width(AGE_COLUMN_WIDTH)
                .align_x(Alignment::End),
            container(actions)
                .width(ACTIONS_COLUMN_WIDTH)
                .align_x(Alignment::End),
        ]
        .align_y(Alignment::Center)
        .padding(Padding::new(0.0).left(16.0).right(16.0)),
    )
    .height(ROW_HEIGHT)
    .center_y(ROW_HEIGHT)
    .style(move |theme| theme::table_row(theme, odd, hovered));

    mouse_area(cells)
        .on_enter(Message::RowHovered(id))
        .on_exit(Message::RowUnhovered(id))
        .into()
}

fn placeholder<'a>(label: &'static str) -> Element<'a, Message> {
    container(text(label).size(14).style(|theme| text::Style {
        color: Some(theme::text_secondary(theme)),
    }))
    .width(Fill)
    .height(ROW_HEIGHT * 3.0)
    .center_x(Fill)
    .center_y(ROW_HEIGHT * 3.0)
    .into()
}
