//! Application view rendering

use iced::widget::{Space, column, container, stack};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use crate::features::users::{DialogState, Modal};
use crate::ui::{components, theme, widgets};

impl App {
    /// Build the window content
    pub fn view(&self) -> Element<'_, Message> {
        let locale = self.core.locale;

        let header = components::header_bar::view(locale);

        let list = container(components::user_table::view(&self.users, self.ui.hovered_user, locale))
            .width(Fill)
            .center_x(Fill)
            .padding([0, 32]);

        let page = container(column![header, Space::new().height(48), list])
            .width(Fill)
            .height(Fill)
            .style(theme::main_content);

        let opacity = self.ui.dialog_opacity();
        let pending = self.users.is_pending();
        let modal_layer: Element<'_, Message> = match self.users.dialog() {
            DialogState::Closed => Space::new().width(0).height(0).into(),
            DialogState::Open(modal) | DialogState::Pending(modal) => match modal {
                Modal::Form(dialog) => {
                    components::user_form_dialog::view(dialog, pending, opacity, locale)
                }
                Modal::ConfirmDelete(_) => {
                    components::delete_user_dialog::view(pending, opacity, locale)
                }
            },
        };

        let toast_layer: Element<'_, Message> = match &self.ui.toast {
            Some(toast) => container(widgets::view_toast(toast))
                .width(Fill)
                .height(Fill)
                .align_x(Alignment::End)
                .align_y(Alignment::End)
                .padding(24)
                .into(),
            None => Space::new().width(0).height(0).into(),
        };

        stack![page, modal_layer, toast_layer]
            .width(Fill)
            .height(Fill)
            .into()
    }
}
