use iced::alignment::Alignment;
use iced::widget::{button, container, horizontal_space, row, text};
use iced::{Element, Length};

use restprobe::notification::Notification;

use crate::Message;

use super::style;

pub fn view<'a>(notification: &'a Notification) -> Element<'a, Message> {
    let severity = notification.severity;

    container(
        row![
            text(&notification.text).size(13).color(style::BG),
            horizontal_space(),
            button(text("x").size(12))
                .on_press(Message::NotificationDismissed)
                .padding([4, 8])
                .style(style::ghost_button),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .padding([8, 14])
    .width(Length::Fill)
    .style(move |_| style::banner_style(severity))
    .into()
}
