use iced::widget::{column, text, text_input};
use iced::{Element, Length};

use crate::Message;

use super::style;

pub fn view<'a>(token: &str) -> Element<'a, Message> {
    column![
        text("Bearer Token").size(14),
        text_input("Token (the \"Bearer \" prefix is added when missing)", token)
            .on_input(Message::TokenChanged)
            .on_submit(Message::SendPressed)
            .padding(10)
            .style(style::input_style)
            .width(Length::Fill),
    ]
    .spacing(8)
    .height(Length::Fill)
    .into()
}
