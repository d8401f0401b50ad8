use iced::alignment::Alignment;
use iced::widget::{Column, button, column, horizontal_space, row, scrollable, text, text_input};
use iced::{Element, Length};

use restprobe::HeaderRows;

use crate::Message;

use super::style;

pub fn view<'a>(headers: &'a HeaderRows) -> Element<'a, Message> {
    let toolbar = row![
        text("Headers").size(14),
        horizontal_space(),
        button(text("+ Add Header").size(12))
            .on_press(Message::HeaderAdded)
            .padding([6, 10])
            .style(style::subtle_button),
    ]
    .align_y(Alignment::Center);

    let mut rows = Column::new().spacing(6);
    for (id, header) in headers.iter() {
        let key = text_input("Key", &header.key)
            .on_input(move |key| Message::HeaderKeyChanged(id, key))
            .padding(8)
            .style(style::input_style)
            .width(Length::FillPortion(1));
        let value = text_input("Value", &header.value)
            .on_input(move |value| Message::HeaderValueChanged(id, value))
            .padding(8)
            .style(style::input_style)
            .width(Length::FillPortion(2));
        let remove = button(text("x").size(12))
            .on_press(Message::HeaderRemoved(id))
            .padding([6, 10])
            .style(style::ghost_button);

        rows = rows.push(row![key, value, remove].spacing(8).align_y(Alignment::Center));
    }

    if headers.is_empty() {
        rows = rows.push(text("No custom headers").size(12).color(style::TEXT_MUTED));
    }

    column![toolbar, scrollable(rows).height(Length::Fill)]
        .spacing(8)
        .height(Length::Fill)
        .into()
}
