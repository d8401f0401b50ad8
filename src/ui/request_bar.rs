use iced::widget::{button, pick_list, row, text_input};
use iced::{Element, Length};

use restprobe::HttpMethod;

use crate::Message;

use super::style;

pub fn view<'a>(method: HttpMethod, url: &str, loading: bool) -> Element<'a, Message> {
    let method_picklist = pick_list(HttpMethod::ALL, Some(method), Message::MethodSelected)
        .width(120)
        .style(style::pick_list_style)
        .padding(10);

    let url_input = text_input("https://httpbin.org/get", url)
        .on_input(Message::UrlChanged)
        .on_submit(Message::SendPressed)
        .padding(10)
        .size(16)
        .style(style::input_style)
        .width(Length::Fill);

    let send_button = button(if loading { "Sending..." } else { "Send" })
        .on_press(Message::SendPressed)
        .padding([10, 18])
        .style(style::primary_button);

    row![method_picklist, url_input, send_button]
        .spacing(10)
        .into()
}
