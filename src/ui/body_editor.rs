use iced::keyboard::{self, key};
use iced::widget::text_editor::{Binding, KeyPress, Status};
use iced::widget::{column, horizontal_space, row, text, text_editor};
use iced::{Element, Font, Length};

use restprobe::HttpMethod;

use crate::Message;

use super::style;

pub fn view<'a>(editor: &'a text_editor::Content, method: HttpMethod) -> Element<'a, Message> {
    let raw = editor.text();
    let status = if !method.carries_body() {
        text(format!("Ignored for {method}; only POST and PUT send a body"))
            .size(11)
            .color(style::TEXT_MUTED)
    } else if raw.trim().is_empty() {
        text("No body").size(11).color(style::TEXT_MUTED)
    } else if serde_json::from_str::<serde_json::Value>(raw.trim()).is_ok() {
        text("Valid JSON").size(11).color(style::PRIMARY)
    } else {
        text("Invalid JSON").size(11).color(style::DANGER)
    };

    column![
        row![text("Body (JSON)").size(14), horizontal_space(), status],
        text_editor(editor)
            .on_action(Message::BodyEdited)
            .key_binding(send_on_enter)
            .font(Font::MONOSPACE)
            .height(Length::Fill)
            .style(style::editor_style),
    ]
    .spacing(6)
    .height(Length::Fill)
    .into()
}

/// Enter sends the request; Shift+Enter inserts a newline.
fn send_on_enter(key_press: KeyPress) -> Option<Binding<Message>> {
    let enter = matches!(key_press.key.as_ref(), keyboard::Key::Named(key::Named::Enter));
    if key_press.status == Status::Focused && enter && !key_press.modifiers.shift() {
        Some(Binding::Custom(Message::SendPressed))
    } else {
        Binding::from_key_press(key_press)
    }
}
