use iced::alignment::Alignment;
use iced::widget::{button, checkbox, column, horizontal_space, row, scrollable, text, text_editor, text_input};
use iced::{Element, Font, Length};

use restprobe::AssertionToggles;
use restprobe::testing::AssertionKind;

use crate::Message;

use super::style;

pub fn view<'a>(toggles: &'a AssertionToggles, expected_body: &'a text_editor::Content) -> Element<'a, Message> {
    let toolbar = row![
        text("Assertions").size(14),
        horizontal_space(),
        button(text("Run Tests").size(12))
            .on_press(Message::RunTestsPressed)
            .padding([6, 12])
            .style(style::subtle_button),
    ]
    .align_y(Alignment::Center);

    let status = row![
        toggle(toggles, AssertionKind::StatusEquals, "Status code equals"),
        text_input("200", &toggles.status.expected)
            .on_input(|value| Message::ExpectedChanged(AssertionKind::StatusEquals, value))
            .padding(6)
            .style(style::input_style)
            .width(120),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let array_length = row![
        toggle(toggles, AssertionKind::ArrayLengthEquals, "Top-level array size equals"),
        text_input("0", &toggles.array_length.expected)
            .on_input(|value| Message::ExpectedChanged(AssertionKind::ArrayLengthEquals, value))
            .padding(6)
            .style(style::input_style)
            .width(120),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let body = column![
        toggle(toggles, AssertionKind::BodyEquals, "Response body equals (exact JSON)"),
        text_editor(expected_body)
            .placeholder("{\"id\": 1}")
            .on_action(Message::ExpectedBodyEdited)
            .font(Font::MONOSPACE)
            .height(110)
            .style(style::editor_style),
    ]
    .spacing(6);

    column![
        toolbar,
        scrollable(column![status, array_length, body].spacing(12)).height(Length::Fill)
    ]
    .spacing(10)
    .height(Length::Fill)
    .into()
}

fn toggle<'a>(toggles: &AssertionToggles, kind: AssertionKind, label: &'a str) -> Element<'a, Message> {
    checkbox(label, toggles.toggle(kind).enabled)
        .on_toggle(move |enabled| Message::AssertionToggled(kind, enabled))
        .size(16)
        .text_size(13)
        .into()
}
