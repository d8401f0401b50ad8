use iced::alignment::Alignment;
use iced::widget::{container, horizontal_space, row, text};
use iced::{Element, Length};

use crate::Message;

use super::style;

pub fn view<'a>(title: &'a str, loading: bool) -> Element<'a, Message> {
    let activity = if loading {
        text("Fetching...").size(11).color(style::TEXT_MUTED)
    } else {
        text("").size(11)
    };

    container(
        row![
            text(title).size(16),
            text(format!("v{}", env!("CARGO_PKG_VERSION"))).size(10).color(style::TEXT_MUTED),
            horizontal_space(),
            activity
        ]
        .spacing(8)
        .padding([5, 12])
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .style(|_| style::surface_style(style::SURFACE_1, 0.0))
    .into()
}
