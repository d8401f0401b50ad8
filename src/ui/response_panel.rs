use iced::alignment::Alignment;
use iced::widget::{Column, Space, column, container, rich_text, row, scrollable, span, text};
use iced::{Color, Element, Font, Length};

use restprobe::RunReport;
use restprobe::interpret::Rendering;

use crate::{Message, ResponseView};

use super::style;

pub fn view<'a>(response: &'a ResponseView, report: Option<&'a RunReport>) -> Element<'a, Message> {
    let (status, status_color, time): (String, Color, String) = match response {
        ResponseView::Empty | ResponseView::Rejected(_) => {
            ("Status: N/A".to_string(), style::TEXT_MUTED, "Time: N/A".to_string())
        }
        ResponseView::Loading => ("Status: Fetching...".to_string(), style::TEXT_MUTED, "Time: N/A".to_string()),
        ResponseView::Failed(_) => ("Status: Error".to_string(), style::DANGER, "Time: N/A".to_string()),
        ResponseView::Received {
            status_line,
            status_class,
            elapsed,
            ..
        } => (
            format!("Status: {status_line}"),
            style::status_color(*status_class),
            format!("Time: {elapsed}"),
        ),
    };

    let mut summary = row![
        text(status).size(13).color(status_color),
        text(time).size(12).color(style::TEXT_MUTED),
    ]
    .spacing(16)
    .align_y(Alignment::Center)
    .padding([8, 10]);

    if let ResponseView::Received { method, .. } = response {
        summary = summary.push(text(method.as_str()).size(12).color(style::method_color(*method)));
    }

    let body: Element<'a, Message> = match response {
        ResponseView::Empty => text("No response yet").size(14).color(style::TEXT_MUTED).into(),
        ResponseView::Loading => text("Loading...").size(13).color(style::TEXT_MUTED).into(),
        ResponseView::Rejected(message) | ResponseView::Failed(message) => {
            text(message).size(13).color(style::DANGER).into()
        }
        ResponseView::Received { rendering, .. } => rendering_view(rendering),
    };

    let body_section = container(
        scrollable(
            container(body)
                .padding(10)
                .width(Length::Fill)
                .style(|_| style::surface_style(style::SURFACE_1, 8.0)),
        )
        .height(Length::Fill),
    )
    .padding(10)
    .height(Length::FillPortion(3));

    let mut section = column![summary, body_section].spacing(0).height(Length::Fill);

    if let Some(report) = report {
        section = section.push(
            container(scrollable(report_view(report)).height(Length::Fill))
                .padding([6, 10])
                .height(Length::FillPortion(1)),
        );
    }

    section.into()
}

fn rendering_view<'a>(rendering: &'a Rendering) -> Element<'a, Message> {
    match rendering {
        Rendering::Highlighted(tokens) => {
            let spans: Vec<text::Span<'a, Message, Font>> = tokens
                .iter()
                .map(|token| span(token.text.as_str()).color(style::token_color(token.class)))
                .collect();
            rich_text(spans).font(Font::MONOSPACE).size(13).into()
        }
        Rendering::Plain(raw) => text(raw).font(Font::MONOSPACE).size(13).into(),
    }
}

fn report_view<'a>(report: &'a RunReport) -> Element<'a, Message> {
    let headline_color = if report.all_passed() { style::PRIMARY } else { style::DANGER };
    let mut list = Column::new()
        .spacing(6)
        .push(
            text(format!("Tests: {}/{} passed", report.passed(), report.total()))
                .size(13)
                .color(headline_color),
        );

    if report.results.is_empty() {
        list = list.push(text("No assertions enabled").size(12).color(style::TEXT_MUTED));
    }

    for result in &report.results {
        let (marker, color) = if result.passed {
            ("PASS", style::PRIMARY)
        } else {
            ("FAIL", style::DANGER)
        };

        let mut entry = Column::new().spacing(2).push(
            row![
                text(marker).size(11).font(Font::MONOSPACE).color(color),
                text(&result.name).size(13).color(color),
            ]
            .spacing(8)
            .align_y(Alignment::Center),
        );
        if let Some(detail) = result.detail() {
            entry = entry.push(row![
                Space::with_width(40),
                text(detail).size(12).color(style::TEXT_MUTED),
            ]);
        }
        list = list.push(entry);
    }

    list.into()
}
