mod ui;

use std::time::Duration;

use iced::widget::{column, container, text_editor};
use iced::{Element, Length, Task};
use tracing::{debug, info};

use restprobe::config::ConsoleConfig;
use restprobe::http::client::send_request;
use restprobe::interpret::{Rendering, StatusClass};
use restprobe::notification::{Notifications, Severity};
use restprobe::testing::AssertionKind;
use restprobe::{
    AssertionToggles, HeaderRows, HttpMethod, NetworkError, RawResponse, RequestForm, RowId, RunReport, Session,
    ValidationError, build_request, logging,
};
use ui::style;

fn main() -> iced::Result {
    let config = ConsoleConfig::default();
    logging::init(&config.default_log_filter);
    info!("starting console");

    iced::application(title, update, view)
        .theme(|_| style::app_theme())
        .window_size(config.window_size)
        .run_with(move || (App::new(config), Task::none()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestEditorTab {
    Headers,
    Body,
    Auth,
    Tests,
}

/// What the response area currently shows.
#[derive(Debug, Clone)]
pub enum ResponseView {
    Empty,
    Loading,
    /// The form did not validate; nothing was sent.
    Rejected(String),
    /// Dispatch failed at the transport.
    Failed(String),
    Received {
        status_line: String,
        status_class: StatusClass,
        elapsed: String,
        method: HttpMethod,
        rendering: Rendering,
    },
}

struct App {
    config: ConsoleConfig,
    request_tab: RequestEditorTab,
    method: HttpMethod,
    url: String,
    token: String,
    headers: HeaderRows,
    body_editor: text_editor::Content,
    expected_body_editor: text_editor::Content,
    toggles: AssertionToggles,
    session: Session,
    in_flight: usize,
    response: ResponseView,
    report: Option<RunReport>,
    notifications: Notifications,
}

impl App {
    fn new(config: ConsoleConfig) -> Self {
        let mut headers = HeaderRows::new();
        for _ in 0..config.initial_header_rows {
            headers.add();
        }

        Self {
            config,
            request_tab: RequestEditorTab::Headers,
            method: HttpMethod::Get,
            url: String::new(),
            token: String::new(),
            headers,
            body_editor: text_editor::Content::new(),
            expected_body_editor: text_editor::Content::new(),
            toggles: AssertionToggles::default(),
            session: Session::default(),
            in_flight: 0,
            response: ResponseView::Empty,
            report: None,
            notifications: Notifications::default(),
        }
    }

    fn form(&self) -> RequestForm {
        RequestForm {
            method: self.method,
            url: self.url.clone(),
            token: self.token.clone(),
            body: self.body_editor.text(),
            headers: self.headers.clone(),
        }
    }

    fn loading(&self) -> bool {
        self.in_flight > 0
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    RequestTabSelected(RequestEditorTab),
    MethodSelected(HttpMethod),
    UrlChanged(String),
    TokenChanged(String),
    HeaderAdded,
    HeaderRemoved(RowId),
    HeaderKeyChanged(RowId, String),
    HeaderValueChanged(RowId, String),
    BodyEdited(text_editor::Action),
    AssertionToggled(AssertionKind, bool),
    ExpectedChanged(AssertionKind, String),
    ExpectedBodyEdited(text_editor::Action),
    SendPressed,
    RunTestsPressed,
    RequestFinished {
        method: HttpMethod,
        result: Result<RawResponse, NetworkError>,
    },
    NotificationExpired(u64),
    NotificationDismissed,
}

fn title(app: &App) -> String {
    app.config.title.clone()
}

fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::RequestTabSelected(tab) => {
            app.request_tab = tab;
            Task::none()
        }
        Message::MethodSelected(method) => {
            app.method = method;
            Task::none()
        }
        Message::UrlChanged(url) => {
            app.url = url;
            Task::none()
        }
        Message::TokenChanged(token) => {
            app.token = token;
            Task::none()
        }
        Message::HeaderAdded => {
            app.headers.add();
            Task::none()
        }
        Message::HeaderRemoved(id) => {
            app.headers.remove(id);
            Task::none()
        }
        Message::HeaderKeyChanged(id, key) => {
            app.headers.set_key(id, key);
            Task::none()
        }
        Message::HeaderValueChanged(id, value) => {
            app.headers.set_value(id, value);
            Task::none()
        }
        Message::BodyEdited(action) => {
            app.body_editor.perform(action);
            Task::none()
        }
        Message::AssertionToggled(kind, enabled) => {
            app.toggles.toggle_mut(kind).enabled = enabled;
            Task::none()
        }
        Message::ExpectedChanged(kind, expected) => {
            app.toggles.toggle_mut(kind).expected = expected;
            Task::none()
        }
        Message::ExpectedBodyEdited(action) => {
            app.expected_body_editor.perform(action);
            app.toggles.body.expected = app.expected_body_editor.text();
            Task::none()
        }
        Message::SendPressed => {
            let request = match build_request(&app.form()) {
                Ok(request) => request,
                Err(err) => {
                    if matches!(err, ValidationError::InvalidRequestBody(_)) {
                        app.response = ResponseView::Rejected(err.to_string());
                    }
                    return notify(app, Severity::Error, err.to_string());
                }
            };

            app.in_flight += 1;
            app.response = ResponseView::Loading;

            let method = request.method;
            let dispatcher = app.session.dispatcher().clone();
            Task::perform(send_request(dispatcher, request), move |result| {
                Message::RequestFinished { method, result }
            })
        }
        Message::RunTestsPressed => run_tests(app),
        Message::RequestFinished { method, result } => {
            app.in_flight = app.in_flight.saturating_sub(1);

            match app.session.record(result) {
                Ok(exchange) => {
                    app.response = ResponseView::Received {
                        status_line: exchange.response.status_line(),
                        status_class: StatusClass::of(exchange.response.status),
                        elapsed: exchange.response.elapsed_label(),
                        method,
                        rendering: exchange.interpretation.rendering,
                    };
                    if app.toggles.any_enabled() {
                        run_tests(app)
                    } else {
                        Task::none()
                    }
                }
                Err(err) => {
                    app.response = ResponseView::Failed(err.description());
                    notify(app, Severity::Error, err.to_string())
                }
            }
        }
        Message::NotificationExpired(id) => {
            app.notifications.expire(id);
            Task::none()
        }
        Message::NotificationDismissed => {
            app.notifications.dismiss();
            Task::none()
        }
    }
}

fn run_tests(app: &mut App) -> Task<Message> {
    app.report = None;
    match app.session.run_assertions(&app.toggles.specs()) {
        Ok(report) => {
            app.report = Some(report);
            Task::none()
        }
        Err(err) => notify(app, Severity::Error, err.to_string()),
    }
}

fn notify(app: &mut App, severity: Severity, text: String) -> Task<Message> {
    debug!(%severity, %text, "showing notification");
    let id = app.notifications.show(severity, text);
    expire_after(app.config.notification_timeout, id)
}

fn expire_after(timeout: Duration, id: u64) -> Task<Message> {
    Task::perform(tokio::time::sleep(timeout), move |_| Message::NotificationExpired(id))
}

fn view(app: &App) -> Element<'_, Message> {
    let header = ui::header::view(&app.config.title, app.loading());

    let request_bar = container(ui::request_bar::view(app.method, &app.url, app.loading()))
        .padding(12)
        .style(|_| style::surface_style(style::SURFACE_1, 0.0));

    let request_editor = ui::request_editor::view(ui::request_editor::RequestEditorState {
        active_tab: app.request_tab,
        headers: &app.headers,
        body_editor: &app.body_editor,
        method: app.method,
        token: &app.token,
        toggles: &app.toggles,
        expected_body_editor: &app.expected_body_editor,
    });

    let request_section = container(column![request_bar, request_editor].spacing(0).height(Length::Fill))
        .height(Length::FillPortion(45))
        .style(|_| style::surface_style(style::SURFACE_0, 0.0));

    let response_section = container(ui::response_panel::view(&app.response, app.report.as_ref()))
        .height(Length::FillPortion(55))
        .style(|_| style::surface_style(style::SURFACE_0, 0.0));

    let mut layout = column![header].spacing(1).height(Length::Fill).width(Length::Fill);
    if let Some(notification) = app.notifications.current() {
        layout = layout.push(ui::notification::view(notification));
    }
    layout = layout.push(request_section).push(response_section);

    container(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_| style::flat_surface_style(style::BG))
        .into()
}
