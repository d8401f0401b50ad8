//! Request pipeline behind the Restprobe REST console.
//!
//! `form` holds what the user typed, `http` assembles and dispatches the
//! request, `interpret` turns the raw response into something displayable,
//! `testing` evaluates the pass/fail checks, and `session` owns the last
//! response and ties the steps together.

pub mod auth;
pub mod config;
pub mod error;
pub mod form;
pub mod http;
pub mod interpret;
pub mod logging;
pub mod notification;
pub mod session;
pub mod testing;

pub use error::{NetworkError, PipelineError, ValidationError};
pub use form::{HeaderRow, HeaderRows, RequestForm, RowId};
pub use http::client::Dispatcher;
pub use http::method::HttpMethod;
pub use http::request::{RequestDescriptor, build_request};
pub use http::response::RawResponse;
pub use interpret::{Interpretation, Rendering, ResponseBody, StatusClass};
pub use session::{Exchange, LastResponse, Session};
pub use testing::{AssertionResult, AssertionSpec, AssertionToggles, RunReport};
