//! Terminal front end for the study planner.
//!
//! `render` draws a `ViewState` as text, `command` parses typed input, and
//! `app` ties both to a `SubjectController`.

pub mod app;
pub mod command;
pub mod render;

pub use app::run_session;
