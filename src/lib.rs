//! Terminal reading-comprehension quiz.
//!
//! A passage and its multiple-choice questions are shown side by side. A
//! stopwatch runs while the user answers, words can be marked by selecting
//! them in the passage, and submitting asks for confirmation before moving
//! on to the solution view.

pub mod cli;
pub mod highlight;
pub mod logging;
pub mod model;
pub mod payload;
pub mod route;
pub mod selection;
pub mod state;
pub mod timer;
pub mod tui;
pub mod ui;

pub const APP_TITLE: &str = "Moon SSun 빠워";
