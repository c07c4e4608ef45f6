// Library surface for the binary and headless/integration tests.
pub mod app;
pub mod app_dirs;
pub mod config;
pub mod duration_fmt;
pub mod error;
pub mod highscore;
pub mod input;
pub mod language;
pub mod logging;
pub mod runtime;
pub mod score;
pub mod session;
pub mod stopwatch;
pub mod ui;
pub mod word_generator;

pub use app::{App, Flow};
pub use error::{Error, Result};
pub use session::{Effect, Session, SessionEvent};
