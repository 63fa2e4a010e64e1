//! `hours-server` - HTTP front end for the washroom opening-hours engine
//!
//! Exposes availability checks, weekly timetables and a fixed demo timetable
//! as JSON endpoints. The store handle is built once at startup and passed to
//! every request through [`routes::AppState`].

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod routes;
pub mod server;

pub use config::Config;
pub use error::{Result, ServerError};
pub use logging::init_logging;
pub use routes::{create_router, AppState};
pub use server::serve;
