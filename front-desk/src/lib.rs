//! Front Desk - hotel front-desk client
//!
//! View models, edit forms and transitions over the [`desk_client::HotelApi`]
//! operations, plus the command line surface of the `front-desk` binary.
//!
//! # Module layout
//!
//! ```text
//! front_desk/
//! ├── view/       # guest lists, booking catalog, dashboard
//! ├── forms/      # detail-edit forms and the modal that submits them
//! ├── actions     # check-in / check-out
//! ├── auth        # session probe, login, logout
//! ├── cli         # clap commands and rendering
//! ├── config      # AppConfig from the environment
//! ├── logging     # tracing subscriber
//! └── preferences # persisted UI toggles
//! ```

pub mod actions;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod forms;
pub mod logging;
pub mod preferences;
pub mod view;

#[cfg(test)]
mod testing;

pub use config::AppConfig;
pub use error::{DeskError, DeskResult};
