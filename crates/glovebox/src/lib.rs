//! `glovebox` - Status tracking for vehicle documents and service history
//!
//! This library classifies stored dates (document issue dates, last-service
//! dates, computed next-service dates) into status buckets with long and
//! short display text. Classification is pure: the current moment is always
//! passed in, and reading a real clock is left to [`clock`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod status;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use report::Summary;
pub use status::{
    issue_status, next_service_due, relative_label, relative_label_for, service_status, Color,
    NextServiceDue, Status, StatusResult,
};
