#![forbid(unsafe_code)]

//! Assignment board runtime.
//!
//! Wraps the kernel with a session context object, JSON configuration,
//! logging bootstrap, replay verification and drift reports.
//!
//! No transfer logic lives here; all of it is delegated to the kernel.

pub mod config;
pub mod drift;
pub mod logging;
pub mod replay;
pub mod session;

pub use config::{load_config, parse_config, ConfigError, SessionConfig};
pub use session::{Notice, NoticeLevel, Reply, Session};

/// Start logging as configured, then open a session.
pub fn open_session(config: &SessionConfig) -> Result<Session, ConfigError> {
    config.validate()?;
    logging::init_logging(&config.log_level, config.log_dir.as_deref())?;
    Session::from_config(config)
}
