//! lox-drv - Scanner driver
//!
//! Runs the Lox scanner over a script file or an interactive prompt and
//! prints the resulting tokens. The `lox` binary is a thin clap front end
//! over [`Session`].
//!
//! # Example
//!
//! ```
//! use lox_drv::{Config, Session};
//! use lox_util::Handler;
//!
//! let mut session = Session::with_handler(Config::default(), Handler::new());
//! let mut out = Vec::new();
//! let tokens = session.run("print 1;", &mut out).unwrap();
//!
//! assert_eq!(tokens.len(), 4);
//! assert!(String::from_utf8(out).unwrap().ends_with("EOF\n"));
//! ```

pub mod config;
pub mod error;
pub mod session;

pub use config::{Config, OutputConfig, OutputFormat, ReplConfig, CONFIG_FILE_NAME};
pub use error::{DriverError, Result};
pub use session::{Session, Status};
