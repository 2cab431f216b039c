/*
 * Copyright Stalwart Labs Ltd. See the COPYING
 * file at the top-level directory of this distribution.
 *
 * Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
 * https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
 * <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
 * option. This file may not be copied, modified, or distributed
 * except according to those terms.
 */

//! # mailtrap-send
//!
//! _mailtrap-send_ is a Rust library to build and send transactional e-mail messages through the
//! Mailtrap sending API. It includes the following features:
//!
//! - Fluent message builder with text and HTML bodies, categories and binary attachments.
//! - Validation of required fields before anything is sent over the network.
//! - JSON request encoding with proper string escaping and base64 encoded attachments.
//! - Bearer token authenticated delivery over HTTPS (**rustls** by default, or **native-tls**).
//! - Pluggable HTTP transport, with a default implementation backed by `reqwest`.
//! - Full async.
//!
//! ## Usage Example
//!
//! Send a message with an attachment:
//!
//! ```rust
//!     // Build a simple text message with a single attachment
//!     let message = Mail::builder()
//!         .from(("Mailtrap Test", "mailtrap@example.com"))
//!         .to("jane@example.com")
//!         .subject("You are awesome!")
//!         .text("Congrats for sending test email with Mailtrap!")
//!         .category("Integration Test")
//!         .attachment(std::fs::read("welcome.png").unwrap(), "welcome.png");
//!
//!     // Send the message and print the API response
//!     let response = MailtrapClient::new("<api key>")
//!         .send(message)
//!         .await
//!         .unwrap();
//!     println!("{}", response);
//! ```
//!
//! Outcomes are reported through the [`log`](https://crates.io/crates/log) facade, so any
//! logger implementation can be used to capture them.
//!
//! ## Testing
//!
//! To run the testsuite:
//!
//! ```bash
//!  $ cargo test --all-features
//! ```
//!
//! ## License
//!
//! Licensed under either of
//!
//!  * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//!  * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.
//!

pub mod http;
pub mod mail;

use std::fmt::Display;

pub use http::{Configuration, HttpTransport, MailtrapClient, ReqwestTransport};
pub use mail::{Address, Attachment, Mail, MailBuilder, ValidationError};

#[derive(Debug)]
pub enum Error {
    /// The message is missing a required field.
    Validation(ValidationError),

    /// JSON encoding error
    Json(serde_json::Error),

    /// The API replied with a non-success status.
    Http { status: u16, body: String },

    /// Connection, TLS or protocol failure reported by the HTTP transport.
    Transport(Box<dyn std::error::Error + Send + Sync>),

    /// Missing configuration value.
    MissingConfiguration(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Validation(e) => e.fmt(f),
            Error::Json(e) => write!(f, "JSON encoding error: {}", e),
            Error::Http { status, body } => write!(f, "HTTP status {}: {}", status, body),
            Error::Transport(e) => write!(f, "Transport error: {}", e),
            Error::MissingConfiguration(name) => write!(f, "Missing configuration value {}", name),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Validation(e) => Some(e),
            Error::Json(e) => Some(e),
            Error::Transport(e) => Some(&**e),
            Error::Http { .. } | Error::MissingConfiguration(_) => None,
        }
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Validation(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(Box::new(err))
    }
}

#[cfg(test)]
mod test {
    use std::error::Error as _;

    use crate::{Error, ValidationError};

    #[test]
    fn error_display() {
        assert_eq!(
            Error::from(ValidationError::MissingFrom).to_string(),
            "From is required"
        );
        assert_eq!(
            Error::Http {
                status: 401,
                body: "Unauthorized".to_string()
            }
            .to_string(),
            "HTTP status 401: Unauthorized"
        );
        assert_eq!(
            Error::MissingConfiguration("MAILTRAP_API_KEY").to_string(),
            "Missing configuration value MAILTRAP_API_KEY"
        );
        assert!(Error::from(ValidationError::MissingTo).source().is_some());
    }
}
