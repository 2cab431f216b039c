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

use std::fmt::Debug;

use serde::Deserialize;

use crate::mail::IntoMail;

use super::{HttpRequest, HttpTransport, ReqwestTransport};

pub const DEFAULT_API_BASE_URL: &str = "https://send.api.mailtrap.io";

/// Mailtrap API endpoint and credentials.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Configuration {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    pub api_key: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Configuration {
    /// Creates a configuration for the default sending endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_base_url: default_api_base_url(),
            api_key: api_key.into(),
        }
    }

    /// Sets the API base URL, without the `/api/send` path.
    pub fn api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    /// Reads `MAILTRAP_API_KEY` and, optionally, `MAILTRAP_API_BASE_URL`.
    pub fn from_env() -> crate::Result<Self> {
        let api_key = std::env::var("MAILTRAP_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(crate::Error::MissingConfiguration("MAILTRAP_API_KEY"))?;

        Ok(match std::env::var("MAILTRAP_API_BASE_URL") {
            Ok(url) if !url.is_empty() => Self::new(api_key).api_base_url(url),
            _ => Self::new(api_key),
        })
    }

    fn send_url(&self) -> String {
        format!("{}/api/send", self.api_base_url.trim_end_matches('/'))
    }
}

impl Debug for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Configuration")
            .field("api_base_url", &self.api_base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Mailtrap client.
#[derive(Debug, Clone)]
pub struct MailtrapClient<T = ReqwestTransport> {
    configuration: Configuration,
    transport: T,
}

impl MailtrapClient<ReqwestTransport> {
    /// Creates a new Mailtrap client for the default endpoint with the specified API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_transport(Configuration::new(api_key), ReqwestTransport::default())
    }
}

impl From<Configuration> for MailtrapClient<ReqwestTransport> {
    fn from(configuration: Configuration) -> Self {
        Self::with_transport(configuration, ReqwestTransport::default())
    }
}

impl<T: HttpTransport> MailtrapClient<T> {
    /// Creates a new Mailtrap client that sends requests through `transport`.
    pub fn with_transport(configuration: Configuration, transport: T) -> Self {
        Self {
            configuration,
            transport,
        }
    }

    /// Sets the API base URL.
    pub fn api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.configuration.api_base_url = api_base_url.into();
        self
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Sends a message via Mailtrap and returns the response body.
    ///
    /// The message is validated before anything is sent and exactly one
    /// request is made. Failures are logged and returned, never retried.
    pub async fn send<'x>(&self, mail: impl IntoMail<'x>) -> crate::Result<String> {
        match self.try_send(mail).await {
            Ok(response) => {
                log::info!("Mail sent: {}", response);
                Ok(response)
            }
            Err(err) => {
                log::error!("{}", err);
                Err(err)
            }
        }
    }

    async fn try_send<'x>(&self, mail: impl IntoMail<'x>) -> crate::Result<String> {
        let mail = mail.into_mail();
        mail.validate()?;

        let url = self.configuration.send_url();
        log::debug!("Sending mail to {} recipient(s) via {}", mail.to.len(), url);

        let response = self
            .transport
            .post_json(HttpRequest {
                url: &url,
                bearer_token: &self.configuration.api_key,
                body: mail.to_json()?,
            })
            .await?;

        if response.is_success() {
            Ok(response.body)
        } else {
            Err(crate::Error::Http {
                status: response.status,
                body: response.body,
            })
        }
    }
}
