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

use std::future::Future;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

/// An authenticated JSON POST request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest<'x> {
    pub url: &'x str,
    pub bearer_token: &'x str,
    pub body: String,
}

/// Status and body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs the HTTP calls made by the client.
///
/// Implementations must make exactly one request per call and report
/// connectivity failures as [`crate::Error::Transport`]. Non-2xx responses
/// are not errors at this level.
pub trait HttpTransport {
    fn post_json(
        &self,
        request: HttpRequest<'_>,
    ) -> impl Future<Output = crate::Result<HttpResponse>> + Send;
}

/// [`HttpTransport`] backed by a shared `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl From<reqwest::Client> for ReqwestTransport {
    fn from(client: reqwest::Client) -> Self {
        Self::new(client)
    }
}

impl HttpTransport for ReqwestTransport {
    async fn post_json(&self, request: HttpRequest<'_>) -> crate::Result<HttpResponse> {
        let response = self
            .client
            .post(request.url)
            .header(AUTHORIZATION, format!("Bearer {}", request.bearer_token))
            .header(CONTENT_TYPE, "application/json")
            .body(request.body)
            .send()
            .await?;
        let status = response.status().as_u16();

        Ok(HttpResponse {
            status,
            body: response.text().await?,
        })
    }
}
