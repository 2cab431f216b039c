/*
 * Copyright Stalwart Labs Ltd.
 *
 * Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
 * https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
 * <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
 * option. This file may not be copied, modified, or distributed
 * except according to those terms.
 */

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::Serialize;

use super::{validate::is_empty, Address, Attachment, Mail};

// Field order is the order expected by the sending API.
#[derive(Debug, Serialize)]
#[doc(hidden)]
struct Request<'x> {
    from: Option<JsonAddress<'x>>,
    to: Vec<JsonAddress<'x>>,
    subject: &'x str,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'x str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<&'x str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'x str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<JsonAttachment<'x>>,
}

#[derive(Debug, Serialize)]
#[doc(hidden)]
struct JsonAddress<'x> {
    email: &'x str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'x str>,
}

#[derive(Debug, Serialize)]
#[doc(hidden)]
struct JsonAttachment<'x> {
    content: String,
    filename: &'x str,
}

impl<'x> From<&'x Address<'_>> for JsonAddress<'x> {
    fn from(address: &'x Address<'_>) -> Self {
        JsonAddress {
            email: address.email.as_ref(),
            name: non_empty(&address.name),
        }
    }
}

impl<'x> From<&'x Attachment<'_>> for JsonAttachment<'x> {
    fn from(attachment: &'x Attachment<'_>) -> Self {
        JsonAttachment {
            content: STANDARD.encode(attachment.content.as_ref()),
            filename: attachment.file_name.as_ref(),
        }
    }
}

impl<'x> From<&'x Mail<'_>> for Request<'x> {
    fn from(mail: &'x Mail<'_>) -> Self {
        Request {
            from: mail.from.as_ref().map(Into::into),
            to: mail.to.iter().map(Into::into).collect(),
            subject: mail.subject.as_deref().unwrap_or_default(),
            text: non_empty(&mail.text),
            html: non_empty(&mail.html),
            category: non_empty(&mail.category),
            attachments: mail.attachments.iter().map(Into::into).collect(),
        }
    }
}

fn non_empty<'x>(value: &'x Option<impl AsRef<str>>) -> Option<&'x str> {
    if !is_empty(value) {
        value.as_ref().map(AsRef::as_ref)
    } else {
        None
    }
}

impl<'x> Mail<'x> {
    /// Serializes the mail into the JSON body expected by the sending API.
    ///
    /// Optional fields are left out when empty and attachment contents are
    /// base64 encoded. The mail is expected to have passed
    /// [`Mail::validate`].
    pub fn to_json(&self) -> crate::Result<String> {
        serde_json::to_string(&Request::from(self)).map_err(Into::into)
    }
}
