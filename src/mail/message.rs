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

use std::borrow::Cow;

use super::builder::MailBuilder;

/// A transactional e-mail ready to be validated and sent.
///
/// `Mail` is a plain data holder. Required fields are only checked by
/// [`Mail::validate`], which the client runs before every send.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Mail<'x> {
    pub from: Option<Address<'x>>,
    pub to: Vec<Address<'x>>,
    pub subject: Option<Cow<'x, str>>,
    pub text: Option<Cow<'x, str>>,
    pub html: Option<Cow<'x, str>>,
    pub category: Option<Cow<'x, str>>,
    pub attachments: Vec<Attachment<'x>>,
}

/// An e-mail address with an optional display name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Address<'x> {
    pub email: Cow<'x, str>,
    pub name: Option<Cow<'x, str>>,
}

/// A binary attachment sent inline with the message.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Attachment<'x> {
    pub content: Cow<'x, [u8]>,
    pub file_name: Cow<'x, str>,
}

impl<'x> Mail<'x> {
    /// Create a new empty mail.
    pub fn empty() -> Self {
        Mail::default()
    }

    /// Start building a new mail.
    pub fn builder() -> MailBuilder<'x> {
        MailBuilder::new()
    }
}

impl<'x> Address<'x> {
    pub fn new(email: impl Into<Cow<'x, str>>) -> Self {
        Address {
            email: email.into(),
            name: None,
        }
    }

    /// Set the display name.
    pub fn name(mut self, name: impl Into<Cow<'x, str>>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl<'x> From<&'x str> for Address<'x> {
    fn from(email: &'x str) -> Self {
        Address::new(email)
    }
}

impl<'x> From<String> for Address<'x> {
    fn from(email: String) -> Self {
        Address::new(email)
    }
}

impl<'x> From<(&'x str, &'x str)> for Address<'x> {
    fn from((name, email): (&'x str, &'x str)) -> Self {
        Address::new(email).name(name)
    }
}

impl<'x> From<(String, String)> for Address<'x> {
    fn from((name, email): (String, String)) -> Self {
        Address::new(email).name(name)
    }
}

impl<'x> Attachment<'x> {
    pub fn new(content: impl Into<Cow<'x, [u8]>>, file_name: impl Into<Cow<'x, str>>) -> Self {
        Attachment {
            content: content.into(),
            file_name: file_name.into(),
        }
    }
}

pub trait IntoMail<'x> {
    fn into_mail(self) -> Mail<'x>;
}

impl<'x> IntoMail<'x> for Mail<'x> {
    fn into_mail(self) -> Mail<'x> {
        self
    }
}

impl<'x> IntoMail<'x> for MailBuilder<'x> {
    fn into_mail(self) -> Mail<'x> {
        self.build()
    }
}
