/*
 * Copyright Stalwart Labs Ltd.
 *
 * Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
 * https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
 * <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
 * option. This file may not be copied, modified, or distributed
 * except according to those terms.
 */

use std::borrow::Cow;

use super::{Address, Attachment, Mail};

/// Incrementally assembles a [`Mail`].
///
/// None of the setters fail and nothing is validated until the mail is sent,
/// so an incomplete mail can be built.
#[derive(Debug, Default, Clone)]
pub struct MailBuilder<'x> {
    mail: Mail<'x>,
}

impl<'x> MailBuilder<'x> {
    pub fn new() -> Self {
        MailBuilder {
            mail: Mail::default(),
        }
    }

    /// Set the sender, replacing any previous one.
    pub fn from(mut self, address: impl Into<Address<'x>>) -> Self {
        self.mail.from = Some(address.into());
        self
    }

    /// Add a recipient.
    pub fn to(mut self, address: impl Into<Address<'x>>) -> Self {
        self.mail.to.push(address.into());
        self
    }

    /// Set the subject.
    pub fn subject(mut self, subject: impl Into<Cow<'x, str>>) -> Self {
        self.mail.subject = Some(subject.into());
        self
    }

    /// Set the plain text body.
    pub fn text(mut self, text: impl Into<Cow<'x, str>>) -> Self {
        self.mail.text = Some(text.into());
        self
    }

    /// Set the HTML body.
    pub fn html(mut self, html: impl Into<Cow<'x, str>>) -> Self {
        self.mail.html = Some(html.into());
        self
    }

    /// Set the category used by the API to group sending statistics.
    pub fn category(mut self, category: impl Into<Cow<'x, str>>) -> Self {
        self.mail.category = Some(category.into());
        self
    }

    /// Add a binary attachment.
    pub fn attachment(
        mut self,
        content: impl Into<Cow<'x, [u8]>>,
        file_name: impl Into<Cow<'x, str>>,
    ) -> Self {
        self.mail.attachments.push(Attachment::new(content, file_name));
        self
    }

    pub fn build(self) -> Mail<'x> {
        self.mail
    }
}

#[cfg(test)]
mod test {
    use crate::mail::{Address, Mail, MailBuilder};

    #[test]
    fn recipients_keep_order() {
        let mail = MailBuilder::new()
            .to("one@example.com")
            .to(("Two", "two@example.com"))
            .to("three@example.com".to_string())
            .build();

        assert_eq!(
            mail.to,
            vec![
                Address::new("one@example.com"),
                Address::new("two@example.com").name("Two"),
                Address::new("three@example.com"),
            ]
        );
    }

    #[test]
    fn last_value_wins() {
        let mail = MailBuilder::new()
            .from(("John Doe", "john@example.com"))
            .from("jane@example.com")
            .subject("First")
            .subject("Second")
            .text("a")
            .text("b")
            .html("<p>a</p>")
            .html("<p>b</p>")
            .category("one")
            .category("two")
            .build();

        assert_eq!(mail.from, Some(Address::new("jane@example.com")));
        assert_eq!(mail.subject.as_deref(), Some("Second"));
        assert_eq!(mail.text.as_deref(), Some("b"));
        assert_eq!(mail.html.as_deref(), Some("<p>b</p>"));
        assert_eq!(mail.category.as_deref(), Some("two"));
    }

    #[test]
    fn incomplete_mail() {
        assert_eq!(MailBuilder::new().build(), Mail::default());

        let mail = Mail::builder()
            .attachment(&b"first"[..], "a.txt")
            .attachment(b"second".to_vec(), "b.txt")
            .build();
        assert_eq!(mail.attachments.len(), 2);
        assert_eq!(&mail.attachments[0].content[..], b"first");
        assert_eq!(mail.attachments[1].file_name, "b.txt");
        assert!(mail.from.is_none());
        assert!(mail.to.is_empty());
    }
}
