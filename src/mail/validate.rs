/*
 * Copyright Stalwart Labs Ltd.
 *
 * Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
 * https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
 * <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
 * option. This file may not be copied, modified, or distributed
 * except according to those terms.
 */

use std::fmt::Display;

use super::Mail;

/// A required field is missing or empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Missing sender or empty sender address.
    MissingFrom,

    /// No recipients, or a recipient with an empty address.
    MissingTo,

    /// Missing or empty subject.
    MissingSubject,

    /// Neither a text nor an HTML body.
    MissingBody,

    /// An attachment without content.
    MissingAttachmentContent,
}

impl ValidationError {
    /// Name of the offending field.
    pub const fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingFrom => "from",
            ValidationError::MissingTo => "to",
            ValidationError::MissingSubject => "subject",
            ValidationError::MissingBody => "text",
            ValidationError::MissingAttachmentContent => "attachments",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ValidationError::MissingFrom => "From is required",
            ValidationError::MissingTo => "To is required",
            ValidationError::MissingSubject => "Subject is required",
            ValidationError::MissingBody => "Text or Html is required",
            ValidationError::MissingAttachmentContent => "Attachment content is required",
        })
    }
}

impl std::error::Error for ValidationError {}

impl<'x> Mail<'x> {
    /// Checks the fields required by the sending API.
    ///
    /// Rules are applied in order (sender, recipients, subject, body,
    /// attachments) and the first violation is returned. Attachment file
    /// names are not checked.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.from.as_ref().is_some_and(|from| !from.email.is_empty()) {
            return Err(ValidationError::MissingFrom);
        }
        if self.to.is_empty() || self.to.iter().any(|address| address.email.is_empty()) {
            return Err(ValidationError::MissingTo);
        }
        if is_empty(&self.subject) {
            return Err(ValidationError::MissingSubject);
        }
        if is_empty(&self.text) && is_empty(&self.html) {
            return Err(ValidationError::MissingBody);
        }
        if self
            .attachments
            .iter()
            .any(|attachment| attachment.content.is_empty())
        {
            return Err(ValidationError::MissingAttachmentContent);
        }

        Ok(())
    }
}

pub(crate) fn is_empty(value: &Option<impl AsRef<str>>) -> bool {
    value.as_ref().map_or(true, |value| value.as_ref().is_empty())
}

#[cfg(test)]
mod test {
    use crate::mail::{Mail, MailBuilder, ValidationError};

    fn valid() -> MailBuilder<'static> {
        Mail::builder()
            .from("john@example.com")
            .to("jane@example.com")
            .subject("Hi!")
            .text("Hello world!")
    }

    #[test]
    fn valid_mail() {
        assert_eq!(valid().build().validate(), Ok(()));
        assert_eq!(
            Mail::builder()
                .from("john@example.com")
                .to("jane@example.com")
                .subject("Hi!")
                .html("<h1>Hello, world!</h1>")
                .attachment(vec![0u8], "")
                .build()
                .validate(),
            Ok(())
        );
    }

    #[test]
    fn missing_fields() {
        for (mail, expected) in [
            (
                Mail::builder().to("jane@example.com").subject("Hi!").text("Hi"),
                ValidationError::MissingFrom,
            ),
            (valid().from(""), ValidationError::MissingFrom),
            (
                Mail::builder().from("john@example.com").subject("Hi!").text("Hi"),
                ValidationError::MissingTo,
            ),
            (valid().to(""), ValidationError::MissingTo),
            (
                Mail::builder()
                    .from("john@example.com")
                    .to("jane@example.com")
                    .text("Hi"),
                ValidationError::MissingSubject,
            ),
            (valid().subject(""), ValidationError::MissingSubject),
            (
                Mail::builder()
                    .from("john@example.com")
                    .to("jane@example.com")
                    .subject("Hi!"),
                ValidationError::MissingBody,
            ),
            (valid().text("").html(""), ValidationError::MissingBody),
            (
                valid().attachment(Vec::<u8>::new(), "empty.bin"),
                ValidationError::MissingAttachmentContent,
            ),
        ] {
            assert_eq!(mail.build().validate(), Err(expected));
        }
    }

    #[test]
    fn error_precedence() {
        assert_eq!(Mail::empty().validate(), Err(ValidationError::MissingFrom));
        assert_eq!(
            Mail::builder()
                .from("john@example.com")
                .attachment(Vec::<u8>::new(), "empty.bin")
                .build()
                .validate(),
            Err(ValidationError::MissingTo)
        );
        assert_eq!(
            valid()
                .subject("")
                .text("")
                .attachment(Vec::<u8>::new(), "empty.bin")
                .build()
                .validate(),
            Err(ValidationError::MissingSubject)
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(ValidationError::MissingFrom.to_string(), "From is required");
        assert_eq!(ValidationError::MissingTo.to_string(), "To is required");
        assert_eq!(
            ValidationError::MissingSubject.to_string(),
            "Subject is required"
        );
        assert_eq!(
            ValidationError::MissingBody.to_string(),
            "Text or Html is required"
        );
        assert_eq!(
            ValidationError::MissingAttachmentContent.to_string(),
            "Attachment content is required"
        );
        assert_eq!(ValidationError::MissingAttachmentContent.field(), "attachments");
    }
}
