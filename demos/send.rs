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

use mailtrap_send::{Configuration, Mail, MailtrapClient};

// Usage: MAILTRAP_API_KEY=<key> cargo run --example send -- <recipient> [attachment]
#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let recipient = args.next().unwrap_or_else(|| "jane@example.com".to_string());
    let attachment = std::fs::read(args.next().unwrap_or_else(|| "welcome.png".to_string()))
        .unwrap_or_else(|err| {
            log::error!("Failed to read attachment: {}", err);
            std::process::exit(1);
        });

    let configuration = Configuration::from_env().unwrap_or_else(|err| {
        log::error!("{}", err);
        std::process::exit(1);
    });

    // Build a text message with a category and the same file attached twice
    let message = Mail::builder()
        .from(("Mailtrap Test", "mailtrap@demomailtrap.com"))
        .to(recipient)
        .subject("You are awesome!")
        .text("Congrats for sending test email with Mailtrap!")
        .category("Integration Test")
        .attachment(attachment.as_slice(), "welcome.png")
        .attachment(attachment.as_slice(), "welcome2.png");

    // The client logs the API response or the failure reason
    let client: MailtrapClient = configuration.into();
    if client.send(message).await.is_err() {
        std::process::exit(1);
    }
}
