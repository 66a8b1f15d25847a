//! Admin message probe: log in with administrator credentials, then
//! preview the shadow message feed.

use super::FlowError;
use crate::api::{self, Transport};
use crate::config::Credentials;
use crate::data_model::api::MessageRecord;
use crate::report;
use std::io::{self, Write};
use url::Url;

pub fn run(
    transport: &mut impl Transport,
    base_url: &Url,
    credentials: &Credentials,
    out: &mut impl Write,
) -> io::Result<()> {
    match probe(transport, base_url, credentials, out) {
        Ok(()) => Ok(()),
        Err(FlowError::Io(err)) => Err(err),
        Err(FlowError::Transport(err)) => writeln!(out, "Error: {err}"),
    }
}

fn probe(
    transport: &mut impl Transport,
    base_url: &Url,
    credentials: &Credentials,
    out: &mut impl Write,
) -> Result<(), FlowError> {
    writeln!(out, "Logging in as {}...", credentials.email)?;
    let response = transport.execute(&api::login_request(base_url, credentials))?;
    if !response.is_success() {
        writeln!(out, "Login failed: {} {}", response.status, response.body)?;
        return Ok(());
    }

    let token = match api::extract_token(&response) {
        Ok(token) => token,
        Err(reason) => {
            writeln!(out, "Login succeeded but returned no usable token: {reason}")?;
            return Ok(());
        }
    };

    writeln!(out, "Fetching /api/shadow/messages...")?;
    let response = transport.execute(&api::admin_messages_request(base_url, &token))?;
    if !response.is_success() {
        writeln!(out, "Fetch failed: {} {}", response.status, response.body)?;
        return Ok(());
    }

    match serde_json::from_str::<Vec<MessageRecord>>(&response.body) {
        Ok(messages) => {
            writeln!(out, "Success. Fetched {} messages.", messages.len())?;
            report::write_message_preview(out, &messages)?;
        }
        Err(err) => {
            writeln!(out, "Fetch succeeded but body was not a message list: {err}")?;
        }
    }

    Ok(())
}
