//! Group workflow probe: sign up a throwaway account, log in, resolve
//! a group to target, then fetch that group's messages.

use super::FlowError;
use crate::api::{self, Transport};
use crate::config::{Credentials, NewGroup};
use crate::data_model::api::GroupSummary;
use crate::probe::HttpResponse;
use std::io::{self, Write};
use url::Url;

/// Identifier used when no group can be resolved from the backend.
const FALLBACK_GROUP_ID: i64 = 1;

/// Outcome of the group-listing step, computed exactly once. The three
/// variants are exhaustive so the follow-up decision has a single
/// branch point.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GroupResolution {
    ListFailed,
    ListEmpty,
    ListNonEmpty { first_id: i64, count: usize },
}

impl GroupResolution {
    pub(crate) fn from_list_response(response: &HttpResponse) -> Self {
        if !response.is_success() {
            return GroupResolution::ListFailed;
        }
        match serde_json::from_str::<Vec<GroupSummary>>(&response.body) {
            Ok(groups) => match groups.first() {
                Some(first) => GroupResolution::ListNonEmpty {
                    first_id: first.id,
                    count: groups.len(),
                },
                None => GroupResolution::ListEmpty,
            },
            Err(_) => GroupResolution::ListFailed,
        }
    }
}

pub fn run(
    transport: &mut impl Transport,
    base_url: &Url,
    credentials: &Credentials,
    out: &mut impl Write,
) -> io::Result<()> {
    match probe(transport, base_url, credentials, out) {
        Ok(()) => Ok(()),
        Err(FlowError::Io(err)) => Err(err),
        Err(FlowError::Transport(err)) => writeln!(out, "   Failed to connect: {err}"),
    }
}

fn probe(
    transport: &mut impl Transport,
    base_url: &Url,
    credentials: &Credentials,
    out: &mut impl Write,
) -> Result<(), FlowError> {
    writeln!(out, "Testing with email: {}", credentials.email)?;

    // Signup conflicts are expected when the account already exists.
    writeln!(out, "1. Signup...")?;
    let response = transport.execute(&api::signup_request(base_url, credentials))?;
    writeln!(out, "   Status: {}", response.status)?;

    writeln!(out, "2. Login...")?;
    let response = transport.execute(&api::login_request(base_url, credentials))?;
    writeln!(out, "   Status: {}", response.status)?;
    if !response.is_success() {
        writeln!(out, "   Login failed. Exiting.")?;
        return Ok(());
    }
    let token = match api::extract_token(&response) {
        Ok(token) => token,
        Err(reason) => {
            writeln!(out, "   Login returned no usable token ({reason}). Exiting.")?;
            return Ok(());
        }
    };

    writeln!(out, "3. Get Groups...")?;
    let response = transport.execute(&api::list_groups_request(base_url, &token))?;
    writeln!(out, "   Status: {}", response.status)?;
    let resolution = GroupResolution::from_list_response(&response);
    match resolution {
        GroupResolution::ListFailed if response.is_success() => {
            writeln!(out, "   Error: group list was not a JSON array of groups")?;
        }
        GroupResolution::ListFailed => {
            writeln!(out, "   Error: {}", response.body)?;
        }
        GroupResolution::ListEmpty => {
            writeln!(out, "   Groups: 0")?;
        }
        GroupResolution::ListNonEmpty { count, .. } => {
            writeln!(out, "   Groups: {count}")?;
        }
    }

    let group_id = match resolution {
        GroupResolution::ListFailed => FALLBACK_GROUP_ID,
        GroupResolution::ListNonEmpty { first_id, .. } => first_id,
        GroupResolution::ListEmpty => {
            writeln!(out, "   Creating group...")?;
            let request = api::create_group_request(base_url, &token, &NewGroup::default());
            let response = transport.execute(&request)?;
            writeln!(out, "   Status: {}", response.status)?;
            if response.is_success() {
                api::created_group_id(&response).unwrap_or(FALLBACK_GROUP_ID)
            } else {
                FALLBACK_GROUP_ID
            }
        }
    };

    writeln!(out, "4. Get Messages for Group {group_id}...")?;
    let response = transport.execute(&api::group_messages_request(base_url, &token, group_id))?;
    writeln!(out, "   Status: {}", response.status)?;
    if !response.is_success() {
        writeln!(out, "   Error: {}", response.body)?;
    }

    Ok(())
}
