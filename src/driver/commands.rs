//! Command handlers for the contact directory driver.
//!
//! Each input line is one JSON object tagged by `"op"`. Every command
//! produces exactly one [`Response`].

use crate::domain::Field;
use crate::error::ContactResult;
use crate::models::contact::require;
use crate::models::{Contact, ContactDraft};
use crate::services::ContactService;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A directory command decoded from one input line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    Add {
        contact: ContactDraft,
    },
    Get {
        contact_id: String,
    },
    Update {
        contact_id: String,
        #[serde(default)]
        first_name: Option<String>,
        #[serde(default)]
        last_name: Option<String>,
        #[serde(default)]
        phone: Option<String>,
        #[serde(default)]
        address: Option<String>,
    },
    Delete {
        contact_id: String,
    },
    List,
    Stats,
}

/// The result of one command, serialized as one output line.
///
/// A successful `get` for an unknown ID has `ok: true` and no `contact`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Response {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<Contact>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    fn ok() -> Self {
        Self {
            ok: true,
            ..Default::default()
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(message.into()),
            ..Default::default()
        }
    }
}

/// Decode and execute one input line.
///
/// Returns `None` for a blank line. A line that is not a valid command
/// yields an error response.
pub fn handle_line(service: &ContactService, line: &str) -> Option<Response> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let response = match serde_json::from_str::<Command>(line) {
        Ok(command) => execute(service, command),
        Err(e) => {
            warn!(error = %e, "Malformed command");
            Response::error(format!("Malformed command: {}", e))
        }
    };
    Some(response)
}

/// Execute a decoded command against `service`.
pub fn execute(service: &ContactService, command: Command) -> Response {
    debug!(?command, "Executing command");

    let result = match command {
        Command::Add { contact } => Contact::try_from(contact)
            .and_then(|contact| service.add_contact(contact))
            .map(|()| Response::ok()),
        Command::Get { contact_id } => Ok(Response {
            contact: service.get_contact(&contact_id),
            ..Response::ok()
        }),
        Command::Update {
            contact_id,
            first_name,
            last_name,
            phone,
            address,
        } => update(service, &contact_id, first_name, last_name, phone, address),
        Command::Delete { contact_id } => {
            service.delete_contact(&contact_id).map(|deleted| Response {
                deleted: Some(deleted),
                ..Response::ok()
            })
        }
        Command::List => Ok(Response {
            contacts: Some(service.list_contacts()),
            ..Response::ok()
        }),
        Command::Stats => Ok(Response {
            summary: Some(service.metrics().summary()),
            ..Response::ok()
        }),
    };

    result.unwrap_or_else(|e| Response::error(e.to_string()))
}

fn update(
    service: &ContactService,
    contact_id: &str,
    first_name: Option<String>,
    last_name: Option<String>,
    phone: Option<String>,
    address: Option<String>,
) -> ContactResult<Response> {
    service.update_contact(
        contact_id,
        require(first_name, Field::FirstName)?,
        require(last_name, Field::LastName)?,
        require(phone, Field::Phone)?,
        require(address, Field::Address)?,
    )?;
    Ok(Response::ok())
}
