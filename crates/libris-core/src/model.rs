// ── Domain model ──

use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumString};

/// A book from the shared collection.
///
/// Identity is positional: the service does not guarantee a stable id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub name: String,
    pub author: String,
    /// Empty when the service sends no owner or `null`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub owner_id: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Book {
    pub fn is_owned_by(&self, user: &str) -> bool {
        self.owner_id == user
    }
}

/// Write payload for creating a book. The server assigns `ownerId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewBook {
    pub name: String,
    pub author: String,
}

/// Outcome of the most recent store operation.
///
/// One status is shared by loads and adds; a new operation overwrites it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Error(String),
}

impl RequestStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Which slice of the collection the user is looking at.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BooksFilter {
    #[default]
    All,
    /// Only books owned by the current user.
    Private,
}

/// Transient add-book form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub name: String,
    pub author: String,
}

impl FormDraft {
    /// Both fields hold at least one non-whitespace character.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.author.trim().is_empty()
    }
}
