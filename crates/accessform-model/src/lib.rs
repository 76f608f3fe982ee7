//! Model types for group and secret editors
//!
//! Option records loaded into the editors and the request DTOs they produce. Everything here
//! is plain data; wire names are camelCase.

use serde::{Deserialize, Serialize};

use accessform_selection::Identified;

/// Returns the first candidate that is present and non-empty.
fn first_non_empty<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> Option<&'a str> {
    candidates.into_iter().flatten().find(|s| !s.is_empty())
}

/// Member of an organization that can be added to a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationUser {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl OrganizationUser {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            email: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Display/sort key: name, then email, then id.
    #[must_use]
    pub fn sort_key(&self) -> String {
        first_non_empty([self.name.as_deref(), self.email.as_deref()])
            .unwrap_or(&self.id)
            .to_string()
    }
}

impl Identified for OrganizationUser {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Collection the group can be granted access to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionView {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub hide_passwords: bool,
}

impl CollectionView {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            read_only: false,
            hide_passwords: false,
        }
    }

    /// Display/sort key: name, then id.
    #[must_use]
    pub fn sort_key(&self) -> String {
        first_non_empty([self.name.as_deref()])
            .unwrap_or(&self.id)
            .to_string()
    }
}

impl Identified for CollectionView {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Access granted on a single collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionReadOnly {
    pub id: String,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub hide_passwords: bool,
}

impl SelectionReadOnly {
    #[must_use]
    pub fn new(id: impl Into<String>, read_only: bool, hide_passwords: bool) -> Self {
        Self {
            id: id.into(),
            read_only,
            hide_passwords,
        }
    }
}

impl From<&CollectionView> for SelectionReadOnly {
    fn from(collection: &CollectionView) -> Self {
        Self::new(
            collection.id.clone(),
            collection.read_only,
            collection.hide_passwords,
        )
    }
}

/// Whether a group reaches every collection or only the selected ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessMode {
    All,
    #[default]
    Selected,
}

impl std::fmt::Display for AccessMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Selected => write!(f, "selected"),
        }
    }
}

/// An existing group as loaded for editing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDetails {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub access_all: bool,
    #[serde(default)]
    pub collections: Vec<SelectionReadOnly>,
}

/// Body of a group create/update request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRequest {
    pub name: String,
    pub external_id: Option<String>,
    pub access_all: bool,
    pub collections: Vec<SelectionReadOnly>,
}

/// Identifies a group for deletion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupTarget {
    pub organization_id: String,
    pub group_id: String,
}

/// What the secret editor was opened to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecretOperationType {
    Add,
    Edit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretOperation {
    pub organization_id: String,
    pub operation: SecretOperationType,
    #[serde(default)]
    pub secret_id: Option<String>,
}

/// Decrypted secret as shown in and submitted from the editor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub organization_id: String,
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub note: String,
}
