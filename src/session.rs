//! Editing session files
//!
//! A session file is a JSON document describing the data an editor is opened with and the
//! user actions to replay against it. Field names are camelCase. The path `-` reads stdin.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

use accessform_model::{
    AccessMode, CollectionView, GroupDetails, OrganizationUser, SecretOperation, SecretView,
    SelectionReadOnly,
};
use accessform_utils::error::SessionError;

/// Group editor session
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSession {
    pub organization_id: String,
    #[serde(default)]
    pub members: Vec<OrganizationUser>,
    #[serde(default)]
    pub collections: Vec<CollectionView>,
    /// Present when editing an existing group
    #[serde(default)]
    pub group: Option<GroupDetails>,
    #[serde(default)]
    pub actions: Vec<GroupAction>,
}

/// One user interaction with the group editor
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupAction {
    AddMember(String),
    RemoveMember(String),
    AddCollection(String),
    RemoveCollection(String),
    SetCollectionAccess(SelectionReadOnly),
    SelectAllCollections(bool),
    SetName(String),
    SetExternalId(Option<String>),
    SetAccess(AccessMode),
}

/// Secret editor session
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretSession {
    pub operation: SecretOperation,
    /// The secret as loaded for an edit
    #[serde(default)]
    pub existing: Option<SecretView>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Read and parse a session file (`-` for stdin).
pub fn load_session<T: DeserializeOwned>(path: &Path) -> Result<T, SessionError> {
    let display = path.display().to_string();
    let content = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| SessionError::Unreadable {
                path: display.clone(),
                reason: e.to_string(),
            })?;
        buffer
    } else {
        std::fs::read_to_string(path).map_err(|e| SessionError::Unreadable {
            path: display.clone(),
            reason: e.to_string(),
        })?
    };

    parse_session(&content, &display)
}

/// Parse session JSON; `origin` names the source in errors.
pub fn parse_session<T: DeserializeOwned>(content: &str, origin: &str) -> Result<T, SessionError> {
    serde_json::from_str(content).map_err(|e| SessionError::Malformed {
        path: origin.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_group_session_actions() {
        let session: GroupSession = parse_session(
            r#"{
                "organizationId": "org",
                "members": [{"id": "u1", "name": "Ana"}],
                "actions": [
                    {"addMember": "u1"},
                    {"setCollectionAccess": {"id": "c1", "readOnly": true}},
                    {"setAccess": "all"},
                    {"setExternalId": null}
                ]
            }"#,
            "inline",
        )
        .unwrap();

        assert_eq!(session.members.len(), 1);
        assert!(session.group.is_none());
        assert_eq!(
            session.actions,
            vec![
                GroupAction::AddMember("u1".to_string()),
                GroupAction::SetCollectionAccess(SelectionReadOnly::new("c1", true, false)),
                GroupAction::SetAccess(AccessMode::All),
                GroupAction::SetExternalId(None),
            ]
        );
    }

    #[test]
    fn test_malformed_session_names_origin() {
        let err = parse_session::<SecretSession>("{\"operation\": 3}", "s.json").unwrap_err();
        assert!(matches!(err, SessionError::Malformed { ref path, .. } if path == "s.json"));
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let err = load_session::<GroupSession>(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, SessionError::Unreadable { .. }));
    }
}
