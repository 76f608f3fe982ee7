//! Replaying editing sessions through the form models
//!
//! Selection operations never fail on their own. Replay decides what an unmatched id means:
//! ids that exist but are already where the action would put them are quiet no-ops, while ids
//! that match no loaded option are logged and ignored, or rejected in strict mode.

use serde::Serialize;
use tracing::{debug, info, warn};

use accessform_editor::{GroupEditor, SecretEditor, SecretSubmission};
use accessform_model::{AccessMode, SelectionReadOnly};
use accessform_selection::{FormListSelection, Identified};
use accessform_utils::error::AccessFormError;

use crate::session::{GroupAction, GroupSession, SecretSession};

/// Open a group editor from `session` and apply its actions in order.
pub fn replay_group_session(
    session: GroupSession,
    strict: bool,
) -> Result<GroupEditor, AccessFormError> {
    let mut editor = match session.group {
        Some(details) => GroupEditor::for_edit(
            session.organization_id,
            session.members,
            session.collections,
            details,
        ),
        None => GroupEditor::for_add(
            session.organization_id,
            session.members,
            session.collections,
        ),
    };

    let total = session.actions.len();
    for action in session.actions {
        apply_group_action(&mut editor, action, strict)?;
    }
    info!(actions = total, "replayed group session");

    Ok(editor)
}

fn apply_group_action(
    editor: &mut GroupEditor,
    action: GroupAction,
    strict: bool,
) -> Result<(), AccessFormError> {
    match action {
        GroupAction::AddMember(id) => {
            let changed = editor.add_member(&id);
            settle(changed, "member", &id, is_known(editor.members(), &id), strict)
        }
        GroupAction::RemoveMember(id) => {
            let changed = editor.remove_member(&id);
            settle(changed, "member", &id, is_known(editor.members(), &id), strict)
        }
        GroupAction::AddCollection(id) => {
            let changed = editor.add_collection(&id);
            settle(changed, "collection", &id, is_known(editor.collections(), &id), strict)
        }
        GroupAction::RemoveCollection(id) => {
            let changed = editor.remove_collection(&id);
            settle(changed, "collection", &id, is_known(editor.collections(), &id), strict)
        }
        GroupAction::SetCollectionAccess(row) => {
            let changed =
                editor.set_collection_access(&row.id, row.read_only, row.hide_passwords);
            let known = is_known(editor.collections(), &row.id);
            if !changed && known {
                warn!(id = %row.id, "collection access ignored, collection is not selected");
            }
            settle(changed, "collection", &row.id, known, strict)
        }
        GroupAction::SelectAllCollections(select) => {
            let moved = editor.select_all_collections(select);
            debug!(select, moved, "toggled all collections");
            Ok(())
        }
        GroupAction::SetName(name) => {
            editor.set_name(name);
            Ok(())
        }
        GroupAction::SetExternalId(external_id) => {
            editor.set_external_id(external_id);
            Ok(())
        }
        GroupAction::SetAccess(access) => {
            editor.set_access(access);
            Ok(())
        }
    }
}

fn is_known<O: Identified + Clone, T, K: Ord>(
    selection: &FormListSelection<O, T, K>,
    id: &str,
) -> bool {
    selection.all_options().iter().any(|option| option.id() == id)
}

fn settle(
    changed: bool,
    kind: &str,
    id: &str,
    known: bool,
    strict: bool,
) -> Result<(), AccessFormError> {
    if changed || known {
        return Ok(());
    }
    if strict {
        return Err(AccessFormError::UnknownIdentifier {
            kind: kind.to_string(),
            id: id.to_string(),
        });
    }
    warn!(kind, id, "ignoring action for unknown id");
    Ok(())
}

/// Open a secret editor from `session`, apply field overrides and submit.
pub fn replay_secret_session(session: SecretSession) -> Result<SecretSubmission, AccessFormError> {
    let mut editor = SecretEditor::open(session.operation, session.existing)?;
    if let Some(name) = session.name {
        editor.set_name(name);
    }
    if let Some(value) = session.value {
        editor.set_value(value);
    }
    if let Some(notes) = session.notes {
        editor.set_notes(notes);
    }
    Ok(editor.submit()?)
}

/// Ids on each side of a selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListState {
    pub selected: Vec<String>,
    pub available: Vec<String>,
}

impl ListState {
    #[must_use]
    pub fn of<O: Identified + Clone, T, K: Ord>(selection: &FormListSelection<O, T, K>) -> Self {
        let ids = |list: &[O]| -> Vec<String> {
            list.iter().map(|o| o.id().to_string()).collect()
        };
        Self {
            selected: ids(selection.selected_options()),
            available: ids(selection.available_options()),
        }
    }
}

/// Snapshot of a group editor, printed by `accessform group --state`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupState {
    pub mode: &'static str,
    pub name: String,
    pub access: AccessMode,
    pub members: ListState,
    pub collections: ListState,
    pub member_ids: Vec<String>,
    pub collection_access: Vec<SelectionReadOnly>,
}

impl From<&GroupEditor> for GroupState {
    fn from(editor: &GroupEditor) -> Self {
        Self {
            mode: if editor.is_edit_mode() { "edit" } else { "add" },
            name: editor.name().to_string(),
            access: editor.access(),
            members: ListState::of(editor.members()),
            collections: ListState::of(editor.collections()),
            member_ids: editor.member_ids().to_vec(),
            collection_access: editor.collection_access().to_vec(),
        }
    }
}
