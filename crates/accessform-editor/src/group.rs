//! Group editor: name, access mode, members and per-collection access.
//!
//! Members and collections each use a [`FormListSelection`]. The member mirror holds the
//! selected member ids; the collection mirror holds one [`SelectionReadOnly`] row per selected
//! collection and is what gets submitted.

use std::collections::HashMap;

use tracing::{debug, info};

use accessform_model::{
    AccessMode, CollectionView, GroupDetails, GroupRequest, GroupTarget, OrganizationUser,
    SelectionReadOnly,
};
use accessform_selection::FormListSelection;
use accessform_utils::error::EditorError;

/// Member selection sorted by name, then email, then id. Mirrors member ids.
pub type MemberSelection = FormListSelection<OrganizationUser, String>;

/// Collection selection sorted by name, then id. Mirrors access rows.
pub type CollectionSelection = FormListSelection<CollectionView, SelectionReadOnly>;

fn member_selection() -> MemberSelection {
    FormListSelection::with_sort_key(|m: &OrganizationUser| m.id.clone(), OrganizationUser::sort_key)
}

fn collection_selection() -> CollectionSelection {
    FormListSelection::with_sort_key(
        |c: &CollectionView| SelectionReadOnly::from(c),
        CollectionView::sort_key,
    )
}

/// Editing state for creating or updating a group.
#[derive(Debug)]
pub struct GroupEditor {
    organization_id: String,
    group_id: Option<String>,
    name: String,
    external_id: Option<String>,
    access: AccessMode,
    members: MemberSelection,
    member_ids: Vec<String>,
    collections: CollectionSelection,
    collection_access: Vec<SelectionReadOnly>,
}

impl GroupEditor {
    /// Editor for a new group. Nothing starts out selected.
    #[must_use]
    pub fn for_add(
        organization_id: impl Into<String>,
        members: Vec<OrganizationUser>,
        collections: Vec<CollectionView>,
    ) -> Self {
        let mut editor = Self::empty(organization_id.into(), None);
        editor.members.populate_options(members, Vec::<String>::new());
        editor
            .collections
            .populate_options(collections, Vec::<String>::new());
        info!(
            organization_id = %editor.organization_id,
            members = editor.members.all_options().len(),
            collections = editor.collections.all_options().len(),
            "opened group editor in add mode"
        );
        editor
    }

    /// Editor for an existing group.
    ///
    /// Collections the group already grants are pre-selected with the group's flags, and the
    /// submitted rows are seeded to match. Grants for collections that are not in
    /// `collections` are dropped.
    #[must_use]
    pub fn for_edit(
        organization_id: impl Into<String>,
        members: Vec<OrganizationUser>,
        mut collections: Vec<CollectionView>,
        details: GroupDetails,
    ) -> Self {
        let mut editor = Self::empty(organization_id.into(), Some(details.id.clone()));
        editor.name = details.name;
        editor.external_id = details.external_id;
        editor.access = if details.access_all {
            AccessMode::All
        } else {
            AccessMode::Selected
        };

        let granted: HashMap<&str, &SelectionReadOnly> = details
            .collections
            .iter()
            .map(|grant| (grant.id.as_str(), grant))
            .collect();
        for collection in &mut collections {
            if let Some(grant) = granted.get(collection.id.as_str()) {
                collection.read_only = grant.read_only;
                collection.hide_passwords = grant.hide_passwords;
            }
        }

        editor.members.populate_options(members, Vec::<String>::new());
        editor.collections.populate_options(
            collections,
            details.collections.iter().map(|grant| grant.id.as_str()),
        );
        editor.collections.seed_mirror(&mut editor.collection_access);

        let dropped = details
            .collections
            .len()
            .saturating_sub(editor.collection_access.len());
        if dropped > 0 {
            debug!(dropped, "ignored grants for collections that were not loaded");
        }
        info!(
            organization_id = %editor.organization_id,
            group_id = %details.id,
            access = %editor.access,
            collections = editor.collection_access.len(),
            "opened group editor in edit mode"
        );
        editor
    }

    fn empty(organization_id: String, group_id: Option<String>) -> Self {
        Self {
            organization_id,
            group_id,
            name: String::new(),
            external_id: None,
            access: AccessMode::default(),
            members: member_selection(),
            member_ids: Vec::new(),
            collections: collection_selection(),
            collection_access: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_edit_mode(&self) -> bool {
        self.group_id.is_some()
    }

    #[must_use]
    pub fn organization_id(&self) -> &str {
        &self.organization_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn external_id(&self) -> Option<&str> {
        self.external_id.as_deref()
    }

    pub fn set_external_id(&mut self, external_id: Option<String>) {
        self.external_id = external_id;
    }

    #[must_use]
    pub fn access(&self) -> AccessMode {
        self.access
    }

    pub fn set_access(&mut self, access: AccessMode) {
        self.access = access;
    }

    #[must_use]
    pub fn members(&self) -> &MemberSelection {
        &self.members
    }

    #[must_use]
    pub fn collections(&self) -> &CollectionSelection {
        &self.collections
    }

    /// Ids of the selected members, in display order.
    #[must_use]
    pub fn member_ids(&self) -> &[String] {
        &self.member_ids
    }

    /// Access rows for the selected collections, in display order.
    #[must_use]
    pub fn collection_access(&self) -> &[SelectionReadOnly] {
        &self.collection_access
    }

    pub fn add_member(&mut self, id: &str) -> bool {
        self.members.select_option(id, &mut self.member_ids)
    }

    pub fn remove_member(&mut self, id: &str) -> bool {
        self.members.deselect_option(id, &mut self.member_ids)
    }

    pub fn add_collection(&mut self, id: &str) -> bool {
        self.collections.select_option(id, &mut self.collection_access)
    }

    /// Drop a collection. Its edited flags are discarded; selecting it again starts from the
    /// collection's own flags.
    pub fn remove_collection(&mut self, id: &str) -> bool {
        self.collections
            .deselect_option(id, &mut self.collection_access)
    }

    /// Update the access row of a selected collection. Returns `false` if it is not selected.
    pub fn set_collection_access(&mut self, id: &str, read_only: bool, hide_passwords: bool) -> bool {
        let Some(index) = self.collections.selected_index(id) else {
            return false;
        };
        let row = &mut self.collection_access[index];
        row.read_only = read_only;
        row.hide_passwords = hide_passwords;
        debug!(id, read_only, hide_passwords, "updated collection access");
        true
    }

    /// Select every available collection, or deselect every selected one.
    /// Returns how many collections moved.
    pub fn select_all_collections(&mut self, select: bool) -> usize {
        if select {
            let ids: Vec<String> = self
                .collections
                .available_options()
                .iter()
                .map(|c| c.id.clone())
                .collect();
            self.collections
                .select_options(&ids, &mut self.collection_access)
        } else {
            let ids: Vec<String> = self
                .collections
                .selected_options()
                .iter()
                .map(|c| c.id.clone())
                .collect();
            self.collections
                .deselect_options(&ids, &mut self.collection_access)
        }
    }

    /// Validate the form and build the request body.
    ///
    /// With [`AccessMode::All`] no collection rows are sent.
    pub fn submit(&self) -> Result<GroupRequest, EditorError> {
        if self.name.is_empty() {
            return Err(EditorError::required("name"));
        }

        let access_all = self.access == AccessMode::All;
        let collections = if access_all {
            Vec::new()
        } else {
            self.collection_access.clone()
        };

        Ok(GroupRequest {
            name: self.name.clone(),
            external_id: self.external_id.clone(),
            access_all,
            collections,
        })
    }

    /// The group to delete. Only an existing group can be deleted.
    #[must_use]
    pub fn delete_target(&self) -> Option<GroupTarget> {
        self.group_id.as_ref().map(|group_id| GroupTarget {
            organization_id: self.organization_id.clone(),
            group_id: group_id.clone(),
        })
    }
}
