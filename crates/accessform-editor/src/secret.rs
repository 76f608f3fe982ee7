//! Secret editor: create or update a single secret.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use accessform_model::{SecretOperation, SecretOperationType, SecretView};
use accessform_utils::error::EditorError;

/// What submitting the secret editor asks the caller to do
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "secret", rename_all = "lowercase")]
pub enum SecretSubmission {
    Create(SecretView),
    Update(SecretView),
}

impl SecretSubmission {
    #[must_use]
    pub fn secret(&self) -> &SecretView {
        match self {
            Self::Create(view) | Self::Update(view) => view,
        }
    }
}

/// Form state of the secret dialog.
#[derive(Debug, Clone)]
pub struct SecretEditor {
    operation: SecretOperation,
    name: String,
    value: String,
    notes: String,
}

impl SecretEditor {
    /// Open the editor for `operation`.
    ///
    /// `existing` is the secret loaded for an edit; it is ignored when adding.
    pub fn open(
        operation: SecretOperation,
        existing: Option<SecretView>,
    ) -> Result<Self, EditorError> {
        let mut editor = Self {
            operation,
            name: String::new(),
            value: String::new(),
            notes: String::new(),
        };

        match (editor.operation.operation, editor.operation.secret_id.as_deref()) {
            (SecretOperationType::Add, _) => {
                if existing.is_some() {
                    debug!("ignoring loaded secret for add operation");
                }
            }
            (SecretOperationType::Edit, None) => {
                return Err(EditorError::InvalidOperation(
                    "edit requires a secret id".to_string(),
                ));
            }
            (SecretOperationType::Edit, Some(secret_id)) => {
                let Some(secret) = existing else {
                    return Err(EditorError::SecretNotFound(secret_id.to_string()));
                };
                editor.name = secret.name;
                editor.value = secret.value;
                editor.notes = secret.note;
            }
        }

        info!(
            organization_id = %editor.operation.organization_id,
            operation = ?editor.operation.operation,
            "opened secret editor"
        );
        Ok(editor)
    }

    #[must_use]
    pub fn operation(&self) -> &SecretOperation {
        &self.operation
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Name and value are required; notes are optional.
    pub fn validate(&self) -> Result<(), EditorError> {
        if self.name.is_empty() {
            return Err(EditorError::required("name"));
        }
        if self.value.is_empty() {
            return Err(EditorError::required("value"));
        }
        Ok(())
    }

    /// Validate and build the create or update request.
    pub fn submit(&self) -> Result<SecretSubmission, EditorError> {
        self.validate()?;

        let mut view = SecretView {
            id: None,
            organization_id: self.operation.organization_id.clone(),
            name: self.name.clone(),
            value: self.value.clone(),
            note: self.notes.clone(),
        };

        Ok(match self.operation.operation {
            SecretOperationType::Add => SecretSubmission::Create(view),
            SecretOperationType::Edit => {
                view.id = self.operation.secret_id.clone();
                SecretSubmission::Update(view)
            }
        })
    }
}
