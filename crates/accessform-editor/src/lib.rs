//! Form models behind the group and secret editors
//!
//! These own the editing state of a dialog and turn it into request DTOs. Loading data and
//! sending requests is left to the caller.

pub mod group;
pub mod secret;

pub use accessform_utils::error::EditorError;
pub use group::{CollectionSelection, GroupEditor, MemberSelection};
pub use secret::{SecretEditor, SecretSubmission};
