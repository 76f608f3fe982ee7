//! accessform - dual-list selection for group and secret editors
//!
//! The core of this crate is [`FormListSelection`]: it partitions a set of options into a
//! *selected* and an *available* list, keeps both sorted by a display key, and mirrors every
//! selection into a caller-owned list of mapped values (the form control).
//!
//! The group and secret editors are built on top of it, and the `accessform` binary replays
//! editing sessions stored as JSON through them and prints the resulting request.
//!
//! # Quick Start (CLI)
//!
//! ```bash
//! # Build the group request for a session
//! accessform group session.json
//!
//! # Inspect the selected/available lists after replay
//! accessform group session.json --state
//!
//! # Build a secret create/update submission
//! accessform secret secret.json
//! ```
//!
//! # Quick Start (Library)
//!
//! ```rust
//! use accessform::{FormListSelection, OrganizationUser};
//!
//! let mut mirror: Vec<String> = Vec::new();
//! let mut members = FormListSelection::with_sort_key(
//!     |u: &OrganizationUser| u.id.clone(),
//!     |u: &OrganizationUser| u.sort_key(),
//! );
//! members.populate_options(
//!     vec![
//!         OrganizationUser::new("u1").with_name("Zoe"),
//!         OrganizationUser::new("u2").with_name("Adam"),
//!     ],
//!     Vec::<String>::new(),
//! );
//!
//! members.select_option("u1", &mut mirror);
//! members.select_option("u2", &mut mirror);
//! assert_eq!(mirror, ["u2", "u1"]);
//! ```

pub use accessform_selection::{FormListSelection, Identified, MirrorList};

pub use accessform_model::{
    AccessMode, CollectionView, GroupDetails, GroupRequest, GroupTarget, OrganizationUser,
    SecretOperation, SecretOperationType, SecretView, SelectionReadOnly,
};

pub use accessform_editor::{
    CollectionSelection, GroupEditor, MemberSelection, SecretEditor, SecretSubmission,
};

pub use accessform_config::{CliArgs, Config, ConfigSource};

pub use accessform_utils::error::{
    AccessFormError, ConfigError, EditorError, SessionError, UserFriendlyError,
};
pub use accessform_utils::exit_codes::ExitCode;

pub mod cli;
pub mod replay;
pub mod session;
