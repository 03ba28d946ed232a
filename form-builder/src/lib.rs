//! # form-builder
//!
//! Build reusable form templates, persist them, and validate submissions.
//! Presentation-agnostic.
//!
//! A template is an ordered list of sections, each an ordered list of typed
//! fields. `TemplateStore` owns every template and exposes the mutation
//! protocol; each applied mutation is written through a `Storage` slot
//! before it returns. `FormRuntime` generates forms from a template,
//! validates the entered values and appends submissions to their own slot.
//!
//! ## Usage
//!
//! ```rust
//! use form_builder::{
//!     FieldDraft, FieldKind, FormRuntime, FormValues, MemoryStorage, TemplateStore,
//! };
//!
//! let storage = MemoryStorage::new();
//! let mut store = TemplateStore::open(storage.clone());
//!
//! let survey = store.create_template("Survey").unwrap();
//! let basics = store.add_section(&survey, "Basics").unwrap();
//! let name = store
//!     .add_field(&basics, FieldDraft::new(FieldKind::Text, "Name").required(true))
//!     .unwrap();
//!
//! let mut runtime = FormRuntime::open(storage);
//! assert!(runtime.submit(&store, &survey, &FormValues::new()).is_err());
//!
//! let values = FormValues::new().with(name, "Alice");
//! let submission = runtime.submit(&store, &survey, &values).unwrap();
//! assert_eq!(submission.data, values);
//! ```
//!
//! ## Storage
//!
//! Storage backends implement `Storage`:
//! - `FileStorage` - one JSON file per slot in a directory
//! - `MemoryStorage` - in-process slots, for tests and embedding
//!
//! ## Drag and drop
//!
//! Gesture capture stays outside this crate. A front end reports a finished
//! drag as a `DragEnd` within a `ReorderScope` and calls
//! `TemplateStore::apply_drag`.

// Re-export all types from form-builder-types
pub use form_builder_types::*;

mod error;
pub use error::{PersistenceError, StorageError, SubmitError};

mod options;
pub use options::StoreOptions;

mod storage;
pub use storage::{FileStorage, Storage};

mod memory_storage;
pub use memory_storage::MemoryStorage;

mod persistence;
pub use persistence::{SubmissionPersistence, TemplatePersistence};

mod drag;
pub use drag::{DragEnd, ReorderScope};

mod store;
pub use store::TemplateStore;

mod runtime;
pub use runtime::{FormRuntime, FormSession, FormState, Submission, SubmissionId, SubmissionLog};
