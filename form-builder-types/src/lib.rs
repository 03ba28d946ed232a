//! Core types for the form-builder crate.
//!
//! This crate provides the foundational types for building form templates:
//! - `Template`, `Section` and `Field` - The three-level ordered document tree
//! - `FieldKind` - The closed set of field types
//! - `FieldDraft` and `FieldUpdate` - Inputs for creating and editing fields
//! - `FieldValue` and `FormValues` - Values entered into a generated form
//! - `move_permutation` and friends - The ordering algorithm shared by sections and fields
//! - `validate_field` and `validate_template` - Per-field submission checks
//! - `FormView` - A presentation-agnostic read model of a form

mod id;
pub use id::{FieldId, SectionId, TemplateId};

mod field_value;
pub use field_value::FieldValue;

mod form_values;
pub use form_values::FormValues;

mod field;
pub use field::{
    DEFAULT_ENUM_OPTIONS, Field, FieldDraft, FieldKind, FieldUpdate, parse_options,
};

mod template;
pub use template::{Section, Template};

mod reorder;
pub use reorder::{Identified, move_permutation, permute_by_ids, plan_move};

mod validation;
pub use validation::{FieldErrors, validate_field, validate_template};

mod view;
pub use view::{FormRow, FormView, InputRow, SectionView};

mod error;
pub use error::{ParseFieldKindError, ValidationError};
