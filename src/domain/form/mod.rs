//! Declarative forms: schema, submitted values and validation errors.

pub mod errors;
pub mod fields;
pub mod messages;
pub mod submission;
pub mod types;

pub use errors::{ErrorCode, FieldError, FormErrors};
pub use submission::{Submission, UploadedFile};
pub use types::{ElementType, Form, FormElement};
