mod controller;
mod field;
pub mod messages;
mod options;
mod schema;
mod submission;
mod values;

pub use controller::FormController;
pub use field::{FieldName, FieldValue, InputKind, RawInput};
pub use options::{FavFood, FavLanguage};
pub use schema::{
    FieldSchema, FormSchema, Rule, USERNAME_MAX_LENGTH, USERNAME_MIN_LENGTH,
};
pub use submission::{ServerResponse, SubmissionResult};
pub use values::{FieldErrors, FormValues};
