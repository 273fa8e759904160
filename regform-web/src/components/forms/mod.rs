mod field_error;
mod helpers;
mod input_event;
mod registration_form;

pub use registration_form::RegistrationForm;
