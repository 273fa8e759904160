mod button_type;
mod submit_button;

pub use submit_button::SubmitButton;
