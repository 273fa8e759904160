pub mod register;
mod register_handler;
