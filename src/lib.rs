pub mod config;
pub mod controller;
pub mod error;
pub mod languages;
pub mod translate;
pub mod ui;

pub use controller::TranslationRequestController;
pub use error::TranslateError;
