pub mod interface;
pub mod client;
pub mod factory;

pub use interface::{ErrorResponse, TranslateRequest, TranslateResponse, TranslationClient};
pub use client::HttpTranslationClient;
pub use factory::TranslationClientFactory;
