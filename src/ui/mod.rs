pub mod state;
pub mod surface;
pub mod terminal;

pub use state::{BadgeStyle, OutputStyle, StatusMessage, StatusTone, TranslationOutcome, UiState};
pub use surface::UiSurface;
pub use terminal::{PanelView, TerminalSurface};
