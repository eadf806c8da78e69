use super::state::{BadgeStyle, OutputStyle, StatusMessage};

/// The UI elements the controller drives.
///
/// Elements behave like handles: every method takes `&self`, so the
/// controller can keep writing while a cleanup guard holds a reference.
pub trait UiSurface: Send + Sync {
    /// Blocking user prompt (validation failures)
    fn alert(&self, message: &str);

    fn set_loading(&self, visible: bool);

    fn set_trigger_enabled(&self, enabled: bool);

    fn set_status(&self, status: &StatusMessage);

    fn set_output(&self, text: &str);

    fn set_output_style(&self, style: &OutputStyle);

    /// Detected-language badge, e.g. `Detected: English`
    fn set_detected_badge(&self, label: &str, style: &BadgeStyle);
}
