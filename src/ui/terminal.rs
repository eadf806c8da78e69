use std::io::Write;
use std::sync::{Mutex, MutexGuard};
use tracing::warn;

use super::state::{BadgeStyle, OutputStyle, StatusMessage, StatusTone};
use super::surface::UiSurface;
use crate::languages::TextDirection;

const RIGHT_TO_LEFT_MARK: char = '\u{200F}';

/// Retained copy of what the panel currently shows
#[derive(Debug, Clone, Default)]
pub struct PanelView {
    pub output: String,
    pub output_style: Option<OutputStyle>,
    pub status: StatusMessage,
    pub badge: Option<String>,
    pub loading: bool,
    pub trigger_enabled: bool,
}

/// `UiSurface` that writes to a terminal stream
pub struct TerminalSurface<W: Write + Send> {
    out: Mutex<W>,
    view: Mutex<PanelView>,
    color: bool,
}

impl<W: Write + Send> TerminalSurface<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out: Mutex::new(out),
            view: Mutex::new(PanelView {
                trigger_enabled: true,
                ..PanelView::default()
            }),
            color,
        }
    }

    pub fn view(&self) -> PanelView {
        self.lock_view().clone()
    }

    /// Print badge, output and status as they currently stand.
    pub fn render(&self) {
        let view = self.view();
        if let Some(badge) = &view.badge {
            self.write_line(&format!("[{}]", badge));
        }
        if !view.output.is_empty() {
            let rtl = matches!(
                view.output_style.as_ref().map(|s| s.direction),
                Some(TextDirection::Rtl)
            );
            for line in view.output.lines() {
                if rtl {
                    self.write_line(&format!("{}{}", RIGHT_TO_LEFT_MARK, line));
                } else {
                    self.write_line(line);
                }
            }
        }
        if !view.status.text.is_empty() {
            let line = self.paint(&view.status.text, view.status.tone);
            self.write_line(&line);
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    fn paint(&self, text: &str, tone: StatusTone) -> String {
        if !self.color {
            return text.to_string();
        }
        match tone {
            StatusTone::Neutral => text.to_string(),
            StatusTone::Success => format!("\x1b[32m{}\x1b[0m", text),
            StatusTone::Error => format!("\x1b[31m{}\x1b[0m", text),
        }
    }

    fn write_line(&self, line: &str) {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
            warn!("Failed to write to terminal: {}", e);
        }
    }

    fn lock_view(&self) -> MutexGuard<'_, PanelView> {
        self.view.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write + Send> UiSurface for TerminalSurface<W> {
    fn alert(&self, message: &str) {
        let line = self.paint(&format!("! {}", message), StatusTone::Error);
        self.write_line(&line);
    }

    fn set_loading(&self, visible: bool) {
        let was_loading = std::mem::replace(&mut self.lock_view().loading, visible);
        if visible && !was_loading {
            self.write_line("Translating...");
        }
    }

    fn set_trigger_enabled(&self, enabled: bool) {
        self.lock_view().trigger_enabled = enabled;
    }

    fn set_status(&self, status: &StatusMessage) {
        self.lock_view().status = status.clone();
    }

    fn set_output(&self, text: &str) {
        self.lock_view().output = text.to_string();
    }

    fn set_output_style(&self, style: &OutputStyle) {
        self.lock_view().output_style = Some(style.clone());
    }

    fn set_detected_badge(&self, label: &str, _style: &BadgeStyle) {
        self.lock_view().badge = Some(label.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::DEFAULT_RTL_FONT;

    fn rendered(surface: TerminalSurface<Vec<u8>>) -> String {
        String::from_utf8(surface.into_inner()).unwrap()
    }

    #[test]
    fn renders_badge_output_and_status() {
        let surface = TerminalSurface::new(Vec::new(), false);
        surface.set_loading(true);
        surface.set_output("Bonjour");
        surface.set_output_style(&OutputStyle::for_target("fr", DEFAULT_RTL_FONT));
        surface.set_detected_badge("Detected: English", &BadgeStyle::DETECTED);
        surface.set_status(&StatusMessage::success());
        surface.set_loading(false);
        surface.render();

        assert_eq!(
            rendered(surface),
            "Translating...\n[Detected: English]\nBonjour\nSuccess\n"
        );
    }

    #[test]
    fn rtl_output_lines_get_direction_mark() {
        let surface = TerminalSurface::new(Vec::new(), false);
        surface.set_output("مرحبا");
        surface.set_output_style(&OutputStyle::for_target("ar", DEFAULT_RTL_FONT));
        surface.render();

        assert_eq!(rendered(surface), "\u{200F}مرحبا\n");
    }

    #[test]
    fn error_status_is_colored_when_enabled() {
        let surface = TerminalSurface::new(Vec::new(), true);
        surface.set_status(&StatusMessage::error("Error: Bad language code"));
        surface.render();

        assert_eq!(rendered(surface), "\x1b[31mError: Bad language code\x1b[0m\n");
    }

    #[test]
    fn alert_is_written_immediately() {
        let surface = TerminalSurface::new(Vec::new(), false);
        surface.alert("Please enter text to translate.");
        assert_eq!(rendered(surface), "! Please enter text to translate.\n");
    }
}
