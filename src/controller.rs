//! Translate form controller.
//!
//! Drives one request at a time through `Idle -> Loading -> Success | Error`
//! and writes every visible effect to an injected [`UiSurface`].

use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::error::{TranslateError, EMPTY_INPUT_PROMPT};
use crate::languages::{display_name, DEFAULT_RTL_FONT};
use crate::translate::{TranslateRequest, TranslateResponse, TranslationClient};
use crate::ui::{BadgeStyle, OutputStyle, StatusMessage, TranslationOutcome, UiState, UiSurface};

pub struct TranslationRequestController<S: UiSurface> {
    surface: S,
    client: Arc<dyn TranslationClient>,
    rtl_font: String,
    state: UiState,
}

impl<S: UiSurface> TranslationRequestController<S> {
    pub fn new(surface: S, client: Arc<dyn TranslationClient>) -> Self {
        Self {
            surface,
            client,
            rtl_font: DEFAULT_RTL_FONT.to_string(),
            state: UiState::Idle,
        }
    }

    /// Font used for right-to-left output
    pub fn with_rtl_font(mut self, rtl_font: impl Into<String>) -> Self {
        self.rtl_font = rtl_font.into();
        self
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == UiState::Loading
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Translate `raw_input` into `target_lang` and render the result.
    ///
    /// Blank input raises the validation alert and returns
    /// `TranslateError::EmptyInput` without touching the network. Otherwise
    /// exactly one request is sent; the loader is hidden and the trigger
    /// re-enabled on every exit, including when this future is dropped
    /// before the response arrives.
    pub async fn submit(
        &mut self,
        raw_input: &str,
        target_lang: &str,
    ) -> Result<TranslationOutcome, TranslateError> {
        let text = raw_input.trim();
        if text.is_empty() {
            warn!("Rejected empty translation input");
            self.surface.alert(EMPTY_INPUT_PROMPT);
            return Err(TranslateError::EmptyInput);
        }

        let request = TranslateRequest {
            text: text.to_string(),
            target_lang: target_lang.to_string(),
        };
        info!("Submitting translation: target_lang={}, chars={}", target_lang, text.chars().count());

        let mut guard = BusyGuard::acquire(&self.surface, &mut self.state);
        self.surface.set_status(&StatusMessage::cleared());
        self.surface.set_output("");

        // Suspension point
        match self.client.translate(&request).await {
            Ok(response) => {
                let outcome = render_success(&self.surface, &request, response, &self.rtl_font);
                guard.settle(UiState::Success);
                Ok(outcome)
            }
            Err(err) => {
                error!("Translation failed: {}", err);
                if let Some(text) = err.status_text() {
                    self.surface.set_status(&StatusMessage::error(text));
                }
                guard.settle(UiState::Error);
                Err(err)
            }
        }
    }
}

fn render_success<S: UiSurface>(
    surface: &S,
    request: &TranslateRequest,
    response: TranslateResponse,
    rtl_font: &str,
) -> TranslationOutcome {
    surface.set_output(&response.translation);

    let style = OutputStyle::for_target(&request.target_lang, rtl_font);
    surface.set_output_style(&style);

    let badge_label = format!("Detected: {}", display_name(&response.detected_language));
    surface.set_detected_badge(&badge_label, &BadgeStyle::DETECTED);

    surface.set_status(&StatusMessage::success());
    debug!("Rendered translation: direction={}, badge={}", style.direction.as_str(), badge_label);

    TranslationOutcome {
        translation: response.translation,
        detected_language: response.detected_language,
        badge_label,
        style,
    }
}

/// Holds the form in its busy state; releasing it restores the loader and
/// trigger whatever path the request took.
struct BusyGuard<'a, S: UiSurface> {
    surface: &'a S,
    state: &'a mut UiState,
}

impl<'a, S: UiSurface> BusyGuard<'a, S> {
    fn acquire(surface: &'a S, state: &'a mut UiState) -> Self {
        *state = UiState::Loading;
        surface.set_loading(true);
        surface.set_trigger_enabled(false);
        Self { surface, state }
    }

    fn settle(&mut self, next: UiState) {
        *self.state = next;
    }
}

impl<S: UiSurface> Drop for BusyGuard<'_, S> {
    fn drop(&mut self) {
        // Abandoned before a result arrived
        if *self.state == UiState::Loading {
            *self.state = UiState::Idle;
        }
        self.surface.set_loading(false);
        self.surface.set_trigger_enabled(true);
    }
}
