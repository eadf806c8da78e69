#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use translate_panel::translate::{TranslateRequest, TranslateResponse, TranslationClient};
use translate_panel::ui::{BadgeStyle, OutputStyle, StatusMessage, UiSurface};
use translate_panel::TranslateError;

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Alert(String),
    Loading(bool),
    Trigger(bool),
    Status(StatusMessage),
    Output(String),
    Style(OutputStyle),
    Badge(String),
}

/// Surface double that records every call in order
#[derive(Default)]
pub struct RecordingSurface {
    events: Mutex<Vec<UiEvent>>,
}

impl RecordingSurface {
    pub fn events(&self) -> Vec<UiEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn last_output(&self) -> Option<String> {
        self.events().into_iter().rev().find_map(|e| match e {
            UiEvent::Output(text) => Some(text),
            _ => None,
        })
    }

    pub fn last_status(&self) -> Option<StatusMessage> {
        self.events().into_iter().rev().find_map(|e| match e {
            UiEvent::Status(status) => Some(status),
            _ => None,
        })
    }

    pub fn last_style(&self) -> Option<OutputStyle> {
        self.events().into_iter().rev().find_map(|e| match e {
            UiEvent::Style(style) => Some(style),
            _ => None,
        })
    }

    pub fn last_badge(&self) -> Option<String> {
        self.events().into_iter().rev().find_map(|e| match e {
            UiEvent::Badge(label) => Some(label),
            _ => None,
        })
    }

    pub fn alerts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                UiEvent::Alert(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    /// Loader hidden and trigger enabled as the final state of both
    pub fn is_interactive(&self) -> bool {
        let events = self.events();
        let loading = events.iter().rev().find_map(|e| match e {
            UiEvent::Loading(v) => Some(*v),
            _ => None,
        });
        let trigger = events.iter().rev().find_map(|e| match e {
            UiEvent::Trigger(v) => Some(*v),
            _ => None,
        });
        loading == Some(false) && trigger == Some(true)
    }

    fn push(&self, event: UiEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl UiSurface for RecordingSurface {
    fn alert(&self, message: &str) {
        self.push(UiEvent::Alert(message.to_string()));
    }

    fn set_loading(&self, visible: bool) {
        self.push(UiEvent::Loading(visible));
    }

    fn set_trigger_enabled(&self, enabled: bool) {
        self.push(UiEvent::Trigger(enabled));
    }

    fn set_status(&self, status: &StatusMessage) {
        self.push(UiEvent::Status(status.clone()));
    }

    fn set_output(&self, text: &str) {
        self.push(UiEvent::Output(text.to_string()));
    }

    fn set_output_style(&self, style: &OutputStyle) {
        self.push(UiEvent::Style(style.clone()));
    }

    fn set_detected_badge(&self, label: &str, _style: &BadgeStyle) {
        self.push(UiEvent::Badge(label.to_string()));
    }
}

/// Client double returning a canned result
pub struct FakeClient {
    result: Result<TranslateResponse, TranslateError>,
    requests: Mutex<Vec<TranslateRequest>>,
    calls: AtomicUsize,
}

impl FakeClient {
    pub fn succeeding(translation: &str, detected_language: &str) -> Self {
        Self::with_result(Ok(TranslateResponse {
            translation: translation.to_string(),
            detected_language: detected_language.to_string(),
            original_text: None,
        }))
    }

    pub fn failing(err: TranslateError) -> Self {
        Self::with_result(Err(err))
    }

    fn with_result(result: Result<TranslateResponse, TranslateError>) -> Self {
        Self {
            result,
            requests: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<TranslateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranslationClient for FakeClient {
    async fn translate(&self, request: &TranslateRequest) -> Result<TranslateResponse, TranslateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        self.result.clone()
    }
}

/// Client whose request never settles
pub struct HangingClient;

#[async_trait]
impl TranslationClient for HangingClient {
    async fn translate(&self, _request: &TranslateRequest) -> Result<TranslateResponse, TranslateError> {
        std::future::pending().await
    }
}
