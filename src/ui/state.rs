use crate::languages::{TextDirection, INHERITED_FONT};

/// Lifecycle of the translate form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusTone {
    #[default]
    Neutral,
    Success,
    Error,
}

impl StatusTone {
    pub fn color(&self) -> &'static str {
        match self {
            StatusTone::Neutral => "inherit",
            StatusTone::Success => "green",
            StatusTone::Error => "red",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusMessage {
    pub text: String,
    pub tone: StatusTone,
}

impl StatusMessage {
    pub fn cleared() -> Self {
        Self::default()
    }

    pub fn success() -> Self {
        Self {
            text: "Success".to_string(),
            tone: StatusTone::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: StatusTone::Error,
        }
    }
}

/// Direction and font applied to the output area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputStyle {
    pub direction: TextDirection,
    pub font_family: String,
}

impl OutputStyle {
    /// RTL targets get `rtl_font`; everything else inherits the page font.
    pub fn for_target(target_lang: &str, rtl_font: &str) -> Self {
        match TextDirection::for_target(target_lang) {
            TextDirection::Rtl => Self {
                direction: TextDirection::Rtl,
                font_family: rtl_font.to_string(),
            },
            TextDirection::Ltr => Self {
                direction: TextDirection::Ltr,
                font_family: INHERITED_FONT.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeStyle {
    pub background: &'static str,
    pub foreground: &'static str,
}

impl BadgeStyle {
    pub const DETECTED: BadgeStyle = BadgeStyle {
        background: "#d1fae5",
        foreground: "#065f46",
    };
}

/// What a successful submit rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationOutcome {
    pub translation: String,
    pub detected_language: String,
    pub badge_label: String,
    pub style: OutputStyle,
}
