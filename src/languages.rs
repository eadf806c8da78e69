/// Supported language codes and their display names
static LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("ur", "Urdu"),
    ("en", "English"),
    ("fr", "French"),
    ("ar", "Arabic"),
];

/// Target codes whose output is laid out right-to-left
static RTL_LANGUAGES: &[&str] = &["ur", "ar"];

pub const DEFAULT_RTL_FONT: &str = "'Courier New', monospace";
pub const INHERITED_FONT: &str = "inherit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn for_target(code: &str) -> Self {
        if is_rtl(code) {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

pub fn supported_codes() -> impl Iterator<Item = &'static str> {
    LANGUAGE_NAMES.iter().map(|(code, _)| *code)
}

pub fn is_supported(code: &str) -> bool {
    LANGUAGE_NAMES.iter().any(|(c, _)| *c == code)
}

pub fn is_rtl(code: &str) -> bool {
    RTL_LANGUAGES.iter().any(|c| *c == code)
}

/// Name from the table, or `None` for codes outside it
pub fn lookup_name(code: &str) -> Option<&'static str> {
    LANGUAGE_NAMES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Readable name for a detected language; unknown codes are shown uppercased.
pub fn display_name(code: &str) -> String {
    lookup_name(code)
        .map(str::to_string)
        .unwrap_or_else(|| code.to_uppercase())
}
