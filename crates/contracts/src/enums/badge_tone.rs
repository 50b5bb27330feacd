use serde::{Deserialize, Serialize};

/// Colour family of a status badge.
///
/// Every status enum in this crate maps onto one tone; the frontend turns
/// the tone into a concrete badge colour and CSS modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BadgeTone {
    Success,
    Info,
    Warning,
    Primary,
    Muted,
}

impl BadgeTone {
    /// CSS modifier appended to `badge--`
    pub fn css_modifier(&self) -> &'static str {
        match self {
            BadgeTone::Success => "success",
            BadgeTone::Info => "info",
            BadgeTone::Warning => "warning",
            BadgeTone::Primary => "primary",
            BadgeTone::Muted => "muted",
        }
    }
}
