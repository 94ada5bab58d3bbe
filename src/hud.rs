//! DOM-facing HUD readouts
//!
//! Games describe what the page should show; the browser driver applies
//! the items to elements by id. Native builds just log them.

use serde::Serialize;

/// One HUD side effect, keyed by DOM element id
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HudItem {
    /// Replace the element's text content
    Text { id: &'static str, text: String },
    /// Set the element's width to `fraction` of its container (health bars)
    Meter { id: &'static str, fraction: f32 },
    /// Toggle the element's `hidden` class
    Visible { id: &'static str, visible: bool },
}

impl HudItem {
    pub fn text(id: &'static str, text: impl ToString) -> Self {
        HudItem::Text {
            id,
            text: text.to_string(),
        }
    }

    pub fn meter(id: &'static str, fraction: f32) -> Self {
        HudItem::Meter {
            id,
            fraction: fraction.clamp(0.0, 1.0),
        }
    }

    pub fn visible(id: &'static str, visible: bool) -> Self {
        HudItem::Visible { id, visible }
    }

    pub fn id(&self) -> &'static str {
        match self {
            HudItem::Text { id, .. } | HudItem::Meter { id, .. } | HudItem::Visible { id, .. } => id,
        }
    }
}

/// Find the text shown for `id`, if any
pub fn text_of<'a>(items: &'a [HudItem], id: &str) -> Option<&'a str> {
    items.iter().find_map(|item| match item {
        HudItem::Text { id: item_id, text } if *item_id == id => Some(text.as_str()),
        _ => None,
    })
}
