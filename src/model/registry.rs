//! The fixed category registry.
//!
//! Categories are a closed enumeration: a static table of id, display name,
//! and hex color. They are not user-extensible, and lookup by an unknown id
//! falls back to a default "Uncategorized" entry instead of failing, so
//! dangling ids in stored data never break anything downstream.

use serde::Serialize;

/// A single category definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDef {
    /// Stable identifier referenced by tasks and links.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Hex color used for swatches and charts.
    pub color: &'static str,
}

/// All known categories, in display order.
pub const CATEGORIES: [CategoryDef; 7] = [
    CategoryDef { id: "self-help", name: "Self Help", color: "#8b5cf6" },
    CategoryDef { id: "finance", name: "Finance", color: "#10b981" },
    CategoryDef { id: "tutorial", name: "Tutorial", color: "#3b82f6" },
    CategoryDef { id: "videos", name: "Videos", color: "#ef4444" },
    CategoryDef { id: "trips", name: "Trips", color: "#f59e0b" },
    CategoryDef { id: "work", name: "Work", color: "#6366f1" },
    CategoryDef { id: "personal", name: "Personal", color: "#ec4899" },
];

/// Fallback entry returned for unknown category ids.
pub const UNCATEGORIZED: CategoryDef = CategoryDef {
    id: "uncategorized",
    name: "Uncategorized",
    color: "#94a3b8",
};

/// Look up a category by id, falling back to [`UNCATEGORIZED`].
#[must_use]
pub fn category_by_id(id: &str) -> &'static CategoryDef {
    CATEGORIES
        .iter()
        .find(|cat| cat.id == id)
        .unwrap_or(&UNCATEGORIZED)
}

/// Whether the id names one of the fixed categories.
#[must_use]
pub fn is_known_category(id: &str) -> bool {
    CATEGORIES.iter().any(|cat| cat.id == id)
}

/// Decode a `#rrggbb` hex color into RGB components.
///
/// Returns `None` for anything that isn't a 7-character hex color.
#[must_use]
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
