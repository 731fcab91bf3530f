//! Static card template catalogue.

use serde::{Deserialize, Serialize};

/// A selectable business-card design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    pub color: String,
}

const TEMPLATES: &[(&str, &str, &str, &str)] = &[
    (
        "classic-blue",
        "Classic Blue",
        "RFID-enabled card with campus ID encoding and classic university branding.",
        "#1E90FF",
    ),
    (
        "modern-red",
        "Modern Red",
        "Minimal, modern layout. NFC chip supports quick contact & profile tap.",
        "#FF4500",
    ),
    (
        "elegant-green",
        "Elegant Green",
        "Eco-forward design. Printed on recycled stock; RFID for secure lab access.",
        "#2E8B57",
    ),
    (
        "sunshine-yellow",
        "Sunshine Yellow",
        "High-visibility theme. NFC links to personal profile & timetable.",
        "#FFD700",
    ),
    (
        "royal-purple",
        "Royal Purple",
        "Premium finish for staff/faculty. RFID integrates with campus services.",
        "#8A2BE2",
    ),
];

/// The full catalogue, in display order.
#[must_use]
pub fn templates() -> Vec<Template> {
    TEMPLATES
        .iter()
        .map(|(id, name, description, color)| Template {
            id: (*id).to_owned(),
            name: (*name).to_owned(),
            description: (*description).to_owned(),
            color: (*color).to_owned(),
        })
        .collect()
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
