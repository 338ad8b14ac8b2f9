#![allow(dead_code)]

//! Template Registry — the fixed catalog of resume visual templates.
//!
//! Four templates ship with the exporter (modern, minimal, professional,
//! creative). Each is a set of enumerated style knobs the renderer dispatches
//! on; the catalog is immutable after startup and `all()` hands out copies so
//! callers cannot mutate the registry through the returned value.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ExportError;

// ────────────────────────────────────────────────────────────────────────────
// Template identity
// ────────────────────────────────────────────────────────────────────────────

/// The four known template ids. String form is the lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    Modern,
    Minimal,
    Professional,
    Creative,
}

impl TemplateId {
    pub const ALL: [TemplateId; 4] = [
        TemplateId::Modern,
        TemplateId::Minimal,
        TemplateId::Professional,
        TemplateId::Creative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Modern => "modern",
            TemplateId::Minimal => "minimal",
            TemplateId::Professional => "professional",
            TemplateId::Creative => "creative",
        }
    }

    /// Parses a lowercase id string. Unknown ids return `None`.
    pub fn parse(s: &str) -> Option<TemplateId> {
        match s {
            "modern" => Some(TemplateId::Modern),
            "minimal" => Some(TemplateId::Minimal),
            "professional" => Some(TemplateId::Professional),
            "creative" => Some(TemplateId::Creative),
            _ => None,
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Style knobs
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderAlign {
    Left,
    Center,
}

impl HeaderAlign {
    pub fn css(&self) -> &'static str {
        match self {
            HeaderAlign::Left => "left",
            HeaderAlign::Center => "center",
        }
    }
}

/// Border decoration around the whole rendered block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    None,
    Left,
    Full,
    Top,
}

/// Visual treatment of section headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionStyle {
    Underline,
    Clean,
    Uppercase,
    Colored,
}

/// Header block layout kind. `Banner` is the one layout that cannot be
/// expressed as a parameter combination (gradient banner with white text);
/// the others dispatch on `header_align` and `name_weight`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderLayout {
    /// Bottom rule in the accent color under the header block.
    Ruled,
    /// No rule; whitespace only.
    Plain,
    /// Full-width gradient banner in the accent color.
    Banner,
}

// ────────────────────────────────────────────────────────────────────────────
// Template definition
// ────────────────────────────────────────────────────────────────────────────

/// A named set of visual style parameters governing resume rendering.
/// Immutable; all instances live in the static registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Template {
    pub id: TemplateId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub font_family: &'static str,
    pub header_align: HeaderAlign,
    pub accent_color: &'static str,
    pub border_style: BorderStyle,
    pub section_style: SectionStyle,
    pub header_layout: HeaderLayout,
    /// CSS font-weight of the name heading (300 for minimal, 700 otherwise).
    pub name_weight: u16,
    /// Separator joining the non-empty contact fields.
    pub contact_separator: &'static str,
}

const MODERN: Template = Template {
    id: TemplateId::Modern,
    name: "Modern",
    description: "Clean and contemporary design with accent colors and a bold header.",
    icon: "🎨",
    font_family: "'Inter', 'Segoe UI', sans-serif",
    header_align: HeaderAlign::Left,
    accent_color: "#007bff",
    border_style: BorderStyle::Left,
    section_style: SectionStyle::Underline,
    header_layout: HeaderLayout::Ruled,
    name_weight: 700,
    contact_separator: " &nbsp;|&nbsp; ",
};

const MINIMAL: Template = Template {
    id: TemplateId::Minimal,
    name: "Minimal",
    description: "Simple and elegant layout with plenty of white space.",
    icon: "✨",
    font_family: "'Helvetica Neue', Helvetica, Arial, sans-serif",
    header_align: HeaderAlign::Left,
    accent_color: "#333333",
    border_style: BorderStyle::None,
    section_style: SectionStyle::Clean,
    header_layout: HeaderLayout::Plain,
    name_weight: 300,
    contact_separator: " · ",
};

const PROFESSIONAL: Template = Template {
    id: TemplateId::Professional,
    name: "Professional",
    description: "Traditional and formal design ideal for corporate applications.",
    icon: "💼",
    font_family: "'Georgia', 'Times New Roman', serif",
    header_align: HeaderAlign::Center,
    accent_color: "#1a1a1a",
    border_style: BorderStyle::Full,
    section_style: SectionStyle::Uppercase,
    header_layout: HeaderLayout::Ruled,
    name_weight: 700,
    contact_separator: " | ",
};

const CREATIVE: Template = Template {
    id: TemplateId::Creative,
    name: "Creative",
    description: "Eye-catching design with colors and dynamic layout.",
    icon: "🚀",
    font_family: "'Poppins', 'Montserrat', sans-serif",
    header_align: HeaderAlign::Left,
    accent_color: "#6c5ce7",
    border_style: BorderStyle::Top,
    section_style: SectionStyle::Colored,
    header_layout: HeaderLayout::Banner,
    name_weight: 700,
    contact_separator: " &nbsp;•&nbsp; ",
};

static REGISTRY: [Template; 4] = [MODERN, MINIMAL, PROFESSIONAL, CREATIVE];

// ────────────────────────────────────────────────────────────────────────────
// Lookup
// ────────────────────────────────────────────────────────────────────────────

/// Returns a copy of the full catalog in registry order.
pub fn all() -> Vec<Template> {
    REGISTRY.to_vec()
}

/// Returns the registry entry for a known id. Total: every `TemplateId`
/// has exactly one entry.
pub fn get(id: TemplateId) -> &'static Template {
    match id {
        TemplateId::Modern => &REGISTRY[0],
        TemplateId::Minimal => &REGISTRY[1],
        TemplateId::Professional => &REGISTRY[2],
        TemplateId::Creative => &REGISTRY[3],
    }
}

/// String-keyed lookup for untyped callers (CLI args, config values).
pub fn lookup(id: &str) -> Result<&'static Template, ExportError> {
    TemplateId::parse(id)
        .map(get)
        .ok_or_else(|| ExportError::TemplateNotFound(id.to_string()))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
