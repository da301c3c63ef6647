use std::fmt::Write;

use serde::Serialize;

use crate::domain::{
    AppError, Audience, Length, Purpose, RequirementFlags, RequirementKey, SubjectStyle, Tone,
};

/// Output format for the catalog command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Text,
    Json,
}

impl CatalogFormat {
    /// Parse a format name.
    pub fn from_input(input: &str) -> Option<CatalogFormat> {
        match input.trim().to_ascii_lowercase().as_str() {
            "text" => Some(CatalogFormat::Text),
            "json" => Some(CatalogFormat::Json),
            _ => None,
        }
    }
}

/// Machine-readable view of every option set.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Catalog {
    purposes: Vec<Entry>,
    audiences: Vec<Entry>,
    tones: Vec<Entry>,
    lengths: Vec<Entry>,
    subject_styles: Vec<Entry>,
    requirements: Vec<RequirementEntry>,
}

#[derive(Serialize)]
struct Entry {
    key: &'static str,
    label: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RequirementEntry {
    key: &'static str,
    label: &'static str,
    default_on: bool,
}

/// Execute the catalog command, rendering the option sets in the requested
/// format.
pub fn execute(format: CatalogFormat) -> Result<String, AppError> {
    let catalog = collect();
    match format {
        CatalogFormat::Json => Ok(serde_json::to_string_pretty(&catalog)?),
        CatalogFormat::Text => Ok(render_text(&catalog)),
    }
}

fn collect() -> Catalog {
    let defaults = RequirementFlags::default();
    Catalog {
        purposes: Purpose::ALL.iter().map(|p| Entry { key: p.key(), label: p.label() }).collect(),
        audiences: Audience::ALL.iter().map(|a| Entry { key: a.key(), label: a.label() }).collect(),
        tones: Tone::ALL.iter().map(|t| Entry { key: t.key(), label: t.label() }).collect(),
        lengths: Length::ALL.iter().map(|l| Entry { key: l.key(), label: l.label() }).collect(),
        subject_styles: SubjectStyle::ALL
            .iter()
            .map(|s| Entry { key: s.key(), label: s.label() })
            .collect(),
        requirements: RequirementKey::DISPLAY_ORDER
            .iter()
            .map(|k| RequirementEntry {
                key: k.key(),
                label: k.checklist_label(),
                default_on: defaults.is_on(*k),
            })
            .collect(),
    }
}

fn render_text(catalog: &Catalog) -> String {
    let mut out = String::new();
    write_section(&mut out, "purpose (--purpose)", &catalog.purposes);
    write_section(&mut out, "audience (--audience)", &catalog.audiences);
    write_section(&mut out, "tone (--tone)", &catalog.tones);
    write_section(&mut out, "length (--length)", &catalog.lengths);
    write_section(&mut out, "subject style (--subject-style)", &catalog.subject_styles);

    let _ = writeln!(out, "requirements (--off)");
    for requirement in &catalog.requirements {
        let state = if requirement.default_on { "on" } else { "off" };
        let _ = writeln!(out, "  {:<20} {} (default {})", requirement.key, requirement.label, state);
    }
    out
}

fn write_section(out: &mut String, title: &str, entries: &[Entry]) {
    let _ = writeln!(out, "{title}");
    for entry in entries {
        let _ = writeln!(out, "  {:<20} {}", entry.key, entry.label);
    }
    let _ = writeln!(out);
}
