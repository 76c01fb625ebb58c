//! CLI presentation: text and JSON formatters for drafts, narratives, and files.

use crate::client::FileInfo;
use crate::context::IncludeType;
use crate::error::ApiError;
use crate::narrative::{Narrative, NarrativeBuilder, NarrativeTab};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::Serialize;

pub fn format_include_type(include_type: &IncludeType) -> String {
    match include_type {
        IncludeType::Full => "full".to_string(),
        IncludeType::Section { section } => format!("section \"{}\"", section),
        IncludeType::Lines { start, end } => format!("lines {}-{}", start, end),
    }
}

pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ApiError::InvalidResponse(format!("Failed to render JSON: {}", e)))
}

fn section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Draft summary. `Pos` is the display position, `Index` the storage index
/// that `draft move` and `draft remove` take.
pub fn format_draft_text(builder: &NarrativeBuilder) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", section_heading("Draft")));

    let name = if builder.name.trim().is_empty() {
        "(unnamed)"
    } else {
        builder.name.as_str()
    };
    out.push_str(&format!("  Name: {}\n", name));
    if !builder.description.trim().is_empty() {
        out.push_str(&format!("  Description: {}\n", builder.description));
    }
    if let Some(id) = builder.current_id {
        out.push_str(&format!("  Editing: {}\n", id));
    }
    out.push_str(&format!(
        "  Template: {}\n\n",
        if builder.is_template { "yes" } else { "no" }
    ));

    if builder.contexts().is_empty() {
        out.push_str("No context entries. Add files with `weaver draft add <path>`.");
        return out;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Pos", "Index", "Path", "Include"]);
    for (storage, entry) in builder.contexts().sorted() {
        table.add_row(vec![
            entry.order.to_string(),
            storage.get().to_string(),
            entry.path.clone(),
            format_include_type(&entry.include_type),
        ]);
    }
    out.push_str(&table.to_string());
    out
}

pub fn format_narrative_list_text(narratives: &[&Narrative], tab: NarrativeTab) -> String {
    if narratives.is_empty() {
        return match tab {
            NarrativeTab::Normal => "No saved narratives.".to_string(),
            NarrativeTab::Template => "No saved templates.".to_string(),
        };
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Name", "ID", "Contexts", "Description"]);
    for narrative in narratives {
        let name = if narrative.is_template {
            format!("{} {}", narrative.name, "[template]".magenta())
        } else {
            narrative.name.clone()
        };
        table.add_row(vec![
            name,
            narrative.id.to_string(),
            narrative.contexts.len().to_string(),
            narrative.description.clone().unwrap_or_default(),
        ]);
    }
    table.to_string()
}

pub fn format_narrative_text(narrative: &Narrative) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", section_heading(&narrative.name)));
    out.push_str(&format!("  ID: {}\n", narrative.id));
    if let Some(description) = &narrative.description {
        out.push_str(&format!("  Description: {}\n", description));
    }
    out.push_str(&format!(
        "  Template: {}\n",
        if narrative.is_template { "yes" } else { "no" }
    ));
    out.push_str(&format!("  Updated: {}\n\n", narrative.updated_at.to_rfc3339()));

    let mut contexts: Vec<_> = narrative.contexts.iter().collect();
    contexts.sort_by_key(|entry| entry.order);
    for entry in contexts {
        out.push_str(&format!(
            "  {}. {} ({})\n",
            entry.order + 1,
            entry.path,
            format_include_type(&entry.include_type)
        ));
    }
    out
}

/// Files listing; directories are skipped since only files can be added.
pub fn format_files_text(files: &[FileInfo]) -> String {
    let mut selectable: Vec<&FileInfo> = files.iter().filter(|f| !f.is_directory).collect();
    if selectable.is_empty() {
        return "No files available.".to_string();
    }
    selectable.sort_by(|a, b| a.path.cmp(&b.path));

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Path", "Preview"]);
    for file in selectable {
        table.add_row(vec![file.path.clone(), file.preview.clone()]);
    }
    table.to_string()
}
