use crate::format::{format_percent, NumberLocale};
use eframe::egui::{self, Color32, RichText};

/// Series whose values are already percentages and are shown verbatim with
/// a `%` suffix instead of being grouped.
pub const PERCENT_SERIES: [&str; 2] = ["CTR", "Lift"];

/// One data point under the cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipEntry {
    pub name: String,
    pub value: f64,
    pub color: Color32,
}

/// Everything a chart knows about the hovered category.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TooltipPayload {
    pub active: bool,
    pub label: String,
    pub entries: Vec<TooltipEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipLine {
    pub text: String,
    pub color: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub title: String,
    pub lines: Vec<TooltipLine>,
}

pub fn format_entry_value(name: &str, value: f64, locale: &NumberLocale) -> String {
    if PERCENT_SERIES.contains(&name) {
        format_percent(value)
    } else {
        locale.format_number(value)
    }
}

/// Turn a hover payload into displayable lines.
///
/// Returns `None` when nothing is hovered or the payload carries no entries.
pub fn format_tooltip(
    payload: Option<&TooltipPayload>,
    locale: &NumberLocale,
) -> Option<TooltipContent> {
    let payload = payload?;
    if !payload.active || payload.entries.is_empty() {
        return None;
    }
    let lines = payload
        .entries
        .iter()
        .map(|entry| TooltipLine {
            text: format!(
                "{}: {}",
                entry.name,
                format_entry_value(&entry.name, entry.value, locale)
            ),
            color: entry.color,
        })
        .collect();
    Some(TooltipContent {
        title: payload.label.clone(),
        lines,
    })
}

pub fn tooltip_ui(ui: &mut egui::Ui, content: &TooltipContent) {
    ui.label(RichText::new(&content.title).strong());
    for line in &content.lines {
        ui.label(RichText::new(&line.text).small().color(line.color));
    }
}
