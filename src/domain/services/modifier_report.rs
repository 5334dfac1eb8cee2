//! Applied-modifier report shown beside the roll dialog

use std::fmt;

use crate::domain::value_objects::GameContext;

use super::dice_pool::DiceTotals;
use super::modifier_aggregator::Contribution;

/// Category headings for the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLabels {
    pub header: String,
    pub attribute: String,
    pub skill: String,
    pub gear: String,
}

impl ReportLabels {
    pub fn from_context(context: &GameContext) -> Self {
        Self {
            header: context.localize("MYZ.APPLIED_MODIFIERS"),
            attribute: context.localize("MYZ.ATTRIBUTE"),
            skill: context.localize("MYZ.SKILL"),
            gear: context.localize("MYZ.GEAR"),
        }
    }
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self {
            header: "Applied Modifiers".to_string(),
            attribute: "Attribute".to_string(),
            skill: "Skill".to_string(),
            gear: "Gear".to_string(),
        }
    }
}

/// Per-category totals and one line per contributing item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifierReport {
    pub attribute_total: i32,
    pub skill_total: i32,
    pub gear_total: i32,
    pub summary: String,
    pub attribute_lines: Vec<String>,
    pub skill_lines: Vec<String>,
    pub gear_lines: Vec<String>,
}

impl ModifierReport {
    /// Markup in the shape the roll dialog tooltip expects
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for line in self.summary.lines() {
            html.push_str(&format!("<p>{}</p>", escape(line)));
        }
        for line in self
            .attribute_lines
            .iter()
            .chain(&self.skill_lines)
            .chain(&self.gear_lines)
        {
            html.push_str(&format!("<p style='font-size:0.75rem'>{}</p>", escape(line)));
        }
        html
    }
}

impl fmt::Display for ModifierReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary)
    }
}

pub fn format_report(totals: &DiceTotals, labels: &ReportLabels) -> ModifierReport {
    let (attribute_total, attribute_lines) = render(&totals.attribute_modifiers);
    let (skill_total, skill_lines) = render(&totals.skill_modifiers);
    let (gear_total, gear_lines) = render(&totals.gear_modifiers);

    let summary = format!(
        "{}\n{}: {}\n{}: {}\n{}: {}",
        labels.header,
        labels.attribute,
        attribute_total,
        labels.skill,
        skill_total,
        labels.gear,
        gear_total
    );

    ModifierReport {
        attribute_total,
        skill_total,
        gear_total,
        summary,
        attribute_lines,
        skill_lines,
        gear_lines,
    }
}

fn render(contributions: &[Contribution]) -> (i32, Vec<String>) {
    let total = contributions
        .iter()
        .fold(0i32, |acc, c| acc.saturating_add(c.amount));
    let lines = contributions
        .iter()
        .map(|c| format!("{}: {}", c.source_name, c.amount))
        .collect();
    (total, lines)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\'', "&#39;")
        .replace('"', "&quot;")
}
