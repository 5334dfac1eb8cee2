use serde::Serialize;

use crate::domain::services::{ModifierReport, RollDialogDefaults};

/// Roll dialog defaults as returned to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollDialogDefaultsDto {
    pub roll_name: String,
    pub attribute_name: Option<String>,
    pub item_id: Option<String>,
    pub base_default: i32,
    pub skill_default: i32,
    pub gear_default: i32,
    pub modifier_default: i32,
    pub artifact_default: i32,
    pub damage: Option<i32>,
    pub applied_modifiers: Option<ModifierReportDto>,
    pub skill_item_id: Option<String>,
}

impl From<RollDialogDefaults> for RollDialogDefaultsDto {
    fn from(value: RollDialogDefaults) -> Self {
        Self {
            roll_name: value.roll_name,
            attribute_name: value.attribute_name.map(|a| a.key().to_string()),
            item_id: value.item_id.map(|id| id.to_string()),
            base_default: value.base_default,
            skill_default: value.skill_default,
            gear_default: value.gear_default,
            modifier_default: value.modifier_default,
            artifact_default: value.artifact_default,
            damage: value.damage,
            applied_modifiers: value.applied_modifiers.map(ModifierReportDto::from),
            skill_item_id: value.skill_item_id.map(|id| id.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModifierReportDto {
    pub attribute_total: i32,
    pub skill_total: i32,
    pub gear_total: i32,
    pub summary: String,
    pub attribute_lines: Vec<String>,
    pub skill_lines: Vec<String>,
    pub gear_lines: Vec<String>,
    /// Pre-rendered tooltip markup
    pub html: String,
}

impl From<ModifierReport> for ModifierReportDto {
    fn from(value: ModifierReport) -> Self {
        let html = value.to_html();
        Self {
            attribute_total: value.attribute_total,
            skill_total: value.skill_total,
            gear_total: value.gear_total,
            summary: value.summary,
            attribute_lines: value.attribute_lines,
            skill_lines: value.skill_lines,
            gear_lines: value.gear_lines,
            html,
        }
    }
}
