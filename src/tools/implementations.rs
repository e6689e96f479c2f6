// ABOUTME: Built-in calculator tools for the tools page
// ABOUTME: Unit converter, one-rep-max estimator, WOD generator and avatar progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronBox Fitness Tools

use ironbox_calculators::conversion::convert_field;
use ironbox_calculators::one_rep_max::parse_lift_input;
use ironbox_calculators::tier_classifier::classify_lifts;
use ironbox_calculators::{OneRepMaxEstimate, TierClassification, WodCatalog};
use ironbox_core::constants::percentages::TRAINING_PERCENTAGES;
use ironbox_core::constants::tools;
use ironbox_core::errors::{AppError, AppResult};
use ironbox_core::models::{LiftTotals, MassUnit};
use ironbox_core::permissions::ToolAccess;
use serde::Deserialize;
use serde_json::{json, Value};

use super::traits::{CalculatorTool, ToolContext};

/// Raw form field: front ends may send text or a number
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FieldInput {
    /// Numeric value
    Number(f64),
    /// Text as typed
    Text(String),
}

impl FieldInput {
    fn as_text(field: Option<&Self>) -> String {
        match field {
            Some(Self::Number(n)) => n.to_string(),
            Some(Self::Text(s)) => s.clone(),
            None => String::new(),
        }
    }
}

fn parse_params<'de, T: Deserialize<'de>>(tool: &str, params: &'de Value) -> AppResult<T> {
    T::deserialize(params)
        .map_err(|e| AppError::invalid_input(format!("invalid parameters for {tool}: {e}")))
}

#[derive(Debug, Deserialize)]
struct ConvertParams {
    value: Option<FieldInput>,
    unit: MassUnit,
}

/// Kilogram/pound converter with percentage breakdown
#[derive(Debug, Default, Clone, Copy)]
pub struct UnitConverterTool;

impl CalculatorTool for UnitConverterTool {
    fn name(&self) -> &'static str {
        tools::UNIT_CONVERTER
    }

    fn title(&self) -> &'static str {
        "Unit Converter"
    }

    fn description(&self) -> &'static str {
        "Convert between kilograms and pounds with a percentage breakdown"
    }

    fn required_access(&self) -> ToolAccess {
        ToolAccess::UNIT_CONVERTER
    }

    fn execute(&self, params: &Value, _ctx: &mut ToolContext<'_>) -> AppResult<Value> {
        let params: ConvertParams = parse_params(self.name(), params)?;
        let raw = FieldInput::as_text(params.value.as_ref());
        let conversion = convert_field(&raw, params.unit)?;
        Ok(serde_json::to_value(conversion)?)
    }
}

#[derive(Debug, Deserialize)]
struct OneRepMaxParams {
    weight: Option<FieldInput>,
    reps: Option<FieldInput>,
}

/// Epley one-rep-max estimator
#[derive(Debug, Clone)]
pub struct OneRepMaxTool {
    percents: Vec<u8>,
}

impl OneRepMaxTool {
    /// Estimator tabulating over `percents`
    #[must_use]
    pub fn new(percents: Vec<u8>) -> Self {
        Self { percents }
    }
}

impl Default for OneRepMaxTool {
    fn default() -> Self {
        Self::new(TRAINING_PERCENTAGES.to_vec())
    }
}

impl CalculatorTool for OneRepMaxTool {
    fn name(&self) -> &'static str {
        tools::ONE_REP_MAX
    }

    fn title(&self) -> &'static str {
        "1RM Calculator"
    }

    fn description(&self) -> &'static str {
        "Estimate a one-rep max from weight and reps (Epley)"
    }

    fn required_access(&self) -> ToolAccess {
        ToolAccess::ONE_REP_MAX
    }

    fn execute(&self, params: &Value, _ctx: &mut ToolContext<'_>) -> AppResult<Value> {
        let params: OneRepMaxParams = parse_params(self.name(), params)?;
        let estimate = parse_lift_input(
            &FieldInput::as_text(params.weight.as_ref()),
            &FieldInput::as_text(params.reps.as_ref()),
        )
        .and_then(|entry| OneRepMaxEstimate::new(entry, &self.percents));
        Ok(serde_json::to_value(estimate)?)
    }
}

/// Random workout generator
#[derive(Debug, Clone)]
pub struct WodGeneratorTool {
    catalog: WodCatalog,
}

impl WodGeneratorTool {
    /// Generator drawing from `catalog`
    #[must_use]
    pub const fn new(catalog: WodCatalog) -> Self {
        Self { catalog }
    }
}

impl CalculatorTool for WodGeneratorTool {
    fn name(&self) -> &'static str {
        tools::WOD_GENERATOR
    }

    fn title(&self) -> &'static str {
        "WOD Generator"
    }

    fn description(&self) -> &'static str {
        "Pick a random workout of the day"
    }

    fn required_access(&self) -> ToolAccess {
        ToolAccess::WOD_GENERATOR
    }

    fn execute(&self, _params: &Value, ctx: &mut ToolContext<'_>) -> AppResult<Value> {
        let template = self.catalog.pick_random(&mut *ctx.rng);
        Ok(json!({
            "title": template.title(),
            "template": template,
        }))
    }
}

#[derive(Debug, Deserialize)]
struct AvatarParams {
    #[serde(default)]
    lifts: LiftTotals,
}

/// Avatar tier and progress toward the next tier
#[derive(Debug, Default, Clone, Copy)]
pub struct AvatarProgressTool;

impl CalculatorTool for AvatarProgressTool {
    fn name(&self) -> &'static str {
        tools::AVATAR_PROGRESS
    }

    fn title(&self) -> &'static str {
        "Avatar Progress"
    }

    fn description(&self) -> &'static str {
        "Classify your lift total into an avatar tier"
    }

    fn required_access(&self) -> ToolAccess {
        ToolAccess::AVATAR_PROGRESS
    }

    fn execute(&self, params: &Value, _ctx: &mut ToolContext<'_>) -> AppResult<Value> {
        let params: AvatarParams = parse_params(self.name(), params)?;
        let progress = classify_lifts(&params.lifts)?;
        Ok(json!({
            "classification": TierClassification::from(progress.tier),
            "progress": progress,
        }))
    }
}
