// ABOUTME: Command handlers for ironbox-cli
// ABOUTME: Build tool parameters, dispatch through the role-gated registry, and print results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronBox Fitness Tools

use anyhow::Result;
use ironbox::constants::tools;
use ironbox::permissions::UserRole;
use ironbox::tools::ToolRegistry;
use ironbox_calculators::{OneRepMaxEstimate, TierClassification, TierProgress, UnitConversion};
use ironbox_core::models::{MassUnit, WodTemplate};
use rand::RngCore;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::helpers::display;

/// State shared by every command
pub struct CommandContext {
    registry: ToolRegistry,
    role: UserRole,
    json: bool,
    rng: Box<dyn RngCore + Send>,
}

impl CommandContext {
    pub fn new(
        registry: ToolRegistry,
        role: UserRole,
        json: bool,
        rng: Box<dyn RngCore + Send>,
    ) -> Self {
        Self {
            registry,
            role,
            json,
            rng,
        }
    }

    fn run(&mut self, tool: &str, params: &Value) -> Result<Value> {
        Ok(self
            .registry
            .execute(tool, self.role, params, &mut *self.rng)?)
    }

    fn print_json(value: &Value) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

#[derive(Deserialize)]
struct WodResult {
    template: WodTemplate,
}

#[derive(Deserialize)]
struct AvatarResult {
    classification: TierClassification,
    progress: TierProgress,
}

/// Convert a mass between kilograms and pounds
pub fn convert(ctx: &mut CommandContext, value: &str, unit: MassUnit) -> Result<()> {
    let result = ctx.run(tools::UNIT_CONVERTER, &json!({ "value": value, "unit": unit }))?;
    if ctx.json {
        return CommandContext::print_json(&result);
    }
    let conversion: Option<UnitConversion> = serde_json::from_value(result)?;
    display::display_conversion(conversion.as_ref());
    Ok(())
}

/// Estimate a one-rep max
pub fn one_rep_max(ctx: &mut CommandContext, weight: &str, reps: &str) -> Result<()> {
    let result = ctx.run(
        tools::ONE_REP_MAX,
        &json!({ "weight": weight, "reps": reps }),
    )?;
    if ctx.json {
        return CommandContext::print_json(&result);
    }
    let estimate: Option<OneRepMaxEstimate> = serde_json::from_value(result)?;
    display::display_one_rep_max(estimate.as_ref());
    Ok(())
}

/// Pick a random workout
pub fn wod(ctx: &mut CommandContext) -> Result<()> {
    let result = ctx.run(tools::WOD_GENERATOR, &json!({}))?;
    if ctx.json {
        return CommandContext::print_json(&result);
    }
    let picked: WodResult = serde_json::from_value(result)?;
    display::display_wod(&picked.template);
    Ok(())
}

/// Classify a four-lift total
pub fn tier(
    ctx: &mut CommandContext,
    squat: f64,
    bench: f64,
    deadlift: f64,
    press: f64,
) -> Result<()> {
    let params = json!({
        "lifts": {
            "back_squat": squat,
            "bench_press": bench,
            "deadlift": deadlift,
            "overhead_press": press,
        }
    });
    let result = ctx.run(tools::AVATAR_PROGRESS, &params)?;
    if ctx.json {
        return CommandContext::print_json(&result);
    }
    let avatar: AvatarResult = serde_json::from_value(result)?;
    display::display_tier(&avatar.classification, &avatar.progress);
    Ok(())
}

/// List the tools the current role can see
pub fn list_tools(ctx: &CommandContext) -> Result<()> {
    let visible = ctx.registry.list_for_role(ctx.role);
    if ctx.json {
        return CommandContext::print_json(&serde_json::to_value(&visible)?);
    }
    display::display_tools(ctx.role, &visible);
    Ok(())
}
