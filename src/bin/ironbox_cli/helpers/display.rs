// ABOUTME: Output formatting helpers for ironbox-cli
// ABOUTME: Renders conversions, 1RM tables, workouts, tiers and tool listings as plain text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronBox Fitness Tools

use ironbox::errors::{AppError, ErrorResponse};
use ironbox::permissions::UserRole;
use ironbox::tools::ToolDescriptor;
use ironbox_calculators::{OneRepMaxEstimate, TierClassification, TierProgress, UnitConversion};
use ironbox_core::models::WodTemplate;

/// Display a unit conversion and its breakdown
pub fn display_conversion(conversion: Option<&UnitConversion>) {
    let Some(conversion) = conversion else {
        println!("(no value entered)");
        return;
    };
    let from = conversion.source.unit();
    let to = conversion.converted.unit();
    println!("{} = {}", conversion.source, conversion.converted);
    println!("{}", "-".repeat(32));
    println!("{:>5}  {:>10}  {:>10}", "%", from.symbol(), to.symbol());
    for row in &conversion.breakdown {
        println!(
            "{:>4}%  {:>10.2}  {:>10.2}",
            row.percent, row.value, row.converted
        );
    }
}

/// Display a one-rep-max estimate and its working-weight table
pub fn display_one_rep_max(estimate: Option<&OneRepMaxEstimate>) {
    let Some(estimate) = estimate else {
        println!("(enter a positive weight and rep count)");
        return;
    };
    println!(
        "{} x {} -> estimated 1RM {}",
        estimate.entry.weight(),
        estimate.entry.reps(),
        estimate.one_rep_max
    );
    println!("{}", "-".repeat(20));
    for row in &estimate.table {
        println!("{:>4}%  {:>8}", row.percent, row.value);
    }
}

/// Display a workout template
pub fn display_wod(template: &WodTemplate) {
    println!("{}", template.title());
    println!("{}", "=".repeat(template.title().len()));
    for movement in &template.movements {
        println!("• {movement}");
    }
}

/// Display an avatar tier and the distance to the next one
pub fn display_tier(classification: &TierClassification, progress: &TierProgress) {
    println!(
        "Total {:.1} kg: Tier {} {} ({})",
        progress.total_kg, classification.tier, classification.name, classification.color
    );
    match (progress.next_tier, progress.remaining_kg) {
        (Some(next), Some(remaining)) => println!(
            "{remaining:.1} kg to {next} ({:.0}% of current band)",
            progress.band_percent
        ),
        _ => println!("Top tier reached"),
    }
}

/// Display the tools visible to a role
pub fn display_tools(role: UserRole, tools: &[ToolDescriptor]) {
    println!("Tools for {role}:");
    if tools.is_empty() {
        println!("   (none)");
    }
    for tool in tools {
        println!("   {:<16} {} - {}", tool.name, tool.title, tool.description);
    }
}

/// Wrap a command failure in the JSON error shape
///
/// Errors raised by the tools keep their code; anything else is reported as
/// an internal error.
pub fn error_response(error: anyhow::Error) -> ErrorResponse {
    match error.downcast::<AppError>() {
        Ok(app_error) => ErrorResponse::from(app_error),
        Err(other) => ErrorResponse::from(AppError::internal(format!("{other:#}"))),
    }
}

/// Report a command failure on stderr, or as JSON on stdout in `--json` mode
pub fn display_error(error: anyhow::Error, json: bool) {
    if !json {
        eprintln!("Error: {error:#}");
        return;
    }
    match serde_json::to_string(&error_response(error)) {
        Ok(body) => println!("{body}"),
        Err(e) => eprintln!("Error: {e}"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ironbox::errors::ErrorCode;
    use ironbox_calculators::parse_mass_input;
    use serde_json::Value;

    #[test]
    fn test_tool_error_keeps_its_code() {
        let error = anyhow::Error::from(parse_mass_input("abc").unwrap_err());
        let body = serde_json::to_value(error_response(error)).unwrap();
        assert_eq!(body["error"]["code"], Value::from("INVALID_FORMAT"));
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("'abc' is not a number"));
    }

    #[test]
    fn test_other_errors_are_internal() {
        let response = error_response(anyhow::anyhow!("stdout closed"));
        assert_eq!(response.error.code, ErrorCode::InternalError);
        assert_eq!(response.error.message, "stdout closed");
    }
}
