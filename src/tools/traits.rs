// ABOUTME: Defines the CalculatorTool trait and the per-call execution context
// ABOUTME: Tools declare the access flag they need and execute on JSON parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronBox Fitness Tools

use ironbox_core::errors::AppResult;
use ironbox_core::permissions::ToolAccess;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Per-call state handed to a tool
///
/// Role checks happen in the registry before a tool runs.
pub struct ToolContext<'a> {
    /// Random source for tools that pick at random
    pub rng: &'a mut dyn RngCore,
}

impl<'a> ToolContext<'a> {
    /// Build a context around `rng`
    pub fn new(rng: &'a mut dyn RngCore) -> Self {
        Self { rng }
    }
}

/// Listing entry for the tools page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Stable identifier
    pub name: String,
    /// Display title
    pub title: String,
    /// One-line description
    pub description: String,
}

/// A calculator that can be shown on the tools page
pub trait CalculatorTool: Send + Sync {
    /// Stable identifier, e.g. `one_rep_max`
    fn name(&self) -> &'static str;

    /// Display title
    fn title(&self) -> &'static str;

    /// One-line description
    fn description(&self) -> &'static str;

    /// Access flag a role needs to see this tool
    fn required_access(&self) -> ToolAccess;

    /// Run the calculator on JSON parameters
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput`/`SerializationError` for parameters the tool
    /// cannot use.
    fn execute(&self, params: &Value, ctx: &mut ToolContext<'_>) -> AppResult<Value>;

    /// Listing entry for this tool
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: self.name().to_owned(),
            title: self.title().to_owned(),
            description: self.description().to_owned(),
        }
    }
}
