// ABOUTME: Ordered registry of calculator tools with role-based filtering and dispatch
// ABOUTME: Lists visible tools for a role and rejects calls to tools the role cannot see
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronBox Fitness Tools

//! # Tool Registry
//!
//! The registry is built once and then used immutably. Tools keep their
//! registration order, which is also the order they appear on the page.

use std::sync::Arc;

use ironbox_calculators::WodCatalog;
use ironbox_core::errors::{AppError, AppResult};
use ironbox_core::permissions::{ToolAccess, UserRole};
use rand::RngCore;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::implementations::{
    AvatarProgressTool, OneRepMaxTool, UnitConverterTool, WodGeneratorTool,
};
use super::traits::{CalculatorTool, ToolContext, ToolDescriptor};

/// Registry of calculator tools
#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn CalculatorTool>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the four built-in tools, drawing workouts from `catalog`
    #[must_use]
    pub fn with_builtin_tools(catalog: WodCatalog) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(UnitConverterTool));
        registry.register(Arc::new(OneRepMaxTool::default()));
        registry.register(Arc::new(WodGeneratorTool::new(catalog)));
        registry.register(Arc::new(AvatarProgressTool));
        registry
    }

    /// Register a tool
    ///
    /// # Returns
    ///
    /// `true` if the tool was registered, `false` if a tool with the same name exists
    pub fn register(&mut self, tool: Arc<dyn CalculatorTool>) -> bool {
        if self.get(tool.name()).is_some() {
            warn!(tool = tool.name(), "tool is already registered, skipping");
            return false;
        }
        debug!(
            tool = tool.name(),
            access = %tool.required_access().describe(),
            "registering tool"
        );
        self.tools.push(tool);
        true
    }

    /// Look up a tool by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn CalculatorTool>> {
        self.tools.iter().find(|tool| tool.name() == name)
    }

    /// Number of registered tools
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether no tools are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Combined access flags of every registered tool
    #[must_use]
    pub fn registered_access(&self) -> ToolAccess {
        self.tools
            .iter()
            .fold(ToolAccess::empty(), |acc, tool| acc | tool.required_access())
    }

    /// Tools visible to `role`, in page order
    #[must_use]
    pub fn list_for_role(&self, role: UserRole) -> Vec<ToolDescriptor> {
        let visible: Vec<ToolDescriptor> = self
            .tools
            .iter()
            .filter(|tool| role.can_access(tool.required_access()))
            .map(|tool| tool.descriptor())
            .collect();
        info!(
            role = %role,
            visible = visible.len(),
            total = self.tools.len(),
            "composed tools page"
        );
        visible
    }

    /// Run tool `name` for `role`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown tool, `PermissionDenied` when
    /// `role` cannot see it, and the tool's own errors otherwise.
    pub fn execute(
        &self,
        name: &str,
        role: UserRole,
        params: &Value,
        rng: &mut dyn RngCore,
    ) -> AppResult<Value> {
        let tool = self
            .get(name)
            .ok_or_else(|| AppError::not_found(format!("tool '{name}'")))?;
        if !role.can_access(tool.required_access()) {
            warn!(tool = name, role = %role, "role cannot access tool");
            return Err(AppError::permission_denied(format!(
                "role '{role}' cannot use '{name}'"
            )));
        }
        let mut ctx = ToolContext::new(rng);
        let result = tool.execute(params, &mut ctx);
        match &result {
            Err(e) if e.code.is_validation() => {
                debug!(tool = name, error = %e, "tool rejected input");
            }
            Err(e) => warn!(tool = name, error = %e, "tool failed"),
            Ok(_) => {}
        }
        result
    }
}
