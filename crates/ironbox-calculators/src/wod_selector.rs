// ABOUTME: Uniform random workout-of-the-day selection from an injected catalog
// ABOUTME: Catalog is fixed after construction; the random source is supplied by the caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronBox Fitness Tools

use std::sync::Arc;

use ironbox_core::errors::{AppError, AppResult};
use ironbox_core::models::{WodKind, WodTemplate};
use rand::Rng;
use tracing::debug;

/// Ordered, immutable set of workout templates
///
/// Cloning is cheap: clones share the same template storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WodCatalog {
    templates: Arc<[WodTemplate]>,
}

impl WodCatalog {
    /// Build a catalog from an ordered list of templates
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `templates` is empty, or if any template has
    /// no movements.
    pub fn new(templates: Vec<WodTemplate>) -> AppResult<Self> {
        if templates.is_empty() {
            return Err(AppError::invalid_input(
                "workout catalog must contain at least one template",
            ));
        }
        if let Some(index) = templates.iter().position(|t| t.movements.is_empty()) {
            return Err(AppError::invalid_input(format!(
                "workout template {index} has no movements"
            )));
        }
        Ok(Self {
            templates: templates.into(),
        })
    }

    /// Parse a catalog from a JSON array of templates
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` for malformed JSON and the validation
    /// errors of [`Self::new`].
    pub fn from_json(json: &str) -> AppResult<Self> {
        let templates: Vec<WodTemplate> = serde_json::from_str(json)?;
        Self::new(templates)
    }

    /// The six built-in workouts
    #[must_use]
    pub fn reference() -> Self {
        Self {
            templates: reference_templates().into(),
        }
    }

    /// Templates in catalog order
    #[must_use]
    pub fn templates(&self) -> &[WodTemplate] {
        &self.templates
    }

    /// Number of templates
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Always false for a constructed catalog
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Pick one template uniformly at random
    ///
    /// Each call is independent; the same template may come up twice in a row.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> &WodTemplate {
        let index = rng.gen_range(0..self.templates.len());
        debug!(index, catalog_size = self.templates.len(), "picked workout");
        &self.templates[index]
    }
}

/// Pick a template uniformly from `catalog`, or `None` if it is empty
pub fn pick_random_template<'a, R: Rng + ?Sized>(
    catalog: &'a [WodTemplate],
    rng: &mut R,
) -> Option<&'a WodTemplate> {
    if catalog.is_empty() {
        return None;
    }
    catalog.get(rng.gen_range(0..catalog.len()))
}

fn reference_templates() -> Vec<WodTemplate> {
    vec![
        WodTemplate::new(
            WodKind::Amrap,
            "20 min",
            &["5 Pull-ups", "10 Push-ups", "15 Air Squats"],
        ),
        WodTemplate::new(
            WodKind::ForTime,
            "21-15-9",
            &["Thrusters (43/30 kg)", "Pull-ups"],
        ),
        WodTemplate::new(
            WodKind::Emom,
            "12 min",
            &[
                "Odd minutes: 12 Kettlebell Swings (24/16 kg)",
                "Even minutes: 10 Burpees",
            ],
        ),
        WodTemplate::new(
            WodKind::ForTime,
            "5 rounds",
            &["400 m Run", "15 Overhead Squats (43/30 kg)"],
        ),
        WodTemplate::new(
            WodKind::Amrap,
            "15 min",
            &["10 Wall Balls (9/6 kg)", "10 Box Jumps (60/50 cm)", "10 Toes-to-bar"],
        ),
        WodTemplate::new(
            WodKind::Emom,
            "10 min",
            &["3 Deadlifts @ 70% 1RM", "6 Lateral Burpees over the bar"],
        ),
    ]
}
