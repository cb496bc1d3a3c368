//! Rejection-sampling placement of fixed-size entities.
//!
//! A candidate position is drawn uniformly from every spot where the entity
//! fits inside the play area, then checked against the occupied rectangles.
//! Candidates that collide are discarded and redrawn until one is free or
//! the attempt budget runs out.

use bevy::log::debug;
use pf_core::{Bounds, Rect};

use crate::config::SpawnConfig;
use crate::error::{ConfigError, PlacementError};
use crate::rng::RandomSource;

/// Places new entities into free space.
#[derive(Debug, Clone, Default)]
pub struct PlacementGenerator {
    config: SpawnConfig,
}

impl PlacementGenerator {
    /// Create a new generator.
    ///
    /// Rejects configs with a non-positive entity size or a zero attempt
    /// budget.
    pub fn new(config: SpawnConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Find a free spot for one entity.
    ///
    /// The returned rectangle lies fully inside `bounds` and overlaps none of
    /// `existing`. Fails with [`PlacementError::OutOfRange`] when the entity
    /// does not fit at all, and with [`PlacementError::Exhausted`] when no
    /// free spot was drawn within the attempt budget.
    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        existing: &[Rect],
        bounds: Bounds,
        rng: &mut R,
    ) -> Result<Rect, PlacementError> {
        let size = self.config.entity_size;
        if !bounds.fits(size) {
            return Err(PlacementError::OutOfRange { bounds, size });
        }

        let max_x = bounds.width - size.width;
        let max_y = bounds.height - size.height;

        for attempt in 1..=self.config.max_attempts {
            let x = rng.next_in_range(0..=max_x);
            let y = rng.next_in_range(0..=max_y);
            let candidate = Rect::at(x, y, size);

            if !candidate.overlaps_any(existing) {
                debug!(
                    "placed {}x{} at ({}, {}) after {} attempt(s)",
                    size.width, size.height, x, y, attempt
                );
                return Ok(candidate);
            }
        }

        Err(PlacementError::Exhausted {
            attempts: self.config.max_attempts,
        })
    }

    /// Place `count` entities one after another.
    ///
    /// Each new entity also avoids the ones placed earlier in the batch.
    /// Stops at the first failure.
    pub fn generate_many<R: RandomSource + ?Sized>(
        &self,
        existing: &[Rect],
        bounds: Bounds,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Rect>, PlacementError> {
        let mut occupied = existing.to_vec();
        let mut placed = Vec::with_capacity(count);

        for _ in 0..count {
            let rect = self.generate(&occupied, bounds, rng)?;
            occupied.push(rect);
            placed.push(rect);
        }

        Ok(placed)
    }
}
