//! Narrow-phase orchestrator
//!
//! Walks the broad-phase's candidate pairs, resolves both weak handles,
//! dispatches on the pair's shape kinds and keeps the contacts that come
//! back. Each pair reads only its own two shapes, so with the `parallel`
//! feature large pair lists are split across rayon's pool.

use crate::config::{CollisionConfig, ConfigError};
use crate::physics::body::{BodySet, PotentialContact};
use crate::physics::CollisionError;
use super::dispatch::{BodyRef, DispatchTable};
use super::Contact;

/// Counters from the most recent pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassStats {
    /// Candidate pairs received
    pub candidates: usize,
    /// Pairs skipped because a body had been removed
    pub stale: usize,
    /// Contacts produced
    pub contacts: usize,
}

/// What became of a single candidate pair
#[derive(Debug, Clone, Copy, PartialEq)]
enum PairOutcome {
    /// A body was removed before the pass
    Stale,
    /// Both bodies are alive but their shapes do not overlap
    Separated,
    /// The shapes overlap
    Touching(Contact),
}

/// Turns candidate pairs into contacts
#[derive(Debug, Default)]
pub struct CollisionDetector {
    config: CollisionConfig,
    table: DispatchTable,
    contacts: Vec<Contact>,
    last_pass: PassStats,
}

impl CollisionDetector {
    /// Create a detector with default tolerances
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with custom tolerances
    ///
    /// Fails if `config` does not pass [`CollisionConfig::validate`].
    pub fn with_config(config: CollisionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Active tolerances
    pub fn config(&self) -> &CollisionConfig {
        &self.config
    }

    /// Run the narrow-phase over `pairs`
    ///
    /// The previous contact list is discarded first. Pairs whose bodies no
    /// longer exist in `bodies` are skipped. An error means a handler was
    /// registered for the wrong kinds; the contact list is then left empty
    /// and [`last_pass`](Self::last_pass) reports the zeroed counters.
    pub fn generate_contacts(
        &mut self,
        bodies: &BodySet,
        pairs: &[PotentialContact],
    ) -> Result<&[Contact], CollisionError> {
        self.contacts.clear();
        self.last_pass = PassStats::default();

        let outcomes = if self.use_parallel(pairs.len()) {
            self.collect_parallel(bodies, pairs)?
        } else {
            self.collect_sequential(bodies, pairs)?
        };

        let mut stats = PassStats {
            candidates: pairs.len(),
            ..PassStats::default()
        };
        for outcome in outcomes {
            match outcome {
                PairOutcome::Stale => stats.stale += 1,
                PairOutcome::Separated => {}
                PairOutcome::Touching(contact) => self.contacts.push(contact),
            }
        }
        stats.contacts = self.contacts.len();
        self.last_pass = stats;

        log::debug!(
            "Narrow-phase: {} candidates, {} stale, {} contacts",
            stats.candidates,
            stats.stale,
            stats.contacts
        );

        Ok(self.contacts.as_slice())
    }

    /// Contacts from the last successful pass
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Counters from the last pass
    pub fn last_pass(&self) -> PassStats {
        self.last_pass
    }

    fn test_pair(
        &self,
        bodies: &BodySet,
        pair: &PotentialContact,
    ) -> Result<PairOutcome, CollisionError> {
        let Some((body1, body2)) = pair.resolve(bodies) else {
            log::trace!("Skipping stale pair {:?}", pair);
            return Ok(PairOutcome::Stale);
        };

        let contact = self.table.dispatch(
            BodyRef::new(pair.body1, body1.collider()),
            BodyRef::new(pair.body2, body2.collider()),
            &self.config,
        )?;
        Ok(contact.map_or(PairOutcome::Separated, PairOutcome::Touching))
    }

    fn collect_sequential(
        &self,
        bodies: &BodySet,
        pairs: &[PotentialContact],
    ) -> Result<Vec<PairOutcome>, CollisionError> {
        pairs.iter().map(|pair| self.test_pair(bodies, pair)).collect()
    }

    #[cfg(feature = "parallel")]
    fn use_parallel(&self, pair_count: usize) -> bool {
        pair_count >= self.config.parallel_threshold
    }

    #[cfg(not(feature = "parallel"))]
    fn use_parallel(&self, _pair_count: usize) -> bool {
        false
    }

    // Ordered collect: output order matches the sequential pass
    #[cfg(feature = "parallel")]
    fn collect_parallel(
        &self,
        bodies: &BodySet,
        pairs: &[PotentialContact],
    ) -> Result<Vec<PairOutcome>, CollisionError> {
        use rayon::prelude::*;

        pairs
            .par_iter()
            .map(|pair| self.test_pair(bodies, pair))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn collect_parallel(
        &self,
        bodies: &BodySet,
        pairs: &[PotentialContact],
    ) -> Result<Vec<PairOutcome>, CollisionError> {
        self.collect_sequential(bodies, pairs)
    }
}
