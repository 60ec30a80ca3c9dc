use super::config::DockingConfig;
use super::constraint::SiteConstraint;
use super::context::DockingContext;
use super::error::EngineError;
use super::progress::{Progress, ProgressReporter};
use super::state::ScoredComplex;
use super::strategies::DockingStrategy;
use crate::core::fitness::Fitness;
use crate::core::models::complex::Complex;
use crate::core::models::molecule::Molecule;
use crate::core::models::structure::Structure;
use crate::core::sampling::Sampler;
use nalgebra::Point3;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Docks a guest molecule into a host crystal.
///
/// The docker owns its host and guest; sampler, fitness and strategy are shared so that
/// [`Docker::copy`] is cheap and yields an independent host/guest pair.
#[derive(Clone)]
pub struct Docker {
    host: Structure,
    guest: Molecule,
    sampler: Arc<dyn Sampler>,
    fitness: Arc<dyn Fitness>,
    strategy: Arc<dyn DockingStrategy>,
    constraint: SiteConstraint,
    seed: Option<u64>,
}

impl Docker {
    pub fn new(
        host: Structure,
        guest: Molecule,
        sampler: Arc<dyn Sampler>,
        fitness: Arc<dyn Fitness>,
        strategy: Arc<dyn DockingStrategy>,
    ) -> Self {
        Self {
            host,
            guest,
            sampler,
            fitness,
            strategy,
            constraint: SiteConstraint::default(),
            seed: None,
        }
    }

    /// Builds a docker with the sampler, fitness, strategy and constraint described by `config`.
    pub fn from_config(
        host: Structure,
        guest: Molecule,
        config: &DockingConfig,
    ) -> Result<Self, EngineError> {
        Ok(Self::new(
            host,
            guest,
            config.sampler.build(),
            config.fitness.build()?,
            config.strategy.build(),
        )
        .with_constraint(config.constraint.clone())
        .with_seed(config.seed))
    }

    pub fn with_constraint(mut self, constraint: SiteConstraint) -> Self {
        self.constraint = constraint;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn host(&self) -> &Structure {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut Structure {
        &mut self.host
    }

    pub fn guest(&self) -> &Molecule {
        &self.guest
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Returns a docker with its own copies of host and guest.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Samples candidate points and applies the site constraint.
    pub fn candidate_points(&self) -> Result<Vec<Point3<f64>>, EngineError> {
        let raw = self.sampler.get_points(&self.host)?;
        debug!(
            sampler = self.sampler.name(),
            count = raw.len(),
            "Sampled raw candidate points."
        );
        self.constraint.apply(raw, &self.host)
    }

    /// Docks the guest into the host, returning accepted complexes best first.
    pub fn dock(&self, attempts: usize) -> Result<Vec<ScoredComplex>, EngineError> {
        self.dock_with_progress(attempts, &ProgressReporter::new())
    }

    #[instrument(skip_all, name = "dock", fields(strategy = self.strategy.name(), attempts = attempts))]
    pub fn dock_with_progress(
        &self,
        attempts: usize,
        reporter: &ProgressReporter,
    ) -> Result<Vec<ScoredComplex>, EngineError> {
        reporter.report(Progress::PhaseStart { name: "Sampling" });
        let points = self.candidate_points()?;
        info!(points = points.len(), "Candidate points ready.");
        reporter.report(Progress::PhaseFinish);

        self.dock_points(&points, attempts, reporter)
    }

    /// Docks the guest at already sampled and constrained points, then ranks the results.
    #[instrument(skip_all, name = "dock_points", fields(points = points.len(), attempts = attempts))]
    pub fn dock_points(
        &self,
        points: &[Point3<f64>],
        attempts: usize,
        reporter: &ProgressReporter,
    ) -> Result<Vec<ScoredComplex>, EngineError> {
        reporter.report(Progress::PhaseStart { name: "Docking" });
        reporter.report(Progress::TaskStart {
            total_steps: points.len() as u64,
        });
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let ctx = DockingContext::new(&self.host, &self.guest, self.fitness.as_ref());

        let mut complexes = Vec::new();
        for point in points {
            let docked = self
                .strategy
                .dock_at_point(&ctx, point, attempts, &mut rng)?;
            complexes.extend(docked);
            reporter.report(Progress::TaskIncrement);
        }
        reporter.report(Progress::TaskFinish);
        reporter.report(Progress::PhaseFinish);

        reporter.report(Progress::PhaseStart { name: "Ranking" });
        let generated = complexes.len();
        let ranked = self.rank_complexes(complexes);
        info!(
            generated,
            accepted = ranked.len(),
            "Docking finished."
        );
        reporter.report(Progress::PhaseFinish);

        Ok(ranked)
    }

    /// Scores complexes, drops rejected ones and sorts the rest by descending score.
    ///
    /// The sort is stable, so equally scored complexes keep their generation order.
    pub fn rank_complexes(&self, complexes: Vec<Complex>) -> Vec<ScoredComplex> {
        let mut ranked: Vec<ScoredComplex> = complexes
            .into_iter()
            .map(|complex| ScoredComplex {
                score: self.fitness.score(&complex),
                complex,
            })
            .filter(|scored| scored.score >= 0.0)
            .collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }
}
