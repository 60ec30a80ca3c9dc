use crate::core::models::molecule::Molecule;
use crate::core::models::structure::Structure;
use crate::engine::config::DockingConfig;
use crate::engine::docker::Docker;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::state::ScoredComplex;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone)]
pub struct DockingResult {
    pub strategy: &'static str,
    pub candidate_points: usize,
    /// Accepted complexes, best first.
    pub solutions: Vec<ScoredComplex>,
}

impl DockingResult {
    pub fn best(&self) -> Option<&ScoredComplex> {
        self.solutions.first()
    }
}

#[instrument(skip_all, name = "docking_workflow")]
pub fn run(
    host: &Structure,
    guest: &Molecule,
    config: &DockingConfig,
    reporter: &ProgressReporter,
) -> Result<DockingResult, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Preparation",
    });
    info!(
        host_sites = host.len(),
        guest_atoms = guest.len(),
        "Setting up docker."
    );
    let docker = Docker::from_config(host.clone(), guest.clone(), config)?;
    reporter.report(Progress::StatusUpdate {
        text: format!("strategy: {}", docker.strategy_name()),
    });
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart { name: "Sampling" });
    let points = docker.candidate_points()?;
    if points.is_empty() {
        warn!("No candidate points survived sampling and the site constraint.");
    }
    info!(points = points.len(), "Candidate points ready.");
    reporter.report(Progress::PhaseFinish);

    let solutions = docker.dock_points(&points, config.attempts, reporter)?;

    info!(
        "Workflow complete. Returning {} complex(es).",
        solutions.len()
    );
    Ok(DockingResult {
        strategy: docker.strategy_name(),
        candidate_points: points.len(),
        solutions,
    })
}
