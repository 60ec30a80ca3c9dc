use crate::cli::DockArgs;
use crate::config::build_dock_config;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use void_dock::{
    core::io::{
        traits::ChemicalFile,
        xyz::{ExtendedXyzFile, XyzFile},
    },
    engine::{error::EngineError, progress::ProgressReporter},
    workflows,
};

pub fn run(args: DockArgs) -> Result<()> {
    info!("Merging configuration from defaults, file and CLI arguments...");
    let app = build_dock_config(&args)?;

    info!("Loading host structure from {:?}", &app.host_path);
    let host =
        ExtendedXyzFile::read_from_path(&app.host_path).map_err(|e| CliError::FileParsing {
            path: app.host_path.clone(),
            source: e.into(),
        })?;
    info!("Loading guest molecule from {:?}", &app.guest_path);
    let guest = XyzFile::read_from_path(&app.guest_path).map_err(|e| CliError::FileParsing {
        path: app.guest_path.clone(),
        source: e.into(),
    })?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Starting docking...");
    let result = workflows::dock::run(&host, &guest, &app.core_config, &reporter)?;
    info!(
        "Workflow finished with {} accepted complex(es) from {} candidate point(s).",
        result.solutions.len(),
        result.candidate_points
    );

    if result.solutions.is_empty() {
        warn!("Docking completed but no complex passed the fitness function.");
        println!("Warning: docking finished but no complex passed the fitness function.");
        return Ok(());
    }

    let kept = &result.solutions[..result.solutions.len().min(app.num_outputs)];
    println!("Docking complete. Writing {} complex(es)...", kept.len());

    for (i, solution) in kept.iter().enumerate() {
        let output_path = generate_output_path(&app.output_template, i + 1, kept.len());
        info!(
            "Writing complex {} (score: {:.6}) to {:?}",
            i + 1,
            solution.score,
            &output_path
        );

        let structure = solution
            .complex
            .to_structure()
            .map_err(EngineError::from)?;
        let comment = format!(
            "score={:.6} rank={} strategy={}",
            solution.score,
            i + 1,
            result.strategy
        );
        ExtendedXyzFile::write_to_path(&structure, &comment, &output_path).map_err(|e| {
            CliError::FileParsing {
                path: output_path.clone(),
                source: e.into(),
            }
        })?;

        if i == 0 {
            println!(
                "✓ Best complex (score: {:.6}) written to: {}",
                solution.score,
                output_path.display()
            );
        } else {
            println!(
                "  Complex {} (score: {:.6}) written to: {}",
                i + 1,
                solution.score,
                output_path.display()
            );
        }
    }

    Ok(())
}

/// `out.xyz` for a single complex, `out_1.xyz`, `out_2.xyz`, ... otherwise.
fn generate_output_path(template: &Path, index: usize, total: usize) -> PathBuf {
    if total <= 1 {
        return template.to_path_buf();
    }
    let stem = template
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "complex".to_string());
    let file_name = match template.extension() {
        Some(ext) => format!("{}_{}.{}", stem, index, ext.to_string_lossy()),
        None => format!("{}_{}", stem, index),
    };
    template.with_file_name(file_name)
}
