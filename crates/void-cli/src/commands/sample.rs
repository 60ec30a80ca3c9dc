use crate::cli::SampleArgs;
use crate::config::build_sample_config;
use crate::error::{CliError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use tracing::{info, warn};
use void_dock::{
    core::io::{
        traits::ChemicalFile,
        xyz::{ExtendedXyzFile, write_point_cloud},
    },
    engine::error::EngineError,
};

pub fn run(args: SampleArgs) -> Result<()> {
    let app = build_sample_config(&args)?;

    info!("Loading host structure from {:?}", &app.host_path);
    let host =
        ExtendedXyzFile::read_from_path(&app.host_path).map_err(|e| CliError::FileParsing {
            path: app.host_path.clone(),
            source: e.into(),
        })?;

    let sampler = app.sampler.build();
    let raw = sampler
        .get_points(&host)
        .map_err(EngineError::from)?;
    let points = app.constraint.apply(raw, &host)?;
    if points.is_empty() {
        warn!("The sampler produced no candidate points for this host.");
    }

    let mut writer = BufWriter::new(File::create(&app.output_path)?);
    let comment = format!("{} candidate points from {}", points.len(), sampler.name());
    write_point_cloud(&points, &comment, &mut writer)?;
    writer.flush()?;

    info!(
        "Wrote {} point(s) to {:?}",
        points.len(),
        &app.output_path
    );
    println!(
        "✓ {} candidate point(s) written to: {}",
        points.len(),
        app.output_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;
    use void_dock::core::io::xyz::{POINT_CLOUD_LABEL, XyzFile};

    fn sample_args(argv: &[&str]) -> SampleArgs {
        match Cli::parse_from(argv).command {
            Commands::Sample(args) => args,
            _ => panic!("expected the sample command"),
        }
    }

    #[test]
    fn localized_grid_points_are_written_as_point_cloud() {
        let dir = tempdir().unwrap();
        let host_path = dir.path().join("host.xyz");
        let output = dir.path().join("points.xyz");
        fs::write(
            &host_path,
            "2\nLattice=\"8 0 0 0 8 0 0 0 8\"\nNa 0 0 0\nCl 4 4 4\n",
        )
        .unwrap();

        let args = sample_args(&[
            "void",
            "sample",
            "--host",
            host_path.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--sampler",
            "localized-grid",
            "--density",
            "3",
            "--centers",
            "0,1",
        ]);
        run(args).unwrap();

        let cloud = XyzFile::read_from_path(&output).unwrap();
        assert_eq!(cloud.len(), 2 * 27);
        assert!(cloud.species().iter().all(|s| s == POINT_CLOUD_LABEL));
    }

    #[test]
    fn out_of_range_center_is_a_core_error() {
        let dir = tempdir().unwrap();
        let host_path = dir.path().join("host.xyz");
        fs::write(&host_path, "1\nLattice=\"8 0 0 0 8 0 0 0 8\"\nNa 0 0 0\n").unwrap();

        let args = sample_args(&[
            "void",
            "sample",
            "--host",
            host_path.to_str().unwrap(),
            "-o",
            dir.path().join("points.xyz").to_str().unwrap(),
            "--sampler",
            "localized-grid",
            "--centers",
            "4",
        ]);
        assert!(matches!(
            run(args),
            Err(CliError::Core(EngineError::Sampling { .. }))
        ));
    }
}
