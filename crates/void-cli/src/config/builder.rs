use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FileConstraintConfig, FileFitnessConfig, FileSamplerConfig};
use super::models::{DockAppConfig, SampleAppConfig};
use crate::cli::{
    ConstraintArgs, DockArgs, FitnessKindArg, SampleArgs, SamplerArgs, SamplerKindArg,
    StrategyKindArg,
};
use crate::error::{CliError, Result};
use clap::ValueEnum;
use nalgebra::Point3;
use std::path::Path;
use std::str::FromStr;
use void_dock::core::fitness::{DistanceStatistic, ThresholdParams};
use void_dock::engine::config::{DockingConfigBuilder, FitnessConfig, SamplerConfig, StrategyKind};
use void_dock::engine::constraint::SiteConstraint;

pub fn build_dock_config(args: &DockArgs) -> Result<DockAppConfig> {
    let defaults = DefaultsConfig::default();

    let mut file_config = load_file_config(args.config.as_deref())?;
    overlay_dock_args(&mut file_config, args);
    let file_config = apply_set_values(file_config, &args.set_values)?;

    let docking = file_config.docking.unwrap_or_default();
    let seed = docking.seed;
    let strategy = match docking.strategy.unwrap_or(defaults.strategy) {
        StrategyKindArg::Base => StrategyKind::Base,
        StrategyKindArg::Batch => StrategyKind::Batch,
        StrategyKindArg::Serial => StrategyKind::Serial,
    };

    // Uniform sampling and docking draw from different streams.
    let sampler_seed = seed.map(|s| s.wrapping_add(1));
    let sampler = resolve_sampler(
        file_config.sampler.unwrap_or_default(),
        sampler_seed,
        &defaults,
    );
    let constraint = resolve_constraint(file_config.constraint.unwrap_or_default(), &defaults);
    let fitness = resolve_fitness(file_config.fitness.unwrap_or_default(), &defaults)?;

    let num_outputs = file_config
        .output
        .and_then(|o| o.num_outputs)
        .unwrap_or(defaults.num_outputs);
    if num_outputs == 0 {
        return Err(CliError::Argument(
            "the number of outputs must be at least 1".to_string(),
        ));
    }

    let core_config = DockingConfigBuilder::new()
        .attempts(docking.attempts.unwrap_or(defaults.attempts))
        .sampler(sampler)
        .fitness(fitness)
        .strategy(strategy)
        .constraint(constraint)
        .seed(seed)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(DockAppConfig {
        host_path: args.host.clone(),
        guest_path: args.guest.clone(),
        output_template: args.output.clone(),
        num_outputs,
        core_config,
    })
}

pub fn build_sample_config(args: &SampleArgs) -> Result<SampleAppConfig> {
    let defaults = DefaultsConfig::default();

    let mut file_config = load_file_config(args.config.as_deref())?;
    overlay_sampler_args(&mut file_config, &args.sampler);
    overlay_constraint_args(&mut file_config, &args.constraint);
    if args.seed.is_some() {
        file_config.docking.get_or_insert_with(Default::default).seed = args.seed;
    }
    let file_config = apply_set_values(file_config, &args.set_values)?;

    let seed = file_config.docking.and_then(|d| d.seed);
    let constraint = resolve_constraint(file_config.constraint.unwrap_or_default(), &defaults);
    if !constraint.radius.is_finite() || constraint.radius <= 0.0 {
        return Err(CliError::Config(format!(
            "constraint sphere must be positive, got {}",
            constraint.radius
        )));
    }

    Ok(SampleAppConfig {
        host_path: args.host.clone(),
        output_path: args.output.clone(),
        sampler: resolve_sampler(file_config.sampler.unwrap_or_default(), seed, &defaults),
        constraint,
    })
}

fn load_file_config(path: Option<&Path>) -> Result<FileConfig> {
    match path {
        Some(path) => FileConfig::from_file(path),
        None => Ok(FileConfig::default()),
    }
}

fn overlay_dock_args(config: &mut FileConfig, args: &DockArgs) {
    let docking = config.docking.get_or_insert_with(Default::default);
    if args.strategy.is_some() {
        docking.strategy = args.strategy;
    }
    if args.attempts.is_some() {
        docking.attempts = args.attempts;
    }
    if args.seed.is_some() {
        docking.seed = args.seed;
    }

    overlay_sampler_args(config, &args.sampler);
    overlay_constraint_args(config, &args.constraint);

    let fitness = config.fitness.get_or_insert_with(Default::default);
    if args.fitness.is_some() {
        fitness.kind = args.fitness;
    }
    if args.threshold.is_some() {
        fitness.threshold = args.threshold;
    }

    if args.num_outputs.is_some() {
        config.output.get_or_insert_with(Default::default).num_outputs = args.num_outputs;
    }
}

fn overlay_sampler_args(config: &mut FileConfig, args: &SamplerArgs) {
    let sampler = config.sampler.get_or_insert_with(Default::default);
    if args.sampler.is_some() {
        sampler.kind = args.sampler;
    }
    if args.extent.is_some() {
        sampler.extent = args.extent;
    }
    if args.density.is_some() {
        sampler.density = args.density;
    }
    if !args.centers.is_empty() {
        sampler.centers = Some(args.centers.clone());
    }
    if args.num_points.is_some() {
        sampler.num_points = args.num_points;
    }
}

fn overlay_constraint_args(config: &mut FileConfig, args: &ConstraintArgs) {
    let constraint = config.constraint.get_or_insert_with(Default::default);
    if !args.indices.is_empty() {
        constraint.indices = Some(args.indices.clone());
    }
    if args.sphere.is_some() {
        constraint.sphere = args.sphere;
    }
    if args.max_sites.is_some() {
        constraint.max_sites = args.max_sites;
    }
}

fn resolve_sampler(
    file: FileSamplerConfig,
    seed: Option<u64>,
    defaults: &DefaultsConfig,
) -> SamplerConfig {
    let density = file.density.unwrap_or(defaults.density);
    match file.kind.unwrap_or(defaults.sampler) {
        SamplerKindArg::LocalizedGrid => SamplerConfig::LocalizedGrid {
            extent: file.extent.unwrap_or(defaults.extent),
            density,
            centers: file.centers.unwrap_or_default(),
        },
        SamplerKindArg::CellGrid => SamplerConfig::CellGrid { density },
        SamplerKindArg::Uniform => SamplerConfig::Uniform {
            num_points: file.num_points.unwrap_or(defaults.num_points),
            seed,
        },
    }
}

fn resolve_constraint(
    file: FileConstraintConfig,
    defaults: &DefaultsConfig,
) -> SiteConstraint {
    SiteConstraint {
        indices: file.indices.unwrap_or_default(),
        radius: file.sphere.unwrap_or(defaults.sphere),
        max_sites: file.max_sites,
    }
}

fn resolve_fitness(file: FileFitnessConfig, defaults: &DefaultsConfig) -> Result<FitnessConfig> {
    let params = ThresholdParams {
        threshold: file.threshold.unwrap_or(defaults.threshold),
        step: file.step.unwrap_or(false),
    };
    let target = file.target.unwrap_or(defaults.target);
    let sigma = file.sigma.unwrap_or(defaults.sigma);
    let gaussian = |statistic| FitnessConfig::GaussianTarget {
        statistic,
        target,
        sigma,
        params,
    };

    let config = match file.kind.unwrap_or(defaults.fitness) {
        FitnessKindArg::MinDistance => FitnessConfig::MinDistance { params },
        FitnessKindArg::MeanDistance => FitnessConfig::MeanDistance { params },
        FitnessKindArg::SumInvDistance => FitnessConfig::SumInvDistance {
            params,
            cutoff: file.cutoff.unwrap_or(defaults.cutoff),
        },
        FitnessKindArg::MinDistanceTarget => gaussian(DistanceStatistic::Min),
        FitnessKindArg::MeanDistanceTarget => gaussian(DistanceStatistic::Mean),
        FitnessKindArg::MaxDistanceTarget => gaussian(DistanceStatistic::Max),
        FitnessKindArg::MaxRadialDistance => FitnessConfig::MaxRadialDistance {
            center: Point3::from(file.center.ok_or_else(|| {
                CliError::Config("`max-radial-distance` fitness requires `center`".to_string())
            })?),
            radius: file.radius.ok_or_else(|| {
                CliError::Config("`max-radial-distance` fitness requires `radius`".to_string())
            })?,
        },
        FitnessKindArg::Multiple => {
            let members = file.members.unwrap_or_default();
            if members.is_empty() {
                return Err(CliError::Config(
                    "`multiple` fitness requires at least one `[[fitness.members]]` entry"
                        .to_string(),
                ));
            }
            FitnessConfig::Multiple(
                members
                    .into_iter()
                    .map(|member| resolve_fitness(member, defaults))
                    .collect::<Result<Vec<_>>>()?,
            )
        }
    };
    Ok(config)
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        CliError::Config(format!("Invalid value for {}: {}", key, value))
    })
}

fn parse_enum<T: ValueEnum>(key: &str, value: &str) -> Result<T> {
    <T as ValueEnum>::from_str(value.trim(), true)
        .map_err(|_| CliError::Config(format!("Invalid value for {}: {}", key, value)))
}

fn parse_list(key: &str, value: &str) -> Result<Vec<usize>> {
    value
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| parse_value(key, s))
        .collect()
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };
        let key = key.trim();

        match key {
            "docking.strategy" => {
                config.docking.get_or_insert_with(Default::default).strategy =
                    Some(parse_enum(key, value)?);
            }
            "docking.attempts" => {
                config.docking.get_or_insert_with(Default::default).attempts =
                    Some(parse_value(key, value)?);
            }
            "docking.seed" => {
                config.docking.get_or_insert_with(Default::default).seed =
                    Some(parse_value(key, value)?);
            }
            "sampler.kind" => {
                config.sampler.get_or_insert_with(Default::default).kind =
                    Some(parse_enum(key, value)?);
            }
            "sampler.extent" => {
                config.sampler.get_or_insert_with(Default::default).extent =
                    Some(parse_value(key, value)?);
            }
            "sampler.density" => {
                config.sampler.get_or_insert_with(Default::default).density =
                    Some(parse_value(key, value)?);
            }
            "sampler.centers" => {
                config.sampler.get_or_insert_with(Default::default).centers =
                    Some(parse_list(key, value)?);
            }
            "sampler.num-points" => {
                config.sampler.get_or_insert_with(Default::default).num_points =
                    Some(parse_value(key, value)?);
            }
            "constraint.indices" => {
                config.constraint.get_or_insert_with(Default::default).indices =
                    Some(parse_list(key, value)?);
            }
            "constraint.sphere" => {
                config.constraint.get_or_insert_with(Default::default).sphere =
                    Some(parse_value(key, value)?);
            }
            "constraint.max-sites" => {
                config.constraint.get_or_insert_with(Default::default).max_sites =
                    Some(parse_value(key, value)?);
            }
            "fitness.kind" => {
                config.fitness.get_or_insert_with(Default::default).kind =
                    Some(parse_enum(key, value)?);
            }
            "fitness.threshold" => {
                config.fitness.get_or_insert_with(Default::default).threshold =
                    Some(parse_value(key, value)?);
            }
            "fitness.step" => {
                config.fitness.get_or_insert_with(Default::default).step =
                    Some(parse_value(key, value)?);
            }
            "fitness.cutoff" => {
                config.fitness.get_or_insert_with(Default::default).cutoff =
                    Some(parse_value(key, value)?);
            }
            "fitness.target" => {
                config.fitness.get_or_insert_with(Default::default).target =
                    Some(parse_value(key, value)?);
            }
            "fitness.sigma" => {
                config.fitness.get_or_insert_with(Default::default).sigma =
                    Some(parse_value(key, value)?);
            }
            "fitness.radius" => {
                config.fitness.get_or_insert_with(Default::default).radius =
                    Some(parse_value(key, value)?);
            }
            "output.num-outputs" => {
                config.output.get_or_insert_with(Default::default).num_outputs =
                    Some(parse_value(key, value)?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use once_cell::sync::Lazy;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::{TempDir, tempdir};

    static TEST_DIR: Lazy<TempDir> = Lazy::new(|| tempdir().expect("Failed to create temp dir"));

    fn write_config_file(name: &str, content: &str) -> PathBuf {
        let file_path = TEST_DIR.path().join(name);
        fs::write(&file_path, content).unwrap();
        file_path
    }

    fn dock_args(extra: &[&str]) -> DockArgs {
        let mut argv = vec![
            "void", "dock", "--host", "host.xyz", "--guest", "guest.xyz", "-o", "out.xyz",
        ];
        argv.extend_from_slice(extra);
        match Cli::parse_from(argv).command {
            Commands::Dock(args) => args,
            _ => panic!("expected the dock command"),
        }
    }

    #[test]
    fn defaults_fill_everything_without_a_file() {
        let app = build_dock_config(&dock_args(&[])).unwrap();
        let defaults = DefaultsConfig::default();
        let cfg = app.core_config;

        assert_eq!(app.num_outputs, 1);
        assert_eq!(cfg.attempts, void_dock::engine::config::ATTEMPTS);
        assert_eq!(cfg.strategy, StrategyKind::Batch);
        assert_eq!(
            cfg.sampler,
            SamplerConfig::CellGrid {
                density: defaults.density
            }
        );
        assert_eq!(
            cfg.fitness,
            FitnessConfig::MinDistance {
                params: ThresholdParams::default()
            }
        );
        assert!(cfg.constraint.indices.is_empty());
        assert_eq!(cfg.constraint.radius, defaults.sphere);
    }

    #[test]
    fn file_values_are_merged() {
        let path = write_config_file(
            "merge.toml",
            r#"
            [docking]
            strategy = "serial"
            attempts = 12
            seed = 99

            [sampler]
            kind = "localized-grid"
            extent = 4.0
            density = 3
            centers = [0, 2]

            [constraint]
            indices = [2]
            sphere = 3.5
            max-sites = 10

            [fitness]
            kind = "mean-distance-target"
            target = 3.2
            sigma = 0.4

            [output]
            num-outputs = 4
            "#,
        );
        let app = build_dock_config(&dock_args(&["-c", path.to_str().unwrap()])).unwrap();
        let cfg = app.core_config;

        assert_eq!(app.num_outputs, 4);
        assert_eq!(cfg.attempts, 12);
        assert_eq!(cfg.seed, Some(99));
        assert_eq!(cfg.strategy, StrategyKind::Serial);
        assert_eq!(
            cfg.sampler,
            SamplerConfig::LocalizedGrid {
                extent: 4.0,
                density: 3,
                centers: vec![0, 2]
            }
        );
        assert_eq!(
            cfg.constraint,
            SiteConstraint {
                indices: vec![2],
                radius: 3.5,
                max_sites: Some(10)
            }
        );
        assert_eq!(
            cfg.fitness,
            FitnessConfig::GaussianTarget {
                statistic: DistanceStatistic::Mean,
                target: 3.2,
                sigma: 0.4,
                params: ThresholdParams::default()
            }
        );
    }

    #[test]
    fn cli_flags_override_file_and_set_values_override_flags() {
        let path = write_config_file(
            "override.toml",
            r#"
            [docking]
            attempts = 12

            [fitness]
            threshold = 2.0
            "#,
        );
        let args = dock_args(&[
            "-c",
            path.to_str().unwrap(),
            "--attempts",
            "20",
            "--threshold",
            "1.0",
            "--docker",
            "base",
            "-S",
            "docking.attempts=30",
            "-S",
            "sampler.kind=uniform",
            "-S",
            "sampler.num-points=7",
        ]);
        let cfg = build_dock_config(&args).unwrap().core_config;

        assert_eq!(cfg.attempts, 30);
        assert_eq!(cfg.strategy, StrategyKind::Base);
        assert_eq!(
            cfg.sampler,
            SamplerConfig::Uniform {
                num_points: 7,
                seed: None
            }
        );
        assert_eq!(
            cfg.fitness,
            FitnessConfig::MinDistance {
                params: ThresholdParams {
                    threshold: 1.0,
                    step: false
                }
            }
        );
    }

    #[test]
    fn multiple_fitness_from_file() {
        let path = write_config_file(
            "multiple.toml",
            r#"
            [fitness]
            kind = "multiple"

            [[fitness.members]]
            kind = "min-distance"

            [[fitness.members]]
            kind = "max-radial-distance"
            center = [5.0, 5.0, 5.0]
            radius = 3.0
            "#,
        );
        let cfg = build_dock_config(&dock_args(&["-c", path.to_str().unwrap()]))
            .unwrap()
            .core_config;
        let FitnessConfig::Multiple(members) = cfg.fitness else {
            panic!("expected a composite fitness");
        };
        assert_eq!(members.len(), 2);
        assert_eq!(
            members[1],
            FitnessConfig::MaxRadialDistance {
                center: Point3::new(5.0, 5.0, 5.0),
                radius: 3.0
            }
        );
    }

    #[test]
    fn radial_fitness_without_center_is_a_config_error() {
        let args = dock_args(&["--fitness", "max-radial-distance"]);
        assert!(matches!(
            build_dock_config(&args),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn invalid_set_values_are_rejected() {
        for bad in ["docking.attempts", "docking.attempts=many", "unknown.key=1"] {
            let args = dock_args(&["-S", bad]);
            assert!(
                matches!(build_dock_config(&args), Err(CliError::Config(_))),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn zero_outputs_is_an_argument_error() {
        let args = dock_args(&["-n", "0"]);
        assert!(matches!(
            build_dock_config(&args),
            Err(CliError::Argument(_))
        ));
    }

    #[test]
    fn uniform_sampler_seed_differs_from_docking_seed() {
        let app = build_dock_config(&dock_args(&[
            "--sampler",
            "uniform",
            "--num-points",
            "20",
            "--seed",
            "5",
        ]))
        .unwrap();
        let cfg = app.core_config;

        assert_eq!(cfg.seed, Some(5));
        assert_eq!(
            cfg.sampler,
            SamplerConfig::Uniform {
                num_points: 20,
                seed: Some(6)
            }
        );

        let max_seed = u64::MAX.to_string();
        let max = build_dock_config(&dock_args(&[
            "--sampler",
            "uniform",
            "--seed",
            max_seed.as_str(),
        ]))
        .unwrap();
        assert!(matches!(
            max.core_config.sampler,
            SamplerConfig::Uniform { seed: Some(0), .. }
        ));
    }

    #[test]
    fn sample_config_uses_seed_for_uniform_sampler() {
        let cli = Cli::parse_from([
            "void",
            "sample",
            "--host",
            "host.xyz",
            "-o",
            "points.xyz",
            "--sampler",
            "uniform",
            "--num-points",
            "5",
            "--seed",
            "3",
            "--constraint",
            "0",
        ]);
        let Commands::Sample(args) = cli.command else {
            panic!("expected the sample command");
        };
        let app = build_sample_config(&args).unwrap();
        assert_eq!(
            app.sampler,
            SamplerConfig::Uniform {
                num_points: 5,
                seed: Some(3)
            }
        );
        assert_eq!(app.constraint.indices, vec![0]);
        assert_eq!(app.output_path, PathBuf::from("points.xyz"));
    }
}
