use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "VOID - dock guest molecules into the voids of periodic crystal hosts.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Dock a guest molecule into a host structure and write the best complexes.
    Dock(DockArgs),
    /// Write the candidate insertion points of a host as an XYZ point cloud.
    Sample(SampleArgs),
}

#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKindArg {
    Base,
    Batch,
    Serial,
}

#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SamplerKindArg {
    LocalizedGrid,
    CellGrid,
    Uniform,
}

#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FitnessKindArg {
    MinDistance,
    MeanDistance,
    SumInvDistance,
    MinDistanceTarget,
    MeanDistanceTarget,
    MaxDistanceTarget,
    MaxRadialDistance,
    /// Only available from a config file, since it needs a list of members.
    #[value(skip)]
    Multiple,
}

/// Options controlling how candidate points are generated.
#[derive(Args, Debug, Clone, Default)]
pub struct SamplerArgs {
    /// Point sampler to use.
    #[arg(long, value_enum, value_name = "KIND")]
    pub sampler: Option<SamplerKindArg>,

    /// Edge length (Å) of the local grid placed around each center atom.
    #[arg(long = "lattice", value_name = "FLOAT")]
    pub extent: Option<f64>,

    /// Number of grid points along each axis.
    #[arg(long, value_name = "INT")]
    pub density: Option<usize>,

    /// Host site indices the local grid is centered on (comma separated).
    #[arg(long, value_name = "I,J,...", value_delimiter = ',')]
    pub centers: Vec<usize>,

    /// Number of points drawn by the uniform sampler.
    #[arg(long, value_name = "INT")]
    pub num_points: Option<usize>,
}

/// Options restricting candidate points to spheres around host atoms.
#[derive(Args, Debug, Clone, Default)]
pub struct ConstraintArgs {
    /// Host site indices whose neighbourhoods are kept (comma separated).
    #[arg(long = "constraint", value_name = "I,J,...", value_delimiter = ',')]
    pub indices: Vec<usize>,

    /// Radius (Å) of the constraint spheres.
    #[arg(long, value_name = "FLOAT")]
    pub sphere: Option<f64>,

    /// Keep at most this many candidate points.
    #[arg(long, value_name = "INT")]
    pub max_sites: Option<usize>,
}

/// Arguments for the `dock` subcommand.
#[derive(Args, Debug)]
pub struct DockArgs {
    // --- Core Arguments ---
    /// Host structure as extended XYZ (with a Lattice="..." comment).
    #[arg(long, required = true, value_name = "PATH")]
    pub host: PathBuf,

    /// Guest molecule as plain XYZ.
    #[arg(long, required = true, value_name = "PATH")]
    pub guest: PathBuf,

    /// Output path; numbered files are written when several complexes are kept.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Docking Overrides ---
    /// Docking strategy used at each candidate point.
    #[arg(long = "docker", value_enum, value_name = "KIND")]
    pub strategy: Option<StrategyKindArg>,

    /// Number of placement attempts per candidate point.
    #[arg(long, value_name = "INT")]
    pub attempts: Option<usize>,

    /// Seed for the random number generator.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub sampler: SamplerArgs,

    #[command(flatten)]
    pub constraint: ConstraintArgs,

    // --- Fitness Overrides ---
    /// Fitness function used to rank complexes.
    #[arg(long, value_enum, value_name = "KIND")]
    pub fitness: Option<FitnessKindArg>,

    /// Minimum guest-host distance (Å) below which a complex is rejected.
    #[arg(long, value_name = "FLOAT")]
    pub threshold: Option<f64>,

    // --- Output ---
    /// Number of top-ranked complexes to write.
    #[arg(short, long, value_name = "INT")]
    pub num_outputs: Option<usize>,

    /// Set a specific configuration value, overriding the config file and flags.
    /// Can be used multiple times. Example: -S fitness.sigma=0.3
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `sample` subcommand.
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Host structure as extended XYZ (with a Lattice="..." comment).
    #[arg(long, required = true, value_name = "PATH")]
    pub host: PathBuf,

    /// Output XYZ file for the point cloud.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed for the uniform sampler.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub sampler: SamplerArgs,

    #[command(flatten)]
    pub constraint: ConstraintArgs,

    /// Set a specific configuration value. Example: -S sampler.density=4
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dock_parses_lists_and_enums() {
        let cli = Cli::parse_from([
            "void",
            "-vv",
            "dock",
            "--host",
            "host.xyz",
            "--guest",
            "co2.xyz",
            "-o",
            "out.xyz",
            "--docker",
            "serial",
            "--sampler",
            "localized-grid",
            "--centers",
            "0,3,7",
            "--constraint",
            "1,2",
            "--fitness",
            "mean-distance-target",
            "-S",
            "fitness.sigma=0.3",
        ]);
        assert_eq!(cli.verbose, 2);
        let Commands::Dock(args) = cli.command else {
            panic!("expected the dock command");
        };
        assert_eq!(args.strategy, Some(StrategyKindArg::Serial));
        assert_eq!(args.sampler.sampler, Some(SamplerKindArg::LocalizedGrid));
        assert_eq!(args.sampler.centers, vec![0, 3, 7]);
        assert_eq!(args.constraint.indices, vec![1, 2]);
        assert_eq!(args.fitness, Some(FitnessKindArg::MeanDistanceTarget));
        assert_eq!(args.set_values, vec!["fitness.sigma=0.3".to_string()]);
    }

    #[test]
    fn multiple_fitness_is_not_a_cli_value() {
        let result = Cli::try_parse_from([
            "void", "dock", "--host", "h", "--guest", "g", "-o", "o", "--fitness", "multiple",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn sample_requires_host_and_output() {
        assert!(Cli::try_parse_from(["void", "sample", "--host", "h.xyz"]).is_err());
        assert!(Cli::try_parse_from(["void", "sample", "--host", "h.xyz", "-o", "p.xyz"]).is_ok());
    }
}
