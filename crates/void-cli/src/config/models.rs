use std::path::PathBuf;
use void_dock::engine::config::{DockingConfig, SamplerConfig};
use void_dock::engine::constraint::SiteConstraint;

pub struct DockAppConfig {
    pub host_path: PathBuf,
    pub guest_path: PathBuf,
    pub output_template: PathBuf,
    pub num_outputs: usize,
    pub core_config: DockingConfig,
}

pub struct SampleAppConfig {
    pub host_path: PathBuf,
    pub output_path: PathBuf,
    pub sampler: SamplerConfig,
    pub constraint: SiteConstraint,
}
