use std::time::Duration;

use clap::ArgGroup;
use pv_restart_matcher::ConfigError;
use pv_restart_matcher::FilterConfig;

use super::*;

/// Find pods whose volume claims are bound to matching persistent volumes,
/// and optionally delete them so their controllers restart them.
#[derive(Clone, Debug, clap::Parser)]
#[command(name = "pv-restart", version)]
#[command(group(
    ArgGroup::new("filter")
        .required(true)
        .multiple(true)
        .args(["name", "types"])
))]
pub(crate) struct Args {
    /// Annotation that opts a pod out when set to a non-empty value.
    #[arg(short, long, env = "PV_RESTART_ANNOTATION", default_value = k8s::SKIP_ANNOTATION)]
    pub(crate) annotation: String,

    /// Ignore the opt-out annotation.
    #[arg(short = 'A', long)]
    pub(crate) all: bool,

    /// Regular expression searched for in volume names.
    #[arg(short, long, value_name = "REGEX")]
    pub(crate) name: Option<String>,

    /// Storage type to match, e.g. `nfs`, `glusterfs` or `csi`.  Repeat the
    /// flag or separate types with commas.
    #[arg(short = 't', long = "type", value_name = "TYPE", value_delimiter = ',')]
    pub(crate) types: Vec<String>,

    /// Delete matched pods.  Without this only matches are reported.
    #[arg(short, long)]
    pub(crate) delete: bool,

    /// Grace period for deleted pods, e.g. `30s` or `2m`.
    #[arg(long, value_name = "DURATION", value_parser = parse_grace_period)]
    pub(crate) grace_period: Option<u32>,

    /// Debug logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl Args {
    pub(crate) fn filter(&self) -> Result<FilterConfig, ConfigError> {
        let opt_out = (!self.all).then(|| self.annotation.clone());
        FilterConfig::new(opt_out, self.name.as_deref(), self.types.iter().cloned())
    }
}

/// Parses a Go duration into whole seconds.
fn parse_grace_period(text: &str) -> Result<u32, String> {
    let nanos = go_parse_duration::parse_duration(text)
        .map_err(|err| format!("invalid duration {text:?}: {err:?}"))?;
    let nanos = u64::try_from(nanos).map_err(|_| "grace period must not be negative".to_string())?;
    let seconds = Duration::from_nanos(nanos).as_secs();
    u32::try_from(seconds).map_err(|err| err.to_string())
}
