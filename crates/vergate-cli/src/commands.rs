//! Command implementations.

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;
use std::cmp::Ordering;
use std::process::ExitCode;
use tracing::{debug, info};
use vergate_core::{Feature, Version, VersionGate};

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the detected platform version.
    Show,

    /// List every feature with its required version and availability.
    Features {
        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Fail if a feature is not available on the detected version.
    Check {
        /// Feature name, e.g. `outline-xml-export`.
        feature: Feature,
    },

    /// Exit 0 if the detected version is at least VERSION, 1 otherwise.
    AtLeast {
        /// Threshold version.
        version: Version,
    },

    /// Compare two versions with zero-padded ordering.
    Compare {
        /// Left-hand version.
        left: Version,
        /// Right-hand version.
        right: Version,
    },
}

/// One row of `features` output.
#[derive(Debug, Serialize)]
struct FeatureReport {
    feature: Feature,
    description: &'static str,
    required: Version,
    supported: bool,
}

/// Result of a command that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Exit 0.
    Pass,
    /// Exit 1 without an error message.
    Fail,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Pass => ExitCode::SUCCESS,
            Status::Fail => ExitCode::FAILURE,
        }
    }
}

/// Run a command against the detected platform version.
///
/// # Errors
///
/// Returns an error if `check` finds the feature unsupported or output cannot
/// be serialized.
pub fn run(command: Command, gate: VersionGate<'_>) -> Result<Status> {
    match command {
        Command::Show => {
            let version = gate.version();
            println!("{version}");
            if version.to_text_string() != version.to_string() {
                println!("{} (as reported)", version.to_text_string());
            }
            Ok(Status::Pass)
        }
        Command::Features { json } => {
            let reports: Vec<FeatureReport> = Feature::ALL
                .into_iter()
                .map(|feature| FeatureReport {
                    feature,
                    description: feature.description(),
                    required: feature.required_version().clone(),
                    supported: gate.supports(feature),
                })
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                for report in &reports {
                    println!(
                        "{:<20} {:<12} {}",
                        report.feature.name(),
                        report.required.to_string(),
                        if report.supported { "supported" } else { "unsupported" }
                    );
                }
            }
            Ok(Status::Pass)
        }
        Command::Check { feature } => {
            gate.require(feature)?;
            info!(feature = feature.name(), "Feature available");
            Ok(Status::Pass)
        }
        Command::AtLeast { version } => {
            let at_least = gate.is_at_least(&version);
            debug!(current = %gate.version(), threshold = %version, at_least, "Threshold check");
            Ok(if at_least { Status::Pass } else { Status::Fail })
        }
        Command::Compare { left, right } => Ok(compare(&left, &right)),
    }
}

/// Print how `left` orders against `right`.
pub fn compare(left: &Version, right: &Version) -> Status {
    println!("{}", describe_ordering(left.compare(right)));
    Status::Pass
}

fn describe_ordering(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(text: &str) -> Version {
        Version::parse(text).unwrap()
    }

    #[test]
    fn test_describe_ordering() {
        assert_eq!(describe_ordering(v("11").compare(&v("11.0.0"))), "equal");
        assert_eq!(describe_ordering(v("11.1.2.4").compare(&v("12"))), "less");
        assert_eq!(describe_ordering(v("12").compare(&v("9"))), "greater");
    }

    #[test]
    fn test_compare_passes() {
        assert_eq!(compare(&v("11"), &v("12")), Status::Pass);
    }

    #[test]
    fn test_check_unsupported_fails() {
        let current = v("11.1.1");
        let err = run(
            Command::Check {
                feature: Feature::UrlDrillThrough,
            },
            VersionGate::new(&current),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Version 11.1.1 does not support URL-based drill-through, this feature is available in 11.1.1.3"
        );
    }

    #[test]
    fn test_check_supported_succeeds() {
        let current = v("11.1.2");
        let code = run(
            Command::Check {
                feature: Feature::OutlineXmlExport,
            },
            VersionGate::new(&current),
        )
        .unwrap();
        assert_eq!(code, Status::Pass);
    }

    #[test]
    fn test_at_least_exit_code() {
        let current = v("11.1.1");
        let gate = VersionGate::new(&current);
        let pass = run(Command::AtLeast { version: v("11") }, gate).unwrap();
        let fail = run(Command::AtLeast { version: v("12") }, gate).unwrap();
        assert_eq!(pass, Status::Pass);
        assert_eq!(fail, Status::Fail);
    }

    #[test]
    fn test_feature_report_json() {
        let report = FeatureReport {
            feature: Feature::OutlineXmlExport,
            description: Feature::OutlineXmlExport.description(),
            required: Feature::OutlineXmlExport.required_version().clone(),
            supported: false,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["feature"], "outline-xml-export");
        assert_eq!(json["required"], "11.1.2");
        assert_eq!(json["supported"], false);
    }
}
