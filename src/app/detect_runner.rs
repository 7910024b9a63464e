//! Wires the config and layout ports to the detector.
//!
//! Config precedence, lowest first: built-in defaults, the user's config
//! file, the snapshot's own `config` table, then command-line overrides.

use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::app::overflow::detect;
use crate::app::ports::{ConfigSource, ConfigSourceError, LayoutSource, LayoutSourceError};
use crate::domain::{ConfigError, OverflowConfig, OverflowConfigPatch, OverflowPartition};

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigSourceError),
    #[error(transparent)]
    Layout(#[from] LayoutSourceError),
    #[error("Invalid effective config: {0}")]
    Invalid(#[from] ConfigError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Outcome of one detection run, with the config that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectReport {
    pub config: OverflowConfig,
    pub item_count: usize,
    #[serde(flatten)]
    pub partition: OverflowPartition,
}

impl DetectReport {
    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(self),
            OutputFormat::Text => {
                let mut out = String::new();
                let _ = writeln!(out, "items: {}", self.item_count);
                let _ = writeln!(out, "visible: {:?}", self.partition.visible_indices);
                let _ = writeln!(out, "hidden: {:?}", self.partition.hidden_indices);
                let _ = write!(out, "needs_overflow: {}", self.partition.needs_overflow);
                Ok(out)
            }
        }
    }
}

pub struct DetectRunner {
    config_source: Arc<dyn ConfigSource>,
    layout_source: Arc<dyn LayoutSource>,
}

impl DetectRunner {
    pub fn new(
        config_source: Arc<dyn ConfigSource>,
        layout_source: Arc<dyn LayoutSource>,
    ) -> Self {
        Self {
            config_source,
            layout_source,
        }
    }

    /// User defaults with `overrides` applied, validated.
    pub fn effective_config(
        &self,
        overrides: &OverflowConfigPatch,
    ) -> Result<OverflowConfig, RunError> {
        let config = self.config_source.load()?.merged(overrides);
        config.validate()?;
        Ok(config)
    }

    pub fn run(&self, path: &Path, overrides: &OverflowConfigPatch) -> Result<DetectReport, RunError> {
        let snapshot = self.layout_source.load(path)?;
        let config = self
            .config_source
            .load()?
            .merged(&snapshot.config)
            .merged(overrides);
        config.validate()?;

        let partition = detect(snapshot.container.as_ref(), &snapshot.items, &config);
        tracing::info!(
            path = %path.display(),
            visible = partition.visible_count(),
            hidden = partition.hidden_count(),
            needs_overflow = partition.needs_overflow,
            "detection finished"
        );

        Ok(DetectReport {
            config,
            item_count: snapshot.items.len(),
            partition,
        })
    }

    /// Persists the user defaults with `overrides` applied and returns them.
    pub fn save_defaults(&self, overrides: &OverflowConfigPatch) -> Result<OverflowConfig, RunError> {
        let config = self.effective_config(overrides)?;
        self.config_source.save(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::app::ports::config_source::MockConfigSource;
    use crate::app::ports::layout_source::MockLayoutSource;
    use crate::domain::{BoxMetrics, LayoutSnapshot};

    fn snapshot(container: f64, widths: &[f64], config: OverflowConfigPatch) -> LayoutSnapshot {
        LayoutSnapshot {
            container: Some(BoxMetrics::new(container)),
            items: widths.iter().map(|&w| Some(BoxMetrics::new(w))).collect(),
            config,
        }
    }

    fn config_source_returning(config: OverflowConfig) -> MockConfigSource {
        let mut source = MockConfigSource::new();
        source.expect_load().returning(move || Ok(config));
        source
    }

    fn layout_source_returning(snapshot: LayoutSnapshot) -> MockLayoutSource {
        let mut source = MockLayoutSource::new();
        source
            .expect_load()
            .withf(|path| path == Path::new("nav.json"))
            .returning(move |_| Ok(snapshot.clone()));
        source
    }

    mod run {
        use super::*;

        #[test]
        fn snapshot_config_overrides_user_defaults() {
            let defaults = OverflowConfig {
                gap: 50.0,
                ..OverflowConfig::default()
            };
            let patch = OverflowConfigPatch {
                gap: Some(0.0),
                ..OverflowConfigPatch::default()
            };
            let runner = DetectRunner::new(
                Arc::new(config_source_returning(defaults)),
                Arc::new(layout_source_returning(snapshot(500.0, &[100.0; 5], patch))),
            );

            let report = runner
                .run(Path::new("nav.json"), &OverflowConfigPatch::default())
                .unwrap();

            assert_eq!(report.config.gap, 0.0);
            assert_eq!(report.partition, OverflowPartition::all_visible(5));
        }

        #[test]
        fn flags_override_snapshot_config() {
            let patch = OverflowConfigPatch {
                gap: Some(0.0),
                ..OverflowConfigPatch::default()
            };
            let flags = OverflowConfigPatch {
                min_visible_items: Some(3),
                ..OverflowConfigPatch::default()
            };
            let runner = DetectRunner::new(
                Arc::new(config_source_returning(OverflowConfig::default())),
                Arc::new(layout_source_returning(snapshot(50.0, &[100.0; 5], patch))),
            );

            let report = runner.run(Path::new("nav.json"), &flags).unwrap();

            assert_eq!(report.partition.visible_indices, vec![0, 1, 2]);
            assert_eq!(report.item_count, 5);
        }

        #[test]
        fn rejects_invalid_merged_config() {
            let flags = OverflowConfigPatch {
                padding: Some(-1.0),
                ..OverflowConfigPatch::default()
            };
            let runner = DetectRunner::new(
                Arc::new(config_source_returning(OverflowConfig::default())),
                Arc::new(layout_source_returning(snapshot(
                    100.0,
                    &[10.0],
                    OverflowConfigPatch::default(),
                ))),
            );

            let result = runner.run(Path::new("nav.json"), &flags);

            assert!(matches!(result, Err(RunError::Invalid(_))));
        }

        #[test]
        fn propagates_layout_errors() {
            let mut layout_source = MockLayoutSource::new();
            layout_source
                .expect_load()
                .returning(|path| Err(LayoutSourceError::UnsupportedFormat(path.display().to_string())));
            let mut config_source = MockConfigSource::new();
            config_source.expect_load().never();
            let runner = DetectRunner::new(Arc::new(config_source), Arc::new(layout_source));

            let result = runner.run(&PathBuf::from("nav.yaml"), &OverflowConfigPatch::default());

            assert!(matches!(result, Err(RunError::Layout(_))));
        }
    }

    mod save_defaults {
        use super::*;

        #[test]
        fn saves_merged_config() {
            let mut config_source = MockConfigSource::new();
            config_source
                .expect_load()
                .returning(|| Ok(OverflowConfig::default()));
            config_source
                .expect_save()
                .withf(|config| config.overflow_button_width == 24.0)
                .times(1)
                .returning(|_| Ok(()));
            let runner = DetectRunner::new(
                Arc::new(config_source),
                Arc::new(MockLayoutSource::new()),
            );
            let flags = OverflowConfigPatch {
                overflow_button_width: Some(24.0),
                ..OverflowConfigPatch::default()
            };

            let saved = runner.save_defaults(&flags).unwrap();

            assert_eq!(saved.overflow_button_width, 24.0);
        }

        #[test]
        fn does_not_save_invalid_config() {
            let mut config_source = MockConfigSource::new();
            config_source
                .expect_load()
                .returning(|| Ok(OverflowConfig::default()));
            config_source.expect_save().never();
            let runner = DetectRunner::new(
                Arc::new(config_source),
                Arc::new(MockLayoutSource::new()),
            );
            let flags = OverflowConfigPatch {
                gap: Some(f64::NAN),
                ..OverflowConfigPatch::default()
            };

            let result = runner.save_defaults(&flags);

            assert!(matches!(result, Err(RunError::Invalid(_))));
        }
    }

    mod report {
        use super::*;

        fn report() -> DetectReport {
            DetectReport {
                config: OverflowConfig::default(),
                item_count: 3,
                partition: OverflowPartition {
                    visible_indices: vec![0, 1],
                    hidden_indices: vec![2],
                    needs_overflow: true,
                },
            }
        }

        #[test]
        fn text_lists_indices() {
            let text = report().render(OutputFormat::Text).unwrap();

            assert_eq!(
                text,
                "items: 3\nvisible: [0, 1]\nhidden: [2]\nneeds_overflow: true"
            );
        }

        #[test]
        fn json_flattens_partition() {
            let json = report().render(OutputFormat::Json).unwrap();
            let value: serde_json::Value = serde_json::from_str(&json).unwrap();

            assert_eq!(value["visible_indices"], serde_json::json!([0, 1]));
            assert_eq!(value["needs_overflow"], serde_json::json!(true));
            assert_eq!(value["config"]["gap"], serde_json::json!(16.0));
        }

        #[test]
        fn json_stays_parseable_with_non_finite_config() {
            let mut report = report();
            report.config.gap = f64::NAN;

            let json = report.render(OutputFormat::Json).unwrap();
            let value: serde_json::Value = serde_json::from_str(&json).unwrap();

            assert!(value["config"]["gap"].is_null());
            assert_eq!(value["hidden_indices"], serde_json::json!([2]));
        }
    }
}
