//! Scenario runner that drives a headless view host.

use anyhow::{Context, Result};
use serde::Serialize;
use vellum_core::{Configuration, EditorOptions, LayoutInfo, ScrollEvent, ViewEvent};
use vellum_view::{NodeSnapshot, ScrollDecoration, ViewHost};

use crate::scenario::{Scenario, ScenarioStep};

/// State observed after a `render` step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameRecord {
    pub frame: u64,
    pub commits: usize,
    pub decoration: NodeSnapshot,
}

/// Replay `scenario` against a fresh host holding one scroll decoration.
///
/// Stops at the first failing frame and returns its error.
pub fn run_scenario(scenario: &Scenario, options: EditorOptions) -> Result<Vec<FrameRecord>> {
    let mut host = ViewHost::new(Configuration::shared(options));
    let decoration = host.register(Box::new(ScrollDecoration::new(host.configuration())));
    let mut records = Vec::new();

    for (step_index, step) in scenario.steps.iter().enumerate() {
        match *step {
            ScenarioStep::Scroll { top } => {
                host.emit(ViewEvent::ScrollChanged(ScrollEvent::vertical(top)));
            }
            ScenarioStep::Layout { width, height } => {
                host.emit(ViewEvent::LayoutChanged(LayoutInfo::new(width, height)));
            }
            ScenarioStep::Configure { use_shadows } => {
                let mut options = host.configuration().options();
                options.scrollbar.use_shadows = use_shadows;
                host.update_options(options);
            }
            ScenarioStep::Render => {
                let report = host
                    .render_frame()
                    .with_context(|| format!("frame failed at step {step_index}"))?;
                let node = host
                    .part(decoration)
                    .context("scroll decoration is no longer registered")?
                    .presentation_node();

                tracing::debug!(frame = report.frame, commits = report.commit_count(), "replayed frame");
                records.push(FrameRecord {
                    frame: report.frame,
                    commits: report.commit_count(),
                    decoration: node.snapshot(),
                });
            }
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(steps: Vec<ScenarioStep>) -> Scenario {
        Scenario { steps }
    }

    #[test]
    fn test_replay_shows_and_hides_shadow() {
        let records = run_scenario(
            &scenario(vec![
                ScenarioStep::Layout {
                    width: 800.0,
                    height: 600.0,
                },
                ScenarioStep::Scroll { top: 42.0 },
                ScenarioStep::Render,
                ScenarioStep::Configure { use_shadows: false },
                ScenarioStep::Render,
                ScenarioStep::Render,
            ]),
            EditorOptions::default(),
        )
        .unwrap();

        assert_eq!(records.len(), 3);

        assert_eq!(records[0].commits, 1);
        assert_eq!(records[0].decoration.width, Some(800.0));
        assert_eq!(records[0].decoration.classes, vec!["scroll-decoration"]);

        assert_eq!(records[1].commits, 1);
        assert!(records[1].decoration.classes.is_empty());

        assert_eq!(records[2].frame, 3);
        assert_eq!(records[2].commits, 0);
        assert_eq!(records[2].decoration, records[1].decoration);
    }

    #[test]
    fn test_replay_respects_initial_options() {
        let mut options = EditorOptions::default();
        options.scrollbar.use_shadows = false;

        let records = run_scenario(
            &scenario(vec![ScenarioStep::Scroll { top: 50.0 }, ScenarioStep::Render]),
            options,
        )
        .unwrap();

        assert_eq!(records[0].commits, 0);
        assert_eq!(records[0].decoration.width, None);
        assert!(records[0].decoration.attached);
    }

    #[test]
    fn test_record_serializes_snapshot() {
        let records = run_scenario(
            &scenario(vec![
                ScenarioStep::Layout {
                    width: 10.0,
                    height: 0.0,
                },
                ScenarioStep::Render,
            ]),
            EditorOptions::default(),
        )
        .unwrap();

        let value = serde_json::to_value(&records[0]).unwrap();
        assert_eq!(value["frame"], serde_json::json!(1));
        assert_eq!(value["decoration"]["tag"], serde_json::json!("div"));
        assert_eq!(value["decoration"]["width"], serde_json::json!(10.0));
    }
}
