use crate::framework::{Console, Showcase, ShowcaseError, ShowcaseKind};
use super::ShowcaseConfig;
use tracing::{error, info, info_span, warn};

/// The main orchestrator for the principle showcases.
///
/// `SolidShowcase` is responsible for:
/// - **Wiring**: Collecting the violation and refactored scripts of every principle module
/// - **Selection**: Running only what the [`ShowcaseConfig`] asks for, in its order
/// - **Reporting**: Treating a failing violation as the demonstrated defect,
///   and a failing refactored script as a bug
///
/// # Example
///
/// ```
/// use solid_recipe::framework::mock::Transcript;
/// use solid_recipe::lifecycle::{ShowcaseConfig, SolidShowcase};
/// use solid_recipe::model::Principle;
///
/// let config = ShowcaseConfig {
///     principles: vec![Principle::OpenClosed],
///     include_violations: false,
/// };
/// let out = Transcript::new();
/// let report = SolidShowcase::new(config).run(&out).unwrap();
///
/// assert_eq!(report.completed, vec!["Open/Closed (refactored)"]);
/// assert_eq!(out.lines()[0], "Regular Discount: 50");
/// ```
pub struct SolidShowcase {
    config: ShowcaseConfig,
    showcases: Vec<Box<dyn Showcase>>,
}

/// Outcome of a [`SolidShowcase::run`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ShowcaseReport {
    /// Titles of the scripts that ran to completion, in run order.
    pub completed: Vec<&'static str>,
    /// Violation scripts that failed, with their error message.
    pub violations: Vec<(&'static str, String)>,
}

impl SolidShowcase {
    /// Creates the runner with the showcases of all five principle modules.
    pub fn new(config: ShowcaseConfig) -> Self {
        let showcases = [
            crate::single_responsibility::showcases(),
            crate::open_closed::showcases(),
            crate::liskov::showcases(),
            crate::interface_segregation::showcases(),
            crate::dependency_inversion::showcases(),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::with_showcases(config, showcases)
    }

    /// Creates the runner over an explicit set of showcases.
    pub fn with_showcases(config: ShowcaseConfig, showcases: Vec<Box<dyn Showcase>>) -> Self {
        Self { config, showcases }
    }

    pub fn config(&self) -> &ShowcaseConfig {
        &self.config
    }

    /// The showcases that [`run`](Self::run) will execute, in order.
    ///
    /// Follows the configured principle order; within a principle, the
    /// violation comes before the refactored script.
    pub fn selected(&self) -> Vec<&dyn Showcase> {
        let kinds: &[ShowcaseKind] = if self.config.include_violations {
            &[ShowcaseKind::Violation, ShowcaseKind::Refactored]
        } else {
            &[ShowcaseKind::Refactored]
        };

        let mut selected = Vec::new();
        for principle in &self.config.principles {
            for kind in kinds {
                selected.extend(
                    self.showcases
                        .iter()
                        .map(|showcase| showcase.as_ref())
                        .filter(|showcase| showcase.principle() == *principle && showcase.kind() == *kind),
                );
            }
        }
        selected
    }

    /// Runs every selected showcase. Only the scripts write to `out`; progress
    /// and failures go to `tracing`.
    ///
    /// # Returns
    ///
    /// - `Ok(report)` when every refactored script succeeded
    /// - `Err(ShowcaseError::Unexpected)` on the first refactored script that failed
    pub fn run(&self, out: &dyn Console) -> Result<ShowcaseReport, ShowcaseError> {
        let mut report = ShowcaseReport::default();

        for showcase in self.selected() {
            let title = showcase.title();
            let span = info_span!("showcase", principle = %showcase.principle(), kind = %showcase.kind());
            let _enter = span.enter();

            info!(title, statement = showcase.principle().statement(), "Running");

            match showcase.run(out) {
                Ok(()) => {
                    info!(title, "Completed");
                    report.completed.push(title);
                }
                Err(e) if showcase.kind() == ShowcaseKind::Violation => {
                    warn!(title, error = %e, "Violation failed as demonstrated");
                    report.violations.push((title, e.to_string()));
                }
                Err(e) => {
                    error!(title, error = %e, "Refactored showcase failed");
                    return Err(ShowcaseError::Unexpected {
                        title,
                        source: Box::new(e),
                    });
                }
            }
        }

        info!(
            completed = report.completed.len(),
            violations = report.violations.len(),
            "All showcases finished"
        );
        Ok(report)
    }
}
