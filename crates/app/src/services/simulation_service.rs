//! Simulation service — runs the engine and renders the occupant roster.

use domo_domain::error::DomoError;
use domo_domain::layout::HouseLayout;
use domo_domain::log::{LogEntry, LogImportance};
use domo_domain::parameters::SimulationParameters;

use crate::ports::{ActivityLog, UserDirectory};
use crate::simulation::{self, Evaluation};

/// Component tag used for activity-log entries from this service.
const COMPONENT: &str = "Simulation";

/// Application service wrapping the pure simulation engine with logging
/// and current-user awareness.
pub struct SimulationService<L, U> {
    log: L,
    users: U,
}

impl<L: ActivityLog, U: UserDirectory> SimulationService<L, U> {
    /// Create a new service backed by the given log and user directory.
    pub fn new(log: L, users: U) -> Self {
        Self { log, users }
    }

    /// Run one engine pass over `layout` and log the outcome.
    ///
    /// The input layout is never mutated; the caller decides whether to
    /// commit the derived layout.
    pub async fn run(
        &self,
        layout: &HouseLayout,
        parameters: &SimulationParameters,
    ) -> Evaluation {
        let evaluation = simulation::evaluate(layout, parameters);

        let lights_on = evaluation
            .layout
            .rooms()
            .iter()
            .flat_map(|room| room.devices())
            .filter(|device| device.is_auto_capable() && device.is_opened())
            .count();
        let message = if parameters.away_mode {
            format!(
                "Evaluated {:?} conditions with away mode on; all automatic lights are off",
                evaluation.season
            )
        } else {
            format!(
                "Evaluated {:?} conditions; {lights_on} automatic light(s) on",
                evaluation.season
            )
        };
        let _ = self
            .log
            .append(LogEntry::new(COMPONENT, message, LogImportance::Minor))
            .await;

        evaluation
    }

    /// Render the house-wide occupant list, in room order then insertion
    /// order, tagging the current user as "(you)" and flagging intruders.
    ///
    /// # Errors
    ///
    /// Propagates the user-directory lookup failure.
    pub async fn roster(&self, layout: &HouseLayout) -> Result<Vec<String>, DomoError> {
        let username = self.users.current_username().await?;
        let roster = layout
            .all_inhabitants()
            .into_iter()
            .map(|inhabitant| {
                let mut label = inhabitant.name().to_string();
                if inhabitant.name() == username {
                    label.push_str(" (you)");
                }
                if inhabitant.is_intruder {
                    label.push_str(" (intruder)");
                }
                label
            })
            .collect();
        Ok(roster)
    }
}
