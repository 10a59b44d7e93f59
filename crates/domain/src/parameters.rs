//! Simulation parameters — the environmental snapshot fed to the engine.
//!
//! A [`SimulationParameters`] value is produced by the editing surface,
//! consumed once per engine evaluation, and never stored inside the layout.
//! Numeric and time fields are assumed well-formed; input validation is the
//! caller's job, the domain only deals in typed values.

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Whether the simulation clock is ticking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulationStatus {
    Running,
    #[default]
    Stopped,
}

/// Season classification of a simulated date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Summer,
}

/// Snapshot of the simulation context at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationParameters {
    pub status: SimulationStatus,
    /// Forces automated devices into their unoccupied-house state.
    pub away_mode: bool,
    /// Seconds before the authorities are called after an away-mode breach.
    pub call_timer: u32,
    /// Ambient outdoor temperature (°C).
    pub temperature: i32,
    /// Simulated calendar date.
    pub date: NaiveDate,
    /// Simulated time of day.
    pub time: NaiveTime,
    /// First day-of-year of winter; may be later than `winter_end` when the
    /// season spans New Year's Day.
    pub winter_start: u32,
    pub winter_end: u32,
    pub summer_start: u32,
    pub summer_end: u32,
    /// Start of the window in which auto-on lights may turn on; the window
    /// wraps past midnight when it is later than `max_lights_time`.
    pub min_lights_time: NaiveTime,
    pub max_lights_time: NaiveTime,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            status: SimulationStatus::default(),
            away_mode: false,
            call_timer: 0,
            temperature: 20,
            date: NaiveDate::default(),
            time: NaiveTime::default(),
            // Dec 1 – Mar 1 and Jun 1 – Aug 31, matching the presets the
            // dashboard offers before the user edits them.
            winter_start: 335,
            winter_end: 59,
            summer_start: 152,
            summer_end: 243,
            min_lights_time: NaiveTime::MIN,
            max_lights_time: NaiveTime::MIN,
        }
    }
}

impl SimulationParameters {
    /// Create a builder for constructing [`SimulationParameters`].
    #[must_use]
    pub fn builder() -> SimulationParametersBuilder {
        SimulationParametersBuilder::default()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == SimulationStatus::Running
    }

    /// Classify the simulated date against the configured season ranges.
    ///
    /// Both ranges may wrap across the year boundary (`start > end` means
    /// the range spans New Year's Day). Dates that fall outside the winter
    /// range — including the shoulder seasons between the two ranges — are
    /// classified as [`Season::Summer`].
    #[must_use]
    pub fn season(&self) -> Season {
        let day = self.date.ordinal();
        if day_in_wrapping_range(day, self.winter_start, self.winter_end) {
            Season::Winter
        } else {
            Season::Summer
        }
    }

    /// Whether `time` falls inside the auto-lighting window, bounds
    /// included. A window whose start is later than its end wraps past
    /// midnight.
    #[must_use]
    pub fn lights_window_contains(&self, time: NaiveTime) -> bool {
        if self.min_lights_time <= self.max_lights_time {
            time >= self.min_lights_time && time <= self.max_lights_time
        } else {
            time >= self.min_lights_time || time <= self.max_lights_time
        }
    }
}

/// Inclusive day-of-year range test with New Year wrap-around.
fn day_in_wrapping_range(day: u32, start: u32, end: u32) -> bool {
    if start <= end {
        day >= start && day <= end
    } else {
        day >= start || day <= end
    }
}

/// Step-by-step builder for [`SimulationParameters`].
#[derive(Debug, Default)]
pub struct SimulationParametersBuilder {
    parameters: SimulationParameters,
}

impl SimulationParametersBuilder {
    #[must_use]
    pub fn status(mut self, status: SimulationStatus) -> Self {
        self.parameters.status = status;
        self
    }

    #[must_use]
    pub fn away_mode(mut self, away_mode: bool) -> Self {
        self.parameters.away_mode = away_mode;
        self
    }

    #[must_use]
    pub fn call_timer(mut self, seconds: u32) -> Self {
        self.parameters.call_timer = seconds;
        self
    }

    #[must_use]
    pub fn temperature(mut self, celsius: i32) -> Self {
        self.parameters.temperature = celsius;
        self
    }

    #[must_use]
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.parameters.date = date;
        self
    }

    #[must_use]
    pub fn time(mut self, time: NaiveTime) -> Self {
        self.parameters.time = time;
        self
    }

    #[must_use]
    pub fn winter(mut self, start: u32, end: u32) -> Self {
        self.parameters.winter_start = start;
        self.parameters.winter_end = end;
        self
    }

    #[must_use]
    pub fn summer(mut self, start: u32, end: u32) -> Self {
        self.parameters.summer_start = start;
        self.parameters.summer_end = end;
        self
    }

    #[must_use]
    pub fn lights_window(mut self, min: NaiveTime, max: NaiveTime) -> Self {
        self.parameters.min_lights_time = min;
        self.parameters.max_lights_time = max;
        self
    }

    /// Consume the builder and return the parameter snapshot.
    #[must_use]
    pub fn build(self) -> SimulationParameters {
        self.parameters
    }
}
