//! Simulation engine — derives effective device and temperature state.
//!
//! The engine is a pure function over a layout and a parameter snapshot: it
//! clones the caller's layout and mutates the clone, so the persisted layout
//! is only ever changed when the caller commits the result. The algorithm,
//! in order:
//!
//! 1. classify the simulated date into a [`Season`],
//! 2. drive every auto-on light from the time-of-day lighting window
//!    (wrapping past midnight when configured that way), only while the
//!    simulation is running,
//! 3. force auto-driven lights off while away mode is active,
//! 4. propagate each zone's desired temperature into its member rooms,
//!    skipping rooms whose temperature override flag is set.
//!
//! Lights without the auto-on capability are never touched.

use domo_domain::layout::HouseLayout;
use domo_domain::parameters::{Season, SimulationParameters};

/// The result of one engine pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The derived layout: same structure as the input, with effective
    /// device and temperature state applied.
    pub layout: HouseLayout,
    /// Season classification of the simulated date.
    pub season: Season,
}

/// Evaluate the parameters against a layout, leaving the input untouched.
#[must_use]
pub fn evaluate(layout: &HouseLayout, parameters: &SimulationParameters) -> Evaluation {
    let mut derived = layout.clone();
    let season = apply(&mut derived, parameters);
    Evaluation {
        layout: derived,
        season,
    }
}

/// Apply the derivation in place, for callers that already hold a working
/// copy. Returns the season classification.
pub fn apply(layout: &mut HouseLayout, parameters: &SimulationParameters) -> Season {
    let season = parameters.season();
    tracing::debug!(
        ?season,
        away_mode = parameters.away_mode,
        running = parameters.is_running(),
        "evaluating simulation parameters"
    );
    apply_auto_lighting(layout, parameters);
    propagate_zone_temperatures(layout);
    season
}

fn apply_auto_lighting(layout: &mut HouseLayout, parameters: &SimulationParameters) {
    let lit = parameters.is_running()
        && !parameters.away_mode
        && parameters.lights_window_contains(parameters.time);

    for room in layout.rooms_mut() {
        for device in room.devices_mut() {
            if let Some(light) = device.as_light_mut()
                && light.auto_on
            {
                light.is_opened = lit;
            }
        }
    }
    tracing::debug!(lit, "auto-lighting applied");
}

fn propagate_zone_temperatures(layout: &mut HouseLayout) {
    let zones: Vec<(f64, Vec<String>)> = layout
        .heating_zones()
        .iter()
        .map(|zone| (zone.desired_temperature(), zone.room_names().to_vec()))
        .collect();

    for (temperature, room_names) in zones {
        for name in room_names {
            if let Some(room) = layout.room_mut(&name)
                && !room.is_temperature_overridden()
            {
                room.set_desired_temperature(temperature);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use domo_domain::device::{Device, Light};
    use domo_domain::geometry::Geometry;
    use domo_domain::parameters::SimulationStatus;
    use domo_domain::room::Room;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn auto_light() -> Device {
        let mut light = Light::new(Geometry::at(1, 1));
        light.auto_on = true;
        Device::Light(light)
    }

    fn layout_with_light(device: Device) -> HouseLayout {
        let mut layout = HouseLayout::new("Home").unwrap();
        let mut room = Room::builder()
            .name("Kitchen")
            .geometry(Geometry::new(0, 0, 10, 10))
            .build()
            .unwrap();
        room.add_device(device);
        layout.add_room(room).unwrap();
        layout
    }

    fn night_params() -> SimulationParameters {
        SimulationParameters::builder()
            .status(SimulationStatus::Running)
            .time(time(23, 0))
            .lights_window(time(18, 0), time(6, 0))
            .build()
    }

    #[test]
    fn should_turn_auto_light_on_inside_wrapping_window() {
        let layout = layout_with_light(auto_light());
        let derived = evaluate(&layout, &night_params()).layout;
        assert!(derived.room("Kitchen").unwrap().devices()[0].is_opened());
    }

    #[test]
    fn should_turn_auto_light_off_outside_window() {
        let layout = layout_with_light(auto_light());
        let mut params = night_params();
        params.time = time(12, 0);

        let derived = evaluate(&layout, &params).layout;
        assert!(!derived.room("Kitchen").unwrap().devices()[0].is_opened());
    }

    #[test]
    fn should_force_auto_light_off_in_away_mode() {
        let layout = layout_with_light(auto_light());
        let mut params = night_params();
        params.away_mode = true;

        let derived = evaluate(&layout, &params).layout;
        assert!(!derived.room("Kitchen").unwrap().devices()[0].is_opened());
    }

    #[test]
    fn should_keep_auto_light_off_while_simulation_is_stopped() {
        let layout = layout_with_light(auto_light());
        let mut params = night_params();
        params.status = SimulationStatus::Stopped;

        let derived = evaluate(&layout, &params).layout;
        assert!(!derived.room("Kitchen").unwrap().devices()[0].is_opened());
    }

    #[test]
    fn should_leave_manual_light_untouched() {
        let mut manual = Light::new(Geometry::at(1, 1));
        manual.is_opened = true; // turned on by the user
        let layout = layout_with_light(Device::Light(manual));

        let mut params = night_params();
        params.away_mode = true;

        let derived = evaluate(&layout, &params).layout;
        assert!(derived.room("Kitchen").unwrap().devices()[0].is_opened());
    }

    #[test]
    fn should_propagate_zone_temperature_to_member_rooms() {
        let mut layout = layout_with_light(auto_light());
        layout.add_heating_zone("First Floor").unwrap();
        layout.move_room("Kitchen", "First Floor", false).unwrap();
        layout
            .heating_zone_mut("First Floor")
            .unwrap()
            .set_desired_temperature(23.5);

        let derived = evaluate(&layout, &night_params()).layout;
        let kitchen = derived.room("Kitchen").unwrap();
        assert!((kitchen.desired_temperature() - 23.5).abs() < f64::EPSILON);
    }

    #[test]
    fn should_keep_overridden_room_temperature() {
        let mut layout = layout_with_light(auto_light());
        layout.add_heating_zone("First Floor").unwrap();
        layout.move_room("Kitchen", "First Floor", false).unwrap();
        layout
            .heating_zone_mut("First Floor")
            .unwrap()
            .set_desired_temperature(23.5);
        let kitchen = layout.room_mut("Kitchen").unwrap();
        kitchen.set_temperature_overridden(true);
        kitchen.set_desired_temperature(17.0);

        let derived = evaluate(&layout, &night_params()).layout;
        let kitchen = derived.room("Kitchen").unwrap();
        assert!((kitchen.desired_temperature() - 17.0).abs() < f64::EPSILON);
        // the engine never clears the flag
        assert!(kitchen.is_temperature_overridden());
    }

    #[test]
    fn should_never_mutate_the_callers_layout() {
        let layout = layout_with_light(auto_light());
        let snapshot = layout.clone();

        let _ = evaluate(&layout, &night_params());
        assert_eq!(layout, snapshot);
    }

    #[test]
    fn should_report_season_classification() {
        let layout = layout_with_light(auto_light());
        let mut params = night_params();
        params.date = chrono::NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        params.winter_start = 335;
        params.winter_end = 59;

        let evaluation = evaluate(&layout, &params);
        assert_eq!(evaluation.season, Season::Winter);
    }
}
