use std::time::Duration;

use crate::config::{base_interval_ms, MIN_TICK_INTERVAL_MS, POINTS_PER_SPEED_STEP, SPEED_STEP_MS};

/// Maps cumulative score to the current tick interval.
///
/// The ramp starts at the base interval of the chosen initial speed level
/// and loses a fixed step every 20 points, floored at the minimum
/// interval. Within a session the interval only ever decreases.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SpeedRamp {
    initial_level: u8,
    base_ms: u64,
    current_ms: u64,
}

impl SpeedRamp {
    /// Creates a ramp at the base interval for `initial_level` (1..=5).
    #[must_use]
    pub fn new(initial_level: u8) -> Self {
        let base_ms = base_interval_ms(initial_level);

        Self {
            initial_level,
            base_ms,
            current_ms: base_ms,
        }
    }

    /// Applies the speed rule for a freshly updated score.
    ///
    /// Steps the interval down once when the new score is a positive
    /// multiple of the step period; all other scores leave it unchanged.
    pub fn on_score(&mut self, score: u32) {
        if score > 0 && score % POINTS_PER_SPEED_STEP == 0 {
            self.current_ms = self
                .current_ms
                .saturating_sub(SPEED_STEP_MS)
                .max(MIN_TICK_INTERVAL_MS);
        }
    }

    /// Returns the current time between ticks.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.current_ms)
    }

    /// Returns the current interval in milliseconds.
    #[must_use]
    pub fn current_ms(&self) -> u64 {
        self.current_ms
    }

    /// Returns the speed level shown to the player.
    ///
    /// Derived from how far the ramp has descended from its base; this is
    /// presentation only, not separate state.
    #[must_use]
    pub fn derived_level(&self) -> u64 {
        u64::from(self.initial_level) + (self.base_ms - self.current_ms) / SPEED_STEP_MS
    }
}

#[cfg(test)]
mod tests {
    use crate::config::MIN_TICK_INTERVAL_MS;

    use super::SpeedRamp;

    #[test]
    fn ramp_starts_at_the_base_interval_for_its_level() {
        assert_eq!(SpeedRamp::new(1).current_ms(), 250);
        assert_eq!(SpeedRamp::new(2).current_ms(), 200);
        assert_eq!(SpeedRamp::new(5).current_ms(), 80);
        assert_eq!(SpeedRamp::new(3).derived_level(), 3);
    }

    #[test]
    fn interval_drops_by_twenty_at_each_twenty_point_mark() {
        let mut ramp = SpeedRamp::new(2);

        ramp.on_score(20);
        assert_eq!(ramp.current_ms(), 180);

        ramp.on_score(40);
        assert_eq!(ramp.current_ms(), 160);

        ramp.on_score(60);
        assert_eq!(ramp.current_ms(), 140);
    }

    #[test]
    fn scores_off_the_step_period_leave_the_interval_alone() {
        let mut ramp = SpeedRamp::new(2);

        for score in [0, 1, 19, 21, 39] {
            ramp.on_score(score);
        }

        assert_eq!(ramp.current_ms(), 200);
    }

    #[test]
    fn interval_clamps_at_the_floor() {
        let mut ramp = SpeedRamp::new(5);

        for step in 1..20 {
            ramp.on_score(step * 20);
            assert!(ramp.current_ms() >= MIN_TICK_INTERVAL_MS);
        }

        assert_eq!(ramp.current_ms(), MIN_TICK_INTERVAL_MS);
    }

    #[test]
    fn derived_level_is_non_decreasing_across_a_session() {
        let mut ramp = SpeedRamp::new(4);
        let mut previous = ramp.derived_level();

        for step in 1..30 {
            ramp.on_score(step * 20);
            let level = ramp.derived_level();
            assert!(level >= previous);
            previous = level;
        }
    }

    #[test]
    fn derived_level_counts_completed_steps() {
        let mut ramp = SpeedRamp::new(5);

        ramp.on_score(20);
        assert_eq!(ramp.derived_level(), 6);

        ramp.on_score(40);
        assert_eq!(ramp.derived_level(), 7);

        // Floor reached; further marks no longer raise the level.
        ramp.on_score(60);
        assert_eq!(ramp.derived_level(), 7);
    }
}
