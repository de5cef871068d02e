//! Intensity gauge: turns how long a vote is held into an intensity.
//!
//! `power(t) = min(100, 100 * (t - start) / D)` where `D` is the maximum
//! press duration. The gauge itself is stateless; [`Press`] carries the
//! transient state of one active hold.

use std::time::{Duration, Instant};

use super::{Choice, Stage};
use crate::domain::foundation::{Generation, Intensity};

/// Reference maximum press duration.
pub const DEFAULT_MAX_PRESS: Duration = Duration::from_millis(1000);

/// Copy shown while no press is active.
pub const IDLE_COPY: &str = "Hold for power";

/// Stateless duration-to-intensity conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntensityGauge {
    max_duration: Duration,
}

impl IntensityGauge {
    pub fn new(max_duration: Duration) -> Self {
        Self { max_duration }
    }

    pub fn max_duration(&self) -> Duration {
        self.max_duration
    }

    /// Power for a press of the given length. Capped at exactly 100.
    pub fn power_for(&self, held: Duration) -> Intensity {
        if self.max_duration.is_zero() || held >= self.max_duration {
            return Intensity::MAX;
        }
        let ratio = held.as_secs_f64() / self.max_duration.as_secs_f64();
        Intensity::new((100.0 * ratio).min(100.0))
    }

    /// Power sampled at `now` for a press that began at `start`.
    ///
    /// A `now` earlier than `start` counts as zero elapsed time.
    pub fn power(&self, start: Instant, now: Instant) -> Intensity {
        self.power_for(now.saturating_duration_since(start))
    }
}

impl Default for IntensityGauge {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PRESS)
    }
}

/// One active hold.
///
/// Remembers the stage and generation it began under so the session can
/// abandon it when either changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Press {
    choice: Choice,
    started_at: Instant,
    level: Intensity,
    stage: Stage,
    generation: Generation,
}

impl Press {
    pub(crate) fn begin(choice: Choice, started_at: Instant, stage: Stage, generation: Generation) -> Self {
        Self {
            choice,
            started_at,
            level: Intensity::ZERO,
            stage,
            generation,
        }
    }

    pub fn choice(&self) -> Choice {
        self.choice
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Latest sampled level.
    pub fn level(&self) -> Intensity {
        self.level
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Updates the live level. Never decreases, even for out-of-order samples.
    pub(crate) fn sample(&mut self, gauge: &IntensityGauge, now: Instant) -> Intensity {
        let power = gauge.power(self.started_at, now);
        if power > self.level {
            self.level = power;
        }
        self.level
    }
}

/// Short label for a live power level.
pub fn power_copy(level: Intensity, choice: Choice) -> &'static str {
    let value = level.value();
    match choice {
        Choice::No if value >= 67.0 => "Hell no!",
        Choice::No if value >= 34.0 => "Nah",
        Choice::Yes if value >= 67.0 => "Yuuus!",
        Choice::Yes if value >= 34.0 => "Yeah",
        _ => "Meh",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn zero_duration_is_zero_power() {
        assert_eq!(IntensityGauge::default().power_for(Duration::ZERO), Intensity::ZERO);
    }

    #[test]
    fn power_is_linear_below_max() {
        let gauge = IntensityGauge::default();
        assert!((gauge.power_for(ms(250)).value() - 25.0).abs() < 1e-9);
        assert!((gauge.power_for(ms(800)).value() - 80.0).abs() < 1e-9);
    }

    #[test]
    fn power_caps_at_exactly_100() {
        let gauge = IntensityGauge::default();
        assert_eq!(gauge.power_for(ms(1000)).value(), 100.0);
        assert_eq!(gauge.power_for(ms(5000)).value(), 100.0);
    }

    #[test]
    fn power_with_instants() {
        let gauge = IntensityGauge::new(ms(2000));
        let start = Instant::now();
        assert!((gauge.power(start, start + ms(500)).value() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn sample_before_start_is_zero() {
        let gauge = IntensityGauge::default();
        let start = Instant::now() + ms(100);
        assert_eq!(gauge.power(start, start - ms(50)), Intensity::ZERO);
    }

    #[test]
    fn zero_max_duration_is_always_full() {
        let gauge = IntensityGauge::new(Duration::ZERO);
        assert_eq!(gauge.power_for(Duration::ZERO), Intensity::MAX);
    }

    #[test]
    fn press_level_never_decreases() {
        let gauge = IntensityGauge::default();
        let start = Instant::now();
        let mut press = Press::begin(Choice::Yes, start, Stage::Round1, Generation::INITIAL);
        press.sample(&gauge, start + ms(600));
        let after_late = press.sample(&gauge, start + ms(200));
        assert!((after_late.value() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn power_copy_bands() {
        assert_eq!(power_copy(Intensity::new(10.0), Choice::Yes), "Meh");
        assert_eq!(power_copy(Intensity::new(10.0), Choice::No), "Meh");
        assert_eq!(power_copy(Intensity::new(50.0), Choice::Yes), "Yeah");
        assert_eq!(power_copy(Intensity::new(50.0), Choice::No), "Nah");
        assert_eq!(power_copy(Intensity::new(67.0), Choice::Yes), "Yuuus!");
        assert_eq!(power_copy(Intensity::MAX, Choice::No), "Hell no!");
    }

    #[test]
    fn power_copy_band_edges() {
        assert_eq!(power_copy(Intensity::new(33.9), Choice::Yes), "Meh");
        assert_eq!(power_copy(Intensity::new(34.0), Choice::Yes), "Yeah");
        assert_eq!(power_copy(Intensity::new(66.9), Choice::No), "Nah");
    }

    proptest! {
        #[test]
        fn power_stays_in_bounds(held_ms in 0u64..10_000, max_ms in 1u64..5_000) {
            let gauge = IntensityGauge::new(ms(max_ms));
            let p = gauge.power_for(ms(held_ms)).value();
            prop_assert!((0.0..=100.0).contains(&p));
            if held_ms >= max_ms {
                prop_assert_eq!(p, 100.0);
            }
        }

        #[test]
        fn power_is_monotonic(a in 0u64..3_000, b in 0u64..3_000) {
            let gauge = IntensityGauge::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(gauge.power_for(ms(lo)) <= gauge.power_for(ms(hi)));
        }
    }
}
