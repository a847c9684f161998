//! Preloader timing.
//!
//! The overlay holds for two seconds, then plays a 0.8 second exit. Its
//! completion callback fires once the exit has finished.

use std::time::Duration;

pub const PRELOADER_HOLD: Duration = Duration::from_millis(2000);
pub const PRELOADER_EXIT: Duration = Duration::from_millis(800);

/// Mount to completion callback.
pub const fn preloader_total() -> Duration {
    Duration::from_millis(2800)
}

/// Interval between counter updates during the hold.
pub const COUNTER_TICK: Duration = Duration::from_millis(20);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreloaderPhase {
    /// Counter running, overlay fully visible
    Holding,
    /// Exit transition in progress
    Exiting,
    /// Completion callback due; overlay unmounts
    Done,
}

impl PreloaderPhase {
    pub fn at(elapsed: Duration) -> Self {
        if elapsed < PRELOADER_HOLD {
            PreloaderPhase::Holding
        } else if elapsed < PRELOADER_HOLD + PRELOADER_EXIT {
            PreloaderPhase::Exiting
        } else {
            PreloaderPhase::Done
        }
    }

    /// CSS modifier class for the overlay.
    pub fn class(&self) -> &'static str {
        match self {
            PreloaderPhase::Holding => "preloader",
            PreloaderPhase::Exiting | PreloaderPhase::Done => "preloader is-exiting",
        }
    }
}

/// Counter value shown during the hold, 0 at mount and 100 at its end.
pub fn progress_percent(elapsed: Duration) -> u8 {
    let ratio = elapsed.as_secs_f64() / PRELOADER_HOLD.as_secs_f64();
    (ratio.clamp(0.0, 1.0) * 100.0).floor() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_hold_plus_exit() {
        assert_eq!(preloader_total(), PRELOADER_HOLD + PRELOADER_EXIT);
        assert_eq!(preloader_total(), Duration::from_millis(2800));
    }

    #[test]
    fn phases_follow_schedule() {
        assert_eq!(PreloaderPhase::at(Duration::ZERO), PreloaderPhase::Holding);
        assert_eq!(PreloaderPhase::at(Duration::from_millis(1999)), PreloaderPhase::Holding);
        assert_eq!(PreloaderPhase::at(Duration::from_millis(2000)), PreloaderPhase::Exiting);
        assert_eq!(PreloaderPhase::at(Duration::from_millis(2799)), PreloaderPhase::Exiting);
        assert_eq!(PreloaderPhase::at(preloader_total()), PreloaderPhase::Done);
    }

    #[test]
    fn counter_runs_zero_to_hundred() {
        assert_eq!(progress_percent(Duration::ZERO), 0);
        assert_eq!(progress_percent(Duration::from_millis(1000)), 50);
        assert_eq!(progress_percent(PRELOADER_HOLD), 100);
        assert_eq!(progress_percent(Duration::from_secs(10)), 100);
    }

    #[test]
    fn exiting_class() {
        assert_eq!(PreloaderPhase::Holding.class(), "preloader");
        assert_eq!(PreloaderPhase::Exiting.class(), "preloader is-exiting");
    }
}
