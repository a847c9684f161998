//! A playhead that moves through a timeline in either direction.

/// Which way the playhead is travelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Paused,
    Forward,
    Reverse,
}

/// Time cursor over a timeline of known duration.
///
/// Reversing runs the same path backwards and stops at exactly 0, so a
/// reveal interrupted on the way in returns to its precise initial state.
#[derive(Debug, Clone, PartialEq)]
pub struct Playhead {
    time: f64,
    duration: f64,
    direction: Direction,
}

impl Playhead {
    pub fn new(duration: f64) -> Self {
        Self {
            time: 0.0,
            duration: duration.max(0.0),
            direction: Direction::Paused,
        }
    }

    pub fn play(&mut self) {
        self.direction = Direction::Forward;
    }

    pub fn reverse(&mut self) {
        self.direction = Direction::Reverse;
    }

    /// Jump to the end without animating (used when motion is disabled).
    pub fn complete(&mut self) {
        self.time = self.duration;
        self.direction = Direction::Paused;
    }

    /// Advance by `dt_ms`. Returns `true` if the time changed.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        let dt = (dt_ms.max(0.0)) / 1000.0;
        let before = self.time;
        match self.direction {
            Direction::Paused => return false,
            Direction::Forward => {
                self.time = (self.time + dt).min(self.duration);
                if self.time >= self.duration {
                    self.direction = Direction::Paused;
                }
            }
            Direction::Reverse => {
                self.time = (self.time - dt).max(0.0);
                if self.time <= 0.0 {
                    self.time = 0.0;
                    self.direction = Direction::Paused;
                }
            }
        }
        self.time != before
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Position in [0, 1].
    pub fn progress(&self) -> f64 {
        if self.duration == 0.0 {
            0.0
        } else {
            self.time / self.duration
        }
    }

    pub fn is_settled(&self) -> bool {
        self.direction == Direction::Paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paused_by_default() {
        let mut head = Playhead::new(1.0);
        assert!(!head.advance(16.0));
        assert_eq!(head.time(), 0.0);
        assert!(head.is_settled());
    }

    #[test]
    fn forward_stops_at_duration() {
        let mut head = Playhead::new(0.5);
        head.play();
        assert!(head.advance(400.0));
        assert!(head.advance(400.0));
        assert_eq!(head.time(), 0.5);
        assert_eq!(head.progress(), 1.0);
        assert!(head.is_settled());
    }

    #[test]
    fn reverse_midway_returns_to_exact_zero() {
        let mut head = Playhead::new(1.0);
        head.play();
        head.advance(333.0);
        head.reverse();
        head.advance(100.0);
        head.advance(500.0);
        assert_eq!(head.time(), 0.0);
        assert_eq!(head.direction(), Direction::Paused);
    }

    #[test]
    fn complete_jumps_to_end() {
        let mut head = Playhead::new(2.0);
        head.complete();
        assert_eq!(head.progress(), 1.0);
        assert!(head.is_settled());
    }
}
