//! Virtual-user ramp profile.

use std::time::Duration;

/// Trapezoid load profile: ramp up to the peak user count, hold, ramp
/// back down to zero.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub peak_users: usize,
    pub ramp_up: Duration,
    pub hold: Duration,
    pub ramp_down: Duration,
}

impl Profile {
    /// Total wall-clock duration of the run.
    pub fn total(&self) -> Duration {
        self.ramp_up + self.hold + self.ramp_down
    }

    /// Activity window for virtual user `vu` (0-based), as offsets from
    /// the run start. Users start evenly spread across the ramp-up and
    /// stop evenly spread across the ramp-down, earliest starter last.
    pub fn window(&self, vu: usize) -> (Duration, Duration) {
        let peak = self.peak_users.max(1) as f64;
        let fraction = vu as f64 / peak;

        let start = self.ramp_up.mul_f64(fraction);
        let end = self.ramp_up + self.hold + self.ramp_down.mul_f64(1.0 - fraction);
        (start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile {
            peak_users: 100,
            ramp_up: Duration::from_secs(120),
            hold: Duration::from_secs(300),
            ramp_down: Duration::from_secs(120),
        }
    }

    #[test]
    fn test_total_covers_all_stages() {
        assert_eq!(profile().total(), Duration::from_secs(540));
    }

    #[test]
    fn test_first_user_spans_the_whole_run() {
        let (start, end) = profile().window(0);
        assert_eq!(start, Duration::ZERO);
        assert_eq!(end, Duration::from_secs(540));
    }

    #[test]
    fn test_later_users_start_later_and_stop_earlier() {
        let p = profile();
        let (start_early, end_early) = p.window(10);
        let (start_late, end_late) = p.window(90);

        assert!(start_early < start_late);
        assert!(end_late < end_early);
        // Every window stays inside the run.
        assert!(end_late > start_late);
        assert!(end_late <= p.total());
    }
}
