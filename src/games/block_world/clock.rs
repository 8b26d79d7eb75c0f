//! Elapsed-time presentation helpers.

use serde::{Deserialize, Serialize};

/// Rating earned by finishing within a time band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRating {
    /// 2 minutes or less.
    Unstoppable,
    /// 4 minutes or less.
    Panda,
    /// 6 minutes or less.
    SlowButSteady,
    KeepPracticing,
}

impl TimeRating {
    /// Rate a finishing time in seconds.
    #[must_use]
    pub fn for_seconds(seconds: u64) -> Self {
        match seconds {
            0..=120 => TimeRating::Unstoppable,
            121..=240 => TimeRating::Panda,
            241..=360 => TimeRating::SlowButSteady,
            _ => TimeRating::KeepPracticing,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TimeRating::Unstoppable => "Unstoppable",
            TimeRating::Panda => "Panda",
            TimeRating::SlowButSteady => "Slow but Steady",
            TimeRating::KeepPracticing => "Keep Practicing",
        }
    }
}

impl std::fmt::Display for TimeRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Format seconds as `mm:ss`.
///
/// Minutes are not wrapped at an hour.
///
/// ```
/// use block_world::games::block_world::format_clock;
///
/// assert_eq!(format_clock(0), "00:00");
/// assert_eq!(format_clock(75), "01:15");
/// ```
#[must_use]
pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
