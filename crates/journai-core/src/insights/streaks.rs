//! Journaling streaks over calendar days

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Streaks {
    pub current: u32,
    pub longest: u32,
}

/// Compute current and longest streaks from the days that have entries
///
/// `dates` may be unsorted and contain duplicates. The current streak stays
/// alive while the most recent entry is from `today` or the day before.
pub fn calculate_streaks(dates: &[NaiveDate], today: NaiveDate) -> Streaks {
    let mut days = dates.to_vec();
    days.sort_unstable();
    days.dedup();

    let Some(&last) = days.last() else {
        return Streaks::default();
    };

    let mut longest = 1;
    let mut run = 1;
    for pair in days.windows(2) {
        if (pair[1] - pair[0]).num_days() == 1 {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 1;
        }
    }

    let active = last == today || last.succ_opt() == Some(today);
    let current = if active {
        1 + days
            .windows(2)
            .rev()
            .take_while(|pair| (pair[1] - pair[0]).num_days() == 1)
            .count() as u32
    } else {
        0
    };

    Streaks { current, longest }
}
