use anyhow::{bail, Result};
use chrono::NaiveDate;

/// Day zero of the word rotation. Index 0 shows on this date.
pub const EPOCH: NaiveDate = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

/// Maps a local calendar date to an index into the word list.
///
/// `today` is "now" already normalized to local midnight
/// ([DateTime::date_naive](chrono::DateTime::date_naive) does exactly that).
/// The arithmetic runs on whole calendar dates, so every local
/// midnight-to-midnight span counts as one day no matter how long it really
/// lasted across a DST transition. Dates before the epoch wrap backwards into
/// range through the euclidean modulo.
pub fn compute_day_index(today: NaiveDate, epoch: NaiveDate, word_count: usize) -> Result<usize> {
    if word_count == 0 {
        bail!("Cannot compute a day index over an empty word list");
    }
    let days_since_epoch = (today - epoch).num_days();
    Ok(days_since_epoch.rem_euclid(word_count as i64) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn epoch_day_is_index_zero() {
        assert_eq!(compute_day_index(EPOCH, EPOCH, 5).unwrap(), 0);
    }

    #[test]
    fn index_advances_one_per_day_and_wraps() {
        assert_eq!(compute_day_index(date(2026, 1, 2), EPOCH, 5).unwrap(), 1);
        assert_eq!(compute_day_index(date(2026, 1, 5), EPOCH, 5).unwrap(), 4);
        // Wraps after 5 days.
        assert_eq!(compute_day_index(date(2026, 1, 6), EPOCH, 5).unwrap(), 0);
        assert_eq!(compute_day_index(date(2026, 1, 7), EPOCH, 5).unwrap(), 1);
    }

    #[test]
    fn dates_before_epoch_stay_in_range() {
        assert_eq!(compute_day_index(date(2025, 12, 31), EPOCH, 5).unwrap(), 4);
        assert_eq!(compute_day_index(date(2025, 12, 27), EPOCH, 5).unwrap(), 0);
        assert_eq!(compute_day_index(date(2025, 12, 30), EPOCH, 7).unwrap(), 5);
        assert_eq!(compute_day_index(date(2025, 12, 25), EPOCH, 7).unwrap(), 0);
    }

    #[test]
    fn result_is_always_in_range() {
        let mut day = date(2025, 11, 1);
        let end = date(2026, 3, 1);
        while day <= end {
            for word_count in [1, 2, 5, 24, 365] {
                let index = compute_day_index(day, EPOCH, word_count).unwrap();
                assert!(index < word_count, "index {index} for {day} / {word_count}");
            }
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn consecutive_days_differ_by_exactly_one_mod_count() {
        let word_count = 24;
        let mut day = date(2026, 3, 1);
        // Covers the March DST transitions in both hemispheres. Day arithmetic
        // happens on calendar dates, so the transition cannot shift the index.
        let end = date(2026, 4, 15);
        while day < end {
            let today = compute_day_index(day, EPOCH, word_count).unwrap();
            let next = compute_day_index(day.succ_opt().unwrap(), EPOCH, word_count).unwrap();
            assert_eq!((today + 1) % word_count, next);
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn same_date_is_idempotent() {
        let a = compute_day_index(date(2026, 2, 14), EPOCH, 24).unwrap();
        let b = compute_day_index(date(2026, 2, 14), EPOCH, 24).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_word_list_is_an_error() {
        assert!(compute_day_index(date(2026, 1, 2), EPOCH, 0).is_err());
    }
}
