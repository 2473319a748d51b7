use chrono::{Datelike, Days, Months, NaiveDate};

use crate::domain::{DashboardStats, MonthlyBucket, TournamentRecord};

use super::{average, percentage};

/// Number of calendar months on the dashboard, current month included.
pub const MONTH_WINDOW: u32 = 6;

pub fn aggregate(records: &[TournamentRecord], today: NaiveDate) -> DashboardStats {
    let wins: u64 = records.iter().map(|r| u64::from(r.wins)).sum();
    let losses: u64 = records.iter().map(|r| u64::from(r.losses)).sum();
    let total_spent: f64 = records.iter().map(|r| r.cost).sum();
    let total_prizes: f64 = records.iter().map(|r| r.prize_play_points as f64).sum();
    let total_profit = total_prizes - total_spent;

    DashboardStats {
        total_tournaments: records.len(),
        win_rate: percentage(wins, losses),
        total_spent,
        total_prizes,
        total_profit,
        avg_profit: average(total_profit, records.len()),
        monthly_stats: monthly_stats(records, today, MONTH_WINDOW),
    }
}

/// One bucket per calendar month, oldest first, ending with `today`'s month.
/// Months without records still get a zeroed bucket.
pub fn monthly_stats(
    records: &[TournamentRecord],
    today: NaiveDate,
    months: u32,
) -> Vec<MonthlyBucket> {
    month_starts(today, months)
        .into_iter()
        .map(|start| fold_month(records, start))
        .collect()
}

fn month_starts(today: NaiveDate, months: u32) -> Vec<NaiveDate> {
    let anchor = today - Days::new(u64::from(today.day0()));
    (0..months)
        .rev()
        .filter_map(|back| anchor.checked_sub_months(Months::new(back)))
        .collect()
}

fn fold_month(records: &[TournamentRecord], start: NaiveDate) -> MonthlyBucket {
    let mut bucket = MonthlyBucket {
        name: start.format("%b").to_string(),
        wins: 0,
        losses: 0,
        profit: 0.0,
    };

    for record in records.iter().filter(|r| same_month(r.date, start)) {
        bucket.wins += u64::from(record.wins);
        bucket.losses += u64::from(record.losses);
        bucket.profit += record.profit();
    }

    bucket
}

fn same_month(date: NaiveDate, start: NaiveDate) -> bool {
    date.year() == start.year() && date.month() == start.month()
}

/// Latest `limit` records by date; same-day entries put the higher id first.
pub fn recent_tournaments(records: &[TournamentRecord], limit: usize) -> Vec<TournamentRecord> {
    let mut sorted: Vec<&TournamentRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    sorted.into_iter().take(limit).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MatchRecord;
    use crate::stats::test_support::record;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_collection_yields_zeroes() {
        let stats = aggregate(&[], day(2024, 6, 15));

        assert_eq!(stats.total_tournaments, 0);
        assert_eq!(stats.win_rate, 0.0);
        assert_eq!(stats.avg_profit, 0.0);
        assert!(!stats.win_rate.is_nan());
        assert_eq!(stats.monthly_stats.len(), 6);
        assert!(stats.monthly_stats.iter().all(|b| b.wins == 0 && b.profit == 0.0));
    }

    #[test]
    fn test_totals_and_rates() {
        let records = vec![
            record(1, 10, day(2024, 6, 1), 100.0, 5, 0, 150),
            record(2, 10, day(2024, 6, 2), 100.0, 2, 3, 0),
            record(3, 11, day(2024, 5, 20), 200.0, 3, 2, 0),
        ];
        let stats = aggregate(&records, day(2024, 6, 15));

        assert_eq!(stats.total_tournaments, 3);
        // 10 wins out of 15 games
        assert_eq!(stats.win_rate, 66.7);
        assert_eq!(stats.total_spent, 400.0);
        assert_eq!(stats.total_prizes, 150.0);
        assert_eq!(stats.total_profit, -250.0);
        assert!((stats.avg_profit - (-250.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_zero_game_records_do_not_produce_nan() {
        let records = vec![record(1, 10, day(2024, 6, 1), 0.0, 0, 0, 0)];
        let stats = aggregate(&records, day(2024, 6, 15));
        assert_eq!(stats.win_rate, 0.0);
    }

    #[test]
    fn test_huge_counts_sum_without_overflow() {
        let huge = MatchRecord::from_counts(3e9, 1.0).unwrap();
        let records = vec![
            record(1, 10, day(2024, 6, 1), 0.0, huge.wins, huge.losses, 0),
            record(2, 10, day(2024, 6, 2), 0.0, huge.wins, huge.losses, 0),
        ];
        let stats = aggregate(&records, day(2024, 6, 15));

        assert_eq!(stats.win_rate, 100.0);
        let june = &stats.monthly_stats[5];
        assert_eq!((june.wins, june.losses), (6_000_000_000, 2));
    }

    #[test]
    fn test_monthly_scaffold_labels_and_order() {
        let buckets = monthly_stats(&[], day(2024, 3, 31), MONTH_WINDOW);
        let names: Vec<&str> = buckets.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Oct", "Nov", "Dec", "Jan", "Feb", "Mar"]);
    }

    #[test]
    fn test_records_fold_into_their_month() {
        let records = vec![
            record(1, 10, day(2024, 6, 1), 100.0, 5, 0, 150),
            record(2, 10, day(2024, 6, 30), 100.0, 1, 3, 0),
            record(3, 10, day(2024, 1, 10), 200.0, 3, 2, 0),
            // outside the window
            record(4, 10, day(2023, 12, 31), 100.0, 4, 1, 120),
            record(5, 10, day(2023, 6, 5), 100.0, 4, 1, 120),
        ];
        let buckets = monthly_stats(&records, day(2024, 6, 15), MONTH_WINDOW);

        assert_eq!(buckets.len(), 6);
        assert_eq!(buckets[0].name, "Jan");
        assert_eq!((buckets[0].wins, buckets[0].losses), (3, 2));
        assert_eq!(buckets[0].profit, -200.0);
        assert_eq!(buckets[5].name, "Jun");
        assert_eq!((buckets[5].wins, buckets[5].losses), (6, 3));
        assert_eq!(buckets[5].profit, -50.0);
        assert!(buckets[1..5].iter().all(|b| b.wins == 0 && b.losses == 0));
    }

    #[test]
    fn test_recent_tournaments_order_and_tie_break() {
        let records = vec![
            record(1, 10, day(2024, 5, 1), 0.0, 0, 0, 0),
            record(2, 10, day(2024, 6, 1), 0.0, 0, 0, 0),
            record(3, 10, day(2024, 6, 1), 0.0, 0, 0, 0),
            record(4, 10, day(2024, 4, 1), 0.0, 0, 0, 0),
            record(5, 10, day(2024, 5, 15), 0.0, 0, 0, 0),
        ];
        let ids: Vec<i64> = recent_tournaments(&records, 4).iter().map(|r| r.id).collect();
        assert_eq!(ids, [3, 2, 5, 1]);
        assert_eq!(recent_tournaments(&records, 10).len(), 5);
    }
}
