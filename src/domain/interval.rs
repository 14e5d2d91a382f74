use chrono::{DateTime, Datelike, FixedOffset, Months, NaiveDateTime, TimeDelta};
use serde::Serialize;
use std::fmt;

/// 兩個時間點之間的間隔，以日曆欄位表示 (年/月/日/時/分/秒)。
///
/// 計算一律在 UTC 上進行，所以不同時區或跨越夏令時間的時間點
/// 也能得到正確的實際經過時間。
/// `invert` 表示結束時間早於開始時間。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlightInterval {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub invert: bool,
    #[serde(skip)]
    total: TimeDelta,
}

impl FlightInterval {
    pub fn between(start: &DateTime<FixedOffset>, end: &DateTime<FixedOffset>) -> Self {
        let total = end.signed_duration_since(*start);
        let invert = total < TimeDelta::zero();
        let (from, to) = if invert {
            (end.naive_utc(), start.naive_utc())
        } else {
            (start.naive_utc(), end.naive_utc())
        };

        let whole_months = whole_months_between(from, to);
        // whole_months_between guarantees the anchor exists and is <= to
        let anchor = from
            .checked_add_months(Months::new(whole_months))
            .unwrap_or(from);
        let rest = to.signed_duration_since(anchor);

        Self {
            years: whole_months / 12,
            months: whole_months % 12,
            days: rest.num_days() as u32,
            hours: (rest.num_hours() % 24) as u32,
            minutes: (rest.num_minutes() % 60) as u32,
            seconds: (rest.num_seconds() % 60) as u32,
            invert,
            total,
        }
    }

    /// Exact signed elapsed time.
    pub fn total(&self) -> TimeDelta {
        self.total
    }

    pub fn total_minutes(&self) -> i64 {
        self.total.num_minutes()
    }

    pub fn is_zero(&self) -> bool {
        self.total.is_zero()
    }
}

fn whole_months_between(from: NaiveDateTime, to: NaiveDateTime) -> u32 {
    let estimate = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    let mut months = estimate.max(0) as u32;

    let fits = |months: u32| {
        from.checked_add_months(Months::new(months))
            .is_some_and(|anchor| anchor <= to)
    };

    while months > 0 && !fits(months) {
        months -= 1;
    }
    while fits(months + 1) {
        months += 1;
    }
    months
}

/// ISO 8601 duration, e.g. `PT5H`, `-P1DT2H30M`, `PT0S`.
impl fmt::Display for FlightInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.invert {
            f.write_str("-")?;
        }
        f.write_str("P")?;
        if self.years > 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months > 0 {
            write!(f, "{}M", self.months)?;
        }
        if self.days > 0 {
            write!(f, "{}D", self.days)?;
        }

        let has_time = self.hours > 0 || self.minutes > 0 || self.seconds > 0;
        let has_date = self.years > 0 || self.months > 0 || self.days > 0;
        if has_time || !has_date {
            f.write_str("T")?;
            if self.hours > 0 {
                write!(f, "{}H", self.hours)?;
            }
            if self.minutes > 0 {
                write!(f, "{}M", self.minutes)?;
            }
            if self.seconds > 0 || !has_time {
                write!(f, "{}S", self.seconds)?;
            }
        }
        Ok(())
    }
}
