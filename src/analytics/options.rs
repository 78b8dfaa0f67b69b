//! Selectable reporting windows
//!
//! The dashboard offers a fixed list of periods to filter by: the current
//! month, each of the six months before it, and an unbounded "all time"
//! window. The list depends only on the injected `today`.

use chrono::NaiveDate;
use serde::Serialize;

use super::format::format_month;
use crate::models::{MonthKey, Transaction};

/// Option value for the month containing `today`
pub const CURRENT_MONTH_VALUE: &str = "current";

/// Option value for the unbounded window
pub const ALL_TIME_VALUE: &str = "all";

/// How many months before the current one are offered
pub const PREVIOUS_MONTHS: usize = 6;

/// A named reporting window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthOption {
    pub label: String,
    pub value: String,
    /// First day of the window, inclusive; `None` means unbounded
    pub from: Option<NaiveDate>,
    /// Last day of the window, inclusive; `None` means unbounded
    pub to: Option<NaiveDate>,
}

fn within(from: Option<NaiveDate>, to: Option<NaiveDate>, date: NaiveDate) -> bool {
    from.map_or(true, |from| date >= from) && to.map_or(true, |to| date <= to)
}

impl MonthOption {
    fn for_month(label: String, value: String, month: MonthKey) -> Self {
        Self {
            label,
            value,
            from: Some(month.first_day()),
            to: Some(month.last_day()),
        }
    }

    /// Check whether a date falls inside this window
    pub fn contains(&self, date: NaiveDate) -> bool {
        within(self.from, self.to, date)
    }

    /// Check whether this window is unbounded
    pub fn is_all_time(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Iterate over the transactions dated inside this window
    ///
    /// The iterator copies the bounds, so it does not borrow the option.
    pub fn filter<'t, I>(&self, transactions: I) -> impl Iterator<Item = &'t Transaction>
    where
        I: IntoIterator<Item = &'t Transaction>,
        I::IntoIter: 't,
    {
        let (from, to) = (self.from, self.to);
        transactions
            .into_iter()
            .filter(move |t| within(from, to, t.date))
    }
}

/// Build the reporting windows relative to `today`
///
/// Always returns eight entries: "current", six `YYYY-MM` months counting
/// backwards, then "all".
pub fn month_options(today: NaiveDate) -> Vec<MonthOption> {
    let current = MonthKey::from_date(today);
    let mut options = Vec::with_capacity(PREVIOUS_MONTHS + 2);

    options.push(MonthOption::for_month(
        "This Month".to_string(),
        CURRENT_MONTH_VALUE.to_string(),
        current,
    ));

    let mut month = current;
    for _ in 0..PREVIOUS_MONTHS {
        month = month.prev();
        let key = month.to_string();
        options.push(MonthOption::for_month(format_month(&key), key, month));
    }

    options.push(MonthOption {
        label: "All Time".to_string(),
        value: ALL_TIME_VALUE.to_string(),
        from: None,
        to: None,
    });

    options
}

/// Look up an option by its value
pub fn find_month_option<'a>(options: &'a [MonthOption], value: &str) -> Option<&'a MonthOption> {
    options.iter().find(|o| o.value == value)
}
