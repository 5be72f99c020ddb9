use chrono::{Days, NaiveDate, Weekday};

use crate::appliances::DayContext;

/// A calendar that walks a fixed number of consecutive days.
///
/// The `Calendar` provides methods to advance day by day or run a
/// function for each remaining day, always in ascending date order.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use ecowork::generator::calendar::Calendar;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let mut calendar = Calendar::new(start, 3);
/// let mut dates = Vec::new();
///
/// calendar.run(|ctx| dates.push(ctx.date.to_string()));
/// assert_eq!(dates, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
/// ```
pub struct Calendar {
    /// First date of the range
    start: NaiveDate,
    /// Offset (in days) of the next date to emit
    current: u64,
    /// Total days in the range
    total: u64,
}

impl Calendar {
    /// Creates a calendar of `days` consecutive dates starting at `start`.
    pub fn new(start: NaiveDate, days: usize) -> Self {
        Self {
            start,
            current: 0,
            total: days as u64,
        }
    }

    /// Advances the calendar by one day.
    ///
    /// # Returns
    ///
    /// * `Some(ctx)` - Context of the day before advancing
    /// * `None` - If every day has been emitted, or the date range overflows
    pub fn tick(&mut self) -> Option<DayContext> {
        if self.current >= self.total {
            return None;
        }
        let date = self.start.checked_add_days(Days::new(self.current))?;
        self.current += 1;
        Some(DayContext::new(date))
    }

    /// Runs a function for each remaining day.
    pub fn run(&mut self, mut f: impl FnMut(DayContext)) {
        while let Some(ctx) = self.tick() {
            f(ctx);
        }
    }
}

/// Portuguese name of a weekday, as written to the generated file.
pub fn weekday_pt(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Segunda",
        Weekday::Tue => "Terça",
        Weekday::Wed => "Quarta",
        Weekday::Thu => "Quinta",
        Weekday::Fri => "Sexta",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}
