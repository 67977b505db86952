use std::fmt;

use chrono::{Local, NaiveDate};

use crate::{FillLevel, LiftCalendar, LiftTime, TermColor, HOURS};

const PREAMBLE: &str = "UNL City campus weight room availability\n\n";
const TIME_HEADER: &str = "   time  ";
const LABEL_WIDTH: usize = 10;
const CELL_WIDTH: usize = 22;
const PASSED: &str = "   passed   ";
const NOT_OPENED: &str = " not opened ";

impl FillLevel {
    #[must_use]
    pub fn color(self) -> TermColor {
        match self {
            FillLevel::Low => TermColor::Green,
            FillLevel::Medium => TermColor::Yellow,
            FillLevel::High => TermColor::Red,
        }
    }
}

impl fmt::Display for LiftTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{:>2} spots{}",
            self.fill_level.color(),
            self.spots_remaining,
            TermColor::Reset
        )
    }
}

impl LiftCalendar {
    /// Lays out the weekly table, stamped with `as_of`.
    #[must_use]
    pub fn render(&self, as_of: NaiveDate) -> String {
        let header = std::iter::once(TIME_HEADER)
            .chain(self.days.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" | ");
        let divider = "-".repeat(header.chars().count());

        let mut lines = vec![PREAMBLE.to_string(), header];

        for hour in HOURS {
            lines.push(divider.clone());
            lines.push(self.render_row(hour));
        }

        lines.push(format!(
            "\n\n   Availability as of {as_of}\n        Subject to change"
        ));

        lines.join("\n")
    }

    /// Prints the table to stdout, stamped with today's date.
    pub fn display(&self) {
        println!("{}", self.render(Local::now().date_naive()));
    }

    fn render_row(&self, hour: u32) -> String {
        let label = format!(
            " {}:00 {}m",
            if hour <= 12 { hour } else { hour - 12 },
            if hour < 12 { 'a' } else { 'p' }
        );
        let mut line = format!("{label:<width$}", width = LABEL_WIDTH);

        for (idx, day) in self.days.iter().enumerate() {
            line.push('|');

            let Some(lift) = self.get(day, hour) else {
                line.push_str(if idx == 0 { PASSED } else { NOT_OPENED });
                continue;
            };

            let entry = lift.to_string();
            let padding = " ".repeat(CELL_WIDTH.saturating_sub(entry.len()) / 2);
            line.push_str(&padding);
            line.push_str(&entry);
            line.push_str(&padding);
        }

        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_lift_calendar;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn lift_time_colors() {
        let low = LiftTime::new("10/21/2026".into(), 9.0, 10.0, 45, 60);
        let medium = LiftTime::new("10/21/2026".into(), 9.0, 10.0, 20, 60);
        let high = LiftTime::new("10/21/2026".into(), 9.0, 10.0, 7, 60);

        assert_eq!(low.to_string(), "\x1b[32m45 spots\x1b[0m");
        assert_eq!(medium.to_string(), "\x1b[33m20 spots\x1b[0m");
        assert_eq!(high.to_string(), "\x1b[31m 7 spots\x1b[0m");
    }

    #[test]
    fn empty_calendar_has_only_time_column() {
        let rendered = build_lift_calendar(Vec::new()).render(as_of());
        let lines = rendered.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "UNL City campus weight room availability");
        assert_eq!(lines[3], "   time  ");
        assert_eq!(lines[4], "---------");
        assert_eq!(lines[5], " 9:00 am  ");
        assert_eq!(lines[7], " 10:00 am ");
        assert_eq!(lines[11], " 12:00 pm ");
        assert_eq!(lines[29], " 9:00 pm  ");
        assert_eq!(lines[32], "   Availability as of 2026-10-19");
        assert_eq!(lines[33], "        Subject to change");
        assert_eq!(lines.len(), 34);
    }

    #[test]
    fn placeholders_for_missing_slots() {
        let calendar = build_lift_calendar(vec![
            LiftTime::new("10/21/2026".into(), 10.0, 11.0, 45, 60),
            LiftTime::new("10/22/2026".into(), 10.0, 11.0, 120, 150),
        ]);
        let rendered = calendar.render(as_of());
        let lines = rendered.lines().collect::<Vec<_>>();

        assert_eq!(lines[3], "   time   | 10/21/2026 | 10/22/2026");
        assert_eq!(lines[4], "-".repeat(35));
        assert_eq!(lines[5], " 9:00 am  |   passed   | not opened ");
        assert_eq!(
            lines[7],
            " 10:00 am |  \x1b[32m45 spots\x1b[0m  |  \x1b[32m120 spots\x1b[0m  "
        );
    }
}
