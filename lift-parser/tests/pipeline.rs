use chrono::NaiveDate;
use lift_parser::{build_lift_calendar, parse_lift_times, FillLevel};

const FIXTURE: &str = include_str!("fixtures/strength_search.html");

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

#[test]
fn fixture_records() {
    let lift_times = parse_lift_times(FIXTURE).unwrap();

    let summary = lift_times
        .iter()
        .map(|lift| {
            (
                lift.date.as_str(),
                lift.start_time,
                lift.end_time,
                lift.spots_remaining,
                lift.total_spots,
                lift.fill_level,
            )
        })
        .collect::<Vec<_>>();

    assert_eq!(
        summary,
        vec![
            ("10/19/2026", 11.0, 12.0, 7, 40, FillLevel::High),
            ("10/20/2026", 9.0, 10.0, 22, 40, FillLevel::Medium),
            ("10/20/2026", 18.0, 19.0, 38, 40, FillLevel::Low),
        ]
    );
}

#[test]
fn fixture_table() {
    let calendar = build_lift_calendar(parse_lift_times(FIXTURE).unwrap());
    let rendered = calendar.render(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());

    let divider = "-".repeat(35);
    let mut expected = vec![
        "UNL City campus weight room availability".to_string(),
        String::new(),
        String::new(),
        "   time   | 10/19/2026 | 10/20/2026".to_string(),
    ];

    let rows = [
        format!(" 9:00 am  |   passed   |  {YELLOW}22 spots{RESET}  "),
        " 10:00 am |   passed   | not opened ".to_string(),
        format!(" 11:00 am |  {RED} 7 spots{RESET}  | not opened "),
        " 12:00 pm |   passed   | not opened ".to_string(),
        " 1:00 pm  |   passed   | not opened ".to_string(),
        " 2:00 pm  |   passed   | not opened ".to_string(),
        " 3:00 pm  |   passed   | not opened ".to_string(),
        " 4:00 pm  |   passed   | not opened ".to_string(),
        " 5:00 pm  |   passed   | not opened ".to_string(),
        format!(" 6:00 pm  |   passed   |  {GREEN}38 spots{RESET}  "),
        " 7:00 pm  |   passed   | not opened ".to_string(),
        " 8:00 pm  |   passed   | not opened ".to_string(),
        " 9:00 pm  |   passed   | not opened ".to_string(),
    ];

    for row in rows {
        expected.push(divider.clone());
        expected.push(row);
    }

    expected.extend([
        String::new(),
        String::new(),
        "   Availability as of 2026-10-19".to_string(),
        "        Subject to change".to_string(),
    ]);

    assert_eq!(rendered.lines().collect::<Vec<_>>(), expected);
}
