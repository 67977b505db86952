mod calendar;
mod color;
mod display;
mod error;
mod parser;
mod structs;

pub use calendar::{build_lift_calendar, LiftCalendar, HOURS};
pub use color::TermColor;
pub use error::{ExtractError, InvalidNumberSource};
pub use parser::{get_date_from_href, get_spots_from_text, get_time_from_text, parse_lift_times};
pub use structs::{FillLevel, LiftTime};
