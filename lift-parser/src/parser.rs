use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

use crate::{ExtractError, LiftTime};

macro_rules! selector {
    ($query:expr) => {{
        static SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse($query).unwrap());
        &SELECTOR
    }};
}

macro_rules! regex {
    ($pattern:expr) => {{
        static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new($pattern).unwrap());
        &PATTERN
    }};
}

/// Extracts every bookable slot from the search results page.
///
/// Any anchor whose text reads like "`n` of `m` Available" is treated as a
/// slot. A single malformed slot fails the whole page.
pub fn parse_lift_times<S: AsRef<str>>(s: S) -> Result<Vec<LiftTime>, ExtractError> {
    let html = Html::parse_document(s.as_ref());

    let mut lift_times = Vec::new();

    for anchor in html.select(selector!("a")) {
        let text = anchor.text().collect::<String>();
        if !(text.contains("Available") && text.contains("of ")) {
            continue;
        }

        let Some(link) = anchor.value().attr("href") else {
            return Err(ExtractError::MissingHref { text });
        };

        if link.chars().count() <= 8 {
            log::debug!("Skipping slot with short link {link:?}");
            continue;
        }

        lift_times.push(parse_lift_time(link, &text)?);
    }

    log::debug!("Extracted {} lift times", lift_times.len());

    Ok(lift_times)
}

fn parse_lift_time(link: &str, text: &str) -> Result<LiftTime, ExtractError> {
    let (start, end) = get_time_from_text(text)?;
    let date = get_date_from_href(link)?;
    let (available, total) = get_spots_from_text(text)?;

    log::trace!("{:?} -> {date} {start:.2}-{end:.2} {available}/{total}", text.trim());

    Ok(LiftTime::new(date.to_string(), start, end, available, total))
}

/// Returns the single `MM/DD/YYYY` date in a booking link.
pub fn get_date_from_href(href: &str) -> Result<&str, ExtractError> {
    let matches = regex!(r"[0-9]{2}/[0-9]{2}/[0-9]{4}")
        .find_iter(href)
        .map(|m| m.as_str())
        .collect::<Vec<_>>();

    match matches[..] {
        [date] => Ok(date),
        _ => Err(ExtractError::match_count("date", 1, matches.len(), href)),
    }
}

/// Returns the start and end of a "`H:MM am - H:MM pm`" range.
///
/// Minutes stay in the decimal places, so `6:30 pm` becomes `18.30` rather
/// than `18.5`. A value landing on 24 (noon read as `12 + 12`) becomes 12.
pub fn get_time_from_text(text: &str) -> Result<(f64, f64), ExtractError> {
    let matches = regex!(r"([0-9 ]?[0-9]:[0-9]{2}) ([ap]m)")
        .captures_iter(text)
        .map(|captures| (captures.get(1), captures.get(2)))
        .filter_map(|(clock, meridiem)| Some((clock?.as_str(), meridiem?.as_str())))
        .collect::<Vec<_>>();

    let [start, end] = matches[..] else {
        return Err(ExtractError::match_count("time", 2, matches.len(), text));
    };

    Ok((to_decimal_hour(start)?, to_decimal_hour(end)?))
}

fn to_decimal_hour((clock, meridiem): (&str, &str)) -> Result<f64, ExtractError> {
    let decimal = clock.trim().replace(':', ".");
    let hour = decimal
        .parse::<f64>()
        .map_err(|err| ExtractError::invalid_number(&decimal, err))?;

    let hour = if meridiem == "pm" { hour + 12.0 } else { hour };

    Ok(if hour == 24.0 { 12.0 } else { hour })
}

/// Returns `(available, total)` from the "`n` of `m` Available" tail of a slot.
pub fn get_spots_from_text(text: &str) -> Result<(u32, u32), ExtractError> {
    let tail = text.rsplit_once('m').map_or(text, |(_, tail)| tail);

    let matches = regex!(r"[0-9]+")
        .find_iter(tail)
        .map(|m| m.as_str())
        .collect::<Vec<_>>();

    let [available, total] = matches[..] else {
        return Err(ExtractError::match_count("spots", 2, matches.len(), tail));
    };

    let parse = |value: &str| {
        value
            .parse::<u32>()
            .map_err(|err| ExtractError::invalid_number(value, err))
    };

    Ok((parse(available)?, parse(total)?))
}
