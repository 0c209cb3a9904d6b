//! Calendar dates on the wire are always ISO-8601 `YYYY-MM-DD`.

use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

time::serde::format_description!(pub iso_date, Date, "[year]-[month]-[day]");

/// Parse a strict `YYYY-MM-DD` date.
pub fn parse_iso_date(input: &str) -> Result<Date, time::error::Parse> {
    Date::parse(input.trim(), ISO_DATE)
}

pub fn format_iso_date(date: Date) -> String {
    // The format only contains components every `Date` has.
    date.format(ISO_DATE).unwrap_or_else(|_| {
        format!("{}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
    })
}
