use super::CellValue;
use time::{
    format_description::well_known::Rfc3339, macros::datetime, macros::format_description, Date,
    Duration, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset,
};

/// 9999-12-31 as an Excel serial number.
const MAX_EXCEL_SERIAL: f64 = 2_958_465.0;

/// Coerces a cell into a timestamp. Anything that is not a date becomes `None`.
pub fn coerce_datetime(cell: &CellValue) -> Option<PrimitiveDateTime> {
    match cell {
        CellValue::DateTime(dt) => Some(*dt),
        CellValue::Text(s) => parse_datetime(s),
        CellValue::Float(x) => from_excel_serial(*x),
        CellValue::Int(i) => from_excel_serial(*i as f64),
        CellValue::Empty | CellValue::Bool(_) => None,
    }
}

/// Parses the textual dates found in subscription exports.
///
/// Ambiguous slashed dates are read month first (`01/02/2024` is 2 January)
/// and fall back to day first when that is the only valid reading
/// (`31/12/2023`). Dashed dates with the year last are day first.
pub fn parse_datetime(s: &str) -> Option<PrimitiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = OffsetDateTime::parse(s, &Rfc3339) {
        let utc = dt.to_offset(UtcOffset::UTC);
        return Some(PrimitiveDateTime::new(utc.date(), utc.time()));
    }

    if let Some(date) = parse_date(s) {
        return Some(PrimitiveDateTime::new(date, Time::MIDNIGHT));
    }

    let (date, time) = s.rsplit_once(['T', ' '])?;
    Some(PrimitiveDateTime::new(
        parse_date(date.trim_end())?,
        parse_time(time)?,
    ))
}

fn parse_date(s: &str) -> Option<Date> {
    Date::parse(s, format_description!("[year]-[month]-[day]"))
        .or_else(|_| Date::parse(s, format_description!("[year]/[month]/[day]")))
        .or_else(|_| {
            Date::parse(
                s,
                format_description!("[month padding:none]/[day padding:none]/[year]"),
            )
        })
        .or_else(|_| {
            Date::parse(
                s,
                format_description!("[day padding:none]/[month padding:none]/[year]"),
            )
        })
        .or_else(|_| {
            Date::parse(
                s,
                format_description!("[day padding:none]-[month padding:none]-[year]"),
            )
        })
        .or_else(|_| parse_date_with_month_name(s))
        .ok()
}

/// `Jan 15 2024`, `January 15, 2024`, `15 Jan 2024` and `15-Jan-2024`.
fn parse_date_with_month_name(s: &str) -> Result<Date, time::error::Parse> {
    Date::parse(
        s,
        format_description!(
            "[month repr:short case_sensitive:false] [day padding:none] [year]"
        ),
    )
    .or_else(|_| {
        Date::parse(
            s,
            format_description!(
                "[month repr:short case_sensitive:false] [day padding:none], [year]"
            ),
        )
    })
    .or_else(|_| {
        Date::parse(
            s,
            format_description!(
                "[month repr:long case_sensitive:false] [day padding:none] [year]"
            ),
        )
    })
    .or_else(|_| {
        Date::parse(
            s,
            format_description!(
                "[month repr:long case_sensitive:false] [day padding:none], [year]"
            ),
        )
    })
    .or_else(|_| {
        Date::parse(
            s,
            format_description!(
                "[day padding:none] [month repr:short case_sensitive:false] [year]"
            ),
        )
    })
    .or_else(|_| {
        Date::parse(
            s,
            format_description!(
                "[day padding:none] [month repr:long case_sensitive:false] [year]"
            ),
        )
    })
    .or_else(|_| {
        Date::parse(
            s,
            format_description!(
                "[day padding:none]-[month repr:short case_sensitive:false]-[year]"
            ),
        )
    })
}

fn parse_time(s: &str) -> Option<Time> {
    Time::parse(
        s,
        format_description!("[hour]:[minute]:[second].[subsecond]"),
    )
    .or_else(|_| Time::parse(s, format_description!("[hour]:[minute]:[second]")))
    .or_else(|_| Time::parse(s, format_description!("[hour]:[minute]")))
    .ok()
}

/// Serials count days from 1899-12-30, so the 1900 leap-year bug shifts
/// dates before March 1900 by one day.
pub fn from_excel_serial(serial: f64) -> Option<PrimitiveDateTime> {
    if !serial.is_finite() || !(0.0..=MAX_EXCEL_SERIAL).contains(&serial) {
        return None;
    }

    let days = serial.trunc();
    let seconds = ((serial - days) * 86_400.0).round();

    datetime!(1899-12-30 0:00)
        .checked_add(Duration::days(days as i64))?
        .checked_add(Duration::seconds(seconds as i64))
}
