//! Display-duration formatting for experience and education entries.

use chrono::NaiveDate;

/// "Jun 2020 – Present", "Jun 2020 – Mar 2022", or just "Jun 2020" when the
/// entry is neither current nor ended.
pub fn month_year_span(start: NaiveDate, end: Option<NaiveDate>, is_current: bool) -> String {
    span(start, end, is_current, "%b %Y")
}

/// Year-granularity variant, e.g. "2020 – 2023".
pub fn year_span(start: NaiveDate, end: Option<NaiveDate>, is_current: bool) -> String {
    span(start, end, is_current, "%Y")
}

fn span(start: NaiveDate, end: Option<NaiveDate>, is_current: bool, fmt: &str) -> String {
    let start = start.format(fmt);
    if is_current {
        format!("{start} – Present")
    } else if let Some(end) = end {
        format!("{start} – {}", end.format(fmt))
    } else {
        start.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_year_span() {
        let start = NaiveDate::from_ymd_opt(2021, 1, 15).unwrap();
        let end = NaiveDate::from_ymd_opt(2021, 12, 31).unwrap();

        assert_eq!(month_year_span(start, None, true), "Jan 2021 – Present");
        assert_eq!(month_year_span(start, Some(end), false), "Jan 2021 – Dec 2021");
        assert_eq!(month_year_span(start, None, false), "Jan 2021");
        // is_current wins over a stale end date
        assert_eq!(month_year_span(start, Some(end), true), "Jan 2021 – Present");
    }

    #[test]
    fn test_year_span() {
        let start = NaiveDate::from_ymd_opt(2019, 9, 1).unwrap();
        assert_eq!(year_span(start, None, true), "2019 – Present");
    }
}
