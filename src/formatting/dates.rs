use crate::constants::DISPLAY_DATE_FORMAT;
use crate::model::PublicationDate;
use chrono::Locale;

/// Formats a publication date for display, e.g. `25 mar 2021`.
pub fn display_date(date: &PublicationDate) -> String {
    date.as_datetime()
        .format_localized(DISPLAY_DATE_FORMAT, Locale::pt_BR)
        .to_string()
}

/// Display date, or an empty string for unpublished documents.
pub fn display_optional_date(date: Option<&PublicationDate>) -> String {
    date.map(display_date).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_month_year_order() {
        let date = PublicationDate::parse("2021-03-25T19:25:28+0000").unwrap();
        assert_eq!(display_date(&date), "25 mar 2021");

        let early = PublicationDate::parse("2021-03-05T19:25:28+0000").unwrap();
        assert_eq!(display_date(&early), "05 mar 2021");
    }

    #[test]
    fn test_unpublished_shows_nothing() {
        assert_eq!(display_optional_date(None), "");
    }
}
