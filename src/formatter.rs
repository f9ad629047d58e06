//! Clock and calendar formatting for the showcase panel
//!
//! Everything here is pure: an instant (or a date) goes in, display strings or
//! calendar cells come out. An instant that failed validation is passed as
//! `None` and always renders as [`INVALID_DATE`].

use chrono::{DateTime, Datelike, FixedOffset, Locale, NaiveDate};

/// Rendered in place of a time or date when the instant is not valid.
pub const INVALID_DATE: &str = "Invalid Date";

/// Column headers for the 7-column month grid, Sunday first.
pub const WEEKDAY_HEADER: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// 12-hour clock with zero-padded components and an AM/PM suffix.
const TIME_PATTERN: &str = "%I:%M:%S %p";

/// British long date; the comma after the weekday is stripped afterwards.
const UK_DATE_PATTERN: &str = "%A, %-d %B %Y";

/// Parse an RFC 3339 timestamp. Anything else is an invalid instant.
pub fn parse_instant(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw.trim()).ok()
}

/// Format the time of day as `hh:mm:ss AM|PM`.
///
/// The time format is the same for every locale; only the date follows the
/// UK/other branch.
pub fn format_time(instant: Option<&DateTime<FixedOffset>>) -> String {
    match instant {
        Some(instant) => instant.format(TIME_PATTERN).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Full ("dateStyle: full") date pattern of a locale, with chrono's localized
/// weekday and month names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FullDateStyle {
    #[default]
    EnglishUs,
    /// Commonwealth English without a comma: "Monday 3 June 2024"
    EnglishDayFirst,
    /// "Monday, 3 June 2024"
    EnglishDayFirstComma,
    German,
    French,
    Spanish,
    Italian,
    Dutch,
    Portuguese,
    Japanese,
}

impl FullDateStyle {
    /// Pick the style for a language tag such as `de-AT`. English also looks
    /// at the region, since most regions outside the US put the day first.
    /// Unknown languages use US English.
    pub fn for_tag(tag: Option<&str>) -> Self {
        let mut subtags = tag.unwrap_or_default().split('-');
        let language = subtags.next().map(|lang| lang.to_ascii_lowercase());
        let region = subtags.next().map(|region| region.to_ascii_uppercase());

        match language.as_deref() {
            Some("en") => match region.as_deref() {
                Some("GB" | "AU" | "IE") => FullDateStyle::EnglishDayFirst,
                Some("NZ" | "IN") => FullDateStyle::EnglishDayFirstComma,
                _ => FullDateStyle::EnglishUs,
            },
            Some("de") => FullDateStyle::German,
            Some("fr") => FullDateStyle::French,
            Some("es") => FullDateStyle::Spanish,
            Some("it") => FullDateStyle::Italian,
            Some("nl") => FullDateStyle::Dutch,
            Some("pt") => FullDateStyle::Portuguese,
            Some("ja") => FullDateStyle::Japanese,
            _ => FullDateStyle::EnglishUs,
        }
    }

    pub fn pattern(&self) -> &'static str {
        match self {
            FullDateStyle::EnglishUs => "%A, %B %-d, %Y",
            FullDateStyle::EnglishDayFirst => "%A %-d %B %Y",
            FullDateStyle::EnglishDayFirstComma => "%A, %-d %B %Y",
            FullDateStyle::German => "%A, %-d. %B %Y",
            FullDateStyle::French => "%A %-d %B %Y",
            FullDateStyle::Spanish => "%A, %-d de %B de %Y",
            FullDateStyle::Italian => "%A %-d %B %Y",
            FullDateStyle::Dutch => "%A %-d %B %Y",
            FullDateStyle::Portuguese => "%A, %-d de %B de %Y",
            FullDateStyle::Japanese => "%Y年%-m月%-d日%A",
        }
    }

    fn locale(&self) -> Locale {
        match self {
            FullDateStyle::EnglishUs => Locale::en_US,
            FullDateStyle::EnglishDayFirst | FullDateStyle::EnglishDayFirstComma => Locale::en_GB,
            FullDateStyle::German => Locale::de_DE,
            FullDateStyle::French => Locale::fr_FR,
            FullDateStyle::Spanish => Locale::es_ES,
            FullDateStyle::Italian => Locale::it_IT,
            FullDateStyle::Dutch => Locale::nl_NL,
            FullDateStyle::Portuguese => Locale::pt_BR,
            FullDateStyle::Japanese => Locale::ja_JP,
        }
    }
}

/// Date/time formatter with its options resolved once.
///
/// Built when the showcase mounts, from the same locale tag that decides the
/// UK branch. `default_style` is what the non-UK branch renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateFormatter {
    default_style: FullDateStyle,
}

impl DateFormatter {
    pub fn for_tag(tag: Option<&str>) -> Self {
        Self {
            default_style: FullDateStyle::for_tag(tag),
        }
    }

    pub fn format_time(&self, instant: Option<&DateTime<FixedOffset>>) -> String {
        format_time(instant)
    }

    /// `is_uk` renders "Weekday Day Month Year" with no comma after the
    /// weekday. Otherwise the environment locale's full date style is used.
    pub fn format_date(&self, instant: Option<&DateTime<FixedOffset>>, is_uk: bool) -> String {
        let Some(instant) = instant else {
            return INVALID_DATE.to_string();
        };

        if is_uk {
            instant.format(UK_DATE_PATTERN).to_string().replacen(',', "", 1)
        } else {
            instant
                .format_localized(self.default_style.pattern(), self.default_style.locale())
                .to_string()
        }
    }
}

/// One slot in the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell {
    /// Leading filler before the first of the month
    Blank,
    Day { day: u32, is_today: bool },
}

/// Number of days in a month: the day number of the day before the first of
/// the following month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// Flat grid for the month containing `today`: one blank per weekday before
/// the 1st (Sunday = 0), then every day of the month. Row wrapping is left to
/// the 7-column layout.
pub fn build_month_grid(today: NaiveDate) -> Vec<CalendarCell> {
    let first = today.with_day(1).unwrap_or(today);
    let offset = first.weekday().num_days_from_sunday() as usize;
    let days = days_in_month(today.year(), today.month());

    let mut cells = Vec::with_capacity(offset + days as usize);
    cells.extend(std::iter::repeat(CalendarCell::Blank).take(offset));
    cells.extend((1..=days).map(|day| CalendarCell::Day {
        day,
        is_today: day == today.day(),
    }));
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    /// `hh:mm:ss AM|PM` with two-digit components.
    fn matches_time_pattern(s: &str) -> bool {
        let bytes = s.as_bytes();
        if bytes.len() != 11 {
            return false;
        }
        [0, 1, 3, 4, 6, 7].iter().all(|&i| bytes[i].is_ascii_digit())
            && bytes[2] == b':'
            && bytes[5] == b':'
            && bytes[8] == b' '
            && (&s[9..] == "AM" || &s[9..] == "PM")
    }

    fn at(raw: &str) -> DateTime<FixedOffset> {
        parse_instant(raw).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case("2024-06-03T09:05:07+01:00", "09:05:07 AM")]
    #[case("2024-06-03T00:00:00+00:00", "12:00:00 AM")]
    #[case("2024-06-03T12:00:00+00:00", "12:00:00 PM")]
    #[case("2024-06-03T23:59:59-05:00", "11:59:59 PM")]
    fn test_format_time(#[case] raw: &str, #[case] expected: &str) {
        let instant = at(raw);
        let formatted = format_time(Some(&instant));
        assert_eq!(formatted, expected);
        assert!(matches_time_pattern(&formatted));
    }

    #[test]
    fn test_format_time_pattern_over_a_day() {
        let start = at("2024-03-10T00:00:00+00:00");
        for minutes in (0..24 * 60).step_by(7) {
            let instant = start + chrono::Duration::minutes(minutes) + chrono::Duration::seconds(minutes % 60);
            let formatted = format_time(Some(&instant));
            assert!(matches_time_pattern(&formatted), "bad time {formatted:?}");
        }
    }

    #[test]
    fn test_time_ignores_locale() {
        let instant = at("2024-06-03T15:04:05+00:00");
        let uk = DateFormatter::for_tag(Some("en-GB"));
        let de = DateFormatter::for_tag(Some("de-DE"));
        assert_eq!(uk.format_time(Some(&instant)), de.format_time(Some(&instant)));
    }

    #[test]
    fn test_invalid_instant() {
        let formatter = DateFormatter::for_tag(Some("fr-FR"));
        assert_eq!(format_time(None), "Invalid Date");
        assert_eq!(formatter.format_date(None, true), "Invalid Date");
        assert_eq!(formatter.format_date(None, false), "Invalid Date");
        assert_eq!(format_time(parse_instant("yesterday-ish").as_ref()), INVALID_DATE);
    }

    #[test]
    fn test_uk_date_has_no_comma() {
        let formatter = DateFormatter::for_tag(Some("en-GB"));
        let instant = at("2024-06-03T09:05:07+01:00");
        let formatted = formatter.format_date(Some(&instant), true);
        assert_eq!(formatted, "Monday 3 June 2024");
        assert!(!formatted.contains(','));
    }

    #[test]
    fn test_default_branch_differs_from_uk() {
        let formatter = DateFormatter::for_tag(Some("en-US"));
        let instant = at("2024-06-03T09:05:07+01:00");
        let uk = formatter.format_date(Some(&instant), true);
        let other = formatter.format_date(Some(&instant), false);
        assert_eq!(other, "Monday, June 3, 2024");
        assert_ne!(uk, other);
    }

    #[rstest]
    #[case(Some("de-DE"), "Montag, 3. Juni 2024")]
    #[case(Some("fr-CA"), "lundi 3 juin 2024")]
    #[case(Some("en-AU"), "Monday 3 June 2024")]
    #[case(Some("en-IE"), "Monday 3 June 2024")]
    #[case(Some("en-NZ"), "Monday, 3 June 2024")]
    #[case(Some("en-IN"), "Monday, 3 June 2024")]
    #[case(Some("en"), "Monday, June 3, 2024")]
    #[case(Some("en-CA"), "Monday, June 3, 2024")]
    #[case(Some("xx-YY"), "Monday, June 3, 2024")]
    #[case(None, "Monday, June 3, 2024")]
    fn test_default_locale_full_style(#[case] tag: Option<&str>, #[case] expected: &str) {
        let formatter = DateFormatter::for_tag(tag);
        let instant = at("2024-06-03T09:05:07+01:00");
        assert_eq!(formatter.format_date(Some(&instant), false), expected);
    }

    #[test]
    fn test_style_for_tag() {
        assert_eq!(FullDateStyle::for_tag(Some("DE-at")), FullDateStyle::German);
        assert_eq!(FullDateStyle::for_tag(Some("ja")), FullDateStyle::Japanese);
        assert_eq!(FullDateStyle::for_tag(Some("en-GB")), FullDateStyle::EnglishDayFirst);
        assert_eq!(FullDateStyle::for_tag(Some("EN-au")), FullDateStyle::EnglishDayFirst);
        assert_eq!(FullDateStyle::for_tag(Some("en-US")), FullDateStyle::EnglishUs);
    }

    #[rstest]
    #[case(2024, 2, 29)]
    #[case(2023, 2, 28)]
    #[case(2000, 2, 29)]
    #[case(1900, 2, 28)]
    #[case(2024, 12, 31)]
    #[case(2024, 4, 30)]
    #[case(2025, 1, 31)]
    fn test_days_in_month(#[case] year: i32, #[case] month: u32, #[case] expected: u32) {
        assert_eq!(days_in_month(year, month), expected);
    }

    #[test]
    fn test_grid_thirty_days_starting_wednesday() {
        // 1 November 2023 was a Wednesday
        let cells = build_month_grid(date(2023, 11, 15));
        assert_eq!(cells.len(), 3 + 30);
        assert!(cells[..3].iter().all(|c| *c == CalendarCell::Blank));

        let days: Vec<_> = cells[3..].to_vec();
        for (i, cell) in days.iter().enumerate() {
            let expected_day = i as u32 + 1;
            assert_eq!(
                *cell,
                CalendarCell::Day {
                    day: expected_day,
                    is_today: expected_day == 15,
                }
            );
        }
        let today_count = cells
            .iter()
            .filter(|c| matches!(c, CalendarCell::Day { is_today: true, .. }))
            .count();
        assert_eq!(today_count, 1);
    }

    #[test]
    fn test_grid_leap_february() {
        // 1 February 2024 was a Thursday
        let cells = build_month_grid(date(2024, 2, 29));
        assert_eq!(cells.len(), 4 + 29);
        assert_eq!(cells.last(), Some(&CalendarCell::Day { day: 29, is_today: true }));

        let cells = build_month_grid(date(2023, 2, 1));
        let day_cells = cells.iter().filter(|c| matches!(c, CalendarCell::Day { .. })).count();
        assert_eq!(day_cells, 28);
    }

    #[test]
    fn test_grid_december_rollover() {
        // 1 December 2024 was a Sunday
        let cells = build_month_grid(date(2024, 12, 31));
        assert_eq!(cells.first(), Some(&CalendarCell::Day { day: 1, is_today: false }));
        assert_eq!(cells.len(), 31);
    }

    #[test]
    fn test_parse_instant() {
        assert!(parse_instant(" 2024-06-03T09:05:07Z ").is_some());
        assert!(parse_instant("2024-02-30T00:00:00Z").is_none());
        assert!(parse_instant("").is_none());
    }
}
