use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-1][0-9]|2[0-3]):[0-5][0-9]$").unwrap_or_else(|_| unreachable!())
});

pub const MAX_TITLE_LENGTH: usize = 150;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventFieldError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title must not exceed 150 characters")]
    TitleTooLong,

    #[error("Location cannot be empty")]
    EmptyLocation,

    #[error("City cannot be empty")]
    EmptyCity,

    #[error("Date must be formatted as YYYY-MM-DD")]
    InvalidDate,

    #[error("Start time must be formatted as HH:mm")]
    InvalidStartTime,

    #[error("End time must be formatted as HH:mm")]
    InvalidEndTime,
}

pub fn title(value: &str) -> Result<String, EventFieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(EventFieldError::EmptyTitle);
    }
    if value.chars().count() > MAX_TITLE_LENGTH {
        return Err(EventFieldError::TitleTooLong);
    }
    Ok(value.to_string())
}

pub fn location(value: &str) -> Result<String, EventFieldError> {
    non_empty(value, EventFieldError::EmptyLocation)
}

pub fn city(value: &str) -> Result<String, EventFieldError> {
    non_empty(value, EventFieldError::EmptyCity)
}

pub fn date(value: &str) -> Result<NaiveDate, EventFieldError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| EventFieldError::InvalidDate)
}

pub fn start_time(value: &str) -> Result<String, EventFieldError> {
    time(value, EventFieldError::InvalidStartTime)
}

pub fn end_time(value: &str) -> Result<String, EventFieldError> {
    time(value, EventFieldError::InvalidEndTime)
}

/// Blank descriptions are stored as absent.
pub fn description(value: Option<String>) -> Option<String> {
    value
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}

fn non_empty(value: &str, err: EventFieldError) -> Result<String, EventFieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(err);
    }
    Ok(value.to_string())
}

fn time(value: &str, err: EventFieldError) -> Result<String, EventFieldError> {
    let value = value.trim();
    if !TIME_RE.is_match(value) {
        return Err(err);
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_accepts_24_hour_clock() {
        for ok in ["00:00", "09:30", "19:59", "23:59"] {
            assert_eq!(start_time(ok).unwrap(), ok);
        }
    }

    #[test]
    fn time_rejects_out_of_range_or_malformed() {
        for bad in ["24:00", "9:30", "12:60", "12-30", "", "12:3"] {
            assert_eq!(start_time(bad), Err(EventFieldError::InvalidStartTime));
            assert_eq!(end_time(bad), Err(EventFieldError::InvalidEndTime));
        }
    }

    #[test]
    fn date_requires_iso_calendar_date() {
        assert_eq!(
            date("2025-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
        assert_eq!(date("2025-02-30"), Err(EventFieldError::InvalidDate));
        assert_eq!(date("01/03/2025"), Err(EventFieldError::InvalidDate));
    }

    #[test]
    fn text_fields_are_trimmed_and_required() {
        assert_eq!(title("  Launch ").unwrap(), "Launch");
        assert_eq!(title("   "), Err(EventFieldError::EmptyTitle));
        assert_eq!(
            title(&"a".repeat(MAX_TITLE_LENGTH + 1)),
            Err(EventFieldError::TitleTooLong)
        );
        assert_eq!(location(""), Err(EventFieldError::EmptyLocation));
        assert_eq!(city(" "), Err(EventFieldError::EmptyCity));
    }

    #[test]
    fn blank_description_becomes_none() {
        assert_eq!(description(Some("  ".to_string())), None);
        assert_eq!(
            description(Some(" Launch party ".to_string())),
            Some("Launch party".to_string())
        );
        assert_eq!(description(None), None);
    }
}
