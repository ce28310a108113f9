use thiserror::Error;

/// Errors raised while building calendar days or date ranges.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// Year cannot be represented as a calendar date.
    #[error("year {year} is outside the supported calendar range")]
    YearOutOfRange { year: i32 },
}

pub type Result<T> = std::result::Result<T, CalendarError>;
