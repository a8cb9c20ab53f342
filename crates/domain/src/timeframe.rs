use chrono::{DateTime, Duration, Utc};

/// A named relative date window ending now, used to filter statistics and
/// progress queries by workout start time.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Timeframe {
    Week,
    Month,
    ThreeMonths,
    Year,
    All,
}

impl Timeframe {
    /// The start of the window ending at `now`, or `None` for [`Timeframe::All`].
    #[must_use]
    pub fn window_start(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let days = match self {
            Timeframe::Week => 7,
            Timeframe::Month => 30,
            Timeframe::ThreeMonths => 91,
            Timeframe::Year => 365,
            Timeframe::All => return None,
        };
        Some(now - Duration::days(days))
    }

    #[must_use]
    pub fn contains(self, now: DateTime<Utc>, time: DateTime<Utc>) -> bool {
        time <= now
            && self
                .window_start(now)
                .is_none_or(|start| time >= start)
    }
}

impl TryFrom<&str> for Timeframe {
    type Error = TimeframeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "week" => Ok(Timeframe::Week),
            "month" => Ok(Timeframe::Month),
            "3months" => Ok(Timeframe::ThreeMonths),
            "year" => Ok(Timeframe::Year),
            "all" => Ok(Timeframe::All),
            _ => Err(TimeframeError::Invalid(value.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TimeframeError {
    #[error("Invalid timeframe: {0}")]
    Invalid(String),
}
