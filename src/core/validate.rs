use chrono::NaiveTime;

use crate::error::HealthError;

/// The fixed mood label set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Happy,
    Calm,
    Neutral,
    Tired,
    Sad,
    Stressed,
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Self::Happy,
        Self::Calm,
        Self::Neutral,
        Self::Tired,
        Self::Sad,
        Self::Stressed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Calm => "Calm",
            Self::Neutral => "Neutral",
            Self::Tired => "Tired",
            Self::Sad => "Sad",
            Self::Stressed => "Stressed",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

const MAX_SLEEP_HOURS: f64 = 24.0;

/// Parse sleep hours: a finite number between 0 and 24.
pub fn sleep_hours(input: &str) -> Result<f64, HealthError> {
    let hours: f64 = input
        .trim()
        .parse()
        .map_err(|_| HealthError::validation(format!("invalid sleep hours: {}", input)))?;
    if !hours.is_finite() || hours < 0.0 {
        return Err(HealthError::validation(format!(
            "sleep hours must be a non-negative number, got {}",
            input
        )));
    }
    if hours > MAX_SLEEP_HOURS {
        return Err(HealthError::validation(format!(
            "sleep hours cannot exceed {}, got {}",
            MAX_SLEEP_HOURS, input
        )));
    }
    Ok(hours)
}

/// Parse a step count: a non-negative integer.
pub fn steps(input: &str) -> Result<u64, HealthError> {
    input
        .trim()
        .parse()
        .map_err(|_| HealthError::validation(format!("steps must be a whole number >= 0, got {}", input)))
}

/// Match a mood label case-insensitively.
pub fn mood(input: &str) -> Result<Mood, HealthError> {
    let wanted = input.trim();
    Mood::ALL
        .into_iter()
        .find(|m| m.label().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| {
            let labels: Vec<&str> = Mood::ALL.iter().map(|m| m.label()).collect();
            HealthError::validation(format!(
                "unknown mood '{}' (expected one of: {})",
                input,
                labels.join(", ")
            ))
        })
}

/// Weight (kg) and height (cm) for a BMI calculation.
pub fn body_measurements(kg: f64, cm: f64) -> Result<(f64, f64), HealthError> {
    if !kg.is_finite() || kg <= 0.0 || !cm.is_finite() || cm <= 0.0 {
        return Err(HealthError::validation("please enter valid numbers"));
    }
    Ok((kg, cm))
}

/// Reminder time of day, normalized to `HH:MM`.
pub fn reminder_time(input: &str) -> Result<String, HealthError> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M")
        .map(|t| t.format("%H:%M").to_string())
        .map_err(|_| HealthError::validation(format!("time must be HH:MM, got {}", input)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sleep_hours_rejects_bad_input() {
        assert_eq!(sleep_hours("7.5").unwrap(), 7.5);
        assert_eq!(sleep_hours(" 0 ").unwrap(), 0.0);
        assert!(sleep_hours("-1").is_err());
        assert!(sleep_hours("abc").is_err());
        assert!(sleep_hours("NaN").is_err());
        assert!(sleep_hours("inf").is_err());
        assert!(sleep_hours("25").is_err());
    }

    #[test]
    fn steps_must_be_whole_and_non_negative() {
        assert_eq!(steps("5000").unwrap(), 5000);
        assert!(steps("-3").is_err());
        assert!(steps("12.5").is_err());
        assert!(steps("").is_err());
    }

    #[test]
    fn mood_matches_case_insensitively() {
        assert_eq!(mood("happy").unwrap(), Mood::Happy);
        assert_eq!(mood("STRESSED").unwrap(), Mood::Stressed);
        let err = mood("elated").unwrap_err();
        assert!(matches!(err, HealthError::Validation(_)));
        assert!(err.to_string().contains("Happy"));
    }

    #[test]
    fn body_measurements_must_be_positive() {
        assert!(body_measurements(70.0, 175.0).is_ok());
        assert!(body_measurements(0.0, 175.0).is_err());
        assert!(body_measurements(70.0, f64::NAN).is_err());
    }

    #[test]
    fn reminder_time_normalizes() {
        assert_eq!(reminder_time("7:05").unwrap(), "07:05");
        assert!(reminder_time("25:00").is_err());
    }
}
