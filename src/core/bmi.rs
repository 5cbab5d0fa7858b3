use chrono::{DateTime, Utc};

use crate::error::HealthError;
use crate::models::HealthDocument;
use crate::models::document::{BmiCategory, BmiRecord};

/// BMI from weight in kg and height in cm, rounded to one decimal.
pub fn calc_bmi(kg: f64, cm: f64) -> f64 {
    let m = cm / 100.0;
    (kg / (m * m) * 10.0).round() / 10.0
}

/// Validate inputs, compute the BMI and store it as the saved reading.
pub fn record_bmi(
    doc: &mut HealthDocument,
    kg: f64,
    cm: f64,
    now: DateTime<Utc>,
) -> Result<BmiRecord, HealthError> {
    let (kg, cm) = crate::core::validate::body_measurements(kg, cm)?;
    let value = calc_bmi(kg, cm);
    let record = BmiRecord {
        value,
        category: BmiCategory::from_value(value),
        recorded_at: now,
    };
    doc.bmi = Some(record.clone());
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn reference_values() {
        assert_eq!(calc_bmi(70.0, 175.0), 22.9);
        assert_eq!(BmiCategory::from_value(calc_bmi(70.0, 175.0)), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_value(calc_bmi(100.0, 160.0)), BmiCategory::Obese);
    }

    #[test]
    fn category_boundaries() {
        assert_eq!(BmiCategory::from_value(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_value(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_value(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_value(30.0), BmiCategory::Obese);
    }

    #[test]
    fn record_rejects_invalid_input_without_touching_doc() {
        let mut doc = HealthDocument::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert!(record_bmi(&mut doc, -5.0, 170.0, Utc::now()).is_err());
        assert!(doc.bmi.is_none());
        let rec = record_bmi(&mut doc, 70.0, 175.0, Utc::now()).unwrap();
        assert_eq!(doc.bmi.as_ref(), Some(&rec));
    }
}
