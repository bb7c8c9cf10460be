use chrono::NaiveDate;

use crate::domain::error::{PlanError, non_negative};

/// One microcycle row: the load and response figures of a single plan week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyRecord {
    pub week: u32,
    pub volume: u32,
    pub intensity: u32,
    pub fatigue: u32,
    pub performance: u32,
    pub period_tag: String,
    pub stage_tag: String,
    pub date: NaiveDate,
}

impl WeeklyRecord {
    pub fn new(week: u32, date: NaiveDate) -> Self {
        Self {
            week,
            volume: 0,
            intensity: 0,
            fatigue: 0,
            performance: 0,
            period_tag: String::new(),
            stage_tag: String::new(),
            date,
        }
    }

    /// Display label used on chart axes, e.g. `S3`.
    pub fn label(&self) -> String {
        format!("S{}", self.week)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyRecordFields {
    pub volume: Option<i64>,
    pub intensity: Option<i64>,
    pub fatigue: Option<i64>,
    pub performance: Option<i64>,
    pub period_tag: Option<String>,
    pub stage_tag: Option<String>,
    pub date: Option<NaiveDate>,
}

impl WeeklyRecordFields {
    pub fn apply_to(self, record: &mut WeeklyRecord) -> Result<(), PlanError> {
        let volume = self.volume.map(|v| non_negative("volume", v)).transpose()?;
        let intensity = self
            .intensity
            .map(|v| percentage("intensity", v))
            .transpose()?;
        let fatigue = self.fatigue.map(|v| percentage("fatigue", v)).transpose()?;
        let performance = self
            .performance
            .map(|v| percentage("performance", v))
            .transpose()?;

        if let Some(volume) = volume {
            record.volume = volume;
        }
        if let Some(intensity) = intensity {
            record.intensity = intensity;
        }
        if let Some(fatigue) = fatigue {
            record.fatigue = fatigue;
        }
        if let Some(performance) = performance {
            record.performance = performance;
        }
        if let Some(period_tag) = self.period_tag {
            record.period_tag = period_tag;
        }
        if let Some(stage_tag) = self.stage_tag {
            record.stage_tag = stage_tag;
        }
        if let Some(date) = self.date {
            record.date = date;
        }
        Ok(())
    }
}

fn percentage(field: &str, value: i64) -> Result<u32, PlanError> {
    let value = non_negative(field, value)?;
    if value > 100 {
        return Err(PlanError::invalid_argument(field, value));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::on_date;

    #[test]
    fn label_uses_week_number() {
        let record = WeeklyRecord::new(12, on_date(2024, 6, 17));
        assert_eq!(record.label(), "S12");
    }

    #[test]
    fn fields_update_only_supplied_values() {
        let mut record = WeeklyRecord::new(1, on_date(2024, 4, 1));
        record.volume = 400;
        let fields = WeeklyRecordFields {
            intensity: Some(70),
            stage_tag: Some("E. GENERAL".to_string()),
            ..WeeklyRecordFields::default()
        };

        fields.apply_to(&mut record).unwrap();
        assert_eq!(record.volume, 400);
        assert_eq!(record.intensity, 70);
        assert_eq!(record.stage_tag, "E. GENERAL");
    }

    #[test]
    fn percentages_outside_zero_to_hundred_are_rejected() {
        let mut record = WeeklyRecord::new(1, on_date(2024, 4, 1));
        let before = record.clone();
        let fields = WeeklyRecordFields {
            volume: Some(500),
            fatigue: Some(101),
            ..WeeklyRecordFields::default()
        };

        let err = fields.apply_to(&mut record).unwrap_err();
        assert!(matches!(err, PlanError::InvalidArgument { ref field, .. } if field == "fatigue"));
        assert_eq!(record, before);
    }
}
