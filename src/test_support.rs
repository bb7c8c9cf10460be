use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::capacity::CapacityFields;
use crate::domain::evaluation::{EvaluationDraft, EvaluationStatus};
use crate::domain::macrocycle::{Macrocycle, Period, Stage};
use crate::domain::weekly_record::WeeklyRecord;

pub fn on_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// 26 weeks split 13/13 into periods and 8/5/6/7 into stages.
pub fn sample_macrocycle() -> Macrocycle {
    Macrocycle {
        start_date: on_date(2024, 4, 1),
        periods: vec![
            Period {
                name: "P. PREPARATORIO".to_string(),
                percent_weight: 60,
                weeks: 13,
                color_tag: "bg-blue-500".to_string(),
            },
            Period {
                name: "P. COMPETITIVO".to_string(),
                percent_weight: 40,
                weeks: 13,
                color_tag: "bg-emerald-500".to_string(),
            },
        ],
        stages: vec![
            Stage {
                name: "E. GENERAL".to_string(),
                weeks: 8,
            },
            Stage {
                name: "E. ESPECIAL".to_string(),
                weeks: 5,
            },
            Stage {
                name: "PRE-COMPETITIVO".to_string(),
                weeks: 6,
            },
            Stage {
                name: "COMPETITIVO".to_string(),
                weeks: 7,
            },
        ],
    }
}

pub fn build_capacity_fields(
    name: &str,
    exercises: i64,
    reps: i64,
    series: i64,
    freq: i64,
) -> CapacityFields {
    CapacityFields {
        name: Some(name.to_string()),
        exercises: Some(exercises),
        reps: Some(reps),
        series: Some(series),
        freq: Some(freq),
        ..CapacityFields::default()
    }
}

pub fn build_weekly_record(week: u32, volume: u32, intensity: u32, period: &str) -> WeeklyRecord {
    let mut record = WeeklyRecord::new(week, on_date(2024, 4, 1));
    record.volume = volume;
    record.intensity = intensity;
    record.period_tag = period.to_string();
    record
}

pub fn build_evaluation_draft(
    athlete_name: &str,
    category: &str,
    status: EvaluationStatus,
    results: &[(&str, i64)],
) -> EvaluationDraft {
    EvaluationDraft {
        athlete_name: athlete_name.to_string(),
        category: category.to_string(),
        date: on_date(2024, 1, 15),
        evaluation_type: "Física Completa".to_string(),
        status,
        results: results
            .iter()
            .map(|(metric, value)| ((*metric).to_string(), *value))
            .collect::<BTreeMap<_, _>>(),
        notes: String::new(),
    }
}
