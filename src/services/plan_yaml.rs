use std::collections::{BTreeMap, BTreeSet};
use std::io::{self, Write};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::capacity::{Capacity, CapacityFields, CapacityType};
use crate::domain::error::{PlanError, non_negative};
use crate::domain::evaluation::{Evaluation, EvaluationRoster, EvaluationStatus};
use crate::domain::macrocycle::{Macrocycle, Period, Stage};
use crate::domain::plan::TrainingPlan;
use crate::domain::weekly_record::WeeklyRecord;

#[derive(Error, Debug)]
pub enum PlanYamlError {
    #[error("failed to read plan yaml: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse plan yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: u64 },
    #[error("invalid plan data: {0}")]
    Invalid(#[from] PlanError),
}

#[derive(Serialize, Deserialize)]
struct PlanRecord {
    macrocycle: MacrocycleRecord,
    #[serde(default)]
    capacities: Vec<CapacityRecord>,
    #[serde(default)]
    weekly_records: Vec<WeeklyRecordRecord>,
    #[serde(default)]
    evaluations: Vec<EvaluationRecord>,
}

#[derive(Serialize, Deserialize)]
struct MacrocycleRecord {
    start_date: String,
    #[serde(default)]
    periods: Vec<PeriodRecord>,
    #[serde(default)]
    stages: Vec<StageRecord>,
}

#[derive(Serialize, Deserialize)]
struct PeriodRecord {
    name: String,
    percent_weight: i64,
    weeks: i64,
    #[serde(default)]
    color_tag: String,
}

#[derive(Serialize, Deserialize)]
struct StageRecord {
    name: String,
    weeks: i64,
}

#[derive(Serialize, Deserialize)]
struct CapacityRecord {
    id: u64,
    name: String,
    unit: Option<String>,
    exercises: i64,
    reps: i64,
    series: i64,
    freq: i64,
    #[serde(rename = "type")]
    capacity_type: Option<String>,
    color: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct WeeklyRecordRecord {
    week: u32,
    volume: i64,
    intensity: i64,
    fatigue: i64,
    performance: i64,
    #[serde(default)]
    period: String,
    #[serde(default)]
    stage: String,
    date: String,
}

#[derive(Serialize, Deserialize)]
struct EvaluationRecord {
    id: u64,
    athlete_name: String,
    category: String,
    date: String,
    #[serde(rename = "type")]
    evaluation_type: String,
    status: String,
    #[serde(default)]
    results: BTreeMap<String, i64>,
    #[serde(default)]
    notes: String,
}

pub fn load_plan_from_yaml_file(path: &str) -> Result<TrainingPlan, PlanYamlError> {
    let contents = std::fs::read_to_string(path)?;
    let plan = deserialize_plan_from_yaml_str(&contents)?;
    tracing::debug!(path, capacities = plan.capacities().len(), "plan loaded");
    Ok(plan)
}

pub fn save_plan_to_yaml_file(path: &str, plan: &TrainingPlan) -> Result<(), PlanYamlError> {
    let mut buffer = Vec::new();
    serialize_plan_to_yaml(&mut buffer, plan)?;
    std::fs::write(path, buffer)?;
    tracing::debug!(path, "plan saved");
    Ok(())
}

/// Loads the plan, applies `edit` and writes the plan back only if the edit succeeded.
pub fn update_plan_yaml_file<T>(
    path: &str,
    edit: impl FnOnce(&mut TrainingPlan) -> Result<T, PlanError>,
) -> Result<T, PlanYamlError> {
    let mut plan = load_plan_from_yaml_file(path)?;
    let outcome = edit(&mut plan)?;
    save_plan_to_yaml_file(path, &plan)?;
    Ok(outcome)
}

pub fn deserialize_plan_from_yaml_str(input: &str) -> Result<TrainingPlan, PlanYamlError> {
    let record: PlanRecord = serde_yaml::from_str(input)?;

    let macrocycle = macrocycle_from_record(record.macrocycle)?;

    let mut capacity_ids = BTreeSet::new();
    let capacities = record
        .capacities
        .into_iter()
        .map(|c| {
            if !capacity_ids.insert(c.id) {
                return Err(PlanYamlError::DuplicateId {
                    kind: "capacity",
                    id: c.id,
                });
            }
            capacity_from_record(c)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let weekly_records = record
        .weekly_records
        .into_iter()
        .map(weekly_record_from_record)
        .collect::<Result<Vec<_>, _>>()?;

    let mut evaluation_ids = BTreeSet::new();
    let evaluations = record
        .evaluations
        .into_iter()
        .map(|e| {
            if !evaluation_ids.insert(e.id) {
                return Err(PlanYamlError::DuplicateId {
                    kind: "evaluation",
                    id: e.id,
                });
            }
            evaluation_from_record(e)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let plan = TrainingPlan::from_parts(
        macrocycle,
        capacities,
        weekly_records,
        EvaluationRoster::from_evaluations(evaluations),
    );
    for warning in plan.consistency_warnings() {
        tracing::warn!("{warning}");
    }
    Ok(plan)
}

pub fn serialize_plan_to_yaml<W: Write>(writer: &mut W, plan: &TrainingPlan) -> io::Result<()> {
    let macrocycle = plan.macrocycle();
    let record = PlanRecord {
        macrocycle: MacrocycleRecord {
            start_date: format_date(macrocycle.start_date),
            periods: macrocycle
                .periods
                .iter()
                .map(|p| PeriodRecord {
                    name: p.name.clone(),
                    percent_weight: i64::from(p.percent_weight),
                    weeks: i64::from(p.weeks),
                    color_tag: p.color_tag.clone(),
                })
                .collect(),
            stages: macrocycle
                .stages
                .iter()
                .map(|s| StageRecord {
                    name: s.name.clone(),
                    weeks: i64::from(s.weeks),
                })
                .collect(),
        },
        capacities: plan.capacities().iter().map(capacity_to_record).collect(),
        weekly_records: plan
            .weekly_records()
            .iter()
            .map(weekly_record_to_record)
            .collect(),
        evaluations: plan
            .evaluations()
            .evaluations()
            .iter()
            .map(evaluation_to_record)
            .collect(),
    };

    let yaml = serde_yaml::to_string(&record).map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}

fn macrocycle_from_record(record: MacrocycleRecord) -> Result<Macrocycle, PlanYamlError> {
    let periods = record
        .periods
        .into_iter()
        .map(|p| {
            Ok(Period {
                percent_weight: non_negative("percent_weight", p.percent_weight)?,
                weeks: non_negative("weeks", p.weeks)?,
                name: p.name,
                color_tag: p.color_tag,
            })
        })
        .collect::<Result<Vec<_>, PlanError>>()?;
    let stages = record
        .stages
        .into_iter()
        .map(|s| {
            Ok(Stage {
                weeks: non_negative("weeks", s.weeks)?,
                name: s.name,
            })
        })
        .collect::<Result<Vec<_>, PlanError>>()?;

    let macrocycle = Macrocycle {
        start_date: parse_date(&record.start_date)?,
        periods,
        stages,
    };
    macrocycle.validate_totals()?;
    Ok(macrocycle)
}

fn capacity_from_record(record: CapacityRecord) -> Result<Capacity, PlanYamlError> {
    let capacity_type = record
        .capacity_type
        .as_deref()
        .map(str::parse::<CapacityType>)
        .transpose()?;
    let fields = CapacityFields {
        name: Some(record.name),
        unit: record.unit,
        exercises: Some(record.exercises),
        reps: Some(record.reps),
        series: Some(record.series),
        freq: Some(record.freq),
        capacity_type,
        color: record.color,
    };
    Ok(fields.into_capacity(record.id)?)
}

fn capacity_to_record(capacity: &Capacity) -> CapacityRecord {
    CapacityRecord {
        id: capacity.id,
        name: capacity.name.clone(),
        unit: Some(capacity.unit.clone()),
        exercises: i64::from(capacity.exercises),
        reps: i64::from(capacity.reps),
        series: i64::from(capacity.series),
        freq: i64::from(capacity.freq),
        capacity_type: Some(capacity.capacity_type.label().to_string()),
        color: Some(capacity.color.clone()),
    }
}

// Stored percentages above 100 are kept as-is; only the edit path range-checks them.
fn weekly_record_from_record(record: WeeklyRecordRecord) -> Result<WeeklyRecord, PlanYamlError> {
    Ok(WeeklyRecord {
        week: record.week,
        volume: non_negative("volume", record.volume)?,
        intensity: non_negative("intensity", record.intensity)?,
        fatigue: non_negative("fatigue", record.fatigue)?,
        performance: non_negative("performance", record.performance)?,
        period_tag: record.period,
        stage_tag: record.stage,
        date: parse_date(&record.date)?,
    })
}

fn weekly_record_to_record(record: &WeeklyRecord) -> WeeklyRecordRecord {
    WeeklyRecordRecord {
        week: record.week,
        volume: i64::from(record.volume),
        intensity: i64::from(record.intensity),
        fatigue: i64::from(record.fatigue),
        performance: i64::from(record.performance),
        period: record.period_tag.clone(),
        stage: record.stage_tag.clone(),
        date: format_date(record.date),
    }
}

fn evaluation_from_record(record: EvaluationRecord) -> Result<Evaluation, PlanYamlError> {
    let results = record
        .results
        .into_iter()
        .map(|(metric, value)| {
            let score = non_negative(&metric, value)?;
            Ok((metric, score))
        })
        .collect::<Result<BTreeMap<_, _>, PlanError>>()?;

    Ok(Evaluation {
        id: record.id,
        athlete_name: record.athlete_name,
        category: record.category,
        date: parse_date(&record.date)?,
        evaluation_type: record.evaluation_type,
        status: record.status.parse::<EvaluationStatus>()?,
        results,
        notes: record.notes,
    })
}

fn evaluation_to_record(evaluation: &Evaluation) -> EvaluationRecord {
    EvaluationRecord {
        id: evaluation.id,
        athlete_name: evaluation.athlete_name.clone(),
        category: evaluation.category.clone(),
        date: format_date(evaluation.date),
        evaluation_type: evaluation.evaluation_type.clone(),
        status: evaluation.status.as_str().to_string(),
        results: evaluation
            .results
            .iter()
            .map(|(metric, score)| (metric.clone(), i64::from(*score)))
            .collect(),
        notes: evaluation.notes.clone(),
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate, PlanYamlError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| PlanYamlError::InvalidDate(value.to_string()))
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
