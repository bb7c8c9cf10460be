use std::collections::BTreeMap;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::capacity::{Capacity, CapacityType};
use crate::domain::evaluation::{Evaluation, EvaluationRoster, EvaluationStatus};
use crate::domain::macrocycle::{Macrocycle, Period, Stage};
use crate::domain::plan::TrainingPlan;
use crate::domain::weekly_record::WeeklyRecord;

pub const TEMPLATE_SEED: u64 = 2024;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn template_start_date() -> NaiveDate {
    date(2024, 4, 1)
}

/// A plan with no periods, stages or entries, ready to be filled in.
pub fn empty_plan(start_date: NaiveDate) -> TrainingPlan {
    TrainingPlan::new(Macrocycle::new(start_date))
}

/// The sample season: identical on every call.
pub fn template_plan() -> TrainingPlan {
    template_plan_from(template_start_date(), TEMPLATE_SEED)
}

pub fn template_plan_from(start_date: NaiveDate, seed: u64) -> TrainingPlan {
    let macrocycle = template_macrocycle(start_date);
    let mut rng = StdRng::seed_from_u64(seed);
    let weekly_records = generate_weekly_records(&macrocycle, &mut rng);
    TrainingPlan::from_parts(
        macrocycle,
        template_capacities(),
        weekly_records,
        EvaluationRoster::from_evaluations(template_evaluations()),
    )
}

/// One record per plan week, tagged from the macrocycle and filled with
/// synthetic loads.
pub fn generate_weekly_records<R: Rng + ?Sized>(
    macrocycle: &Macrocycle,
    rng: &mut R,
) -> Vec<WeeklyRecord> {
    (1..=macrocycle.total_weeks())
        .map(|week| {
            let date = macrocycle
                .week_start_date(week)
                .unwrap_or(macrocycle.start_date);
            let mut record = WeeklyRecord::new(week, date);
            record.volume = rng.gen_range(300..800);
            record.intensity = rng.gen_range(0..100);
            record.fatigue = rng.gen_range(0..100);
            record.performance = rng.gen_range(0..100);
            if let Some(period) = macrocycle.period_for_week(week) {
                record.period_tag = period.name.clone();
            }
            if let Some(stage) = macrocycle.stage_for_week(week) {
                record.stage_tag = stage.name.clone();
            }
            record
        })
        .collect()
}

fn template_macrocycle(start_date: NaiveDate) -> Macrocycle {
    let period = |name: &str, percent_weight, weeks, color_tag: &str| Period {
        name: name.to_string(),
        percent_weight,
        weeks,
        color_tag: color_tag.to_string(),
    };
    let stage = |name: &str, weeks| Stage {
        name: name.to_string(),
        weeks,
    };
    Macrocycle {
        start_date,
        periods: vec![
            period("P. PREPARATORIO", 60, 13, "bg-blue-500"),
            period("P. COMPETITIVO", 40, 13, "bg-emerald-500"),
        ],
        stages: vec![
            stage("E. GENERAL", 8),
            stage("E. ESPECIAL", 5),
            stage("PRE-COMPETITIVO", 6),
            stage("COMPETITIVO", 7),
        ],
    }
}

fn template_capacities() -> Vec<Capacity> {
    let rows = [
        ("Coordinación General", "Rep/Tiempo", [5, 15, 2, 5], CapacityType::Fisica, "#3b82f6"),
        ("Rapidez Especial", "Repeticiones", [2, 6, 3, 3], CapacityType::Fisica, "#10b981"),
        ("Técnica General", "Repeticiones", [13, 7, 3, 5], CapacityType::Tecnica, "#8b5cf6"),
        ("Velocidad de Traslación", "Rep/Tiempo", [5, 11, 4, 3], CapacityType::Fisica, "#f59e0b"),
        ("Técnico-Táctico", "Rep/Goles", [6, 12, 3, 5], CapacityType::Tactica, "#ef4444"),
    ];
    rows.into_iter()
        .zip(1u64..)
        .map(|((name, unit, [exercises, reps, series, freq], capacity_type, color), id)| Capacity {
            id,
            name: name.to_string(),
            unit: unit.to_string(),
            exercises,
            reps,
            series,
            freq,
            capacity_type,
            color: color.to_string(),
        })
        .collect()
}

fn template_evaluations() -> Vec<Evaluation> {
    let metrics = ["velocidad", "resistencia", "fuerza", "tecnica", "flexibilidad"];
    let rows = [
        (
            "Carlos Rodríguez",
            "Sub-17",
            date(2024, 1, 15),
            "Física Completa",
            EvaluationStatus::Completada,
            [85, 78, 92, 88, 76],
            "Excelente progreso en fuerza, mantener trabajo de flexibilidad",
        ),
        (
            "Ana Martínez",
            "Sub-19",
            date(2024, 1, 14),
            "Técnica Específica",
            EvaluationStatus::Completada,
            [92, 85, 79, 95, 88],
            "Destacada en técnica, mejorar resistencia aeróbica",
        ),
        (
            "Miguel Torres",
            "Sub-15",
            date(2024, 1, 12),
            "Física Básica",
            EvaluationStatus::Pendiente,
            [72, 68, 65, 75, 70],
            "Evaluación inicial, establecer línea base",
        ),
        (
            "Laura García",
            "Senior",
            date(2024, 1, 10),
            "Rendimiento Integral",
            EvaluationStatus::Completada,
            [88, 91, 86, 89, 82],
            "Rendimiento consistente, enfocar en velocidad de reacción",
        ),
    ];

    rows.into_iter()
        .zip(1u64..)
        .map(
            |((athlete_name, category, date, evaluation_type, status, scores, notes), id)| {
                Evaluation {
                    id,
                    athlete_name: athlete_name.to_string(),
                    category: category.to_string(),
                    date,
                    evaluation_type: evaluation_type.to_string(),
                    status,
                    results: metrics
                        .iter()
                        .zip(scores)
                        .map(|(metric, score)| ((*metric).to_string(), score))
                        .collect::<BTreeMap<_, _>>(),
                    notes: notes.to_string(),
                }
            },
        )
        .collect()
}
