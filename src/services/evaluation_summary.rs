use std::collections::BTreeMap;

use crate::domain::evaluation::{EVALUATION_CATEGORIES, EvaluationRoster, EvaluationStatus};
use crate::services::distribution::{CategoryCount, count_by_category};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Rounded mean of completed evaluations' aggregate scores.
    pub average_score: Option<u64>,
}

pub fn evaluation_stats(roster: &EvaluationRoster) -> EvaluationStats {
    let evaluations = roster.evaluations();
    let completed_scores: Vec<f64> = evaluations
        .iter()
        .filter(|e| e.status == EvaluationStatus::Completada)
        .filter_map(|e| e.aggregate_score())
        .collect();
    let average_score = if completed_scores.is_empty() {
        None
    } else {
        let mean = completed_scores.iter().sum::<f64>() / completed_scores.len() as f64;
        Some(mean.round() as u64)
    };

    EvaluationStats {
        total: evaluations.len(),
        completed: evaluations
            .iter()
            .filter(|e| e.status == EvaluationStatus::Completada)
            .count(),
        pending: evaluations
            .iter()
            .filter(|e| e.status == EvaluationStatus::Pendiente)
            .count(),
        average_score,
    }
}

pub fn category_distribution(roster: &EvaluationRoster) -> Vec<CategoryCount<&'static str>> {
    count_by_category(
        roster.evaluations(),
        &EVALUATION_CATEGORIES,
        |evaluation, category| evaluation.category == *category,
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerformanceRow {
    pub name: String,
    pub results: BTreeMap<String, u32>,
}

/// One row per completed evaluation, labelled with the athlete's first name.
pub fn performance_rows(roster: &EvaluationRoster) -> Vec<PerformanceRow> {
    roster
        .evaluations()
        .iter()
        .filter(|e| e.status == EvaluationStatus::Completada)
        .map(|e| PerformanceRow {
            name: e.first_name().to_string(),
            results: e.results.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::build_evaluation_draft;

    fn roster() -> EvaluationRoster {
        let mut roster = EvaluationRoster::new();
        roster
            .add(build_evaluation_draft(
                "Carlos Rodríguez",
                "Sub-17",
                EvaluationStatus::Completada,
                &[("velocidad", 85), ("fuerza", 92)],
            ))
            .unwrap();
        roster
            .add(build_evaluation_draft(
                "Ana Martínez",
                "Sub-19",
                EvaluationStatus::Completada,
                &[("velocidad", 92), ("fuerza", 79)],
            ))
            .unwrap();
        roster
            .add(build_evaluation_draft(
                "Miguel Torres",
                "Sub-15",
                EvaluationStatus::Pendiente,
                &[("velocidad", 10)],
            ))
            .unwrap();
        roster
            .add(build_evaluation_draft(
                "Laura García",
                "Sub-17",
                EvaluationStatus::Cancelada,
                &[],
            ))
            .unwrap();
        roster
    }

    #[test]
    fn stats_count_statuses_and_average_completed_scores() {
        let stats = evaluation_stats(&roster());
        // (88.5 + 85.5) / 2 = 87
        assert_eq!(
            stats,
            EvaluationStats {
                total: 4,
                completed: 2,
                pending: 1,
                average_score: Some(87),
            }
        );
    }

    #[test]
    fn stats_without_completed_evaluations_have_no_average() {
        let stats = evaluation_stats(&EvaluationRoster::new());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_score, None);
    }

    #[test]
    fn category_distribution_covers_every_reference_category() {
        let counts: Vec<(&str, usize)> = category_distribution(&roster())
            .into_iter()
            .map(|c| (c.category, c.count))
            .collect();
        assert_eq!(
            counts,
            vec![
                ("Sub-15", 1),
                ("Sub-17", 2),
                ("Sub-19", 1),
                ("Senior", 0),
                ("Élite", 0),
            ]
        );
    }

    #[test]
    fn performance_rows_only_include_completed_evaluations() {
        let rows = performance_rows(&roster());
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Carlos", "Ana"]);
        assert_eq!(rows[0].results.get("fuerza"), Some(&92));
    }
}
