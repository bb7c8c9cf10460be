use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::domain::evaluation::EvaluationFilter;
use crate::services::plan_yaml::{load_plan_from_yaml_file, update_plan_yaml_file};

pub fn evaluations_command(cmd: Commands) -> ExitCode {
    let Commands::Evaluations {
        input,
        search,
        category,
        evaluation_type,
    } = cmd
    else {
        return ExitCode::FAILURE;
    };

    let plan = match load_plan_from_yaml_file(&input) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("Failed to load plan: {e:?}");
            return ExitCode::FAILURE;
        }
    };

    let filter = EvaluationFilter {
        search,
        category,
        evaluation_type,
    };
    println!("Id | Athlete | Category | Date | Type | Status | Score");
    println!("---|---------|----------|------|------|--------|------");
    for evaluation in plan.evaluations().filtered(&filter) {
        let score = evaluation
            .aggregate_score()
            .map_or_else(|| "—".to_string(), |score| format!("{score:.1}"));
        println!(
            "{} | {} | {} | {} | {} | {} | {}",
            evaluation.id,
            evaluation.athlete_name,
            evaluation.category,
            evaluation.date,
            evaluation.evaluation_type,
            evaluation.status,
            score
        );
    }
    ExitCode::SUCCESS
}

pub fn add_evaluation_command(cmd: Commands) -> ExitCode {
    let Commands::AddEvaluation { input, fields } = cmd else {
        return ExitCode::FAILURE;
    };

    let draft = match fields.into_draft() {
        Ok(draft) => draft,
        Err(e) => {
            eprintln!("Failed to add evaluation: {e:?}");
            return ExitCode::FAILURE;
        }
    };

    match update_plan_yaml_file(&input, |plan| {
        plan.evaluations_mut().add(draft).map(|evaluation| evaluation.id)
    }) {
        Ok(id) => {
            println!("Evaluation {id} added to {input}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to add evaluation: {e:?}");
            ExitCode::FAILURE
        }
    }
}

pub fn remove_evaluation_command(cmd: Commands) -> ExitCode {
    let Commands::RemoveEvaluation { input, id } = cmd else {
        return ExitCode::FAILURE;
    };

    match update_plan_yaml_file(&input, |plan| {
        plan.evaluations_mut().remove(id);
        Ok(())
    }) {
        Ok(()) => {
            println!("Evaluation {id} removed from {input}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to remove evaluation: {e:?}");
            ExitCode::FAILURE
        }
    }
}
