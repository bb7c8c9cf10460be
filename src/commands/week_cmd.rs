use std::process::ExitCode;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::commands::base_commands::Commands;
use crate::services::plan_yaml::{load_plan_from_yaml_file, update_plan_yaml_file};
use crate::services::sample_plan::generate_weekly_records;

pub fn weeks_command(cmd: Commands) -> ExitCode {
    let Commands::Weeks { input } = cmd else {
        return ExitCode::FAILURE;
    };

    let plan = match load_plan_from_yaml_file(&input) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("Failed to load plan: {e:?}");
            return ExitCode::FAILURE;
        }
    };

    println!("Week | Date | Period | Stage | Volume | Intensity | Fatigue | Performance");
    println!("-----|------|--------|-------|--------|-----------|---------|------------");
    for record in plan.weekly_records() {
        println!(
            "{} | {} | {} | {} | {} | {}% | {}% | {}%",
            record.label(),
            record.date,
            record.period_tag,
            record.stage_tag,
            record.volume,
            record.intensity,
            record.fatigue,
            record.performance
        );
    }
    ExitCode::SUCCESS
}

pub fn add_week_command(cmd: Commands) -> ExitCode {
    let Commands::AddWeek { input, fields } = cmd else {
        return ExitCode::FAILURE;
    };

    let fields = match fields.into_fields() {
        Ok(fields) => fields,
        Err(e) => {
            eprintln!("Failed to add weekly record: {e:?}");
            return ExitCode::FAILURE;
        }
    };

    match update_plan_yaml_file(&input, |plan| {
        plan.add_weekly_record(fields).map(|record| record.week)
    }) {
        Ok(week) => {
            println!("Week {week} added to {input}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to add weekly record: {e:?}");
            ExitCode::FAILURE
        }
    }
}

pub fn update_week_command(cmd: Commands) -> ExitCode {
    let Commands::UpdateWeek {
        input,
        week,
        fields,
    } = cmd
    else {
        return ExitCode::FAILURE;
    };

    let fields = match fields.into_fields() {
        Ok(fields) => fields,
        Err(e) => {
            eprintln!("Failed to update weekly record: {e:?}");
            return ExitCode::FAILURE;
        }
    };

    match update_plan_yaml_file(&input, |plan| {
        plan.update_weekly_record(week, fields).map(|record| record.volume)
    }) {
        Ok(volume) => {
            println!("Week {week} updated in {input} (volume {volume})");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to update weekly record: {e:?}");
            ExitCode::FAILURE
        }
    }
}

pub fn remove_week_command(cmd: Commands) -> ExitCode {
    let Commands::RemoveWeek { input, week } = cmd else {
        return ExitCode::FAILURE;
    };

    match update_plan_yaml_file(&input, |plan| {
        plan.remove_weekly_record(week);
        Ok(())
    }) {
        Ok(()) => {
            println!("Week {week} removed from {input}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to remove weekly record: {e:?}");
            ExitCode::FAILURE
        }
    }
}

pub fn generate_weeks_command(cmd: Commands) -> ExitCode {
    let Commands::GenerateWeeks { input, seed } = cmd else {
        return ExitCode::FAILURE;
    };

    match update_plan_yaml_file(&input, |plan| {
        let mut rng = StdRng::seed_from_u64(seed);
        let records = generate_weekly_records(plan.macrocycle(), &mut rng);
        let count = records.len();
        plan.replace_weekly_records(records);
        Ok(count)
    }) {
        Ok(count) => {
            tracing::info!(seed, count, "weekly records generated");
            println!("Generated {count} weekly records in {input}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to generate weekly records: {e:?}");
            ExitCode::FAILURE
        }
    }
}
