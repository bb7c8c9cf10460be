use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::domain::capacity::{CapacityFilter, CapacityType};
use crate::services::plan_yaml::{load_plan_from_yaml_file, update_plan_yaml_file};
use crate::services::volume_calculation::{total_volume, weekly_volume};

pub fn capacities_command(cmd: Commands) -> ExitCode {
    let Commands::Capacities {
        input,
        search,
        capacity_type,
    } = cmd
    else {
        return ExitCode::FAILURE;
    };

    let capacity_type = match capacity_type
        .as_deref()
        .map(str::parse::<CapacityType>)
        .transpose()
    {
        Ok(capacity_type) => capacity_type,
        Err(e) => {
            eprintln!("Failed to parse capacity type: {e:?}");
            return ExitCode::FAILURE;
        }
    };

    let plan = match load_plan_from_yaml_file(&input) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("Failed to load plan: {e:?}");
            return ExitCode::FAILURE;
        }
    };

    let filter = CapacityFilter {
        search,
        capacity_type,
    };
    let total_weeks = plan.total_weeks();
    println!("Id | Name | Type | Unit | Exercises x Reps x Series x Freq | Weekly | Total");
    println!("---|------|------|------|---------------------------------|--------|------");
    for capacity in plan.filtered_capacities(&filter) {
        println!(
            "{} | {} | {} | {} | {} x {} x {} x {} | {} | {}",
            capacity.id,
            capacity.name,
            capacity.capacity_type,
            capacity.unit,
            capacity.exercises,
            capacity.reps,
            capacity.series,
            capacity.freq,
            weekly_volume(capacity),
            total_volume(capacity, total_weeks)
        );
    }
    ExitCode::SUCCESS
}

pub fn add_capacity_command(cmd: Commands) -> ExitCode {
    let Commands::AddCapacity { input, fields } = cmd else {
        return ExitCode::FAILURE;
    };

    let fields = match fields.into_fields() {
        Ok(fields) => fields,
        Err(e) => {
            eprintln!("Failed to add capacity: {e:?}");
            return ExitCode::FAILURE;
        }
    };

    match update_plan_yaml_file(&input, |plan| {
        plan.add_capacity(fields).map(|capacity| capacity.id)
    }) {
        Ok(id) => {
            println!("Capacity {id} added to {input}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to add capacity: {e:?}");
            ExitCode::FAILURE
        }
    }
}

pub fn update_capacity_command(cmd: Commands) -> ExitCode {
    let Commands::UpdateCapacity { input, id, fields } = cmd else {
        return ExitCode::FAILURE;
    };

    let fields = match fields.into_fields() {
        Ok(fields) => fields,
        Err(e) => {
            eprintln!("Failed to update capacity: {e:?}");
            return ExitCode::FAILURE;
        }
    };

    match update_plan_yaml_file(&input, |plan| {
        plan.update_capacity(id, fields).map(weekly_volume)
    }) {
        Ok(volume) => {
            println!("Capacity {id} updated in {input} (weekly volume {volume})");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to update capacity: {e:?}");
            ExitCode::FAILURE
        }
    }
}

pub fn remove_capacity_command(cmd: Commands) -> ExitCode {
    let Commands::RemoveCapacity { input, id } = cmd else {
        return ExitCode::FAILURE;
    };

    match update_plan_yaml_file(&input, |plan| {
        plan.remove_capacity(id);
        Ok(())
    }) {
        Ok(()) => {
            println!("Capacity {id} removed from {input}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to remove capacity: {e:?}");
            ExitCode::FAILURE
        }
    }
}
