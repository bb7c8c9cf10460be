use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::services::chart_data::{build_chart_data, chart_data_to_json};
use crate::services::plan_yaml::load_plan_from_yaml_file;

pub async fn chart_data_command(cmd: Commands) -> ExitCode {
    let Commands::ChartData {
        input,
        output,
        rounding,
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

    let json = match chart_data_to_json(&build_chart_data(&plan, rounding)) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Failed to serialize chart data: {e:?}");
            return ExitCode::FAILURE;
        }
    };

    match tokio::fs::write(&output, json).await {
        Ok(()) => {
            println!("Chart data written to {output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to write chart data: {e:?}");
            ExitCode::FAILURE
        }
    }
}
