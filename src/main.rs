use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use cycleplan::commands::base_commands::{CliArgs, Commands};
use cycleplan::commands::capacity_cmd::{
    add_capacity_command, capacities_command, remove_capacity_command, update_capacity_command,
};
use cycleplan::commands::chart_data_cmd::chart_data_command;
use cycleplan::commands::evaluation_cmd::{
    add_evaluation_command, evaluations_command, remove_evaluation_command,
};
use cycleplan::commands::init_cmd::init_command;
use cycleplan::commands::period_cmd::{set_period_weeks_command, set_stage_weeks_command};
use cycleplan::commands::plot_volume_cmd::plot_volume_command;
use cycleplan::commands::summary_cmd::summary_command;
use cycleplan::commands::week_cmd::{
    add_week_command, generate_weeks_command, remove_week_command, update_week_command,
    weeks_command,
};
use cycleplan::logging::init_logging;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    match args.command {
        cmd @ Commands::Init { .. } => init_command(cmd),
        cmd @ Commands::Summary { .. } => summary_command(cmd).await,
        cmd @ Commands::Capacities { .. } => capacities_command(cmd),
        cmd @ Commands::AddCapacity { .. } => add_capacity_command(cmd),
        cmd @ Commands::UpdateCapacity { .. } => update_capacity_command(cmd),
        cmd @ Commands::RemoveCapacity { .. } => remove_capacity_command(cmd),
        cmd @ Commands::SetPeriodWeeks { .. } => set_period_weeks_command(cmd),
        cmd @ Commands::SetStageWeeks { .. } => set_stage_weeks_command(cmd),
        cmd @ Commands::Weeks { .. } => weeks_command(cmd),
        cmd @ Commands::AddWeek { .. } => add_week_command(cmd),
        cmd @ Commands::UpdateWeek { .. } => update_week_command(cmd),
        cmd @ Commands::RemoveWeek { .. } => remove_week_command(cmd),
        cmd @ Commands::GenerateWeeks { .. } => generate_weeks_command(cmd),
        cmd @ Commands::Evaluations { .. } => evaluations_command(cmd),
        cmd @ Commands::AddEvaluation { .. } => add_evaluation_command(cmd),
        cmd @ Commands::RemoveEvaluation { .. } => remove_evaluation_command(cmd),
        cmd @ Commands::ChartData { .. } => chart_data_command(cmd).await,
        cmd @ Commands::PlotVolume { .. } => plot_volume_command(cmd).await,
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
            ExitCode::SUCCESS
        }
    }
}
