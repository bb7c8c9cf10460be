use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::services::volume_plot::plot_weekly_volume_from_plan_file;

pub async fn plot_volume_command(cmd: Commands) -> ExitCode {
    let Commands::PlotVolume { input, output } = cmd else {
        return ExitCode::FAILURE;
    };

    match plot_weekly_volume_from_plan_file(&input, &output).await {
        Ok(()) => {
            println!("Weekly volume plot written to {output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to plot weekly volume: {e:?}");
            ExitCode::FAILURE
        }
    }
}
