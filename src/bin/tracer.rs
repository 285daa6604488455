use anyhow::Context;
use clap::Parser;
use loop_drills::{run_tracer, CliConfig, StdConsole};

#[derive(Parser)]
#[command(name = "tracer")]
#[command(about = "Prints the trace of a loop with continue and an unreachable break")]
struct Args {
    #[command(flatten)]
    config: CliConfig,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    args.config.init_logging();

    tracing::info!("Starting tracer");

    let mut console = StdConsole::stdio();
    let trace = run_tracer(&mut console).context("Failed to write loop trace")?;

    tracing::info!(
        steps = trace.steps.len(),
        broke_early = trace.broke_early(),
        "Trace completed"
    );
    Ok(())
}
