use clap::Parser;
use loop_drills::{run_counter, CliConfig, StdConsole};

#[derive(Parser)]
#[command(name = "counter")]
#[command(about = "Reads 10 integers and counts the even and odd ones")]
struct Args {
    #[command(flatten)]
    config: CliConfig,
}

fn main() {
    let args = Args::parse();
    args.config.init_logging();

    tracing::info!("Starting counter");
    if args.config.verbose {
        tracing::debug!("CLI config: {:?}", args.config);
    }

    let mut console = StdConsole::stdio();
    match run_counter(&mut console) {
        Ok(tally) => {
            tracing::info!(
                even = tally.even,
                odd = tally.odd,
                total = tally.total(),
                "Counting completed"
            );
        }
        Err(e) => {
            tracing::error!("❌ Counting failed: {} (Severity: {:?})", e, e.severity());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // The prompt line has no newline; start the message on a fresh line.
            eprintln!();
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.severity().exit_code());
        }
    }
}
