use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use std::io;

use burden_calc::{report, Config};

const ENV_HELP: &str = "\
Configuration is also read from BURDEN_* environment variables or a .env file:
    BURDEN_MAX_RATED_INPUT_CURRENT, BURDEN_MAX_RATED_OUTPUT_CURRENT,
    BURDEN_MAX_PRACTICAL_INPUT_CURRENT_1, BURDEN_MAX_PRACTICAL_INPUT_CURRENT_2,
    BURDEN_SAFETY_FACTOR, BURDEN_COMBINATIONS_TO_SAVE, BURDEN_CATALOG";

#[derive(Parser, Debug)]
#[command(name = "burden-calc")]
#[command(about = "Find standard resistor triples (b1, b2, bc) whose pairs b1 || bc and \
b2 || bc best match the ideal burdens of a current transformer at two current ranges")]
#[command(after_help = ENV_HELP)]
struct Args {
    /// Prompt for the currents and safety factor
    #[arg(short, long)]
    interactive: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut config = Config::load()?;
    if args.interactive {
        let stdin = io::stdin();
        let stdout = io::stdout();
        config = config.prompt(&mut stdin.lock(), &mut stdout.lock())?;
        println!();
    }
    config.validate()?;
    info!("Loaded configuration: {:?}", config);

    let catalog = config.catalog()?;
    let problem = config.problem();
    let calc = problem.calc(catalog, config.combinations_to_save);
    info!("Number of combinations: {}", calc.combinations());

    let res = calc.search();

    let stdout = io::stdout();
    report::write_report(&mut stdout.lock(), &problem, &res)?;
    Ok(())
}
