// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::Subcommand;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use pritchard::config::SieveConfig;
use pritchard::divisors::Divisors;
use pritchard::perfect::is_perfect;
use pritchard::sieve::PrimeCache;

#[derive(Parser, Debug)]
#[command(name = "pritchard", about = "Primes, divisors and perfect numbers from a Pritchard wheel")]
struct Cli {
    /// JSON sieve config, e.g. {"seed": 2, "limit": 65537}
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Bootstrap wheel (0, 1 or 2), overrides the config file
    #[arg(long, global = true)]
    seed: Option<u32>,

    /// Wheel limit, overrides the config file
    #[arg(long, global = true)]
    limit: Option<u32>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print each new bit ceiling and every perfect number below a bound
    Scan {
        #[arg(long, default_value_t = 1 << 14)]
        below: u32,
    },
    /// Print the primes below N
    Primes { n: u32 },
    /// Print the proper divisors of N
    Divisors { n: u32 },
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    return match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    };
}

fn load_config(cli: &Cli) -> pritchard::Result<SieveConfig> {
    let mut config = match &cli.config {
        Some(path) => SieveConfig::from_path(path)?,
        None => SieveConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(limit) = cli.limit {
        config = config.with_limit(limit);
    }
    return Ok(config);
}

fn run(cli: Cli) -> pritchard::Result<()> {
    let config = load_config(&cli)?;
    tracing::debug!(seed = config.seed, limit = config.limit, "loaded sieve config");
    let mut engine = Divisors::with_source(PrimeCache::from_config(&config)?);

    match cli.command.unwrap_or(Command::Scan { below: 1 << 14 }) {
        Command::Scan { below } => scan(&mut engine, below),
        Command::Primes { n } => {
            let primes = engine.source_mut().try_primes(n)?;
            println!("{}", join(primes.range(..n)));
        }
        Command::Divisors { n } => {
            println!("{{ {} }}", join(engine.divisors(n).iter()));
        }
    }
    return Ok(());
}

fn scan(engine: &mut Divisors, below: u32) {
    let mut ceiling = 0;
    for i in 1..below {
        let bit_ceil = (i as u64).next_power_of_two();
        if bit_ceil > ceiling {
            ceiling = bit_ceil;
            println!("{}", ceiling);
        }
        if is_perfect(engine, i) {
            println!("{} is perfect", i);
        }
    }
}

fn join<'a>(values: impl Iterator<Item = &'a u32>) -> String {
    return values.map(|v| v.to_string()).collect::<Vec<_>>().join(" ");
}
