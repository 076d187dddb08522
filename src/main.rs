use anyhow::{Context, Result};
use book_scan::config::SolverConfig;
use book_scan::io::{load_problem, save_solution_as, OutputFormat};
use book_scan::ranking::RankingStrategy;
use book_scan::scheduler::{PickStrategy, RestartSearch};
use clap::{arg, ArgMatches, Command};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("book-scan")
        .about("Schedules library signups to maximize the score of scanned books")
        .arg_required_else_help(true)
        .arg(arg!(<INPUT> "Problem file").value_parser(clap::value_parser!(PathBuf)))
        .arg(
            arg!(--config [CONFIG] "Path to a JSON solver config")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(--restarts [RESTARTS] "Number of restarts")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            arg!(--"seed-strategy" [STRATEGY] "First pick of each run: best or random")
                .value_parser(clap::value_parser!(String)),
        )
        .arg(
            arg!(--"pick-strategy" [STRATEGY] "Every later pick: best or random")
                .value_parser(clap::value_parser!(String)),
        )
        .arg(
            arg!(--ranking [RANKING] "Library ranking: static or dynamic")
                .value_parser(clap::value_parser!(String)),
        )
        .arg(
            arg!(--"refresh-every" [PICKS] "Picks served before the ranking is rebuilt")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(arg!(--"rank-once" "Rank libraries once per run").conflicts_with("refresh-every"))
        .arg(
            arg!(--"rng-seed" [SEED] "Seed for the random source")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            arg!(--output [OUTPUT] "Output path (default: submission-<input file name>)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(arg!(--json "Write the solution as JSON"))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli().get_matches()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<PathBuf>("INPUT")
        .context("missing input file")?;
    let config = build_config(matches)?;

    let problem =
        load_problem(input).with_context(|| format!("failed to load {}", input.display()))?;

    let mut rng = match config.rng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let mut search = RestartSearch::new(&problem, &config);
    search.run(config.restarts(), &mut rng)?;
    let stats = search.stats()?;
    let best = search.into_best()?;

    println!("{stats}");

    let format = if matches.get_flag("json") {
        OutputFormat::Json
    } else {
        OutputFormat::Submission
    };
    let output = match matches.get_one::<PathBuf>("output") {
        Some(path) => path.clone(),
        None => default_output(input)?,
    };
    save_solution_as(&best.solution, format, &output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    tracing::info!(path = %output.display(), "solution written");
    Ok(())
}

/// Loads the config file (if any) and applies command-line overrides.
fn build_config(matches: &ArgMatches) -> Result<SolverConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => SolverConfig::from_path(path)?,
        None => SolverConfig::default(),
    };

    if let Some(&restarts) = matches.get_one::<usize>("restarts") {
        config.restarts = restarts;
    }
    if let Some(name) = matches.get_one::<String>("seed-strategy") {
        config.seed_strategy = name.parse::<PickStrategy>()?;
    }
    if let Some(name) = matches.get_one::<String>("pick-strategy") {
        config.pick_strategy = name.parse::<PickStrategy>()?;
    }
    if let Some(name) = matches.get_one::<String>("ranking") {
        config.ranking = name.parse::<RankingStrategy>()?;
    }
    if let Some(&picks) = matches.get_one::<usize>("refresh-every") {
        config.refresh_every = Some(picks);
    }
    if matches.get_flag("rank-once") {
        config.refresh_every = None;
    }
    if let Some(&seed) = matches.get_one::<u64>("rng-seed") {
        config.rng_seed = Some(seed);
    }

    tracing::debug!(?config, "solver config");
    Ok(config)
}

fn default_output(input: &Path) -> Result<PathBuf> {
    let name = input
        .file_name()
        .with_context(|| format!("input path {} has no file name", input.display()))?;
    let mut file_name = std::ffi::OsString::from("submission-");
    file_name.push(name);
    Ok(PathBuf::from(file_name))
}
