//! gridhaunt-replay: run a level headlessly from a seed.
//!
//! Usage:
//!   gridhaunt-replay run --seed 1234 --level 2 --max-ticks 5000 --trace
//!   gridhaunt-replay levels --campaign levels.json

use std::path::PathBuf;
use std::process;

use tracing_subscriber::EnvFilter;

use gridhaunt_core::commands::PlayerCommand;
use gridhaunt_core::constants::{DEFAULT_MOVE_DURATION, DEFAULT_PORTAL_COUNT, DEFAULT_SEED};
use gridhaunt_sim::levels::Campaign;
use gridhaunt_sim::{SimConfig, SimulationEngine};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "levels" => cmd_levels(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "gridhaunt-replay: headless gridhaunt runner\n\
         \n\
         Commands:\n\
         \n\
         run       Play one level until it ends or the tick limit is hit\n\
         \n\
           --seed <N>          Global seed (default: 1234)\n\
           --level <I>         Level index (default: 0)\n\
           --dt <S>            Seconds per tick (default: 0.1)\n\
           --max-ticks <T>     Tick limit (default: 10000)\n\
           --portal-every <K>  Open the next portal every K ticks (default: off)\n\
           --campaign <path>   JSON campaign instead of the built-in levels\n\
           --trace             Print every snapshot as one JSON line\n\
         \n\
         levels    List the levels of a campaign\n\
         \n\
           --campaign <path>   JSON campaign instead of the built-in levels\n\
         \n\
         Environment:\n\
         \n\
           RUST_LOG            Log filter for stderr (default: info)\n"
    );
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    match flag_value(args, flag) {
        None => default,
        Some(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                eprintln!("Error: invalid value for {flag}: {raw}");
                process::exit(1);
            }
        },
    }
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|arg| arg == flag)
}

fn load_campaign(args: &[String]) -> Campaign {
    let Some(path) = flag_value(args, "--campaign").map(PathBuf::from) else {
        return Campaign::builtin();
    };
    let json = match std::fs::read_to_string(&path) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error reading {}: {e}", path.display());
            process::exit(1);
        }
    };
    match Campaign::from_json_str(&json) {
        Ok(campaign) => campaign,
        Err(e) => {
            eprintln!("Error loading {}: {e}", path.display());
            process::exit(1);
        }
    }
}

// --- Run command ---

fn cmd_run(args: &[String]) {
    let seed: i64 = parse_flag(args, "--seed", DEFAULT_SEED);
    let level: usize = parse_flag(args, "--level", 0);
    let dt: f32 = parse_flag(args, "--dt", 0.1);
    let max_ticks: u64 = parse_flag(args, "--max-ticks", 10_000);
    let portal_every: u64 = parse_flag(args, "--portal-every", 0);
    let trace = has_flag(args, "--trace");

    let config = SimConfig {
        seed,
        move_duration: DEFAULT_MOVE_DURATION,
    };
    let mut engine = SimulationEngine::with_campaign(config, load_campaign(args));
    if let Err(e) = engine.start_level(level) {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    let portal_count = engine
        .level()
        .map_or(DEFAULT_PORTAL_COUNT, |level| level.portal_count);
    let mut next_portal = 0;

    for tick in 0..max_ticks {
        if portal_every > 0 && portal_count > 0 && tick > 0 && tick % portal_every == 0 {
            engine.queue_command(PlayerCommand::OpenPortal {
                portal_id: next_portal,
            });
            next_portal = (next_portal + 1) % portal_count;
        }

        let snapshot = engine.tick(dt);
        if trace {
            match serde_json::to_string(&snapshot) {
                Ok(line) => println!("{line}"),
                Err(e) => tracing::error!(%e, "snapshot serialization failed"),
            }
        }
        if snapshot.phase.is_finished() {
            break;
        }
    }

    let summary = serde_json::json!({
        "seed": seed,
        "level": level,
        "phase": engine.phase(),
        "ticks": engine.time().tick,
        "elapsed_secs": engine.time().elapsed_secs,
        "ghosts": engine.ghost_count(),
        "humans": engine.human_count(),
        "souls": engine.economy().view(),
    });
    println!("{summary}");
}

// --- Levels command ---

fn cmd_levels(args: &[String]) {
    let campaign = load_campaign(args);
    for (position, level) in campaign.levels.iter().enumerate() {
        println!(
            "{:>2}  {:<16} {}x{}  ghosts={} humans={} souls={} regen={}s",
            position,
            level.name,
            level.bounds.width,
            level.bounds.height,
            level.initial_ghost_count,
            level.initial_human_count,
            level.soul_max,
            level.regen_period,
        );
    }
}
