//! `kinship` command line

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, Command};
use kin_cli::{load_family, load_layout_config, run_stress};
use kin_layout::LayoutEngine;
use kin_resolver::RelationshipResolver;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    let input = Arg::new("input")
        .long("input")
        .short('i')
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Family file (JSON)");

    Command::new("kinship")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Family graph relationship codes and tree layout")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .subcommand(
            Command::new("resolve")
                .about("Resolve the relationship code between two people")
                .arg(input.clone())
                .arg(
                    Arg::new("from")
                        .long("from")
                        .required(true)
                        .value_parser(value_parser!(usize))
                        .help("Index of the source person in the file"),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .required(true)
                        .value_parser(value_parser!(usize))
                        .help("Index of the target person in the file"),
                ),
        )
        .subcommand(
            Command::new("layout")
                .about("Compute card positions and connectors")
                .arg(input)
                .arg(
                    Arg::new("config")
                        .long("config")
                        .value_parser(value_parser!(PathBuf))
                        .help("Layout geometry (TOML)"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("stress")
                .about("Check layout and resolver invariants on a random family")
                .arg(
                    Arg::new("people")
                        .long("people")
                        .default_value("1000")
                        .value_parser(value_parser!(usize))
                        .help("Number of people to generate"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .default_value("42")
                        .value_parser(value_parser!(u64))
                        .help("Random seed for reproducibility"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .value_parser(value_parser!(PathBuf))
                        .help("Layout geometry (TOML)"),
                ),
        )
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("resolve", args)) => {
            let input = args.get_one::<PathBuf>("input").context("missing --input")?;
            let from = *args.get_one::<usize>("from").context("missing --from")?;
            let to = *args.get_one::<usize>("to").context("missing --to")?;

            let family = load_family(input)?;
            let source = family
                .person_at(from)
                .with_context(|| format!("no person at index {from}"))?;
            let target = family
                .person_at(to)
                .with_context(|| format!("no person at index {to}"))?;

            let relationship = RelationshipResolver::new(&family.graph).resolve(source, target);
            println!("Code: {}", relationship.code);
            println!("Description: {}", relationship.description);
            println!("Generation Diff: {}", relationship.generation_diff);
        }
        Some(("layout", args)) => {
            let input = args.get_one::<PathBuf>("input").context("missing --input")?;
            let config = load_layout_config(args.get_one::<PathBuf>("config").map(PathBuf::as_path))?;

            let family = load_family(input)?;
            let layout = LayoutEngine::new(config).layout(&family.graph);

            if args.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(&layout)?);
            } else {
                println!("Layout: {} of {} people placed", layout.positions.len(), family.graph.len());
                for (id, position) in &layout.positions {
                    let name = family.graph.person(*id).map_or("?", |p| p.name.as_str());
                    println!("  {:>4} {:<20} x={:>8.1} y={:>8.1}", id, name, position.x, position.y);
                }
                if let Some(bounds) = layout.bounds(&config) {
                    println!("Bounds: {:.1} x {:.1}", bounds.width(), bounds.height());
                }
                println!("Connections: {}", layout.connections.len());
            }
        }
        Some(("stress", args)) => {
            let people = *args.get_one::<usize>("people").context("missing --people")?;
            let seed = *args.get_one::<u64>("seed").context("missing --seed")?;
            let config = load_layout_config(args.get_one::<PathBuf>("config").map(PathBuf::as_path))?;

            println!("Running stress test...");
            println!("People: {people}");
            println!("Seed: {seed}");
            println!();

            let report = run_stress(people, seed, &config);

            println!("Stress Test Report:");
            println!("  People: {}", report.people);
            println!("  Placed: {}", report.placed);
            println!("  Overlaps: {}", report.overlaps);
            println!("  Deterministic: {}", report.deterministic);
            println!("  Unrelated: {}", report.unrelated);
            println!("  Time: {}ms", report.elapsed_ms);
            println!("  Status: {}", if report.passed() { "PASSED" } else { "FAILED" });

            if !report.passed() {
                std::process::exit(1);
            }
        }
        _ => {}
    }

    Ok(())
}
