//! Compare informed search strategies on classic fixture maps.
//!
//! The interesting machinery lives in the [bestfirst] crate; this crate
//! supplies the hardcoded maps, the arrow-joined output, and the
//! command line driver.

use anyhow::Error;
use clap::{App, Arg};
use thiserror::Error as ThisError;

use bestfirst::{check_admissibility, check_consistency, search, StrategyKind};

pub mod maps;
pub mod report;

use maps::Fixture;

#[derive(Debug, ThisError)]
pub enum MapError {
    #[error("No map named {0:?} (expected romania or seven-node)")]
    Unknown(String),
}

fn fixture_for(name: &str) -> Result<&'static Fixture, MapError> {
    match name {
        "romania" => Ok(&maps::ROMANIA),
        "seven-node" => Ok(&maps::SEVEN_NODE),
        other => Err(MapError::Unknown(other.to_string())),
    }
}

/// Run one strategy and print the summary line.
fn run_one(fixture: &Fixture, kind: StrategyKind, start: &str, goal: &str) {
    let outcome = search(&fixture.graph, kind, &start.to_string(), &goal.to_string());
    println!("{}", report::summary(kind.name(), &outcome));
}

/// Run all three strategies over the same endpoints.
fn compare(fixture: &Fixture, start: &str, goal: &str) {
    for &kind in &[
        StrategyKind::AStar,
        StrategyKind::UniformCost,
        StrategyKind::Greedy,
    ] {
        run_one(fixture, kind, start, goal);
    }
}

/// Report consistency and admissibility for every heuristic table the
/// map carries, taking the consistency shortcut where it applies.
fn check(fixture: &Fixture, goal: &str) -> Result<(), Error> {
    println!("Heuristic tables for the {} map (goal: {})", fixture.name, goal);
    let goal = goal.to_string();
    for (id, _) in fixture.graph.tables() {
        let consistent = check_consistency(&fixture.graph, id)?;
        let admissible = check_admissibility(&fixture.graph, id, &goal)?;
        println!("{} is consistent: {}", id, consistent);
        println!("{} is admissible: {}", id, admissible);
    }
    Ok(())
}

pub fn run() -> Result<(), Error> {
    let matches = App::new("wayfind")
        .version("1.0")
        .about("Compare uniform-cost, greedy, and A* search on classic maps")
        .arg(
            Arg::with_name("algorithm")
                .value_name("ALGORITHM")
                .help("uniform-cost, greedy, or a* (default: compare all three)")
                .required(false)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("map")
                .long("map")
                .value_name("MAP")
                .help("romania or seven-node")
                .default_value("romania")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("start")
                .long("start")
                .value_name("NODE")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("goal")
                .long("goal")
                .value_name("NODE")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("check")
                .long("check")
                .help("Check each heuristic table for consistency and admissibility"),
        )
        .get_matches();

    let fixture = fixture_for(matches.value_of("map").unwrap())?;
    let start = matches.value_of("start").unwrap_or(fixture.start);
    let goal = matches.value_of("goal").unwrap_or(fixture.goal);

    if matches.is_present("check") {
        return check(fixture, goal);
    }

    match matches.value_of("algorithm") {
        Some(name) => {
            let kind: StrategyKind = name.parse()?;
            run_one(fixture, kind, start, goal);
        }
        None => {
            compare(fixture, start, goal);
            println!();
            compare(fixture, goal, start);
        }
    }

    Ok(())
}
