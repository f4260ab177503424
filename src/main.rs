//! Command-line driver: load a TSPLIB instance, solve it, write the tour.

use clap::{Arg, ArgAction, Command};
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process;
use tsp_approx::io::{tsplib, writer};
use tsp_approx::solver::Solver;

fn main() {
    let command = Command::new("tsp-approx")
        .about("Approximate TSP solver: nearest-neighbor construction with 2-opt refinement")
        .arg(
            Arg::new("instance")
                .value_name("FILE")
                .help("TSPLIB instance file (EXPLICIT, EUC_2D or ATT)")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Print the distance matrix before solving"),
        );

    // Any argument failure exits with code 1; help and version requests
    // are not failures.
    let matches = match command.try_get_matches() {
        Ok(matches) => matches,
        Err(err) => {
            err.print().ok();
            let code = match err.kind() {
                clap::error::ErrorKind::DisplayHelp
                | clap::error::ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            process::exit(code);
        }
    };

    let path = matches
        .get_one::<PathBuf>("instance")
        .expect("required argument");
    let debug = matches.get_flag("debug");

    if let Err(err) = run(path, debug) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(path: &Path, debug: bool) -> Result<(), Box<dyn Error>> {
    let instance = tsplib::load_instance(path)?;
    println!(
        "Loaded {} ({} nodes, {})",
        instance.name.as_deref().unwrap_or("instance"),
        instance.dimension,
        instance.weight_type
    );

    if debug {
        println!("{}", instance.matrix);
    }

    let tour = Solver::new(&instance.matrix).solve();
    println!("{tour}");

    let out_path = writer::tour_file_path(path);
    writer::write_tour_file(&out_path, &tour)?;
    println!("Tour written to {}", out_path.display());

    Ok(())
}
