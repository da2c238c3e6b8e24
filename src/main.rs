//! pagesim - command-line front end.
//!
//! Usage: pagesim <COMMAND> [OPTIONS] [PAGES...]
//!
//! Commands:
//!   fifo | lru | optimal  - Simulate one policy and print its trace
//!   compare               - Compare all three policies at one frame size
//!   sweep                 - Sweep one policy over frame sizes 1 to 10
//!
//! Options:
//!   -f, --frames N      Number of frames (1-20, default 3)
//!   -p, --policy P      Policy for `sweep` (default fifo)
//!   -r, --random N      Generate N random pages instead of reading PAGES
//!       --range R       Random pages are drawn from 0..R (2-20, default 10)
//!       --seed S        Seed for --random
//!   -v, --verbose       Print every step as it is simulated
//!   -s, --save PATH     Append the run to a results file
//!   -h, --help          Print help information

use std::env;
use std::process;
use std::str::FromStr;

use pagesim::analysis::{compare_all, sweep};
use pagesim::common::config::RESULTS_FILE_NAME;
use pagesim::report::{ComparisonTable, ResultsFile, RunSummary, StepLine, SweepChart, TraceTable};
use pagesim::sim::{run_with_observer, Policy, StepOutcome};
use pagesim::workload::{parse_reference, ReferenceGenerator};
use pagesim::{Error, PageId, Result};

enum Command {
    Run(Policy),
    Compare,
    Sweep,
}

/// Where the reference sequence comes from.
enum Source {
    Pages(String),
    Random {
        len: usize,
        range: u32,
        seed: Option<u64>,
    },
}

/// Command-line configuration
struct Config {
    command: Command,
    source: Source,
    frames: usize,
    sweep_policy: Policy,
    verbose: bool,
    save: Option<String>,
}

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn print_help(program: &str) {
    eprintln!("Page Replacement Simulator - FIFO, LRU and Optimal");
    eprintln!();
    eprintln!("Usage: {} <COMMAND> [OPTIONS] [PAGES...]", program);
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  fifo | lru | optimal  Simulate one policy and print its trace");
    eprintln!("  compare               Compare all three policies");
    eprintln!("  sweep                 Sweep one policy over frame sizes 1 to 10");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -f, --frames N      Number of frames (1-20, default 3)");
    eprintln!("  -p, --policy P      Policy for sweep (default fifo)");
    eprintln!("  -r, --random N      Generate N random pages (1-50)");
    eprintln!("      --range R       Random page range 0..R (2-20, default 10)");
    eprintln!("      --seed S        Seed for --random");
    eprintln!("  -v, --verbose       Print every step");
    eprintln!("  -s, --save PATH     Append the run to a results file");
    eprintln!("                      (use '-' for {})", RESULTS_FILE_NAME);
    eprintln!("  -h, --help          Print this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} fifo -f 3 1 2 3 4 1 2 5 1 2 3 4 5", program);
    eprintln!("  {} compare -f 3 -r 20 --seed 42", program);
    eprintln!("  {} sweep -p fifo 1 2 3 4 1 2 5 1 2 3 4 5", program);
}

fn option_value<'a, I, T>(args: &mut I, name: &str) -> std::result::Result<T, String>
where
    I: Iterator<Item = &'a String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = args
        .next()
        .ok_or_else(|| format!("Missing value for {}", name))?;
    raw.parse()
        .map_err(|e| format!("Invalid value '{}' for {}: {}", raw, name, e))
}

fn parse_args() -> std::result::Result<Config, String> {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("pagesim");

    let mut command = None;
    let mut frames = 3;
    let mut sweep_policy = Policy::Fifo;
    let mut random_len = None;
    let mut range = 10;
    let mut seed = None;
    let mut verbose = false;
    let mut save = None;
    let mut positional: Vec<&str> = Vec::new();

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help(program);
                process::exit(0);
            }
            "-v" | "--verbose" => verbose = true,
            "-f" | "--frames" => frames = option_value(&mut iter, "--frames")?,
            "-p" | "--policy" => sweep_policy = option_value(&mut iter, "--policy")?,
            "-r" | "--random" => random_len = Some(option_value(&mut iter, "--random")?),
            "--range" => range = option_value(&mut iter, "--range")?,
            "--seed" => seed = Some(option_value(&mut iter, "--seed")?),
            "-s" | "--save" => {
                let path: String = option_value(&mut iter, "--save")?;
                save = Some(if path == "-" {
                    RESULTS_FILE_NAME.to_string()
                } else {
                    path
                });
            }
            _ if arg.starts_with('-') && arg.parse::<i64>().is_err() => {
                return Err(format!("Unknown option: {}\nUse --help for usage information.", arg));
            }
            other if command.is_none() => {
                command = Some(match other {
                    "compare" => Command::Compare,
                    "sweep" => Command::Sweep,
                    name => Command::Run(name.parse::<Policy>().map_err(|e| e.to_string())?),
                });
            }
            other => positional.push(other),
        }
    }

    let command = match command {
        Some(command) => command,
        None => {
            print_help(program);
            return Err("\nError: Expected a command".to_string());
        }
    };

    let source = match random_len {
        Some(len) => Source::Random { len, range, seed },
        None if positional.is_empty() => {
            return Err("Error: Expected PAGES or --random N".to_string());
        }
        None => Source::Pages(positional.join(" ")),
    };

    Ok(Config {
        command,
        source,
        frames,
        sweep_policy,
        verbose,
        save,
    })
}

fn load_reference(source: &Source) -> Result<Vec<PageId>> {
    match source {
        Source::Pages(text) => parse_reference(text),
        Source::Random { len, range, seed } => {
            let mut generator = match seed {
                Some(seed) => ReferenceGenerator::from_seed(*seed),
                None => ReferenceGenerator::from_entropy(),
            };
            let reference = generator.generate(*len, *range)?;
            println!(
                "  Generated Reference String: {}",
                reference
                    .iter()
                    .map(|p| p.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            );
            Ok(reference)
        }
    }
}

/// Main logic separated from main() for cleaner error handling
fn run(config: &Config) -> Result<()> {
    let reference = load_reference(&config.source)?;

    match config.command {
        Command::Run(policy) => run_policy(config, policy, &reference),
        Command::Compare => {
            let cmp = compare_all(&reference, config.frames)?;
            print!(
                "{}",
                ComparisonTable {
                    reference: &reference,
                    comparison: &cmp,
                }
            );
            Ok(())
        }
        Command::Sweep => {
            let result = sweep(&reference, config.sweep_policy)?;
            print!("{}", SweepChart(&result));
            Ok(())
        }
    }
}

fn run_policy(config: &Config, policy: Policy, reference: &[PageId]) -> Result<()> {
    println!("\n--- {} ---", policy);
    println!("{}", policy.description());

    let mut trace: Vec<StepOutcome> = Vec::with_capacity(reference.len());
    let (mut hits, mut faults) = (0, 0);
    let result = run_with_observer(policy, reference, config.frames, |outcome| {
        if config.verbose {
            println!(
                "\n{}",
                StepLine::track(outcome, reference.len(), &mut hits, &mut faults)
            );
        }
        trace.push(outcome.clone());
    })?;

    println!();
    print!("{}", TraceTable { reference, trace: &trace });
    println!();
    print!("{}", RunSummary(&result));

    if let Some(path) = &config.save {
        // A failed save is reported but does not fail the simulation.
        match ResultsFile::new(path).append(reference, &result) {
            Ok(_) => println!("  Results saved to {}", path),
            Err(Error::Io(e)) => eprintln!("  Could not save results to {}: {}", path, e),
            Err(e) => eprintln!("  Could not save results: {}", e),
        }
    }
    Ok(())
}
