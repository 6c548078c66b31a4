//! Phrase evolution CLI - Reproduce a target phrase with a genetic loop.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::fs;
use std::path::PathBuf;

use phrase_evo::{EvolutionConfig, EvolutionEngine};

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    let mut phrase: Option<String> = None;
    let mut verbose = false;
    let mut seed: Option<u64> = None;
    let mut max_generations: Option<usize> = None;
    let mut config_path: Option<PathBuf> = None;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--verbose" | "-v" => verbose = true,
            "--example-config" => {
                print_example_config();
                return;
            }
            "--seed" => seed = Some(parse_value(iter.next(), "--seed")),
            "--max-generations" => {
                max_generations = Some(parse_value(iter.next(), "--max-generations"));
            }
            "--config" => match iter.next() {
                Some(path) => config_path = Some(PathBuf::from(path)),
                None => usage_error("--config requires a file path"),
            },
            other if other.starts_with('-') => {
                usage_error(&format!("unknown option '{}'", other));
            }
            other => {
                if phrase.is_some() {
                    usage_error("exactly one phrase argument is expected");
                }
                phrase = Some(other.to_string());
            }
        }
    }

    let Some(phrase) = phrase else {
        print_usage(&args[0]);
        std::process::exit(1);
    };
    if phrase.is_empty() {
        usage_error("the phrase must not be empty");
    }

    // Load configuration
    let mut config: EvolutionConfig = match &config_path {
        Some(path) => {
            let config_str = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error reading config file: {}", e);
                std::process::exit(1);
            });
            serde_json::from_str(&config_str).unwrap_or_else(|e| {
                eprintln!("Error parsing config: {}", e);
                std::process::exit(1);
            })
        }
        None => EvolutionConfig::default(),
    };

    // Flags override the file
    if seed.is_some() {
        config.random_seed = seed;
    }
    if let Some(cap) = max_generations {
        config.max_generations = cap;
    }

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    let mut engine = EvolutionEngine::new(&phrase, config);

    let result = if verbose {
        engine.run_with_observer(|report| {
            println!("{} {}", report.generation, report.best_text);
        })
    } else {
        engine.run()
    };

    match result {
        Ok(outcome) => {
            if !verbose {
                println!("{}", outcome.best.text);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn parse_value<T: std::str::FromStr>(value: Option<&String>, flag: &str) -> T {
    let Some(raw) = value else {
        usage_error(&format!("{} requires a value", flag));
    };
    raw.parse()
        .unwrap_or_else(|_| usage_error(&format!("invalid value '{}' for {}", raw, flag)))
}

fn usage_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    eprintln!("Run without arguments for usage.");
    std::process::exit(1);
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <phrase> [options]", program);
    eprintln!();
    eprintln!("Evolve the given phrase from random noise.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --verbose, -v          Print one line per generation (index and best text)");
    eprintln!("  --seed <N>             Fix the random seed for a reproducible run");
    eprintln!("  --max-generations <N>  Override the generation cap (default: 2000)");
    eprintln!("  --config <path>        Load run parameters from a JSON file");
    eprintln!("  --example-config       Print an example configuration and exit");
}

fn print_example_config() {
    let config = EvolutionConfig::default();

    println!("Example configuration (config.json):");
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
}
