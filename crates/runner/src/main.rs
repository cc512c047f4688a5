use numerus_challenge::ChallengeGenerator;
use numerus_expression::{ExpressionEvaluator, ParseMode};
use numerus_runner::{RunnerConfig, Session};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::process::ExitCode;

fn print_help() {
    eprintln!(
        r#"Numerus - symbolic Roman numeral arithmetic

USAGE:
    numerus eval [--lenient] <EXPR>...
    numerus chat [--config <PATH>] [--seed <N>]

COMMANDS:
    eval                Evaluate a +/- chain of numerals, e.g. "X - V - I"
    chat                Ask the user for their name and one numeral question

OPTIONS:
    --lenient           Ignore characters that are not numerals or operators
    --config <PATH>     Load runner configuration from JSON file
    --seed <N>          Seed the challenge picker for a repeatable session
    --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG            Log level filter (default: warn)

EXAMPLES:
    numerus eval MCMLXXXVIII - MLXVI
    numerus eval --lenient "the answer is IV - III"
    numerus chat --config numerus.json
"#
    );
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.first().map(String::as_str) {
        Some("eval") => run_eval(&args[1..]),
        Some("chat") => run_chat(&args[1..]),
        Some("--help") | Some("-h") | None => {
            print_help();
            return ExitCode::SUCCESS;
        }
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            print_help();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_eval(args: &[String]) -> Result<bool, Box<dyn std::error::Error>> {
    let mut mode = ParseMode::Strict;
    let mut parts = Vec::new();

    for arg in args {
        match arg.as_str() {
            "--lenient" | "-l" => mode = ParseMode::Lenient,
            _ => parts.push(arg.as_str()),
        }
    }

    let expression = parts.join(" ");
    match ExpressionEvaluator::new(mode).evaluate(&expression) {
        Ok(result) => {
            println!("{}", result);
            Ok(true)
        }
        Err(e) if e.is_input_error() => {
            eprintln!("Error: {}", e);
            eprintln!("Hint: --lenient ignores everything but numerals and operators");
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

fn run_chat(args: &[String]) -> Result<bool, Box<dyn std::error::Error>> {
    let mut config_path: Option<String> = None;
    let mut seed: Option<u64> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                i += 1;
                let path = args.get(i).ok_or("--config requires a path argument")?;
                config_path = Some(path.clone());
            }
            "--seed" => {
                i += 1;
                let value = args.get(i).ok_or("--seed requires a number")?;
                seed = Some(value.parse()?);
            }
            arg => return Err(format!("Unknown argument: {}", arg).into()),
        }
        i += 1;
    }

    let config = match config_path {
        Some(path) => {
            log::info!("Loading configuration from: {}", path);
            RunnerConfig::from_file(&path)?
        }
        None => RunnerConfig::default(),
    };
    config.validate()?;

    let names = config.load_names()?;
    log::info!("Known names: {}", names.len());
    let generator = ChallengeGenerator::from_config(&config.challenge)?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdin = std::io::stdin();
    let mut session = Session::new(stdin.lock(), std::io::stdout(), &config, names);
    let outcome = session.run_generated(&generator, &mut rng)?;
    Ok(outcome.passed())
}
