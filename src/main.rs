use std::{env, fs::read_to_string, path::Path, process::ExitCode, time::Instant};

use dialogue_typeck::{
    parse_declaration_source, parse_source, render_error,
    type_checker::{declarations::Declarations, type_checker::TypeChecker},
};

const USAGE: &str = "usage: dialogue-typeck <declarations-file> <expressions-file> [--const]";

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let constant = args.iter().any(|arg| arg == "--const");
    let paths: Vec<&String> = args.iter().filter(|arg| *arg != "--const").collect();

    if paths.len() != 2 {
        eprintln!("{}", USAGE);
        return ExitCode::from(2);
    }

    match run(paths[0], paths[1], constant) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}

/// Installs a subscriber only when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn run(declarations_path: &str, expressions_path: &str, constant: bool) -> Result<(), String> {
    let start = Instant::now();

    let declarations_source = read_to_string(declarations_path)
        .map_err(|error| format!("failed to read {}: {}", declarations_path, error))?;
    let expressions_source = read_to_string(expressions_path)
        .map_err(|error| format!("failed to read {}: {}", expressions_path, error))?;

    let declarations_name = file_name(declarations_path);
    let expressions_name = file_name(expressions_path);

    let mut declarations = parse_declaration_source(&declarations_source, &declarations_name)
        .map_err(|error| render_error(&error, &declarations_source))?;

    check_lines(&expressions_source, &expressions_name, &mut declarations, constant)?;

    println!();
    println!("Declarations:");
    for declaration in declarations.iter() {
        println!("  {}", declaration);
    }

    let unresolved = declarations.unresolved();
    if !unresolved.is_empty() {
        println!("Still unresolved:");
        for declaration in unresolved {
            println!("  {}", declaration.name);
        }
    }

    tracing::debug!(elapsed = ?start.elapsed(), "checked {}", expressions_name);
    Ok(())
}

/// Checks every non-empty line of `source` as one expression, in a single
/// pass over `declarations`.
fn check_lines(
    source: &str,
    file: &str,
    declarations: &mut Declarations,
    constant: bool,
) -> Result<(), String> {
    let mut type_checker = TypeChecker::new(declarations, constant);

    for (index, line) in source.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("//") {
            continue;
        }

        let location = format!("{}:{}", file, index + 1);
        let ty = parse_source(line, &location)
            .and_then(|expr| type_checker.check(&expr))
            .map_err(|error| render_error(&error, line))?;

        println!("{:>4} | {:<40} : {}", index + 1, trimmed, ty);
    }

    Ok(())
}

fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}
