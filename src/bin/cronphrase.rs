//! Command-line interface for cronphrase
//! Compiles English recurrence phrases into cron expressions.
//!
//! Usage:
//!   cronphrase `<phrase>`...                     - Compile each phrase, one result per line
//!   cronphrase < phrases.txt                   - Compile one phrase per stdin line
//!   cronphrase `<phrase>` --format json          - Full schedule as JSON (also: yaml)
//!   cronphrase `<phrase>` --offset +01:00        - Read offset-less times in that offset
//!   cronphrase `<phrase>` --strict               - Exit 1 if anything was not understood
//!
//! Configuration errors exit with status 2.

use clap::{Arg, ArgAction, ArgMatches, Command};
use cronphrase::cron::config::{CronConfig, Loader, OutputFormat};
use cronphrase::{CompileOptions, Compiler, Result};
use std::io::{self, BufRead};
use std::process;
use tracing::Level;

fn main() {
    let matches = Command::new("cronphrase")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile English recurrence phrases into cron expressions")
        .arg(
            Arg::new("phrase")
                .help("Phrases to compile (reads one per line from stdin when omitted)")
                .num_args(0..)
                .action(ArgAction::Append)
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(["expression", "json", "yaml"]),
        )
        .arg(
            Arg::new("offset")
                .long("offset")
                .short('o')
                .allow_hyphen_values(true)
                .help("UTC offset (±HH:MM) for clock times without a timezone"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Exit with status 1 if any phrase is not fully parsed")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log each pipeline stage to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(2);
    });
    let options = CompileOptions::from_config(&config).unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(2);
    });

    let phrases = match matches.get_many::<String>("phrase") {
        Some(values) => values.cloned().collect(),
        None => read_stdin_phrases().unwrap_or_else(|e| {
            eprintln!("{}", e);
            process::exit(2);
        }),
    };

    match handle_compile_command(&Compiler::new(options), &config, &phrases) {
        Ok(true) => {}
        Ok(false) if config.output.strict => process::exit(1),
        Ok(false) => {}
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    }
}

/// Layer the config file and flag overrides over the defaults.
fn load_config(matches: &ArgMatches) -> Result<CronConfig> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if let Some(offset) = matches.get_one::<String>("offset") {
        loader = loader.set_override("compile.default_offset", offset.as_str())?;
    }
    if matches.get_flag("strict") {
        loader = loader.set_override("output.strict", true)?;
    }
    loader.build()
}

/// Non-blank stdin lines, trimmed.
fn read_stdin_phrases() -> Result<Vec<String>> {
    let mut phrases = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            phrases.push(line.trim().to_string());
        }
    }
    Ok(phrases)
}

/// Compile and print every phrase. Returns whether all of them were fully parsed.
fn handle_compile_command(
    compiler: &Compiler,
    config: &CronConfig,
    phrases: &[String],
) -> Result<bool> {
    let mut all_parsed = true;

    for phrase in phrases {
        let schedule = compiler.compile(phrase);
        if config.output.format == OutputFormat::Yaml {
            println!("---");
        }
        println!("{}", schedule.render(config.output.format)?);

        if !schedule.is_fully_parsed() {
            all_parsed = false;
            if config.output.show_unparsed {
                eprintln!("unparsed in '{}': {}", phrase, schedule.unparsed());
            }
        }
    }

    Ok(all_parsed)
}
