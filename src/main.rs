//! paramdraw CLI entry point

use anyhow::{Context, Result};
use paramdraw::config::cli::{Cli, Command, OutputFormat, SampleArgs, SearchArgs};
use paramdraw::config::{toml as config_toml, validator, SearchConfig};
use paramdraw::distribution::{LogUniform, LogUniformInt, ParamValue};
use paramdraw::output::{json, text};
use paramdraw::search::{ParameterGrid, ParameterSampler, SearchStrategy};
use paramdraw::RandomState;
use std::time::Instant;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    cli.validate()?;

    match &cli.command {
        Command::Sample(args) => run_sample(args, cli.debug),
        Command::Search(args) => run_search(args, cli.debug),
    }
}

/// Draw values from a single log-uniform distribution
fn run_sample(args: &SampleArgs, debug: bool) -> Result<()> {
    let state = RandomState::from(args.seed);
    if debug {
        eprintln!(
            "DEBUG: sampling {} value(s) from [{}, {}) with {}",
            args.count, args.low, args.high, state
        );
    }

    let (kind, samples): (&str, Vec<ParamValue>) = if args.continuous {
        let dist = LogUniform::new(args.low, args.high).context("Invalid sampling range")?;
        let values = dist.rvs(args.count, state)?;
        ("log_uniform", values.into_iter().map(ParamValue::Float).collect())
    } else {
        let dist = LogUniformInt::new(args.low, args.high).context("Invalid sampling range")?;
        let values = dist.rvs(args.count, state)?;
        ("log_uniform_int", values.into_iter().map(ParamValue::Int).collect())
    };

    match args.format {
        OutputFormat::Text => text::print_samples(&samples),
        OutputFormat::Json => {
            let report = json::JsonSampleReport::new(kind.to_string(), args.low, args.high, state, samples);
            json::write_json_output(None, &report)?;
        }
    }

    Ok(())
}

/// Generate candidates from a search space
fn run_search(args: &SearchArgs, debug: bool) -> Result<()> {
    let config_start = Instant::now();

    let base = match &args.config {
        Some(path) => config_toml::parse_toml_file(path)?,
        None => SearchConfig::default(),
    };
    let config = config_toml::merge_cli_with_config(args, base)?;

    validator::validate_config(&config).context("Configuration validation failed")?;
    let space = validator::build_search_space(&config)?;
    let state = config.random_state();

    if debug {
        eprintln!(
            "DEBUG TIMING: Config build: {:.3}s",
            config_start.elapsed().as_secs_f64()
        );
    }

    let quiet = args.format == OutputFormat::Json && args.json_output.is_none();
    if !quiet {
        text::print_configuration(&space, config.strategy, config.n_iter, state);
    }

    if args.dry_run {
        if !quiet {
            println!();
            println!("Dry run mode - search space validated successfully");
        }
        return Ok(());
    }

    let sample_start = Instant::now();
    let candidates = match config.strategy {
        SearchStrategy::Random => {
            ParameterSampler::new(space.clone(), config.n_iter, state)?.candidates()
        }
        SearchStrategy::Grid => ParameterGrid::new(&space)?.iter().collect(),
    };
    if debug {
        eprintln!(
            "DEBUG TIMING: Generated {} candidate(s) in {:.3}s",
            candidates.len(),
            sample_start.elapsed().as_secs_f64()
        );
    }

    let report = json::JsonSearchReport::new(config.strategy, state, &space, candidates);

    if let Some(path) = &args.json_output {
        json::write_json_output(Some(path.as_path()), &report)?;
        println!();
        println!("JSON report written to {}", path.display());
    }

    match args.format {
        OutputFormat::Text => {
            println!();
            text::print_candidates(&report.candidates);
        }
        OutputFormat::Json if args.json_output.is_none() => {
            json::write_json_output(None, &report)?;
        }
        OutputFormat::Json => {}
    }

    Ok(())
}
