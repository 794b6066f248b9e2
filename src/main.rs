mod cli;
mod config;
mod context;
mod dryrun;
mod gate;
mod manifest;
mod payload;
mod progress;
mod upload;

use std::path::{Path, PathBuf};

use clap::Parser;
use cli::Cli;
use gate::Gate;

const EXIT_NO_RESULTS: i32 = 3;
const EXIT_FATAL: i32 = 4;
const EXIT_ERROR_STATUS: i32 = 5;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Nothing on disk or on the network is touched before both gates pass.
    match gate::check_env() {
        Gate::Allowed => {}
        Gate::PullRequest => {
            eprintln!("Disabled for pull requests.");
            std::process::exit(Gate::PullRequest.exit_code());
        }
        Gate::NotAuthorized => {
            eprint!("{}", gate::USAGE);
            std::process::exit(Gate::NotAuthorized.exit_code());
        }
    }

    std::process::exit(run(&cli).await);
}

async fn run(cli: &Cli) -> i32 {
    let cfg = match &cli.config {
        Some(path) => match config::load_config(Path::new(path)) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {e:#}");
                return EXIT_FATAL;
            }
        },
        None => config::UploaderConfig::default(),
    };

    let results_dir = match &cli.results_dir {
        Some(dir) => PathBuf::from(dir),
        None => config::default_results_dir(&cfg),
    };

    if let Err(e) = std::env::set_current_dir(&results_dir) {
        eprintln!("No results produced.");
        if cli.verbose {
            eprintln!("  {}: {e}", results_dir.display());
        }
        return EXIT_NO_RESULTS;
    }

    let context = match context::RunContext::from_env(&cfg.job_url_base) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return EXIT_FATAL;
        }
    };

    let payload = match payload::assemble(Path::new("."), &cfg.manifest, context) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return EXIT_FATAL;
        }
    };

    let target_url = cli.target_url.as_deref().unwrap_or(&cfg.target_url);

    if cli.verbose {
        eprintln!(
            "Collected {} screenshots ({} bytes) from {}",
            payload.shot_count(),
            payload.total_bytes(),
            results_dir.display()
        );
        for file in &payload.files {
            eprintln!("  {:<8} {} ({} bytes)", file.field, file.file_name, file.contents.len());
        }
    }

    if cli.dry_run {
        let plan = dryrun::plan(target_url, &payload);
        if cli.json {
            dryrun::print_json(&plan);
        } else {
            dryrun::print_table(&plan);
        }
        return 0;
    }

    match upload::send(target_url, payload).await {
        Ok(response) => {
            upload::print_response(&response);
            if cli.fail_on_error_status && !response.is_success() {
                return EXIT_ERROR_STATUS;
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            EXIT_FATAL
        }
    }
}
