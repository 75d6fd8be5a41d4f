//! The `emu3270` binary: resolves its command line and prints the result.

use std::process::ExitCode;

use anyhow::{Context as _, Result};
use serde::Serialize;

use emu3270_config::cli::help_lines;
use emu3270_config::config::Configuration;
use emu3270_config::config::model::ScreenModel;
use emu3270_config::logging::{self, Log, Logger, ScriptLog};
use emu3270_config::platform::Build;
use emu3270_config::resolve::args::program_name;
use emu3270_config::resolve::{Resolution, Resolver, Standard, usage_line};

/// What the binary reports after a successful resolution.
#[derive(Serialize)]
struct Summary<'a> {
    host: Option<&'a str>,
    profile: Option<&'a str>,
    remaining: &'a [String],
    screen: &'a ScreenModel,
    config: &'a Configuration,
}

#[allow(clippy::print_stdout)]
fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    let build = Build::detect("emu3270");
    logging::init_subscriber(&build.app, &build.app);
    let argv: Vec<String> = std::env::args().collect();

    if build.is_interactive() {
        let log = Logger::new();
        run(&build, &log, &argv)
    } else {
        let log = ScriptLog::new();
        let code = run(&build, &log, &argv);
        print!("{}", log.result().render());
        code
    }
}

#[allow(clippy::print_stdout)]
fn run(build: &Build, log: &dyn Log, argv: &[String]) -> ExitCode {
    let mut resolver = Resolver::new(build, log, Standard::new(build, log));
    let resolution = match resolver.resolve(argv) {
        Ok(resolution) => resolution,
        Err(e) => {
            log.error(&e.to_string());
            if e.wants_usage() {
                let program = argv.first().map_or(build.app.as_str(), |a| program_name(a));
                log.info(&usage_line(program));
                log.info("Options:");
                for line in help_lines(build) {
                    log.info(&line);
                }
            }
            return ExitCode::FAILURE;
        }
    };

    match summarize(build, log, resolution) {
        Ok(json) if build.is_interactive() => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Ok(json) => {
            log.info(&json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log.error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn summarize(build: &Build, log: &dyn Log, mut resolution: Resolution) -> Result<String> {
    let screen = ScreenModel::init(&mut resolution.config, build, log);
    let summary = Summary {
        host: resolution.host.as_deref(),
        profile: resolution.profile_name.as_deref(),
        remaining: &resolution.remaining,
        screen: &screen,
        config: &resolution.config,
    };
    serde_json::to_string_pretty(&summary).context("Failed to render the resolved configuration")
}
