use std::path::Path;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use pipeline_helper::checker::{
    AnyChecker, Checker, DejagnuLogChecker, FileExistsChecker, LineLengthChecker,
    MainMethodChecker, SimpleMessageChecker, main_class,
};
use pipeline_helper::cli::{Cli, ColorChoice, Commands, LineLengthArgs};
use pipeline_helper::config::{Config, ConfigLoader, FileConfigLoader};
use pipeline_helper::output::{ColorMode, ErrorOutput, ResultWriter};
use pipeline_helper::scanner::DirectoryLister;
use pipeline_helper::{EXIT_CHECKER_ERROR, EXIT_CONFIG_ERROR, EXIT_SUCCESS};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

const fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Log to stderr; stdout only carries the detected main class.
fn init_logging(cli: &Cli, ansi: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(cli.verbose, cli.quiet).into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(ansi),
        )
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    let error_output = ErrorOutput::new(color_choice_to_mode(cli.color));
    init_logging(&cli, error_output.uses_colors());

    let exit_code = match run(&cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            error_output.report(&e);
            if e.is_usage_error() {
                EXIT_CONFIG_ERROR
            } else {
                EXIT_CHECKER_ERROR
            }
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> pipeline_helper::Result<()> {
    // 1. Load configuration
    let mut config = load_config(cli.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, cli);
    config.validate()?;

    // 3. Prepare the output directory before doing any work
    let writer = ResultWriter::new(&config.output.directory);
    writer.prepare()?;

    // 4. Run the requested checker
    let checker = build_checker(&cli.command, &config);
    debug!(checker = checker.name(), "running check");
    let result = checker.check()?;

    // 5. Persist the verdict
    writer.write(&result)?;
    info!(
        name = result.name(),
        successful = result.is_successful(),
        "check finished"
    );

    if !cli.quiet
        && let Some(class_name) = main_class(&result)
    {
        println!("{class_name}");
    }

    Ok(())
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> pipeline_helper::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// CLI excludes add to the configured ones; other CLI values replace them.
fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(dir) = &cli.output_directory {
        config.output.directory.clone_from(dir);
    }

    if let Commands::LineLength(args) = &cli.command {
        if let Some(extension) = &args.extension {
            config.line_length.extension.clone_from(extension);
        }
        config.line_length.exclude.extend(args.exclude.iter().cloned());
    }
}

fn build_checker(command: &Commands, config: &Config) -> AnyChecker {
    match command {
        Commands::MainMethod(args) => AnyChecker::MainMethod(MainMethodChecker::new(
            DirectoryLister::new(),
            &args.directory,
        )),
        Commands::FileExists(args) => {
            AnyChecker::FileExists(FileExistsChecker::new(args.files.clone()))
        }
        Commands::LineLength(args) => AnyChecker::LineLength(line_length_checker(args, config)),
        Commands::Dejagnu(args) => {
            AnyChecker::Dejagnu(DejagnuLogChecker::new(args.test_name.clone(), &args.log_file))
        }
        Commands::SimpleMessage(args) => AnyChecker::SimpleMessage(SimpleMessageChecker::new(
            args.test_name.clone(),
            args.successful,
            args.message.clone(),
        )),
    }
}

fn line_length_checker(
    args: &LineLengthArgs,
    config: &Config,
) -> LineLengthChecker<DirectoryLister> {
    LineLengthChecker::new(
        DirectoryLister::with_excludes(config.line_length.exclude.clone()),
        &args.directory,
        &config.line_length.extension,
        args.max_length,
    )
}
