use std::path::PathBuf;

use clap::CommandFactory;
use clap::error::ErrorKind;

use super::*;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn cli_main_method() {
    let cli = Cli::parse_from(["pipeline-helper", "main-method", "target/classes"]);
    match cli.command {
        Commands::MainMethod(args) => {
            assert_eq!(args.directory, PathBuf::from("target/classes"));
        }
        _ => panic!("Expected MainMethod command"),
    }
}

#[test]
fn cli_file_exists_collects_all_files() {
    let cli = Cli::parse_from(["pipeline-helper", "file-exists", "README.md", "AUTHORS"]);
    match cli.command {
        Commands::FileExists(args) => {
            assert_eq!(
                args.files,
                vec![PathBuf::from("README.md"), PathBuf::from("AUTHORS")]
            );
        }
        _ => panic!("Expected FileExists command"),
    }
}

#[test]
fn cli_file_exists_requires_a_file() {
    let err = Cli::try_parse_from(["pipeline-helper", "file-exists"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn cli_line_length_defaults() {
    let cli = Cli::parse_from(["pipeline-helper", "line-length", "80", "src"]);
    match cli.command {
        Commands::LineLength(args) => {
            assert_eq!(args.max_length, 80);
            assert_eq!(args.directory, PathBuf::from("src"));
            assert!(args.extension.is_none());
            assert!(args.exclude.is_empty());
        }
        _ => panic!("Expected LineLength command"),
    }
}

#[test]
fn cli_line_length_with_extension_and_excludes() {
    let cli = Cli::parse_from([
        "pipeline-helper",
        "line-length",
        "100",
        "src",
        "kt",
        "-x",
        "generated/**",
        "--exclude",
        "**/*Test.kt",
    ]);
    match cli.command {
        Commands::LineLength(args) => {
            assert_eq!(args.extension.as_deref(), Some("kt"));
            assert_eq!(args.exclude, vec!["generated/**", "**/*Test.kt"]);
        }
        _ => panic!("Expected LineLength command"),
    }
}

#[test]
fn cli_line_length_rejects_zero() {
    let err = Cli::try_parse_from(["pipeline-helper", "line-length", "0", "src"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
}

#[test]
fn cli_line_length_rejects_non_numeric() {
    assert!(Cli::try_parse_from(["pipeline-helper", "line-length", "long", "src"]).is_err());
}

#[test]
fn cli_dejagnu() {
    let cli = Cli::parse_from(["pipeline-helper", "dejagnu", "gcd", "testrun.log"]);
    match cli.command {
        Commands::Dejagnu(args) => {
            assert_eq!(args.test_name, "gcd");
            assert_eq!(args.log_file, PathBuf::from("testrun.log"));
        }
        _ => panic!("Expected Dejagnu command"),
    }
}

#[test]
fn cli_simple_message_accepts_boolish_values() {
    for (raw, expected) in [("true", true), ("yes", true), ("1", true), ("false", false), ("off", false)] {
        let cli = Cli::parse_from(["pipeline-helper", "simple-message", "build", raw, "msg"]);
        match cli.command {
            Commands::SimpleMessage(args) => {
                assert_eq!(args.successful, expected, "value {raw}");
                assert_eq!(args.message, "msg");
            }
            _ => panic!("Expected SimpleMessage command"),
        }
    }
}

#[test]
fn cli_simple_message_rejects_other_values() {
    assert!(
        Cli::try_parse_from(["pipeline-helper", "simple-message", "build", "maybe", "msg"])
            .is_err()
    );
}

#[test]
fn cli_global_options_after_subcommand() {
    let cli = Cli::parse_from([
        "pipeline-helper",
        "dejagnu",
        "gcd",
        "testrun.log",
        "-o",
        "feedback",
        "-vv",
        "--quiet",
        "--color",
        "never",
    ]);
    assert_eq!(cli.output_directory, Some(PathBuf::from("feedback")));
    assert_eq!(cli.verbose, 2);
    assert!(cli.quiet);
    assert_eq!(cli.color, ColorChoice::Never);
}

#[test]
fn cli_defaults() {
    let cli = Cli::parse_from(["pipeline-helper", "main-method", "."]);
    assert!(cli.output_directory.is_none());
    assert!(cli.config.is_none());
    assert!(!cli.no_config);
    assert_eq!(cli.verbose, 0);
    assert!(!cli.quiet);
    assert_eq!(cli.color, ColorChoice::Auto);
}

#[test]
fn cli_config_conflicts_with_no_config() {
    let err = Cli::try_parse_from([
        "pipeline-helper",
        "--config",
        "a.toml",
        "--no-config",
        "main-method",
        ".",
    ])
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
}

#[test]
fn cli_requires_subcommand() {
    assert!(Cli::try_parse_from(["pipeline-helper"]).is_err());
}
