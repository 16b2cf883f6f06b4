use std::path::PathBuf;

use sov_core::BrandSet;

use super::*;

pub(crate) fn test_config() -> AppConfig {
    AppConfig {
        log_level: "info".to_string(),
        youtube_api_key: Some("test-key".to_string()),
        search_query: "smart fan".to_string(),
        top_n_results: 50,
        brands: BrandSet::new("atomberg", ["crompton", "havells"]).unwrap(),
        ollama_base_url: "http://localhost:11434".to_string(),
        ollama_model: "gemma3:1b".to_string(),
        ollama_temperature: 0.7,
        request_timeout_secs: 30,
        max_comments_per_video: 100,
        fetch_concurrency: 4,
        max_retries: 2,
        retry_backoff_base_ms: 500,
        output_dir: PathBuf::from("."),
    }
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["sov-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_run_command() {
    let cli = Cli::try_parse_from(["sov-cli", "run"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Run)));
}

#[test]
fn parses_analyze_defaults() {
    let cli = Cli::try_parse_from(["sov-cli", "analyze"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Analyze {
            search: SearchArgs {
                query: None,
                limit: None
            },
            no_save: false
        })
    ));
}

#[test]
fn parses_analyze_with_overrides() {
    let cli = Cli::try_parse_from([
        "sov-cli",
        "analyze",
        "--query",
        "bldc fan",
        "--limit",
        "10",
        "--no-save",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Analyze {
            search: SearchArgs {
                query: Some(ref q),
                limit: Some(10)
            },
            no_save: true
        }) if q == "bldc fan"
    ));
}

#[test]
fn rejects_limit_above_one_page() {
    let result = Cli::try_parse_from(["sov-cli", "analyze", "--limit", "51"]);
    assert!(result.is_err());
}

#[test]
fn rejects_zero_limit() {
    let result = Cli::try_parse_from(["sov-cli", "narrative", "--limit", "0"]);
    assert!(result.is_err());
}

#[test]
fn parses_narrative_with_query() {
    let cli = Cli::try_parse_from(["sov-cli", "narrative", "--query", "ceiling fan"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Narrative {
            search: SearchArgs { query: Some(ref q), limit: None }
        }) if q == "ceiling fan"
    ));
}

#[test]
fn parses_env_init_with_default_path() {
    let cli = Cli::try_parse_from(["sov-cli", "env", "init"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Env {
            command: EnvCommands::Init { ref path }
        }) if path == std::path::Path::new(".env")
    ));
}

#[test]
fn parses_env_check() {
    let cli = Cli::try_parse_from(["sov-cli", "env", "check"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Env {
            command: EnvCommands::Check
        })
    ));
}

#[test]
fn effective_search_falls_back_to_config() {
    let config = test_config();
    let (query, limit) = corpus::effective_search(&config, &SearchArgs::default());
    assert_eq!(query, "smart fan");
    assert_eq!(limit, 50);
}

#[test]
fn effective_search_prefers_flags() {
    let config = test_config();
    let search = SearchArgs {
        query: Some("  tower fan ".to_string()),
        limit: Some(5),
    };
    let (query, limit) = corpus::effective_search(&config, &search);
    assert_eq!(query, "tower fan");
    assert_eq!(limit, 5);
}

#[test]
fn effective_search_ignores_blank_query_flag() {
    let config = test_config();
    let search = SearchArgs {
        query: Some("   ".to_string()),
        limit: None,
    };
    let (query, _) = corpus::effective_search(&config, &search);
    assert_eq!(query, "smart fan");
}
