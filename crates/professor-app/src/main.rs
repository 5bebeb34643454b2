mod app_state;
mod cli;

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use professor_ai::{ChatContext, GeminiClient, GeminiConfig, ModelSettings, SessionConfig};
use professor_common::ProfessorError;
use professor_config::ProfessorConfig;
use tracing_subscriber::EnvFilter;

use app_state::ProfessorApp;

/// Crates whose logs the default filter lets through.
const LOG_TARGETS: [&str; 3] = ["professor_app", "professor_ai", "professor_config"];

/// `KEY=VALUE` pairs from a .env file, skipping blanks and `#` comments.
fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let value = value.trim().trim_matches('"').trim_matches('\'');
            (key.trim().to_string(), value.to_string())
        })
        .collect()
}

/// Load environment variables from a .env file.
///
/// Variables already set in the environment win over the file. Must run
/// before any other thread exists.
fn load_dotenv() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Current directory
        std::path::PathBuf::from(".env"),
        // Workspace root, two levels up from crates/professor-app/
        manifest_dir.join("..").join("..").join(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for (key, value) in parse_dotenv(&contents) {
                if std::env::var(&key).is_err() {
                    std::env::set_var(key, value);
                }
            }
            return;
        }
    }
}

/// Filter directives for `level`, or `override_directive` verbatim when given.
fn log_directives(override_directive: Option<&str>, level: &str) -> Vec<String> {
    match override_directive {
        Some(directive) => directive.split(',').map(str::to_string).collect(),
        None => LOG_TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect(),
    }
}

fn init_logging(directives: &[String]) {
    let mut filter = EnvFilter::from_default_env();
    for directive in directives {
        match directive.parse() {
            Ok(d) => filter = filter.add_directive(d),
            Err(e) => eprintln!("ignoring log directive {directive:?}: {e}"),
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Read the config file, with warnings from the loader going to stderr.
fn load_config(path: Option<&str>) -> ProfessorConfig {
    let bootstrap = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::with_default(bootstrap, || {
        professor_config::load_config_from(path.map(Path::new)).unwrap_or_else(|e| {
            tracing::warn!("Config load failed, using defaults: {e}");
            ProfessorConfig::default()
        })
    })
}

async fn run(args: cli::Args, config: ProfessorConfig) -> professor_common::Result<()> {
    let gemini = GeminiConfig::from_env().map_err(|e| ProfessorError::Ai(e.to_string()))?;
    let client = GeminiClient::new(gemini).map_err(|e| ProfessorError::Ai(e.to_string()))?;

    let settings = ModelSettings::default()
        .with_model(args.model.unwrap_or(config.model.name))
        .with_temperature(config.model.temperature)
        .with_max_output_tokens(config.model.max_output_tokens);
    let session_config = SessionConfig::new(
        args.depth.unwrap_or(config.session.depth_level),
        args.search || config.session.use_search_grounding,
    );
    tracing::info!(model = %settings.model, ?session_config, "starting lesson");

    let ctx = ChatContext::new(Arc::new(client), settings);
    let mut app = ProfessorApp::new(ctx, session_config);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    app_state::run(&mut app, stdin, &mut stdout).await?;
    Ok(())
}

fn main() -> ExitCode {
    // Load .env file before anything else
    load_dotenv();

    let args = cli::parse();
    let config = load_config(args.config.as_deref());

    init_logging(&log_directives(
        args.log_level.as_deref(),
        config.logging.level.as_filter(),
    ));
    tracing::info!("Professor Geral v{} starting...", env!("CARGO_PKG_VERSION"));

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create tokio runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(args, config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("professor: {e}");
            ExitCode::FAILURE
        }
    }
}
