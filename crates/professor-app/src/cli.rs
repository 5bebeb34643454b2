use clap::Parser;
use professor_common::DepthLevel;

/// Professor Geral, a patient AI tutor in your terminal.
#[derive(Parser, Debug)]
#[command(name = "professor", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error) or a full filter directive.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Explanation depth for this run: concise, detailed or academic.
    #[arg(long)]
    pub depth: Option<DepthLevel>,

    /// Enable web search grounding for this run.
    #[arg(long)]
    pub search: bool,

    /// Gemini model override.
    #[arg(long)]
    pub model: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
