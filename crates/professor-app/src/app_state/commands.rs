//! Parsing of REPL input lines.

use professor_common::DepthLevel;

/// What the user asked for with one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Input {
    /// A question for the professor.
    Ask(String),
    SetDepth(DepthLevel),
    SetSearch(bool),
    Clear,
    ShowConfig,
    Help,
    Quit,
    /// Blank line.
    Nothing,
    /// A slash command that could not be understood.
    Invalid(String),
}

pub(crate) const HELP_TEXT: &str = "\
Comandos:
  /depth <concise|detailed|academic>  profundidade da explicação
  /search <on|off>                    pesquisa na web (grounding)
  /clear                              apaga o histórico desta aula
  /config                             mostra as configurações atuais
  /help                               mostra esta ajuda
  /quit                               sai
Ctrl+C interrompe uma resposta em andamento.";

/// Interpret one line of input.
pub(crate) fn parse_input(line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Nothing;
    }

    let Some(command) = line.strip_prefix('/') else {
        return Input::Ask(line.to_string());
    };

    let mut words = command.split_whitespace();
    let name = words.next().unwrap_or("");
    let arg = words.next();

    match (name, arg) {
        ("depth", Some(level)) => match level {
            "concise" | "detailed" | "academic" => Input::SetDepth(DepthLevel::from(level)),
            other => Input::Invalid(format!(
                "profundidade desconhecida: {other} (use concise, detailed ou academic)"
            )),
        },
        ("search", Some("on")) => Input::SetSearch(true),
        ("search", Some("off")) => Input::SetSearch(false),
        ("search", _) => Input::Invalid("use /search on ou /search off".into()),
        ("depth", None) => Input::Invalid("use /depth concise, detailed ou academic".into()),
        ("clear", None) => Input::Clear,
        ("config", None) => Input::ShowConfig,
        ("help", None) => Input::Help,
        ("quit" | "exit", None) => Input::Quit,
        _ => Input::Invalid(format!("comando desconhecido: /{command}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_a_question() {
        assert_eq!(
            parse_input("  Como funciona a mecânica quântica?  "),
            Input::Ask("Como funciona a mecânica quântica?".into())
        );
    }

    #[test]
    fn blank_line_does_nothing() {
        assert_eq!(parse_input(""), Input::Nothing);
        assert_eq!(parse_input("   \t"), Input::Nothing);
    }

    #[test]
    fn depth_command() {
        assert_eq!(
            parse_input("/depth concise"),
            Input::SetDepth(DepthLevel::Concise)
        );
        assert_eq!(
            parse_input("/depth academic"),
            Input::SetDepth(DepthLevel::Academic)
        );
        assert!(matches!(parse_input("/depth verbose"), Input::Invalid(_)));
        assert!(matches!(parse_input("/depth"), Input::Invalid(_)));
    }

    #[test]
    fn search_command() {
        assert_eq!(parse_input("/search on"), Input::SetSearch(true));
        assert_eq!(parse_input("/search off"), Input::SetSearch(false));
        assert!(matches!(parse_input("/search maybe"), Input::Invalid(_)));
    }

    #[test]
    fn simple_commands() {
        assert_eq!(parse_input("/clear"), Input::Clear);
        assert_eq!(parse_input("/config"), Input::ShowConfig);
        assert_eq!(parse_input("/help"), Input::Help);
        assert_eq!(parse_input("/quit"), Input::Quit);
        assert_eq!(parse_input("/exit"), Input::Quit);
    }

    #[test]
    fn unknown_command_is_invalid() {
        assert!(matches!(parse_input("/dance"), Input::Invalid(m) if m.contains("/dance")));
        assert!(matches!(parse_input("/clear now"), Input::Invalid(_)));
    }
}
