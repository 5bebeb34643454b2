//! Terminal rendering of conversation entries.

use std::io::{self, Write};

use professor_ai::{Message, ModelSettings, Sender, SessionConfig, Source};
use professor_common::DepthLevel;

pub(crate) const INITIAL_SUGGESTIONS: [&str; 4] = [
    "Como funciona a mecânica quântica?",
    "Resuma a Revolução Francesa",
    "Dicas para estudar melhor",
    "Explique a Teoria da Relatividade",
];

/// Label for a source link: its title, or the URI's host when untitled.
pub(crate) fn source_label(source: &Source) -> String {
    if let Some(title) = source.title.as_deref().filter(|t| !t.trim().is_empty()) {
        return title.to_string();
    }
    url::Url::parse(&source.uri)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| source.uri.clone())
}

pub(crate) fn write_welcome(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "🎓 Professor Geral")?;
    writeln!(out, "O que vamos aprender hoje?")?;
    writeln!(
        out,
        "Sou seu professor particular de IA. Pergunte sobre história, ciências, artes ou qualquer curiosidade."
    )?;
    writeln!(out)?;
    writeln!(out, "Sugestões:")?;
    for suggestion in INITIAL_SUGGESTIONS {
        writeln!(out, "  • {suggestion}")?;
    }
    writeln!(out, "Digite /help para ver os comandos.")?;
    writeln!(out)
}

/// Sources block printed under a grounded answer. Nothing when empty.
pub(crate) fn write_sources(out: &mut impl Write, sources: &[Source]) -> io::Result<()> {
    if sources.is_empty() {
        return Ok(());
    }
    writeln!(out, "🌐 Fontes consultadas")?;
    for source in sources {
        writeln!(out, "  - {} <{}>", source_label(source), source.uri)?;
    }
    Ok(())
}

/// Sender and time line under a message, flagged when sending failed.
pub(crate) fn write_footer(out: &mut impl Write, message: &Message) -> io::Result<()> {
    let who = match message.sender() {
        Sender::User => "Você",
        Sender::Professor => "Professor Geral",
    };
    write!(out, "{who} • {}", message.timestamp().format("%H:%M"))?;
    if message.is_error() {
        write!(out, "  Falha ao enviar")?;
    }
    writeln!(out)
}

pub(crate) fn write_config(
    out: &mut impl Write,
    config: &SessionConfig,
    settings: &ModelSettings,
) -> io::Result<()> {
    let depth = match config.depth_level {
        DepthLevel::Concise => "Resumido: respostas rápidas e direto ao ponto.",
        DepthLevel::Detailed => "Detalhado: explicações completas com exemplos e contexto.",
        DepthLevel::Academic => "Acadêmico: linguagem formal e definições técnicas precisas.",
    };
    let search = if config.use_search_grounding {
        "ativada"
    } else {
        "desativada"
    };
    writeln!(out, "Configurações da Aula")?;
    writeln!(out, "  Profundidade: {depth}")?;
    writeln!(out, "  Pesquisa na Web: {search}")?;
    writeln!(
        out,
        "  Modelo: {} (temperatura {})",
        settings.model, settings.temperature
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn label_prefers_title() {
        let source = Source {
            uri: "https://pt.wikipedia.org/wiki/Entropia".into(),
            title: Some("Entropia – Wikipédia".into()),
        };
        assert_eq!(source_label(&source), "Entropia – Wikipédia");
    }

    #[test]
    fn label_falls_back_to_host() {
        let source = Source {
            uri: "https://www.britannica.com/science/entropy".into(),
            title: None,
        };
        assert_eq!(source_label(&source), "www.britannica.com");

        let blank = Source {
            uri: "https://example.org/x".into(),
            title: Some("  ".into()),
        };
        assert_eq!(source_label(&blank), "example.org");
    }

    #[test]
    fn label_falls_back_to_raw_uri() {
        let source = Source {
            uri: "not a url".into(),
            title: None,
        };
        assert_eq!(source_label(&source), "not a url");
    }

    #[test]
    fn sources_block_lists_each_source() {
        let sources = vec![
            Source {
                uri: "https://a.example/1".into(),
                title: Some("A".into()),
            },
            Source {
                uri: "https://b.example/2".into(),
                title: None,
            },
        ];
        let text = render(|out| write_sources(out, &sources));
        assert!(text.starts_with("🌐 Fontes consultadas\n"));
        assert!(text.contains("  - A <https://a.example/1>\n"));
        assert!(text.contains("  - b.example <https://b.example/2>\n"));
    }

    #[test]
    fn empty_sources_render_nothing() {
        assert_eq!(render(|out| write_sources(out, &[])), "");
    }

    #[test]
    fn footer_flags_errors() {
        let ok = render(|out| write_footer(out, &Message::professor("x", None)));
        assert!(ok.starts_with("Professor Geral • "));
        assert!(!ok.contains("Falha ao enviar"));

        let failed = render(|out| write_footer(out, &Message::error("x")));
        assert!(failed.contains("Falha ao enviar"));

        let user = render(|out| write_footer(out, &Message::user("x")));
        assert!(user.starts_with("Você • "));
    }

    #[test]
    fn welcome_lists_suggestions() {
        let text = render(|out| write_welcome(out));
        for suggestion in INITIAL_SUGGESTIONS {
            assert!(text.contains(suggestion));
        }
    }

    #[test]
    fn config_shows_depth_and_search() {
        let config = SessionConfig::new(DepthLevel::Academic, true);
        let text = render(|out| write_config(out, &config, &ModelSettings::default()));
        assert!(text.contains("Acadêmico"));
        assert!(text.contains("ativada"));
        assert!(text.contains("gemini-2.5-flash"));
    }
}
