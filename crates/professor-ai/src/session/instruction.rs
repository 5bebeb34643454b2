//! The professor persona and the depth directives appended to it.

use professor_common::DepthLevel;

/// Persona shared by every session, whatever the depth.
pub const PERSONA_PREAMBLE: &str = r#"
Você é o "Professor Geral", um educador virtual extremamente inteligente, paciente e didático.
Sua missão é explicar qualquer conceito solicitado pelo usuário em Português (Brasil).

Diretrizes de Personalidade:
- Seu tom é encorajador, acadêmico mas acessível, e confiável.
- Use analogias do mundo real para explicar conceitos abstratos.
- Formate suas respostas usando Markdown para máxima clareza (títulos, listas, negrito).
- Se o usuário fizer uma pergunta simples, seja direto. Se pedir detalhes, seja profundo.
- Sempre valide a curiosidade do aluno.

Se o usuário perguntar quem você é, responda apenas: "Eu sou o Professor Geral, sua inteligência artificial dedicada ao ensino e aprendizado."
"#;

/// The directive for one depth level.
pub fn depth_directive(level: DepthLevel) -> &'static str {
    match level {
        DepthLevel::Concise => "Responda de forma sucinta e direta, focando nos pontos chave.",
        DepthLevel::Academic => {
            "Responda com rigor acadêmico, citando definições formais e contexto histórico se aplicável."
        }
        DepthLevel::Detailed => "Forneça uma explicação detalhada e abrangente.",
    }
}

/// Persona followed by the directive for `level`.
pub fn build_system_instruction(level: DepthLevel) -> String {
    format!(
        "{PERSONA_PREAMBLE}\n\nConfiguração Atual: {}",
        depth_directive(level)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_instruction_starts_with_persona() {
        for level in DepthLevel::ALL {
            assert!(build_system_instruction(level).starts_with(PERSONA_PREAMBLE));
        }
    }

    #[test]
    fn instruction_ends_with_its_directive() {
        let concise = build_system_instruction(DepthLevel::Concise);
        assert!(concise.ends_with("Configuração Atual: Responda de forma sucinta e direta, focando nos pontos chave."));

        let academic = build_system_instruction(DepthLevel::Academic);
        assert!(academic.contains("rigor acadêmico"));
        assert!(!academic.contains("sucinta"));

        let detailed = build_system_instruction(DepthLevel::Detailed);
        assert!(detailed.contains("explicação detalhada"));
    }

    #[test]
    fn unknown_depth_gets_detailed_directive() {
        let level = DepthLevel::from("prolix");
        assert_eq!(
            depth_directive(level),
            depth_directive(DepthLevel::Detailed)
        );
    }

    #[test]
    fn directives_are_distinct() {
        let concise = depth_directive(DepthLevel::Concise);
        let detailed = depth_directive(DepthLevel::Detailed);
        let academic = depth_directive(DepthLevel::Academic);
        assert_ne!(concise, detailed);
        assert_ne!(detailed, academic);
        assert_ne!(concise, academic);
    }
}
