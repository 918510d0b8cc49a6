//! Narrative framework catalog.
//!
//! Each framework bundles a three-act blueprint with matching hook and
//! call-to-action template pools. Everything here is `'static` data: there is
//! no API to change the catalog once the program is running, so any number of
//! generations may read it concurrently.
//!
//! # Shipped Frameworks
//!
//! | Id                 | Name               | Shape |
//! |--------------------|--------------------|-------|
//! | `heroi-jornada`    | Jornada do Herói   | Chamado → Provação → Transformação |
//! | `problema-solucao` | Problema → Solução | Dor → Método → Transformação |
//! | `docuserie`        | DocuSérie IA       | Setup → Investigação → Clímax |
//!
//! Templates use `{token}` placeholders filled by `template::fill_template`.
//! Adding a framework is a matter of appending to `FRAMEWORKS`.

pub mod pools;

use tracing::warn;

/// Framework used when a brief names an id the catalog does not know.
pub const DEFAULT_FRAMEWORK_ID: &str = "problema-solucao";

/// One narrative beat of a blueprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActStep {
    pub id: &'static str,
    pub label: &'static str,
    pub objective: &'static str,
}

/// A named story structure with its template pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NarrativeFramework {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Acts in narrative order
    pub blueprint: &'static [ActStep],
    pub hooks: &'static [&'static str],
    pub call_to_actions: &'static [&'static str],
}

// ============================================================================
// Catalog Data
// ============================================================================

pub static FRAMEWORKS: &[NarrativeFramework] = &[
    NarrativeFramework {
        id: "heroi-jornada",
        name: "Jornada do Herói",
        description: "Transforme o protagonista em um herói em evolução, com desafios crescentes e resolução transformadora.",
        blueprint: &[
            ActStep {
                id: "apresentacao",
                label: "Ato 1 – Chamado",
                objective: "Apresentar o contexto e o conflito inicial que conecta com o público.",
            },
            ActStep {
                id: "desafio",
                label: "Ato 2 – Provação",
                objective: "Evoluir a narrativa com obstáculos práticos e aprendizados claros.",
            },
            ActStep {
                id: "transformacao",
                label: "Ato 3 – Transformação",
                objective: "Concluir com uma transformação tangível e um convite à ação.",
            },
        ],
        hooks: &[
            "Você já sentiu que {audience} está preso em um ciclo sem saída?",
            "O que eu descobri sobre {topic} vai mudar como você encara {goal}.",
            "Existe uma virada simples que pode levar {audience} de {pain} para {desire}.",
        ],
        call_to_actions: &[
            "Inscreva-se para acompanhar nossa próxima jornada e compartilhar sua própria transformação nos comentários!",
            "Baixe o checklist gratuito nos comentários fixados e dê o próximo passo hoje mesmo!",
            "Compartilhe este vídeo com quem precisa desse impulso e continue a história com a gente!",
        ],
    },
    NarrativeFramework {
        id: "problema-solucao",
        name: "Problema → Solução",
        description: "Episódios objetivos que mapeiam dores reais, apresentam soluções claras e reforçam autoridade.",
        blueprint: &[
            ActStep {
                id: "contexto",
                label: "Identificação da Dor",
                objective: "Validar a frustração do público com dados ou situações cotidianas.",
            },
            ActStep {
                id: "metodo",
                label: "Método Em 3 Etapas",
                objective: "Mostrar uma solução estruturada e escalável, com exemplos reais.",
            },
            ActStep {
                id: "futuro",
                label: "Transformação Realista",
                objective: "Pintar o futuro após aplicar a solução, inclusive próximos passos.",
            },
        ],
        hooks: &[
            "{audience}, você está cansado de tentar {goal} e sempre cair na mesma armadilha?",
            "Este é o método que tirou {persona} de {painPoint} e levou para {desire}.",
            "Se você quer {goal} sem perder {resource}, precisa dominar {topic} agora.",
        ],
        call_to_actions: &[
            "Assine o canal para receber os próximos vídeos da série e não perder os templates!",
            "Deixe um comentário com sua maior dúvida sobre {topic} que eu respondo pessoalmente.",
            "Envie este episódio para alguém da sua equipe que precisa destravar {goal} ainda hoje!",
        ],
    },
    NarrativeFramework {
        id: "docuserie",
        name: "DocuSérie IA",
        description: "Documente um tema com narrativa cinematográfica, unindo entrevistas, arquivos e visual storytelling.",
        blueprint: &[
            ActStep {
                id: "origem",
                label: "Setup Cinematográfico",
                objective: "Estabelecer estética, atmosfera e conflito investigativo inicial.",
            },
            ActStep {
                id: "investigacao",
                label: "Investigações Múltiplas",
                objective: "Unir entrevistas, dados e B-roll analítico para expandir a tensão.",
            },
            ActStep {
                id: "resolucao",
                label: "Clímax + Epílogo",
                objective: "Entregar um insight memorável e repercussão para comunidade.",
            },
        ],
        hooks: &[
            "Por trás de {topic}, existe uma história não contada que muda tudo que você sabe sobre {goal}.",
            "Este episódio revela arquivos inéditos que colocam {audience} no centro da investigação.",
            "Prepare-se para ver {topic} como nunca antes, com reconstruções geradas por IA e relatos exclusivos.",
        ],
        call_to_actions: &[
            "Ative o sininho e ajude a financiar o próximo capítulo dessa investigação compartilhando o vídeo.",
            "Comente abaixo qual personagem dessa história você quer ver aprofundado no spin-off.",
            "Participe do clube de bastidores na descrição para acessar os prompts originais e entrevistas completas.",
        ],
    },
];

// ============================================================================
// Lookup
// ============================================================================

/// Every framework, in declaration order.
pub fn frameworks() -> impl Iterator<Item = &'static NarrativeFramework> {
    FRAMEWORKS.iter()
}

/// Exact-match lookup without fallback.
pub fn find_framework(id: &str) -> Option<&'static NarrativeFramework> {
    FRAMEWORKS.iter().find(|framework| framework.id == id)
}

/// Resolve a framework id, falling back to `problema-solucao` for unknown ids.
///
/// Any string may arrive as an id, so the fallback is not an error.
pub fn lookup_framework(id: &str) -> &'static NarrativeFramework {
    if let Some(framework) = find_framework(id) {
        return framework;
    }
    warn!(
        "Unknown narrative framework '{}', using '{}'",
        id, DEFAULT_FRAMEWORK_ID
    );
    default_framework()
}

fn default_framework() -> &'static NarrativeFramework {
    // Catalog data always contains the default entry
    find_framework(DEFAULT_FRAMEWORK_ID).unwrap_or(&FRAMEWORKS[0])
}
