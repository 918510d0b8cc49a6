//! Fixed vocabulary pools shared by the section synthesizers.

/// Tone descriptor triples, matched in this order against the brief's tone.
///
/// Each triple reads as (climate, rhythm, anchor).
pub static TONE_DESCRIPTORS: &[(&str, [&str; 3])] = &[
    ("inspirador", ["impactante", "emocional", "visionário"]),
    ("descontraido", ["leve", "divertido", "conversacional"]),
    ("tecnico", ["preciso", "didático", "autoridade"]),
    ("investigativo", ["intrigante", "suspense", "analítico"]),
];

/// Key used when no tone descriptor matches.
pub const DEFAULT_TONE_KEY: &str = "inspirador";

pub static STYLES: &[&str] = &[
    "cinematográfico futurista",
    "ilustrado digital vibrante",
    "realismo estilizado",
    "estilo anime sci-fi",
    "retro synthwave",
    "low-poly minimalista",
];

pub static CAMERAS: &[&str] = &[
    "lente 35mm, profundidade de campo rasa, foco no protagonista",
    "drone 4K, movimento orbital",
    "steadycam hand-held, luz suave",
    "close-up macro com bokeh",
    "plano sequência com dolly-in",
    "câmera virtual cinematográfica, ambient occlusion",
];

/// Terms every visual prompt asks the image model to avoid.
pub static NEGATIVE_TERMS: &[&str] = &[
    "desfoque",
    "baixa resolução",
    "artefatos",
    "pessoas extras",
    "texto visível",
    "logotipo",
];

pub const ASPECT_RATIO: &str = "16:9";

/// Deliverables listed with every pack, independent of the brief.
pub static DELIVERABLES: [&str; 4] = [
    "Roteiro narrativo estruturado em 3 atos",
    "Diálogos prontos para host, narrador IA e especialista",
    "Pacote de prompts 16:9 para geradores de imagem",
    "Sugestões de B-roll e cenas de apoio",
];

/// Resolve the descriptor triple for a free-text tone.
///
/// The first key that appears (case-insensitively) inside the tone wins.
pub fn tone_descriptors(tone: &str) -> &'static [&'static str; 3] {
    let tone = tone.to_lowercase();
    TONE_DESCRIPTORS
        .iter()
        .find(|(key, _)| tone.contains(key))
        .or_else(|| TONE_DESCRIPTORS.iter().find(|(key, _)| *key == DEFAULT_TONE_KEY))
        .map_or(&TONE_DESCRIPTORS[0].1, |(_, descriptors)| descriptors)
}
