//! Dialogue scenes with a fixed cast: host, AI narrator and specialist.

use serde::{Deserialize, Serialize};

use crate::catalog::pools::tone_descriptors;

pub const HOST: &str = "Host";
pub const NARRATOR: &str = "Narrador IA";
pub const SPECIALIST: &str = "Especialista";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerLine {
    pub name: String,
    pub line: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueScene {
    pub scene: String,
    pub direction: String,
    pub speakers: Vec<SpeakerLine>,
}

/// Build the scene for one act.
pub fn synthesize_dialogue(section: &str, objective: &str, tone: &str, channel: &str) -> DialogueScene {
    let [climate, rhythm, anchor] = *tone_descriptors(tone);
    let objective_lower = objective.to_lowercase();

    let speakers = vec![
        SpeakerLine {
            name: HOST.to_string(),
            line: format!(
                "Oi, aqui é {} e hoje vamos direto ao ponto: {}",
                channel, objective
            ),
        },
        SpeakerLine {
            name: NARRATOR.to_string(),
            line: format!(
                "Imagine agora {} em detalhes, enquanto você se prepara para colocar em prática {}.",
                section.to_lowercase(),
                objective_lower
            ),
        },
        SpeakerLine {
            name: SPECIALIST.to_string(),
            line: format!(
                "O segredo está em alinhar {} com {} para manter consistência.",
                objective_lower, anchor
            ),
        },
    ];

    DialogueScene {
        scene: section.to_string(),
        direction: format!("{} em clima {} e ritmo {}.", objective, climate, rhythm),
        speakers,
    }
}
