//! Hook and call-to-action selection.
//!
//! Each call consumes exactly one draw. There is no memory of previous
//! picks, so two generations may well open with the same hook.

use crate::catalog::NarrativeFramework;
use crate::random::{RandomSource, choose};
use crate::template::{TokenMap, fill_template};

/// Pick one hook template uniformly and fill it.
pub fn select_hook(
    framework: &NarrativeFramework,
    tokens: &TokenMap,
    rng: &mut dyn RandomSource,
) -> String {
    fill_template(*choose(rng, framework.hooks), tokens)
}

/// Pick one call-to-action template uniformly and fill it.
pub fn select_call_to_action(
    framework: &NarrativeFramework,
    tokens: &TokenMap,
    rng: &mut dyn RandomSource,
) -> String {
    fill_template(*choose(rng, framework.call_to_actions), tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::lookup_framework;
    use crate::input::{sample_brief, validate_input};
    use crate::random::ScriptedSource;
    use crate::template::build_tokens;

    fn sample_tokens() -> TokenMap {
        build_tokens(&validate_input(&sample_brief()).expect("valid"))
    }

    #[test]
    fn test_hook_is_filled() {
        let framework = lookup_framework("problema-solucao");
        let mut rng = ScriptedSource::new(vec![1]);
        let hook = select_hook(framework, &sample_tokens(), &mut rng);
        assert_eq!(
            hook,
            "Este é o método que tirou criadores de frustração diária e levou para crescimento acelerado."
        );
    }

    #[test]
    fn test_every_hook_and_cta_fills_completely() {
        let tokens = sample_tokens();
        for framework in crate::catalog::frameworks() {
            for index in 0..framework.hooks.len() {
                let hook = select_hook(framework, &tokens, &mut ScriptedSource::new(vec![index]));
                assert!(!hook.contains('{') && !hook.contains('}'), "{}", hook);
            }
            for index in 0..framework.call_to_actions.len() {
                let cta = select_call_to_action(framework, &tokens, &mut ScriptedSource::new(vec![index]));
                assert!(!cta.contains('{') && !cta.contains('}'), "{}", cta);
            }
        }
    }

    #[test]
    fn test_cta_consumes_one_draw() {
        let framework = lookup_framework("docuserie");
        let mut rng = ScriptedSource::new(vec![2]);
        let cta = select_call_to_action(framework, &sample_tokens(), &mut rng);
        assert!(cta.starts_with("Participe do clube de bastidores"));
        assert_eq!(rng.draws(), 1);
    }
}
