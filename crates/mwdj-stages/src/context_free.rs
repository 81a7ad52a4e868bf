use mwdj_core::{ConversionContext, Stage};
use mwdj_rules::{apply_rules, RuleSet};
use std::sync::Arc;

/// Stage 1: vowels, consonants and syllabic consonants, everywhere
pub struct ContextFreeStage {
    rules: Arc<RuleSet>,
}

impl ContextFreeStage {
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self { rules }
    }
}

impl Stage for ContextFreeStage {
    fn id(&self) -> &'static str {
        "substitute.context_free.v1"
    }

    fn run(&self, input: &str, _ctx: &ConversionContext) -> String {
        apply_rules(self.rules.context_free(), input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mwdj_core::ConverterConfig;
    use mwdj_rules::Rule;

    fn run(input: &str) -> String {
        let stage = ContextFreeStage::new(Arc::new(RuleSet::default()));
        stage.run(input, &ConversionContext::new(ConverterConfig::default(), input))
    }

    #[test]
    fn test_diphthongs() {
        assert_eq!(run("kȯin"), "kɔɪn");
        assert_eq!(run("nau̇"), "naʊ");
        assert_eq!(run("sīt"), "saɪt");
        assert_eq!(run("dā"), "deɪ");
        assert_eq!(run("bōn"), "boʊn");
    }

    #[test]
    fn test_plain_vowels() {
        assert_eq!(run("tip"), "tɪp");
        assert_eq!(run("bet"), "bɛt");
        assert_eq!(run("mat"), "mæt");
        assert_eq!(run("sȯ"), "sɔː");
        assert_eq!(run("pu̇l"), "pʊl");
        assert_eq!(run("rül"), "ruːl");
        assert_eq!(run("kät"), "kɑːt");
        assert_eq!(run("ˈfər"), "ˈfɚ");
    }

    #[test]
    fn test_consonants() {
        assert_eq!(run("shī"), "ʃaɪ");
        assert_eq!(run("ˈvi-zhən"), "ˈvɪ-ʒən");
        assert_eq!(run("jäb"), "dʒɑːb");
        assert_eq!(run("chin"), "tʃɪn");
        assert_eq!(run("thin"), "θɪn");
        assert_eq!(run("t͟hen"), "ðɛn");
        assert_eq!(run("yärd"), "jɑːrd");
    }

    #[test]
    fn test_syllabic_consonants() {
        assert_eq!(run("ˈbä-tᵊl"), "ˈbɑː-tl̩");
        assert_eq!(run("ˈō-pᵊm"), "ˈoʊ-pm̩");
        assert_eq!(run("ˈkä-tᵊn"), "ˈkɑː-tn̩");
        assert_eq!(run("ᵊŋ"), "ŋ̍");
    }

    #[test]
    fn test_stress_dependent_symbols_untouched() {
        assert_eq!(run("ˈē-zē"), "ˈē-zē");
        assert_eq!(run("ə"), "ə");
    }

    #[test]
    fn test_diphthong_before_vowel_is_load_bearing() {
        let rules = RuleSet::default();
        let mut swapped: Vec<Rule> = rules.vowels().to_vec();
        let diphthong = swapped.iter().position(|r| r.from == "ȯi").unwrap();
        let vowel = swapped.iter().position(|r| r.from == "i").unwrap();
        swapped.swap(diphthong, vowel);

        assert_eq!(apply_rules(rules.vowels(), "kȯin"), "kɔɪn");
        assert_ne!(apply_rules(&swapped, "kȯin"), "kɔɪn");
    }
}
