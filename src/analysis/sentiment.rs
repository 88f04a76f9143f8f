use std::collections::HashMap;

/// Maps text to a polarity in [-1.0, 1.0]. Must be deterministic.
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> f64;
}

impl<F> SentimentScorer for F
where
    F: Fn(&str) -> f64 + Send + Sync,
{
    fn score(&self, text: &str) -> f64 {
        self(text)
    }
}

const LEXICON: &[(&str, f64)] = &[
    // positive
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("beautiful", 0.85),
    ("best", 1.0),
    ("better", 0.5),
    ("brilliant", 0.9),
    ("clean", 0.37),
    ("cool", 0.35),
    ("delightful", 1.0),
    ("easy", 0.43),
    ("enjoy", 0.4),
    ("enjoyed", 0.4),
    ("excellent", 1.0),
    ("fantastic", 0.4),
    ("fast", 0.2),
    ("fine", 0.42),
    ("fun", 0.3),
    ("glad", 0.5),
    ("good", 0.7),
    ("great", 0.8),
    ("happy", 0.8),
    ("helpful", 0.5),
    ("impressive", 1.0),
    ("interesting", 0.5),
    ("like", 0.2),
    ("liked", 0.2),
    ("love", 0.5),
    ("loved", 0.7),
    ("lovely", 0.5),
    ("nice", 0.6),
    ("perfect", 1.0),
    ("pleasant", 0.73),
    ("positive", 0.23),
    ("recommend", 0.3),
    ("right", 0.29),
    ("smart", 0.21),
    ("solid", 0.3),
    ("superb", 1.0),
    ("thanks", 0.2),
    ("useful", 0.3),
    ("well", 0.3),
    ("wonderful", 1.0),
    ("wow", 0.1),
    // negative
    ("annoying", -0.8),
    ("awful", -1.0),
    ("bad", -0.7),
    ("boring", -1.0),
    ("broken", -0.4),
    ("confusing", -0.3),
    ("difficult", -0.5),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
    ("disgusting", -1.0),
    ("dumb", -0.38),
    ("hard", -0.29),
    ("hate", -0.8),
    ("hated", -0.9),
    ("horrible", -1.0),
    ("mediocre", -0.3),
    ("negative", -0.3),
    ("pathetic", -1.0),
    ("poor", -0.4),
    ("sad", -0.5),
    ("slow", -0.3),
    ("stupid", -0.8),
    ("terrible", -1.0),
    ("ugly", -0.7),
    ("useless", -0.5),
    ("worse", -0.4),
    ("worst", -1.0),
    ("wrong", -0.5),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.5),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("incredibly", 1.5),
    ("quite", 1.1),
    ("really", 1.3),
    ("so", 1.3),
    ("super", 1.4),
    ("totally", 1.4),
    ("very", 1.3),
    ("slightly", 0.7),
    ("somewhat", 0.8),
];

const NEGATORS: &[&str] = &["not", "no", "never", "neither", "nor", "nothing", "cannot", "without"];

/// Each trailing `!` adds this much magnitude, up to `MAX_EXCLAMATIONS`.
const EXCLAMATION_BOOST: f64 = 0.1;
const MAX_EXCLAMATIONS: usize = 3;
const NEGATION_FACTOR: f64 = -0.5;

/// Word-lexicon polarity scorer with intensifier and negation handling.
///
/// The score is the mean of every sentiment-bearing word after modifiers are
/// applied. Text without any such word scores 0.0.
pub struct LexiconScorer {
    lexicon: HashMap<&'static str, f64>,
    intensifiers: HashMap<&'static str, f64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self {
            lexicon: LEXICON.iter().copied().collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }

    fn is_negator(word: &str) -> bool {
        NEGATORS.contains(&word) || word.ends_with("n't")
    }
}

/// Modifiers waiting for the next sentiment word within a clause.
struct Pending {
    intensity: f64,
    negated: bool,
}

impl Pending {
    fn new() -> Self {
        Self { intensity: 1.0, negated: false }
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> f64 {
        let lowered = text.to_lowercase();
        let mut values = Vec::new();
        let mut pending = Pending::new();
        let mut exclamations = 0usize;
        let mut word = String::new();

        // Trailing sentinel flushes the last word.
        for ch in lowered.chars().chain(std::iter::once(' ')) {
            if ch.is_alphanumeric() || ch == '\'' {
                word.push(ch);
                continue;
            }

            if !word.is_empty() {
                let token = word.trim_matches('\'');
                if Self::is_negator(token) {
                    pending.negated = !pending.negated;
                } else if let Some(factor) = self.intensifiers.get(token) {
                    pending.intensity *= factor;
                } else if let Some(polarity) = self.lexicon.get(token) {
                    let mut value = polarity * pending.intensity;
                    if pending.negated {
                        value *= NEGATION_FACTOR;
                    }
                    values.push(value);
                    pending = Pending::new();
                }
                word.clear();
            }

            match ch {
                '!' => {
                    exclamations += 1;
                    pending = Pending::new();
                }
                '.' | ',' | ';' | ':' | '?' => pending = Pending::new(),
                _ => {}
            }
        }

        if values.is_empty() {
            return 0.0;
        }

        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let boost = 1.0 + EXCLAMATION_BOOST * exclamations.min(MAX_EXCLAMATIONS) as f64;
        (mean * boost).clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> f64 {
        LexiconScorer::new().score(text)
    }

    #[test]
    fn positive_and_negative_words() {
        assert!(score("great!") > 0.0);
        assert!(score("terrible") < 0.0);
        assert!(score("This is a good idea") > 0.0);
        assert!(score("What an awful, ugly design") < 0.0);
    }

    #[test]
    fn neutral_text_scores_zero() {
        assert_eq!(score(""), 0.0);
        assert_eq!(score("The meeting is at noon"), 0.0);
        assert_eq!(score("12345 ..."), 0.0);
    }

    #[test]
    fn case_is_ignored() {
        assert_eq!(score("GREAT"), score("great"));
    }

    #[test]
    fn intensifier_strengthens() {
        assert!(score("very good") > score("good"));
        assert!(score("very bad") < score("bad"));
        assert!(score("slightly good") < score("good"));
    }

    #[test]
    fn negation_flips_and_damps() {
        assert!(score("not good") < 0.0);
        assert!(score("not bad") > 0.0);
        assert!(score("isn't great") < 0.0);
        assert!(score("not bad").abs() < score("bad").abs());
    }

    #[test]
    fn punctuation_ends_negation() {
        assert!(score("not today, good job") > 0.0);
    }

    #[test]
    fn exclamation_amplifies() {
        assert!(score("good!") > score("good"));
        assert!(score("bad!!") < score("bad"));
    }

    #[test]
    fn stays_in_range() {
        for text in ["best best best!!!!!", "extremely absolutely awful!!!", "totally super perfect"] {
            let p = score(text);
            assert!((-1.0..=1.0).contains(&p), "{} scored {}", text, p);
        }
    }

    #[test]
    fn is_deterministic() {
        let scorer = LexiconScorer::new();
        let text = "Honestly not the worst, but really boring!";
        assert_eq!(scorer.score(text), scorer.score(text));
    }

    #[test]
    fn closures_are_scorers() {
        let fixed = |_: &str| 0.25;
        assert_eq!(fixed.score("anything"), 0.25);
    }
}
