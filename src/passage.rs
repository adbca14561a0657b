use crate::difficulty::Difficulty;
use rand::Rng;

const BEGINNER_TEXTS: [&str; 3] = [
    "Type these simple words quickly",
    "Practice makes perfect",
    "Keep your fingers on the home row",
];

const INTERMEDIATE_TEXTS: [&str; 3] = [
    "A quick brown fox jumps over the lazy dog",
    "Typing improves speed and accuracy with daily practice",
    "Focus on rhythm and minimize corrections",
];

const ADVANCED_TEXTS: [&str; 3] = [
    "Artificial intelligence is transforming modern software engineering rapidly",
    "Punctuation, capitalization and special characters increase challenge for accuracy",
    "Consistent small sessions are better than irregular long practice sessions",
];

/// A practice passage, tagged with the tier it was drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Passage {
    pub text: &'static str,
    pub difficulty: Difficulty,
}

impl Passage {
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// The fixed pool for a tier
pub fn passages(difficulty: Difficulty) -> &'static [&'static str] {
    match difficulty {
        Difficulty::Beginner => &BEGINNER_TEXTS,
        Difficulty::Intermediate => &INTERMEDIATE_TEXTS,
        Difficulty::Advanced => &ADVANCED_TEXTS,
    }
}

/// Draw a passage uniformly from the tier's pool using `rng`.
pub fn select_passage_with<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Passage {
    let pool = passages(difficulty);
    let idx = rng.gen_range(0..pool.len());
    Passage {
        text: pool[idx],
        difficulty,
    }
}

pub fn select_passage(difficulty: Difficulty) -> Passage {
    select_passage_with(difficulty, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn each_tier_has_three_passages() {
        for tier in Difficulty::ALL {
            assert_eq!(passages(tier).len(), 3);
        }
    }

    #[test]
    fn selected_passage_comes_from_requested_tier() {
        let mut rng = StdRng::seed_from_u64(7);
        for tier in Difficulty::ALL {
            for _ in 0..20 {
                let passage = select_passage_with(tier, &mut rng);
                assert_eq!(passage.difficulty, tier);
                assert!(passages(tier).contains(&passage.text));
            }
        }
    }

    #[test]
    fn seeded_selection_is_deterministic() {
        let a: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..10)
                .map(|_| select_passage_with(Difficulty::Advanced, &mut rng).text)
                .collect()
        };
        let b: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..10)
                .map(|_| select_passage_with(Difficulty::Advanced, &mut rng).text)
                .collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn selection_covers_whole_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        let seen: HashSet<&str> = (0..200)
            .map(|_| select_passage_with(Difficulty::Intermediate, &mut rng).text)
            .collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn thread_rng_selection_works() {
        let passage = select_passage(Difficulty::Beginner);
        assert_eq!(passage.difficulty, Difficulty::Beginner);
        assert!(passage.char_count() > 0);
    }
}
