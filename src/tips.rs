use rand::Rng;

pub const TIPS: [&str; 5] = [
    "Keep your eyes on the screen, not the keyboard.",
    "Use the home row position (ASDF / JKL;).",
    "Start slow: accuracy first, speed will follow.",
    "Practice daily in short sessions (10-20 minutes).",
    "Try timed sprints: 1 minute focusing on accuracy.",
];

const QUICK_TIP_COUNT: usize = 4;

/// Which coaching rule a result falls under
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum TipLevel {
    Accuracy,
    Beginner,
    Intermediate,
    Advanced,
}

impl TipLevel {
    pub fn message(&self) -> &'static str {
        match self {
            TipLevel::Accuracy => {
                "Work on accuracy first: slow down, focus on correct keystrokes, and aim for >80%."
            }
            TipLevel::Beginner => {
                "Beginner: practice home-row drills and keep sessions short but daily."
            }
            TipLevel::Intermediate => {
                "Intermediate: try timed 1-minute sprints and reduce corrections."
            }
            TipLevel::Advanced => {
                "Advanced: practice punctuation & mixed-case passages to push precision."
            }
        }
    }
}

/// First matching rule wins: accuracy below 70 outranks any speed bracket.
pub fn classify(wpm: f64, accuracy: u8) -> TipLevel {
    if accuracy < 70 {
        TipLevel::Accuracy
    } else if wpm < 30.0 {
        TipLevel::Beginner
    } else if wpm < 50.0 {
        TipLevel::Intermediate
    } else {
        TipLevel::Advanced
    }
}

pub fn advise(wpm: f64, accuracy: u8) -> &'static str {
    classify(wpm, accuracy).message()
}

pub fn random_tip_with<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    TIPS[rng.gen_range(0..TIPS.len())]
}

pub fn random_tip() -> &'static str {
    random_tip_with(&mut rand::thread_rng())
}

/// The short list shown alongside the practice area
pub fn quick_tips() -> &'static [&'static str] {
    &TIPS[..QUICK_TIP_COUNT]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn low_accuracy_wins_regardless_of_speed() {
        assert_eq!(classify(40.0, 50), TipLevel::Accuracy);
        assert_eq!(classify(120.0, 69), TipLevel::Accuracy);
        assert_eq!(advise(40.0, 50), TipLevel::Accuracy.message());
    }

    #[test]
    fn slow_accurate_typist_gets_beginner_tip() {
        assert_eq!(classify(20.0, 90), TipLevel::Beginner);
        assert!(advise(20.0, 90).starts_with("Beginner"));
    }

    #[test]
    fn speed_brackets_are_half_open() {
        assert_eq!(classify(29.99, 70), TipLevel::Beginner);
        assert_eq!(classify(30.0, 70), TipLevel::Intermediate);
        assert_eq!(classify(49.99, 100), TipLevel::Intermediate);
        assert_eq!(classify(50.0, 100), TipLevel::Advanced);
    }

    #[test]
    fn messages_are_distinct() {
        let levels = [
            TipLevel::Accuracy,
            TipLevel::Beginner,
            TipLevel::Intermediate,
            TipLevel::Advanced,
        ];
        for (i, a) in levels.iter().enumerate() {
            for b in &levels[i + 1..] {
                assert_ne!(a.message(), b.message());
            }
        }
    }

    #[test]
    fn random_tip_comes_from_fixed_list() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            assert!(TIPS.contains(&random_tip_with(&mut rng)));
        }
        assert!(TIPS.contains(&random_tip()));
    }

    #[test]
    fn quick_tips_are_first_four() {
        assert_eq!(quick_tips(), &TIPS[..4]);
    }
}
