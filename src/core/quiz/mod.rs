//=========================================================================
// Quiz Deck
//=========================================================================
//
// Question content and derivation for the duel.
//
// Architecture:
//   CATALOG (static name → description table)
//        ↓ draw(rng)
//   Question { prompt, answer, 4 shuffled candidates }
//
// Invariants (upheld by `draw`, checked by tests):
// - Exactly 4 candidates
// - The correct answer appears exactly once
// - The 3 decoys are distinct services, each different from the answer
//
// The RNG is passed in by the caller so tests can seed it; in production
// the core runtime owns one RNG for the whole logic thread.
//
//=========================================================================

//=== External Dependencies ===============================================

use rand::seq::SliceRandom;
use rand::Rng;

//=== ServiceEntry ========================================================

/// One quizzable cloud service: its name and a one-line description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceEntry {
    pub name: &'static str,
    pub description: &'static str,
}

/// The fixed in-memory service catalog.
///
/// Statically non-empty and larger than one question's candidate count,
/// so question derivation has no failure path.
const CATALOG: [ServiceEntry; 10] = [
    ServiceEntry { name: "EC2", description: "Virtual servers in the cloud" },
    ServiceEntry { name: "S3", description: "Scalable object storage" },
    ServiceEntry { name: "Lambda", description: "Serverless compute service" },
    ServiceEntry { name: "DynamoDB", description: "NoSQL database service" },
    ServiceEntry { name: "RDS", description: "Relational Database Service" },
    ServiceEntry { name: "CloudFront", description: "Content delivery network" },
    ServiceEntry { name: "IAM", description: "Identity and Access Management" },
    ServiceEntry { name: "VPC", description: "Virtual Private Cloud" },
    ServiceEntry { name: "SNS", description: "Simple Notification Service" },
    ServiceEntry { name: "SQS", description: "Simple Queue service" },
];

/// Candidates shown per question.
pub const CANDIDATE_COUNT: usize = 4;

const DECOY_COUNT: usize = CANDIDATE_COUNT - 1;

//=== Question ============================================================

/// A derived multiple-choice question.
///
/// Candidate order is randomized per question; the answer's position
/// carries no information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    answer: &'static str,
    candidates: [&'static str; CANDIDATE_COUNT],
}

impl Question {
    /// The prompt text shown during the question phase.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The correct service name.
    pub fn answer(&self) -> &'static str {
        self.answer
    }

    /// The shuffled candidate list.
    pub fn candidates(&self) -> &[&'static str; CANDIDATE_COUNT] {
        &self.candidates
    }

    /// Whether the candidate at `index` is the correct answer.
    ///
    /// Out-of-range indices are simply wrong answers, never a panic.
    pub fn is_correct(&self, index: usize) -> bool {
        self.candidates
            .get(index)
            .map_or(false, |candidate| *candidate == self.answer)
    }
}

//=== QuestionDeck ========================================================

/// Source of quiz content, backed by the static catalog.
#[derive(Debug, Clone)]
pub struct QuestionDeck {
    entries: &'static [ServiceEntry],
}

impl QuestionDeck {
    /// Creates a deck over the built-in service catalog.
    pub fn new() -> Self {
        Self { entries: &CATALOG }
    }

    /// Derives a fresh question.
    ///
    /// Selects the correct answer uniformly at random, picks 3 distinct
    /// decoys without replacement, and shuffles the candidate list.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> Question {
        let entry = &self.entries[rng.gen_range(0..self.entries.len())];

        let pool: Vec<&ServiceEntry> = self
            .entries
            .iter()
            .filter(|candidate| candidate.name != entry.name)
            .collect();
        let decoys: Vec<&ServiceEntry> =
            pool.choose_multiple(rng, DECOY_COUNT).copied().collect();

        let mut candidates = [
            entry.name,
            decoys[0].name,
            decoys[1].name,
            decoys[2].name,
        ];
        candidates.shuffle(rng);

        Question {
            prompt: format!("What AWS service is: {}?", entry.description),
            answer: entry.name,
            candidates,
        }
    }
}

impl Default for QuestionDeck {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn question_has_four_candidates() {
        let deck = QuestionDeck::new();
        let question = deck.draw(&mut rng(7));
        assert_eq!(question.candidates().len(), CANDIDATE_COUNT);
    }

    /// The candidate invariants must hold for every draw, not just one
    /// lucky seed.
    #[test]
    fn candidates_contain_answer_exactly_once_across_many_draws() {
        let deck = QuestionDeck::new();

        for seed in 0..200 {
            let question = deck.draw(&mut rng(seed));
            let hits = question
                .candidates()
                .iter()
                .filter(|c| **c == question.answer())
                .count();
            assert_eq!(hits, 1, "seed {}: answer must appear exactly once", seed);
        }
    }

    #[test]
    fn decoys_are_distinct_and_differ_from_answer() {
        let deck = QuestionDeck::new();

        for seed in 0..200 {
            let question = deck.draw(&mut rng(seed));
            let candidates = question.candidates();

            for i in 0..candidates.len() {
                for j in (i + 1)..candidates.len() {
                    assert_ne!(
                        candidates[i], candidates[j],
                        "seed {}: duplicate candidate", seed
                    );
                }
            }
        }
    }

    #[test]
    fn prompt_embeds_the_answers_description() {
        let deck = QuestionDeck::new();
        let question = deck.draw(&mut rng(3));

        let entry = CATALOG
            .iter()
            .find(|e| e.name == question.answer())
            .expect("answer must come from the catalog");
        assert!(question.prompt().contains(entry.description));
        assert!(question.prompt().starts_with("What AWS service is:"));
    }

    #[test]
    fn is_correct_matches_answer_position_only() {
        let deck = QuestionDeck::new();
        let question = deck.draw(&mut rng(11));

        for (index, candidate) in question.candidates().iter().enumerate() {
            assert_eq!(question.is_correct(index), *candidate == question.answer());
        }
    }

    #[test]
    fn is_correct_rejects_out_of_range_index() {
        let deck = QuestionDeck::new();
        let question = deck.draw(&mut rng(5));

        assert!(!question.is_correct(CANDIDATE_COUNT));
        assert!(!question.is_correct(usize::MAX));
    }

    #[test]
    fn same_seed_reproduces_the_same_question() {
        let deck = QuestionDeck::new();
        assert_eq!(deck.draw(&mut rng(42)), deck.draw(&mut rng(42)));
    }

    #[test]
    fn different_seeds_eventually_vary_candidate_order() {
        let deck = QuestionDeck::new();
        let first = deck.draw(&mut rng(0));

        let varied = (1..50).any(|seed| deck.draw(&mut rng(seed)) != first);
        assert!(varied, "50 seeds should not all produce one question");
    }

    #[test]
    fn all_candidates_come_from_the_catalog() {
        let deck = QuestionDeck::new();
        let question = deck.draw(&mut rng(19));

        for candidate in question.candidates() {
            assert!(CATALOG.iter().any(|e| e.name == *candidate));
        }
    }
}
