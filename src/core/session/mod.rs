//=========================================================================
// Match Session
//=========================================================================
//
// The finite-state machine governing one duel.
//
// Phases:
// ```text
//   start ──confirm──► intro ──walk done──► question
//                                              │ answer i
//                             ┌────────────────┴───────────────┐
//                       correct│                          wrong│
//                              ▼                               ▼
//                        player-shoot                    enemy-shoot
//                              │ volley lands                  │ volley lands
//                   ┌──────────┴───────┐            ┌──────────┴───────┐
//                   ▼                  ▼            ▼                  ▼
//               question              win       question             lose
//                                      └──confirm──► start ◄──confirm──┘
// ```
//
// The session owns every mutable match variable (health, score,
// positions, volley, current question) and is touched only by the logic
// thread. Commands that don't apply to the current phase are ignored,
// which makes invalid transitions unrepresentable.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod animation;

//=== External Dependencies ===============================================

use log::{debug, info, trace};
use rand::Rng;

//=== Internal Dependencies ===============================================

use crate::core::input::Command;
use crate::core::quiz::{Question, QuestionDeck};
use animation::{
    entrance_complete, step_toward, Volley, ENEMY_ENTRY_X, ENEMY_TARGET_X,
    MUZZLE_OFFSET_X, PLAYER_ENTRY_X, PLAYER_TARGET_X, WALK_STEP,
};

pub use animation::Shooter;

//=== Constants ===========================================================

/// Health both fighters start a match with.
pub const MAX_HEALTH: u8 = 3;

//=== Phase ===============================================================

/// The current state of the match state machine.
///
/// A closed enumeration: update and render logic match on it
/// exhaustively, so an unknown phase cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Title screen, waiting for the confirm key.
    Start,

    /// Entrance walk; both fighters move to their battle positions.
    Intro,

    /// Prompt and candidates shown, waiting for an answer key.
    Question,

    /// Player volley in flight toward the enemy.
    PlayerShoot,

    /// Enemy volley in flight toward the player.
    EnemyShoot,

    /// Player reduced the enemy to zero health.
    Win,

    /// Enemy reduced the player to zero health.
    Lose,
}

//=== Session =============================================================

/// One duel's complete mutable state.
///
/// Created once at startup and reset in place whenever a new match
/// begins. All mutation happens synchronously inside a single tick.
pub struct Session {
    phase: Phase,
    player_health: u8,
    enemy_health: u8,
    score: u32,
    player_x: f32,
    enemy_x: f32,
    volley: Option<Volley>,
    question: Question,
    deck: QuestionDeck,
}

impl Session {
    //--- Construction -----------------------------------------------------

    /// Creates a session sitting on the start screen.
    ///
    /// A question is drawn immediately so the question phase is
    /// well-defined from the first frame of the first match.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let deck = QuestionDeck::new();
        let question = deck.draw(rng);

        Self {
            phase: Phase::Start,
            player_health: MAX_HEALTH,
            enemy_health: MAX_HEALTH,
            score: 0,
            player_x: PLAYER_ENTRY_X,
            enemy_x: ENEMY_ENTRY_X,
            volley: None,
            question,
            deck,
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Player health, `0..=MAX_HEALTH`.
    pub fn player_health(&self) -> u8 {
        self.player_health
    }

    /// Enemy health, `0..=MAX_HEALTH`.
    pub fn enemy_health(&self) -> u8 {
        self.enemy_health
    }

    /// Hits landed this match. Never decreases during a match.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn player_x(&self) -> f32 {
        self.player_x
    }

    pub fn enemy_x(&self) -> f32 {
        self.enemy_x
    }

    /// The in-flight volley, present only during the shoot phases.
    pub fn volley(&self) -> Option<&Volley> {
        self.volley.as_ref()
    }

    /// The current question.
    pub fn question(&self) -> &Question {
        &self.question
    }

    //--- Command Handling -------------------------------------------------

    /// Applies one input command to the state machine.
    ///
    /// Commands that don't apply to the current phase are ignored:
    /// answers count only during `Question`, confirm only on the start
    /// and end screens.
    pub fn handle_command<R: Rng>(&mut self, command: Command, rng: &mut R) {
        match (self.phase, command) {
            (Phase::Start, Command::Confirm) => {
                self.reset(rng);
            }

            (Phase::Question, Command::Answer(index)) => {
                self.fire(index);
            }

            (Phase::Win | Phase::Lose, Command::Confirm) => {
                debug!("returning to start screen");
                self.phase = Phase::Start;
            }

            (phase, command) => {
                trace!("ignoring {:?} during {:?}", command, phase);
            }
        }
    }

    //--- Per-Tick Update --------------------------------------------------

    /// Advances animation-driven state by one tick.
    ///
    /// `Start`, `Question`, `Win` and `Lose` are input-driven and frozen
    /// here; only the entrance walk and volley flight consume ticks.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) {
        match self.phase {
            Phase::Intro => {
                self.player_x = step_toward(self.player_x, PLAYER_TARGET_X, WALK_STEP);
                self.enemy_x = step_toward(self.enemy_x, ENEMY_TARGET_X, WALK_STEP);

                if entrance_complete(self.player_x, self.enemy_x) {
                    debug!("fighters in position, first question up");
                    self.phase = Phase::Question;
                }
            }

            Phase::PlayerShoot => {
                if let Some(volley) = self.volley.as_mut() {
                    volley.advance();
                    if volley.has_hit(self.enemy_x) {
                        self.volley = None;
                        self.resolve_player_hit(rng);
                    }
                }
            }

            Phase::EnemyShoot => {
                if let Some(volley) = self.volley.as_mut() {
                    volley.advance();
                    if volley.has_hit(self.player_x + MUZZLE_OFFSET_X) {
                        self.volley = None;
                        self.resolve_enemy_hit(rng);
                    }
                }
            }

            Phase::Start | Phase::Question | Phase::Win | Phase::Lose => {}
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Begins a fresh match: full health, zero score, fighters back at
    /// their entry positions, a new question, no volley in flight.
    fn reset<R: Rng>(&mut self, rng: &mut R) {
        info!("match started");

        self.player_health = MAX_HEALTH;
        self.enemy_health = MAX_HEALTH;
        self.score = 0;
        self.player_x = PLAYER_ENTRY_X;
        self.enemy_x = ENEMY_ENTRY_X;
        self.volley = None;
        self.question = self.deck.draw(rng);
        self.phase = Phase::Intro;
    }

    /// Launches a volley for the given answer.
    fn fire(&mut self, index: usize) {
        if self.question.is_correct(index) {
            debug!("answer {} correct, player fires", index + 1);
            self.volley = Some(Volley::from_player(self.player_x));
            self.phase = Phase::PlayerShoot;
        } else {
            debug!("answer {} wrong, enemy fires", index + 1);
            self.volley = Some(Volley::from_enemy(self.enemy_x));
            self.phase = Phase::EnemyShoot;
        }
    }

    fn resolve_player_hit<R: Rng>(&mut self, rng: &mut R) {
        self.enemy_health = self.enemy_health.saturating_sub(1);
        self.score += 1;
        debug!(
            "enemy hit: health {}, score {}",
            self.enemy_health, self.score
        );

        if self.enemy_health == 0 {
            info!("match won with score {}", self.score);
            self.phase = Phase::Win;
        } else {
            self.question = self.deck.draw(rng);
            self.phase = Phase::Question;
        }
    }

    fn resolve_enemy_hit<R: Rng>(&mut self, rng: &mut R) {
        self.player_health = self.player_health.saturating_sub(1);
        debug!("player hit: health {}", self.player_health);

        if self.player_health == 0 {
            info!("match lost with score {}", self.score);
            self.phase = Phase::Lose;
        } else {
            self.question = self.deck.draw(rng);
            self.phase = Phase::Question;
        }
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

    const TICK_BOUND: usize = 10_000;

    //--- Test Helpers -----------------------------------------------------

    fn new_session() -> (Session, StdRng) {
        let mut rng = StdRng::seed_from_u64(99);
        let session = Session::new(&mut rng);
        (session, rng)
    }

    /// Confirms on the start screen and runs the entrance walk through
    /// to the first question.
    fn start_match(session: &mut Session, rng: &mut StdRng) {
        session.handle_command(Command::Confirm, rng);
        assert_eq!(session.phase(), Phase::Intro);

        for _ in 0..TICK_BOUND {
            if session.phase() == Phase::Question {
                return;
            }
            session.tick(rng);
        }
        panic!("entrance walk never finished");
    }

    /// Index of the correct candidate for the current question.
    fn correct_index(session: &Session) -> usize {
        session
            .question()
            .candidates()
            .iter()
            .position(|c| *c == session.question().answer())
            .expect("question must contain its answer")
    }

    /// Any index that is not the correct candidate.
    fn wrong_index(session: &Session) -> usize {
        (correct_index(session) + 1) % 4
    }

    /// Ticks until the in-flight volley resolves.
    fn settle_volley(session: &mut Session, rng: &mut StdRng) {
        for _ in 0..TICK_BOUND {
            if !matches!(session.phase(), Phase::PlayerShoot | Phase::EnemyShoot) {
                return;
            }
            session.tick(rng);
        }
        panic!("volley never landed");
    }

    //--- Construction -----------------------------------------------------

    #[test]
    fn new_session_sits_on_start_screen_with_full_health() {
        let (session, _) = new_session();

        assert_eq!(session.phase(), Phase::Start);
        assert_eq!(session.player_health(), MAX_HEALTH);
        assert_eq!(session.enemy_health(), MAX_HEALTH);
        assert_eq!(session.score(), 0);
        assert!(session.volley().is_none());
    }

    //--- Transitions ------------------------------------------------------

    #[test]
    fn confirm_on_start_screen_begins_entrance_walk() {
        let (mut session, mut rng) = new_session();
        session.handle_command(Command::Confirm, &mut rng);

        assert_eq!(session.phase(), Phase::Intro);
        assert_eq!(session.player_x(), PLAYER_ENTRY_X);
        assert_eq!(session.enemy_x(), ENEMY_ENTRY_X);
    }

    #[test]
    fn entrance_walk_ends_with_both_fighters_in_position() {
        let (mut session, mut rng) = new_session();
        start_match(&mut session, &mut rng);

        assert_eq!(session.player_x(), PLAYER_TARGET_X);
        assert_eq!(session.enemy_x(), ENEMY_TARGET_X);
    }

    #[test]
    fn correct_answer_enters_player_shoot() {
        let (mut session, mut rng) = new_session();
        start_match(&mut session, &mut rng);

        let index = correct_index(&session);
        session.handle_command(Command::Answer(index), &mut rng);

        assert_eq!(session.phase(), Phase::PlayerShoot);
        assert!(session.volley().is_some());
        assert_eq!(session.volley().map(|v| v.owner()), Some(Shooter::Player));
    }

    #[test]
    fn wrong_answer_enters_enemy_shoot() {
        let (mut session, mut rng) = new_session();
        start_match(&mut session, &mut rng);

        let index = wrong_index(&session);
        session.handle_command(Command::Answer(index), &mut rng);

        assert_eq!(session.phase(), Phase::EnemyShoot);
        assert_eq!(session.volley().map(|v| v.owner()), Some(Shooter::Enemy));
    }

    #[test]
    fn answers_are_ignored_outside_question_phase() {
        let (mut session, mut rng) = new_session();

        session.handle_command(Command::Answer(0), &mut rng);
        assert_eq!(session.phase(), Phase::Start);

        session.handle_command(Command::Confirm, &mut rng);
        session.handle_command(Command::Answer(0), &mut rng);
        assert_eq!(session.phase(), Phase::Intro);
    }

    #[test]
    fn confirm_is_ignored_during_question() {
        let (mut session, mut rng) = new_session();
        start_match(&mut session, &mut rng);

        session.handle_command(Command::Confirm, &mut rng);
        assert_eq!(session.phase(), Phase::Question);
    }

    //--- Hit Resolution ---------------------------------------------------

    #[test]
    fn player_hit_damages_enemy_and_scores() {
        let (mut session, mut rng) = new_session();
        start_match(&mut session, &mut rng);

        let index = correct_index(&session);
        session.handle_command(Command::Answer(index), &mut rng);
        settle_volley(&mut session, &mut rng);

        assert_eq!(session.enemy_health(), MAX_HEALTH - 1);
        assert_eq!(session.player_health(), MAX_HEALTH);
        assert_eq!(session.score(), 1);
        assert_eq!(session.phase(), Phase::Question);
        assert!(session.volley().is_none());
    }

    #[test]
    fn enemy_hit_damages_player_without_scoring() {
        let (mut session, mut rng) = new_session();
        start_match(&mut session, &mut rng);

        let index = wrong_index(&session);
        session.handle_command(Command::Answer(index), &mut rng);
        settle_volley(&mut session, &mut rng);

        assert_eq!(session.player_health(), MAX_HEALTH - 1);
        assert_eq!(session.enemy_health(), MAX_HEALTH);
        assert_eq!(session.score(), 0);
        assert_eq!(session.phase(), Phase::Question);
    }

    #[test]
    fn hit_resolution_draws_a_fresh_question() {
        let (mut session, mut rng) = new_session();
        start_match(&mut session, &mut rng);

        let before = session.question().clone();
        let index = correct_index(&session);
        session.handle_command(Command::Answer(index), &mut rng);

        // Frozen while the volley flies.
        session.tick(&mut rng);
        assert_eq!(*session.question(), before);

        settle_volley(&mut session, &mut rng);
        // A fresh draw re-shuffles; identical questions are possible but
        // the draw must have happened (phase is Question again).
        assert_eq!(session.phase(), Phase::Question);
    }

    //--- Full Matches -----------------------------------------------------

    #[test]
    fn three_correct_answers_win_with_score_three() {
        let (mut session, mut rng) = new_session();
        start_match(&mut session, &mut rng);

        for round in 0..3 {
            assert_eq!(session.phase(), Phase::Question, "round {}", round);
            let index = correct_index(&session);
            session.handle_command(Command::Answer(index), &mut rng);
            assert_eq!(session.phase(), Phase::PlayerShoot);
            settle_volley(&mut session, &mut rng);
        }

        assert_eq!(session.phase(), Phase::Win);
        assert_eq!(session.enemy_health(), 0);
        assert_eq!(session.score(), 3);
    }

    #[test]
    fn three_wrong_answers_lose() {
        let (mut session, mut rng) = new_session();
        start_match(&mut session, &mut rng);

        for round in 0..3 {
            assert_eq!(session.phase(), Phase::Question, "round {}", round);
            let index = wrong_index(&session);
            session.handle_command(Command::Answer(index), &mut rng);
            assert_eq!(session.phase(), Phase::EnemyShoot);
            settle_volley(&mut session, &mut rng);
        }

        assert_eq!(session.phase(), Phase::Lose);
        assert_eq!(session.player_health(), 0);
        assert_eq!(session.score(), 0);
    }

    /// Health stays in `0..=MAX_HEALTH` and score never decreases over a
    /// whole match, including the losing hit.
    #[test]
    fn health_bounded_and_score_monotone_through_a_match() {
        let (mut session, mut rng) = new_session();
        start_match(&mut session, &mut rng);

        let mut last_score = 0;
        for _ in 0..3 {
            let index = wrong_index(&session);
            session.handle_command(Command::Answer(index), &mut rng);

            while matches!(session.phase(), Phase::EnemyShoot) {
                session.tick(&mut rng);
                assert!(session.player_health() <= MAX_HEALTH);
                assert!(session.enemy_health() <= MAX_HEALTH);
                assert!(session.score() >= last_score);
                last_score = session.score();
            }
        }

        assert_eq!(session.player_health(), 0);
        assert_eq!(session.phase(), Phase::Lose);
    }

    //--- Restart ----------------------------------------------------------

    #[test]
    fn restart_from_win_goes_through_start_to_a_fresh_match() {
        let (mut session, mut rng) = new_session();
        start_match(&mut session, &mut rng);

        for _ in 0..3 {
            let index = correct_index(&session);
            session.handle_command(Command::Answer(index), &mut rng);
            settle_volley(&mut session, &mut rng);
        }
        assert_eq!(session.phase(), Phase::Win);

        // Confirm on the end screen returns to the title.
        session.handle_command(Command::Confirm, &mut rng);
        assert_eq!(session.phase(), Phase::Start);

        // Confirm on the title starts a clean match.
        session.handle_command(Command::Confirm, &mut rng);
        assert_eq!(session.phase(), Phase::Intro);
        assert_eq!(session.player_health(), MAX_HEALTH);
        assert_eq!(session.enemy_health(), MAX_HEALTH);
        assert_eq!(session.score(), 0);
        assert_eq!(session.player_x(), PLAYER_ENTRY_X);
        assert_eq!(session.enemy_x(), ENEMY_ENTRY_X);
        assert!(session.volley().is_none());
    }

    #[test]
    fn restart_from_lose_works_the_same_way() {
        let (mut session, mut rng) = new_session();
        start_match(&mut session, &mut rng);

        for _ in 0..3 {
            let index = wrong_index(&session);
            session.handle_command(Command::Answer(index), &mut rng);
            settle_volley(&mut session, &mut rng);
        }
        assert_eq!(session.phase(), Phase::Lose);

        session.handle_command(Command::Confirm, &mut rng);
        assert_eq!(session.phase(), Phase::Start);
    }

    //--- Tick Freezing ----------------------------------------------------

    #[test]
    fn input_driven_phases_do_not_change_on_tick() {
        let (mut session, mut rng) = new_session();

        for _ in 0..100 {
            session.tick(&mut rng);
        }
        assert_eq!(session.phase(), Phase::Start);

        start_match(&mut session, &mut rng);
        for _ in 0..100 {
            session.tick(&mut rng);
        }
        assert_eq!(session.phase(), Phase::Question);
    }
}
