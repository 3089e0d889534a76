//=========================================================================
// Animator
//=========================================================================
//
// Per-tick movement for the entrance walk and in-flight volleys.
//
// All motion is expressed as px/sec speeds applied as explicit per-tick
// deltas at the fixed simulation rate (`TICK_RATE`). Changing the tick
// rate rescales the deltas automatically and preserves wall-clock speed.
//
// Field layout (800×600 logical space):
// ```text
//   x: -100        100                  600        900
//       │ player ──►│                   │◄── enemy │
//      (entry)   (target)            (target)   (entry)
//                     fighters stand at y = 400
//                     volleys fly   at y = 450
// ```
//
//=========================================================================

//=== Timing ==============================================================

/// Simulation ticks per second. All per-tick deltas derive from this.
pub const TICK_RATE: f32 = 60.0;

/// Entrance walk speed in px/sec (5 px per tick at 60 Hz).
pub const WALK_SPEED: f32 = 300.0;

/// Volley flight speed in px/sec (8 px per tick at 60 Hz).
pub const VOLLEY_SPEED: f32 = 480.0;

pub(crate) const WALK_STEP: f32 = WALK_SPEED / TICK_RATE;
pub(crate) const VOLLEY_STEP: f32 = VOLLEY_SPEED / TICK_RATE;

//=== Field Layout ========================================================

/// Player entry position (off-screen left).
pub const PLAYER_ENTRY_X: f32 = -100.0;

/// Player battle position.
pub const PLAYER_TARGET_X: f32 = 100.0;

/// Enemy entry position (off-screen right).
pub const ENEMY_ENTRY_X: f32 = 900.0;

/// Enemy battle position.
pub const ENEMY_TARGET_X: f32 = 600.0;

/// Vertical position of both fighters.
pub const FIGHTER_Y: f32 = 400.0;

/// Horizontal offset from a fighter's left edge to its muzzle/hitbox.
pub const MUZZLE_OFFSET_X: f32 = 50.0;

/// Vertical position of volleys in flight.
pub const VOLLEY_Y: f32 = FIGHTER_Y + 50.0;

//=== Entrance Walk =======================================================

/// Moves `position` one step toward `target`, clamping at the target.
///
/// Works in either direction; a position already at the target stays
/// put. Clamping makes the entrance termination condition robust even
/// when step size does not divide the remaining distance evenly.
pub(crate) fn step_toward(position: f32, target: f32, step: f32) -> f32 {
    if position < target {
        (position + step).min(target)
    } else if position > target {
        (position - step).max(target)
    } else {
        position
    }
}

/// Whether both fighters have reached (or passed) their battle positions.
///
/// The two distances need not agree: whichever fighter arrives first
/// waits, clamped, until the other one does.
pub(crate) fn entrance_complete(player_x: f32, enemy_x: f32) -> bool {
    player_x >= PLAYER_TARGET_X && enemy_x <= ENEMY_TARGET_X
}

//=== Volley ==============================================================

/// Which fighter fired the in-flight volley.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shooter {
    Player,
    Enemy,
}

/// The animated projectile between the two fighters.
///
/// Player volleys fly rightward from the player's muzzle toward the
/// enemy; enemy volleys fly leftward toward the player's hitbox. The
/// tick counter records flight time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volley {
    owner: Shooter,
    x: f32,
    y: f32,
    ticks: u32,
}

impl Volley {
    //--- Construction -----------------------------------------------------

    /// A volley leaving the player's muzzle.
    pub fn from_player(player_x: f32) -> Self {
        Self {
            owner: Shooter::Player,
            x: player_x + MUZZLE_OFFSET_X,
            y: VOLLEY_Y,
            ticks: 0,
        }
    }

    /// A volley leaving the enemy's muzzle.
    pub fn from_enemy(enemy_x: f32) -> Self {
        Self {
            owner: Shooter::Enemy,
            x: enemy_x,
            y: VOLLEY_Y,
            ticks: 0,
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn owner(&self) -> Shooter {
        self.owner
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// Ticks spent in flight so far.
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    //--- Flight -----------------------------------------------------------

    /// Advances the volley one tick along its flight direction.
    pub(crate) fn advance(&mut self) {
        self.ticks += 1;
        match self.owner {
            Shooter::Player => self.x += VOLLEY_STEP,
            Shooter::Enemy => self.x -= VOLLEY_STEP,
        }
    }

    /// Whether the volley has reached the opposing hitbox at `target_x`.
    pub(crate) fn has_hit(&self, target_x: f32) -> bool {
        match self.owner {
            Shooter::Player => self.x >= target_x,
            Shooter::Enemy => self.x <= target_x,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //--- step_toward ------------------------------------------------------

    #[test]
    fn step_toward_moves_right_and_clamps() {
        let mut x = 95.0;
        x = step_toward(x, 100.0, WALK_STEP);
        assert_eq!(x, 100.0);

        // Already at target: stays put.
        assert_eq!(step_toward(x, 100.0, WALK_STEP), 100.0);
    }

    #[test]
    fn step_toward_moves_left_and_clamps() {
        let mut x = 603.0;
        x = step_toward(x, 600.0, WALK_STEP);
        assert_eq!(x, 600.0);
    }

    #[test]
    fn step_toward_never_overshoots() {
        let mut x = PLAYER_ENTRY_X;
        for _ in 0..1_000 {
            x = step_toward(x, PLAYER_TARGET_X, WALK_STEP);
            assert!(x <= PLAYER_TARGET_X);
        }
        assert_eq!(x, PLAYER_TARGET_X);
    }

    //--- entrance ---------------------------------------------------------

    #[test]
    fn entrance_requires_both_fighters_in_position() {
        assert!(!entrance_complete(PLAYER_ENTRY_X, ENEMY_TARGET_X));
        assert!(!entrance_complete(PLAYER_TARGET_X, ENEMY_ENTRY_X));
        assert!(entrance_complete(PLAYER_TARGET_X, ENEMY_TARGET_X));
    }

    /// Asymmetric distances must still terminate: one fighter arriving
    /// early waits at its clamped target for the other.
    #[test]
    fn entrance_terminates_with_asymmetric_distances() {
        let mut player_x = 90.0; // 2 ticks out
        let mut enemy_x = ENEMY_ENTRY_X; // 60 ticks out
        let mut ticks = 0;

        while !entrance_complete(player_x, enemy_x) {
            player_x = step_toward(player_x, PLAYER_TARGET_X, WALK_STEP);
            enemy_x = step_toward(enemy_x, ENEMY_TARGET_X, WALK_STEP);
            ticks += 1;
            assert!(ticks < 10_000, "entrance must terminate");
        }

        assert_eq!(player_x, PLAYER_TARGET_X);
        assert_eq!(enemy_x, ENEMY_TARGET_X);
        assert_eq!(ticks, 60);
    }

    //--- volley -----------------------------------------------------------

    #[test]
    fn player_volley_starts_at_muzzle_and_flies_right() {
        let mut volley = Volley::from_player(PLAYER_TARGET_X);
        assert_eq!(volley.x(), PLAYER_TARGET_X + MUZZLE_OFFSET_X);
        assert_eq!(volley.y(), VOLLEY_Y);

        volley.advance();
        assert_eq!(volley.x(), PLAYER_TARGET_X + MUZZLE_OFFSET_X + VOLLEY_STEP);
        assert_eq!(volley.ticks(), 1);
    }

    #[test]
    fn enemy_volley_starts_at_enemy_edge_and_flies_left() {
        let mut volley = Volley::from_enemy(ENEMY_TARGET_X);
        assert_eq!(volley.x(), ENEMY_TARGET_X);

        volley.advance();
        assert_eq!(volley.x(), ENEMY_TARGET_X - VOLLEY_STEP);
    }

    #[test]
    fn player_volley_hits_after_expected_flight_time() {
        let mut volley = Volley::from_player(PLAYER_TARGET_X);
        let mut ticks = 0;

        while !volley.has_hit(ENEMY_TARGET_X) {
            volley.advance();
            ticks += 1;
            assert!(ticks < 10_000, "volley must land");
        }

        // 450 px at 8 px/tick: 57 ticks (the last step passes the hitbox).
        assert_eq!(ticks, 57);
    }

    #[test]
    fn enemy_volley_hits_player_hitbox() {
        let mut volley = Volley::from_enemy(ENEMY_TARGET_X);

        while !volley.has_hit(PLAYER_TARGET_X + MUZZLE_OFFSET_X) {
            volley.advance();
        }

        assert!(volley.x() <= PLAYER_TARGET_X + MUZZLE_OFFSET_X);
        assert_eq!(volley.owner(), Shooter::Enemy);
    }

    #[test]
    fn per_tick_steps_match_reference_magnitudes() {
        // 300 px/s and 480 px/s at 60 Hz are the reference 5 and 8 px
        // per tick.
        assert_eq!(WALK_STEP, 5.0);
        assert_eq!(VOLLEY_STEP, 8.0);
    }
}
