//=========================================================================
// Frame Composer
//=========================================================================
//
// Translates the match session into a declarative frame description.
//
// Architecture:
//   Session ──compose()──► FramePacket (clear color + draw commands)
//                                │
//                                ▼
//                     RenderBackend::present()
//
// The composer never touches a surface: rasterization, fonts and sprite
// blitting live behind the platform bridge's `RenderBackend` contract.
// Commands use the 800×600 logical coordinate space with a top-left
// origin; text positions give the anchor point per the command's
// alignment.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::assets::SpriteId;
use crate::core::session::animation::FIGHTER_Y;
use crate::core::session::{Phase, Session};

//=== Logical Surface =====================================================

/// Logical surface width in pixels.
pub const SCREEN_WIDTH: f32 = 800.0;

/// Logical surface height in pixels.
pub const SCREEN_HEIGHT: f32 = 600.0;

const CENTER_X: f32 = SCREEN_WIDTH / 2.0;

//--- Screen Layout -------------------------------------------------------

const HEALTH_BAR_X: f32 = 50.0;
const HEALTH_BAR_Y: f32 = 50.0;
const HEALTH_BAR_HEIGHT: f32 = 20.0;
const HEALTH_POINT_WIDTH: f32 = 50.0;

const SCORE_Y: f32 = 20.0;
const PROMPT_Y: f32 = 150.0;
const CANDIDATE_BASE_Y: f32 = 200.0;
const CANDIDATE_SPACING: f32 = 40.0;

const TITLE_Y: f32 = 100.0;
const START_HINT_Y: f32 = 300.0;

const RESULT_Y: f32 = 200.0;
const FINAL_SCORE_Y: f32 = 300.0;
const RESTART_HINT_Y: f32 = 400.0;

const VOLLEY_RADIUS: f32 = 5.0;

//=== Color ===============================================================

/// Opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Arena background (dark slate blue).
    pub const BACKGROUND: Self = Self::new(35, 47, 62);

    /// Highlight color for titles and volleys (orange).
    pub const ACCENT: Self = Self::new(255, 153, 0);

    /// Default text color.
    pub const TEXT: Self = Self::new(255, 255, 255);

    /// Player health bar and fallback sprite (green).
    pub const PLAYER: Self = Self::new(0, 255, 0);

    /// Enemy health bar and fallback sprite (red).
    pub const ENEMY: Self = Self::new(255, 0, 0);
}

//=== Text Attributes =====================================================

/// Text size class. Reference sizes: body 24 pt, heading 32 pt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextStyle {
    Body,
    Heading,
}

/// Horizontal anchoring of a text command's `x` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Align {
    /// `x` is the left edge of the rendered text.
    Left,

    /// `x` is the horizontal center of the rendered text.
    Center,
}

//=== DrawCommand =========================================================

/// One element of a composed frame, in draw order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Axis-aligned filled rectangle.
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },

    /// Filled circle centered at (`x`, `y`).
    Disc {
        x: f32,
        y: f32,
        radius: f32,
        color: Color,
    },

    /// Sprite blit with its top-left corner at (`x`, `y`).
    Sprite { id: SpriteId, x: f32, y: f32 },

    /// Text run anchored at (`x`, `y`) per `align`.
    Text {
        text: String,
        style: TextStyle,
        color: Color,
        x: f32,
        y: f32,
        align: Align,
    },
}

//=== FramePacket =========================================================

/// A complete frame description: clear color plus ordered draw commands.
///
/// Packets are self-contained values; the logic thread publishes one per
/// tick and the platform presents the most recent one it has.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePacket {
    pub clear: Color,
    pub commands: Vec<DrawCommand>,
}

impl FramePacket {
    fn new(clear: Color) -> Self {
        Self {
            clear,
            commands: Vec::new(),
        }
    }

    fn centered_text(&mut self, text: String, style: TextStyle, color: Color, y: f32) {
        self.commands.push(DrawCommand::Text {
            text,
            style,
            color,
            x: CENTER_X,
            y,
            align: Align::Center,
        });
    }
}

//=== Composition =========================================================

/// Composes the frame for the session's current phase.
///
/// The match is exhaustive over [`Phase`]; adding a phase without a
/// visual representation is a compile error.
pub fn compose(session: &Session) -> FramePacket {
    match session.phase() {
        Phase::Start => start_screen(),
        Phase::Intro | Phase::PlayerShoot | Phase::EnemyShoot => battle_screen(session, false),
        Phase::Question => battle_screen(session, true),
        Phase::Win => end_screen(session, true),
        Phase::Lose => end_screen(session, false),
    }
}

//--- Screens -------------------------------------------------------------

fn start_screen() -> FramePacket {
    let mut frame = FramePacket::new(Color::BACKGROUND);
    frame.centered_text(
        "Cloud Clash".to_string(),
        TextStyle::Heading,
        Color::ACCENT,
        TITLE_Y,
    );
    frame.centered_text(
        "Press SPACE to start".to_string(),
        TextStyle::Body,
        Color::TEXT,
        START_HINT_Y,
    );
    frame
}

fn battle_screen(session: &Session, show_question: bool) -> FramePacket {
    let mut frame = FramePacket::new(Color::BACKGROUND);

    // Health bars: one fixed-width block per remaining point. The enemy
    // bar is right-aligned and grows leftward.
    let player_width = f32::from(session.player_health()) * HEALTH_POINT_WIDTH;
    let enemy_width = f32::from(session.enemy_health()) * HEALTH_POINT_WIDTH;

    frame.commands.push(DrawCommand::Rect {
        x: HEALTH_BAR_X,
        y: HEALTH_BAR_Y,
        width: player_width,
        height: HEALTH_BAR_HEIGHT,
        color: Color::PLAYER,
    });
    frame.commands.push(DrawCommand::Rect {
        x: SCREEN_WIDTH - HEALTH_BAR_X - enemy_width,
        y: HEALTH_BAR_Y,
        width: enemy_width,
        height: HEALTH_BAR_HEIGHT,
        color: Color::ENEMY,
    });

    frame.centered_text(
        format!("Score: {}", session.score()),
        TextStyle::Body,
        Color::TEXT,
        SCORE_Y,
    );

    frame.commands.push(DrawCommand::Sprite {
        id: SpriteId::Player,
        x: session.player_x(),
        y: FIGHTER_Y,
    });
    frame.commands.push(DrawCommand::Sprite {
        id: SpriteId::Enemy,
        x: session.enemy_x(),
        y: FIGHTER_Y,
    });

    if let Some(volley) = session.volley() {
        frame.commands.push(DrawCommand::Disc {
            x: volley.x(),
            y: volley.y(),
            radius: VOLLEY_RADIUS,
            color: Color::ACCENT,
        });
    }

    if show_question {
        let question = session.question();
        frame.centered_text(
            question.prompt().to_string(),
            TextStyle::Body,
            Color::TEXT,
            PROMPT_Y,
        );

        for (index, candidate) in question.candidates().iter().enumerate() {
            frame.centered_text(
                format!("{}. {}", index + 1, candidate),
                TextStyle::Body,
                Color::TEXT,
                CANDIDATE_BASE_Y + index as f32 * CANDIDATE_SPACING,
            );
        }
    }

    frame
}

fn end_screen(session: &Session, won: bool) -> FramePacket {
    let mut frame = FramePacket::new(Color::BACKGROUND);

    let (message, color) = if won {
        ("You Won!", Color::PLAYER)
    } else {
        ("You Lost!", Color::ENEMY)
    };
    frame.centered_text(message.to_string(), TextStyle::Heading, color, RESULT_Y);

    frame.centered_text(
        format!("Final Score: {}", session.score()),
        TextStyle::Body,
        Color::TEXT,
        FINAL_SCORE_Y,
    );
    frame.centered_text(
        "Press SPACE to play again".to_string(),
        TextStyle::Body,
        Color::TEXT,
        RESTART_HINT_Y,
    );

    frame
}

//=========================================================================
// Unit Tests
//=========================================================================
