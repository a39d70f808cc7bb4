//! Game session - the state machine driving a single play session
//!
//! Ties together board, pieces, and the generator. Owns the phase machine
//! (Idle, Running, Paused, GameOver), gravity timing, scoring, and the
//! level/speed progression.

use crate::core::{Board, Piece, PieceGen};
use crate::types::{
    GameAction, Phase, BASE_DROP_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_SCORE, MIN_DROP_MS,
};

/// Level derived from total cleared lines: one step every ten lines,
/// starting at level 1.
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level: shrinks linearly, floored at a minimum.
pub fn drop_interval_for_level(level: u32) -> u32 {
    BASE_DROP_MS
        .saturating_sub(level.saturating_sub(1) * DROP_STEP_MS)
        .max(MIN_DROP_MS)
}

/// Complete game session state
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    active: Option<Piece>,
    next: Option<Piece>,
    gen: PieceGen,
    phase: Phase,
    score: u32,
    level: u32,
    lines: u32,
    drop_interval_ms: u32,
    drop_timer_ms: u32,
}

impl GameSession {
    /// Create a fresh Idle session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            next: None,
            gen: PieceGen::new(seed),
            phase: Phase::Idle,
            score: 0,
            level: level_for_lines(0),
            lines: 0,
            drop_interval_ms: drop_interval_for_level(level_for_lines(0)),
            drop_timer_ms: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access, used by scenario tests to set up positions.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    /// The precomputed piece that will spawn after the active one places.
    pub fn next_piece(&self) -> Option<&Piece> {
        self.next.as_ref()
    }

    /// Idle -> Running: draw the first two pieces and start gravity.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::Running;
        self.next = Some(Piece::spawn(self.gen.draw()));
        self.spawn_from_next();
        true
    }

    /// Running <-> Paused. No-op in Idle or GameOver.
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            Phase::Running => {
                self.phase = Phase::Paused;
                true
            }
            Phase::Paused => {
                self.phase = Phase::Running;
                true
            }
            _ => false,
        }
    }

    /// Atomically replace the whole session with a fresh Running one.
    /// The RNG continues from its current state so restarts differ.
    pub fn restart(&mut self) {
        *self = Self::new(self.gen.seed());
        self.start();
    }

    /// Apply a game action; returns whether it changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Start => self.start(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                self.restart();
                true
            }
            GameAction::MoveLeft => self.running() && self.try_move(-1, 0),
            GameAction::MoveRight => self.running() && self.try_move(1, 0),
            GameAction::SoftDrop => self.running() && self.soft_drop(),
            GameAction::HardDrop => self.running() && self.hard_drop(),
            GameAction::Rotate => self.running() && self.try_rotate(),
        }
    }

    fn running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Try to move the active piece by (dx, dy); rejected moves are no-ops.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        if self.board.collides(&piece.cells(), piece.x, piece.y, dx, dy) {
            return false;
        }

        piece.x += dx;
        piece.y += dy;
        true
    }

    /// Rotate the active piece clockwise; if the rotated matrix collides at
    /// the current position the rotation is rejected (no wall kicks).
    pub fn try_rotate(&mut self) -> bool {
        let Some(piece) = self.active.as_ref() else {
            return false;
        };

        let rotated = piece.rotated();
        if self
            .board
            .collides(&rotated.cells(), rotated.x, rotated.y, 0, 0)
        {
            return false;
        }

        self.active = Some(rotated);
        true
    }

    /// Move the active piece down one row, or place it if blocked.
    pub fn soft_drop(&mut self) -> bool {
        if self.active.is_none() {
            return false;
        }
        if self.try_move(0, 1) {
            // Manual drops restart the gravity accumulator so the piece does
            // not immediately fall again.
            self.drop_timer_ms = 0;
        } else {
            self.place_active();
        }
        true
    }

    /// Drop instantly to the lowest valid position and place immediately.
    pub fn hard_drop(&mut self) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        let cells = piece.cells();
        let mut dy: i8 = 0;
        while !self.board.collides(&cells, piece.x, piece.y, 0, dy + 1) {
            dy += 1;
        }
        piece.y += dy;

        self.place_active();
        true
    }

    /// Main game tick: accumulate elapsed time and run gravity when the
    /// drop interval is reached. Returns whether the piece advanced.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        self.drop_timer_ms += elapsed_ms;
        if self.drop_timer_ms < self.drop_interval_ms {
            return false;
        }
        self.drop_timer_ms = 0;

        if !self.try_move(0, 1) {
            self.place_active();
        }
        true
    }

    /// Commit the active piece to the board, clear lines, update scoring,
    /// and spawn the next piece. GameOver if the spawn immediately collides.
    fn place_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        self.board
            .place(&piece.cells(), piece.x, piece.y, piece.kind);

        let cleared = self.board.clear_full_rows().len() as u32;
        if cleared > 0 {
            // Each row is an independent +100 x level; the level in effect
            // before this placement applies to every row of the event.
            self.score += cleared * LINE_SCORE * self.level;
            self.lines += cleared;
            self.level = level_for_lines(self.lines);
            self.drop_interval_ms = drop_interval_for_level(self.level);
        }

        self.drop_timer_ms = 0;
        self.spawn_from_next();
    }

    /// Promote the precomputed next piece to active and draw a new next.
    /// A spawn that collides immediately ends the session.
    fn spawn_from_next(&mut self) {
        let piece = match self.next.take() {
            Some(piece) => piece,
            None => Piece::spawn(self.gen.draw()),
        };

        if self.board.collides(&piece.cells(), piece.x, piece.y, 0, 0) {
            // Keep the overlapping piece visible under the game-over overlay.
            self.active = Some(piece);
            self.phase = Phase::GameOver;
            return;
        }

        self.active = Some(piece);
        self.next = Some(Piece::spawn(self.gen.draw()));
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}
