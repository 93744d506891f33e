//! Simulation state for the chase game.
//!
//! `Game` owns the board, the three pieces, score and enemy speed. The frame
//! loop calls [`Game::step`] once per animation frame and then renders; input
//! handlers call [`Game::move_player`]. Nothing in here touches the DOM, so the
//! whole lifecycle is testable natively.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::input::Direction;
use crate::utils::get_random_int;

pub mod board;
pub mod chase;
pub mod clock;
pub mod piece;

pub use board::Board;
pub use piece::{Piece, Position};

use chase::chase_step;
use clock::TickClock;

/// Lifecycle of one page session. There is no pause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    GameOver,
}

/// What happened during a step; the web layer turns these into UI effects.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    EnemyMoved(Position),
    CoinCollected { score: u32, refresh_ms: f64, coin: Position },
    GameOver { score: u32 },
}

pub struct Game {
    config: GameConfig,
    board: Board,
    player: Piece,
    enemy: Piece,
    coin: Piece,
    score: u32,
    refresh_ms: f64,
    phase: Phase,
    clock: TickClock,
    rng: StdRng,
}

impl Game {
    /// New idle game seeded from the platform entropy source.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Deterministic game for replays and tests.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Result<Self, GameError> {
        config.validate()?;
        let palette = &config.palette;
        Ok(Self {
            board: Board::new(config.board_width, config.board_height),
            player: Piece::single(config.player_start(), palette.player.clone()),
            enemy: Piece::single(config.enemy_start, palette.enemy.clone()),
            coin: Piece::single(config.coin_start, palette.coin.clone()),
            score: 0,
            refresh_ms: config.initial_refresh_ms,
            phase: Phase::Idle,
            clock: TickClock::new(),
            rng,
            config,
        })
    }

    /// Start or restart: clear the board, put every piece back at its spawn,
    /// zero the score and speed, then drop the coin somewhere random.
    pub fn start(&mut self) {
        self.board.reset();
        self.player.position = self.config.player_start().into();
        self.enemy.position = self.config.enemy_start.into();
        self.score = 0;
        self.refresh_ms = self.config.initial_refresh_ms;
        self.clock.reset();
        self.relocate_coin();
        self.phase = Phase::Running;
        log::info!("game started, player at {:?}", self.player.position);
    }

    /// Advance one frame. Only a running game changes; once the game is over
    /// further frames report nothing.
    pub fn step(&mut self, now_ms: f64) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.phase != Phase::Running {
            return events;
        }

        if self.clock.advance(now_ms, self.refresh_ms) {
            self.enemy.position = chase_step(self.enemy.position, self.player.position);
            events.push(GameEvent::EnemyMoved(self.enemy.position));
        }

        if self.player.collides_with(&self.coin) {
            self.score += self.config.coin_value;
            if self.refresh_ms > self.config.min_refresh_ms {
                self.refresh_ms =
                    (self.refresh_ms - self.config.refresh_step_ms).max(self.config.min_refresh_ms);
            }
            self.relocate_coin();
            log::debug!("coin collected, score {} refresh {}ms", self.score, self.refresh_ms);
            events.push(GameEvent::CoinCollected {
                score: self.score,
                refresh_ms: self.refresh_ms,
                coin: self.coin.position,
            });
        }

        if self.player.collides_with(&self.enemy) {
            self.phase = Phase::GameOver;
            log::info!("game over with score {}", self.score);
            events.push(GameEvent::GameOver { score: self.score });
        }

        events
    }

    /// Move the player one cell, clamped to the board. Returns whether the
    /// player moved; input outside a running game is ignored.
    pub fn move_player(&mut self, dir: Direction) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let (dx, dy) = dir.delta();
        let from = self.player.position;
        let to = self.board.clamp(Position::new(from.x + dx, from.y + dy));
        self.player.position = to;
        to != from
    }

    /// Convenience for key handlers: map the key name and move.
    pub fn handle_key(&mut self, key: &str) -> bool {
        Direction::from_key(key).is_some_and(|dir| self.move_player(dir))
    }

    /// Uniform cell in `[1, dim - 1)` on both axes, avoiding the enemy and the
    /// player whenever another cell is available.
    fn relocate_coin(&mut self) {
        let w = self.config.board_width as f64;
        let h = self.config.board_height as f64;
        let blocked = [self.enemy.position, self.player.position];
        let candidates: Vec<Position> = (1..self.config.board_height - 1)
            .flat_map(|y| (1..self.config.board_width - 1).map(move |x| Position::new(x, y)))
            .filter(|p| !blocked.contains(p))
            .collect();

        let next = if candidates.is_empty() {
            // every interior cell is taken; fall back to an unguarded draw
            let x = get_random_int(&mut self.rng, 1.0, w - 1.0).unwrap_or(1);
            let y = get_random_int(&mut self.rng, 1.0, h - 1.0).unwrap_or(1);
            Position::new(x, y)
        } else {
            let idx = get_random_int(&mut self.rng, 0.0, candidates.len() as f64).unwrap_or(0);
            candidates[idx as usize]
        };
        self.coin.position = next;
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self) -> &Piece {
        &self.player
    }

    pub fn enemy(&self) -> &Piece {
        &self.enemy
    }

    pub fn coin(&self) -> &Piece {
        &self.coin
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn refresh_ms(&self) -> f64 {
        self.refresh_ms
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[cfg(test)]
    pub(crate) fn place(&mut self, player: Position, enemy: Position, coin: Position) {
        self.player.position = player;
        self.enemy.position = enemy;
        self.coin.position = coin;
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(seed: u64) -> Game {
        let mut g = Game::with_seed(GameConfig::default(), seed).unwrap();
        g.start();
        g
    }

    fn in_interior(game: &Game, p: Position) -> bool {
        let cfg = game.config();
        (1..cfg.board_width - 1).contains(&p.x) && (1..cfg.board_height - 1).contains(&p.y)
    }

    #[test]
    fn new_game_is_idle_and_ignores_frames() {
        let mut g = Game::with_seed(GameConfig::default(), 1).unwrap();
        assert_eq!(g.phase(), Phase::Idle);
        assert_eq!(g.player().position, Position::new(15, 0));
        assert_eq!(g.enemy().position, Position::new(20, 20));
        assert_eq!(g.coin().position, Position::new(15, 20));
        assert!(g.step(0.0).is_empty());
        assert!(g.step(10_000.0).is_empty());
        assert!(!g.handle_key("ArrowRight"));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = GameConfig { board_height: 1, ..GameConfig::default() };
        assert!(matches!(Game::with_seed(cfg, 0), Err(GameError::Config(_))));
    }

    #[test]
    fn start_resets_board_and_player() {
        let mut g = Game::with_seed(GameConfig::default(), 3).unwrap();
        g.board_mut().set(Position::new(2, 2), 1);
        g.start();
        assert_eq!(g.phase(), Phase::Running);
        assert!(g.board().is_clear());
        assert_eq!(g.player().position, Position::new(15, 0));
        assert!(in_interior(&g, g.coin().position));
    }

    #[test]
    fn enemy_moves_only_on_tick() {
        let mut g = running(5);
        g.place(Position::new(2, 19), Position::new(20, 20), Position::new(28, 28));
        assert!(g.step(0.0).is_empty());
        assert!(g.step(200.0).is_empty());
        let events = g.step(301.0);
        assert_eq!(events, vec![GameEvent::EnemyMoved(Position::new(19, 20))]);
        assert_eq!(g.enemy().position, Position::new(19, 20));
    }

    #[test]
    fn coin_pickup_scores_and_speeds_up() {
        let mut g = running(11);
        g.place(Position::new(7, 7), Position::new(25, 25), Position::new(7, 7));
        let events = g.step(0.0);
        assert_eq!(g.score(), 10);
        assert_eq!(g.refresh_ms(), 250.0);
        assert!(in_interior(&g, g.coin().position));
        assert_ne!(g.coin().position, Position::new(7, 7));
        assert!(matches!(
            events.as_slice(),
            [GameEvent::CoinCollected { score: 10, refresh_ms, .. }] if *refresh_ms == 250.0
        ));
    }

    #[test]
    fn refresh_never_drops_below_floor() {
        let mut g = running(13);
        let mut seen = Vec::new();
        for i in 0..10 {
            let p = g.coin().position;
            g.place(p, Position::new(0, 29), p);
            g.step(i as f64);
            seen.push(g.refresh_ms());
        }
        assert_eq!(&seen[..6], &[250.0, 200.0, 150.0, 100.0, 50.0, 20.0]);
        assert!(seen[6..].iter().all(|r| *r == 20.0));
        assert_eq!(g.score(), 100);
    }

    #[test]
    fn enemy_collision_fires_once() {
        let mut g = running(17);
        g.place(Position::new(4, 4), Position::new(4, 4), Position::new(10, 10));
        let events = g.step(0.0);
        assert_eq!(events, vec![GameEvent::GameOver { score: 0 }]);
        assert_eq!(g.phase(), Phase::GameOver);
        assert!(g.step(1_000.0).is_empty());
        assert!(g.step(2_000.0).is_empty());
        assert!(!g.handle_key("ArrowUp"));
    }

    #[test]
    fn coin_checked_before_enemy() {
        let mut g = running(19);
        g.place(Position::new(6, 6), Position::new(6, 6), Position::new(6, 6));
        let events = g.step(0.0);
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], GameEvent::CoinCollected { score: 10, .. }));
        assert_eq!(events[1], GameEvent::GameOver { score: 10 });
    }

    #[test]
    fn enemy_stepping_onto_player_ends_game() {
        let mut g = running(23);
        g.place(Position::new(10, 10), Position::new(10, 11), Position::new(2, 2));
        g.step(0.0);
        let events = g.step(350.0);
        assert_eq!(
            events,
            vec![
                GameEvent::EnemyMoved(Position::new(10, 10)),
                GameEvent::GameOver { score: 0 }
            ]
        );
    }

    #[test]
    fn player_is_clamped_to_board() {
        let mut g = running(29);
        g.place(Position::new(0, 0), Position::new(20, 20), Position::new(5, 5));
        assert!(!g.move_player(Direction::Left));
        assert!(!g.move_player(Direction::Up));
        assert_eq!(g.player().position, Position::new(0, 0));
        g.place(Position::new(29, 29), Position::new(20, 20), Position::new(5, 5));
        assert!(!g.move_player(Direction::Right));
        assert!(!g.move_player(Direction::Down));
        assert!(g.move_player(Direction::Left));
        assert_eq!(g.player().position, Position::new(28, 29));
    }

    #[test]
    fn restart_resets_score_speed_and_enemy() {
        let mut g = running(31);
        let p = g.coin().position;
        g.place(p, Position::new(0, 29), p);
        g.step(0.0);
        g.place(Position::new(3, 3), Position::new(3, 3), Position::new(9, 9));
        g.step(1.0);
        assert_eq!(g.phase(), Phase::GameOver);
        assert_eq!(g.score(), 10);

        g.start();
        assert_eq!(g.phase(), Phase::Running);
        assert_eq!(g.score(), 0);
        assert_eq!(g.refresh_ms(), 300.0);
        assert_eq!(g.enemy().position, Position::new(20, 20));
        assert_eq!(g.player().position, Position::new(15, 0));
        // stale timestamps from the previous run do not trigger a tick
        assert!(g.step(50_000.0).is_empty());
    }

    #[test]
    fn coin_avoids_enemy_and_player() {
        let cfg = GameConfig {
            board_width: 4,
            board_height: 4,
            enemy_start: (1, 1),
            coin_start: (2, 2),
            ..GameConfig::default()
        };
        // interior is (1..3)x(1..3); enemy holds (1,1), so the coin picks
        // among the other three interior cells
        for seed in 0..40 {
            let mut g = Game::with_seed(cfg.clone(), seed).unwrap();
            g.start();
            let coin = g.coin().position;
            assert!(in_interior(&g, coin));
            assert_ne!(coin, g.enemy().position);
            assert_ne!(coin, g.player().position);
        }
    }

    #[test]
    fn coin_falls_back_when_interior_is_full() {
        let cfg = GameConfig {
            board_width: 3,
            board_height: 3,
            enemy_start: (1, 1),
            coin_start: (0, 0),
            ..GameConfig::default()
        };
        let mut g = Game::with_seed(cfg, 2).unwrap();
        g.start();
        assert_eq!(g.coin().position, Position::new(1, 1));
    }
}
