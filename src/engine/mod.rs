//! Turn-by-turn game simulation.
//!
//! [`GameEngine`] wraps an immutable [`Board`] and simulates games on it.
//! Each game owns a transient [`GameState`] (positions, histories, turn
//! counter, status); one call to [`GameEngine::play_turn`] advances every
//! player exactly once, in fixed player-index order, and re-evaluates the
//! status afterwards.
//!
//! ## Winner tie-break
//!
//! Within a turn the winner is a set-once option: the first player (in
//! index order) to reach the terminal condition is recorded, later players
//! still roll and move, and nobody can overwrite the recorded winner.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, OverflowPolicy};
use crate::core::{DiceRng, PlayerId, PlayerMap, MAX_PLAYERS};
use crate::events::{EventSink, GameEvent, LinkKind};

/// Default turn limit for a simulated game.
pub const DEFAULT_TURN_LIMIT: u32 = 100;

/// Invalid simulation arguments.
///
/// Unlike board construction, which degrades and warns, the simulation
/// entry point has nothing sensible to degrade to: zero of anything means
/// there is no game to play, and more players than [`MAX_PLAYERS`] do not
/// fit the player index type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("player count must be at least 1")]
    NoPlayers,
    #[error("at most {} players supported", MAX_PLAYERS)]
    TooManyPlayers,
    #[error("game count must be at least 1")]
    NoGames,
    #[error("turn limit must be at least 1")]
    NoTurnLimit,
}

/// Where a game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No termination condition met yet.
    InProgress,
    /// A player reached the terminal condition; the game stopped at the
    /// end of that turn.
    Finished(PlayerId),
    /// The turn limit was reached with no winner.
    Aborted,
}

/// Transient per-game state.
///
/// Everything mutable lives here; the board is only read. Histories stay
/// rectangular: every player gets exactly one entry per turn, including
/// stay-put turns, with entry 0 being the starting square.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Current square number per player.
    pub positions: PlayerMap<u32>,
    /// Square occupied per player at turn 0, 1, 2, ...
    pub histories: PlayerMap<Vec<u32>>,
    /// Completed turns; 0 before the first turn.
    pub turn: u32,
    pub status: GameStatus,
}

impl GameState {
    /// Fresh state: all players on square 1, turn 0, in progress.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            positions: PlayerMap::with_value(player_count, 1),
            histories: PlayerMap::with_value(player_count, vec![1]),
            turn: 0,
            status: GameStatus::InProgress,
        }
    }

    /// The winner, if the game finished with one.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::Finished(winner) => Some(winner),
            _ => None,
        }
    }
}

/// How a completed game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// A player won, on the given turn.
    Won { winner: PlayerId, turn: u32 },
    /// The turn limit stopped the game.
    TurnLimitReached { turns: u32 },
}

/// Result of one simulated game: the full per-player position history
/// plus how it ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub histories: PlayerMap<Vec<u32>>,
    pub outcome: GameOutcome,
}

impl GameRecord {
    /// The winner, if there was one.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.outcome {
            GameOutcome::Won { winner, .. } => Some(winner),
            GameOutcome::TurnLimitReached { .. } => None,
        }
    }

    /// Number of recorded columns per player: start + one per turn.
    #[must_use]
    pub fn turn_columns(&self) -> usize {
        self.histories.iter().next().map_or(0, |(_, h)| h.len())
    }
}

/// Simulates games on an immutable board.
#[derive(Clone, Debug)]
pub struct GameEngine {
    board: Board,
}

impl GameEngine {
    /// Create an engine for the given board.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    /// The board being played.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Play one full turn: every player rolls once, in index order.
    ///
    /// Transit events for snake heads and ladder feet are informational;
    /// the transit itself happened when the previous roll landed on the
    /// trigger square (its forced destination is this roll's result).
    pub fn play_turn(&self, state: &mut GameState, rng: &mut DiceRng, sink: &mut impl EventSink) {
        debug_assert_eq!(state.status, GameStatus::InProgress);

        state.turn += 1;
        sink.emit(GameEvent::TurnStarted { turn: state.turn });

        let last = self.board.last_square();
        let mut winner: Option<PlayerId> = None;

        for player in state.positions.player_ids() {
            let prev = state.positions[player];
            let square = self.board.square(prev);

            match square.kind() {
                Some(LinkKind::Snake) => {
                    sink.emit(GameEvent::SnakeTransit { player, head: prev });
                }
                Some(LinkKind::Ladder) => {
                    sink.emit(GameEvent::LadderTransit { player, foot: prev });
                }
                None => {}
            }

            let next = match square.roll(rng) {
                // Blocked rolls only come off degenerate squares; the
                // player is treated as occupying the terminal condition.
                None => {
                    sink.emit(GameEvent::BlockedRoll {
                        player,
                        square: prev,
                    });
                    winner.get_or_insert(player);
                    last
                }
                Some(roll) if roll == last => {
                    winner.get_or_insert(player);
                    roll
                }
                Some(roll) if roll > last => match self.board.policy() {
                    OverflowPolicy::Classic => {
                        winner.get_or_insert(player);
                        last
                    }
                    OverflowPolicy::Ignore => {
                        sink.emit(GameEvent::OverflowIgnored { player, roll });
                        prev
                    }
                    OverflowPolicy::Rollback => {
                        unreachable!("rollback boards never roll past the last square")
                    }
                },
                Some(roll) => roll,
            };

            state.positions[player] = next;
            state.histories[player].push(next);
            sink.emit(GameEvent::Moved {
                player,
                square: next,
            });
        }

        // Read the set-once winner only after the whole turn resolved.
        if let Some(winner) = winner {
            state.status = GameStatus::Finished(winner);
            sink.emit(GameEvent::GameWon {
                winner,
                turn: state.turn,
            });
        }
    }

    /// Play one game to completion.
    pub fn play_game(
        &self,
        player_count: usize,
        turn_limit: u32,
        rng: &mut DiceRng,
        sink: &mut impl EventSink,
    ) -> GameRecord {
        let mut state = GameState::new(player_count);

        while state.status == GameStatus::InProgress {
            self.play_turn(&mut state, rng, sink);

            if state.status == GameStatus::InProgress && state.turn >= turn_limit {
                state.status = GameStatus::Aborted;
                sink.emit(GameEvent::TurnLimitReached { limit: turn_limit });
            }
        }

        let outcome = match state.status {
            GameStatus::Finished(winner) => GameOutcome::Won {
                winner,
                turn: state.turn,
            },
            GameStatus::Aborted => GameOutcome::TurnLimitReached { turns: state.turn },
            GameStatus::InProgress => unreachable!("loop exits only on a terminal status"),
        };

        GameRecord {
            histories: state.histories,
            outcome,
        }
    }

    /// Play `game_count` independent games of `player_count` players each.
    ///
    /// Every game forks its own RNG stream off `rng`, so results do not
    /// depend on the order games run in and the whole batch is
    /// reproducible from one seed.
    pub fn play_games(
        &self,
        player_count: usize,
        game_count: usize,
        turn_limit: u32,
        rng: &mut DiceRng,
        sink: &mut impl EventSink,
    ) -> Result<Vec<GameRecord>, EngineError> {
        if player_count == 0 {
            return Err(EngineError::NoPlayers);
        }
        if player_count > MAX_PLAYERS {
            return Err(EngineError::TooManyPlayers);
        }
        if game_count == 0 {
            return Err(EngineError::NoGames);
        }
        if turn_limit == 0 {
            return Err(EngineError::NoTurnLimit);
        }

        let mut records = Vec::with_capacity(game_count);
        for game in 1..=game_count {
            sink.emit(GameEvent::GameStarted { game: game as u32 });
            let mut game_rng = rng.fork();
            records.push(self.play_game(player_count, turn_limit, &mut game_rng, sink));
        }

        Ok(records)
    }
}
