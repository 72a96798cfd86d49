//! # snakes-ladders
//!
//! A Snakes and Ladders board-construction and simulation engine.
//!
//! ## Design Principles
//!
//! 1. **Degrade and warn**: board construction never fails. Malformed
//!    inputs (transposed or ragged link lists, out-of-range pairs, bad
//!    square counts, unknown policy names) are corrected to safe defaults
//!    and each correction is reported as a structured warning.
//!
//! 2. **Pure core**: neither the board nor the engine performs I/O.
//!    Diagnostics flow through the [`events::EventSink`] seam; a
//!    collaborator collects or renders them.
//!
//! 3. **Deterministic randomness**: die rolls come from a seeded,
//!    forkable RNG, so any batch of games is reproducible from one seed
//!    and individual games are independent of each other.
//!
//! ## Architecture
//!
//! - `core`: player identifiers, per-player storage, the dice RNG
//! - `board`: link-list validation, overflow policies, square derivation
//! - `engine`: the turn-by-turn state machine and game records
//! - `events`: structured warnings/events and sinks to receive them
//!
//! ## Example
//!
//! ```
//! use snakes_ladders::{
//!     Board, BoardConfig, DiceRng, EventLog, GameEngine, RawLinks,
//! };
//!
//! let config = BoardConfig::new(100)
//!     .with_snakes(RawLinks::pairs([(98, 12), (54, 19)]))
//!     .with_ladders(RawLinks::pairs([(4, 33), (42, 77)]));
//!
//! let mut log = EventLog::new();
//! let board = Board::build(&config, &mut log);
//! assert!(!log.has_warnings());
//!
//! let engine = GameEngine::new(board);
//! let mut rng = DiceRng::new(42);
//! let records = engine.play_games(2, 3, 100, &mut rng, &mut log).unwrap();
//!
//! assert_eq!(records.len(), 3);
//! for record in &records {
//!     // Histories are rectangular: start column + one column per turn.
//!     assert!(record.turn_columns() >= 2);
//! }
//! ```

pub mod board;
pub mod core;
pub mod engine;
pub mod events;

// Re-export commonly used types
pub use crate::core::{DiceRng, PlayerId, PlayerMap, MAX_PLAYERS};

pub use crate::board::{
    Board, BoardConfig, CandidateSet, LinkPair, OverflowPolicy, RawLinks, Reachable, ShapeOutcome,
    Square, DEFAULT_SQUARE_COUNT, MAX_SQUARE_COUNT,
};

pub use crate::engine::{
    EngineError, GameEngine, GameOutcome, GameRecord, GameState, GameStatus, DEFAULT_TURN_LIMIT,
};

pub use crate::events::{
    BoardWarning, EventLog, EventSink, GameEvent, LinkKind, LinkSet, NullSink, ShapeProblem,
    TracingSink,
};
