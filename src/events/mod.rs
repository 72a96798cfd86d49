//! Structured diagnostics emitted by the board and engine.
//!
//! The core never prints. Construction problems and in-game happenings are
//! emitted as enum values through an [`EventSink`], and a collaborator
//! decides how to render them: collect them ([`EventLog`]), drop them
//! ([`NullSink`]), or log them ([`TracingSink`]).
//!
//! ## Design Philosophy
//!
//! Warnings are advisories, not errors: a malformed board configuration is
//! always degraded to something valid, and the warning stream is the only
//! record of what was corrected. Keeping the stream structured (rather than
//! formatted text) lets tests assert on exactly which corrections fired.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Which link list a construction warning refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkSet {
    Snakes,
    Ladders,
}

impl std::fmt::Display for LinkSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkSet::Snakes => write!(f, "snakes"),
            LinkSet::Ladders => write!(f, "ladders"),
        }
    }
}

/// The kind of link occupying a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkKind {
    /// Head square; transit goes backward to the tail.
    Snake,
    /// Foot square; transit goes forward to the top.
    Ladder,
}

impl std::fmt::Display for LinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkKind::Snake => write!(f, "snake"),
            LinkKind::Ladder => write!(f, "ladder"),
        }
    }
}

/// Why a link list was discarded wholesale during shape coercion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeProblem {
    /// Rows present but not uniformly 2 columns wide.
    WrongWidth,
    /// Rows of unequal length.
    Ragged,
    /// Not a collection of pairs at all (flat numbers, text, ...).
    NotPairs,
}

impl std::fmt::Display for ShapeProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeProblem::WrongWidth => write!(f, "rows are not 2 columns wide"),
            ShapeProblem::Ragged => write!(f, "rows have unequal lengths"),
            ShapeProblem::NotPairs => write!(f, "input is not a collection of pairs"),
        }
    }
}

/// A correction applied while constructing a board.
///
/// Every variant corresponds to one degrade-and-warn rule: the board that
/// comes out is always valid, and the warning says what was changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardWarning {
    /// Square count was not a positive integer; defaulted to 100.
    SquareCountDefaulted { given: i64 },
    /// Overflow policy string was not recognized; defaulted to Classic.
    PolicyDefaulted { given: String },
    /// Link list arrived as 2 rows of n values; axes were swapped.
    LinksTransposed { name: LinkSet },
    /// Link list had an unusable shape and was replaced with an empty set.
    LinksReplaced { name: LinkSet, problem: ShapeProblem },
    /// A pair had an endpoint below square 1 and was dropped.
    PairBelowMin { name: LinkSet, pair: (i64, i64) },
    /// A pair had an endpoint beyond the last square and was dropped.
    PairAboveMax {
        name: LinkSet,
        pair: (i64, i64),
        max: u32,
    },
    /// A pair had equal endpoints and was dropped.
    PairDegenerate { name: LinkSet, pair: (i64, i64) },
    /// A snake or ladder targeted the last square as its trigger; skipped.
    LinkOnLastSquare { kind: LinkKind },
    /// A square flagged as a trigger had no outgoing moves; flag cleared.
    LinkWithoutExit { square: u32, kind: LinkKind },
    /// A trigger square carried several candidates; the first one pointing
    /// the right way was selected as the forced destination.
    ForcedCandidateChosen {
        square: u32,
        kind: LinkKind,
        chosen: u32,
    },
    /// A trigger square carried several candidates and none pointed the
    /// right way; the square ends up with no outgoing moves.
    NoForcedCandidate { square: u32, kind: LinkKind },
}

impl std::fmt::Display for BoardWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardWarning::SquareCountDefaulted { given } => write!(
                f,
                "square count {} is not a positive integer, using 100",
                given
            ),
            BoardWarning::PolicyDefaulted { given } => {
                write!(f, "overflow policy {:?} is not valid, using classic", given)
            }
            BoardWarning::LinksTransposed { name } => write!(
                f,
                "the {} list should be n pairs of 2; axes were swapped",
                name
            ),
            BoardWarning::LinksReplaced { name, problem } => write!(
                f,
                "the {} list was replaced with an empty list: {}",
                name, problem
            ),
            BoardWarning::PairBelowMin { name, pair } => write!(
                f,
                "a bound in {} can't be less than 1, dropping ({}, {})",
                name, pair.0, pair.1
            ),
            BoardWarning::PairAboveMax { name, pair, max } => write!(
                f,
                "a bound in {} can't be greater than {}, dropping ({}, {})",
                name, max, pair.0, pair.1
            ),
            BoardWarning::PairDegenerate { name, pair } => write!(
                f,
                "the bounds in {} can't be equal, dropping ({}, {})",
                name, pair.0, pair.1
            ),
            BoardWarning::LinkOnLastSquare { kind } => {
                write!(f, "the last square can't have a {}", kind)
            }
            BoardWarning::LinkWithoutExit { square, kind } => write!(
                f,
                "square {} can't have a {} as it has no following squares; removed",
                square, kind
            ),
            BoardWarning::ForcedCandidateChosen {
                square,
                kind,
                chosen,
            } => write!(
                f,
                "square {} (with {}) had several candidates; forced to {}",
                square, kind, chosen
            ),
            BoardWarning::NoForcedCandidate { square, kind } => write!(
                f,
                "square {} (with {}) has no valid following square; none selected",
                square, kind
            ),
        }
    }
}

/// Something that happened during a simulated game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new game began (1-based).
    GameStarted { game: u32 },
    /// A new turn began (1-based; turn 0 is the starting position).
    TurnStarted { turn: u32 },
    /// The player starts this turn on a snake head; the slide already
    /// happened when last turn's roll landed there.
    SnakeTransit { player: PlayerId, head: u32 },
    /// The player starts this turn on a ladder foot.
    LadderTransit { player: PlayerId, foot: u32 },
    /// A player's destination after resolving this turn.
    Moved { player: PlayerId, square: u32 },
    /// Under the Ignore policy, a roll past the last square was discarded.
    OverflowIgnored { player: PlayerId, roll: u32 },
    /// A roll was attempted from a square with no outgoing moves. Should
    /// only be possible on degenerate squares; the player is treated as
    /// having reached the end.
    BlockedRoll { player: PlayerId, square: u32 },
    /// The game finished with a winner, on the given turn.
    GameWon { winner: PlayerId, turn: u32 },
    /// The turn limit was reached with no winner.
    TurnLimitReached { limit: u32 },
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::GameStarted { game } => write!(f, "game {}", game),
            GameEvent::TurnStarted { turn } => write!(f, "turn {}", turn),
            GameEvent::SnakeTransit { player, head } => {
                write!(f, "{} went down the snake at square {}", player, head)
            }
            GameEvent::LadderTransit { player, foot } => {
                write!(f, "{} went up the ladder at square {}", player, foot)
            }
            GameEvent::Moved { player, square } => {
                write!(f, "{}, next square: {}", player, square)
            }
            GameEvent::OverflowIgnored { player, roll } => {
                write!(f, "{}'s roll ({}) was too big", player, roll)
            }
            GameEvent::BlockedRoll { player, square } => {
                write!(f, "{} is stuck: square {} has no connections", player, square)
            }
            GameEvent::GameWon { winner, turn } => {
                write!(f, "{} won the game on turn {}", winner, turn)
            }
            GameEvent::TurnLimitReached { limit } => {
                write!(f, "max turns ({}) exceeded, ending game", limit)
            }
        }
    }
}

/// Receiver for the diagnostics stream.
///
/// The board emits [`BoardWarning`]s during construction; the engine emits
/// [`GameEvent`]s during simulation. Implementations decide presentation.
pub trait EventSink {
    /// A construction-time correction.
    fn warn(&mut self, warning: BoardWarning);

    /// An in-game happening.
    fn emit(&mut self, event: GameEvent);
}

/// Collects everything; the sink used by tests and by callers that want to
/// inspect the stream after the fact.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    pub warnings: Vec<BoardWarning>,
    pub events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any construction warnings were recorded.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

impl EventSink for EventLog {
    fn warn(&mut self, warning: BoardWarning) {
        self.warnings.push(warning);
    }

    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn warn(&mut self, _warning: BoardWarning) {}

    fn emit(&mut self, _event: GameEvent) {}
}

/// Renders the stream through `tracing`: warnings at `warn`, game events
/// at `info` (blocked rolls at `warn`, since they indicate a degenerate
/// board).
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn warn(&mut self, warning: BoardWarning) {
        tracing::warn!(target: "snakes_ladders", "{}", warning);
    }

    fn emit(&mut self, event: GameEvent) {
        match event {
            GameEvent::BlockedRoll { .. } => {
                tracing::warn!(target: "snakes_ladders", "{}", event);
            }
            _ => tracing::info!(target: "snakes_ladders", "{}", event),
        }
    }
}
