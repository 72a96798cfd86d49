//! Board construction: validation, normalization, and square derivation.
//!
//! A [`Board`] is built once from a [`BoardConfig`] and never mutated.
//! Construction cannot fail: every malformed input is degraded to a safe
//! default and reported as a [`BoardWarning`](crate::events::BoardWarning)
//! through the caller's sink.

pub mod links;
pub mod policy;
pub mod square;

pub use links::{coerce_shape, normalize, LinkPair, RawLinks, ShapeOutcome};
pub use policy::OverflowPolicy;
pub use square::{CandidateSet, Reachable, Square};

use serde::{Deserialize, Serialize};

use crate::events::{BoardWarning, EventSink, LinkKind, LinkSet};

/// Default board size when the configured square count is unusable.
pub const DEFAULT_SQUARE_COUNT: u32 = 100;

/// Largest accepted square count. Leaves room for the six-square roll
/// window above any square, so `s + 6` never overflows.
pub const MAX_SQUARE_COUNT: u32 = u32::MAX - 6;

/// Raw board configuration, before validation.
///
/// Mirrors the loose inputs a caller may supply: the square count as a
/// plain integer, link lists in any shape, and the overflow policy as a
/// free-form string. [`Board::build`] normalizes all of it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Total playable positions, numbered from 1. Values outside
    /// `1..=MAX_SQUARE_COUNT` fall back to [`DEFAULT_SQUARE_COUNT`]
    /// with a warning.
    #[serde(default = "default_square_count")]
    pub square_count: i64,

    /// Snake definitions: pairs of (head, tail) in any order.
    #[serde(default)]
    pub snakes: RawLinks,

    /// Ladder definitions: pairs of (foot, top) in any order.
    #[serde(default)]
    pub ladders: RawLinks,

    /// Overflow policy name or alias, case-insensitive. Unrecognized
    /// values fall back to Classic with a warning.
    #[serde(default = "default_overflow")]
    pub overflow: String,
}

fn default_square_count() -> i64 {
    i64::from(DEFAULT_SQUARE_COUNT)
}

fn default_overflow() -> String {
    "classic".to_string()
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            square_count: default_square_count(),
            snakes: RawLinks::Absent,
            ladders: RawLinks::Absent,
            overflow: default_overflow(),
        }
    }
}

impl BoardConfig {
    /// Start a configuration for a board of `square_count` squares.
    #[must_use]
    pub fn new(square_count: i64) -> Self {
        Self {
            square_count,
            ..Self::default()
        }
    }

    /// Set the snake list.
    #[must_use]
    pub fn with_snakes(mut self, snakes: RawLinks) -> Self {
        self.snakes = snakes;
        self
    }

    /// Set the ladder list.
    #[must_use]
    pub fn with_ladders(mut self, ladders: RawLinks) -> Self {
        self.ladders = ladders;
        self
    }

    /// Set the overflow policy by name or alias.
    #[must_use]
    pub fn with_overflow(mut self, overflow: impl Into<String>) -> Self {
        self.overflow = overflow.into();
        self
    }
}

/// A validated, immutable board.
///
/// Owns the full ordered sequence of squares with their derived
/// reachability; index `i` holds square number `i + 1`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    square_count: u32,
    policy: OverflowPolicy,
    snakes: Vec<LinkPair>,
    ladders: Vec<LinkPair>,
    squares: Vec<Square>,
}

impl Board {
    /// Build a board from a raw configuration.
    ///
    /// Never fails: malformed inputs degrade to defaults and every
    /// correction is reported through `sink`.
    pub fn build(config: &BoardConfig, sink: &mut impl EventSink) -> Self {
        let square_count = if config.square_count >= 1
            && config.square_count <= i64::from(MAX_SQUARE_COUNT)
        {
            config.square_count as u32
        } else {
            sink.warn(BoardWarning::SquareCountDefaulted {
                given: config.square_count,
            });
            DEFAULT_SQUARE_COUNT
        };

        let (snakes, warnings) = normalize(&config.snakes, LinkSet::Snakes, square_count);
        for warning in warnings {
            sink.warn(warning);
        }
        let (ladders, warnings) = normalize(&config.ladders, LinkSet::Ladders, square_count);
        for warning in warnings {
            sink.warn(warning);
        }

        let policy = match OverflowPolicy::parse(&config.overflow) {
            Some(policy) => policy,
            None => {
                sink.warn(BoardWarning::PolicyDefaulted {
                    given: config.overflow.clone(),
                });
                OverflowPolicy::Classic
            }
        };

        let squares = derive_squares(square_count, policy, &snakes, &ladders, sink);

        Self {
            square_count,
            policy,
            snakes,
            ladders,
            squares,
        }
    }

    /// Total number of squares.
    #[must_use]
    pub const fn square_count(&self) -> u32 {
        self.square_count
    }

    /// The active overflow policy.
    #[must_use]
    pub const fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// The snake pairs that survived validation.
    #[must_use]
    pub fn snakes(&self) -> &[LinkPair] {
        &self.snakes
    }

    /// The ladder pairs that survived validation.
    #[must_use]
    pub fn ladders(&self) -> &[LinkPair] {
        &self.ladders
    }

    /// Look up a square by its 1-based number.
    ///
    /// Panics if `number` is outside `1..=square_count`.
    #[must_use]
    pub fn square(&self, number: u32) -> &Square {
        assert!(
            (1..=self.square_count).contains(&number),
            "square {} out of range 1..={}",
            number,
            self.square_count
        );
        &self.squares[(number - 1) as usize]
    }

    /// Iterate over every square in board order.
    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter()
    }

    /// The last square's number.
    #[must_use]
    pub const fn last_square(&self) -> u32 {
        self.square_count
    }
}

/// Derive every square's trigger and reachability, in board order.
///
/// Precedence per square: snake occupancy, then ladder occupancy, then the
/// terminal square, then the near-end window, then the plain `+1..+6`
/// span. A trigger shadows the positional rules entirely, even when its
/// link is later found unusable.
fn derive_squares(
    square_count: u32,
    policy: OverflowPolicy,
    snakes: &[LinkPair],
    ladders: &[LinkPair],
    sink: &mut impl EventSink,
) -> Vec<Square> {
    let n = square_count;
    let mut squares = Vec::with_capacity(n as usize);

    for s in 1..=n {
        let snake = snakes.iter().find(|pair| pair.hi() == s);
        let ladder = ladders.iter().find(|pair| pair.lo() == s);

        let (kind, reachable) = if let Some(pair) = snake {
            if s == n {
                sink.warn(BoardWarning::LinkOnLastSquare {
                    kind: LinkKind::Snake,
                });
                (None, Reachable::Terminal)
            } else {
                (Some(LinkKind::Snake), Reachable::Forced(pair.lo()))
            }
        } else if let Some(pair) = ladder {
            if s == n {
                sink.warn(BoardWarning::LinkOnLastSquare {
                    kind: LinkKind::Ladder,
                });
                (None, Reachable::Terminal)
            } else {
                (Some(LinkKind::Ladder), Reachable::Forced(pair.hi()))
            }
        } else if s == n {
            (None, Reachable::Terminal)
        } else if s + 6 > n {
            // Inside the last-6 window: n-6 < s < n.
            match policy {
                OverflowPolicy::Classic | OverflowPolicy::Ignore => {
                    // Candidates may exceed n; overflow resolves at roll time.
                    (None, Reachable::span(s + 1, s + 6))
                }
                OverflowPolicy::Rollback => {
                    // Always land among the final squares. Boards shorter
                    // than 6 squares clamp the window at square 1.
                    (None, Reachable::span(n.saturating_sub(5).max(1), n))
                }
            }
        } else {
            (None, Reachable::span(s + 1, s + 6))
        };

        squares.push(Square::new(s, kind, reachable, sink));
    }

    squares
}
