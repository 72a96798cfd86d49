//! One board position and what a die roll from it can reach.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::DiceRng;
use crate::events::{BoardWarning, EventSink, LinkKind};

/// Candidate destinations fit in one die's worth of values.
pub type CandidateSet = SmallVec<[u32; 6]>;

/// Where a die roll from a square can land.
///
/// An explicit tagged variant instead of overloading one field with
/// "a number", "a set of numbers", or "nothing": roll resolution never
/// needs to inspect types downstream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reachable {
    /// Exactly one destination, taken regardless of the roll (snake and
    /// ladder transits).
    Forced(u32),
    /// Up to 6 destinations, one chosen uniformly per roll.
    Candidates(CandidateSet),
    /// No outgoing moves. Only the last square ends up here on a
    /// well-formed board.
    Terminal,
}

impl Reachable {
    /// Build a candidate set from an inclusive range of square numbers.
    #[must_use]
    pub fn span(from: u32, to: u32) -> Self {
        Reachable::Candidates((from..=to).collect())
    }

    /// Whether there are no outgoing moves.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Reachable::Terminal)
    }
}

/// One numbered position on the board.
///
/// Immutable once constructed; the board builds every square up front and
/// the engine only reads them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    number: u32,
    kind: Option<LinkKind>,
    reachable: Reachable,
}

impl Square {
    /// Create a square, repairing inconsistent inputs:
    ///
    /// - a trigger square with no outgoing moves loses its trigger
    ///   (a square you cannot leave cannot also send you somewhere);
    /// - a trigger square with several candidates resolves to the first
    ///   candidate pointing the trigger's way (backward for a snake,
    ///   forward for a ladder), or to no moves at all if none qualifies.
    ///
    /// Corrections are reported through `sink`. Normal board construction
    /// hands triggers a single forced destination, so these rules only
    /// fire on hand-built squares.
    pub fn new(
        number: u32,
        kind: Option<LinkKind>,
        reachable: Reachable,
        sink: &mut impl EventSink,
    ) -> Self {
        let empty = match &reachable {
            Reachable::Terminal => true,
            Reachable::Candidates(c) => c.is_empty(),
            Reachable::Forced(_) => false,
        };

        if empty {
            if let Some(kind) = kind {
                sink.warn(BoardWarning::LinkWithoutExit { square: number, kind });
            }
            return Self {
                number,
                kind: None,
                reachable: Reachable::Terminal,
            };
        }

        if let (Some(link), Reachable::Candidates(candidates)) = (kind, &reachable) {
            if candidates.len() > 1 {
                let wanted = |c: u32| match link {
                    LinkKind::Snake => c < number,
                    LinkKind::Ladder => c > number,
                };
                return match candidates.iter().copied().find(|&c| wanted(c)) {
                    Some(chosen) => {
                        sink.warn(BoardWarning::ForcedCandidateChosen {
                            square: number,
                            kind: link,
                            chosen,
                        });
                        Self {
                            number,
                            kind,
                            reachable: Reachable::Forced(chosen),
                        }
                    }
                    None => {
                        sink.warn(BoardWarning::NoForcedCandidate {
                            square: number,
                            kind: link,
                        });
                        Self {
                            number,
                            kind,
                            reachable: Reachable::Terminal,
                        }
                    }
                };
            }
        }

        Self {
            number,
            kind,
            reachable,
        }
    }

    /// The square's number, 1-based.
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// The trigger occupying this square, if any.
    #[must_use]
    pub const fn kind(&self) -> Option<LinkKind> {
        self.kind
    }

    /// Whether this square is the head of a snake.
    #[must_use]
    pub fn is_snake_head(&self) -> bool {
        self.kind == Some(LinkKind::Snake)
    }

    /// Whether this square is the foot of a ladder.
    #[must_use]
    pub fn is_ladder_foot(&self) -> bool {
        self.kind == Some(LinkKind::Ladder)
    }

    /// Where a roll from here can land.
    #[must_use]
    pub const fn reachable(&self) -> &Reachable {
        &self.reachable
    }

    /// Resolve one die roll from this square.
    ///
    /// Returns the destination square number, or `None` when the square
    /// has no outgoing moves (blocked).
    #[must_use]
    pub fn roll(&self, rng: &mut DiceRng) -> Option<u32> {
        match &self.reachable {
            Reachable::Forced(next) => Some(*next),
            // Candidates are never empty after construction.
            Reachable::Candidates(candidates) => rng.choose(candidates).copied(),
            Reachable::Terminal => None,
        }
    }
}
