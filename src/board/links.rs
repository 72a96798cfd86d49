//! Loose-shape snake/ladder input and its normalization pipeline.
//!
//! Link lists arrive in whatever shape the caller produced: a proper list
//! of pairs, a transposed pair-of-lists, ragged rows, a flat list of
//! numbers, a stray string, or nothing at all. [`coerce_shape`] sorts that
//! out into a tagged result; [`normalize`] then bounds-checks each pair
//! against the board and deduplicates the survivors.
//!
//! The coercion is pure: it returns tags describing what happened, and the
//! caller turns tags into warnings. That keeps every rule testable without
//! a sink in the way.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::events::{BoardWarning, LinkSet, ShapeProblem};

/// A raw snake or ladder list, before any validation.
///
/// Deserializes untagged, so a JSON configuration may carry `[[9, 2]]`,
/// `[9, 2]`, `"oops"`, or `null` and every case lands on a variant here
/// instead of failing the whole load.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawLinks {
    /// A collection of rows, each row a collection of numbers.
    Rows(Vec<Vec<i64>>),
    /// A flat collection of numbers (not pairs).
    Scalars(Vec<i64>),
    /// Not a collection at all.
    Text(String),
    /// Explicitly absent; treated as an empty set, silently.
    #[default]
    Absent,
}

impl RawLinks {
    /// Convenience constructor from well-shaped pairs.
    pub fn pairs(pairs: impl IntoIterator<Item = (i64, i64)>) -> Self {
        RawLinks::Rows(pairs.into_iter().map(|(a, b)| vec![a, b]).collect())
    }
}

/// Result of coercing a raw list into `(n, 2)` shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShapeOutcome {
    /// Already a list of pairs (possibly empty).
    Ok(Vec<(i64, i64)>),
    /// Was 2 uniform rows of n values; axes swapped into n pairs.
    Transposed(Vec<(i64, i64)>),
    /// Unusable; substitute an empty set and warn with the reason.
    Replaced(ShapeProblem),
}

/// A bounds-valid link: two distinct squares on the board.
///
/// Stored orientation-free as `lo < hi`. For a snake the head is `hi` and
/// the tail `lo`; for a ladder the foot is `lo` and the top `hi`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkPair {
    lo: u32,
    hi: u32,
}

impl LinkPair {
    /// Create a pair from two distinct in-range squares.
    ///
    /// Panics if the endpoints are equal; use [`normalize`] for untrusted
    /// input.
    #[must_use]
    pub fn new(a: u32, b: u32) -> Self {
        assert!(a != b, "link endpoints must differ");
        Self {
            lo: a.min(b),
            hi: a.max(b),
        }
    }

    /// The lower-numbered endpoint (snake tail, ladder foot).
    #[must_use]
    pub const fn lo(self) -> u32 {
        self.lo
    }

    /// The higher-numbered endpoint (snake head, ladder top).
    #[must_use]
    pub const fn hi(self) -> u32 {
        self.hi
    }
}

/// Coerce a raw list into `(n, 2)` shape.
///
/// Rules, in order:
/// - absent input or an empty collection is silently an empty set;
/// - rows uniformly 2 wide are taken as-is;
/// - exactly 2 uniform rows of some other width are transposed;
/// - anything else is replaced with an empty set, tagged with the reason.
#[must_use]
pub fn coerce_shape(raw: &RawLinks) -> ShapeOutcome {
    let rows = match raw {
        RawLinks::Absent => return ShapeOutcome::Ok(Vec::new()),
        RawLinks::Text(_) => return ShapeOutcome::Replaced(ShapeProblem::NotPairs),
        RawLinks::Scalars(values) => {
            return if values.is_empty() {
                ShapeOutcome::Ok(Vec::new())
            } else {
                ShapeOutcome::Replaced(ShapeProblem::NotPairs)
            };
        }
        RawLinks::Rows(rows) => rows,
    };

    if rows.is_empty() || (rows.len() == 1 && rows[0].is_empty()) {
        return ShapeOutcome::Ok(Vec::new());
    }

    let width = rows[0].len();
    if rows.iter().any(|row| row.len() != width) {
        return ShapeOutcome::Replaced(ShapeProblem::Ragged);
    }

    if width == 2 {
        // Shape (n, 2): the expected layout. (2, 2) lands here too.
        let pairs = rows.iter().map(|row| (row[0], row[1])).collect();
        return ShapeOutcome::Ok(pairs);
    }

    if rows.len() == 2 && width > 0 {
        // Shape (2, n): transposed. Swap axes into n pairs.
        let pairs = (0..width).map(|i| (rows[0][i], rows[1][i])).collect();
        return ShapeOutcome::Transposed(pairs);
    }

    ShapeOutcome::Replaced(ShapeProblem::WrongWidth)
}

/// Full normalization: shape coercion, per-pair bounds checking, dedup.
///
/// Returns the surviving pairs in first-occurrence order and the warnings
/// describing every correction, for the caller to forward to its sink.
#[must_use]
pub fn normalize(
    raw: &RawLinks,
    name: LinkSet,
    square_count: u32,
) -> (Vec<LinkPair>, Vec<BoardWarning>) {
    let mut warnings = Vec::new();

    let pairs = match coerce_shape(raw) {
        ShapeOutcome::Ok(pairs) => pairs,
        ShapeOutcome::Transposed(pairs) => {
            warnings.push(BoardWarning::LinksTransposed { name });
            pairs
        }
        ShapeOutcome::Replaced(problem) => {
            warnings.push(BoardWarning::LinksReplaced { name, problem });
            Vec::new()
        }
    };

    let mut seen = FxHashSet::default();
    let mut kept = Vec::new();

    for pair in pairs {
        let (a, b) = pair;
        if a.min(b) < 1 {
            warnings.push(BoardWarning::PairBelowMin { name, pair });
        } else if a.max(b) > i64::from(square_count) {
            warnings.push(BoardWarning::PairAboveMax {
                name,
                pair,
                max: square_count,
            });
        } else if a == b {
            warnings.push(BoardWarning::PairDegenerate { name, pair });
        } else {
            let link = LinkPair::new(a as u32, b as u32);
            if seen.insert(link) {
                kept.push(link);
            }
        }
    }

    (kept, warnings)
}
