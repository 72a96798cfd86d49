//! Board construction scenarios: messy inputs in, valid boards out.

use snakes_ladders::{
    Board, BoardConfig, BoardWarning, EventLog, LinkKind, LinkPair, LinkSet, OverflowPolicy,
    RawLinks, Reachable, ShapeProblem,
};

fn build(config: &BoardConfig) -> (Board, EventLog) {
    let mut log = EventLog::new();
    let board = Board::build(config, &mut log);
    (board, log)
}

/// A default configuration yields the classic 100-square board.
#[test]
fn test_default_board() {
    let (board, log) = build(&BoardConfig::default());

    assert_eq!(board.square_count(), 100);
    assert_eq!(board.policy(), OverflowPolicy::Classic);
    assert!(board.snakes().is_empty());
    assert!(board.ladders().is_empty());
    assert!(!log.has_warnings());

    assert_eq!(board.square(1).reachable(), &Reachable::span(2, 7));
    assert!(board.square(100).reachable().is_terminal());
}

/// A thoroughly messy configuration degrades pair by pair, never fails.
#[test]
fn test_messy_config_degrades() {
    // Snakes: out-of-range and degenerate pairs mixed with good ones.
    // Ladders: two rows of three, i.e. transposed.
    let config = BoardConfig::new(20)
        .with_snakes(RawLinks::pairs([
            (9, 2),
            (8, 0),
            (3, 7),
            (21, 4),
            (6, 5),
            (5, 5),
        ]))
        .with_ladders(RawLinks::Rows(vec![vec![11, 13, 15], vec![12, 14, 16]]));
    let (board, log) = build(&config);

    assert_eq!(
        board.snakes(),
        &[LinkPair::new(9, 2), LinkPair::new(3, 7), LinkPair::new(6, 5)]
    );
    assert_eq!(
        board.ladders(),
        &[
            LinkPair::new(11, 12),
            LinkPair::new(13, 14),
            LinkPair::new(15, 16)
        ]
    );

    // Snake heads are the high ends, regardless of pair order.
    assert!(board.square(9).is_snake_head());
    assert!(board.square(7).is_snake_head());
    assert!(board.square(6).is_snake_head());
    assert_eq!(board.square(7).reachable(), &Reachable::Forced(3));

    // Ladder feet are the low ends.
    for foot in [11, 13, 15] {
        assert!(board.square(foot).is_ladder_foot());
    }

    // Three dropped snake pairs plus one transposition notice.
    assert_eq!(log.warnings.len(), 4);
    assert!(log
        .warnings
        .contains(&BoardWarning::LinksTransposed {
            name: LinkSet::Ladders
        }));
}

/// Wholesale-unusable link lists are replaced with empty sets.
#[test]
fn test_unusable_link_lists() {
    let config = BoardConfig::new(10)
        .with_snakes(RawLinks::Scalars(vec![1, 2, 3, 4]))
        .with_ladders(RawLinks::Text("Ladder List".to_string()));
    let (board, log) = build(&config);

    assert!(board.snakes().is_empty());
    assert!(board.ladders().is_empty());
    assert_eq!(log.warnings.len(), 2);
    assert!(log.warnings.iter().all(|w| matches!(
        w,
        BoardWarning::LinksReplaced {
            problem: ShapeProblem::NotPairs,
            ..
        }
    )));
}

/// Absent link lists are quietly empty; no warnings.
#[test]
fn test_absent_links_are_silent() {
    let config = BoardConfig::new(10)
        .with_snakes(RawLinks::Absent)
        .with_ladders(RawLinks::Rows(vec![]));
    let (board, log) = build(&config);

    assert!(board.snakes().is_empty());
    assert!(board.ladders().is_empty());
    assert!(!log.has_warnings());
}

/// The final square never carries a trigger, whatever the input says.
#[test]
fn test_final_square_never_a_trigger() {
    let config = BoardConfig::new(10)
        .with_snakes(RawLinks::pairs([(10, 2)]))
        .with_ladders(RawLinks::pairs([(4, 10)]));
    let (board, log) = build(&config);

    let last = board.square(10);
    assert!(!last.is_snake_head());
    assert!(!last.is_ladder_foot());
    assert!(last.reachable().is_terminal());

    // The ladder to 10 is fine: 10 is its target, 4 its trigger.
    assert_eq!(board.square(4).reachable(), &Reachable::Forced(10));
    assert_eq!(
        log.warnings,
        vec![BoardWarning::LinkOnLastSquare {
            kind: LinkKind::Snake,
        }]
    );
}

/// Near-end reachability per policy, on a 10-square board.
#[test]
fn test_near_end_windows() {
    let (classic, _) = build(&BoardConfig::new(10).with_overflow("classic"));
    let (rollback, _) = build(&BoardConfig::new(10).with_overflow("rollback"));
    let (ignore, _) = build(&BoardConfig::new(10).with_overflow("ignore"));

    for s in 5..=9 {
        assert_eq!(classic.square(s).reachable(), &Reachable::span(s + 1, s + 6));
        assert_eq!(ignore.square(s).reachable(), &Reachable::span(s + 1, s + 6));
        assert_eq!(rollback.square(s).reachable(), &Reachable::span(5, 10));
    }
}

/// A whole configuration loads from loosely-typed JSON.
#[test]
fn test_board_from_json_config() {
    let config: BoardConfig = serde_json::from_str(
        r#"{
            "square_count": 12,
            "snakes": [[10, 3], [0, 5]],
            "ladders": "not a list",
            "overflow": "ROLLBACK"
        }"#,
    )
    .unwrap();
    let (board, log) = build(&config);

    assert_eq!(board.square_count(), 12);
    assert_eq!(board.policy(), OverflowPolicy::Rollback);
    assert_eq!(board.snakes(), &[LinkPair::new(10, 3)]);
    assert!(board.ladders().is_empty());
    assert_eq!(log.warnings.len(), 2);
}

/// Warnings render as human-readable advisories.
#[test]
fn test_warning_rendering() {
    let (_, log) = build(&BoardConfig::new(0).with_overflow("sideways"));

    let rendered: Vec<String> = log.warnings.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "square count 0 is not a positive integer, using 100".to_string(),
            "overflow policy \"sideways\" is not valid, using classic".to_string(),
        ]
    );
}
