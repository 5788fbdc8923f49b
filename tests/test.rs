use chess_core::{Board, Color, GameStatus, Move};
use proptest::prelude::*;

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn play(board: &mut Board, moves: &[&str]) {
    for text in moves {
        let mv: Move = text.parse().expect("well-formed coordinate notation");
        board.make_move(mv).expect("legal move in the scripted sequence");
    }
}

#[test]
fn fen_round_trips_for_start_and_empty_board() {
    let board: Board = START_FEN.parse().unwrap();
    assert_eq!(board.to_fen(), START_FEN);

    let empty = Board::empty();
    assert_eq!(empty.to_fen(), "8/8/8/8/8/8/8/8 w - - 0 1");
}

#[test]
fn move_notation_round_trips_including_promotion() {
    for text in ["e2e4", "g8f6", "a7a8q", "h2h1n"] {
        let mv: Move = text.parse().unwrap();
        assert_eq!(mv.to_string(), text);
    }
}

#[test]
fn scenario_fools_mate() {
    let mut board: Board = START_FEN.parse().unwrap();
    play(&mut board, &["f2f3", "e7e5", "g2g4", "d8h4"]);

    assert_eq!(board.status(), GameStatus::Checkmate);
    assert_eq!(board.winner(), Some(Color::Black));
    assert_eq!(board.active_color, Color::White);
}

#[test]
fn scenario_threefold_repetition() {
    let mut board: Board = START_FEN.parse().unwrap();
    play(
        &mut board,
        &["g1f3", "g8f6", "f3g1", "f6g8", "g1f3", "g8f6", "f3g1", "f6g8"],
    );

    assert_eq!(board.status(), GameStatus::ThreefoldRepetition);
    assert!(board.can_claim_draw());
    assert!(!board.is_game_over());
}

#[test]
fn scenario_fivefold_repetition() {
    let mut board: Board = START_FEN.parse().unwrap();
    let round_trip = ["g1f3", "g8f6", "f3g1", "f6g8"];
    for _ in 0..4 {
        play(&mut board, &round_trip);
    }

    assert_eq!(board.status(), GameStatus::FivefoldRepetition);
    assert!(board.is_game_over());
}

#[test]
fn scenario_en_passant_capture() {
    let mut board: Board = START_FEN.parse().unwrap();
    play(&mut board, &["e2e4", "a7a6", "e4e5", "d7d5", "e5d6"]);

    assert_eq!(board.piece_on("d5".parse().unwrap()), None);
    assert_eq!(board.hash, board.compute_hash());
}

#[test]
fn scenario_kingside_castle_white() {
    // Starting position with f1 and g1 emptied (bishop and knight moved away earlier).
    let mut board: Board = "rnbqk1nr/pppp1ppp/4p3/8/8/4PN2/PPPPBPPP/RNBQK2R w KQkq - 2 3"
        .parse()
        .unwrap();
    board.make_move("e1g1".parse().unwrap()).unwrap();

    assert_eq!(board.piece_on("g1".parse().unwrap()), Some(chess_core::Piece::WK));
    assert_eq!(board.piece_on("f1".parse().unwrap()), Some(chess_core::Piece::WR));
    assert!(!board.castling_rights.has_kingside(Color::White));
    assert!(!board.castling_rights.has_queenside(Color::White));
    assert_eq!(board.hash, board.compute_hash());
}

#[test]
fn scenario_pinned_piece_cannot_move() {
    let board: Board = "4r2k/8/8/8/8/8/4B3/4K3 w - - 0 1".parse().unwrap();
    let pinned_move: Move = "e2d3".parse().unwrap();
    assert!(!board.is_legal_move(pinned_move));
    assert!(board.legal_moves().iter().all(|m| m.from != "e2".parse().unwrap()));
}

#[test]
fn perft_anchors() {
    let cases: &[(&str, &[u64])] = &[
        (START_FEN, &[20, 400, 8902, 197281]),
        (
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            &[48, 2039, 97862, 4085603],
        ),
        ("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", &[14, 191, 2812]),
        (
            "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
            &[6, 264, 9467],
        ),
        (
            "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
            &[44, 1486, 62379],
        ),
        (
            "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
            &[46, 2079, 89890],
        ),
    ];

    for (fen, expected) in cases {
        let board: Board = fen.parse().unwrap();
        for (index, &count) in expected.iter().enumerate() {
            let depth = (index + 1) as u32;
            assert_eq!(board.perft(depth), count, "fen {fen} depth {depth}");
        }
    }
}

#[test]
fn perft_start_depth_four_matches_the_well_known_count() {
    let board: Board = START_FEN.parse().unwrap();
    assert_eq!(board.perft(4), 197_281);
}

fn random_legal_move(board: &Board, seed: u64) -> Option<Move> {
    let moves = board.legal_moves();
    if moves.is_empty() {
        None
    } else {
        Some(moves[(seed as usize) % moves.len()])
    }
}

proptest! {
    /// `copy(B).apply(m)` never mutates `B` itself, for a handful of legal moves drawn
    /// from positions reached by short random playouts from the start.
    #[test]
    fn applying_a_move_to_a_copy_does_not_mutate_the_original(seed in 0u64..10_000) {
        let mut board: Board = START_FEN.parse().unwrap();
        let mut rng = seed;
        for _ in 0..6 {
            rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1);
            let Some(mv) = random_legal_move(&board, rng) else { break };
            board.make_move(mv).unwrap();
        }

        let before = board.clone();
        if let Some(mv) = random_legal_move(&board, rng.wrapping_add(7)) {
            let mut scratch = board.copy();
            scratch.make_move(mv).unwrap();
            prop_assert_eq!(&board, &before);
        }
    }

    /// After every applied move along a short random playout, the incrementally
    /// maintained hash equals a full recomputation, and the history invariant holds.
    #[test]
    fn hash_and_history_invariants_hold_along_random_playouts(seed in 0u64..10_000) {
        let mut board: Board = START_FEN.parse().unwrap();
        let mut rng = seed;
        for _ in 0..12 {
            rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1);
            let Some(mv) = random_legal_move(&board, rng) else { break };
            let color_before = board.active_color;
            board.make_move(mv).unwrap();

            prop_assert_eq!(board.hash, board.compute_hash());
            prop_assert_eq!(board.history.last().copied(), Some(board.hash));
            prop_assert_ne!(board.active_color, color_before);
            prop_assert!(board.halfmove_clock <= 255);
        }
    }

    /// FEN emitted by the board always parses back to a board with the same FEN.
    #[test]
    fn fen_emitted_by_random_playouts_round_trips(seed in 0u64..10_000) {
        let mut board: Board = START_FEN.parse().unwrap();
        let mut rng = seed;
        for _ in 0..8 {
            rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1);
            let Some(mv) = random_legal_move(&board, rng) else { break };
            board.make_move(mv).unwrap();
        }

        let fen = board.to_fen();
        let reparsed: Board = fen.parse().unwrap();
        prop_assert_eq!(reparsed.to_fen(), fen);
    }

    /// Coordinate notation for every legally generated move (including promotions)
    /// round-trips through parse.
    #[test]
    fn legal_move_notation_round_trips(seed in 0u64..2_000) {
        let _ = seed;
        let board: Board = "8/P6k/8/8/8/8/7p/K7 w - - 0 1".parse().unwrap();
        for mv in board.legal_moves() {
            let text = mv.to_string();
            let parsed: Move = text.parse().unwrap();
            prop_assert_eq!(parsed, mv);
        }
    }
}
