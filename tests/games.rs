use benchwarmer::chess_boards::perft::perft;
use benchwarmer::engines::SearchConfig;
use benchwarmer::game::{play_game, EndReason, GameOptions};
use benchwarmer::players::{CapturePlayer, CheckmateCapturePlayer, MinimaxPlayer, PlayerKind, RandomPlayer};
use benchwarmer::{ChessBoard, Team};

fn limited(max_turns: u32) -> GameOptions {
    GameOptions {
        max_turns: Some(max_turns),
        ..GameOptions::default()
    }
}

#[test]
fn seeded_random_games_repeat() {
    let play = || {
        let mut white = RandomPlayer::with_seed(Team::White, 5);
        let mut black = RandomPlayer::with_seed(Team::Black, 6);
        play_game(ChessBoard::new(), &mut white, &mut black, &limited(300)).unwrap()
    };
    assert_eq!(play(), play());
}

#[test]
fn outcomes_agree_with_the_final_board() {
    for seed in 0..10 {
        let mut white = CapturePlayer::with_seed(Team::White, seed);
        let mut black = CheckmateCapturePlayer::with_seed(Team::Black, seed + 100);
        let outcome = play_game(ChessBoard::new(), &mut white, &mut black, &limited(400)).unwrap();

        assert_eq!(outcome.winner, outcome.board.winner());
        match outcome.reason {
            EndReason::KingCaptured => {
                assert_ne!(outcome.winner, Team::None);
                assert_eq!(outcome.board.find_king_position(outcome.winner.opposite()), None);
            }
            EndReason::TurnLimit => assert_eq!(outcome.turns, 400),
            EndReason::NoLegalMoves => assert!(outcome.board.legal_moves().is_empty()),
        }
        let expected_to_move = if outcome.turns % 2 == 0 { Team::White } else { Team::Black };
        assert_eq!(outcome.board.active_team(), expected_to_move);
    }
}

#[test]
fn minimax_wins_the_queen_in_a_game() {
    let board = ChessBoard::from_fen("k7/8/8/8/3q4/8/8/K2R4 w").unwrap();
    let mut white = MinimaxPlayer::new(Team::White, SearchConfig::default());
    let mut black = RandomPlayer::with_seed(Team::Black, 3);
    let outcome = play_game(board, &mut white, &mut black, &limited(1)).unwrap();
    assert_eq!(outcome.reason, EndReason::TurnLimit);
    assert_eq!(outcome.board.to_fen(), "k7/8/8/8/3R4/8/8/K7 b");
}

#[test]
fn boxed_players_play_custom_positions() {
    let board = ChessBoard::from_fen("4k3/2x5/8/3m4/8/1M6/5X2/4K3 w").unwrap();
    let config = SearchConfig::with_depth(2);
    let mut white = PlayerKind::Checkmate.build(Team::White, Some(1), config, false);
    let mut black = PlayerKind::Minimax.build(Team::Black, None, config, false);
    let outcome = play_game(board, white.as_mut(), black.as_mut(), &limited(100)).unwrap();
    assert!(outcome.turns <= 100);
    assert_eq!(outcome.winner, outcome.board.winner());
}

#[test]
fn diagram_and_notation_describe_the_same_board() {
    let board = ChessBoard::from_fen("4k3/2x5/8/3m4/8/1M6/5X2/4K3 w").unwrap();
    assert_eq!(ChessBoard::from_diagram(&board.to_diagram()).unwrap(), board);
    assert_eq!(ChessBoard::from_fen(&board.to_fen()).unwrap(), board);
    assert_eq!(perft(&ChessBoard::new(), 2), 144);
}
