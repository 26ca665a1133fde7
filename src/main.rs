use std::fs;
use std::io::{stdout, Write};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{arg, command, value_parser, ArgMatches, Command};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use benchwarmer::chess_boards::chess_board::fen::INITIAL_POSITION;
use benchwarmer::chess_boards::chess_board::{ChessBoard, Move};
use benchwarmer::chess_boards::perft::perft_divide;
use benchwarmer::engines::engine_alpha_beta::AlphaBetaEngine;
use benchwarmer::engines::engine_minmax::MinimaxEngine;
use benchwarmer::engines::{SearchConfig, SearchEngine, DEFAULT_SEARCH_DEPTH};
use benchwarmer::game::{play_game, GameOptions};
use benchwarmer::players::PlayerKind;
use benchwarmer::tournament::{play_tournament, TournamentConfig};
use benchwarmer::Team;

const BENCHMARK_POSITION: &str = "r3k3/1p3p2/2n1b3/3p4/2B1P3/5N2/P4PP1/3RK2R w";

fn position_args(command: Command) -> Command {
    command
        .arg(arg!(-p --position <POSITION> "Board position in compact notation").default_value(INITIAL_POSITION))
        .arg(arg!(--diagram <FILE> "Read the board from a diagram file instead"))
        .arg(
            arg!(--side <SIDE> "Side to move on a board read with --diagram")
                .default_value("w")
                .value_parser(["w", "b"]),
        )
}

fn main() -> Result<()> {
    let matches = command!()
        .version("v0.1.0")
        .propagate_version(true)
        .arg(arg!(
            -d --debug "Turn debugging information on"
        ))
        .subcommand(position_args(
            Command::new("play")
                .about("Play a game")
                .arg(
                    arg!(--white <KIND> "White player: human, random, capture, checkmate or minimax")
                        .default_value("human")
                        .value_parser(value_parser!(PlayerKind)),
                )
                .arg(
                    arg!(--black <KIND> "Black player: human, random, capture, checkmate or minimax")
                        .default_value("minimax")
                        .value_parser(value_parser!(PlayerKind)),
                )
                .arg(
                    arg!(-x --depth <d> "Search depth of minimax players")
                        .default_value("4")
                        .value_parser(value_parser!(u32)),
                )
                .arg(arg!(--seed <SEED> "Seed for the randomized players").value_parser(value_parser!(u64)))
                .arg(arg!(--"max-turns" <N> "Stop after this many half-turns").value_parser(value_parser!(u32)))
                .arg(arg!(-q --quiet "Only print the result"))
                .arg(arg!(--boxed "Draw the board as a boxed grid")),
        ))
        .subcommand(
            Command::new("tournament")
                .about("Play many games between two automated players")
                .arg(
                    arg!(--white <KIND> "White player")
                        .default_value("minimax")
                        .value_parser(value_parser!(PlayerKind)),
                )
                .arg(
                    arg!(--black <KIND> "Black player")
                        .default_value("checkmate")
                        .value_parser(value_parser!(PlayerKind)),
                )
                .arg(
                    arg!(-n --games <N> "Number of games")
                        .default_value("100")
                        .value_parser(value_parser!(u32)),
                )
                .arg(
                    arg!(-x --depth <d> "Search depth of minimax players")
                        .default_value("4")
                        .value_parser(value_parser!(u32)),
                )
                .arg(arg!(--seed <SEED> "Base seed for the randomized players").value_parser(value_parser!(u64)))
                .arg(
                    arg!(--"max-turns" <N> "Half-turns after which a game counts as unfinished")
                        .default_value("500")
                        .value_parser(value_parser!(u32)),
                ),
        )
        .subcommand(
            Command::new("benchmark")
                .about("Runs a benchmark")
                .arg(arg!(-p --position <POSITION> "Board position").default_value(BENCHMARK_POSITION))
                .arg(
                    arg!(-x --"max-depth" <d> "Deepest search to time")
                        .default_value("5")
                        .value_parser(value_parser!(u32)),
                ),
        )
        .subcommand(position_args(
            Command::new("perft")
                .about("Run Perft test")
                .arg(
                    arg!(
                    -x --depth <d> "depth"
                            )
                    .default_value("3")
                    .value_parser(value_parser!(u8)),
                )
                .arg(
                    arg!(
                    -m --moves <moves> "List of moves"
                            )
                    .num_args(1..)
                    .value_parser(value_parser!(String)),
                ),
        ))
        .subcommand(position_args(Command::new("show").about("Print a position as a diagram")))
        .get_matches();

    let debug = matches.get_flag("debug");

    match matches.subcommand() {
        Some(("play", arg_matches)) => play(arg_matches, debug),
        Some(("tournament", arg_matches)) => tournament(arg_matches, debug),
        Some(("benchmark", arg_matches)) => {
            let position = arg_matches.get_one::<String>("position").context("missing position")?;
            let max_depth = *arg_matches.get_one::<u32>("max-depth").unwrap_or(&5);
            benchmark(position, max_depth)
        }
        Some(("perft", arg_matches)) => {
            let board = load_board(arg_matches)?;
            let depth = *arg_matches.get_one::<u8>("depth").unwrap_or(&3);
            let moves = arg_matches
                .get_many::<String>("moves")
                .unwrap_or_default()
                .filter(|&v| !v.is_empty())
                .collect::<Vec<_>>();
            perft(board, moves, depth)
        }
        Some(("show", arg_matches)) => {
            let board = load_board(arg_matches)?;
            let mut out = stdout().lock();
            board.write_diagram(&mut out)?;
            writeln!(out, "{} to move: {}", board.active_team(), board.to_fen())?;
            Ok(())
        }
        None => play_default(debug),
        _ => unreachable!("Exhausted list of subcommands"),
    }
}

fn load_board(arg_matches: &ArgMatches) -> Result<ChessBoard> {
    if let Some(path) = arg_matches.get_one::<String>("diagram") {
        let bytes = fs::read(path).with_context(|| format!("could not read diagram {}", path))?;
        let mut board =
            ChessBoard::from_diagram_bytes(&bytes).with_context(|| format!("could not parse diagram {}", path))?;
        if arg_matches.get_one::<String>("side").is_some_and(|side| side == "b") {
            board.set_active_team(Team::Black);
        }
        return Ok(board);
    }
    let position = arg_matches.get_one::<String>("position").context("missing position")?;
    ChessBoard::from_fen(position).with_context(|| format!("could not parse position {:?}", position))
}

fn play_default(debug: bool) -> Result<()> {
    let config = SearchConfig::default();
    let mut white = PlayerKind::Human.build(Team::White, None, config, debug);
    let mut black = PlayerKind::Minimax.build(Team::Black, None, config, debug);
    let options = GameOptions {
        verbose: true,
        boxed_board: true,
        debug,
        ..GameOptions::default()
    };
    play_game(ChessBoard::new(), white.as_mut(), black.as_mut(), &options)?;
    Ok(())
}

fn play(arg_matches: &ArgMatches, debug: bool) -> Result<()> {
    let board = load_board(arg_matches)?;
    let white_kind = *arg_matches.get_one::<PlayerKind>("white").unwrap_or(&PlayerKind::Human);
    let black_kind = *arg_matches.get_one::<PlayerKind>("black").unwrap_or(&PlayerKind::Minimax);
    let depth = *arg_matches.get_one::<u32>("depth").unwrap_or(&DEFAULT_SEARCH_DEPTH);
    let seed = arg_matches.get_one::<u64>("seed").copied();
    let quiet = arg_matches.get_flag("quiet");

    let config = SearchConfig::with_depth(depth);
    let mut white = white_kind.build(Team::White, seed, config, debug);
    let mut black = black_kind.build(Team::Black, seed.map(|s| s.wrapping_add(1)), config, debug);
    let options = GameOptions {
        max_turns: arg_matches.get_one::<u32>("max-turns").copied(),
        verbose: !quiet,
        boxed_board: arg_matches.get_flag("boxed"),
        debug,
    };

    let outcome = play_game(board, white.as_mut(), black.as_mut(), &options)?;
    if quiet {
        println!("{:?}: {} won after {} turns", outcome.reason, outcome.winner, outcome.turns);
    }
    Ok(())
}

#[derive(Tabled)]
struct TournamentRow {
    white: String,
    black: String,
    games: u32,
    white_wins: u32,
    black_wins: u32,
    unfinished: u32,
    average_turns: f32,
    elapsed_time: f32,
}

fn tournament(arg_matches: &ArgMatches, debug: bool) -> Result<()> {
    let config = TournamentConfig {
        white: *arg_matches.get_one::<PlayerKind>("white").unwrap_or(&PlayerKind::Minimax),
        black: *arg_matches.get_one::<PlayerKind>("black").unwrap_or(&PlayerKind::Checkmate),
        games: *arg_matches.get_one::<u32>("games").unwrap_or(&100),
        seed: arg_matches.get_one::<u64>("seed").copied(),
        search: SearchConfig::with_depth(*arg_matches.get_one::<u32>("depth").unwrap_or(&DEFAULT_SEARCH_DEPTH)),
        max_turns: arg_matches.get_one::<u32>("max-turns").copied(),
    };
    if config.white.is_interactive() || config.black.is_interactive() {
        bail!("a tournament needs two automated players");
    }

    let start_time = Instant::now();
    let result = play_tournament(&config, debug)?;
    let row = TournamentRow {
        white: config.white.to_string(),
        black: config.black.to_string(),
        games: result.games(),
        white_wins: result.white_wins,
        black_wins: result.black_wins,
        unfinished: result.unfinished,
        average_turns: result.total_turns as f32 / result.games().max(1) as f32,
        elapsed_time: start_time.elapsed().as_secs_f32(),
    };
    println!("{}", Table::new(vec![row]).with(Style::modern()));
    Ok(())
}

#[derive(Tabled)]
struct BenchmarkRow {
    engine: String,
    ply: u32,
    score: i32,
    node_count: u64,
    elapsed_time: f32,
    move_per_sec: f32,
    best_move: String,
}

fn benchmark(position: &str, max_depth: u32) -> Result<()> {
    let chess_board = ChessBoard::from_fen(position).with_context(|| format!("invalid position {:?}", position))?;
    let mut table_rows = Vec::new();
    'depths: for d in 1..=max_depth {
        let config = SearchConfig::with_depth(d);
        let engines: [Box<dyn SearchEngine>; 2] =
            [Box::new(AlphaBetaEngine::new(config)), Box::new(MinimaxEngine::new(config))];
        for engine in engines {
            let start_time = Instant::now();
            if let Some((m, score, node_count)) = engine.find_best_move(&chess_board) {
                let elapsed = start_time.elapsed();
                table_rows.push(BenchmarkRow {
                    engine: engine.name().to_string(),
                    ply: d,
                    score,
                    node_count,
                    elapsed_time: elapsed.as_secs_f32(),
                    move_per_sec: node_count as f32 / elapsed.as_secs_f32() / 1000f32,
                    best_move: m.as_algebraic(),
                });
                if elapsed.as_secs() > 10 {
                    break 'depths;
                }
            } else {
                println!("No best move found!");
            }
        }
    }
    println!("{}", Table::new(table_rows).with(Style::modern()));
    Ok(())
}

fn perft(mut chess_board: ChessBoard, moves: Vec<&String>, depth: u8) -> Result<()> {
    println!("Perft test for {} moves {:?} with depth {}", chess_board.to_fen(), moves, depth);
    for m in moves {
        let mv: Move = m.parse().with_context(|| format!("Invalid move: {}", m))?;
        if !chess_board.legal_moves().contains(&mv) {
            bail!("Invalid move: {}", m);
        }
        chess_board.make_move(mv);
    }

    let mut num_nodes = 0;
    for (m, c) in perft_divide(&chess_board, depth) {
        println!("{}: {}", m, c);
        num_nodes += c;
    }
    println!("\nNodes searched: {}", num_nodes);
    Ok(())
}
