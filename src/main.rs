//! gridmatch - Demo Entry Point
//!
//! Scans a sample board, resolves one pass and prints the receipt.
//! Refill and cascades belong to the host game loop and are not shown here.

use std::process::ExitCode;

use gridmatch::{Board, MatchEngine};

const SAMPLE_BOARD: &str = "
    RGBBBY
    RGYGRY
    RYGRGY
    BGRYBG
    GBYRYB
";

fn main() -> ExitCode {
    println!("===========================================");
    println!("  gridmatch - match-3 engine demo");
    println!("===========================================");
    println!();

    let mut board: Board = match SAMPLE_BOARD.parse() {
        Ok(board) => board,
        Err(e) => {
            eprintln!("  ERROR: invalid sample board: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let engine = MatchEngine::new();

    println!("Board ({}x{}):", board.width(), board.height());
    println!("{}", indent(&board.to_string()));
    println!();

    println!("Detection:");
    println!("  Horizontal match: {}", engine.has_horizontal_match(&board));
    println!("  Vertical match:   {}", engine.has_vertical_match(&board));
    println!();

    let before = board.compute_state_root();
    let receipt = engine.resolve(&mut board);

    println!("After resolve:");
    println!("{}", indent(&board.to_string()));
    println!();
    println!("Receipt:");
    println!("  Horizontal cleared: {}", receipt.horizontal_cleared);
    println!("  Vertical cleared:   {}", receipt.vertical_cleared);
    println!("  Total cleared:      {}", receipt.total_cleared());
    println!("  State root before:  {}", hex::encode(before));
    println!("  State root after:   {}", receipt.state_root_hex());

    match ssz_rs::serialize(&receipt) {
        Ok(bytes) => println!("  Encoded receipt:    {} bytes", bytes.len()),
        Err(e) => {
            eprintln!("  ERROR: failed to serialize receipt: {:?}", e);
            return ExitCode::FAILURE;
        }
    }

    println!();
    if engine.has_horizontal_match(&board) || engine.has_vertical_match(&board) {
        println!("Board still has matches; the game loop would resolve again.");
    } else {
        println!("Board is stable; the game loop would now refill empty cells.");
    }

    ExitCode::SUCCESS
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}
