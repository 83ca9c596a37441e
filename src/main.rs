use anyhow::{Context, Result};
use bitfen_core::{Position, STARTING_FEN};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let fen = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let fen = if fen.is_empty() { STARTING_FEN.to_string() } else { fen };

    let position: Position = fen
        .parse()
        .with_context(|| format!("could not parse FEN \"{fen}\""))?;
    info!(side = %position.side_to_move(), "parsed position");

    println!("{position}");
    println!("{}", position.board().pretty());
    Ok(())
}
