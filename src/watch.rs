//! Self-play mode: WOPR's heuristic plays both sides.

use anyhow::Result;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{info, instrument};
use wopr::{Commentator, GameEvent, Orchestrator, TurnPhase, WoprConfig};
use wopr_tictactoe::choose_move;

/// Plays `games` games and prints moves and commentary to stdout.
#[instrument(skip(config, commentator), fields(commentator = commentator.name()))]
pub async fn run(config: &WoprConfig, commentator: Arc<dyn Commentator>, games: u32) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut orchestrator = Orchestrator::new(
        commentator,
        config.opponent_delay(),
        config.commentary_timeout(),
        event_tx,
    );

    for game in 1..=games {
        if game > 1 {
            orchestrator.new_game();
        }
        info!(game, "Watching game");
        println!("=== Game {game} ===");
        println!("> {}", wopr::GREETING);

        while orchestrator.session().phase() != TurnPhase::GameOver {
            let session = orchestrator.session();
            let position = choose_move(session.board(), session.human())
                .ok_or_else(|| anyhow::anyhow!("No move on an unfinished board"))?;
            if orchestrator.human_move(position, Instant::now())? == TurnPhase::AwaitingOpponent {
                orchestrator.wait_for_opponent().await;
            }
            orchestrator.settle().await;
            print_events(&mut event_rx);
            println!("{}\n", orchestrator.session().board());
        }
    }

    Ok(())
}

fn print_events(event_rx: &mut mpsc::UnboundedReceiver<GameEvent>) {
    while let Ok(event) = event_rx.try_recv() {
        match event {
            GameEvent::MoveMade { player, position } => println!("{player} plays {position}"),
            GameEvent::Commentary(line) => println!("> {line}"),
            GameEvent::GameOver(status) => println!("{status}"),
            GameEvent::NewGame | GameEvent::OpponentThinking => {}
        }
    }
}
