//! Prompt construction for generated commentary.

use super::{CommentaryPhase, CommentaryRequest};
use wopr_tictactoe::{GameStatus, Player};

/// Persona and style rules sent as the system prompt.
pub fn system_prompt(mover: Player) -> String {
    format!(
        "You are WOPR, the cold-war era military computer from the 1983 film WarGames, \
         playing tic-tac-toe against a human. You play {mover}; the human plays {}. \
         STYLE: One short sentence. Terse, dry, analytical, occasionally sardonic. No emojis. \
         REFERENCING MOVES: Never use coordinates. Say top-left, top, top-right, left, \
         center, right, bottom-left, bottom or bottom-right. \
         COHESION: Keep continuity with your earlier lines and do not repeat their phrasing. \
         ATTITUDE: Confident, not cocky. You are a computer with nothing to prove. \
         Acknowledge when victory is impossible.",
        mover.opponent()
    )
}

/// The user prompt: board rows, what happened and the dialogue so far.
pub fn user_prompt(request: &CommentaryRequest) -> String {
    let mover = *request.mover();
    let human = mover.opponent();
    let board = request.board();

    let task = match request.phase() {
        CommentaryPhase::Move {
            chosen,
            last_human_move,
        } => {
            let human_move = last_human_move.map(|p| p.name()).unwrap_or("unknown");
            format!(
                "Human ({human}) last move: {human_move}. Your chosen move ({mover}): {}. \
                 Respond with one short sentence acknowledging the human's move and \
                 motivating yours.",
                chosen.name()
            )
        }
        CommentaryPhase::End { status } => {
            let result = match status {
                GameStatus::Won(player) => player.to_string(),
                GameStatus::Draw => "Draw".to_string(),
                GameStatus::InProgress => "Unknown".to_string(),
            };
            format!(
                "Game over. Winner: {result}. \
                 Respond with one short closing sentence to the human."
            )
        }
    };

    let mut sections = Vec::new();
    let transcript = transcript(request.history());
    if !transcript.is_empty() {
        sections.push(format!("DIALOGUE SO FAR:\n{transcript}"));
    }
    sections.push(format!("Board (rows):\n{board}\n{task}"));
    sections.join("\n\n")
}

fn transcript(history: &[String]) -> String {
    history
        .iter()
        .map(|line| format!("WOPR: {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
