//! Drives a [`GameSession`] in real time.
//!
//! The orchestrator owns the session and everything asynchronous around it:
//! WOPR's thinking delay and the commentary tasks. Presentation code feeds
//! it human moves and calls [`Orchestrator::poll`] from its event loop;
//! progress is reported as [`GameEvent`]s.

use crate::commentary::{CommentaryRequest, Commentator, commentate};
use crate::session::{CommentaryTicket, GameSession, SessionError, TurnPhase};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};
use wopr_tictactoe::{GameStatus, Player, Position};

/// Messages sent from the orchestrator to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A fresh game started.
    NewGame,
    /// A mark was placed.
    MoveMade {
        /// Who moved.
        player: Player,
        /// Where.
        position: Position,
    },
    /// WOPR is thinking about its reply.
    OpponentThinking,
    /// A commentary line was added to the console.
    Commentary(String),
    /// The game ended. Sent once per game.
    GameOver(GameStatus),
}

#[derive(Debug)]
struct CommentaryReply {
    ticket: CommentaryTicket,
    line: String,
}

/// Runs games between a human and WOPR.
pub struct Orchestrator {
    session: GameSession,
    commentator: Arc<dyn Commentator>,
    opponent_delay: Duration,
    commentary_timeout: Duration,
    opponent_due: Option<Instant>,
    in_flight: Vec<JoinHandle<()>>,
    reply_tx: mpsc::UnboundedSender<CommentaryReply>,
    reply_rx: mpsc::UnboundedReceiver<CommentaryReply>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates an orchestrator with a fresh session.
    #[instrument(skip(commentator, event_tx), fields(commentator = commentator.name()))]
    pub fn new(
        commentator: Arc<dyn Commentator>,
        opponent_delay: Duration,
        commentary_timeout: Duration,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        let (reply_tx, reply_rx) = mpsc::unbounded_channel();
        Self {
            session: GameSession::new(),
            commentator,
            opponent_delay,
            commentary_timeout,
            opponent_due: None,
            in_flight: Vec::new(),
            reply_tx,
            reply_rx,
            event_tx,
        }
    }

    /// The current game.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// When WOPR will move, if it is thinking.
    pub fn opponent_due(&self) -> Option<Instant> {
        self.opponent_due
    }

    /// Abandons the current game and starts another.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.cancel_commentary();
        self.opponent_due = None;
        self.session.reset();
        self.emit(GameEvent::NewGame);
    }

    /// Plays the human's move and, if the game goes on, starts WOPR thinking.
    #[instrument(skip(self, now))]
    pub fn human_move(
        &mut self,
        position: Position,
        now: Instant,
    ) -> Result<TurnPhase, SessionError> {
        // Lines that already arrived belong to the board the human just saw.
        self.apply_commentary();

        let phase = self.session.play_human(position)?;
        self.cancel_commentary();
        self.emit(GameEvent::MoveMade {
            player: self.session.human(),
            position,
        });

        match phase {
            TurnPhase::AwaitingOpponent => {
                self.opponent_due = Some(now + self.opponent_delay);
                self.emit(GameEvent::OpponentThinking);
            }
            TurnPhase::GameOver => self.finish(),
            TurnPhase::AwaitingHuman => {}
        }
        Ok(phase)
    }

    /// Applies arrived commentary and lets WOPR move once its delay has passed.
    pub fn poll(&mut self, now: Instant) {
        self.apply_commentary();
        if let Some(due) = self.opponent_due
            && now >= due
        {
            self.opponent_move();
        }
    }

    /// Sleeps until WOPR's move is due, then plays it.
    pub async fn wait_for_opponent(&mut self) {
        if let Some(due) = self.opponent_due {
            tokio::time::sleep_until(tokio::time::Instant::from_std(due)).await;
            self.poll(Instant::now());
        }
    }

    /// Plays WOPR's move immediately, if it is WOPR's turn.
    #[instrument(skip(self))]
    pub fn opponent_move(&mut self) -> Option<Position> {
        self.opponent_due = None;
        let selection = self.session.play_opponent()?;
        let position = selection.position;
        self.emit(GameEvent::MoveMade {
            player: self.session.opponent(),
            position,
        });

        if self.session.phase() == TurnPhase::GameOver {
            self.finish();
        } else {
            let request = CommentaryRequest::for_move(
                self.session.board().clone(),
                self.session.opponent(),
                position,
                self.session.last_human_move(),
                self.session.recent_messages(),
            );
            self.request_commentary(request);
        }
        Some(position)
    }

    /// Moves arrived commentary into the session, dropping stale lines.
    ///
    /// Returns how many lines were kept.
    pub fn apply_commentary(&mut self) -> usize {
        let mut kept = 0;
        while let Ok(reply) = self.reply_rx.try_recv() {
            if self.session.accept_commentary(reply.ticket, reply.line.clone()) {
                self.emit(GameEvent::Commentary(reply.line));
                kept += 1;
            }
        }
        kept
    }

    /// Waits for every in-flight commentary request, then applies the replies.
    pub async fn settle(&mut self) -> usize {
        for handle in std::mem::take(&mut self.in_flight) {
            if let Err(e) = handle.await {
                debug!(error = %e, "Commentary task ended without a reply");
            }
        }
        self.apply_commentary()
    }

    fn finish(&mut self) {
        let Some(status) = self.session.announce_end() else {
            return;
        };
        self.emit(GameEvent::GameOver(status));
        let request = CommentaryRequest::for_end(
            self.session.board().clone(),
            self.session.opponent(),
            status,
            self.session.recent_messages(),
        );
        self.request_commentary(request);
    }

    fn request_commentary(&mut self, request: CommentaryRequest) {
        let ticket = self.session.ticket();
        let commentator = Arc::clone(&self.commentator);
        let reply_tx = self.reply_tx.clone();
        let timeout = self.commentary_timeout;

        self.in_flight.retain(|handle| !handle.is_finished());
        self.in_flight.push(tokio::spawn(async move {
            let line = commentate(commentator.as_ref(), &request, timeout).await;
            if reply_tx.send(CommentaryReply { ticket, line }).is_err() {
                debug!("Orchestrator gone before commentary arrived");
            }
        }));
        debug!(?ticket, in_flight = self.in_flight.len(), "Commentary requested");
    }

    fn cancel_commentary(&mut self) {
        let cancelled = self.in_flight.len();
        for handle in self.in_flight.drain(..) {
            handle.abort();
        }
        while self.reply_rx.try_recv().is_ok() {}
        if cancelled > 0 {
            info!(cancelled, "Cancelled in-flight commentary");
        }
    }

    fn emit(&self, event: GameEvent) {
        if self.event_tx.send(event).is_err() {
            debug!("Event receiver dropped");
        }
    }
}

impl Drop for Orchestrator {
    fn drop(&mut self) {
        for handle in &self.in_flight {
            handle.abort();
        }
    }
}
