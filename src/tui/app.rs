//! Application state and logic.
//!
//! The app owns the [`Session`] and the active screen. Requests run on
//! spawned tasks; their outcomes come back over a channel and are applied
//! between frames, so the board keeps rendering while the service works.

use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use teeko_client::{
    ClickOutcome, Completion, ControllerError, GameService, Rejection, Request, Response,
    ServiceError, Session, dispatch,
};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use super::screen::{Screen, ScreenAction};
use super::screens::{EntryScreen, GameScreen};

/// Active screen in the client.
#[derive(Debug)]
enum ActiveScreen {
    Entry(EntryScreen),
    Game(GameScreen),
}

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep going.
    Continue,
    /// Leave the client.
    Quit,
}

type Outcome = Result<Response, ServiceError>;

/// Main application state.
pub struct App<S> {
    session: Session,
    service: Arc<S>,
    screen: ActiveScreen,
    message: Option<String>,
    outcome_tx: mpsc::UnboundedSender<Outcome>,
    outcome_rx: mpsc::UnboundedReceiver<Outcome>,
}

impl<S: GameService + 'static> App<S> {
    /// Creates the app on the entry screen.
    pub fn new(service: Arc<S>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            session: Session::new(),
            service,
            screen: ActiveScreen::Entry(EntryScreen::new()),
            message: None,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Renders the active screen.
    pub fn render(&self, frame: &mut Frame) {
        let message = self.message.as_deref();
        match &self.screen {
            ActiveScreen::Entry(screen) => screen.render(frame, &self.session, message),
            ActiveScreen::Game(screen) => screen.render(frame, &self.session, message),
        }
    }

    /// Routes a key press through the active screen.
    #[instrument(skip(self, key))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        let action = match &mut self.screen {
            ActiveScreen::Entry(screen) => screen.handle_key(key),
            ActiveScreen::Game(screen) => screen.handle_key(key),
        };
        self.perform(action)
    }

    /// Applies every response that has arrived since the last frame.
    pub fn drain_outcomes(&mut self) {
        let outcomes: Vec<Outcome> =
            std::iter::from_fn(|| self.outcome_rx.try_recv().ok()).collect();
        for outcome in outcomes {
            self.apply(outcome);
        }
    }

    fn perform(&mut self, action: ScreenAction) -> Flow {
        debug!(action = ?action, "Performing screen action");
        match action {
            ScreenAction::Stay => {}
            ScreenAction::Quit => {
                info!("User quit");
                return Flow::Quit;
            }
            ScreenAction::ChooseDifficulty(difficulty) => {
                let request = self.session.request_difficulty(difficulty);
                self.submit(request);
            }
            ScreenAction::EnterGame => self.enter_game(),
            ScreenAction::Reload => {
                let request = self.session.query_state();
                self.submit(request);
            }
            ScreenAction::ClickCell(coord) => match self.session.click_cell(coord) {
                Ok(ClickOutcome::SourceSelected(source)) => {
                    self.message = Some(format!("Selected {}; choose where to move it.", source));
                }
                Ok(ClickOutcome::Submit(request)) => self.submit(Ok(request)),
                Err(rejection) => self.reject(rejection),
            },
            ScreenAction::AiMove => {
                let request = self.session.request_ai_move();
                self.submit(request);
            }
            ScreenAction::Reset => {
                let request = self.session.request_reset();
                self.submit(request);
            }
            ScreenAction::CancelSelection => {
                self.session.cancel_selection();
                self.message = None;
            }
        }
        Flow::Continue
    }

    fn enter_game(&mut self) {
        info!("Entering game view");
        self.screen = ActiveScreen::Game(GameScreen::new());
        let request = self.session.query_state();
        self.submit(request);
    }

    fn submit(&mut self, request: Result<Request, Rejection>) {
        match request {
            Ok(request) => {
                self.message = None;
                self.spawn(request);
            }
            Err(rejection) => self.reject(rejection),
        }
    }

    fn reject(&mut self, rejection: Rejection) {
        warn!(rejection = %rejection, "Action rejected locally");
        self.message = Some(rejection.to_string());
    }

    fn spawn(&self, request: Request) {
        let service = Arc::clone(&self.service);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = dispatch(service.as_ref(), request).await;
            if tx.send(outcome).is_err() {
                warn!(request = %request, "Client closed before response arrived");
            }
        });
    }

    #[instrument(skip(self, outcome))]
    fn apply(&mut self, outcome: Outcome) {
        match self.session.complete(outcome) {
            Ok(Completion::Loaded) | Ok(Completion::Moved) => {
                self.message = None;
            }
            Ok(Completion::ReturnToEntry) => {
                info!("Returning to entry view");
                self.screen = ActiveScreen::Entry(EntryScreen::new());
                self.message = Some("Game reset. Choose a difficulty to play again.".to_string());
            }
            Ok(Completion::DifficultySet(message)) => {
                self.enter_game();
                self.message = Some(message);
            }
            Err(error @ ControllerError::Service { .. }) => {
                self.message = Some(error.to_string());
            }
            Err(error) => {
                warn!(error = %error, "Unexpected completion");
                self.message = Some(error.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;
    use teeko_client::{
        Board, Coord, Difficulty, DifficultyResponse, GameStateResponse, GameStatus,
        MoveDescriptor, MoveResponse, Piece, Turn,
    };

    /// Service double answering from a script and recording what it was asked.
    #[derive(Default)]
    struct ScriptedService {
        script: Mutex<VecDeque<Result<Response, ServiceError>>>,
        requests: Mutex<Vec<Request>>,
    }

    impl ScriptedService {
        fn new(script: Vec<Result<Response, ServiceError>>) -> Arc<Self> {
            Arc::new(Self {
                script: Mutex::new(script.into()),
                requests: Mutex::default(),
            })
        }

        fn requests(&self) -> Vec<Request> {
            self.requests.lock().expect("lock").clone()
        }

        fn answer(&self, request: Request) -> Result<Response, ServiceError> {
            self.requests.lock().expect("lock").push(request);
            self.script
                .lock()
                .expect("lock")
                .pop_front()
                .unwrap_or_else(|| Err(ServiceError::Transport("script exhausted".to_string())))
        }

        fn answer_move(&self, request: Request) -> Result<MoveResponse, ServiceError> {
            match self.answer(request)? {
                Response::Move(response) => Ok(response),
                other => panic!("scripted {other:?} for {request}"),
            }
        }
    }

    #[async_trait]
    impl GameService for ScriptedService {
        async fn game_state(&self) -> Result<GameStateResponse, ServiceError> {
            match self.answer(Request::QueryState)? {
                Response::State(state) => Ok(state),
                other => panic!("scripted {other:?} for a state query"),
            }
        }

        async fn ai_move(&self) -> Result<MoveResponse, ServiceError> {
            self.answer_move(Request::AiMove)
        }

        async fn opponent_move(
            &self,
            descriptor: MoveDescriptor,
        ) -> Result<MoveResponse, ServiceError> {
            self.answer_move(Request::OpponentMove(descriptor))
        }

        async fn reset(&self) -> Result<(), ServiceError> {
            match self.answer(Request::Reset)? {
                Response::Reset => Ok(()),
                other => panic!("scripted {other:?} for a reset"),
            }
        }

        async fn set_difficulty(
            &self,
            difficulty: Difficulty,
        ) -> Result<DifficultyResponse, ServiceError> {
            match self.answer(Request::SetDifficulty(difficulty))? {
                Response::Difficulty(response) => Ok(response),
                other => panic!("scripted {other:?} for a difficulty change"),
            }
        }
    }

    fn fresh_game() -> Response {
        Response::State(GameStateResponse {
            board: Board::new(),
            game_status: GameStatus::InProgress,
            turn: Turn::Opponent,
            opponent_piece: Piece::Black,
            winner: None,
        })
    }

    /// Lets spawned requests finish and feeds their outcomes back in.
    async fn settle(app: &mut App<ScriptedService>) {
        tokio::time::timeout(Duration::from_secs(1), async {
            while app.session.is_busy() {
                tokio::task::yield_now().await;
                app.drain_outcomes();
            }
        })
        .await
        .expect("requests settle");
    }

    fn on_game_screen(app: &App<ScriptedService>) -> bool {
        matches!(app.screen, ActiveScreen::Game(_))
    }

    #[tokio::test]
    async fn test_difficulty_choice_enters_game_and_loads_state() {
        let service = ScriptedService::new(vec![
            Ok(Response::Difficulty(DifficultyResponse {
                message: "AI difficulty set to expert".to_string(),
            })),
            Ok(fresh_game()),
        ]);
        let mut app = App::new(Arc::clone(&service));

        let flow = app.perform(ScreenAction::ChooseDifficulty(Difficulty::Expert));
        assert_eq!(flow, Flow::Continue);
        assert!(!on_game_screen(&app));

        settle(&mut app).await;

        assert!(on_game_screen(&app));
        assert!(app.session.state().is_some());
        assert_eq!(app.message, None);
        assert_eq!(
            service.requests(),
            vec![
                Request::SetDifficulty(Difficulty::Expert),
                Request::QueryState
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_difficulty_stays_on_entry() {
        let service = ScriptedService::new(vec![Err(ServiceError::Transport(
            "connection refused".to_string(),
        ))]);
        let mut app = App::new(Arc::clone(&service));

        app.perform(ScreenAction::ChooseDifficulty(Difficulty::Beginner));
        settle(&mut app).await;

        assert!(!on_game_screen(&app));
        assert_eq!(
            app.message.as_deref(),
            Some(
                "Failed to set difficulty: An error occurred while communicating with the server."
            )
        );
    }

    #[tokio::test]
    async fn test_rejected_move_shows_prefixed_detail() {
        let service = ScriptedService::new(vec![
            Ok(fresh_game()),
            Err(ServiceError::rejected(400, Some("Illegal move".to_string()))),
        ]);
        let mut app = App::new(Arc::clone(&service));
        app.perform(ScreenAction::EnterGame);
        settle(&mut app).await;
        let before = app.session.state().cloned();

        app.perform(ScreenAction::ClickCell(Coord::CENTER));
        settle(&mut app).await;

        assert_eq!(app.message.as_deref(), Some("Invalid move: Illegal move"));
        assert_eq!(app.session.state().cloned(), before);
        assert!(on_game_screen(&app));
    }

    #[tokio::test]
    async fn test_action_while_waiting_shows_busy() {
        let service = ScriptedService::new(vec![Ok(fresh_game())]);
        let mut app = App::new(Arc::clone(&service));

        app.perform(ScreenAction::EnterGame);
        app.perform(ScreenAction::ClickCell(Coord::CENTER));

        assert_eq!(app.message.as_deref(), Some("Waiting for the server..."));
        settle(&mut app).await;
        assert_eq!(service.requests(), vec![Request::QueryState]);
    }

    #[tokio::test]
    async fn test_reset_returns_to_entry() {
        let service = ScriptedService::new(vec![Ok(fresh_game()), Ok(Response::Reset)]);
        let mut app = App::new(Arc::clone(&service));
        app.perform(ScreenAction::EnterGame);
        settle(&mut app).await;
        assert!(on_game_screen(&app));

        app.perform(ScreenAction::Reset);
        settle(&mut app).await;

        assert!(!on_game_screen(&app));
        assert!(app.session.state().is_none());
        assert_eq!(
            app.message.as_deref(),
            Some("Game reset. Choose a difficulty to play again.")
        );
    }

    #[tokio::test]
    async fn test_quit_stops_loop() {
        let mut app = App::new(ScriptedService::new(Vec::new()));
        assert_eq!(app.perform(ScreenAction::Quit), Flow::Quit);
    }
}
