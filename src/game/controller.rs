//! Game controller
//!
//! Turns player input into session transitions, then tells the presenter
//! what changed and the observer what happened.

use super::observer::{GameEvent, GameObserver};
use super::presenter::{MessageKind, Presenter, Tile};
use super::session::{GameSession, GameState, MoveError, Submission};
use crate::core::{WORD_LENGTH, Word};

/// A key press, after the input filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Backspace,
    Enter,
    /// Anything else; ignored
    Other,
}

impl From<char> for Key {
    fn from(ch: char) -> Self {
        match ch {
            '\n' | '\r' => Self::Enter,
            '\u{8}' | '\u{7f}' => Self::Backspace,
            c if c.is_ascii_alphabetic() => Self::Letter(c),
            _ => Self::Other,
        }
    }
}

/// Result of [`Controller::handle_key`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Added(char),
    Deleted(char),
    Submitted(Submission),
    Rejected(MoveError),
    Ignored,
}

/// Drives one game session against a presenter and an optional observer
pub struct Controller<P: Presenter, O: GameObserver = ()> {
    session: GameSession,
    presenter: P,
    observer: O,
}

impl<P: Presenter> Controller<P> {
    #[must_use]
    pub fn new(session: GameSession, presenter: P) -> Self {
        Self::with_observer(session, presenter, ())
    }
}

impl<P: Presenter, O: GameObserver> Controller<P, O> {
    pub fn with_observer(session: GameSession, presenter: P, mut observer: O) -> Self {
        observer.notify(&GameEvent::Started);
        Self {
            session,
            presenter,
            observer,
        }
    }

    /// Read-only view of the session
    #[must_use]
    pub const fn current_state(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    pub const fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    #[must_use]
    pub const fn observer(&self) -> &O {
        &self.observer
    }

    pub const fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_parts(self) -> (GameSession, P, O) {
        (self.session, self.presenter, self.observer)
    }

    /// Throw away the current game and start another with `secret`
    pub fn restart(&mut self, secret: Word) {
        self.session = GameSession::new(secret);
        self.presenter.reset();
        self.observer.notify(&GameEvent::Started);
    }

    /// Dispatch one filtered key press
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        let result = match key {
            Key::Letter(letter) => self.add_letter(letter).map(KeyOutcome::Added),
            Key::Backspace => self.delete_letter().map(KeyOutcome::Deleted),
            Key::Enter => self.submit_guess().map(KeyOutcome::Submitted),
            Key::Other => Ok(KeyOutcome::Ignored),
        };
        result.unwrap_or_else(KeyOutcome::Rejected)
    }

    /// Append a letter to the active row
    ///
    /// # Errors
    /// Rejected without any change when the row is full, the input is not a
    /// letter, or the game is over.
    pub fn add_letter(&mut self, letter: char) -> Result<char, MoveError> {
        let row = self.session.row();
        let (letter, column) = self.session.push_letter(letter).inspect_err(|e| self.reject(e))?;

        self.presenter.render_tile(row, column, Some(letter), Tile::Filled);
        self.observer.notify(&GameEvent::LetterAdded {
            row,
            column,
            letter,
            progress: self.session.current_letters(),
        });
        Ok(letter)
    }

    /// Remove the last letter of the active row
    ///
    /// # Errors
    /// Rejected without any change when the row is empty or the game is over.
    pub fn delete_letter(&mut self) -> Result<char, MoveError> {
        let row = self.session.row();
        let (letter, column) = self.session.pop_letter().inspect_err(|e| self.reject(e))?;

        self.presenter.render_tile(row, column, None, Tile::Empty);
        self.observer.notify(&GameEvent::LetterDeleted {
            row,
            column,
            letter,
            progress: self.session.current_letters(),
        });
        Ok(letter)
    }

    /// Submit the active row
    ///
    /// # Errors
    /// Rejected without any change when fewer than five letters are typed or
    /// the game is over. The typed letters stay in place.
    pub fn submit_guess(&mut self) -> Result<Submission, MoveError> {
        let submission = self.session.submit().inspect_err(|e| self.reject(e))?;

        for (column, (&letter, &status)) in submission
            .guess
            .letters()
            .iter()
            .zip(submission.evaluation.statuses())
            .enumerate()
        {
            self.presenter.render_tile(
                submission.row,
                column,
                Some(char::from(letter)),
                Tile::Evaluated(status),
            );
        }
        self.observer.notify(&GameEvent::GuessSubmitted {
            row: submission.row,
            guess: submission.guess.clone(),
            evaluation: submission.evaluation,
        });

        match submission.state {
            GameState::Won => {
                let guesses = self.session.guesses_used();
                self.presenter.show_message(celebration(guesses), MessageKind::Won);
                self.observer.notify(&GameEvent::Won { guesses });
            }
            GameState::Lost => {
                let secret = self.session.secret().clone();
                self.presenter.show_message(
                    &format!("Game over! The word was {secret}"),
                    MessageKind::Lost,
                );
                self.observer.notify(&GameEvent::Lost { secret });
            }
            GameState::Ongoing => {}
        }

        Ok(submission)
    }

    fn reject(&mut self, error: &MoveError) {
        if let MoveError::IncompleteGuess { .. } = error {
            self.presenter.show_message(
                &format!("Please enter {WORD_LENGTH} letters!"),
                MessageKind::Warning,
            );
        }
        self.observer.notify(&GameEvent::Rejected(error.clone()));
    }
}

/// Win message, by number of guesses used
fn celebration(guesses: usize) -> &'static str {
    match guesses {
        1 => "🎯 Genius! Solved on the first try!",
        2 => "🔥 Magnificent! Solved in two!",
        3 => "✨ Impressive! Solved in three!",
        4 => "👏 Splendid! Solved in four!",
        5 => "🎉 Great! Solved in five!",
        _ => "😅 Phew! Solved on the last row!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;
    use crate::game::{DebugLog, MAX_GUESSES, RecordingPresenter};

    fn controller(secret: &str) -> Controller<RecordingPresenter, DebugLog> {
        Controller::with_observer(
            GameSession::new(Word::new(secret).unwrap()),
            RecordingPresenter::new(),
            DebugLog::new(),
        )
    }

    fn type_word<P: Presenter, O: GameObserver>(controller: &mut Controller<P, O>, word: &str) {
        for letter in word.chars() {
            controller.add_letter(letter).unwrap();
        }
    }

    #[test]
    fn key_filter() {
        assert_eq!(Key::from('a'), Key::Letter('a'));
        assert_eq!(Key::from('\n'), Key::Enter);
        assert_eq!(Key::from('\u{7f}'), Key::Backspace);
        assert_eq!(Key::from('1'), Key::Other);
        assert_eq!(Key::from(' '), Key::Other);
    }

    #[test]
    fn add_letter_renders_filled_tile() {
        let mut controller = controller("words");
        assert_eq!(controller.add_letter('w'), Ok('W'));
        assert_eq!(
            controller.presenter().tiles,
            vec![(0, 0, Some('W'), Tile::Filled)]
        );
        assert_eq!(controller.current_state().column(), 1);
    }

    #[test]
    fn add_letter_to_full_row_is_rejected() {
        let mut controller = controller("words");
        type_word(&mut controller, "crane");
        assert_eq!(controller.add_letter('x'), Err(MoveError::RowFull));
        assert_eq!(controller.presenter().tiles.len(), 5);
    }

    #[test]
    fn delete_letter_renders_empty_tile() {
        let mut controller = controller("words");
        type_word(&mut controller, "cr");
        assert_eq!(controller.delete_letter(), Ok('R'));
        assert_eq!(
            controller.presenter().tiles.last(),
            Some(&(0, 1, None, Tile::Empty))
        );
        assert_eq!(controller.current_state().current_letters(), "C");
    }

    #[test]
    fn delete_letter_on_empty_row_is_rejected() {
        let mut controller = controller("words");
        assert_eq!(controller.delete_letter(), Err(MoveError::RowEmpty));
        assert!(controller.presenter().tiles.is_empty());
    }

    #[test]
    fn full_row_submission_advances_exactly_one_row() {
        let mut controller = controller("words");
        type_word(&mut controller, "crane");
        controller.submit_guess().unwrap();

        let state = controller.current_state();
        assert_eq!(state.row(), 1);
        assert_eq!(state.column(), 0);
        assert_eq!(state.state(), GameState::Ongoing);
    }

    #[test]
    fn submission_renders_evaluated_tiles() {
        let mut controller = controller("words");
        type_word(&mut controller, "sword");
        controller.submit_guess().unwrap();

        let evaluated: Vec<_> = controller.presenter().tiles[5..].to_vec();
        assert_eq!(evaluated.len(), 5);
        for (column, tile) in evaluated.iter().enumerate() {
            assert_eq!(tile.0, 0);
            assert_eq!(tile.1, column);
            assert_eq!(tile.3, Tile::Evaluated(LetterStatus::Present));
        }
        assert_eq!(evaluated[0].2, Some('S'));
    }

    #[test]
    fn short_submission_warns_and_keeps_state() {
        let mut controller = controller("words");
        type_word(&mut controller, "wor");

        assert_eq!(
            controller.submit_guess(),
            Err(MoveError::IncompleteGuess { filled: 3 })
        );
        assert_eq!(
            controller.presenter().last_message(),
            Some(&("Please enter 5 letters!".to_string(), MessageKind::Warning))
        );
        let state = controller.current_state();
        assert_eq!(state.row(), 0);
        assert_eq!(state.column(), 3);
        assert_eq!(state.current_letters(), "WOR");
    }

    #[test]
    fn winning_guess_ends_game() {
        let mut controller = controller("words");
        type_word(&mut controller, "words");
        let submission = controller.submit_guess().unwrap();

        assert_eq!(submission.state, GameState::Won);
        let (_, kind) = controller.presenter().last_message().unwrap();
        assert_eq!(*kind, MessageKind::Won);

        let tiles_before = controller.presenter().tiles.len();
        assert_eq!(controller.add_letter('a'), Err(MoveError::GameOver));
        assert_eq!(controller.delete_letter(), Err(MoveError::GameOver));
        assert_eq!(controller.submit_guess(), Err(MoveError::GameOver));
        assert_eq!(controller.presenter().tiles.len(), tiles_before);
        assert_eq!(controller.current_state().row(), 1);
    }

    #[test]
    fn six_failed_rows_lose_and_reveal_secret() {
        let mut controller = controller("words");
        for _ in 0..MAX_GUESSES {
            type_word(&mut controller, "crane");
            controller.submit_guess().unwrap();
        }

        assert_eq!(controller.current_state().state(), GameState::Lost);
        assert_eq!(
            controller.presenter().last_message(),
            Some(&(
                "Game over! The word was WORDS".to_string(),
                MessageKind::Lost
            ))
        );
        assert_eq!(
            controller.handle_key(Key::Letter('a')),
            KeyOutcome::Rejected(MoveError::GameOver)
        );
        assert_eq!(controller.current_state().row(), MAX_GUESSES);
    }

    #[test]
    fn handle_key_dispatches() {
        let mut controller = controller("words");
        assert_eq!(controller.handle_key(Key::Other), KeyOutcome::Ignored);
        assert_eq!(controller.handle_key(Key::from('w')), KeyOutcome::Added('W'));
        assert_eq!(
            controller.handle_key(Key::Backspace),
            KeyOutcome::Deleted('W')
        );
        assert_eq!(
            controller.handle_key(Key::Enter),
            KeyOutcome::Rejected(MoveError::IncompleteGuess { filled: 0 })
        );

        for letter in "words".chars() {
            controller.handle_key(Key::from(letter));
        }
        let KeyOutcome::Submitted(submission) = controller.handle_key(Key::Enter) else {
            panic!("expected a submission");
        };
        assert!(submission.evaluation.is_perfect());
    }

    #[test]
    fn observer_sees_every_step() {
        let mut controller = controller("words");
        type_word(&mut controller, "words");
        controller.submit_guess().unwrap();

        let log: Vec<&str> = controller
            .observer()
            .entries()
            .map(|e| e.text.as_str())
            .collect();
        // Started + 5 letters + submission + win, newest first
        assert_eq!(log.len(), 8);
        assert_eq!(log[0], "Won in 1/6");
        assert_eq!(log[1], "Row 1: WORDS GGGGG");
        assert_eq!(log[7], "Game started");
    }

    #[test]
    fn restart_resets_presenter_and_session() {
        let mut controller = controller("words");
        type_word(&mut controller, "words");
        controller.submit_guess().unwrap();

        controller.restart(Word::new("crane").unwrap());
        let state = controller.current_state();
        assert_eq!(state.state(), GameState::Ongoing);
        assert_eq!(state.row(), 0);
        assert_eq!(state.secret().text(), "CRANE");
        assert_eq!(controller.presenter().resets, 1);
        assert!(controller.presenter().tiles.is_empty());
    }

    #[test]
    fn works_without_observer() {
        let mut presenter = RecordingPresenter::new();
        let mut controller =
            Controller::new(GameSession::new(Word::new("words").unwrap()), &mut presenter);
        type_word(&mut controller, "words");
        controller.submit_guess().unwrap();
        let (session, _, ()) = controller.into_parts();

        assert_eq!(session.state(), GameState::Won);
        assert_eq!(presenter.tiles.len(), 10);
    }

    /// Shared record of verdict calls, in the order they happen
    #[derive(Default, Clone)]
    struct CallOrder(std::rc::Rc<std::cell::RefCell<Vec<&'static str>>>);

    impl Presenter for CallOrder {
        fn render_tile(&mut self, _: usize, _: usize, _: Option<char>, _: Tile) {}

        fn show_message(&mut self, _: &str, kind: MessageKind) {
            if kind.is_verdict() {
                self.0.borrow_mut().push("message");
            }
        }
    }

    impl GameObserver for CallOrder {
        fn notify(&mut self, event: &GameEvent) {
            if matches!(event, GameEvent::Won { .. } | GameEvent::Lost { .. }) {
                self.0.borrow_mut().push("event");
            }
        }
    }

    #[test]
    fn verdict_message_precedes_event_on_win_and_loss() {
        for (secret, guess, rows) in [("words", "words", 1), ("words", "crane", MAX_GUESSES)] {
            let calls = CallOrder::default();
            let mut controller = Controller::with_observer(
                GameSession::new(Word::new(secret).unwrap()),
                calls.clone(),
                calls.clone(),
            );
            for _ in 0..rows {
                type_word(&mut controller, guess);
                controller.submit_guess().unwrap();
            }
            assert!(controller.current_state().state().is_terminal());
            assert_eq!(*calls.0.borrow(), vec!["message", "event"]);
        }
    }
}
