//! Property-based tests for the game controller state machine

use proptest::prelude::*;
use wordle_game::core::Word;
use wordle_game::game::{
    Controller, GameSession, GameState, Key, KeyOutcome, MAX_GUESSES, RecordingPresenter,
};

fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        6 => prop::char::range('a', 'c').prop_map(Key::Letter),
        2 => Just(Key::Enter),
        1 => Just(Key::Backspace),
        1 => Just(Key::Other),
        1 => Just(Key::Letter('7')),
    ]
}

proptest! {
    /// Rows only move forward, one per accepted submission, and nothing
    /// changes once the game has ended
    #[test]
    fn prop_session_only_moves_forward(
        secret in "[a-c]{5}",
        keys in prop::collection::vec(key_strategy(), 0..200),
    ) {
        let session = GameSession::new(Word::new(&secret).unwrap());
        let mut controller = Controller::new(session, RecordingPresenter::default());

        for key in keys {
            let before_row = controller.current_state().row();
            let before_state = controller.current_state().state();

            let outcome = controller.handle_key(key);
            let session = controller.current_state();

            prop_assert_eq!(session.row(), session.guesses_used());
            prop_assert!(session.guesses_used() <= MAX_GUESSES);

            if before_state.is_terminal() {
                prop_assert!(matches!(outcome, KeyOutcome::Rejected(_) | KeyOutcome::Ignored));
                prop_assert_eq!(session.state(), before_state);
                prop_assert_eq!(session.row(), before_row);
                continue;
            }

            match outcome {
                KeyOutcome::Submitted(submission) => {
                    prop_assert_eq!(session.row(), before_row + 1);
                    prop_assert_eq!(submission.state, session.state());
                    let won = submission.evaluation.is_perfect();
                    prop_assert_eq!(session.state() == GameState::Won, won);
                }
                _ => prop_assert_eq!(session.row(), before_row),
            }

            if session.state() == GameState::Lost {
                prop_assert_eq!(session.guesses_used(), MAX_GUESSES);
            }
        }
    }

    #[test]
    fn prop_typed_letters_match_column(keys in prop::collection::vec(key_strategy(), 0..50)) {
        let session = GameSession::new(Word::new("zzzzz").unwrap());
        let mut controller = Controller::new(session, RecordingPresenter::default());

        for key in keys {
            controller.handle_key(key);
            let session = controller.current_state();
            prop_assert_eq!(session.current_letters().len(), session.column());
        }
    }
}
