use wordle::evaluator::Classification::{Absent, Exact, Present};
use wordle::gating::{can_type_more, is_row_empty, is_row_full};
use wordle::snapshot::{CellState, Snapshot};
use wordle::{
    aggregate, evaluate, Game, Gates, IllegalTransition, LetterHint, Outcome, SecretWord, Status,
};

fn game(secret: &str) -> Game {
    Game::new(SecretWord::new(secret).unwrap())
}

fn enter(game: &mut Game, guess: &str) -> Result<Status, IllegalTransition> {
    for c in guess.chars() {
        game.type_char(c)?;
    }
    game.submit_row()
}

#[test]
fn scenario_first_guess_wins() {
    let mut game = game("taffy");

    assert_eq!(enter(&mut game, "taffy"), Ok(Status::Over(Outcome::Win)));
    assert_eq!(game.active_row(), 1);

    let snap = Snapshot::capture(&game);
    assert!(snap.rows[0].cells.iter().all(|c| c.state == CellState::Exact));
    assert_eq!(snap.gates, Gates::default());
    assert_eq!(snap.outcome, Some(Outcome::Win));
}

#[test]
fn scenario_six_misses_lose() {
    let mut game = game("taffy");

    for _ in 0..5 {
        assert_eq!(enter(&mut game, "crane"), Ok(Status::Playing));
    }
    assert_eq!(enter(&mut game, "crane"), Ok(Status::Over(Outcome::Loss)));
    assert_eq!(game.type_char('a'), Err(IllegalTransition::GameOver));
}

#[test]
fn scenario_partial_then_keyboard() {
    let mut game = game("taffy");

    enter(&mut game, "fatty").unwrap();
    assert_eq!(
        evaluate("taffy", "fatty").unwrap(),
        vec![Present, Exact, Present, Absent, Exact]
    );

    let hints = aggregate(game.secret(), game.submitted());
    assert_eq!(hints.hint('f'), LetterHint::Present);
    assert_eq!(hints.hint('a'), LetterHint::Exact);
    // the second 't' was absent but the first one was present
    assert_eq!(hints.hint('t'), LetterHint::Present);
    assert_eq!(hints.hint('y'), LetterHint::Exact);
    assert_eq!(hints.hint('q'), LetterHint::Unused);
}

#[test]
fn scenario_gates_follow_the_active_row() {
    let mut game = game("taffy");
    let row = game.active_row();

    assert!(is_row_empty(&game, row));
    assert!(can_type_more(&game, row));
    assert_eq!(
        Gates::project(&game),
        Gates {
            submit: false,
            delete: false,
            letters: true
        }
    );

    for c in "crane".chars() {
        game.type_char(c).unwrap();
    }
    assert!(is_row_full(&game, row));
    assert!(!can_type_more(&game, row));
    assert_eq!(
        Gates::project(&game),
        Gates {
            submit: true,
            delete: true,
            letters: false
        }
    );

    game.submit_row().unwrap();
    // the frozen row is no longer the one the gates look at
    assert!(!is_row_full(&game, row));
    assert!(is_row_empty(&game, game.active_row()));
}

#[test]
fn scenario_duplicate_letters() {
    // two 'e's in the secret, so only the first two guessed 'e's are marked
    assert_eq!(
        evaluate("sheep", "eerie").unwrap(),
        vec![Present, Present, Absent, Absent, Absent]
    );
}
