//! Session-level invariants.

use super::super::Session;
use super::{HistoryInvariants, Invariant, InvariantSet};

/// Invariant: The cursor indexes an existing snapshot.
pub struct CursorInRangeInvariant;

impl Invariant<Session> for CursorInRangeInvariant {
    fn holds(session: &Session) -> bool {
        session.cursor() < session.history().len()
    }

    fn description() -> &'static str {
        "Cursor points at a recorded snapshot"
    }
}

/// Invariant: The session's history satisfies [`HistoryInvariants`].
pub struct ValidHistoryInvariant;

impl Invariant<Session> for ValidHistoryInvariant {
    fn holds(session: &Session) -> bool {
        HistoryInvariants::check_all(session.history()).is_ok()
    }

    fn description() -> &'static str {
        "Session history is a valid single timeline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_holds() {
        let session = Session::new();
        assert!(CursorInRangeInvariant::holds(&session));
        assert!(ValidHistoryInvariant::holds(&session));
    }

    #[test]
    fn test_holds_after_play_and_jump() {
        let mut session = Session::new();
        session.play(4).expect("legal");
        session.play(0).expect("legal");
        session.jump_to(1).expect("in range");
        assert!(CursorInRangeInvariant::holds(&session));
        session.play(8).expect("legal");
        assert_eq!(session.history().len(), 3);
        assert!(CursorInRangeInvariant::holds(&session));
        assert!(ValidHistoryInvariant::holds(&session));
    }
}
