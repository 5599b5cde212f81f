//! Save policy for level progress.
//!
//! A save is an upsert with one business rule: a stored star rating is only
//! ever improved, never regressed. Saves that do not beat the stored rating
//! still record the latest attempt count.

/// What a save should do to storage, decided from the stored record (if any)
/// and the incoming star rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveAction {
    /// No record exists for the level; insert a full new one.
    Insert,
    /// The incoming rating beats the stored one; overwrite all business
    /// fields and refresh the timestamp.
    Replace,
    /// The incoming rating does not beat the stored one; only the attempt
    /// count is written.
    AttemptsOnly,
}

/// Decide the [`SaveAction`] for an incoming save.
///
/// `existing_stars` is `None` when no record is stored for the level.
/// Equal ratings do NOT replace: the first run that achieved the rating
/// keeps its `completed` flag and timestamp.
pub fn save_action(existing_stars: Option<i32>, incoming_stars: i32) -> SaveAction {
    match existing_stars {
        None => SaveAction::Insert,
        Some(stored) if incoming_stars > stored => SaveAction::Replace,
        Some(_) => SaveAction::AttemptsOnly,
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::{save_action, SaveAction};

    #[test]
    fn absent_record_inserts() {
        assert_matches!(save_action(None, 0), SaveAction::Insert);
        assert_matches!(save_action(None, 3), SaveAction::Insert);
    }

    #[test]
    fn better_rating_replaces() {
        assert_matches!(save_action(Some(2), 3), SaveAction::Replace);
        assert_matches!(save_action(Some(0), 1), SaveAction::Replace);
    }

    #[test]
    fn equal_rating_only_updates_attempts() {
        assert_matches!(save_action(Some(2), 2), SaveAction::AttemptsOnly);
    }

    #[test]
    fn worse_rating_only_updates_attempts() {
        assert_matches!(save_action(Some(3), 1), SaveAction::AttemptsOnly);
    }
}
