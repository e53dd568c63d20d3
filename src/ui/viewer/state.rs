// SPDX-License-Identifier: MPL-2.0
//! Selection state machine for the metadata viewer.
//!
//! The machine is `Idle -> Loading -> Loaded` for a valid selection,
//! `-> Failed` for a rejected or undecodable one, and back to `Idle` via
//! reset from any phase. Exactly one phase is active at a time, which is
//! what keeps the view's visibility rules trivial.
//!
//! Asynchronous completions are guarded by a request token: every new
//! selection (and every reset) invalidates outstanding loads, so a late
//! completion from a superseded selection can never overwrite newer results.

use crate::error::MetadataError;
use crate::media::metadata::MetadataEntry;
use crate::media::SelectedFile;

/// Token identifying one issued load request. A completion is applied only
/// when its token is still the latest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Current phase of the viewer.
#[derive(Debug, Clone)]
pub enum Phase {
    /// Nothing selected; only the drop zone is shown.
    Idle,
    /// A file passed validation and its read+decode is in flight.
    Loading { file: SelectedFile },
    /// Decode finished; `entries` may be empty (the "no metadata" case).
    Loaded {
        file: SelectedFile,
        entries: Vec<MetadataEntry>,
    },
    /// Validation or decode failed; the banner is shown and the user can
    /// simply select another file.
    Failed { error: MetadataError },
}

/// Viewer state: the active phase plus the latest issued request token.
#[derive(Debug)]
pub struct State {
    phase: Phase,
    issued: u64,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            issued: 0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    /// Starts loading a validated selection, superseding any in-flight load.
    /// The returned token must accompany the completion.
    pub fn begin_load(&mut self, file: SelectedFile) -> RequestToken {
        self.issued += 1;
        self.phase = Phase::Loading { file };
        RequestToken(self.issued)
    }

    /// Records a rejected selection (wrong declared type). Also supersedes
    /// any in-flight load: the rejection is the newest user action.
    pub fn reject(&mut self, error: MetadataError) {
        self.issued += 1;
        self.phase = Phase::Failed { error };
    }

    /// Applies a load completion. Returns `false` when the completion is
    /// stale (its token was superseded by a newer selection or a reset).
    pub fn complete(
        &mut self,
        token: RequestToken,
        result: Result<Vec<MetadataEntry>, MetadataError>,
    ) -> bool {
        if token.0 != self.issued {
            return false;
        }
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Loading { file } => {
                self.phase = match result {
                    Ok(entries) => Phase::Loaded { file, entries },
                    Err(error) => Phase::Failed { error },
                };
                true
            }
            other => {
                self.phase = other;
                false
            }
        }
    }

    /// Returns to the initial state. Idempotent, callable from any phase,
    /// and invalidates any in-flight load.
    pub fn reset(&mut self) {
        self.issued += 1;
        self.phase = Phase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::metadata::EntryValue;

    fn selection(name: &str) -> SelectedFile {
        SelectedFile::from_path(format!("/photos/{name}"))
    }

    fn make_entry() -> MetadataEntry {
        MetadataEntry {
            tag: "Make".into(),
            value: EntryValue::Scalar("Canon".into()),
        }
    }

    #[test]
    fn starts_idle() {
        let state = State::new();
        assert!(matches!(state.phase(), Phase::Idle));
    }

    #[test]
    fn valid_selection_goes_loading_then_loaded() {
        let mut state = State::new();
        let token = state.begin_load(selection("photo.jpg"));
        assert!(state.is_loading());

        assert!(state.complete(token, Ok(vec![make_entry()])));
        match state.phase() {
            Phase::Loaded { file, entries } => {
                assert_eq!(file.name, "photo.jpg");
                assert_eq!(entries.len(), 1);
            }
            other => panic!("expected Loaded, got {:?}", other),
        }
    }

    #[test]
    fn empty_entry_set_still_reaches_loaded() {
        let mut state = State::new();
        let token = state.begin_load(selection("blank.png"));
        assert!(state.complete(token, Ok(Vec::new())));
        assert!(matches!(
            state.phase(),
            Phase::Loaded { entries, .. } if entries.is_empty()
        ));
    }

    #[test]
    fn decode_failure_reaches_failed_not_stuck_loading() {
        let mut state = State::new();
        let token = state.begin_load(selection("corrupt.jpg"));
        assert!(state.complete(token, Err(MetadataError::DecodeFailed("truncated".into()))));
        assert!(matches!(state.phase(), Phase::Failed { .. }));
        assert!(!state.is_loading());
    }

    #[test]
    fn rejection_moves_to_failed_and_supersedes_inflight() {
        let mut state = State::new();
        let token = state.begin_load(selection("photo.jpg"));
        state.reject(MetadataError::NotAnImage {
            mime: "application/pdf".into(),
        });

        // The old load completes late; it must not clobber the rejection.
        assert!(!state.complete(token, Ok(vec![make_entry()])));
        assert!(matches!(
            state.phase(),
            Phase::Failed { error: MetadataError::NotAnImage { .. } }
        ));
    }

    #[test]
    fn stale_completion_is_discarded_in_favor_of_newest() {
        let mut state = State::new();
        let token_a = state.begin_load(selection("a.jpg"));
        let token_b = state.begin_load(selection("b.jpg"));

        // A finishes after B was selected: discarded.
        assert!(!state.complete(token_a, Ok(vec![make_entry()])));
        assert!(state.is_loading());

        // B's own completion still applies.
        assert!(state.complete(token_b, Ok(Vec::new())));
        assert!(matches!(
            state.phase(),
            Phase::Loaded { file, .. } if file.name == "b.jpg"
        ));
    }

    #[test]
    fn stale_completion_after_newest_applied_is_discarded() {
        let mut state = State::new();
        let token_a = state.begin_load(selection("a.jpg"));
        let token_b = state.begin_load(selection("b.jpg"));

        assert!(state.complete(token_b, Ok(vec![make_entry()])));
        assert!(!state.complete(token_a, Ok(Vec::new())));
        assert!(matches!(
            state.phase(),
            Phase::Loaded { file, entries } if file.name == "b.jpg" && entries.len() == 1
        ));
    }

    #[test]
    fn reset_returns_to_idle_from_any_phase() {
        let mut state = State::new();

        // From Idle (never selected anything).
        state.reset();
        assert!(matches!(state.phase(), Phase::Idle));

        // From Loading.
        let token = state.begin_load(selection("photo.jpg"));
        state.reset();
        assert!(matches!(state.phase(), Phase::Idle));
        assert!(!state.complete(token, Ok(vec![make_entry()])));
        assert!(matches!(state.phase(), Phase::Idle));

        // From Loaded.
        let token = state.begin_load(selection("photo.jpg"));
        state.complete(token, Ok(vec![make_entry()]));
        state.reset();
        assert!(matches!(state.phase(), Phase::Idle));

        // From Failed.
        state.reject(MetadataError::NotAnImage {
            mime: "text/plain".into(),
        });
        state.reset();
        assert!(matches!(state.phase(), Phase::Idle));
    }

    #[test]
    fn selection_after_failure_transitions_normally() {
        let mut state = State::new();
        state.reject(MetadataError::NotAnImage {
            mime: "application/pdf".into(),
        });

        let token = state.begin_load(selection("photo.jpg"));
        assert!(state.is_loading());
        assert!(state.complete(token, Ok(vec![make_entry()])));
        assert!(matches!(state.phase(), Phase::Loaded { .. }));
    }
}
