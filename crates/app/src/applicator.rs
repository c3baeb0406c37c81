//! Settings applicator — pushes preference changes to the presentation port.
//!
//! `apply` computes the desired [`PresentationState`] (pure), diffs it
//! against the last applied state, and issues only the changed commands.
//! Applying the same record twice is observably a no-op, and the function
//! never fails: the port is infallible by contract.

use std::sync::{Mutex, PoisonError};

use alcove_domain::preferences::PreferenceRecord;
use alcove_domain::presentation::{
    MOTION_OVERRIDE_CSS, PresentationState, HIGH_CONTRAST_CLASS, PERFORMANCE_MODE_CLASS,
    REDUCE_MOTION_CLASS,
};

use crate::ports::Presentation;

/// All marker classes the applicator manages.
const MANAGED_CLASSES: [&str; 3] = [
    REDUCE_MOTION_CLASS,
    PERFORMANCE_MODE_CLASS,
    HIGH_CONTRAST_CLASS,
];

/// Applies preference records to global presentation state.
pub struct SettingsApplicator<P> {
    presentation: P,
    last_applied: Mutex<Option<PresentationState>>,
}

impl<P: Presentation> SettingsApplicator<P> {
    /// Create an applicator over the given presentation sink.
    pub fn new(presentation: P) -> Self {
        Self {
            presentation,
            last_applied: Mutex::new(None),
        }
    }

    /// Borrow the underlying presentation sink.
    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    /// Apply `record`, issuing only the commands whose target differs from
    /// the previously applied state. Idempotent and infallible.
    pub fn apply(&self, record: &PreferenceRecord) {
        let desired = PresentationState::from_preferences(record);
        let mut last = self
            .last_applied
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if last.as_ref() == Some(&desired) {
            return;
        }

        if last.as_ref().map(|s| s.root_font_size_px) != Some(desired.root_font_size_px) {
            self.presentation
                .set_root_font_size(desired.root_font_size_px);
        }

        if last.as_ref().map(|s| s.transitions) != Some(desired.transitions) {
            self.presentation
                .set_transition_variables(desired.transitions.smooth(), desired.transitions.fast());
        }

        if last.as_ref().map(|s| s.motion_override_installed)
            != Some(desired.motion_override_installed)
        {
            let css = desired
                .motion_override_installed
                .then_some(MOTION_OVERRIDE_CSS);
            self.presentation.set_motion_override(css);
        }

        for class in MANAGED_CLASSES {
            let want = desired.marker_classes.contains(class);
            let have = last
                .as_ref()
                .is_some_and(|s| s.marker_classes.contains(class));
            if last.is_none() || want != have {
                self.presentation.set_marker_class(class, want);
            }
        }

        tracing::debug!(
            font_px = desired.root_font_size_px,
            reduced_motion = desired.motion_override_installed,
            "applied presentation state"
        );
        *last = Some(desired);
    }

    /// The last applied state, if any.
    pub fn applied(&self) -> Option<PresentationState> {
        self.last_applied
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
