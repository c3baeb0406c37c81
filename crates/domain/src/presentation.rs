//! Desired global presentation state, computed purely from preferences.
//!
//! The application layer diffs two of these and pushes only the changed
//! commands through the `Presentation` port, keeping every side effect
//! behind one boundary.

use std::collections::BTreeSet;

use crate::preferences::PreferenceRecord;

/// Marker class added when reduced motion is enabled.
pub const REDUCE_MOTION_CLASS: &str = "reduce-motion";
/// Marker class added when performance mode is enabled.
pub const PERFORMANCE_MODE_CLASS: &str = "performance-mode";
/// Marker class added when high contrast is enabled.
pub const HIGH_CONTRAST_CLASS: &str = "high-contrast";

/// Stylesheet body that forces all animation and transition durations to
/// effectively zero and disables smooth scrolling.
pub const MOTION_OVERRIDE_CSS: &str = "\
.reduce-motion *,\n\
.reduce-motion *::before,\n\
.reduce-motion *::after {\n\
  animation-duration: 0.01ms !important;\n\
  animation-iteration-count: 1 !important;\n\
  transition-duration: 0.01ms !important;\n\
  scroll-behavior: auto !important;\n\
}\n";

/// Values for the global transition custom properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionSpeed {
    /// The regular animated experience.
    Normal,
    /// All transitions zeroed out.
    Disabled,
}

impl TransitionSpeed {
    /// Value of the `--transition-smooth` custom property.
    #[must_use]
    pub fn smooth(self) -> &'static str {
        match self {
            Self::Normal => "all 0.3s cubic-bezier(0.4, 0, 0.2, 1)",
            Self::Disabled => "none",
        }
    }

    /// Value of the `--transition-fast` custom property.
    #[must_use]
    pub fn fast(self) -> &'static str {
        match self {
            Self::Normal => "all 0.15s ease-out",
            Self::Disabled => "none",
        }
    }
}

/// The complete desired presentation state.
///
/// Two records that map to equal states are observably identical, which is
/// what makes the applicator idempotent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationState {
    /// Root font size in pixels.
    pub root_font_size_px: u16,
    /// Transition custom-property values.
    pub transitions: TransitionSpeed,
    /// Whether the motion-override stylesheet must exist.
    pub motion_override_installed: bool,
    /// Marker classes present on the root element.
    pub marker_classes: BTreeSet<&'static str>,
}

impl PresentationState {
    /// Compute the desired state for a preference record. Pure.
    #[must_use]
    pub fn from_preferences(record: &PreferenceRecord) -> Self {
        let mut marker_classes = BTreeSet::new();
        if record.reduced_motion {
            marker_classes.insert(REDUCE_MOTION_CLASS);
        }
        if record.performance_mode {
            marker_classes.insert(PERFORMANCE_MODE_CLASS);
        }
        if record.high_contrast {
            marker_classes.insert(HIGH_CONTRAST_CLASS);
        }

        Self {
            root_font_size_px: record.font_size.base_px(),
            transitions: if record.reduced_motion {
                TransitionSpeed::Disabled
            } else {
                TransitionSpeed::Normal
            },
            motion_override_installed: record.reduced_motion,
            marker_classes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::FontSize;

    #[test]
    fn should_map_defaults_to_quiet_state() {
        let state = PresentationState::from_preferences(&PreferenceRecord::default());
        assert_eq!(state.root_font_size_px, 16);
        assert_eq!(state.transitions, TransitionSpeed::Normal);
        assert!(!state.motion_override_installed);
        assert!(state.marker_classes.is_empty());
    }

    #[test]
    fn should_zero_transitions_and_install_override_when_reduced_motion() {
        let record = PreferenceRecord {
            reduced_motion: true,
            ..PreferenceRecord::default()
        };
        let state = PresentationState::from_preferences(&record);
        assert_eq!(state.transitions, TransitionSpeed::Disabled);
        assert!(state.motion_override_installed);
        assert!(state.marker_classes.contains(REDUCE_MOTION_CLASS));
        assert_eq!(state.transitions.smooth(), "none");
        assert_eq!(state.transitions.fast(), "none");
    }

    #[test]
    fn should_toggle_marker_classes_from_booleans() {
        let record = PreferenceRecord {
            performance_mode: true,
            high_contrast: true,
            ..PreferenceRecord::default()
        };
        let state = PresentationState::from_preferences(&record);
        assert!(state.marker_classes.contains(PERFORMANCE_MODE_CLASS));
        assert!(state.marker_classes.contains(HIGH_CONTRAST_CLASS));
        assert!(!state.marker_classes.contains(REDUCE_MOTION_CLASS));
    }

    #[test]
    fn should_map_font_sizes_onto_root_px() {
        for (size, px) in [
            (FontSize::Small, 14),
            (FontSize::Medium, 16),
            (FontSize::Large, 18),
        ] {
            let record = PreferenceRecord {
                font_size: size,
                ..PreferenceRecord::default()
            };
            assert_eq!(
                PresentationState::from_preferences(&record).root_font_size_px,
                px
            );
        }
    }

    #[test]
    fn should_be_a_pure_function_of_the_record() {
        let record = PreferenceRecord {
            reduced_motion: true,
            high_contrast: true,
            font_size: FontSize::Large,
            ..PreferenceRecord::default()
        };
        assert_eq!(
            PresentationState::from_preferences(&record),
            PresentationState::from_preferences(&record.clone())
        );
    }
}
