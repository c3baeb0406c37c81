//! Simulated presentation surface recording commands into a [`Scene`].

use std::collections::BTreeSet;
use std::sync::{Mutex, PoisonError};

use alcove_app::ports::Presentation;

/// Snapshot of everything the presentation surface currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scene {
    /// Root font size, `None` until first set.
    pub root_font_size_px: Option<u16>,
    /// Current smooth-transition variable value.
    pub transition_smooth: Option<String>,
    /// Current fast-transition variable value.
    pub transition_fast: Option<String>,
    /// Marker classes currently enabled on the root.
    pub classes: BTreeSet<String>,
    /// Motion-override stylesheet body, when installed.
    pub motion_override_css: Option<String>,
    /// URL of the injected theme resource, when loaded.
    pub theme_resource_url: Option<String>,
    /// Ids of containers present on the surface.
    pub containers: BTreeSet<String>,
}

/// Presentation port implementation that records instead of rendering.
#[derive(Debug, Default)]
pub struct VirtualPresentation {
    scene: Mutex<Scene>,
}

impl VirtualPresentation {
    /// Copy of the current scene.
    pub fn snapshot(&self) -> Scene {
        self.lock().clone()
    }

    /// Simulate a theme or add-on injecting a container on its own.
    pub fn add_container(&self, id: &str) {
        self.lock().containers.insert(id.to_string());
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Scene> {
        self.scene.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Presentation for VirtualPresentation {
    fn set_root_font_size(&self, px: u16) {
        self.lock().root_font_size_px = Some(px);
    }

    fn set_transition_variables(&self, smooth: &str, fast: &str) {
        let mut scene = self.lock();
        scene.transition_smooth = Some(smooth.to_string());
        scene.transition_fast = Some(fast.to_string());
    }

    fn set_marker_class(&self, class: &str, enabled: bool) {
        let mut scene = self.lock();
        if enabled {
            scene.classes.insert(class.to_string());
        } else {
            scene.classes.remove(class);
        }
    }

    fn set_motion_override(&self, css: Option<&str>) {
        self.lock().motion_override_css = css.map(ToString::to_string);
    }

    fn inject_theme_resource(&self, url: &str) {
        self.lock().theme_resource_url = Some(url.to_string());
    }

    fn remove_theme_resource(&self) {
        self.lock().theme_resource_url = None;
    }

    fn remove_container(&self, id: &str) {
        self.lock().containers.remove(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_with_an_empty_scene() {
        let presentation = VirtualPresentation::default();
        assert_eq!(presentation.snapshot(), Scene::default());
    }

    #[test]
    fn should_toggle_marker_classes() {
        let presentation = VirtualPresentation::default();
        presentation.set_marker_class("high-contrast", true);
        assert!(presentation.snapshot().classes.contains("high-contrast"));

        presentation.set_marker_class("high-contrast", false);
        assert!(presentation.snapshot().classes.is_empty());
    }

    #[test]
    fn should_replace_theme_resource_on_reinjection() {
        let presentation = VirtualPresentation::default();
        presentation.inject_theme_resource("https://assets.example/a.json");
        presentation.inject_theme_resource("https://assets.example/b.json");

        assert_eq!(
            presentation.snapshot().theme_resource_url.as_deref(),
            Some("https://assets.example/b.json")
        );
    }

    #[test]
    fn should_remove_simulated_containers() {
        let presentation = VirtualPresentation::default();
        presentation.add_container("theme-effects");
        presentation.remove_container("theme-effects");
        assert!(presentation.snapshot().containers.is_empty());
    }
}
