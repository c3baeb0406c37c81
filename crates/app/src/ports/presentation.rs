//! Presentation port — the single side-effect boundary for global
//! presentation state.
//!
//! Every method is infallible by contract: an adapter whose render target is
//! missing (headless context, detached root) must treat the call as a no-op,
//! never panic or error. Commands are fire-and-forget and last-write-wins.

/// Sink for imperative presentation commands.
pub trait Presentation {
    /// Set the root element's base font size in pixels.
    fn set_root_font_size(&self, px: u16);

    /// Set the global transition custom properties.
    fn set_transition_variables(&self, smooth: &str, fast: &str);

    /// Add or remove a marker class on the root element.
    fn set_marker_class(&self, class: &str, enabled: bool);

    /// Install/replace (`Some`) or remove (`None`) the global
    /// motion-override stylesheet.
    fn set_motion_override(&self, css: Option<&str>);

    /// Inject the theme resource reference, replacing any existing one.
    fn inject_theme_resource(&self, url: &str);

    /// Remove the injected theme resource, if present.
    fn remove_theme_resource(&self);

    /// Remove a known side-effect container by element id, if present.
    fn remove_container(&self, id: &str);
}

impl<P: Presentation + ?Sized> Presentation for std::sync::Arc<P> {
    fn set_root_font_size(&self, px: u16) {
        (**self).set_root_font_size(px);
    }

    fn set_transition_variables(&self, smooth: &str, fast: &str) {
        (**self).set_transition_variables(smooth, fast);
    }

    fn set_marker_class(&self, class: &str, enabled: bool) {
        (**self).set_marker_class(class, enabled);
    }

    fn set_motion_override(&self, css: Option<&str>) {
        (**self).set_motion_override(css);
    }

    fn inject_theme_resource(&self, url: &str) {
        (**self).inject_theme_resource(url);
    }

    fn remove_theme_resource(&self) {
        (**self).remove_theme_resource();
    }

    fn remove_container(&self, id: &str) {
        (**self).remove_container(id);
    }
}
