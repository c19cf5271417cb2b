use web_sys::window;

/// Simulated device width applied to the embedded preview frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Desktop,
    Tablet,
    Mobile,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Desktop, ViewMode::Tablet, ViewMode::Mobile];

    pub fn frame_width(self) -> &'static str {
        match self {
            ViewMode::Desktop => "100%",
            ViewMode::Tablet => "768px",
            ViewMode::Mobile => "375px",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Desktop => "Desktop",
            ViewMode::Tablet => "Tablet",
            ViewMode::Mobile => "Mobile",
        }
    }
}

/// What the preview frame is pointed at. The url is untrusted display
/// data; it is only ever used as the source of a sandboxed frame.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewTarget {
    pub url: String,
    pub title: String,
}

/// Modal state. At most one preview is active at a time; the target and
/// view mode exist only while open.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Preview {
    #[default]
    Closed,
    Open { target: PreviewTarget, mode: ViewMode },
}

impl Preview {
    /// Points the frame at `url`. Opening over an active preview swaps
    /// the target and drops back to the desktop width.
    pub fn open(&mut self, url: &str, title: &str) {
        *self = Preview::Open {
            target: PreviewTarget {
                url: url.to_string(),
                title: title.to_string(),
            },
            mode: ViewMode::Desktop,
        };
    }

    /// Ignored while closed.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if let Preview::Open { mode: current, .. } = self {
            *current = mode;
        }
    }

    /// Idempotent.
    pub fn close(&mut self) {
        *self = Preview::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Preview::Open { .. })
    }

    pub fn target(&self) -> Option<&PreviewTarget> {
        match self {
            Preview::Open { target, .. } => Some(target),
            Preview::Closed => None,
        }
    }

    pub fn view_mode(&self) -> Option<ViewMode> {
        match self {
            Preview::Open { mode, .. } => Some(*mode),
            Preview::Closed => None,
        }
    }
}

/// The page surface whose scrolling is suspended while a modal is up.
pub trait ScrollSurface {
    fn suspend(&self);
    fn restore(&self);
}

/// Keeps the page scroll lock in step with the modal state. Holds at
/// most one lock no matter how many times the modal opens, and restores
/// scrolling when dropped while still holding it.
pub struct ScrollLockKeeper<S: ScrollSurface> {
    surface: S,
    held: bool,
}

impl<S: ScrollSurface> ScrollLockKeeper<S> {
    pub fn new(surface: S) -> Self {
        Self { surface, held: false }
    }

    /// Acquires on `false -> true`, releases on `true -> false`, and
    /// ignores repeats of the current state.
    pub fn sync(&mut self, open: bool) {
        if open && !self.held {
            self.surface.suspend();
            self.held = true;
        } else if !open && self.held {
            self.surface.restore();
            self.held = false;
        }
    }

    pub fn held(&self) -> bool {
        self.held
    }
}

impl<S: ScrollSurface> Drop for ScrollLockKeeper<S> {
    fn drop(&mut self) {
        if self.held {
            self.surface.restore();
        }
    }
}

/// Suspends scrolling by pinning `overflow: hidden` on the document body.
pub struct BodyScroll;

impl ScrollSurface for BodyScroll {
    fn suspend(&self) {
        if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.set_attribute("style", "overflow: hidden;");
        }
    }

    fn restore(&self) {
        if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.remove_attribute("style");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct CountingSurface {
        suspends: Rc<Cell<u32>>,
        restores: Rc<Cell<u32>>,
    }

    impl ScrollSurface for CountingSurface {
        fn suspend(&self) {
            self.suspends.set(self.suspends.get() + 1);
        }

        fn restore(&self) {
            self.restores.set(self.restores.get() + 1);
        }
    }

    #[test]
    fn starts_closed() {
        let preview = Preview::default();
        assert!(!preview.is_open());
        assert_eq!(preview.target(), None);
        assert_eq!(preview.view_mode(), None);
    }

    #[test]
    fn reopen_swaps_target_and_resets_mode() {
        let mut preview = Preview::default();
        preview.open("https://a.example", "A");
        preview.set_view_mode(ViewMode::Mobile);
        preview.open("https://b.example", "B");
        assert_eq!(
            preview,
            Preview::Open {
                target: PreviewTarget {
                    url: "https://b.example".to_string(),
                    title: "B".to_string(),
                },
                mode: ViewMode::Desktop,
            }
        );
    }

    #[test]
    fn view_mode_change_while_closed_is_ignored() {
        let mut preview = Preview::default();
        preview.set_view_mode(ViewMode::Tablet);
        assert_eq!(preview, Preview::Closed);
    }

    #[test]
    fn close_is_idempotent() {
        let mut preview = Preview::default();
        preview.open("https://a.example", "A");
        preview.close();
        preview.close();
        assert_eq!(preview, Preview::Closed);
    }

    #[test]
    fn keeper_holds_at_most_one_lock() {
        let surface = CountingSurface::default();
        let suspends = surface.suspends.clone();
        let restores = surface.restores.clone();
        let mut keeper = ScrollLockKeeper::new(surface);
        keeper.sync(true);
        keeper.sync(true);
        keeper.sync(true);
        assert_eq!(suspends.get(), 1);
        assert!(keeper.held());
        keeper.sync(false);
        keeper.sync(false);
        assert_eq!(restores.get(), 1);
        assert!(!keeper.held());
    }

    #[test]
    fn keeper_releases_on_drop_while_held() {
        let surface = CountingSurface::default();
        let restores = surface.restores.clone();
        let mut keeper = ScrollLockKeeper::new(surface);
        keeper.sync(true);
        drop(keeper);
        assert_eq!(restores.get(), 1);
    }

    #[test]
    fn keeper_drop_without_hold_restores_nothing() {
        let surface = CountingSurface::default();
        let restores = surface.restores.clone();
        let keeper = ScrollLockKeeper::new(surface);
        drop(keeper);
        assert_eq!(restores.get(), 0);
    }

    #[test]
    fn frame_widths_match_device_classes() {
        assert_eq!(ViewMode::Desktop.frame_width(), "100%");
        assert_eq!(ViewMode::Tablet.frame_width(), "768px");
        assert_eq!(ViewMode::Mobile.frame_width(), "375px");
    }
}
