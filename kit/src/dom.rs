// Scroll locking for hosts that expose a stylable root element.
use tracing::trace;

/// Class that disables scrolling on the root element.
pub const SCROLL_LOCK_CLASS: &str = "!overflow-hidden";

/// A root element whose CSS classes can be toggled.
pub trait StyleRoot {
    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
    fn has_class(&self, class: &str) -> bool;
}

/// Locks page scrolling while an overlay is open and releases it afterwards.
///
/// Without a host (server-side rendering, tests) this does nothing.
pub fn hide_scroll(host: Option<&mut dyn StyleRoot>, is_open: bool) {
    let Some(root) = host else {
        trace!("No style root available, skipping scroll lock");
        return;
    };
    if is_open {
        root.add_class(SCROLL_LOCK_CLASS);
    } else {
        root.remove_class(SCROLL_LOCK_CLASS);
    }
}

/// In-memory class list, for headless hosts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

impl StyleRoot for ClassList {
    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}
