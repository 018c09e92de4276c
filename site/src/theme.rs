use tracing::info;

// class placed on the document root while the dark palette is in use
pub const DARK_MARKER: &str = "dark";

// the document root's class list
pub trait StyleRoot {
    fn set_class(&self, class: &str, enabled: bool);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    dark: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Theme { dark: true }
    }
}

impl Theme {
    pub fn new(dark: bool) -> Self {
        Theme { dark }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn toggle(&mut self) {
        self.dark = !self.dark;
        info!({ dark = self.dark }, "theme toggled");
    }

    pub fn apply<R: StyleRoot>(&self, root: &R) {
        root.set_class(DARK_MARKER, self.dark);
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::BTreeSet};

    use super::*;

    #[derive(Default)]
    struct FakeRoot {
        classes: RefCell<BTreeSet<String>>,
    }

    impl StyleRoot for FakeRoot {
        fn set_class(&self, class: &str, enabled: bool) {
            let mut classes = self.classes.borrow_mut();
            if enabled {
                classes.insert(class.to_owned());
            } else {
                classes.remove(class);
            }
        }
    }

    impl FakeRoot {
        fn has(&self, class: &str) -> bool {
            self.classes.borrow().contains(class)
        }
    }

    #[test]
    fn defaults_to_dark() {
        let root = FakeRoot::default();
        let theme = Theme::default();

        theme.apply(&root);
        assert!(theme.is_dark());
        assert!(root.has(DARK_MARKER));
    }

    #[test]
    fn toggle_removes_marker() {
        let root = FakeRoot::default();
        let mut theme = Theme::default();

        theme.apply(&root);
        theme.toggle();
        theme.apply(&root);

        assert!(!theme.is_dark());
        assert!(!root.has(DARK_MARKER));
    }

    #[test]
    fn double_toggle_restores_marker() {
        for start in [true, false] {
            let root = FakeRoot::default();
            let mut theme = Theme::new(start);
            theme.apply(&root);
            let before = root.has(DARK_MARKER);

            theme.toggle();
            theme.apply(&root);
            theme.toggle();
            theme.apply(&root);

            assert_eq!(theme, Theme::new(start));
            assert_eq!(root.has(DARK_MARKER), before);
        }
    }

    #[test]
    fn apply_leaves_other_classes() {
        let root = FakeRoot::default();
        root.set_class("no-js", true);

        Theme::new(false).apply(&root);
        assert!(root.has("no-js"));
    }
}
