//! Transient UI state of the landing page.
//!
//! Each piece is a small value type so the transitions can be tested without
//! a browser; the components wrap them in signals.

/// Mobile navigation drawer. Starts closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following any link dismisses the drawer.
    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Which code sample is on screen. Exactly one tab is active at all times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeTabs {
    active: usize,
    len: usize,
}

impl CodeTabs {
    /// `len` is the number of rendered tab buttons; the first one is active.
    pub fn new(len: usize) -> Self {
        Self { active: 0, len }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Switch to `index`. Returns `false` and leaves the selection alone when
    /// no such tab exists.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            log::warn!("ignoring selection of tab {index}, only {} exist", self.len);
            return false;
        }
        self.active = index;
        true
    }
}

/// Single-select accordion: at most one entry is expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaqAccordion {
    open: Option<usize>,
}

impl FaqAccordion {
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Clicking the open entry collapses it; clicking any other entry opens
    /// that one instead.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.is_open(index) { None } else { Some(index) };
    }
}

/// Registered elements and which of them have been seen.
///
/// Visibility is one-way: once marked, a key stays visible. After
/// [`VisibleSet::release`] the set is frozen and ignores every further
/// registration or mark.
#[derive(Debug, Clone)]
pub struct VisibleSet<K> {
    entries: Vec<(K, bool)>,
    released: bool,
}

impl<K> Default for VisibleSet<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            released: false,
        }
    }
}

impl<K: PartialEq> VisibleSet<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `key`. Returns `false` for a key that is already tracked or when
    /// the set has been released.
    pub fn register(&mut self, key: K) -> bool {
        if self.released || self.contains(&key) {
            return false;
        }
        self.entries.push((key, false));
        true
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Record that `key` crossed the threshold. Returns `true` only on the
    /// first transition of a tracked key.
    pub fn mark_visible(&mut self, key: &K) -> bool {
        if self.released {
            return false;
        }
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, seen)) if !*seen => {
                *seen = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_visible(&self, key: &K) -> bool {
        self.entries.iter().any(|(k, seen)| *seen && k == key)
    }

    pub fn release(&mut self) {
        self.released = true;
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn visible_count(&self) -> usize {
        self.entries.iter().filter(|(_, seen)| *seen).count()
    }

    /// Keys still waiting to be seen.
    pub fn pending(&self) -> impl Iterator<Item = &K> {
        self.entries
            .iter()
            .filter(|(_, seen)| !*seen)
            .map(|(k, _)| k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn menu_starts_closed_and_toggles() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn menu_close_is_idempotent() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        menu.close();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn tabs_default_to_first() {
        let tabs = CodeTabs::new(3);
        assert_eq!(tabs.active(), 0);
        assert!(tabs.is_active(0));
        assert!(!tabs.is_active(1));
    }

    #[test]
    fn tabs_reject_out_of_range() {
        let mut tabs = CodeTabs::new(3);
        assert!(tabs.select(2));
        assert!(!tabs.select(3));
        assert_eq!(tabs.active(), 2);
    }

    #[test]
    fn faq_toggle_same_entry_closes() {
        let mut faq = FaqAccordion::default();
        faq.toggle(1);
        assert_eq!(faq.open_index(), Some(1));
        faq.toggle(1);
        assert_eq!(faq.open_index(), None);
    }

    #[test]
    fn faq_opening_another_entry_replaces() {
        let mut faq = FaqAccordion::default();
        faq.toggle(2);
        faq.toggle(4);
        assert!(faq.is_open(4));
        assert!(!faq.is_open(2));
    }

    #[test]
    fn visible_set_registration_is_idempotent() {
        let mut set = VisibleSet::new();
        assert!(set.register("hero"));
        assert!(!set.register("hero"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn visible_set_ignores_unregistered_keys() {
        let mut set = VisibleSet::new();
        set.register("faq");
        assert!(!set.mark_visible(&"pricing"));
        assert!(!set.is_visible(&"pricing"));
    }

    #[test]
    fn visible_set_is_one_way() {
        let mut set = VisibleSet::new();
        set.register("faq");
        set.register("pricing");
        assert!(set.mark_visible(&"faq"));
        assert!(!set.mark_visible(&"faq"));
        assert!(set.is_visible(&"faq"));
        assert_eq!(set.pending().collect::<Vec<_>>(), vec![&"pricing"]);
    }

    #[test]
    fn released_set_is_frozen() {
        let mut set = VisibleSet::new();
        set.register("faq");
        set.release();
        assert!(set.is_released());
        assert!(!set.mark_visible(&"faq"));
        assert!(!set.register("footer"));
        assert_eq!(set.visible_count(), 0);
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod props {
        use super::super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn faq_never_has_two_open(clicks in proptest::collection::vec(0usize..7, 0..64)) {
                let mut faq = FaqAccordion::default();
                for &i in &clicks {
                    let before = faq.open_index();
                    faq.toggle(i);
                    let open = (0..7).filter(|&j| faq.is_open(j)).count();
                    prop_assert!(open <= 1);
                    if before == Some(i) {
                        prop_assert_eq!(faq.open_index(), None);
                    } else {
                        prop_assert_eq!(faq.open_index(), Some(i));
                    }
                }
            }

            #[test]
            fn menu_double_toggle_is_identity(start in any::<bool>()) {
                let mut menu = MobileMenu::default();
                if start {
                    menu.toggle();
                }
                let original = menu;
                menu.toggle();
                menu.toggle();
                prop_assert_eq!(menu, original);
            }

            #[test]
            fn tab_selection_lands_where_clicked(picks in proptest::collection::vec(0usize..3, 1..32)) {
                let mut tabs = CodeTabs::new(3);
                for &i in &picks {
                    prop_assert!(tabs.select(i));
                    prop_assert_eq!(tabs.active(), i);
                    prop_assert_eq!((0..3).filter(|&j| tabs.is_active(j)).count(), 1);
                }
            }

            #[test]
            fn visibility_only_grows(marks in proptest::collection::vec(0u8..10, 0..64)) {
                let mut set = VisibleSet::new();
                for key in 0u8..10 {
                    set.register(key);
                }
                let mut seen = 0;
                for key in &marks {
                    set.mark_visible(key);
                    prop_assert!(set.is_visible(key));
                    prop_assert!(set.visible_count() >= seen);
                    seen = set.visible_count();
                }
            }
        }
    }
}
