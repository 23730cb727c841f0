/// Open/closed state shared by the menu toggle, the navigation panel and the
/// overlay. The three markers and the body scroll lock are always rendered
/// from this one flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Value for the body's `overflow` property; empty clears the lock.
    pub fn body_overflow(&self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }
}
