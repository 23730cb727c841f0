/// Which item of an FAQ group is open, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn new(open: Option<usize>) -> Self {
        Self { open }
    }

    /// Clicking the open item closes it; clicking any other item opens it and
    /// closes the rest.
    pub fn click(&mut self, item: usize) {
        self.open = if self.open == Some(item) {
            None
        } else {
            Some(item)
        };
    }

    pub fn is_open(&self, item: usize) -> bool {
        self.open == Some(item)
    }

    pub fn open_item(&self) -> Option<usize> {
        self.open
    }
}
