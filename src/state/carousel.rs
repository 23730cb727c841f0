//! Position of the product carousel and the bounds it moves within.

/// Carousel position in `0..=max_index`.
///
/// `max_index` is the number of items minus how many fit in the viewport, so
/// the last position shows the final item flush against the right edge.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    index: usize,
    max_index: usize,
    item_count: usize,
    item_width: f64,
}

fn max_index(item_count: usize, item_width: f64, viewport_width: f64) -> usize {
    let visible = (viewport_width / item_width).floor().max(0.0) as usize;
    item_count.saturating_sub(visible)
}

impl CarouselState {
    /// Returns `None` when there is nothing to slide: no items, or items
    /// without a measurable width.
    pub fn new(item_count: usize, item_width: f64, viewport_width: f64) -> Option<Self> {
        if item_count == 0 || item_width.is_nan() || item_width <= 0.0 {
            return None;
        }
        Some(Self {
            index: 0,
            max_index: max_index(item_count, item_width, viewport_width),
            item_count,
            item_width,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn max_index(&self) -> usize {
        self.max_index
    }

    pub fn item_width(&self) -> f64 {
        self.item_width
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1).min(self.max_index);
    }

    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Recomputes the bounds for a new layout and pulls the index back inside
    /// them. An unmeasurable width keeps the previous one.
    pub fn resize(&mut self, item_width: f64, viewport_width: f64) {
        if item_width > 0.0 {
            self.item_width = item_width;
        }
        self.max_index = max_index(self.item_count, self.item_width, viewport_width);
        self.index = self.index.min(self.max_index);
    }

    pub fn offset(&self) -> f64 {
        if self.index == 0 {
            0.0
        } else {
            -(self.index as f64 * self.item_width)
        }
    }

    pub fn transform(&self) -> String {
        format!("translateX({}px)", self.offset())
    }

    pub fn prev_disabled(&self) -> bool {
        self.index == 0
    }

    pub fn next_disabled(&self) -> bool {
        self.index == self.max_index
    }
}

/// Brings a carousel up to date with a new layout. One that could not be
/// measured earlier is created as soon as its items have a width.
pub fn relayout(
    slot: &mut Option<CarouselState>,
    item_count: usize,
    item_width: f64,
    viewport_width: f64,
) {
    match slot {
        Some(state) => state.resize(item_width, viewport_width),
        None => *slot = CarouselState::new(item_count, item_width, viewport_width),
    }
}

/// Integer value of a computed CSS length such as `"12.5px"`, read the way
/// `parseInt` reads it. Unparseable input counts as zero.
pub fn css_px(value: &str) -> i32 {
    let value = value.trim_start();
    let (sign, digits) = match value.as_bytes().first() {
        Some(b'-') => (-1, &value[1..]),
        Some(b'+') => (1, &value[1..]),
        _ => (1, value),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i32>().map(|n| sign * n).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn carousel() -> CarouselState {
        // 8 items of 250px in a 1000px viewport: 4 visible, max index 4
        CarouselState::new(8, 250.0, 1000.0).unwrap()
    }

    #[test]
    fn starts_at_zero_with_prev_disabled() {
        let c = carousel();
        assert_eq!(c.index(), 0);
        assert_eq!(c.max_index(), 4);
        assert!(c.prev_disabled());
        assert!(!c.next_disabled());
        assert_eq!(c.transform(), "translateX(0px)");
    }

    #[test]
    fn next_stops_at_max_index() {
        let mut c = carousel();
        for _ in 0..10 {
            c.next();
        }
        assert_eq!(c.index(), 4);
        assert!(c.next_disabled());
        assert!(!c.prev_disabled());
        assert_eq!(c.transform(), "translateX(-1000px)");
    }

    #[test]
    fn prev_at_zero_is_noop() {
        let mut c = carousel();
        c.prev();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn everything_visible_disables_both_controls() {
        let c = CarouselState::new(3, 250.0, 1200.0).unwrap();
        assert_eq!(c.max_index(), 0);
        assert!(c.prev_disabled());
        assert!(c.next_disabled());
    }

    #[test]
    fn resize_clamps_index_into_new_bounds() {
        let mut c = carousel();
        for _ in 0..4 {
            c.next();
        }
        c.resize(250.0, 1500.0);
        assert_eq!(c.max_index(), 2);
        assert_eq!(c.index(), 2);
        assert!(c.next_disabled());
    }

    #[test]
    fn resize_keeps_index_when_still_in_bounds() {
        let mut c = carousel();
        c.next();
        c.resize(250.0, 500.0);
        assert_eq!(c.max_index(), 6);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn resize_picks_up_new_item_width() {
        let mut c = carousel();
        c.next();
        c.resize(300.0, 600.0);
        assert_eq!(c.item_width(), 300.0);
        assert_eq!(c.max_index(), 6);
        assert_eq!(c.transform(), "translateX(-300px)");
    }

    #[test]
    fn unmeasurable_carousel_is_inert() {
        assert!(CarouselState::new(0, 250.0, 1000.0).is_none());
        assert!(CarouselState::new(5, 0.0, 1000.0).is_none());
        assert!(CarouselState::new(5, f64::NAN, 1000.0).is_none());
    }

    #[test]
    fn hidden_carousel_activates_once_measurable() {
        let mut slot = CarouselState::new(8, 0.0, 0.0);
        assert!(slot.is_none());

        relayout(&mut slot, 8, 0.0, 0.0);
        assert!(slot.is_none());

        relayout(&mut slot, 8, 250.0, 1000.0);
        let state = slot.as_ref().unwrap();
        assert_eq!(state.index(), 0);
        assert_eq!(state.max_index(), 4);
    }

    #[test]
    fn relayout_resizes_existing_carousel() {
        let mut slot = Some(carousel());
        slot.as_mut().unwrap().next();
        relayout(&mut slot, 8, 250.0, 1500.0);
        let state = slot.unwrap();
        assert_eq!(state.max_index(), 2);
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn css_px_reads_leading_integer() {
        assert_eq!(css_px("16px"), 16);
        assert_eq!(css_px("12.75px"), 12);
        assert_eq!(css_px("-8px"), -8);
        assert_eq!(css_px("auto"), 0);
        assert_eq!(css_px(""), 0);
    }

    proptest! {
        #[test]
        fn index_stays_in_bounds(
            count in 1usize..40,
            width in 50.0f64..400.0,
            viewport in 0.0f64..2000.0,
            moves in proptest::collection::vec(any::<bool>(), 0..60),
        ) {
            let mut c = CarouselState::new(count, width, viewport).unwrap();
            for forward in moves {
                let before = c.index();
                if forward { c.next() } else { c.prev() }
                prop_assert!(c.index() <= c.max_index());
                if forward && before < c.max_index() {
                    prop_assert_eq!(c.index(), before + 1);
                }
                if !forward && before > 0 {
                    prop_assert_eq!(c.index(), before - 1);
                }
                prop_assert_eq!(c.prev_disabled(), c.index() == 0);
                prop_assert_eq!(c.next_disabled(), c.index() == c.max_index());
            }
        }
    }
}
