//! Active-item selection for the one-post-at-a-time feed presentation.
//!
//! Recomputed synchronously on every scroll event with no debouncing or
//! throttling. That is acceptable only because the rendered item count is
//! small; throttling would change the observable focus timing, so it is
//! deliberately not done here.

/// Measured vertical bounding box of a rendered element, in the same
/// coordinate space as its container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemBounds {
    pub top: f64,
    pub height: f64,
}

impl ItemBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    fn center(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Picks the single item considered "in focus" for autoplay-style behavior:
/// the one whose vertical center is nearest the container's center.
#[derive(Debug, Default)]
pub struct ActiveItemSelector {
    active_index: usize,
}

impl ActiveItemSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Recomputes the active index from the current layout. Ties go to the
    /// earliest item; an empty measurement set leaves the index unchanged.
    pub fn on_scroll(&mut self, container: ItemBounds, items: &[ItemBounds]) -> usize {
        if items.is_empty() {
            return self.active_index;
        }

        let target = container.center();
        let mut closest_index = 0;
        let mut closest_distance = f64::INFINITY;
        for (index, item) in items.iter().enumerate() {
            let distance = (target - item.center()).abs();
            if distance < closest_distance {
                closest_distance = distance;
                closest_index = index;
            }
        }

        self.active_index = closest_index;
        closest_index
    }
}
