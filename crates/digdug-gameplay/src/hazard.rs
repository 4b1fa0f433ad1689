//! Hazard overlap queries.
//!
//! The hose weapon belongs to the player; monsters only ask whether it
//! overlaps their bounding rectangle.

use digdug_common::Rect;

/// Region query interface for hazards such as the hose.
pub trait HazardQuery {
    /// Checks whether the hazard overlaps the given region.
    fn overlaps(&self, region: &Rect) -> bool;
}

impl HazardQuery for Rect {
    fn overlaps(&self, region: &Rect) -> bool {
        Rect::overlaps(self, region)
    }
}

/// A hose made of several straight segments.
impl HazardQuery for [Rect] {
    fn overlaps(&self, region: &Rect) -> bool {
        self.iter().any(|segment| segment.overlaps(region))
    }
}

impl HazardQuery for Vec<Rect> {
    fn overlaps(&self, region: &Rect) -> bool {
        self.as_slice().overlaps(region)
    }
}

/// `None` is a retracted hose.
impl<H: HazardQuery> HazardQuery for Option<H> {
    fn overlaps(&self, region: &Rect) -> bool {
        self.as_ref().is_some_and(|hazard| hazard.overlaps(region))
    }
}

/// Mock hazard for testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockHazard {
    /// Whether every query reports an overlap
    hit: bool,
}

impl MockHazard {
    /// A hazard that overlaps everything.
    #[must_use]
    pub const fn hitting() -> Self {
        Self { hit: true }
    }

    /// A hazard that overlaps nothing.
    #[must_use]
    pub const fn missing() -> Self {
        Self { hit: false }
    }

    /// Changes whether queries report an overlap.
    pub fn set_hit(&mut self, hit: bool) {
        self.hit = hit;
    }
}

impl HazardQuery for MockHazard {
    fn overlaps(&self, _region: &Rect) -> bool {
        self.hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segmented_hose() {
        let hose = vec![Rect::new(0.0, 0.0, 56.0, 10.0), Rect::new(56.0, 0.0, 10.0, 56.0)];
        assert!(hose.overlaps(&Rect::new(60.0, 40.0, 56.0, 56.0)));
        assert!(!hose.overlaps(&Rect::new(200.0, 200.0, 56.0, 56.0)));
    }

    #[test]
    fn test_retracted_hose_never_overlaps() {
        let hose: Option<Rect> = None;
        assert!(!hose.overlaps(&Rect::new(0.0, 0.0, 56.0, 56.0)));

        let extended = Some(Rect::new(0.0, 0.0, 56.0, 56.0));
        assert!(extended.overlaps(&Rect::new(10.0, 10.0, 56.0, 56.0)));
    }

    #[test]
    fn test_mock_hazard_toggle() {
        let mut hazard = MockHazard::missing();
        let region = Rect::new(0.0, 0.0, 1.0, 1.0);
        assert!(!hazard.overlaps(&region));

        hazard.set_hit(true);
        assert!(hazard.overlaps(&region));
        assert!(MockHazard::hitting().overlaps(&region));
    }
}
