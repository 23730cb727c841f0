/// Whether a reveal element carries the visible marker after an intersection
/// report. Once shown it stays shown, whatever later reports say.
pub fn visible_after(was_visible: bool, intersecting: bool) -> bool {
    was_visible || intersecting
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_intersection_reveals() {
        assert!(!visible_after(false, false));
        assert!(visible_after(false, true));
    }

    #[test]
    fn marker_is_never_removed() {
        let reports = [true, false, false, true, false];
        let mut visible = false;
        let mut seen = false;
        for intersecting in reports {
            visible = visible_after(visible, intersecting);
            seen |= intersecting;
            assert_eq!(visible, seen);
        }
        assert!(visible);
    }
}
