use crate::core::{SelectedTick, TickCandidate};

/// Keeps candidates whose index is a multiple of `interval + 1`.
#[must_use]
pub fn select_by_interval(candidates: &[TickCandidate], interval: usize) -> Vec<SelectedTick> {
    candidates
        .iter()
        .copied()
        .enumerate()
        .step_by(interval.saturating_add(1))
        .map(|(index, candidate)| SelectedTick::unshifted(index, candidate))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::select_by_interval;
    use crate::core::TickCandidate;

    fn candidates(count: usize) -> Vec<TickCandidate> {
        (0..count)
            .map(|i| TickCandidate::new(i as f64, i as f64 * 10.0))
            .collect()
    }

    #[test]
    fn zero_interval_keeps_everything() {
        assert_eq!(select_by_interval(&candidates(7), 0).len(), 7);
    }

    #[test]
    fn interval_two_keeps_every_third_index() {
        let indices: Vec<usize> = select_by_interval(&candidates(8), 2)
            .iter()
            .map(|tick| tick.index)
            .collect();
        assert_eq!(indices, vec![0, 3, 6]);
    }

    #[test]
    fn huge_interval_keeps_only_the_first() {
        let selected = select_by_interval(&candidates(5), usize::MAX);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].index, 0);
    }
}
