//! Matching utilities for frame-to-frame face association.

use crate::tracker::face_box::FaceBox;
use ndarray::Array2;

/// Compute the center distance matrix between detections and previous boxes.
///
/// Returns a matrix of shape (M, N) where M is the length of `detections`
/// and N is the length of `previous`.
pub fn center_distance(detections: &[FaceBox], previous: &[FaceBox]) -> Array2<f32> {
    let mut dists = Array2::zeros((detections.len(), previous.len()));
    for (i, d) in detections.iter().enumerate() {
        for (j, p) in previous.iter().enumerate() {
            dists[[i, j]] = d.center_distance(p);
        }
    }
    dists
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentResult {
    /// `(detection index, previous index)` pairs, in detection order.
    pub matches: Vec<(usize, usize)>,
    pub unmatched_detections: Vec<usize>,
    pub unmatched_previous: Vec<usize>,
}

impl AssignmentResult {
    /// Previous box index claimed by detection `det`, if any.
    pub fn match_for(&self, det: usize) -> Option<usize> {
        self.matches
            .iter()
            .find(|(d, _)| *d == det)
            .map(|&(_, p)| p)
    }
}

/// Greedy first-come-first-served assignment.
///
/// Rows (detections) are visited in order; each claims the nearest still
/// unclaimed column if its cost is strictly below `gate`. Ties go to the
/// lowest column index. This is not a globally optimal assignment and can
/// swap identities when tracks cross.
pub fn greedy_assignment(cost_matrix: &Array2<f32>, gate: f32) -> AssignmentResult {
    let (num_rows, num_cols) = cost_matrix.dim();
    let mut claimed = vec![false; num_cols];
    let mut matches = Vec::new();
    let mut unmatched_detections = Vec::new();

    for row in 0..num_rows {
        let mut best: Option<(usize, f32)> = None;
        for col in 0..num_cols {
            if claimed[col] {
                continue;
            }
            let cost = cost_matrix[[row, col]];
            match best {
                Some((_, best_cost)) if cost >= best_cost => {}
                _ => best = Some((col, cost)),
            }
        }

        match best {
            Some((col, cost)) if cost < gate => {
                claimed[col] = true;
                matches.push((row, col));
            }
            _ => unmatched_detections.push(row),
        }
    }

    let unmatched_previous = claimed
        .iter()
        .enumerate()
        .filter_map(|(i, &c)| if c { None } else { Some(i) })
        .collect();

    AssignmentResult {
        matches,
        unmatched_detections,
        unmatched_previous,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_center_distance_matrix() {
        let dets = [FaceBox::new(0, 0, 10, 10), FaceBox::new(30, 40, 10, 10)];
        let prev = [FaceBox::new(0, 0, 10, 10)];
        let dists = center_distance(&dets, &prev);

        assert_eq!(dists.dim(), (2, 1));
        assert_relative_eq!(dists[[0, 0]], 0.0);
        assert_relative_eq!(dists[[1, 0]], 50.0);
    }

    #[test]
    fn test_empty_previous_leaves_everything_unmatched() {
        let dists = center_distance(&[FaceBox::new(0, 0, 10, 10)], &[]);
        let result = greedy_assignment(&dists, 150.0);
        assert!(result.matches.is_empty());
        assert_eq!(result.unmatched_detections, vec![0]);
        assert!(result.unmatched_previous.is_empty());
    }

    #[test]
    fn test_gate_is_strict() {
        let cost = array![[150.0_f32], [149.9]];
        let result = greedy_assignment(&cost, 150.0);
        assert_eq!(result.matches, vec![(1, 0)]);
        assert_eq!(result.unmatched_detections, vec![0]);
    }

    #[test]
    fn test_first_detection_wins_contested_box() {
        // Detection 1 is closer to column 0, but detection 0 comes first.
        let cost = array![[20.0_f32, 90.0], [5.0, 30.0]];
        let result = greedy_assignment(&cost, 150.0);
        assert_eq!(result.matches, vec![(0, 0), (1, 1)]);
        assert_eq!(result.match_for(1), Some(1));
    }

    #[test]
    fn test_ties_go_to_lowest_index() {
        let cost = array![[10.0_f32, 10.0]];
        let result = greedy_assignment(&cost, 150.0);
        assert_eq!(result.matches, vec![(0, 0)]);
        assert_eq!(result.unmatched_previous, vec![1]);
    }

    #[test]
    fn test_each_column_claimed_once() {
        let cost = array![[1.0_f32], [1.0], [1.0]];
        let result = greedy_assignment(&cost, 150.0);
        assert_eq!(result.matches, vec![(0, 0)]);
        assert_eq!(result.unmatched_detections, vec![1, 2]);
        assert_eq!(result.match_for(2), None);
    }
}
