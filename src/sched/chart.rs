//! Chart-ready trace of a head walk
//!
//! Each position of the collapsed walk becomes one point. The first point is the
//! head and carries the label `Head`; later points are labeled with the
//! algorithm's tag and their ordinal (`S1`, `S2`, ... for SCAN). Labels are purely
//! cosmetic.

use super::Algorithm;
use serde::Serialize;

/// Label of the starting point
pub const HEAD_LABEL: &str = "Head";

/// One point of a seek chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    /// Step number, `None` for the head
    pub index: Option<usize>,
    /// Cylinder
    pub position: u64,
}

/// Map a walk (head first) to chart points
pub fn chart_points(walk: &[u64], algorithm: Algorithm) -> Vec<ChartPoint> {
    let tag = algorithm.chart_tag();

    walk.iter()
        .enumerate()
        .map(|(i, &position)| {
            if i == 0 {
                ChartPoint {
                    label: HEAD_LABEL.to_string(),
                    index: None,
                    position,
                }
            } else {
                ChartPoint {
                    label: format!("{}{}", tag, i),
                    index: Some(i),
                    position,
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sched::{cscan, fcfs};

    #[test]
    fn test_head_point_first() {
        let points = chart_points(&[50, 82, 170], Algorithm::Scan);
        assert_eq!(points[0].label, "Head");
        assert_eq!(points[0].index, None);
        assert_eq!(points[0].position, 50);
        assert_eq!(points[1].label, "S1");
        assert_eq!(points[2].label, "S2");
        assert_eq!(points[2].index, Some(2));
    }

    #[test]
    fn test_tags_per_algorithm() {
        let walk = [10, 20];
        let labels: Vec<String> = Algorithm::ALL
            .iter()
            .map(|&a| chart_points(&walk, a)[1].label.clone())
            .collect();
        assert_eq!(labels, vec!["R1", "R1", "S1", "C1", "L1", "CL1"]);
    }

    #[test]
    fn test_points_follow_collapsed_walk() {
        let result = fcfs(&[43, 82], 43);
        let positions: Vec<u64> = result.chart_points.iter().map(|p| p.position).collect();
        assert_eq!(positions, vec![43, 82]);

        let result = cscan(&[82, 170, 43, 140, 24, 16, 190], 50, 200);
        assert_eq!(result.chart_points.len(), result.seek_sequence.len() + 1);
        let positions: Vec<u64> = result.chart_points.iter().map(|p| p.position).collect();
        assert_eq!(positions, result.walk());
    }

    #[test]
    fn test_empty_walk() {
        assert!(chart_points(&[], Algorithm::Fcfs).is_empty());
    }
}
