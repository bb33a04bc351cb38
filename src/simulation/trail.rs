//! Bounded per-body position history used for trajectory rendering.
//!
//! A fixed-capacity FIFO: pushing past the cap evicts the oldest point.

use std::collections::VecDeque;

use crate::simulation::states::NVec3;

#[derive(Debug, Clone)]
pub struct TrailBuffer {
    points: VecDeque<NVec3>,
    capacity: usize,
}

impl TrailBuffer {
    /// A capacity of zero is bumped to one so a trail can always hold
    /// the latest point
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, p: NVec3) {
        self.points.push_back(p);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<&NVec3> {
        self.points.back()
    }

    /// Oldest first
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NVec3> + DoubleEndedIterator {
        self.points.iter()
    }
}

/// Decides which integrator sub-steps within a frame get recorded.
///
/// With `steps_per_frame` sub-steps and a target of `samples_per_frame`
/// points, every `max(1, steps / samples)`-th sub-step is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailSampler {
    interval: usize,
}

impl TrailSampler {
    pub fn new(steps_per_frame: usize, samples_per_frame: usize) -> Self {
        let interval = (steps_per_frame / samples_per_frame.max(1)).max(1);
        Self { interval }
    }

    pub fn interval(&self) -> usize {
        self.interval
    }

    /// `step` is the 0-based sub-step index within the current frame
    pub fn should_sample(&self, step: usize) -> bool {
        step % self.interval == self.interval - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampler_interval_floors_at_one() {
        assert_eq!(TrailSampler::new(1, 6).interval(), 1);
        assert_eq!(TrailSampler::new(12, 6).interval(), 2);
        assert_eq!(TrailSampler::new(10, 0).interval(), 10);
    }

    #[test]
    fn sampler_takes_last_step_of_each_interval() {
        let s = TrailSampler::new(12, 4);
        let taken: Vec<usize> = (0..12).filter(|&k| s.should_sample(k)).collect();
        assert_eq!(taken, vec![2, 5, 8, 11]);
    }

    #[test]
    fn zero_capacity_keeps_latest() {
        let mut t = TrailBuffer::new(0);
        t.push(NVec3::x());
        t.push(NVec3::y());
        assert_eq!(t.len(), 1);
        assert_eq!(t.latest(), Some(&NVec3::y()));
    }
}
