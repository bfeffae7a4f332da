use crate::game_logic::{CHECKPOINT_COUNT, TOTAL_LAPS};
use bevy::prelude::*;

/// Lap progress for one kart.
#[derive(Component, Clone, Debug)]
pub struct LapCounter {
    pub laps: u32,
    pub total_laps: u32,
    pub has_finished: bool,
    /// None until the kart has been observed in any checkpoint, so the
    /// first observation can never be miscounted as a lap.
    pub last_checkpoint: Option<usize>,
}

impl Default for LapCounter {
    fn default() -> Self {
        Self {
            laps: 0,
            total_laps: TOTAL_LAPS,
            has_finished: false,
            last_checkpoint: None,
        }
    }
}

/// Which quarter of the track a centerline index falls in, 0-3.
pub fn checkpoint_for(index: usize, track_len: usize) -> usize {
    assert!(track_len >= CHECKPOINT_COUNT, "track too short to quarter");
    (index / (track_len / CHECKPOINT_COUNT)).min(CHECKPOINT_COUNT - 1)
}

impl LapCounter {
    /// Record the checkpoint the kart currently sits in. A lap counts only
    /// on the forward wrap from the last quarter back to the first; any
    /// other transition (backward slips included) just moves the marker.
    pub fn observe(&mut self, checkpoint: usize) {
        if self.last_checkpoint == Some(checkpoint) {
            return;
        }
        if self.last_checkpoint == Some(CHECKPOINT_COUNT - 1) && checkpoint == 0 {
            self.laps += 1;
            info!("Lap complete {}", self.laps);
            if self.laps >= self.total_laps {
                self.has_finished = true;
            }
        }
        self.last_checkpoint = Some(checkpoint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkpoint_quarters() {
        assert_eq!(checkpoint_for(0, 32), 0);
        assert_eq!(checkpoint_for(7, 32), 0);
        assert_eq!(checkpoint_for(8, 32), 1);
        assert_eq!(checkpoint_for(16, 32), 2);
        assert_eq!(checkpoint_for(24, 32), 3);
        assert_eq!(checkpoint_for(31, 32), 3);
    }

    #[test]
    fn test_full_loop_counts_one_lap() {
        let mut counter = LapCounter::default();
        for checkpoint in [0, 1, 2, 3, 0] {
            counter.observe(checkpoint);
        }
        assert_eq!(counter.laps, 1);
    }

    #[test]
    fn test_backward_slip_counts_nothing() {
        let mut counter = LapCounter::default();
        for checkpoint in [0, 1, 2, 1, 0] {
            counter.observe(checkpoint);
        }
        assert_eq!(counter.laps, 0);
        assert_eq!(counter.last_checkpoint, Some(0));
    }

    #[test]
    fn test_first_observation_is_never_a_lap() {
        // spawning straight into quarter 0 must not count the 3 -> 0 wrap
        let mut counter = LapCounter::default();
        counter.observe(0);
        assert_eq!(counter.laps, 0);

        let mut from_last_quarter = LapCounter::default();
        from_last_quarter.observe(3);
        from_last_quarter.observe(0);
        // a real 3 -> 0 transition, observed from the very first frame on
        assert_eq!(from_last_quarter.laps, 1);
    }

    #[test]
    fn test_finish_flag_latches_at_total_laps() {
        let mut counter = LapCounter::default();
        for _ in 0..counter.total_laps {
            for checkpoint in [1, 2, 3, 0] {
                counter.observe(checkpoint);
            }
        }
        assert!(counter.has_finished);
        assert_eq!(counter.laps, counter.total_laps);
    }

    #[test]
    fn test_skipped_quarter_does_not_count() {
        // jumping 2 -> 0 without touching quarter 3 is not a lap
        let mut counter = LapCounter::default();
        for checkpoint in [0, 1, 2, 0] {
            counter.observe(checkpoint);
        }
        assert_eq!(counter.laps, 0);
    }
}
