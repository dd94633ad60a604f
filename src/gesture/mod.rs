use std::time::{Duration, Instant};

pub const DEFAULT_HOLD_DURATION: Duration = Duration::from_millis(1800);

/// Outcome of one frame sample of an active hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoldSample {
    /// Hold still in progress; payload is the elapsed fraction in [0, 1).
    Holding(f64),
    /// The hold just reached full duration. Reported exactly once per
    /// session; the timeline is back at rest when this is returned.
    Completed,
}

/// Timing core of the hold-to-enter gesture.
///
/// Converts a sustained press into a normalized progress value over a fixed
/// duration. The clock is injected: callers feed `Instant`s into `start` and
/// `sample`, which keeps the whole session logic runnable without a display.
#[derive(Debug)]
pub struct HoldTimeline {
    duration: Duration,
    holding: bool,
    progress: f64,
    started_at: Option<Instant>,
}

impl HoldTimeline {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration: duration.max(Duration::from_millis(1)),
            holding: false,
            progress: 0.0,
            started_at: None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn holding(&self) -> bool {
        self.holding
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Begins a hold session. A no-op while a session is active, so repeated
    /// press events (including keyboard auto-repeat) never reset the start
    /// timestamp or double-schedule sampling.
    pub fn start(&mut self, now: Instant) {
        if self.holding {
            return;
        }
        self.holding = true;
        self.progress = 0.0;
        self.started_at = Some(now);
        tracing::debug!(duration_ms = self.duration.as_millis() as u64, "hold started");
    }

    /// Samples the active session. Progress is `min(1, elapsed / duration)`
    /// and is non-decreasing across samples of one session. On reaching full
    /// progress the session ends in the same call: the timeline rests and
    /// `Completed` is returned, never to be repeated for this session.
    pub fn sample(&mut self, now: Instant) -> HoldSample {
        let Some(started_at) = self.started_at else {
            return HoldSample::Holding(self.progress);
        };

        let elapsed = now.saturating_duration_since(started_at);
        let fraction = (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0);

        if fraction >= 1.0 {
            self.reset();
            tracing::debug!("hold completed");
            return HoldSample::Completed;
        }

        self.progress = fraction;
        HoldSample::Holding(fraction)
    }

    /// Ends the session without completing it. Idempotent and safe to call
    /// when no session is active.
    pub fn cancel(&mut self) {
        if self.holding {
            tracing::debug!(progress = self.progress, "hold cancelled");
        }
        self.reset();
    }

    fn reset(&mut self) {
        self.holding = false;
        self.progress = 0.0;
        self.started_at = None;
    }
}

impl Default for HoldTimeline {
    fn default() -> Self {
        Self::new(DEFAULT_HOLD_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(origin: Instant, millis: u64) -> Instant {
        origin + Duration::from_millis(millis)
    }

    #[test]
    fn timeline_rests_until_started() {
        let mut timeline = HoldTimeline::default();
        assert!(!timeline.holding());
        assert_eq!(timeline.progress(), 0.0);

        let sample = timeline.sample(Instant::now());
        assert_eq!(sample, HoldSample::Holding(0.0));
    }

    #[test]
    fn progress_is_elapsed_fraction_of_duration() {
        let origin = Instant::now();
        let mut timeline = HoldTimeline::new(Duration::from_millis(1800));
        timeline.start(origin);

        assert_eq!(timeline.sample(at(origin, 450)), HoldSample::Holding(0.25));
        assert_eq!(timeline.sample(at(origin, 900)), HoldSample::Holding(0.5));
        assert_eq!(timeline.sample(at(origin, 1350)), HoldSample::Holding(0.75));
        assert!(timeline.holding());
    }

    #[test]
    fn progress_never_decreases_within_a_session() {
        let origin = Instant::now();
        let mut timeline = HoldTimeline::new(Duration::from_millis(1000));
        timeline.start(origin);

        let mut last = 0.0;
        for millis in [100, 250, 250, 400, 700, 999] {
            match timeline.sample(at(origin, millis)) {
                HoldSample::Holding(fraction) => {
                    assert!(fraction >= last, "fraction={fraction}, last={last}");
                    last = fraction;
                }
                HoldSample::Completed => panic!("session should not complete before 1000ms"),
            }
        }
    }

    #[test]
    fn full_hold_completes_once_and_rests_the_timeline() {
        let origin = Instant::now();
        let mut timeline = HoldTimeline::new(Duration::from_millis(1800));
        timeline.start(origin);

        assert_eq!(timeline.sample(at(origin, 1800)), HoldSample::Completed);
        assert!(!timeline.holding());
        assert_eq!(timeline.progress(), 0.0);

        // A stray sample after completion must not report completion again.
        assert_eq!(timeline.sample(at(origin, 2000)), HoldSample::Holding(0.0));
    }

    #[test]
    fn reentrant_start_keeps_the_original_timestamp() {
        let origin = Instant::now();
        let mut timeline = HoldTimeline::new(Duration::from_millis(1800));
        timeline.start(origin);
        timeline.start(at(origin, 500));

        assert_eq!(timeline.sample(at(origin, 900)), HoldSample::Holding(0.5));
        assert_eq!(timeline.sample(at(origin, 1800)), HoldSample::Completed);
    }

    #[test]
    fn cancel_resets_progress_and_holding() {
        let origin = Instant::now();
        let mut timeline = HoldTimeline::new(Duration::from_millis(1800));
        timeline.start(origin);
        let _ = timeline.sample(at(origin, 900));

        timeline.cancel();
        assert!(!timeline.holding());
        assert_eq!(timeline.progress(), 0.0);

        // No completion can follow a cancelled session.
        assert_eq!(timeline.sample(at(origin, 1800)), HoldSample::Holding(0.0));
    }

    #[test]
    fn cancel_is_idempotent_when_not_holding() {
        let mut timeline = HoldTimeline::default();
        timeline.cancel();
        timeline.cancel();
        assert!(!timeline.holding());
        assert_eq!(timeline.progress(), 0.0);
    }

    #[test]
    fn session_restarts_cleanly_after_cancel() {
        let origin = Instant::now();
        let mut timeline = HoldTimeline::new(Duration::from_millis(1000));
        timeline.start(origin);
        let _ = timeline.sample(at(origin, 600));
        timeline.cancel();

        timeline.start(at(origin, 2000));
        assert_eq!(timeline.sample(at(origin, 2500)), HoldSample::Holding(0.5));
        assert_eq!(timeline.sample(at(origin, 3000)), HoldSample::Completed);
    }

    #[test]
    fn overshooting_samples_clamp_to_completion() {
        let origin = Instant::now();
        let mut timeline = HoldTimeline::new(Duration::from_millis(100));
        timeline.start(origin);

        // A late first frame lands well past the duration.
        assert_eq!(timeline.sample(at(origin, 5000)), HoldSample::Completed);
    }

    #[test]
    fn zero_duration_is_clamped_rather_than_dividing_by_zero() {
        let origin = Instant::now();
        let mut timeline = HoldTimeline::new(Duration::ZERO);
        timeline.start(origin);
        assert_eq!(timeline.sample(at(origin, 1)), HoldSample::Completed);
    }
}
