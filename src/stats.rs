//! Rolling runtime statistics for the animation loop.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

const MAX_SAMPLES: usize = 60;

/// Tick and render timing tracker
#[derive(Debug, Clone)]
pub struct TickStats {
    tick_times: VecDeque<Duration>,
    render_times: VecDeque<Duration>,
    lines_appended: u64,
    start_time: Instant,
}

impl Default for TickStats {
    fn default() -> Self {
        Self::new()
    }
}

impl TickStats {
    pub fn new() -> Self {
        Self {
            tick_times: VecDeque::with_capacity(MAX_SAMPLES),
            render_times: VecDeque::with_capacity(MAX_SAMPLES),
            lines_appended: 0,
            start_time: Instant::now(),
        }
    }

    /// Record one completed tick
    pub fn record_tick(&mut self, elapsed: Duration) {
        self.lines_appended += 1;
        Self::push_sample(&mut self.tick_times, elapsed);
    }

    /// Record one completed frame paint
    pub fn record_render(&mut self, elapsed: Duration) {
        Self::push_sample(&mut self.render_times, elapsed);
    }

    pub fn lines_appended(&self) -> u64 {
        self.lines_appended
    }

    pub fn avg_tick_time(&self) -> Duration {
        Self::average(&self.tick_times)
    }

    pub fn avg_render_time(&self) -> Duration {
        Self::average(&self.render_times)
    }

    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    fn push_sample(samples: &mut VecDeque<Duration>, elapsed: Duration) {
        samples.push_back(elapsed);
        while samples.len() > MAX_SAMPLES {
            samples.pop_front();
        }
    }

    fn average(samples: &VecDeque<Duration>) -> Duration {
        if samples.is_empty() {
            return Duration::ZERO;
        }
        samples.iter().sum::<Duration>() / samples.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_lines() {
        let mut stats = TickStats::new();
        for _ in 0..5 {
            stats.record_tick(Duration::from_micros(100));
        }
        assert_eq!(stats.lines_appended(), 5);
    }

    #[test]
    fn test_averages() {
        let mut stats = TickStats::new();
        assert_eq!(stats.avg_tick_time(), Duration::ZERO);

        stats.record_tick(Duration::from_millis(2));
        stats.record_tick(Duration::from_millis(4));
        assert_eq!(stats.avg_tick_time(), Duration::from_millis(3));

        stats.record_render(Duration::from_millis(6));
        assert_eq!(stats.avg_render_time(), Duration::from_millis(6));
    }

    #[test]
    fn test_sample_window_is_bounded() {
        let mut stats = TickStats::new();
        for _ in 0..500 {
            stats.record_tick(Duration::from_micros(50));
        }
        assert_eq!(stats.lines_appended(), 500);
        assert!(stats.tick_times.len() <= MAX_SAMPLES);
    }
}
