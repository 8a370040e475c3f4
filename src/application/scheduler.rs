// Scheduler - repeating timer that drives poll cycles
use crate::application::poll_cycle::PollCycle;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

pub const DEFAULT_PERIOD: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Running,
}

/// Lives from `start` to `stop`.
struct Session {
    timer: JoinHandle<()>,
    started_at: Instant,
}

pub struct Scheduler {
    cycle: Arc<PollCycle>,
    period: Duration,
    session: Option<Session>,
}

impl Scheduler {
    pub fn new(cycle: Arc<PollCycle>, period: Duration) -> Self {
        Self {
            cycle,
            period,
            session: None,
        }
    }

    pub fn state(&self) -> SchedulerState {
        match self.session {
            Some(_) => SchedulerState::Running,
            None => SchedulerState::Idle,
        }
    }

    /// Fire one tick now, then one per period. Ticks are spawned and never awaited
    /// here, so a slow tick does not delay the next one. A stalled timer resumes on
    /// the period instead of firing the missed ticks back to back. Must be called from
    /// within a tokio runtime with a non-zero period.
    pub fn start(&mut self) {
        if self.state() == SchedulerState::Running {
            tracing::debug!("Scheduler already running");
            return;
        }

        spawn_tick(&self.cycle);

        let cycle = self.cycle.clone();
        let period = self.period;
        let timer = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                spawn_tick(&cycle);
            }
        });

        self.session = Some(Session {
            timer,
            started_at: Instant::now(),
        });
        tracing::info!("Polling telemetry every {} ms", self.period.as_millis());
    }

    /// Disarm the timer. Ticks already in flight run to completion.
    pub fn stop(&mut self) {
        if let Some(session) = self.session.take() {
            session.timer.abort();
            tracing::info!(
                "Polling stopped after {:.1}s",
                session.started_at.elapsed().as_secs_f64()
            );
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

fn spawn_tick(cycle: &Arc<PollCycle>) {
    let cycle = cycle.clone();
    tokio::spawn(async move {
        cycle.run().await;
    });
}
