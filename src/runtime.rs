use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, error, trace};

use crate::dashboard::{present, reduce, Action, DashboardState};
use crate::renderer::Renderer;
use crate::scheduler::MIN_TIMER_PERIOD;

/// Dashboard control loop
///
/// The Runtime is responsible for:
/// - Owning the dashboard state (the only writer of cache and rotation)
/// - Receiving fetch results from the scheduler tasks
/// - Driving the rotation timer
/// - Re-rendering after every state change
pub struct Runtime {
    state: DashboardState,

    /// Channel for fetch results
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,

    /// Rotation period
    page_interval: Duration,
}

impl Runtime {
    pub fn new(initial_state: DashboardState, page_interval: Duration) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            state: initial_state,
            action_tx,
            action_rx,
            page_interval: page_interval.max(MIN_TIMER_PERIOD),
        }
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Get a sender for dispatching actions from the fetch tasks
    pub fn action_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    /// Apply an action through the reducer
    ///
    /// Uses mem::take so the cached lists are moved, not cloned.
    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
    }

    /// Process all pending actions in the queue
    ///
    /// Returns the number of actions processed
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        count
    }

    fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        if let Err(e) = present(&self.state, renderer) {
            error!("RENDER: failed: {}", e);
        }
    }

    /// Run until `shutdown` completes, rendering the current page after every
    /// fetch result and rotation tick. Returns the final state.
    ///
    /// The first rotation tick happens one `page_interval` after start.
    pub async fn run<R, F>(mut self, renderer: &mut R, shutdown: F) -> DashboardState
    where
        R: Renderer + ?Sized,
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        let period = self.page_interval;
        let mut page_timer = tokio::time::interval_at(Instant::now() + period, period);
        page_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        debug!("RUNTIME: started, rotating every {:?}", period);
        self.render(renderer);

        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => break,
                Some(action) = self.action_rx.recv() => self.dispatch(action),
                _ = page_timer.tick() => self.dispatch(Action::RotationTick),
            }
            self.render(renderer);
        }

        debug!("RUNTIME: stopped");
        self.state
    }
}
