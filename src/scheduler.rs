/// Periodic refresh of games and standings
///
/// Each kind of data is polled by its own tokio task, so a slow standings
/// request never delays a games refresh or the rotation. Results travel to the
/// runtime as actions; failures stay here.
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::dashboard::Action;
use crate::data_provider::{FetchKind, MlbDataProvider};
use crate::error::FetchError;

/// Shortest period handed to a tokio timer, which panics on zero
pub const MIN_TIMER_PERIOD: Duration = Duration::from_millis(1);

/// Refresh periods of the two fetch tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchIntervals {
    pub scores: Duration,
    pub standings: Duration,
}

impl Default for FetchIntervals {
    fn default() -> Self {
        Self {
            scores: Duration::from_millis(120_000),
            standings: Duration::from_millis(900_000),
        }
    }
}

impl FetchIntervals {
    /// Zero periods raised to `MIN_TIMER_PERIOD`
    pub fn clamped(self) -> Self {
        Self {
            scores: self.scores.max(MIN_TIMER_PERIOD),
            standings: self.standings.max(MIN_TIMER_PERIOD),
        }
    }
}

pub struct FetchScheduler {
    tasks: Vec<JoinHandle<()>>,
    games_failures: Arc<AtomicU64>,
    standings_failures: Arc<AtomicU64>,
}

impl FetchScheduler {
    /// Start both fetch tasks; each fetches once right away
    pub fn spawn(
        provider: Arc<dyn MlbDataProvider>,
        intervals: FetchIntervals,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> Self {
        let intervals = intervals.clamped();
        let games_failures = Arc::new(AtomicU64::new(0));
        let standings_failures = Arc::new(AtomicU64::new(0));

        let tasks = vec![
            tokio::spawn(poll_loop(
                Arc::clone(&provider),
                FetchKind::Games,
                intervals.scores,
                action_tx.clone(),
                Arc::clone(&games_failures),
            )),
            tokio::spawn(poll_loop(
                provider,
                FetchKind::Standings,
                intervals.standings,
                action_tx,
                Arc::clone(&standings_failures),
            )),
        ];

        debug!(
            "SCHEDULER: started (games every {:?}, standings every {:?})",
            intervals.scores, intervals.standings
        );

        Self {
            tasks,
            games_failures,
            standings_failures,
        }
    }

    /// Failed fetches of `kind` since spawn
    pub fn failures(&self, kind: FetchKind) -> u64 {
        match kind {
            FetchKind::Games => self.games_failures.load(Ordering::Relaxed),
            FetchKind::Standings => self.standings_failures.load(Ordering::Relaxed),
        }
    }

    /// True while at least one fetch task is still running
    pub fn is_running(&self) -> bool {
        self.tasks.iter().any(|task| !task.is_finished())
    }

    /// Stop both tasks. An in-flight fetch is dropped.
    pub fn shutdown(&self) {
        for task in &self.tasks {
            task.abort();
        }
        debug!("SCHEDULER: stopped");
    }
}

impl Drop for FetchScheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// One fetch of `kind`, with the number of records it returned
async fn fetch_once(
    provider: &dyn MlbDataProvider,
    kind: FetchKind,
) -> Result<(Action, usize), FetchError> {
    match kind {
        FetchKind::Games => {
            let games = provider.todays_games().await?;
            let count = games.len();
            Ok((Action::GamesLoaded(games), count))
        }
        FetchKind::Standings => {
            let standings = provider.current_standings().await?;
            let count = standings.len();
            Ok((Action::StandingsLoaded(standings), count))
        }
    }
}

async fn poll_loop(
    provider: Arc<dyn MlbDataProvider>,
    kind: FetchKind,
    period: Duration,
    action_tx: mpsc::UnboundedSender<Action>,
    failures: Arc<AtomicU64>,
) {
    let mut timer = tokio::time::interval(period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        timer.tick().await;

        match fetch_once(provider.as_ref(), kind).await {
            Ok((action, count)) => {
                info!("FETCH: {} refreshed ({} records)", kind.name(), count);
                if action_tx.send(action).is_err() {
                    debug!("FETCH: {} receiver closed, stopping", kind.name());
                    break;
                }
            }
            Err(e) => {
                let total = failures.fetch_add(1, Ordering::Relaxed) + 1;
                warn!("FETCH: {} refresh failed ({} so far): {}", kind.name(), total, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::testing::ScriptedProvider;
    use tokio::time::{sleep, Instant};

    fn intervals() -> FetchIntervals {
        FetchIntervals::default()
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_fetch_is_immediate() {
        let provider = Arc::new(
            ScriptedProvider::new()
                .with_games(vec![Ok(fixtures::create_mock_games(3))])
                .with_standings(vec![Ok(fixtures::create_mock_standings())]),
        );
        let (tx, mut rx) = mpsc::unbounded_channel();
        let start = Instant::now();
        let _scheduler = FetchScheduler::spawn(provider, intervals(), tx);

        let mut games = None;
        let mut standings = None;
        for _ in 0..2 {
            match rx.recv().await {
                Some(Action::GamesLoaded(g)) => games = Some(g.len()),
                Some(Action::StandingsLoaded(s)) => standings = Some(s.len()),
                other => panic!("unexpected {:?}", other),
            }
        }

        assert_eq!(games, Some(3));
        assert_eq!(standings, Some(30));
        assert_eq!(Instant::now(), start);
    }

    #[test]
    fn test_zero_intervals_are_clamped() {
        let intervals = FetchIntervals {
            scores: Duration::ZERO,
            standings: Duration::from_secs(900),
        }
        .clamped();
        assert_eq!(intervals.scores, MIN_TIMER_PERIOD);
        assert_eq!(intervals.standings, Duration::from_secs(900));
    }

    #[tokio::test(start_paused = true)]
    async fn test_spawn_with_zero_intervals_fetches() {
        let provider = Arc::new(
            ScriptedProvider::new()
                .with_games(vec![Ok(fixtures::create_mock_games(2))])
                .with_standings(vec![Ok(fixtures::create_mock_standings())]),
        );
        let (tx, mut rx) = mpsc::unbounded_channel();
        let intervals = FetchIntervals {
            scores: Duration::ZERO,
            standings: Duration::ZERO,
        };
        let scheduler = FetchScheduler::spawn(provider, intervals, tx);

        let mut received = 0;
        while received < 2 {
            match rx.recv().await {
                Some(Action::GamesLoaded(_)) | Some(Action::StandingsLoaded(_)) => received += 1,
                other => panic!("unexpected {:?}", other),
            }
        }
        assert!(scheduler.is_running());
        scheduler.shutdown();
    }

    #[tokio::test(start_paused = true)]
    async fn test_refetches_on_each_interval() {
        let provider = Arc::new(
            ScriptedProvider::new()
                .with_games(vec![
                    Ok(fixtures::create_mock_games(1)),
                    Ok(fixtures::create_mock_games(2)),
                    Ok(fixtures::create_mock_games(3)),
                ])
                .with_standings(vec![Ok(Vec::new())]),
        );
        let (tx, mut rx) = mpsc::unbounded_channel();
        let start = Instant::now();
        let _scheduler = FetchScheduler::spawn(provider, intervals(), tx);

        let mut arrivals = Vec::new();
        while arrivals.len() < 3 {
            if let Some(Action::GamesLoaded(g)) = rx.recv().await {
                arrivals.push((g.len(), (Instant::now() - start).as_secs()));
            }
        }

        assert_eq!(arrivals, vec![(1, 0), (2, 120), (3, 240)]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failures_are_counted_and_not_sent() {
        let provider = Arc::new(
            ScriptedProvider::new()
                .with_games(vec![Ok(fixtures::create_mock_games(20))])
                .with_standings(vec![Ok(fixtures::create_mock_standings())]),
        );
        let (tx, mut rx) = mpsc::unbounded_channel();
        let scheduler = FetchScheduler::spawn(provider, intervals(), tx);

        for _ in 0..3 {
            sleep(Duration::from_millis(120_001)).await;
        }

        assert_eq!(scheduler.failures(FetchKind::Games), 3);
        assert_eq!(scheduler.failures(FetchKind::Standings), 0);

        let mut delivered = 0;
        while let Ok(action) = rx.try_recv() {
            assert!(matches!(action, Action::GamesLoaded(_) | Action::StandingsLoaded(_)));
            delivered += 1;
        }
        assert_eq!(delivered, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_kinds_run_independently() {
        // Standings keep failing; games still arrive on schedule
        let provider = Arc::new(ScriptedProvider::new().with_games(vec![
            Ok(fixtures::create_mock_games(4)),
            Ok(fixtures::create_mock_games(5)),
        ]));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let scheduler = FetchScheduler::spawn(provider, intervals(), tx);

        let first = rx.recv().await;
        let second = rx.recv().await;
        assert!(matches!(first, Some(Action::GamesLoaded(ref g)) if g.len() == 4));
        assert!(matches!(second, Some(Action::GamesLoaded(ref g)) if g.len() == 5));
        assert_eq!(scheduler.failures(FetchKind::Standings), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_when_receiver_closed() {
        let provider = Arc::new(
            ScriptedProvider::new()
                .with_games(vec![Ok(Vec::new())])
                .with_standings(vec![Ok(Vec::new())]),
        );
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let scheduler = FetchScheduler::spawn(provider, intervals(), tx);

        sleep(Duration::from_millis(10)).await;
        assert!(!scheduler.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_stops_fetching() {
        let provider = Arc::new(ScriptedProvider::new().with_games(vec![Ok(Vec::new())]));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let scheduler = FetchScheduler::spawn(provider, intervals(), tx);

        assert!(rx.recv().await.is_some());
        scheduler.shutdown();
        sleep(Duration::from_secs(1_000)).await;

        assert!(!scheduler.is_running());
        assert!(rx.recv().await.is_none());
    }
}
