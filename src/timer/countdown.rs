//! Countdown timer background task

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::{
    sync::watch,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use super::{TimeValue, TimerState};

/// Tick callback, called with remaining minutes and seconds
pub type TickFn = Arc<dyn Fn(u64, u64) + Send + Sync>;

/// Shortest tick interval a timer accepts
pub const MIN_GRANULARITY: Duration = Duration::from_millis(1);

/// The surface a page needs from a countdown
pub trait Countdown: Send + Sync {
    /// Split a total-seconds count into minutes and seconds
    fn parse(total_seconds: u64) -> TimeValue
    where
        Self: Sized,
    {
        TimeValue::parse(total_seconds)
    }

    /// Register a callback for every tick
    fn on_tick(&self, callback: TickFn);

    /// Start counting down. Returns false if already running.
    fn start(&self) -> bool;
}

/// A countdown from a fixed number of seconds to zero
///
/// The first tick fires synchronously from `start` and the rest once per
/// granularity, each one carrying the whole seconds still remaining. The
/// last tick carries zero.
#[derive(Clone)]
pub struct CountDownTimer {
    inner: Arc<Inner>,
}

struct Inner {
    duration_seconds: u64,
    granularity: Duration,
    tick_fns: Mutex<Vec<TickFn>>,
    /// Holds the phase. `start` checks and sets it under the channel lock
    state_tx: watch::Sender<TimerState>,
}

impl CountDownTimer {
    /// Create a timer that ticks once per second
    pub fn new(duration_seconds: u64) -> Self {
        Self::with_granularity(duration_seconds, Duration::from_secs(1))
    }

    /// Create a timer with a custom tick interval, raised to at least `MIN_GRANULARITY`
    pub fn with_granularity(duration_seconds: u64, granularity: Duration) -> Self {
        if granularity < MIN_GRANULARITY {
            warn!("Tick interval {:?} too short, using {:?}", granularity, MIN_GRANULARITY);
        }
        let (state_tx, _) = watch::channel(TimerState::idle(duration_seconds));

        Self {
            inner: Arc::new(Inner {
                duration_seconds,
                granularity: granularity.max(MIN_GRANULARITY),
                tick_fns: Mutex::new(Vec::new()),
                state_tx,
            }),
        }
    }

    pub fn duration_seconds(&self) -> u64 {
        self.inner.duration_seconds
    }

    pub fn granularity(&self) -> Duration {
        self.inner.granularity
    }

    /// True once the countdown has reached zero
    pub fn expired(&self) -> bool {
        self.state().is_finished()
    }

    /// Current timer state
    pub fn state(&self) -> TimerState {
        self.inner.state_tx.borrow().clone()
    }

    /// Watch timer state changes
    pub fn subscribe(&self) -> watch::Receiver<TimerState> {
        self.inner.state_tx.subscribe()
    }

    /// Number of registered tick callbacks
    pub fn tick_fn_count(&self) -> usize {
        self.inner.tick_fns.lock().map(|fns| fns.len()).unwrap_or(0)
    }
}

impl Countdown for CountDownTimer {
    fn on_tick(&self, callback: TickFn) {
        match self.inner.tick_fns.lock() {
            Ok(mut fns) => fns.push(callback),
            Err(e) => warn!("Failed to lock tick callbacks: {}", e),
        }
    }

    /// Must be called from within a Tokio runtime
    fn start(&self) -> bool {
        let duration = self.inner.duration_seconds;
        let mut restarted = None;
        self.inner.state_tx.send_if_modified(|state| {
            if state.is_running() {
                return false;
            }
            restarted = Some(state.is_finished());
            *state = TimerState::running(duration);
            true
        });

        let Some(restarted) = restarted else {
            debug!("Countdown already running, ignoring start");
            return false;
        };
        if restarted {
            info!("Restarting countdown from {}s", duration);
        } else {
            info!("Starting countdown from {}s", duration);
        }

        let started = Instant::now();
        self.inner.emit(TimeValue::parse(duration));
        if duration == 0 {
            self.inner.finish();
            return true;
        }

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            inner.run(started).await;
        });

        true
    }
}

impl Inner {
    async fn run(&self, started: Instant) {
        let mut ticker = interval_at(started + self.granularity, self.granularity);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let elapsed = started.elapsed().as_secs();
            let remaining = self.duration_seconds.saturating_sub(elapsed);

            let value = TimeValue::parse(remaining);
            debug!("Countdown tick: {}m {}s remaining", value.minutes, value.seconds);
            self.emit(value);

            if remaining == 0 {
                self.finish();
                break;
            }
            self.state_tx.send_replace(TimerState::running(remaining));
        }
    }

    fn finish(&self) {
        self.state_tx.send_replace(TimerState::finished());
        info!("Countdown finished");
    }

    fn emit(&self, value: TimeValue) {
        // Callbacks run without the registry lock held
        let fns: Vec<TickFn> = match self.tick_fns.lock() {
            Ok(fns) => fns.clone(),
            Err(e) => {
                warn!("Failed to lock tick callbacks: {}", e);
                return;
            }
        };

        for tick in fns {
            tick(value.minutes, value.seconds);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::TimerPhase;

    fn recorder(timer: &CountDownTimer) -> Arc<Mutex<Vec<(u64, u64)>>> {
        let ticks = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&ticks);
        timer.on_tick(Arc::new(move |m: u64, s: u64| sink.lock().unwrap().push((m, s))));
        ticks
    }

    async fn wait_finished(timer: &CountDownTimer) {
        let mut rx = timer.subscribe();
        rx.wait_for(|state| state.is_finished()).await.unwrap();
    }

    #[test]
    fn new_timer_is_idle() {
        let timer = CountDownTimer::new(900);
        assert_eq!(timer.state(), TimerState::idle(900));
        assert!(!timer.expired());
        assert_eq!(CountDownTimer::parse(900), TimeValue { minutes: 15, seconds: 0 });
    }

    #[tokio::test(start_paused = true)]
    async fn counts_down_to_zero() {
        let timer = CountDownTimer::new(3);
        let ticks = recorder(&timer);

        assert!(timer.start());
        wait_finished(&timer).await;

        assert_eq!(*ticks.lock().unwrap(), vec![(0, 3), (0, 2), (0, 1), (0, 0)]);
        assert!(timer.expired());
        assert_eq!(timer.state().remaining_seconds, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_carry_minutes() {
        let timer = CountDownTimer::new(61);
        let ticks = recorder(&timer);

        timer.start();
        wait_finished(&timer).await;

        let ticks = ticks.lock().unwrap();
        assert_eq!(ticks.len(), 62);
        assert_eq!(ticks[0], (1, 1));
        assert_eq!(ticks[1], (1, 0));
        assert_eq!(ticks[2], (0, 59));
    }

    #[tokio::test(start_paused = true)]
    async fn start_while_running_is_ignored() {
        let timer = CountDownTimer::new(5);
        let ticks = recorder(&timer);

        assert!(timer.start());
        assert!(!timer.start());
        assert_eq!(timer.state().phase, TimerPhase::Running);

        wait_finished(&timer).await;
        assert_eq!(ticks.lock().unwrap().len(), 6);
    }

    #[tokio::test(start_paused = true)]
    async fn restarts_after_finishing() {
        let timer = CountDownTimer::new(1);
        let ticks = recorder(&timer);

        timer.start();
        wait_finished(&timer).await;

        assert!(timer.start());
        assert_eq!(timer.state(), TimerState::running(1));
        wait_finished(&timer).await;

        assert_eq!(*ticks.lock().unwrap(), vec![(0, 1), (0, 0), (0, 1), (0, 0)]);
    }

    #[tokio::test(start_paused = true)]
    async fn callbacks_run_in_registration_order() {
        let timer = CountDownTimer::new(0);
        let order = Arc::new(Mutex::new(Vec::new()));
        for id in 0..3 {
            let order = Arc::clone(&order);
            timer.on_tick(Arc::new(move |_: u64, _: u64| order.lock().unwrap().push(id)));
        }
        assert_eq!(timer.tick_fn_count(), 3);

        timer.start();
        wait_finished(&timer).await;

        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn start_emits_full_duration_before_returning() {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .start_paused(true)
            .build()
            .unwrap();
        let timer = CountDownTimer::new(90);
        let ticks = recorder(&timer);

        rt.block_on(async {
            assert!(timer.start());
            // Nothing has been awaited, so only the synchronous tick has run
            assert_eq!(*ticks.lock().unwrap(), vec![(1, 30)]);
        });
    }

    #[tokio::test(start_paused = true)]
    async fn restart_shows_full_duration_immediately() {
        let timer = CountDownTimer::new(2);
        let ticks = recorder(&timer);

        timer.start();
        wait_finished(&timer).await;
        assert_eq!(ticks.lock().unwrap().last(), Some(&(0, 0)));

        assert!(timer.start());
        assert_eq!(ticks.lock().unwrap().last(), Some(&(0, 2)));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_duration_finishes_inside_start() {
        let timer = CountDownTimer::new(0);
        let ticks = recorder(&timer);

        assert!(timer.start());
        assert!(timer.expired());
        assert_eq!(*ticks.lock().unwrap(), vec![(0, 0)]);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_granularity_is_raised_to_minimum() {
        let timer = CountDownTimer::with_granularity(1, Duration::ZERO);
        assert_eq!(timer.granularity(), MIN_GRANULARITY);
        let ticks = recorder(&timer);

        assert!(timer.start());
        wait_finished(&timer).await;

        let ticks = ticks.lock().unwrap();
        assert_eq!(ticks.first(), Some(&(0, 1)));
        assert_eq!(ticks.last(), Some(&(0, 0)));
        drop(ticks);

        assert!(timer.start());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn start_succeeds_as_soon_as_finished_is_visible() {
        let timer = CountDownTimer::with_granularity(1, Duration::from_millis(10));

        for _ in 0..3 {
            assert!(timer.start());
            wait_finished(&timer).await;
        }
        assert!(timer.start());
        assert!(timer.state().is_running());
    }
}
