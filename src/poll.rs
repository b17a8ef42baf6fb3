use std::time::{Duration, Instant};

use bon::Builder;
use itertools::Itertools;
use tokio::time::sleep;

use crate::{catalog::View, logger::Logger, prelude::*, publish::Dispatcher, transport::Transport};

/// Consecutive failed passes tolerated before the loop starts backing off.
const MAX_FAILURES: u32 = 3;

/// Shortest pause between passes, even if a pass overran the interval.
const MIN_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Default)]
struct PollState {
    /// Consecutive failures, reset by any successful view.
    failures: u32,

    pass_started_at: Option<Instant>,
}

/// How long to wait before the next pass.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Pause {
    pub delay: Duration,

    /// Extra interval added after too many failures.
    pub penalty: Duration,
}

impl Pause {
    pub const fn total(self) -> Duration {
        self.delay.saturating_add(self.penalty)
    }
}

#[derive(Builder)]
pub struct PollLoop<T> {
    logger: Logger<T>,
    dispatcher: Dispatcher,

    #[builder(into)]
    interval: Duration,

    /// Prepend the flat telemetry view to every pass.
    #[builder(default)]
    with_telemetry: bool,

    #[builder(skip)]
    state: PollState,
}

impl<T: Transport> PollLoop<T> {
    pub async fn run(mut self) -> Result {
        info!(interval = ?self.interval, with_telemetry = self.with_telemetry, "polling…");
        loop {
            let pause = self.step().await;
            debug!(?pause, "sleeping…");
            sleep(pause.total()).await;
        }
    }

    /// Run a single pass over the views, stopping at the first failure.
    #[instrument(skip_all, fields(failures = self.state.failures))]
    pub async fn step(&mut self) -> Pause {
        let started_at = *self.state.pass_started_at.insert(Instant::now());
        let views = self.views();
        info!(n_views = views.len(), "starting the pass…");

        for view in views {
            match self.logger.query(view).await {
                Ok(publication) => {
                    self.state.failures = 0;
                    debug!(%view, ?publication, "queried");
                    self.dispatcher.dispatch(publication);
                }
                Err(error) => {
                    self.state.failures += 1;
                    warn!(
                        %view,
                        failures = self.state.failures,
                        "aborting the pass: {:#}",
                        Error::from(error)
                    );
                    break;
                }
            }
        }

        self.pause(started_at.elapsed())
    }

    fn views(&self) -> Vec<View> {
        self.with_telemetry
            .then_some(View::Telemetry)
            .into_iter()
            .chain(View::POLL_ORDER)
            .collect_vec()
    }

    fn pause(&self, elapsed: Duration) -> Pause {
        let delay = self.interval.saturating_sub(elapsed).max(MIN_DELAY);
        let penalty = if self.state.failures > MAX_FAILURES {
            warn!(failures = self.state.failures, "too many failures, backing off");
            self.interval
        } else {
            Duration::ZERO
        };
        Pause { delay, penalty }
    }
}
