use std::time::Duration;
use tokio::time::MissedTickBehavior;

use common::games::snake::TickOutcome;
use common::log;

use crate::game_host::GameHost;

pub struct TickDriver {
    host: GameHost,
    tick_interval: Duration,
}

impl TickDriver {
    pub fn new(host: GameHost, tick_interval: Duration) -> Self {
        Self {
            host,
            tick_interval,
        }
    }

    /// Advances whatever game is live every interval, for the life of the
    /// process. A finished game is left alone until it is restarted.
    pub async fn run(&self) {
        let mut interval = tokio::time::interval(self.tick_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick of an interval fires immediately.
        interval.tick().await;

        log!("Tick driver started ({} ms)", self.tick_interval.as_millis());
        loop {
            interval.tick().await;
            self.step().await;
        }
    }

    /// One locked tick. The engine itself skips a finished game.
    async fn step(&self) -> TickOutcome {
        self.host.tick().await
    }
}
