//! Reset button monitor
//!
//! Watches an active-low button and turns hold durations into reset
//! actions carried out by the `ResetPort` collaborator.

use embassy_futures::select::{select, Either};
use embassy_time::{Instant, Timer};
use embedded_hal::digital::Error as _;
use embedded_hal_async::digital::Wait;

use crate::config::NodeConfig;
use crate::domain::{ResetAction, ResetThresholds};
use crate::ports::reset::ResetPort;

/// Back-off after a GPIO error before watching the button again
const GPIO_ERROR_BACKOFF_MS: u64 = 100;

pub struct ResetButton<'a, B: Wait, R: ResetPort> {
    button: B,
    reset: &'a R,
    thresholds: ResetThresholds,
}

impl<'a, B: Wait, R: ResetPort> ResetButton<'a, B, R> {
    pub fn new(button: B, reset: &'a R, thresholds: ResetThresholds) -> Self {
        Self {
            button,
            reset,
            thresholds,
        }
    }

    /// Monitor using the hold times from `config`
    pub fn from_config(button: B, reset: &'a R, config: &NodeConfig) -> Self {
        Self::new(button, reset, config.reset_thresholds())
    }

    pub fn thresholds(&self) -> ResetThresholds {
        self.thresholds
    }

    /// Watch the button forever
    pub async fn run(&mut self) -> ! {
        loop {
            match self.next_action().await {
                Ok(Some(action)) => {
                    self.perform(action).await;
                    if action == ResetAction::FactoryReset {
                        // factory reset fired while held; re-arm only after release
                        self.wait_for_release().await;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    error!("Reset button read failed: {:?}", e.kind());
                    Timer::after_millis(GPIO_ERROR_BACKOFF_MS).await;
                }
            }
        }
    }

    /// Wait for one press and classify it
    ///
    /// Returns as soon as the factory threshold is reached, even if the
    /// button is still held. Returns `None` for presses that are too short.
    pub async fn next_action(&mut self) -> Result<Option<ResetAction>, B::Error> {
        self.button.wait_for_low().await?;
        let pressed_at = Instant::now();

        match select(
            self.button.wait_for_high(),
            Timer::after(self.thresholds.factory),
        )
        .await
        {
            Either::First(released) => {
                released?;
                let held = Instant::now() - pressed_at;
                debug!("Button released after {} ms", held.as_millis());
                Ok(self.thresholds.classify_release(held))
            }
            Either::Second(()) => Ok(Some(ResetAction::FactoryReset)),
        }
    }

    async fn wait_for_release(&mut self) {
        while let Err(e) = self.button.wait_for_high().await {
            error!("Reset button read failed: {:?}", e.kind());
            Timer::after_millis(GPIO_ERROR_BACKOFF_MS).await;
        }
    }

    async fn perform(&self, action: ResetAction) {
        warn!("Reset requested: {:?}", action);
        let result = match action {
            ResetAction::NetworkReset => self.reset.network_reset().await,
            ResetAction::FactoryReset => self.reset.factory_reset().await,
        };
        if let Err(e) = result {
            error!("{:?} failed: {:?}", action, e);
        }
    }
}
