use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Cadence and shape of the simulated indicator
#[derive(Debug, Clone, Copy)]
pub struct Timing {
    /// Percentage points added per tick
    pub step: u8,
    /// Time between ticks
    pub cadence: Duration,
    /// Ceiling the indicator holds at until the transfer settles
    pub cap: u8,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            step: 10,
            cadence: Duration::from_millis(100),
            cap: 90,
        }
    }
}

/// Advance the indicator by one step without crossing the cap
fn advance(percent: u8, timing: &Timing) -> u8 {
    percent.saturating_add(timing.step).min(timing.cap)
}

/// Simulated upload progress.
///
/// The indicator is a UX approximation, not a measurement of bytes on the
/// wire: it climbs in fixed steps to a cap below 100 and snaps to 100 when
/// the transfer settles. Each value is published on the channel handed to
/// `begin`. The ticking task is aborted on `complete` and on drop, so a timer
/// can never outlive its upload, error paths included.
pub struct SimulatedProgress {
    tx: mpsc::UnboundedSender<u8>,
    task: JoinHandle<()>,
}

impl SimulatedProgress {
    /// Start ticking with the default timing
    pub fn begin(tx: mpsc::UnboundedSender<u8>) -> Self {
        Self::with_timing(tx, Timing::default())
    }

    pub fn with_timing(tx: mpsc::UnboundedSender<u8>, timing: Timing) -> Self {
        let _ = tx.send(0);

        let tick_tx = tx.clone();
        let task = tokio::spawn(async move {
            let mut percent = 0u8;
            let mut interval = tokio::time::interval(timing.cadence);
            // the first tick of a tokio interval fires immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                percent = advance(percent, &timing);
                if tick_tx.send(percent).is_err() {
                    break;
                }
            }
        });

        Self { tx, task }
    }

    /// Stop the timer and snap the indicator to 100
    pub fn complete(self) {
        self.task.abort();
        let _ = self.tx.send(100);
    }
}

impl Drop for SimulatedProgress {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_timing() -> Timing {
        Timing {
            step: 25,
            cadence: Duration::from_millis(5),
            cap: 90,
        }
    }

    #[tokio::test]
    async fn indicator_climbs_to_cap_then_snaps_to_100() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let progress = SimulatedProgress::with_timing(tx, fast_timing());

        // let the ticker run well past the point where it saturates at the cap
        tokio::time::sleep(Duration::from_millis(60)).await;
        progress.complete();

        let mut values = Vec::new();
        while let Some(value) = rx.recv().await {
            values.push(value);
        }

        assert_eq!(values.first(), Some(&0));
        assert_eq!(values.last(), Some(&100), "complete() must snap to 100");
        let before_snap = &values[..values.len() - 1];
        assert!(
            before_snap.iter().all(|value| *value <= 90),
            "cap exceeded before complete(): {:?}",
            values
        );
        assert!(
            before_snap.windows(2).all(|pair| pair[0] <= pair[1]),
            "indicator regressed: {:?}",
            values
        );
        assert!(before_snap.contains(&90), "ticker never reached the cap");
    }

    #[tokio::test]
    async fn dropping_without_complete_stops_the_timer() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let progress = SimulatedProgress::with_timing(tx, fast_timing());

        tokio::time::sleep(Duration::from_millis(20)).await;
        drop(progress);

        // channel closes once the aborted task releases its sender; whatever
        // was already published never includes the 100 snap
        let mut values = Vec::new();
        while let Some(value) = rx.recv().await {
            values.push(value);
        }
        assert!(values.iter().all(|value| *value <= 90), "{:?}", values);
    }
}
