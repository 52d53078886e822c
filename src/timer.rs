use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// One interval elapsed for the tick sequence `generation`.
    Tick { generation: u64 },
}

/// Background thread posting a tick every `interval` until dropped.
pub struct Ticker {
    // Dropping the sender wakes the thread and ends it.
    _stop: mpsc::Sender<()>,
}

impl Ticker {
    pub fn spawn(tx: mpsc::Sender<TimerEvent>, generation: u64, interval: Duration) -> Self {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        thread::spawn(move || loop {
            match stop_rx.recv_timeout(interval) {
                Err(mpsc::RecvTimeoutError::Timeout) => {
                    if tx.send(TimerEvent::Tick { generation }).is_err() {
                        break;
                    }
                }
                _ => break,
            }
        });

        Self { _stop: stop_tx }
    }
}

/// Elapsed-seconds counter driven by a cancellable repeating tick.
///
/// The counter is never reset. Stopping freezes it, starting again resumes
/// from the frozen value. Ticks from a replaced or cancelled sequence are
/// recognised by their generation and ignored.
pub struct Stopwatch {
    seconds: u64,
    visible: bool,
    generation: u64,
    ticker: Option<Ticker>,
    tx: mpsc::Sender<TimerEvent>,
    interval: Duration,
}

impl Stopwatch {
    pub fn new(tx: mpsc::Sender<TimerEvent>, interval: Duration) -> Self {
        Self {
            seconds: 0,
            visible: true,
            generation: 0,
            ticker: None,
            tx,
            interval,
        }
    }

    pub fn start(&mut self) {
        // Replace, never stack, an active sequence.
        self.stop();
        self.generation += 1;
        self.ticker = Some(Ticker::spawn(
            self.tx.clone(),
            self.generation,
            self.interval,
        ));
        log::debug!("timer started (generation {})", self.generation);
    }

    pub fn stop(&mut self) {
        if self.ticker.take().is_some() {
            log::debug!("timer stopped at {}s", self.seconds);
        }
    }

    pub fn handle(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::Tick { generation } => {
                if self.is_running() && generation == self.generation {
                    self.seconds += 1;
                    log::trace!("tick {}", self.seconds);
                }
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }

    pub fn clock(&self) -> String {
        format_clock(self.seconds)
    }
}

/// `m:ss`, minutes unbounded.
pub fn format_clock(total_secs: u64) -> String {
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Elapsed time as shown in the submit confirmation, e.g. `1분 5초`.
pub fn format_elapsed(total_secs: u64) -> String {
    format!("{}분 {}초", total_secs / 60, total_secs % 60)
}
