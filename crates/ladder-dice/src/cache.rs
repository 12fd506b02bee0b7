//! Double-buffered, background-filled roll cache.
//!
//! [`RollCache`] keeps two equally sized buffers. The consumer drains the
//! `active` buffer with a plain cursor. Meanwhile a dedicated producer
//! thread owns the wrapped roller and fills the `standby` buffer. When the
//! cursor reaches the end of `active`, the consumer waits for the
//! in-flight fill (normally already done), swaps the buffers, and hands
//! the exhausted one back to the producer for refilling.
//!
//! Buffers change hands over two bounded channels:
//!
//! ```text
//!  consumer                          producer thread
//!  ────────                          ───────────────
//!  active ── recycle_tx ───────────▶ fill(standby)
//!         ◀─────────── filled_rx ──  send(standby)
//! ```
//!
//! Only two buffers exist, so at most one fill is ever in flight, and the
//! buffer the consumer reads from is never reachable by the producer. The
//! steady-state read path takes no lock.
//!
//! Shutdown drops the recycle sender, which ends the producer loop after
//! any in-flight fill completes, then joins the thread before the buffers
//! are released.

use std::thread::{self, JoinHandle};
use std::time::Instant;

use crossbeam_channel::{Receiver, Sender};

use ladder_core::{Face, Roller};

use crate::config::CacheConfig;
use crate::error::CacheError;

/// Counters describing cache activity since construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of times the active and standby buffers traded places.
    pub swaps: u64,
    /// Number of background fills handed to the producer, including the
    /// one started at construction.
    pub fills_scheduled: u64,
    /// Number of values returned by `roll()`.
    pub served: u64,
}

/// A [`Roller`] that serves values from a double buffer refilled on a
/// background thread.
///
/// The sequence of values is exactly the sequence the wrapped roller
/// would produce if called directly: the active buffer is filled first
/// on the constructing thread, and every later buffer is filled in order
/// by the single producer.
pub struct RollCache<R>
where
    R: Roller + Send + 'static,
    R::Output: Send + 'static,
{
    /// Buffer currently exposed to the consumer.
    active: Vec<R::Output>,
    /// Next unread entry in `active`.
    cursor: usize,
    /// Entries per buffer.
    capacity: usize,
    /// Side count of the wrapped roller, captured before it moved.
    sides: Face,
    /// Filled standby buffers arrive here.
    filled_rx: Receiver<Vec<R::Output>>,
    /// Exhausted buffers go back to the producer here. `None` once shut down.
    recycle_tx: Option<Sender<Vec<R::Output>>>,
    /// Producer thread; yields the wrapped roller when it exits.
    producer: Option<JoinHandle<R>>,
    swaps: u64,
    fills_scheduled: u64,
}

impl<R> RollCache<R>
where
    R: Roller + Send + 'static,
    R::Output: Send + 'static,
{
    /// Build a cache around `roller`.
    ///
    /// Fills the first buffer synchronously, then starts the producer
    /// thread on the second. The first `roll()` never waits.
    pub fn new(mut roller: R, config: CacheConfig) -> Result<Self, CacheError> {
        config.validate()?;
        let capacity = config.capacity;
        let sides = roller.sides();

        let mut active = Vec::with_capacity(capacity);
        fill(&mut roller, &mut active, capacity);
        let standby = Vec::with_capacity(capacity);

        let (recycle_tx, recycle_rx) = crossbeam_channel::bounded(1);
        let (filled_tx, filled_rx) = crossbeam_channel::bounded(1);

        let producer = thread::Builder::new()
            .name("ladder-roll-fill".into())
            .spawn(move || produce(roller, standby, capacity, recycle_rx, filled_tx))
            .map_err(|e| CacheError::SpawnFailed {
                reason: e.to_string(),
            })?;

        log::debug!(
            "roll cache started: capacity={capacity}, footprint={} bytes",
            config.footprint_bytes::<R::Output>()
        );

        Ok(Self {
            active,
            cursor: 0,
            capacity,
            sides,
            filled_rx,
            recycle_tx: Some(recycle_tx),
            producer: Some(producer),
            swaps: 0,
            fills_scheduled: 1,
        })
    }

    /// Entries per buffer.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries left in the active buffer before the next swap.
    pub fn remaining(&self) -> usize {
        self.active.len() - self.cursor
    }

    /// Activity counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            swaps: self.swaps,
            fills_scheduled: self.fills_scheduled,
            served: self.swaps * self.capacity as u64 + self.cursor as u64,
        }
    }

    /// Stop the producer and recover the wrapped roller.
    ///
    /// Waits for any in-flight fill to complete. Values buffered but not
    /// yet served are discarded, so the returned roller has advanced past
    /// them. A panic raised by the wrapped roller on the producer thread
    /// is re-raised here.
    pub fn shutdown(mut self) -> R {
        match self.stop_producer() {
            Some(Ok(roller)) => roller,
            Some(Err(payload)) => std::panic::resume_unwind(payload),
            // The producer is only taken by shutdown, Drop, or a lost producer,
            // and the latter never returns.
            None => unreachable!("roll cache producer already joined"),
        }
    }

    /// Swap in the next filled buffer and schedule a refill of the old one.
    #[cold]
    #[inline(never)]
    fn swap_buffers(&mut self) {
        let wait_start = Instant::now();
        let standby = match self.filled_rx.recv() {
            Ok(buffer) => buffer,
            Err(_) => self.producer_lost(),
        };
        let waited = wait_start.elapsed();

        let exhausted = std::mem::replace(&mut self.active, standby);
        self.cursor = 0;
        self.swaps += 1;

        if let Some(tx) = &self.recycle_tx {
            if tx.send(exhausted).is_ok() {
                self.fills_scheduled += 1;
            }
        }

        log::trace!("roll cache swap #{}: waited {waited:?}", self.swaps);
    }

    /// The producer hung up without delivering a buffer. It can only do
    /// that by panicking, so re-raise its panic here.
    fn producer_lost(&mut self) -> ! {
        if let Some(handle) = self.producer.take() {
            if let Err(payload) = handle.join() {
                std::panic::resume_unwind(payload);
            }
        }
        panic!("roll cache producer exited before delivering a buffer");
    }

    fn stop_producer(&mut self) -> Option<thread::Result<R>> {
        // Hanging up ends the producer loop once its current fill is delivered.
        self.recycle_tx.take();
        let joined = self.producer.take()?.join();
        if joined.is_ok() {
            log::debug!("roll cache stopped after {} swaps", self.swaps);
        }
        Some(joined)
    }
}

impl<R> Roller for RollCache<R>
where
    R: Roller + Send + 'static,
    R::Output: Send + 'static,
{
    type Output = R::Output;

    #[inline]
    fn roll(&mut self) -> R::Output {
        if self.cursor == self.active.len() {
            self.swap_buffers();
        }
        let value = self.active[self.cursor];
        self.cursor += 1;
        value
    }

    #[inline]
    fn sides(&self) -> Face {
        self.sides
    }
}

impl<R> Drop for RollCache<R>
where
    R: Roller + Send + 'static,
    R::Output: Send + 'static,
{
    fn drop(&mut self) {
        if let Some(Err(_)) = self.stop_producer() {
            log::warn!("roll cache producer panicked; discarding its roller");
        }
    }
}

impl<R> std::fmt::Debug for RollCache<R>
where
    R: Roller + Send + 'static,
    R::Output: Send + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RollCache")
            .field("capacity", &self.capacity)
            .field("cursor", &self.cursor)
            .field("sides", &self.sides)
            .field("swaps", &self.swaps)
            .field("fills_scheduled", &self.fills_scheduled)
            .finish()
    }
}

/// Replace the contents of `buffer` with `capacity` fresh values.
fn fill<R: Roller>(roller: &mut R, buffer: &mut Vec<R::Output>, capacity: usize) {
    buffer.clear();
    buffer.extend((0..capacity).map(|_| roller.roll()));
}

/// Producer loop: fill, deliver, wait for the next exhausted buffer.
fn produce<R: Roller>(
    mut roller: R,
    mut standby: Vec<R::Output>,
    capacity: usize,
    recycle_rx: Receiver<Vec<R::Output>>,
    filled_tx: Sender<Vec<R::Output>>,
) -> R {
    loop {
        fill(&mut roller, &mut standby, capacity);
        if filled_tx.send(standby).is_err() {
            break;
        }
        match recycle_rx.recv() {
            Ok(buffer) => standby = buffer,
            Err(_) => break,
        }
    }
    roller
}
