//! Async driver: runs a [`Typewriter`] on the tokio timer.
//!
//! Each [`Handle`] owns one task and at most one pending sleep. The task
//! publishes a [`Snapshot`] through a `watch` channel after every tick that
//! changes it. The sender lives in a slot shared with the handle; `stop`
//! empties the slot under its lock, so once `stop` returns the task can no
//! longer publish even if its abort has not landed yet.

use super::error::TypewriterError;
use super::machine::{Snapshot, Timings, Typewriter, WordList};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

type PublishSlot = Arc<Mutex<Option<watch::Sender<Snapshot>>>>;

/// One running typewriter. Dropping the handle stops it.
pub struct Handle {
    slot: PublishSlot,
    text: watch::Receiver<Snapshot>,
    task: JoinHandle<()>,
}

/// Validate `words` and start animating them on the current tokio runtime.
///
/// Panics if called outside a runtime, like `tokio::spawn`.
pub fn start<I, S>(words: I, timings: Timings) -> Result<Handle, TypewriterError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let words = WordList::new(words)?;
    Ok(spawn(Typewriter::new(words, timings)))
}

fn spawn(machine: Typewriter) -> Handle {
    let (tx, rx) = watch::channel(machine.snapshot());
    let slot: PublishSlot = Arc::new(Mutex::new(Some(tx)));
    debug!(first_word = machine.current_word(), "typewriter started");
    let task = tokio::spawn(run(machine, slot.clone()));
    Handle {
        slot,
        text: rx,
        task,
    }
}

async fn run(mut machine: Typewriter, slot: PublishSlot) {
    loop {
        tokio::time::sleep(machine.next_delay()).await;
        if !advance(&mut machine, &slot) {
            trace!("typewriter task exiting after stop");
            return;
        }
    }
}

/// Tick once and publish. Returns false once the handle has been stopped;
/// in that case the machine is left untouched.
fn advance(machine: &mut Typewriter, slot: &PublishSlot) -> bool {
    let guard = match slot.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    let Some(tx) = guard.as_ref() else {
        return false;
    };

    let before = machine.word_index();
    machine.tick();
    if machine.word_index() != before {
        trace!(word = machine.current_word(), "typewriter advanced to next word");
    }

    let next = machine.snapshot();
    tx.send_if_modified(|current| {
        if *current == next {
            false
        } else {
            *current = next;
            true
        }
    });
    true
}

impl Handle {
    /// A receiver that sees every published snapshot from now on.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.text.clone()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.text.borrow().clone()
    }

    pub fn text(&self) -> String {
        self.text.borrow().text.clone()
    }

    /// The latest snapshot if it changed since the last call.
    pub fn poll(&mut self) -> Option<Snapshot> {
        match self.text.has_changed() {
            Ok(true) => Some(self.text.borrow_and_update().clone()),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        match self.slot.lock() {
            Ok(guard) => guard.is_some(),
            Err(poisoned) => poisoned.into_inner().is_some(),
        }
    }

    /// Cancel the pending timer. Returns true on the call that actually
    /// stopped the animation; later calls do nothing and return false.
    pub fn stop(&self) -> bool {
        let sender = match self.slot.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        self.task.abort();
        if sender.is_some() {
            debug!("typewriter stopped");
            true
        } else {
            false
        }
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// The headline as the view sees it: at most one running handle. Starting
/// again supersedes the previous animation before any new state exists.
#[derive(Default)]
pub struct Headline {
    current: Option<Handle>,
}

impl Headline {
    /// Restart with a new word list from `word_index = 0`, nothing typed.
    ///
    /// An invalid list is rejected before anything is stopped, so the
    /// running animation (if any) keeps going.
    pub fn start<I, S>(&mut self, words: I, timings: Timings) -> Result<(), TypewriterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = WordList::new(words)?;
        self.stop();
        self.current = Some(spawn(Typewriter::new(words, timings)));
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.current.take() {
            handle.stop();
        }
    }

    pub fn is_running(&self) -> bool {
        self.current.as_ref().is_some_and(Handle::is_active)
    }

    pub fn text(&self) -> String {
        self.current.as_ref().map(Handle::text).unwrap_or_default()
    }

    pub fn subscribe(&self) -> Option<watch::Receiver<Snapshot>> {
        self.current.as_ref().map(Handle::subscribe)
    }

    pub fn poll(&mut self) -> Option<Snapshot> {
        self.current.as_mut().and_then(Handle::poll)
    }
}
