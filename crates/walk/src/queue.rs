use std::collections::VecDeque;
use std::path::PathBuf;

/// A (source, destination) pair awaiting a scan.
///
/// The destination is computed once, when the folder is discovered, by
/// joining the parent's destination with the folder's file name. That single
/// computation is what keeps the destination tree isomorphic to the filtered
/// source tree even when the source tree contains excluded entries.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QueueItem {
    /// Source folder to scan.
    pub source: PathBuf,
    /// Destination folder mirroring it.
    pub destination: PathBuf,
}

/// FIFO worklist of folders awaiting a scan.
///
/// First-in-first-out ordering is the explicit guarantee: it yields
/// breadth-first traversal, with every folder at depth `d` scanned before any
/// folder at depth `d + 1`. The queue is owned by a single build invocation
/// and starts empty; the scan loop drains it to completion and clears it on
/// error exit, so it is empty again whenever control returns to the caller.
#[derive(Debug, Default)]
pub struct ScanQueue {
    items: VecDeque<QueueItem>,
}

impl ScanQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one folder pair to the tail of the queue.
    pub fn enqueue<P, Q>(&mut self, source: P, destination: Q)
    where
        P: Into<PathBuf>,
        Q: Into<PathBuf>,
    {
        self.items.push_back(QueueItem {
            source: source.into(),
            destination: destination.into(),
        });
    }

    /// Removes and returns the oldest pending item.
    ///
    /// `None` is the empty-queue condition; the scan loop uses it as its
    /// termination signal.
    pub fn dequeue(&mut self) -> Option<QueueItem> {
        self.items.pop_front()
    }

    /// Number of pending items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether no items are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drops all pending items unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
