//! The surface of the host simulation engine that the tracers consume.
//!
//! The engine owns the clock, the discrete-event scheduler, the nodes
//! and the node-name registry. The tracers only need the narrow slice
//! of it expressed by the [`Engine`] trait: reading the simulated time,
//! scheduling one cancellable callback at a time, and resolving nodes.

use crate::node::NodeId;
use std::time::Duration;

/// A scheduled callback, invoked once by the engine when its due time
/// is reached.
pub type Callback = Box<dyn FnOnce() + Send>;

/// Handle to a pending scheduled callback, used to cancel it.
///
/// The engine assigns the values; the tracer treats them as opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    #[inline]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// get the raw value of the identifier
    #[inline]
    pub const fn into_inner(self) -> u64 {
        self.0
    }
}

/// What a host simulator must provide for tracers to run against it.
///
/// All of it is expected to execute on the single logical simulation
/// thread. `schedule_after` must be callable from within a scheduled
/// callback (the periodic reporter reschedules itself while firing),
/// and `cancel` must guarantee that a cancelled callback is never
/// invoked afterwards.
pub trait Engine: Send + Sync {
    /// the current simulated time, measured from the simulation start
    fn now(&self) -> Duration;

    /// schedule `callback` to run once, `delay` after the current
    /// simulated time
    fn schedule_after(&self, delay: Duration, callback: Callback) -> TimerId;

    /// drop a pending scheduled callback.
    ///
    /// Cancelling an already-fired or unknown timer is a no-op.
    fn cancel(&self, timer: TimerId);

    /// every node currently known to the engine, for bulk install
    fn nodes(&self) -> Vec<NodeId>;

    /// resolve a node registered under a human readable name.
    ///
    /// Returns `None` if no node was registered under that name.
    fn lookup(&self, name: &str) -> Option<NodeId>;

    /// the human readable name a node was registered under, if any.
    ///
    /// Used for the node identity column of the trace output; a node
    /// without a name is printed by its numeric id instead.
    fn node_name(&self, node: NodeId) -> Option<String>;
}
