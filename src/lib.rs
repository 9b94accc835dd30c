//! Network-layer event tracing for NDN packet simulations.
//!
//! This crate attaches an [`AggregateTracer`] to each node of a host
//! simulator and counts the protocol events flowing through that node's
//! faces: interests, nacks and data going in, out or dropped, plus the
//! satisfied / timed-out outcomes of pending interests. Every reporting
//! period the tracer writes one line per face to a shared [`TraceSink`]
//! and starts counting afresh.
//!
//! The host simulator itself (forwarding, pending-interest table, the
//! discrete-event scheduler) is not part of this crate. The host is
//! consumed through the [`Engine`] trait, and dispatches protocol events
//! into the tracer through the [`L3Trace`] trait.
//!
//! # Wiring it up
//!
//! 1. implement [`Engine`] for (or around) your simulator;
//! 2. call [`install_all`] (or one of the narrower install functions in
//!    [`install`][mod@install]) once the nodes exist;
//! 3. have your forwarding path call the [`L3Trace`] hooks;
//! 4. run the simulation; call [`destroy`] when tearing down.
//!
//! All tracers created by the bulk install functions share one sink. The
//! sink is reference counted, so it lives as long as the longest-living
//! tracer holding it.

pub mod engine;
pub mod face;
pub mod install;
pub mod node;
pub mod packet;
pub mod period;
pub mod sink;
pub mod stats;
pub mod trace;
pub mod tracer;

pub use self::{
    engine::{Callback, Engine, TimerId},
    face::FaceId,
    install::{InstallError, destroy, install, install_all, install_by_name, install_on},
    node::NodeId,
    packet::Packet,
    period::{Period, PeriodParseError},
    sink::TraceSink,
    stats::{Category, Counter, Direction, FaceCounters, StatsTable},
    trace::L3Trace,
    tracer::{AggregateTracer, ReportMode},
};
