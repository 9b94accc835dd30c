//! Install helpers and the process-wide tracer registry.
//!
//! The bulk entry points ([`install_all`], [`install`]) create one
//! tracer per node, all sharing one sink, and keep the tracers in a
//! process-scoped registry so a single [`destroy`] call can tear the
//! whole set down. [`install_on`] and [`install_by_name`] create one
//! tracer and hand ownership to the caller instead.

use crate::{
    engine::Engine, node::NodeId, period::Period, sink::TraceSink, tracer::AggregateTracer,
};
use std::{
    io,
    path::PathBuf,
    sync::{Arc, Mutex},
};
use thiserror::Error;

/// Error returned when an install call cannot complete.
///
/// An install failure is fatal to that call only: nothing is partially
/// installed and previously installed tracers are unaffected.
#[derive(Debug, Error)]
pub enum InstallError {
    /// No node is registered under the given name in the engine's
    /// name registry.
    #[error("Node ({name}) Not Found")]
    NodeNotFound { name: String },
    /// The trace output file could not be opened.
    #[error("Cannot open trace output ({})", path.display())]
    Sink {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// every tracer created through the bulk install entry points, kept
/// alive until [`destroy`] is called
static REGISTRY: Mutex<Vec<Arc<AggregateTracer>>> = Mutex::new(Vec::new());

/// Install one tracer on every node the engine knows about.
///
/// All tracers share one sink opened from `file`; pass `-` to report
/// to the process standard output. The tracers stay alive in the
/// process-wide registry until [`destroy`]; the returned handles are
/// the same tracers, for the host to wire into its dispatch table as
/// `Arc<dyn L3Trace>`.
pub fn install_all(
    engine: &Arc<dyn Engine>,
    file: &str,
    period: Period,
) -> Result<Vec<Arc<AggregateTracer>>, InstallError> {
    let nodes = engine.nodes();
    install(engine, &nodes, file, period)
}

/// Install one tracer on each of the given nodes.
///
/// Same contract as [`install_all`], restricted to `nodes`. Installing
/// on a node the engine has already torn down is a caller error and is
/// not detected here.
pub fn install(
    engine: &Arc<dyn Engine>,
    nodes: &[NodeId],
    file: &str,
    period: Period,
) -> Result<Vec<Arc<AggregateTracer>>, InstallError> {
    let sink = TraceSink::open(file).map_err(|source| InstallError::Sink {
        path: PathBuf::from(file),
        source,
    })?;

    let tracers: Vec<_> = nodes
        .iter()
        .map(|node| AggregateTracer::install(engine, *node, sink.clone(), period))
        .collect();

    REGISTRY
        .lock()
        .expect("We shouldn't have poisoning")
        .extend(tracers.iter().cloned());
    Ok(tracers)
}

/// Install a single tracer and hand its handle to the caller.
///
/// The tracer is not added to the registry: it lives for as long as
/// the caller keeps the handle (dropping it cancels the timer), and
/// can be queried through [`AggregateTracer::snapshot`].
pub fn install_on(
    engine: &Arc<dyn Engine>,
    node: NodeId,
    sink: TraceSink,
    period: Period,
) -> Arc<AggregateTracer> {
    AggregateTracer::install(engine, node, sink, period)
}

/// Install a single tracer on the node registered under `name`.
///
/// Resolution goes through [`Engine::lookup`]; an unknown name fails
/// with [`InstallError::NodeNotFound`].
pub fn install_by_name(
    engine: &Arc<dyn Engine>,
    name: &str,
    sink: TraceSink,
    period: Period,
) -> Result<Arc<AggregateTracer>, InstallError> {
    let node = engine.lookup(name).ok_or_else(|| InstallError::NodeNotFound {
        name: name.to_owned(),
    })?;
    Ok(AggregateTracer::install(engine, node, sink, period))
}

/// Tear down every tracer created through the bulk install entry
/// points.
///
/// Each tracer's pending timer is cancelled synchronously before the
/// registry is cleared, so no report line is written afterwards.
/// Useful when a scenario contains several independent runs, or to
/// post-process the output while the process is still alive.
pub fn destroy() {
    let mut registry = REGISTRY.lock().expect("We shouldn't have poisoning");
    for tracer in registry.drain(..) {
        tracer.destroy();
    }
}
