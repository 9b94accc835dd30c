//! The per-node tracer and its periodic reporter.

use crate::{
    engine::{Engine, TimerId},
    face::FaceId,
    node::NodeId,
    packet::Packet,
    period::Period,
    sink::TraceSink,
    stats::{Category, StatsTable},
    trace::L3Trace,
};
use std::{
    mem,
    sync::{Arc, Mutex, Weak},
};

/// What a report line contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportMode {
    /// only the activity since the previous tick: counters are reset
    /// after every report
    #[default]
    Delta,
    /// totals since the start of tracing: counters are never reset by
    /// the reporter
    Cumulative,
}

/// The reporter's timer, as a small state machine.
///
/// `Idle` only exists while a fire is in flight (between the callback
/// being dispatched and the next tick being scheduled). `Cancelled` is
/// terminal: once reached, no further tick is ever scheduled.
#[derive(Debug, Clone, Copy)]
enum TimerState {
    Idle,
    Scheduled(TimerId),
    Cancelled,
}

/// A network-layer aggregate tracer bound to one simulated node.
///
/// The tracer owns a [`StatsTable`], shares a [`TraceSink`] with the
/// other tracers of the same install call, and keeps one timer
/// registration alive in the host engine. Event hooks arrive through
/// the [`L3Trace`] impl; every [`Period`] the tracer writes one line
/// per face it has seen and (in [`ReportMode::Delta`]) rebases the
/// counters.
///
/// Dropping the last handle, or calling [`destroy`], cancels the
/// pending timer registration so no callback can ever run against a
/// torn-down tracer.
///
/// [`destroy`]: AggregateTracer::destroy
pub struct AggregateTracer {
    engine: Arc<dyn Engine>,
    node: NodeId,
    label: String,
    sink: TraceSink,
    period: Mutex<Period>,
    mode: Mutex<ReportMode>,
    table: Mutex<StatsTable>,
    timer: Mutex<TimerState>,
}

impl AggregateTracer {
    /// attach a tracer to `node` and schedule its first report one
    /// `period` from now.
    ///
    /// The returned handle can be cloned into the host's dispatch
    /// table as an `Arc<dyn L3Trace>` and queried at any time through
    /// [`AggregateTracer::snapshot`].
    pub fn install(
        engine: &Arc<dyn Engine>,
        node: NodeId,
        sink: TraceSink,
        period: Period,
    ) -> Arc<Self> {
        let label = engine
            .node_name(node)
            .unwrap_or_else(|| node.to_string());

        let tracer = Arc::new(Self {
            engine: Arc::clone(engine),
            node,
            label,
            sink,
            period: Mutex::new(period),
            mode: Mutex::new(ReportMode::default()),
            table: Mutex::new(StatsTable::new()),
            timer: Mutex::new(TimerState::Idle),
        });
        Arc::clone(&tracer).schedule_next();
        tracer
    }

    /// the node this tracer is bound to
    #[inline]
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// the node identity printed on this tracer's report lines
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// the current reporting period
    pub fn period(&self) -> Period {
        *self.period.lock().expect("We shouldn't have poisoning")
    }

    /// change the reporting period.
    ///
    /// Takes effect when the next tick is scheduled: the already
    /// pending fire keeps its due time.
    pub fn set_period(&self, period: Period) {
        *self.period.lock().expect("We shouldn't have poisoning") = period;
    }

    /// change what the report lines contain, starting with the next tick
    pub fn set_report_mode(&self, mode: ReportMode) {
        *self.mode.lock().expect("We shouldn't have poisoning") = mode;
    }

    /// a point-in-time copy of the counter table
    pub fn snapshot(&self) -> StatsTable {
        self.table
            .lock()
            .expect("We shouldn't have poisoning")
            .clone()
    }

    /// zero every counter, keeping the face keys.
    ///
    /// The next tick reports whatever the table holds at fire time; a
    /// reset between fires is not retroactively corrected for.
    pub fn reset(&self) {
        self.table
            .lock()
            .expect("We shouldn't have poisoning")
            .reset();
    }

    /// stop reporting and cancel the pending timer registration.
    ///
    /// Synchronous and terminal: after this returns, no report line is
    /// written and no callback fires for this tracer, even if handles
    /// to it are still alive. The last partial interval is not
    /// reported.
    pub fn destroy(&self) {
        let previous = {
            let mut timer = self.timer.lock().expect("We shouldn't have poisoning");
            mem::replace(&mut *timer, TimerState::Cancelled)
        };
        if let TimerState::Scheduled(id) = previous {
            self.engine.cancel(id);
        }
    }

    fn record(&self, category: Category, size: u64, face: FaceId) {
        self.table
            .lock()
            .expect("We shouldn't have poisoning")
            .record(face, category, size);
    }

    fn schedule_next(self: Arc<Self>) {
        let delay = self.period().into_duration();

        // the callback only keeps a weak handle: a tracer whose last
        // strong handle is gone cannot be fired against
        let weak: Weak<Self> = Arc::downgrade(&self);
        let id = self.engine.schedule_after(
            delay,
            Box::new(move || {
                if let Some(tracer) = weak.upgrade() {
                    tracer.fire();
                }
            }),
        );

        let mut timer = self.timer.lock().expect("We shouldn't have poisoning");
        match *timer {
            // destroyed while we were registering: release the
            // registration we just took
            TimerState::Cancelled => self.engine.cancel(id),
            TimerState::Idle | TimerState::Scheduled(_) => *timer = TimerState::Scheduled(id),
        }
    }

    /// one reporter tick: print every face row, rebase, reschedule
    fn fire(self: Arc<Self>) {
        {
            let mut timer = self.timer.lock().expect("We shouldn't have poisoning");
            match *timer {
                TimerState::Scheduled(_) => *timer = TimerState::Idle,
                // a host delivering a cancelled callback anyway must
                // not produce output
                TimerState::Idle | TimerState::Cancelled => return,
            }
        }

        let now = self.engine.now();
        let mode = *self.mode.lock().expect("We shouldn't have poisoning");
        {
            let mut table = self.table.lock().expect("We shouldn't have poisoning");
            for (face, counters) in table.faces() {
                // sink errors after install don't stop the simulation,
                // the stream stays usable for the next tick
                let _ = self.sink.write_row(&self.label, now, face, counters);
            }
            if mode == ReportMode::Delta {
                table.reset();
            }
        }

        self.schedule_next();
    }
}

impl Drop for AggregateTracer {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl L3Trace for AggregateTracer {
    fn out_interests(&self, interest: &dyn Packet, face: FaceId) {
        self.record(Category::OutInterests, interest.bytes_size(), face);
    }
    fn in_interests(&self, interest: &dyn Packet, face: FaceId) {
        self.record(Category::InInterests, interest.bytes_size(), face);
    }
    fn drop_interests(&self, interest: &dyn Packet, face: FaceId) {
        self.record(Category::DropInterests, interest.bytes_size(), face);
    }

    fn out_nacks(&self, nack: &dyn Packet, face: FaceId) {
        self.record(Category::OutNacks, nack.bytes_size(), face);
    }
    fn in_nacks(&self, nack: &dyn Packet, face: FaceId) {
        self.record(Category::InNacks, nack.bytes_size(), face);
    }
    fn drop_nacks(&self, nack: &dyn Packet, face: FaceId) {
        self.record(Category::DropNacks, nack.bytes_size(), face);
    }

    fn out_data(&self, data: &dyn Packet, face: FaceId) {
        self.record(Category::OutData, data.bytes_size(), face);
    }
    fn in_data(&self, data: &dyn Packet, face: FaceId) {
        self.record(Category::InData, data.bytes_size(), face);
    }
    fn drop_data(&self, data: &dyn Packet, face: FaceId) {
        self.record(Category::DropData, data.bytes_size(), face);
    }

    fn satisfied_interests(&self, face: FaceId) {
        self.record(Category::SatisfiedInterests, 0, face);
    }
    fn timed_out_interests(&self, face: FaceId) {
        self.record(Category::TimedOutInterests, 0, face);
    }
}
