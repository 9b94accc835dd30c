//! The shared output stream the tracers report into.

use crate::{
    face::FaceId,
    stats::{Category, FaceCounters},
};
use std::{
    fs::File,
    io::{self, Write},
    path::Path,
    sync::{Arc, Mutex},
    time::Duration,
};

/// A shared, reference-counted trace output stream.
///
/// Every tracer holds a clone, so the underlying stream lives exactly
/// as long as its longest-living holder: there is nothing the caller
/// needs to keep alive on the side. Writes go through one mutex, which
/// also serialises the output of tracers sharing a sink should the
/// host ever dispatch from more than one thread.
///
/// The header line is written once per sink, on the first report line,
/// whichever tracer gets there first.
#[derive(Clone)]
pub struct TraceSink {
    inner: Arc<Mutex<SinkInner>>,
}

struct SinkInner {
    out: Box<dyn Write + Send>,
    header_written: bool,
}

impl TraceSink {
    /// create a sink over any writable stream
    pub fn new(out: impl Write + Send + 'static) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SinkInner {
                out: Box::new(out),
                header_written: false,
            })),
        }
    }

    /// a sink over the process standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// open (and truncate) a trace file at `path`.
    ///
    /// The special path `-` selects the process standard output
    /// instead of a file.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        if path == Path::new("-") {
            Ok(Self::stdout())
        } else {
            File::create(path).map(Self::new)
        }
    }

    /// write one report row: node identity, simulated time, face, then
    /// the (packets, bytes) pair of every category in column order
    pub(crate) fn write_row(
        &self,
        node: &str,
        time: Duration,
        face: FaceId,
        counters: &FaceCounters,
    ) -> io::Result<()> {
        let mut inner = self.inner.lock().expect("We shouldn't have poisoning");

        if !inner.header_written {
            inner.header_written = true;
            write!(inner.out, "Node\tTime\tFaceId")?;
            for category in Category::ALL {
                write!(inner.out, "\t{category}\t{category}Bytes")?;
            }
            writeln!(inner.out)?;
        }

        write!(inner.out, "{node}\t{time}\t{face}", time = time.as_secs_f64())?;
        for category in Category::ALL {
            let counter = counters.get(category);
            write!(inner.out, "\t{}\t{}", counter.packets, counter.bytes)?;
        }
        writeln!(inner.out)?;
        inner.out.flush()
    }
}
