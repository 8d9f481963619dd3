//! Shared helpers for publisher integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use observa::{ObservedState, Observer};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// Ordered log of `(observer, state)` pairs shared between recorders.
pub type Calls = Rc<RefCell<Vec<(&'static str, u8)>>>;

/// Observer that records every `update` it receives.
pub struct Recorder {
    pub name: &'static str,
    pub calls: Calls,
}

impl Recorder {
    pub fn attachable(name: &'static str, calls: &Calls) -> Rc<dyn Observer> {
        Rc::new(Recorder {
            name,
            calls: Rc::clone(calls),
        })
    }
}

impl Observer for Recorder {
    fn update(&self, subject: &dyn ObservedState) {
        self.calls.borrow_mut().push((self.name, subject.state()));
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

pub fn names(calls: &Calls) -> Vec<&'static str> {
    calls.borrow().iter().map(|(n, _)| *n).collect()
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("log buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` with a thread-local fmt subscriber and returns everything it logged.
pub fn capture_logs<F: FnOnce()>(f: F) -> String {
    let buf = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buf.clone())
        .with_ansi(false)
        .without_time()
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::with_default(subscriber, f);

    let bytes = buf.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

/// Number of log lines where `observer` reported a reaction.
pub fn reactions(logs: &str, observer: &str) -> usize {
    logs.lines()
        .filter(|l| l.contains("reacted to the event") && l.contains(observer))
        .count()
}
