use florastack_core::WriteResult;

/// Receives each `WriteResult` as soon as its file is on disk.
///
/// Closures taking `&WriteResult` implement this, so callers can log, collect
/// or count without the materializer knowing about any output sink.
pub trait Reporter {
    fn wrote(&mut self, result: &WriteResult);
}

impl<F> Reporter for F
where
    F: FnMut(&WriteResult),
{
    fn wrote(&mut self, result: &WriteResult) {
        self(result)
    }
}

/// Reporter that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn wrote(&mut self, _result: &WriteResult) {}
}
