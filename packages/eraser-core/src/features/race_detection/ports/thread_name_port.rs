/// Thread name resolution port
use crate::shared::models::ProcessThreadId;

/// Resolves a thread identity to its human-readable name, when one exists
///
/// Names make race reports legible; the detection algorithm never depends on
/// them.
pub trait ThreadNameResolverPort {
    fn thread_name(&self, thread: ProcessThreadId) -> Option<String>;
}

/// Default resolver: no names available
#[derive(Default)]
pub struct NoThreadNames;

impl ThreadNameResolverPort for NoThreadNames {
    fn thread_name(&self, _thread: ProcessThreadId) -> Option<String> {
        None
    }
}
