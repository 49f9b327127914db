/// Race Detection Feature
///
/// Eraser lockset race detection over an ordered event stream.
///
/// ## Architecture
/// - **Domain**: `RaceEvent`, `RaceSummary`
/// - **Infrastructure**: `EraserStateMachine` (the transition function),
///   `AccessTracker` (last-access bookkeeping)
/// - **Application**: `EraserDetector` session orchestrator
/// - **Ports**: `ClockPort`, `ThreadNameResolverPort`
///
/// ## Academic Reference
/// - Eraser: Savage et al. (TOCS 1997)
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::*;
pub use domain::*;
pub use infrastructure::*;
pub use ports::*;
