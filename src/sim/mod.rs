pub mod driver;
pub mod event;
pub mod telemetry;

pub use driver::{Simulation, TimeStep};
pub use event::{EventDetector, EventKind, SimEvent};
pub use telemetry::{FlightSummary, Telemetry};
