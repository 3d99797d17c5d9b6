pub mod rocket;
pub mod tuning;

pub use rocket::Vehicle;
pub use tuning::{TuningBuilder, VehicleTuning};
