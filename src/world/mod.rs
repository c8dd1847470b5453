//! Village world state
//!
//! A `VillageState` is an immutable snapshot: where the robot stands and
//! which parcels are still outstanding. Moving produces a new snapshot.

pub mod parcel;
pub mod scenario;
pub mod state;

pub use parcel::Parcel;
pub use scenario::random_state;
pub use state::VillageState;
