//! In-memory record store for the Homebase property-operations dashboard
//!
//! - [`PropertyStore`]: keyed collections of tickets, vendors, renewals and
//!   reference records, with the maintenance and renewal operations
//! - [`DemoTicker`]: simulated agent status and activity-feed rotation
//! - [`Fixture`]: the seed data the store starts from

pub mod registry;
pub mod seed;
pub mod store;
pub mod ticker;

pub use registry::Registry;
pub use seed::Fixture;
pub use store::PropertyStore;
pub use ticker::{AgentState, AgentStatus, DemoTicker};
