//! Demo seeding handler.

mod seed_demo_data;

pub use seed_demo_data::{SeedDemoDataCommand, SeedDemoDataHandler, SeedDemoDataResult};
