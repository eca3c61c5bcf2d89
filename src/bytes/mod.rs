pub mod units;

pub use units::ByteUnitSystem;
