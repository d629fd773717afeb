// crates/citygdp-core/src/model/mod.rs
pub mod city;
pub mod convert;
pub mod region;

pub use city::{City, CityId, Dataset, GdpPoint};
pub use region::Region;
