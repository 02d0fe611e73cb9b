//! [Environment Canada](https://weather.gc.ca/) station observations and weather alerts
//! as individually addressable sensors.

pub mod coordinator;
pub mod descriptors;
pub mod entity;
pub mod logging;
pub mod opts;
pub mod prelude;
pub mod sensors;
pub mod settings;
pub mod snapshot;
pub mod units;
pub mod value;
