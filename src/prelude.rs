pub use crate::coordinator::Coordinator;
pub use crate::descriptors::{AlertType, DeviceClass, SensorDescriptor};
pub use crate::entity::{AddEntities, Attributes, Entity, EntityState};
pub use crate::settings::{Language, Settings, UnitSystem};
pub use crate::snapshot::{Alert, AlertGroup, Snapshot};
pub use crate::units::Unit;
pub use crate::value::Value;
pub use anyhow::{anyhow, Context, Error};
pub use chrono::prelude::*;
pub use log::{debug, error, info, warn};
pub use serde::{Deserialize, Serialize};
pub use std::convert::{TryFrom, TryInto};
pub use std::sync::{Arc, RwLock};

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
