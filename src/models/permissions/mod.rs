pub mod entities;
pub mod gate;

pub use entities::{Permission, PermissionAction, PermissionCategory, PermissionSet};
pub use gate::{GateDecision, GateFallback, PermissionGate};
