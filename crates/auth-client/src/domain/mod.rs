//! Domain layer: validated value objects and the gateway contract.

pub mod credentials;
pub mod gateway;
pub mod value_object;
