pub mod adapter_info;
pub mod attestation_info;
pub mod integrator_chain_config;
pub mod integrator_config;
pub mod outbox_message;
pub mod sequence_tracker;

pub use adapter_info::*;
pub use attestation_info::*;
pub use integrator_chain_config::*;
pub use integrator_config::*;
pub use outbox_message::*;
pub use sequence_tracker::*;
