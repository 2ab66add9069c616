pub mod add_adapter;
pub mod admin;
pub mod attest_message;
pub mod disable_adapter;
pub mod enable_adapter;
pub mod exec_message;
pub mod pick_up_message;
pub mod recv_message;
pub mod register;
pub mod send_message;

pub use add_adapter::*;
pub use admin::*;
pub use attest_message::*;
pub use disable_adapter::*;
pub use enable_adapter::*;
pub use exec_message::*;
pub use pick_up_message::*;
pub use recv_message::*;
pub use register::*;
pub use send_message::*;
