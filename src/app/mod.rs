//! Application layer - orchestrates domain and ports
//!
//! - **sampler**: periodic read/publish/alert loop
//! - **actuator**: remote switch commands
//! - **button**: reset button hold detection
//! - **node**: composition root and boot sequence

pub mod actuator;
pub mod button;
pub mod node;
pub mod sampler;

pub use actuator::SwitchActuator;
pub use button::ResetButton;
pub use node::Node;
pub use sampler::{PeriodicSampler, TickSchedule};
