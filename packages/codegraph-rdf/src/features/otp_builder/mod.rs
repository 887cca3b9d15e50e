//! OTP Builders - process-pattern implementations
//!
//! GenServer, Supervisor (static and dynamic), Agent and Task modules. The
//! implementation node is the module node itself with an extra class.

mod agent;
mod genserver;
mod supervisor;
mod task;

pub use agent::AgentBuilder;
pub use genserver::GenServerBuilder;
pub use supervisor::SupervisorBuilder;
pub use task::TaskBuilder;
