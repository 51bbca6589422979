pub mod appliance_commands;
pub mod command;
pub mod config;
pub mod error;
pub mod history;
pub mod remote_control;

pub use appliance_commands::{TurnOff, TurnOn};
pub use command::Command;
pub use config::RemoteConfig;
pub use history::CommandHistory;
pub use remote_control::RemoteControl;
