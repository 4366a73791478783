//! Backend commands queued from UI to backend worker.

use shared::domain::Address;

pub enum BackendCommand {
    ForwardAddress { address: Address },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::ForwardAddress { .. } => "forward_address",
        }
    }
}
