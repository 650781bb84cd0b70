//! Shared export record types for the information propagation simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! The core engine produces these records; the export layer writes them.

pub mod network;
pub mod spread;
pub mod state;
pub mod table;

/// Identifier of a node in the network, and of the agent living on it.
pub type NodeId = usize;

/// Identifier of an injected information item.
pub type ItemId = u64;

// Re-export record types
pub use network::NetworkSummary;
pub use spread::SpreadRecord;
pub use state::{AgentRecord, ItemRecord};
pub use table::{round4, TableRow};
