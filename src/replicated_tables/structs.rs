//! The structs
//!
use crate::zookeeper::ReplicatedTableStatus;

/// The header per shard and replica, and the replicated table status rows.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct ReplicationMatrix {
    pub header: Vec<Vec<String>>,
    pub tables: Vec<ReplicatedTableStatus>,
}
