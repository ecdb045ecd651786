//! The structs
//!
use std::collections::BTreeMap;

/// The raw monitoring data of a node: metric name with the `zk_` prefix removed, and the value as text.
pub type MntrFields = BTreeMap<String, String>;

/// The status of a single zookeeper node.
///
/// This is what is returned for a node:
/// ```text
/// {"host":"192.168.110.12","version":"3.8.0","server_state":"leader","peer_state":"leading - broadcast","avg_latency":0.1118,"approximate_data_size":1451273,"znode_count":6485,"outstanding_requests":0,"watch_count":1}
/// ```
/// Fields that could not be found or parsed are left at their zero value.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct NodeStatus {
    /// zk_stats added to allow understanding the source host.
    pub host: String,
    pub version: String,
    pub server_state: String,
    pub peer_state: String,
    pub avg_latency: f64,
    pub approximate_data_size: u64,
    pub znode_count: u64,
    pub outstanding_requests: u64,
    pub watch_count: u64,
}
/// Wrapper struct for holding the node status in the order of the configured zookeeper nodes.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct AllNodeStatus {
    pub node_status: Vec<NodeStatus>,
}
