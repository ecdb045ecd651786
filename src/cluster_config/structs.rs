//! The structs
//!
/// The default port of the zookeeper admin server.
pub const DEFAULT_ZK_STATUS_PORT: u16 = 8080;

fn default_zk_status_port() -> u16 { DEFAULT_ZK_STATUS_PORT }

/// The configuration of a single cluster.
///
/// The field names follow the configuration store, which uses camelCase.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClusterConfig {
    pub cluster_name: String,
    /// The order of the zookeeper nodes is kept in the node status output.
    #[serde(default)]
    pub zk_nodes: Vec<String>,
    #[serde(default = "default_zk_status_port")]
    pub zk_status_port: u16,
    #[serde(default)]
    pub shards: Vec<Shard>,
}
/// A shard, holding its replicas in topology order.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Shard {
    #[serde(default)]
    pub replicas: Vec<Replica>,
}
/// A replica of a shard.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Replica {
    pub ip: String,
    #[serde(default)]
    pub hostname: String,
}
/// Wrapper struct for holding the configured clusters.
///
/// In this way, the struct can be used with the impl functions.
#[derive(Debug, Default)]
pub struct AllClusterConfig {
    pub cluster_config: Vec<ClusterConfig>,
}
