//! Module for resolving a cluster name into its configuration.
//!
//! The cluster configuration contains:
//! - the zookeeper nodes, in the order the cluster knows them.
//! - the zookeeper admin server port (`zkStatusPort`, default 8080).
//! - the shard/replica topology of the clickhouse cluster.
//!
//! The configuration is owned by the configuration store, zk_stats only reads it.
//! The store is reached via the [ClusterRepository] trait, [AllClusterConfig] implements it
//! for a JSON file with a list of clusters:
//! ```text
//! [
//!   {
//!     "clusterName": "test",
//!     "zkNodes": ["192.168.110.8", "192.168.110.12", "192.168.110.16"],
//!     "zkStatusPort": 8080,
//!     "shards": [
//!       { "replicas": [ { "ip": "192.168.101.106", "hostname": "vm101106" }, { "ip": "192.168.101.108" } ] }
//!     ]
//!   }
//! ]
//! ```
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
