//! Module for the zookeeper service of a cluster.
//!
//! The zookeeper service holds the replication bookkeeping of the replicated tables:
//! the replication log pointer and queue of every replica.
//! zk_stats does not interpret the znodes itself, it asks a [ZkService] for the status per
//! replicated table, and obtains the service for a cluster from a [ZkServiceRegistry].
//!
//! [FileZkServiceRegistry] provides the status exported by the zookeeper tooling of the cluster
//! in the file `<directory>/<cluster name>.replicated_tables.json`:
//! ```text
//! [
//!   { "name": "sensor_dt_result_online", "values": [["l1846", "f1846"], ["l1845", "f1845"]] }
//! ]
//! ```
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
