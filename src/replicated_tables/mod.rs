//! Module for the replication status of the replicated tables of a cluster.
//!
//! The replication status is presented as a matrix:
//! - the header holds, per shard, the addresses of its replicas, in the order of the cluster topology.
//! - every row is a replicated table, holding the status values per shard and replica,
//!   as reported by the zookeeper service.
//!
//! ```text
//! {"header":[["vm101106","vm101108"],["vm102114","vm101110"]],"tables":[{"name":"sensor_dt_result_online","values":[["l1846","f1846"],["l1845","f1845"]]}]}
//! ```
//!
//! The header is built from the cluster topology, not from the rows.
//! A row is expected to have the shape of the header, rows that do not are reported but kept.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
