//! Module for reading `/commands/mntr` on the zookeeper nodes.
//!
//! The `/commands/mntr` endpoint of the zookeeper admin server reports the monitoring data of a node,
//! such as the version, the server state (leader, follower, observer, standalone),
//! the average latency and the number of znodes and watches.
//!
//! The endpoint is available on every zookeeper node on the admin server port, default port 8080.
//! The status of all the zookeeper nodes of a cluster is read in parallel,
//! a single failing node fails the whole read.
//!
//! The node status functionality is called from:
//! - [crate] -> [print_node_status] (prints the status of the zookeeper nodes of a cluster)
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
