//! zk_stats: read the status of the zookeeper nodes of a clickhouse cluster,
//! and the replication status of its replicated tables.
//!
//! - [node_status]: the `/commands/mntr` monitoring data of every zookeeper node of a cluster.
//! - [replicated_tables]: the replication status per replicated table, shard and replica.
//!
//! Both resolve the cluster via a [cluster_config::ClusterRepository].
//!
extern crate serde;
extern crate serde_json;
#[macro_use]
extern crate serde_derive;

use clap::{ArgGroup, Parser};

pub mod cluster_config;
pub mod error;
pub mod node_status;
pub mod replicated_tables;
pub mod response;
pub mod utility;
pub mod zookeeper;

/// The file holding the cluster configuration.
const DEFAULT_CLUSTER_FILE: &str = "clusters.json";
/// The directory holding the replicated table status exported per cluster.
const DEFAULT_SERVICE_DIRECTORY: &str = ".";
/// The number of zookeeper nodes read at the same time.
const DEFAULT_PARALLEL: usize = 4;
/// The timeout in seconds of a single http read.
const DEFAULT_TIMEOUT: u64 = 10;

/// The commandline options.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("action").required(true).args(["print_status", "print_replicated_tables"])))]
pub struct Opts {
    /// print the status of the zookeeper nodes of the cluster
    #[arg(long, value_name = "cluster name")]
    pub print_status: Option<String>,
    /// print the replication status of the replicated tables of the cluster
    #[arg(long, value_name = "cluster name")]
    pub print_replicated_tables: Option<String>,
    /// regex to select hosts when printing the node status
    #[arg(long, value_name = "regex")]
    pub hostname_match: Option<String>,
    /// print the result as json with return code and message
    #[arg(long)]
    pub json: bool,
    /// file with the cluster configuration
    #[arg(long, value_name = "path")]
    pub cluster_file: Option<String>,
    /// directory with the exported replicated table status per cluster
    #[arg(long, value_name = "path")]
    pub service_directory: Option<String>,
    /// number of zookeeper nodes to read at the same time
    #[arg(long, value_name = "nr")]
    pub parallel: Option<String>,
    /// timeout in seconds for reading a zookeeper node
    #[arg(long, value_name = "seconds")]
    pub timeout: Option<String>,
    /// write the cluster file, service directory, parallel and timeout settings to .env
    #[arg(long)]
    pub write_dotenv: bool,
}
