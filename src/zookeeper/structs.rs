//! The structs
//!
use std::path::PathBuf;

/// The replication status of a single replicated table.
///
/// `values` holds a list per shard, with a status per replica, for example:
/// ```text
/// {"name":"sensor_dt_result_online","values":[["l1846","f1846"],["l1845","f1845"],["l1846","f1846"]]}
/// ```
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct ReplicatedTableStatus {
    pub name: String,
    #[serde(default)]
    pub values: Vec<Vec<String>>,
}

/// Registry for services reading the exported replicated table status from a directory.
#[derive(Debug, Clone)]
pub struct FileZkServiceRegistry {
    pub directory: PathBuf,
}

/// Service reading the exported replicated table status of one cluster.
#[derive(Debug, Clone)]
pub struct FileZkService {
    pub cluster_name: String,
    pub path: PathBuf,
}
