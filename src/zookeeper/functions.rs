//! The impls and functions
//!
use std::{path::PathBuf, sync::Arc};
use async_trait::async_trait;
use log::*;
use crate::cluster_config::ClusterConfig;
use crate::error::{ZkResult, ZkStatsError};
use crate::zookeeper::{FileZkService, FileZkServiceRegistry, ReplicatedTableStatus};

/// The zookeeper service of a single cluster.
#[async_trait]
pub trait ZkService: Send + Sync {
    /// Returns the replication status of every replicated table of the cluster.
    async fn get_replicated_table_status(&self, cluster_config: &ClusterConfig) -> ZkResult<Vec<ReplicatedTableStatus>>;
}

/// Hands out the zookeeper service bound to a cluster name.
pub trait ZkServiceRegistry {
    fn get_zk_service(&self, cluster_name: &str) -> ZkResult<Arc<dyn ZkService>>;
}

impl FileZkServiceRegistry {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        FileZkServiceRegistry { directory: directory.into() }
    }
}

impl ZkServiceRegistry for FileZkServiceRegistry {
    fn get_zk_service(
        &self,
        cluster_name: &str,
    ) -> ZkResult<Arc<dyn ZkService>>
    {
        let path = self.directory.join(format!("{}.replicated_tables.json", cluster_name));
        if !path.is_file() {
            return Err(ZkStatsError::ServiceUnavailable(format!("no zookeeper service for cluster {}: {} not found", cluster_name, path.display())));
        }
        debug!("zookeeper service for cluster {}: {}", cluster_name, path.display());
        Ok(Arc::new(FileZkService { cluster_name: cluster_name.to_string(), path }))
    }
}

impl FileZkService {
    // This function parses the file contents.
    // This is a separate function in order to allow tests to use it.
    fn parse_replicated_table_status(
        json: &str,
    ) -> ZkResult<Vec<ReplicatedTableStatus>>
    {
        serde_json::from_str(json)
            .map_err(|e| ZkStatsError::Parse(format!("replicated table status: {}", e)))
    }
}

#[async_trait]
impl ZkService for FileZkService {
    async fn get_replicated_table_status(
        &self,
        cluster_config: &ClusterConfig,
    ) -> ZkResult<Vec<ReplicatedTableStatus>>
    {
        if cluster_config.cluster_name != self.cluster_name {
            warn!("zookeeper service for cluster {} asked for cluster {}", self.cluster_name, cluster_config.cluster_name);
        }
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ZkStatsError::ServiceUnavailable(format!("{}: {}", self.path.display(), e)))?;
        FileZkService::parse_replicated_table_status(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn test_directory(name: &str) -> PathBuf {
        let directory = std::env::temp_dir().join(format!("zk_stats_{}_{}", name, std::process::id()));
        fs::create_dir_all(&directory).unwrap();
        directory
    }

    #[test]
    fn unit_parse_replicated_table_status() {
        let json = r#"
[
  { "name": "sensor_dt_result_online", "values": [["l1846", "f1846"], ["l1845", "f1845"], ["l1846", "f1846"]] },
  { "name": "sensor_dt_result_offline" }
]
        "#;
        let result = FileZkService::parse_replicated_table_status(json).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "sensor_dt_result_online");
        assert_eq!(result[0].values[1], vec!["l1845", "f1845"]);
        assert!(result[1].values.is_empty());
    }

    #[test]
    fn unit_registry_without_export_is_unavailable() {
        let directory = test_directory("registry_missing");
        let registry = FileZkServiceRegistry::new(&directory);
        assert!(matches!(registry.get_zk_service("unknown"), Err(ZkStatsError::ServiceUnavailable(_))));
        fs::remove_dir_all(&directory).unwrap();
    }

    #[tokio::test]
    async fn unit_file_service_reads_export() {
        let directory = test_directory("registry_export");
        fs::write(directory.join("test.replicated_tables.json"), r#"[{"name":"t1","values":[["l1","f1"]]}]"#).unwrap();

        let registry = FileZkServiceRegistry::new(&directory);
        let service = registry.get_zk_service("test").unwrap();
        let cluster_config = ClusterConfig { cluster_name: "test".to_string(), ..Default::default() };
        let tables = service.get_replicated_table_status(&cluster_config).await.unwrap();

        assert_eq!(tables, vec![ReplicatedTableStatus { name: "t1".to_string(), values: vec![vec!["l1".to_string(), "f1".to_string()]] }]);
        fs::remove_dir_all(&directory).unwrap();
    }

    #[tokio::test]
    async fn unit_file_service_malformed_export() {
        let directory = test_directory("registry_malformed");
        fs::write(directory.join("test.replicated_tables.json"), "not json").unwrap();

        let service = FileZkServiceRegistry::new(&directory).get_zk_service("test").unwrap();
        let result = service.get_replicated_table_status(&ClusterConfig::new()).await;
        assert!(matches!(result, Err(ZkStatsError::Parse(_))));
        fs::remove_dir_all(&directory).unwrap();
    }
}
