//! The impls and functions
//!
use std::{collections::HashSet, fs, path::Path};
use log::*;
use crate::error::{ZkResult, ZkStatsError};
use crate::cluster_config::{AllClusterConfig, ClusterConfig};

/// The lookup of a cluster configuration by cluster name.
pub trait ClusterRepository {
    fn get_cluster_by_name(&self, cluster_name: &str) -> ZkResult<ClusterConfig>;
}

impl ClusterConfig {
    pub fn new() -> Self { Default::default() }
    /// Checks the constraints the node status collection depends on.
    ///
    /// The topology is not checked: a cluster without shards simply has an empty header.
    pub fn validate(&self) -> ZkResult<()>
    {
        if self.zk_nodes.is_empty() {
            return Err(ZkStatsError::InvalidConfig {
                cluster: self.cluster_name.clone(),
                reason: "no zookeeper nodes configured".to_string(),
            });
        }
        if let Some(node) = self.zk_nodes.iter().find(|node| node.trim().is_empty()) {
            return Err(ZkStatsError::InvalidConfig {
                cluster: self.cluster_name.clone(),
                reason: format!("invalid zookeeper node address: '{}'", node),
            });
        }
        if self.zk_status_port == 0 {
            return Err(ZkStatsError::InvalidConfig {
                cluster: self.cluster_name.clone(),
                reason: "zookeeper status port 0 is not a valid port".to_string(),
            });
        }
        Ok(())
    }
}

impl AllClusterConfig {
    pub fn new() -> Self { Default::default() }
    pub fn read_file(
        path: &Path,
    ) -> ZkResult<AllClusterConfig>
    {
        info!("reading cluster configuration: {}", path.display());
        let json = fs::read_to_string(path)
            .map_err(|source| ZkStatsError::ConfigUnavailable {
                path: path.display().to_string(),
                source,
            })?;
        AllClusterConfig::parse_cluster_config(&json)
    }
    // This function parses the file contents.
    // This is a separate function in order to allow tests to use it.
    fn parse_cluster_config(
        json: &str,
    ) -> ZkResult<AllClusterConfig>
    {
        let cluster_config: Vec<ClusterConfig> = serde_json::from_str(json)
            .map_err(|e| ZkStatsError::Parse(format!("cluster configuration: {}", e)))?;

        {
            let mut seen = HashSet::new();
            for cluster in cluster_config.iter().filter(|r| !seen.insert(r.cluster_name.as_str())) {
                error!("Duplicate cluster name: {}, only the first entry is used", cluster.cluster_name);
            }
        }
        debug!("{} clusters configured", cluster_config.len());

        Ok(AllClusterConfig { cluster_config })
    }
}

impl ClusterRepository for AllClusterConfig {
    fn get_cluster_by_name(
        &self,
        cluster_name: &str,
    ) -> ZkResult<ClusterConfig>
    {
        self.cluster_config
            .iter()
            .find(|r| r.cluster_name == cluster_name)
            .cloned()
            .ok_or_else(|| ZkStatsError::ConfigNotFound { cluster: cluster_name.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster_config::DEFAULT_ZK_STATUS_PORT;

    #[test]
    fn unit_parse_cluster_with_topology() {
        let json = r#"
[
  {
    "clusterName": "test",
    "zkNodes": ["192.168.110.8", "192.168.110.12", "192.168.110.16"],
    "zkStatusPort": 8081,
    "shards": [
      { "replicas": [ { "ip": "192.168.101.106", "hostname": "vm101106" }, { "ip": "192.168.101.108", "hostname": "vm101108" } ] },
      { "replicas": [ { "ip": "192.168.102.114", "hostname": "vm102114" } ] }
    ]
  }
]
        "#;
        let result = AllClusterConfig::parse_cluster_config(json).unwrap();
        let cluster = result.get_cluster_by_name("test").unwrap();
        assert_eq!(cluster.zk_nodes, vec!["192.168.110.8", "192.168.110.12", "192.168.110.16"]);
        assert_eq!(cluster.zk_status_port, 8081);
        assert_eq!(cluster.shards.len(), 2);
        assert_eq!(cluster.shards[0].replicas[1].ip, "192.168.101.108");
        assert_eq!(cluster.shards[1].replicas[0].hostname, "vm102114");
    }

    #[test]
    fn unit_parse_cluster_defaults() {
        // a cluster without the port and topology set.
        let json = r#"[ { "clusterName": "minimal", "zkNodes": ["zk1"] } ]"#;
        let result = AllClusterConfig::parse_cluster_config(json).unwrap();
        let cluster = result.get_cluster_by_name("minimal").unwrap();
        assert_eq!(cluster.zk_status_port, DEFAULT_ZK_STATUS_PORT);
        assert!(cluster.shards.is_empty());
    }

    #[test]
    fn unit_unknown_cluster_is_not_found() {
        let json = r#"[ { "clusterName": "test", "zkNodes": ["zk1"] } ]"#;
        let result = AllClusterConfig::parse_cluster_config(json).unwrap();
        match result.get_cluster_by_name("production") {
            Err(ZkStatsError::ConfigNotFound { cluster }) => assert_eq!(cluster, "production"),
            other => panic!("expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn unit_duplicate_cluster_uses_first() {
        let json = r#"[ { "clusterName": "test", "zkNodes": ["zk1"] }, { "clusterName": "test", "zkNodes": ["zk2"] } ]"#;
        let result = AllClusterConfig::parse_cluster_config(json).unwrap();
        assert_eq!(result.get_cluster_by_name("test").unwrap().zk_nodes, vec!["zk1"]);
    }

    #[test]
    fn unit_parse_invalid_json() {
        let json = r#"{ "clusterName": "#;
        assert!(matches!(AllClusterConfig::parse_cluster_config(json), Err(ZkStatsError::Parse(_))));
    }

    #[test]
    fn unit_read_missing_file() {
        let result = AllClusterConfig::read_file(Path::new("/nonexistent/zk_stats/clusters.json"));
        assert!(matches!(result, Err(ZkStatsError::ConfigUnavailable { .. })));
    }

    #[test]
    fn unit_validate() {
        let mut cluster = ClusterConfig {
            cluster_name: "test".to_string(),
            zk_nodes: vec!["zk1".to_string()],
            zk_status_port: 8080,
            ..Default::default()
        };
        assert!(cluster.validate().is_ok());

        cluster.zk_status_port = 0;
        assert!(matches!(cluster.validate(), Err(ZkStatsError::InvalidConfig { .. })));

        cluster.zk_status_port = 8080;
        cluster.zk_nodes.clear();
        assert!(matches!(cluster.validate(), Err(ZkStatsError::InvalidConfig { .. })));

        cluster.zk_nodes.push(" ".to_string());
        assert!(matches!(cluster.validate(), Err(ZkStatsError::InvalidConfig { .. })));
    }
}
