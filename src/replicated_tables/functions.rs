//! The impls and functions
//!
use std::time::Instant;
use colored::*;
use log::*;
use anyhow::Result;
use crate::cluster_config::{ClusterConfig, ClusterRepository};
use crate::error::ZkResult;
use crate::replicated_tables::ReplicationMatrix;
use crate::response::Response;
use crate::zookeeper::{ReplicatedTableStatus, ZkServiceRegistry};
use crate::Opts;

/// The replica addresses per shard, in the order of the cluster topology.
pub fn build_header(
    cluster_config: &ClusterConfig,
) -> Vec<Vec<String>>
{
    cluster_config.shards
        .iter()
        .map(|shard| shard.replicas.iter().map(|replica| replica.ip.clone()).collect())
        .collect()
}

impl ReplicationMatrix {
    pub fn new() -> Self { Default::default() }
    pub async fn build_by_name(
        repository: &impl ClusterRepository,
        registry: &impl ZkServiceRegistry,
        cluster_name: &str,
    ) -> ZkResult<ReplicationMatrix>
    {
        let cluster_config = repository.get_cluster_by_name(cluster_name)?;
        ReplicationMatrix::build(&cluster_config, registry).await
    }
    /// Combines the replicated table status of the zookeeper service with the header of the cluster topology.
    ///
    /// The rows are returned as the zookeeper service reports them.
    pub async fn build(
        cluster_config: &ClusterConfig,
        registry: &impl ZkServiceRegistry,
    ) -> ZkResult<ReplicationMatrix>
    {
        info!("begin replicated table status");
        let timer = Instant::now();

        let zk_service = registry.get_zk_service(&cluster_config.cluster_name)?;
        let tables = zk_service.get_replicated_table_status(cluster_config).await?;

        let replicationmatrix = ReplicationMatrix {
            header: build_header(cluster_config),
            tables,
        };
        for name in replicationmatrix.mismatched_tables() {
            warn!("cluster {}: replicated table {} does not match the shard/replica topology", cluster_config.cluster_name, name);
        }

        info!("end replicated table status {:?}", timer.elapsed());
        Ok(replicationmatrix)
    }
    fn matches_header(
        &self,
        table: &ReplicatedTableStatus,
    ) -> bool
    {
        table.values.len() == self.header.len()
            && table.values.iter().zip(self.header.iter()).all(|(values, replicas)| values.len() == replicas.len())
    }
    /// The names of the tables with a number of shards or replicas that differs from the header.
    pub fn mismatched_tables(&self) -> Vec<&str> {
        self.tables
            .iter()
            .filter(|table| !self.matches_header(table))
            .map(|table| table.name.as_str())
            .collect()
    }
    /// The printable cells of a table, one per header column.
    ///
    /// A shard without replicas takes one column. Missing values are empty cells,
    /// values beyond the header are appended after the last column.
    fn row_cells(
        &self,
        table: &ReplicatedTableStatus,
    ) -> Vec<String>
    {
        let mut cells = Vec::new();
        let mut extra_values = Vec::new();
        for (shard, replicas) in self.header.iter().enumerate() {
            let values = table.values.get(shard);
            let columns = replicas.len().max(1);
            for replica in 0..columns {
                cells.push(values.and_then(|values| values.get(replica)).cloned().unwrap_or_default());
            }
            if let Some(values) = values {
                extra_values.extend(values.iter().skip(columns).cloned());
            }
        }
        extra_values.extend(table.values.iter().skip(self.header.len()).flatten().cloned());
        cells.extend(extra_values);
        cells
    }
    pub fn print(
        &self,
    )
    {
        print!("{:40}", "");
        for (shard_number, replicas) in self.header.iter().enumerate() {
            print!(" {:width$}", format!("shard {}", shard_number + 1), width = replicas.len().max(1) * 17 - 1);
        }
        println!();
        print!("{:40}", "table");
        for replicas in &self.header {
            if replicas.is_empty() {
                print!(" {:16}", "");
            }
            for replica in replicas {
                print!(" {:16}", replica);
            }
        }
        println!();
        for table in &self.tables {
            if self.matches_header(table) {
                print!("{:40}", table.name);
            } else {
                print!("{:40}", table.name.red());
            }
            for cell in self.row_cells(table) {
                print!(" {:16}", cell);
            }
            println!();
        }
    }
}

pub async fn print_replicated_tables(
    cluster_name: &str,
    repository: &impl ClusterRepository,
    registry: &impl ZkServiceRegistry,
    options: &Opts,
) -> Result<()>
{
    let result = ReplicationMatrix::build_by_name(repository, registry, cluster_name).await;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&Response::from_result(result))?);
    } else {
        result?.print();
    }
    Ok(())
}
