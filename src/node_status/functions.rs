//! The impls and functions
//!
use std::{str::FromStr, sync::Arc, time::{Duration, Instant}};
use colored::*;
use log::*;
use anyhow::Result;
use regex::Regex;
use reqwest::Client;
use serde_json::Value;
use tokio::{sync::Semaphore, task::JoinSet};
use crate::utility;
use crate::cluster_config::{ClusterConfig, ClusterRepository};
use crate::error::{ZkResult, ZkStatsError};
use crate::node_status::{AllNodeStatus, MntrFields, NodeStatus};
use crate::response::Response;
use crate::Opts;

impl NodeStatus {
    pub fn new() -> Self { Default::default() }
    /// Projects the raw monitoring data onto the node status.
    pub fn from_mntr(
        host: &str,
        fields: &MntrFields,
    ) -> Self
    {
        NodeStatus {
            host: host.to_string(),
            version: normalize_version(&text_field(host, fields, "version")),
            server_state: text_field(host, fields, "server_state"),
            peer_state: text_field(host, fields, "peer_state"),
            avg_latency: number_field(host, fields, "avg_latency"),
            approximate_data_size: number_field(host, fields, "approximate_data_size"),
            znode_count: number_field(host, fields, "znode_count"),
            outstanding_requests: number_field(host, fields, "outstanding_requests"),
            watch_count: number_field(host, fields, "watch_count"),
        }
    }
}

impl AllNodeStatus {
    pub fn new() -> Self { Default::default() }
    pub async fn collect_status_by_name(
        repository: &impl ClusterRepository,
        cluster_name: &str,
        parallel: usize,
        timeout: Duration,
    ) -> ZkResult<AllNodeStatus>
    {
        let cluster_config = repository.get_cluster_by_name(cluster_name)?;
        AllNodeStatus::collect_status(&cluster_config, parallel, timeout).await
    }
    /// Reads the status of all zookeeper nodes of the cluster, at most `parallel` at the same time.
    ///
    /// The result holds a status for every node, in the order of `zk_nodes`.
    /// If a single node cannot be read, the reads in flight are aborted and the error for that node is returned.
    pub async fn collect_status(
        cluster_config: &ClusterConfig,
        parallel: usize,
        timeout: Duration,
    ) -> ZkResult<AllNodeStatus>
    {
        cluster_config.validate()?;

        info!("begin parallel http read");
        let timer = Instant::now();

        let client = utility::http_client(timeout)?;
        let semaphore = Arc::new(Semaphore::new(parallel.max(1)));
        let port = cluster_config.zk_status_port;
        let mut set = JoinSet::new();

        for (index, host) in cluster_config.zk_nodes.iter().enumerate() {
            let client = client.clone();
            let semaphore = semaphore.clone();
            let host = host.clone();
            set.spawn(async move {
                let _permit = semaphore.acquire_owned()
                    .await
                    .map_err(|e| ZkStatsError::Internal(format!("http read admission: {}", e)))?;
                let nodestatus = AllNodeStatus::read_http(&client, &host, port).await?;
                debug!("{:?}", &nodestatus);
                Ok::<_, ZkStatsError>((index, nodestatus))
            });
        }

        let mut node_status: Vec<Option<NodeStatus>> = vec![None; cluster_config.zk_nodes.len()];
        while let Some(joined) = set.join_next().await {
            let result = joined
                .map_err(|e| ZkStatsError::Internal(format!("http read task failed: {}", e)))
                .and_then(|result| result);
            match result {
                Ok((index, nodestatus)) => node_status[index] = Some(nodestatus),
                Err(e) => {
                    set.abort_all();
                    warn!("end parallel http read with failure {:?}: {}", timer.elapsed(), e);
                    return Err(e);
                }
            }
        }

        info!("end parallel http read {:?}", timer.elapsed());

        Ok(AllNodeStatus { node_status: node_status.into_iter().flatten().collect() })
    }
    async fn read_http(
        client: &Client,
        host: &str,
        port: u16,
    ) -> ZkResult<NodeStatus>
    {
        let data_from_http = utility::http_get(client, host, port, "commands/mntr").await?;
        Ok(AllNodeStatus::parse_node_status(&data_from_http, host))
    }
    // This function parses the http output.
    // This is a separate function in order to allow tests to use it.
    fn parse_node_status(
        http_data: &str,
        host: &str,
    ) -> NodeStatus
    {
        NodeStatus::from_mntr(host, &parse_mntr(http_data))
    }
    /// The node that reports to be the leader.
    pub fn leader(&self) -> Option<&NodeStatus> {
        self.node_status.iter().find(|r| r.server_state == "leader")
    }
    pub fn print(
        &self,
        hostname_filter: &Regex,
    )
    {
        println!("{:20} {:10} {:10} {:25} {:>12} {:>16} {:>12} {:>12} {:>12}",
                 "host",
                 "version",
                 "state",
                 "peer_state",
                 "avg_latency",
                 "approx_data_size",
                 "znode_count",
                 "outstanding",
                 "watch_count",
        );
        for row in self.node_status.iter().filter(|r| hostname_filter.is_match(&r.host)) {
            let server_state = match row.server_state.as_str() {
                "leader" => row.server_state.green(),
                "follower" | "observer" | "standalone" => row.server_state.normal(),
                _ => row.server_state.yellow(),
            };
            println!("{:20} {:10} {:10} {:25} {:12.4} {:16} {:12} {:12} {:12}",
                     row.host,
                     row.version,
                     server_state,
                     row.peer_state,
                     row.avg_latency,
                     row.approximate_data_size,
                     row.znode_count,
                     row.outstanding_requests,
                     row.watch_count,
            );
        }
        if self.leader().is_none() {
            println!("{}", "No zookeeper leader found".yellow());
        }
    }
}

/// Splits the raw monitoring data of a node into metric name and value.
///
/// The admin server returns a JSON object, the four letter word interface a line per metric
/// in the form `key<whitespace>value`. Both are accepted. A leading `zk_` is removed from the key.
pub fn parse_mntr(
    http_data: &str,
) -> MntrFields
{
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(http_data) {
        return map.into_iter()
            .map(|(key, value)| (normalize_key(&key), json_value_to_string(value)))
            .collect();
    }
    http_data.lines()
        .filter_map(|line| {
            let mut split = line.trim().splitn(2, char::is_whitespace);
            let key = split.next().filter(|key| !key.is_empty())?;
            let value = split.next().unwrap_or_default().trim();
            Some((normalize_key(key), value.to_string()))
        })
        .collect()
}

/// Keeps the version number only: `3.8.0-5a02a05e, built on 02/25/2022` becomes `3.8.0`.
pub fn normalize_version(
    version: &str,
) -> String
{
    version.split(',')
        .next()
        .unwrap_or_default()
        .split('-')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

fn normalize_key(key: &str) -> String {
    key.strip_prefix("zk_").unwrap_or(key).to_string()
}

fn json_value_to_string(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn text_field(
    host: &str,
    fields: &MntrFields,
    name: &str,
) -> String
{
    fields.get(name)
        .cloned()
        .unwrap_or_else(|| {
            debug!("({}) monitoring field {} not found", host, name);
            String::new()
        })
}

fn number_field<T: FromStr + Default>(
    host: &str,
    fields: &MntrFields,
    name: &str,
) -> T
{
    match fields.get(name) {
        Some(value) => value.trim().parse().unwrap_or_else(|_e| {
            debug!("({}) could not parse monitoring field {}: '{}'", host, name, value);
            T::default()
        }),
        None => {
            debug!("({}) monitoring field {} not found", host, name);
            T::default()
        }
    }
}

pub async fn print_node_status(
    cluster_name: &str,
    repository: &impl ClusterRepository,
    parallel: usize,
    timeout: Duration,
    options: &Opts,
) -> Result<()>
{
    let hostname_filter = utility::set_regex(&options.hostname_match)?;
    let result = AllNodeStatus::collect_status_by_name(repository, cluster_name, parallel, timeout).await;

    if options.json {
        let response = Response::from_result(result.map(|allnodestatus| allnodestatus.node_status));
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        result?.print(&hostname_filter);
    }
    Ok(())
}
