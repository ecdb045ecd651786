//! zk_stats: the status of the zookeeper nodes and the replicated tables of a clickhouse cluster.
//!
//! Settings are taken from the commandline, else from the environment (`.env`), else the default.
//!
use std::collections::HashMap;
use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use log::*;

use zk_stats::cluster_config::AllClusterConfig;
use zk_stats::zookeeper::FileZkServiceRegistry;
use zk_stats::{node_status, replicated_tables, utility, Opts};

#[tokio::main]
async fn main() -> Result<()>
{
    env_logger::init();
    dotenv().ok();
    let options = Opts::parse();

    let mut changed_options = HashMap::new();
    let cluster_file = utility::set_cluster_file(&options.cluster_file, &mut changed_options);
    let service_directory = utility::set_service_directory(&options.service_directory, &mut changed_options);
    let parallel = utility::set_parallel(&options.parallel, &mut changed_options)?;
    let timeout = utility::set_timeout(&options.timeout, &mut changed_options)?;

    let allclusterconfig = AllClusterConfig::read_file(&cluster_file)?;

    if let Some(cluster_name) = &options.print_status {
        debug!("print status of cluster {}", cluster_name);
        node_status::print_node_status(cluster_name, &allclusterconfig, parallel, timeout, &options).await?;
    } else if let Some(cluster_name) = &options.print_replicated_tables {
        debug!("print replicated tables of cluster {}", cluster_name);
        let registry = FileZkServiceRegistry::new(service_directory);
        replicated_tables::print_replicated_tables(cluster_name, &allclusterconfig, &registry, &options).await?;
    }

    utility::dotenv_writer(options.write_dotenv, changed_options)?;

    Ok(())
}
