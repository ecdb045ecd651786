//! Utilities
use std::{collections::HashMap, env, fs, io::Write, path::PathBuf, time::Duration};
use anyhow::{bail, Context, Result};
use log::*;
use regex::Regex;
use reqwest::{Client, StatusCode};
use crate::error::{ZkResult, ZkStatsError};

use crate::DEFAULT_CLUSTER_FILE;
use crate::DEFAULT_SERVICE_DIRECTORY;
use crate::DEFAULT_PARALLEL;
use crate::DEFAULT_TIMEOUT;

/// Creates the http client shared by all requests of a single collection.
///
/// The admin servers are on the internal network, a proxy set in the environment is not used.
pub fn http_client(
    timeout: Duration,
) -> ZkResult<Client>
{
    Client::builder()
        .no_proxy()
        .timeout(timeout)
        .build()
        .map_err(|e| ZkStatsError::Internal(format!("unable to create http client: {}", e)))
}

/// Performs a GET request and returns the body.
///
/// Anything else than `200 OK` is an error naming the host.
pub async fn http_get(
    client: &Client,
    host: &str,
    port: u16,
    url: &str,
) -> ZkResult<String>
{
    let response = client.get(format!("http://{}:{}/{}", url_host(host), port, url))
        .send()
        .await
        .map_err(|source| {
            debug!("Non-Ok success response: {}:{}/{}: {}", host, port, url, source);
            ZkStatsError::NodeUnreachable { host: host.to_string(), port, source }
        })?;

    if response.status() != StatusCode::OK
    {
        debug!("Non success response: {}:{}/{} = {}", host, port, url, response.status());
        return Err(ZkStatsError::NodeProtocol { host: host.to_string(), port, status: response.status().to_string() });
    }
    debug!("Success response: {}:{}/{} = {}", host, port, url, response.status());

    response.text()
        .await
        .map_err(|source| ZkStatsError::NodeUnreachable { host: host.to_string(), port, source })
}

// an IPv6 address needs brackets in an url.
fn url_host(host: &str) -> String {
    if host.contains(':') && !host.starts_with('[') {
        format!("[{}]", host)
    } else {
        host.to_string()
    }
}

// option set: use it and remember it for .env.
// option not set: use the environment variable (possibly set via dotenv().ok()), or else the default.
fn set_option(
    option: &Option<String>,
    env_name: &'static str,
    default: &str,
    changed_options: &mut HashMap<&str, String>,
) -> String
{
    match option {
        Some(value) => {
            info!("{} argument set: using: {}", env_name, value);
            changed_options.insert(env_name, value.to_string());
            value.to_string()
        }
        None => match env::var(env_name) {
            Ok(set_var) => {
                info!("argument not set: set via .env: {}: {}", env_name, set_var);
                changed_options.insert(env_name, set_var.to_owned());
                set_var
            }
            Err(_e) => {
                info!("argument not set: and not set via .env: using default for {}: {}", env_name, default);
                default.to_string()
            }
        },
    }
}

pub fn set_cluster_file(
    option: &Option<String>,
    changed_options: &mut HashMap<&str, String>,
) -> PathBuf
{
    PathBuf::from(set_option(option, "ZKSTATS_CLUSTER_FILE", DEFAULT_CLUSTER_FILE, changed_options))
}

pub fn set_service_directory(
    option: &Option<String>,
    changed_options: &mut HashMap<&str, String>,
) -> PathBuf
{
    PathBuf::from(set_option(option, "ZKSTATS_SERVICE_DIRECTORY", DEFAULT_SERVICE_DIRECTORY, changed_options))
}

pub fn set_parallel(
    option: &Option<String>,
    changed_options: &mut HashMap<&str, String>,
) -> Result<usize>
{
    let parallel_string = set_option(option, "ZKSTATS_PARALLEL", &DEFAULT_PARALLEL.to_string(), changed_options);
    let parallel: usize = parallel_string.parse()
        .with_context(|| format!("Invalid parallel setting: {}", parallel_string))?;
    Ok(parallel.max(1))
}

pub fn set_timeout(
    option: &Option<String>,
    changed_options: &mut HashMap<&str, String>,
) -> Result<Duration>
{
    let timeout_string = set_option(option, "ZKSTATS_TIMEOUT", &DEFAULT_TIMEOUT.to_string(), changed_options);
    let timeout: u64 = timeout_string.parse()
        .with_context(|| format!("Invalid timeout setting: {}", timeout_string))?;
    if timeout == 0 {
        bail!("Invalid timeout setting: {}, the timeout must be at least 1 second", timeout_string);
    }
    Ok(Duration::from_secs(timeout))
}

pub fn set_regex(
    regex: &Option<String>,
) -> Result<Regex>
{
    match regex {
        Some(regex) => Regex::new(regex.as_str()).with_context(|| format!("Invalid regex: {}", regex)),
        None => Ok(Regex::new(".*")?),
    }
}

pub fn dotenv_writer(
    write_dotenv: bool,
    changed_options: HashMap<&str, String>,
) -> Result<()>
{
    if !changed_options.is_empty() && write_dotenv {
        info!("Writing .env file");
        let mut file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(".env")
            .with_context(|| "Error writing .env file: .env")?;

        for (key, value) in changed_options {
            file.write_all(format!("{}={}\n", key, value).as_bytes())?;
            info!("{}={}", key, value);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_option_set_is_used_and_remembered() {
        let mut changed_options = HashMap::new();
        let parallel = set_parallel(&Some("8".to_string()), &mut changed_options).unwrap();
        assert_eq!(parallel, 8);
        assert_eq!(changed_options.get("ZKSTATS_PARALLEL"), Some(&"8".to_string()));
    }

    #[test]
    fn unit_parallel_zero_is_one() {
        let mut changed_options = HashMap::new();
        assert_eq!(set_parallel(&Some("0".to_string()), &mut changed_options).unwrap(), 1);
    }

    #[test]
    fn unit_invalid_timeout() {
        let mut changed_options = HashMap::new();
        assert!(set_timeout(&Some("ten".to_string()), &mut changed_options).is_err());
        assert_eq!(set_timeout(&Some("3".to_string()), &mut changed_options).unwrap(), Duration::from_secs(3));
    }

    #[test]
    fn unit_zero_timeout() {
        let mut changed_options = HashMap::new();
        assert!(set_timeout(&Some("0".to_string()), &mut changed_options).is_err());
        assert_eq!(set_timeout(&Some("1".to_string()), &mut changed_options).unwrap(), Duration::from_secs(1));
    }

    #[test]
    fn unit_url_host() {
        assert_eq!(url_host("192.168.110.8"), "192.168.110.8");
        assert_eq!(url_host("zk1.example.com"), "zk1.example.com");
        assert_eq!(url_host("fd00::8"), "[fd00::8]");
        assert_eq!(url_host("[fd00::8]"), "[fd00::8]");
    }

    #[tokio::test]
    async fn unit_http_get_ipv6_url() {
        // a refused connection, not an invalid url, shows the address was accepted.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = http_client(Duration::from_secs(1)).unwrap();
        match http_get(&client, "::1", port, "commands/mntr").await {
            Err(ZkStatsError::NodeUnreachable { host, source, .. }) => {
                assert_eq!(host, "::1");
                assert!(!source.is_builder());
            },
            other => panic!("expected NodeUnreachable error, got {:?}", other),
        }
    }

    #[test]
    fn unit_regex() {
        assert!(set_regex(&None).unwrap().is_match("192.168.110.8"));
        assert!(!set_regex(&Some("^10\\.".to_string())).unwrap().is_match("192.168.110.8"));
        assert!(set_regex(&Some("(".to_string())).is_err());
    }
}
