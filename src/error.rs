//! The error type of the library.
//!
//! Hard failures (unknown cluster, unreachable node, unavailable service) stop an operation
//! immediately. Malformed monitoring lines are not errors: the field keeps its zero value.
use thiserror::Error;

pub type ZkResult<T> = std::result::Result<T, ZkStatsError>;

/// The response code for a successful operation.
pub const CODE_SUCCESS: &str = "0000";
/// The response code for an internal failure: configuration or data that could not be used.
pub const CODE_INTERNAL: &str = "5000";
/// The response code for a failing zookeeper node or zookeeper service.
pub const CODE_ZOOKEEPER_ERROR: &str = "5080";
/// The response code for a cluster name that does not resolve.
pub const CODE_RECORD_NOT_FOUND: &str = "5202";

#[derive(Debug, Error)]
pub enum ZkStatsError {
    #[error("cluster {cluster} does not exist")]
    ConfigNotFound { cluster: String },

    #[error("unable to read cluster configuration {path}: {source}")]
    ConfigUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cluster {cluster} has an invalid configuration: {reason}")]
    InvalidConfig { cluster: String, reason: String },

    #[error("get zookeeper node {host}:{port} status fail: {source}")]
    NodeUnreachable {
        host: String,
        port: u16,
        #[source]
        source: reqwest::Error,
    },

    #[error("get zookeeper node {host}:{port} status fail: {status}")]
    NodeProtocol { host: String, port: u16, status: String },

    #[error("get zookeeper service fail: {0}")]
    ServiceUnavailable(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ZkStatsError {
    /// The response code that lets a caller tell an unknown cluster from an unreachable
    /// node or service, and both from an internal failure.
    pub fn code(&self) -> &'static str {
        match self {
            ZkStatsError::ConfigNotFound { .. } => CODE_RECORD_NOT_FOUND,
            ZkStatsError::NodeUnreachable { .. }
            | ZkStatsError::NodeProtocol { .. }
            | ZkStatsError::ServiceUnavailable(_) => CODE_ZOOKEEPER_ERROR,
            ZkStatsError::ConfigUnavailable { .. }
            | ZkStatsError::InvalidConfig { .. }
            | ZkStatsError::Parse(_)
            | ZkStatsError::Internal(_) => CODE_INTERNAL,
        }
    }
    /// The node the error is about, if the error is about a single node.
    pub fn host(&self) -> Option<&str> {
        match self {
            ZkStatsError::NodeUnreachable { host, .. }
            | ZkStatsError::NodeProtocol { host, .. } => Some(host),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_codes_distinguish_failure_kinds() {
        let not_found = ZkStatsError::ConfigNotFound { cluster: "abc".to_string() };
        let protocol = ZkStatsError::NodeProtocol { host: "10.0.0.1".to_string(), port: 8080, status: "500 Internal Server Error".to_string() };
        let service = ZkStatsError::ServiceUnavailable("connection refused".to_string());
        let parse = ZkStatsError::Parse("expected value at line 1 column 1".to_string());

        assert_eq!(not_found.code(), CODE_RECORD_NOT_FOUND);
        assert_eq!(protocol.code(), CODE_ZOOKEEPER_ERROR);
        assert_eq!(service.code(), CODE_ZOOKEEPER_ERROR);
        assert_eq!(parse.code(), CODE_INTERNAL);
    }

    #[test]
    fn unit_messages_name_the_offending_node() {
        let protocol = ZkStatsError::NodeProtocol { host: "10.0.0.1".to_string(), port: 8080, status: "404 Not Found".to_string() };
        assert_eq!(protocol.to_string(), "get zookeeper node 10.0.0.1:8080 status fail: 404 Not Found");
        assert_eq!(protocol.host(), Some("10.0.0.1"));

        let not_found = ZkStatsError::ConfigNotFound { cluster: "abc".to_string() };
        assert_eq!(not_found.to_string(), "cluster abc does not exist");
        assert_eq!(not_found.host(), None);
    }
}
