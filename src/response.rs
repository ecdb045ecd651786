//! The response envelope for presenting a result.
//!
//! ```text
//! {"retCode":"0000","retMsg":"ok","entity":[...]}
//! {"retCode":"5202","retMsg":"cluster test does not exist","entity":null}
//! ```
use crate::error::{ZkResult, CODE_SUCCESS};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Response<T> {
    #[serde(rename = "retCode")]
    pub ret_code: String,
    #[serde(rename = "retMsg")]
    pub ret_msg: String,
    pub entity: Option<T>,
}

impl<T> Response<T> {
    pub fn from_result(result: ZkResult<T>) -> Self {
        match result {
            Ok(entity) => Response {
                ret_code: CODE_SUCCESS.to_string(),
                ret_msg: "ok".to_string(),
                entity: Some(entity),
            },
            Err(e) => Response {
                ret_code: e.code().to_string(),
                ret_msg: e.to_string(),
                entity: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ZkStatsError;

    #[test]
    fn unit_success_envelope() {
        let response = Response::from_result(Ok(vec!["zk1".to_string()]));
        assert_eq!(serde_json::to_string(&response).unwrap(), r#"{"retCode":"0000","retMsg":"ok","entity":["zk1"]}"#);
    }

    #[test]
    fn unit_failure_envelope() {
        let response: Response<Vec<String>> = Response::from_result(Err(ZkStatsError::ConfigNotFound { cluster: "test".to_string() }));
        assert_eq!(serde_json::to_string(&response).unwrap(), r#"{"retCode":"5202","retMsg":"cluster test does not exist","entity":null}"#);
    }
}
