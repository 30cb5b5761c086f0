//! Shared blocking HTTP client driven from async code

use std::time::Duration;

use serde_json::Value;

use super::LookupError;

/// Grace period the blocking agent gets beyond the async deadline, so an
/// overrun is always reported as [`LookupError::Timeout`]
const AGENT_TIMEOUT_MARGIN: Duration = Duration::from_secs(1);

/// Thin wrapper over a `ureq` agent with a hard per-request deadline
#[derive(Clone)]
pub struct HttpLookup {
    agent: ureq::Agent,
    timeout: Duration,
}

impl HttpLookup {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(5))
            .timeout(timeout + AGENT_TIMEOUT_MARGIN)
            .user_agent(concat!("sagx/", env!("CARGO_PKG_VERSION")))
            .build();

        Self { agent, timeout }
    }

    /// GET `url` with the given query pairs and decode the body as JSON.
    ///
    /// Non-2xx statuses, transport errors, undecodable bodies and deadline
    /// overruns all map to a [`LookupError`].
    pub async fn get_json(
        &self,
        service: &'static str,
        url: String,
        query: Vec<(&'static str, String)>,
    ) -> Result<Value, LookupError> {
        let agent = self.agent.clone();

        let request = tokio::task::spawn_blocking(move || {
            let mut req = agent.get(&url);
            for (key, value) in &query {
                req = req.query(key, value);
            }

            match req.call() {
                Ok(response) => {
                    response
                        .into_json::<Value>()
                        .map_err(|e| LookupError::Parse {
                            service,
                            message: e.to_string(),
                        })
                }
                Err(ureq::Error::Status(status, _)) => Err(LookupError::Status { service, status }),
                Err(e) => Err(LookupError::Transport {
                    service,
                    message: e.to_string(),
                }),
            }
        });

        match tokio::time::timeout(self.timeout, request).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_error)) => Err(LookupError::Transport {
                service,
                message: join_error.to_string(),
            }),
            Err(_) => Err(LookupError::Timeout {
                service,
                secs: self.timeout.as_secs(),
            }),
        }
    }
}
