//! Server list tool.

use crate::domains::tools::passthrough::PassthroughTool;
use crate::domains::tools::request::ParameterBag;

use super::common::{ApiKeyParams, api_key_query};

/// Lists the game servers and their IDs.
#[derive(Debug, Clone, Default)]
pub struct GetServerListTool;

impl PassthroughTool for GetServerListTool {
    type Params = ApiKeyParams;

    const NAME: &'static str = "getServerList";
    const DESCRIPTION: &'static str = "Get the list of servers and their server IDs.";

    fn path(_params: &ApiKeyParams) -> String {
        "/df/servers".to_string()
    }

    fn query(params: &ApiKeyParams) -> ParameterBag {
        api_key_query(&params.apikey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::passthrough::testing::{RecordingUpstream, args, context};
    use serde_json::json;

    #[tokio::test]
    async fn test_server_list_request() {
        let upstream = RecordingUpstream::replying(r#"{"rows":[{"serverId":"cain"}]}"#);
        let result = context(upstream.clone())
            .invoke::<GetServerListTool>(args(json!({ "apikey": " KEY " })))
            .await
            .unwrap();

        assert_eq!(result.content.len(), 1);
        assert_eq!(
            upstream.requests(),
            vec!["https://api.example.test/df/servers?apikey=KEY".to_string()]
        );
    }
}
