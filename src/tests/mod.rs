//! Dispatch test module
//!
//! Exercises the client facade against an in-memory transport

#[cfg(test)]
mod dispatch_tests {
    use crate::models::agents::*;
    use crate::models::vault::UploadParams;
    use crate::schema::Item;
    use crate::services::dispatch::HttpMethod;
    use crate::services::transport::{ApiRequest, RawResponse, RequestOptions, Transport};
    use crate::services::Client;
    use crate::utils::error::{ClientError, ClientResult};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Records every request and answers with a fixed status and body
    struct RecordingTransport {
        requests: Mutex<Vec<ApiRequest>>,
        status: u16,
        body: Vec<u8>,
    }

    impl RecordingTransport {
        fn new(status: u16, body: Value) -> Arc<Self> {
            Arc::new(Self {
                requests: Mutex::new(Vec::new()),
                status,
                body: body.to_string().into_bytes(),
            })
        }

        fn requests(&self) -> Vec<ApiRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn request(&self, request: ApiRequest) -> ClientResult<RawResponse> {
            self.requests.lock().unwrap().push(request);
            if (200..300).contains(&self.status) {
                Ok(RawResponse { status: self.status, body: self.body.clone() })
            } else {
                Err(ClientError::api(self.status, String::from_utf8_lossy(&self.body)))
            }
        }
    }

    fn client_with(transport: &Arc<RecordingTransport>) -> Client {
        Client::with_transport(transport.clone())
    }

    #[tokio::test]
    async fn test_post_sends_normalized_body() {
        let transport = RecordingTransport::new(200, json!({
            "id": "ag_1",
            "name": "Helper",
            "instructions": "Be brief",
        }));
        let client = client_with(&transport);

        let agent = client
            .agents()
            .create(AgentCreateParams::new("Be brief", "Helper"), None)
            .await
            .unwrap();
        assert_eq!(agent.id, "ag_1");

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(requests[0].path, "agent/v1/agents");
        assert_eq!(requests[0].body, Some(json!({"instructions": "Be brief", "name": "Helper"})));
        assert!(requests[0].query.is_empty());
    }

    #[tokio::test]
    async fn test_get_sends_query_pairs() {
        let transport = RecordingTransport::new(200, json!({"runs": []}));
        let client = client_with(&transport);

        client
            .runs()
            .list(RunListParams::new().with_agent_id("ag_1").with_status(RunStatus::Queued), None)
            .await
            .unwrap();

        let request = &transport.requests()[0];
        assert_eq!(request.method, HttpMethod::Get);
        assert!(request.body.is_none());
        assert!(request.query.contains(&("agentId".to_string(), "ag_1".to_string())));
        assert!(request.query.contains(&("status".to_string(), "queued".to_string())));
    }

    #[tokio::test]
    async fn test_missing_required_field_sends_nothing() {
        let transport = RecordingTransport::new(200, json!({}));
        let client = client_with(&transport);

        let err = client
            .runs()
            .create(Item::raw(json!({"prompt": "no agent"})), None)
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::MissingField { model: "RunCreateParams", field: "agentID" }));
        assert!(err.is_local());
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_path_parameters_encoded() {
        let transport = RecordingTransport::new(200, json!({"id": "r 1", "status": "running"}));
        let client = client_with(&transport);

        client.runs().get_status("r 1", None).await.unwrap();
        assert_eq!(transport.requests()[0].path, "agent/v1/run/r%201/status");
    }

    #[tokio::test]
    async fn test_options_forwarded_to_transport() {
        let transport = RecordingTransport::new(200, json!({"id": "r1", "status": "cancelled"}));
        let client = client_with(&transport);

        let options = RequestOptions::new()
            .with_timeout(Duration::from_secs(5))
            .with_idempotency_key("cancel-r1");
        client.runs().cancel("r1", Some(options.clone())).await.unwrap();

        let request = &transport.requests()[0];
        assert_eq!(request.options, options);
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_api_error_propagates_unchanged() {
        let transport = RecordingTransport::new(404, json!({"error": {"message": "Agent not found"}}));
        let client = client_with(&transport);

        let err = client.agents().retrieve("missing", None).await.unwrap_err();
        match err {
            ClientError::Api { status, message, .. } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Agent not found");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_schema_drift_surfaces_as_schema_error() {
        let transport = RecordingTransport::new(200, json!({"status": "running"}));
        let client = client_with(&transport);

        let err = client.runs().get_status("r1", None).await.unwrap_err();
        assert!(matches!(err, ClientError::Schema { .. }));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_binary_download_returned_raw() {
        let transport = Arc::new(RecordingTransport {
            requests: Mutex::new(Vec::new()),
            status: 200,
            body: vec![0x25, 0x50, 0x44, 0x46],
        });
        let client = Client::with_transport(transport.clone());

        let bytes = client.vault().download_object("v1", "o1", None).await.unwrap();
        assert_eq!(bytes, b"%PDF");

        let request = &transport.requests()[0];
        assert_eq!(request.path, "vault/v1/objects/o1/download");
        assert_eq!(request.options.accept.as_deref(), Some("*/*"));
    }

    #[tokio::test]
    async fn test_binary_accept_respects_caller_override() {
        let transport = RecordingTransport::new(200, json!({}));
        let client = client_with(&transport);

        let options = RequestOptions::new().with_accept("audio/mpeg");
        client
            .voice()
            .speak(crate::models::voice::SpeakParams::new("Objection."), Some(options))
            .await
            .unwrap();
        assert_eq!(transport.requests()[0].options.accept.as_deref(), Some("audio/mpeg"));
    }

    #[tokio::test]
    async fn test_dispatch_with_debug_logging_enabled() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let transport = RecordingTransport::new(200, json!({"id": "run_1", "agentId": "ag_1", "status": "queued"}));
        let client = client_with(&transport);

        let run = client
            .runs()
            .create(RunCreateParams::new("ag_1", "x".repeat(500)), None)
            .await
            .unwrap();
        assert_eq!(run.id, "run_1");

        let status = client.runs().get_status("run_1", None).await.unwrap();
        assert_eq!(status.status, "queued");
        assert_eq!(transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_type_mismatch_rejected_locally() {
        let transport = RecordingTransport::new(200, json!({}));
        let client = client_with(&transport);

        let raw = Item::<UploadParams>::raw(json!({
            "filename": "a.pdf",
            "contentType": "application/pdf",
            "sizeBytes": "big",
        }));
        let err = client.vault().upload("v1", raw, None).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        assert!(transport.requests().is_empty());
    }
}
