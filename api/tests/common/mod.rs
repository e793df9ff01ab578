use std::sync::Arc;

use axum_test::TestServer;
use nutrimatch_api::{
    application::http::server::http_server::{router, state},
    args::{Args, LlmArgs},
};
use test_context::AsyncTestContext;

/// Real router with no model key, so every analysis takes the fallback path.
pub struct ApiContext {
    pub server: TestServer,
}

impl AsyncTestContext for ApiContext {
    async fn setup() -> Self {
        let args = Args {
            llm: LlmArgs {
                gemini_api_key: None,
                gemini_base_url: "http://127.0.0.1:9".to_string(),
                ..LlmArgs::default()
            },
            ..Args::default()
        };

        let app_state = state(Arc::new(args)).await.unwrap();
        let server = TestServer::new(router(app_state).unwrap()).unwrap();

        Self { server }
    }
}
