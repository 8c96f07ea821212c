use mergington_core::ActivityDirectory;
use std::path::PathBuf;

use mergington_server::{app, AppState, ServerConfig};

/// Config pointing at the assets bundled with this crate.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"),
        ..ServerConfig::default()
    }
}

pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestServer {
    /// Serves a freshly seeded directory on an ephemeral port.
    pub async fn spawn() -> anyhow::Result<Self> {
        Self::spawn_with(ActivityDirectory::seeded()).await
    }

    pub async fn spawn_with(directory: ActivityDirectory) -> anyhow::Result<Self> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let router = app(AppState::new(directory, test_config()));
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            base_url: format!("http://{}", addr),
            client,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn activities(&self) -> anyhow::Result<serde_json::Value> {
        let response = self.client.get(self.url("/activities")).send().await?;
        Ok(response.json().await?)
    }

    pub async fn signup(&self, activity: &str, email: &str) -> anyhow::Result<reqwest::Response> {
        let response = self
            .client
            .post(self.url(&format!("/activities/{}/signup", activity)))
            .query(&[("email", email)])
            .send()
            .await?;
        Ok(response)
    }

    pub async fn unregister(
        &self,
        activity: &str,
        email: &str,
    ) -> anyhow::Result<reqwest::Response> {
        let response = self
            .client
            .delete(self.url(&format!("/activities/{}/unregister", activity)))
            .query(&[("email", email)])
            .send()
            .await?;
        Ok(response)
    }
}
