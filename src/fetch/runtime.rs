use std::sync::mpsc::Sender;

use serde::de::DeserializeOwned;

use crate::fetch::FetchError;

/// Background executor for HTTP requests. The UI thread never blocks: spawned
/// GETs decode on the worker runtime and send `(key, result)` back over a
/// channel, tagged with the URL they were issued for.
pub struct FetchRuntime {
    runtime: tokio::runtime::Runtime,
    client: reqwest::Client,
    repaint: Option<eframe::egui::Context>,
}

impl FetchRuntime {
    pub fn new() -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        Ok(Self {
            runtime,
            client: reqwest::Client::new(),
            repaint: None,
        })
    }

    /// Attach the egui context so resolved fetches wake the frame loop.
    pub fn set_repaint(&mut self, ctx: eframe::egui::Context) {
        self.repaint = Some(ctx);
    }

    /// Issue a GET for `key` and deliver the decoded result to `tx`. The key
    /// travels with the result so the receiver can file it under the URL it
    /// belongs to, not under whatever key is current by then.
    pub fn spawn_get<T>(&self, key: String, tx: Sender<(String, Result<T, FetchError>)>)
    where
        T: DeserializeOwned + Send + 'static,
    {
        let client = self.client.clone();
        let repaint = self.repaint.clone();
        self.runtime.spawn(async move {
            let result = fetch_json::<T>(&client, &key).await;
            if let Err(ref e) = result {
                log::debug!("fetch {key} failed: {e}");
            }
            if tx.send((key, result)).is_ok() {
                if let Some(ctx) = repaint {
                    ctx.request_repaint();
                }
            }
        });
    }
}

async fn fetch_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(FetchError::NotFound);
    }
    if !status.is_success() {
        return Err(FetchError::Decode(format!("unexpected status {status}")));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
}
