use crate::error::Result;
use crowdcore::api::{
    AckResponse, HistoryResponse, StartProcessingRequest, StatsResponse, StopProcessingRequest,
    UploadResponse,
};
use crowdcore::feed::FeedSource;
use crowdcore::geometry::PercentRect;
use reqwest::multipart::{Form, Part};
use std::path::Path;

/// Thin wrapper over the backend HTTP contract. All callers go through
/// here; the backend itself is opaque.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base: String,
}

impl BackendClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    pub async fn set_roi(&self, feed: usize, rect: &PercentRect) -> Result<AckResponse> {
        let url = format!("{}/set_roi?feed={feed}", self.base);
        Ok(self.http.post(url).json(rect).send().await?.json().await?)
    }

    pub async fn start_processing(&self, feed: usize, source: &FeedSource) -> Result<AckResponse> {
        let url = format!("{}/start_processing", self.base);
        let body = StartProcessingRequest {
            source_type: source.type_label().to_string(),
            source_path: source.path().to_string(),
            feed,
        };
        Ok(self.http.post(url).json(&body).send().await?.json().await?)
    }

    pub async fn stop_processing(&self, feed: usize) -> Result<AckResponse> {
        let url = format!("{}/stop_processing", self.base);
        let body = StopProcessingRequest { feed };
        Ok(self.http.post(url).json(&body).send().await?.json().await?)
    }

    /// Uploads a video file as the multipart field `videoFile`.
    pub async fn upload_video(&self, feed: usize, path: &Path) -> Result<UploadResponse> {
        let url = format!("{}/upload_video?feed={feed}", self.base);
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.mp4".to_string());
        let form = Form::new().part("videoFile", Part::bytes(bytes).file_name(file_name));
        Ok(self
            .http
            .post(url)
            .multipart(form)
            .send()
            .await?
            .json()
            .await?)
    }

    pub async fn current_stats(&self, feed: usize) -> Result<StatsResponse> {
        let url = format!("{}/get_current_stats?feed={feed}", self.base);
        Ok(self.http.get(url).send().await?.json().await?)
    }

    pub async fn head_count_history(&self, feed: usize) -> Result<HistoryResponse> {
        let url = format!("{}/get_head_count_history?feed={feed}", self.base);
        Ok(self.http.get(url).send().await?.json().await?)
    }

    /// Feed-scoped live stream URL with a cache-busting millisecond
    /// query parameter, regenerated on every start.
    pub fn video_feed_url(&self, feed: usize) -> String {
        format!(
            "{}/video_feed/{feed}?{}",
            self.base,
            chrono::Utc::now().timestamp_millis()
        )
    }
}
