//! In-process mock of the analysis backend, implementing the same HTTP
//! contract the dashboard drives. Used by `--serve-mock` and by the
//! integration tests; stats are synthetic.

use chrono::Utc;
use crowdcore::api::{
    AckResponse, HistoryEntry, StartProcessingRequest, StopProcessingRequest, UploadResponse,
};
use crowdcore::geometry::PercentRect;
use rand::Rng;
use serde::Deserialize;
use serde_json::json;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, RwLock};
use warp::Filter;

const HISTORY_CAP: usize = 200;

#[derive(Debug, Deserialize)]
struct FeedQuery {
    feed: usize,
}

#[derive(Debug, Clone, Default)]
struct FeedSlot {
    running: bool,
    roi: PercentRect,
    history: Vec<HistoryEntry>,
}

/// Mock backend state: one slot per feed behind a lock shared with the
/// warp filters.
#[derive(Clone)]
pub struct MockBackend {
    state: Arc<RwLock<Vec<FeedSlot>>>,
}

impl MockBackend {
    pub fn new(feed_count: usize) -> Self {
        Self {
            state: Arc::new(RwLock::new(vec![FeedSlot::default(); feed_count])),
        }
    }

    /// Pre-populates one feed's history (test hook).
    pub fn seed_history(&self, feed: usize, entries: Vec<HistoryEntry>) {
        let mut slots = self.state.write().unwrap();
        if let Some(slot) = slots.get_mut(feed) {
            slot.history = entries;
        }
    }

    /// Last ROI the backend accepted for a feed (test hook).
    pub fn roi(&self, feed: usize) -> Option<PercentRect> {
        self.state.read().unwrap().get(feed).map(|slot| slot.roi)
    }

    pub fn is_running(&self, feed: usize) -> bool {
        self.state
            .read()
            .unwrap()
            .get(feed)
            .map(|slot| slot.running)
            .unwrap_or(false)
    }

    /// Binds the mock on `addr` (port 0 for ephemeral) and returns the
    /// bound address plus the server future to spawn.
    pub fn bind(
        &self,
        addr: impl Into<SocketAddr> + 'static,
    ) -> (SocketAddr, impl Future<Output = ()>) {
        warp::serve(self.routes()).bind_ephemeral(addr)
    }

    pub fn routes(
        &self,
    ) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
        let state = self.state.clone();
        let with_state = warp::any().map(move || state.clone());

        let set_roi = warp::path("set_roi")
            .and(warp::post())
            .and(warp::query::<FeedQuery>())
            .and(warp::body::json())
            .and(with_state.clone())
            .map(
                |query: FeedQuery, rect: PercentRect, state: SharedState| {
                    let mut slots = state.write().unwrap();
                    match slots.get_mut(query.feed) {
                        Some(slot) => {
                            slot.roi = rect;
                            warp::reply::json(&AckResponse::ok())
                        }
                        None => warp::reply::json(&AckResponse::rejected("Invalid feed index.")),
                    }
                },
            );

        let start = warp::path("start_processing")
            .and(warp::post())
            .and(warp::body::json())
            .and(with_state.clone())
            .map(|request: StartProcessingRequest, state: SharedState| {
                if request.source_path.is_empty() {
                    return warp::reply::json(&AckResponse::rejected("No source provided."));
                }
                let mut slots = state.write().unwrap();
                match slots.get_mut(request.feed) {
                    Some(slot) => {
                        slot.running = true;
                        warp::reply::json(&AckResponse::ok())
                    }
                    None => warp::reply::json(&AckResponse::rejected("Invalid feed index.")),
                }
            });

        let stop = warp::path("stop_processing")
            .and(warp::post())
            .and(warp::body::json())
            .and(with_state.clone())
            .map(|request: StopProcessingRequest, state: SharedState| {
                let mut slots = state.write().unwrap();
                if let Some(slot) = slots.get_mut(request.feed) {
                    slot.running = false;
                }
                warp::reply::json(&AckResponse::ok())
            });

        let upload = warp::path("upload_video")
            .and(warp::post())
            .and(warp::query::<FeedQuery>())
            .and(warp::body::bytes())
            .map(|query: FeedQuery, _body: bytes::Bytes| {
                warp::reply::json(&UploadResponse {
                    success: true,
                    filepath: Some(format!("uploads/feed{}.mp4", query.feed)),
                    message: None,
                })
            });

        let stats = warp::path("get_current_stats")
            .and(warp::get())
            .and(warp::query::<FeedQuery>())
            .and(with_state.clone())
            .map(|query: FeedQuery, state: SharedState| {
                let mut slots = state.write().unwrap();
                match slots.get_mut(query.feed) {
                    Some(slot) if slot.running => {
                        let mut rng = rand::thread_rng();
                        let people_count: u32 = rng.gen_range(0..30);
                        let density: f64 = rng.gen_range(0.0..1.0);
                        let predicted: f64 = (density + rng.gen_range(-0.1..0.1)).max(0.0);
                        let alert_message = if density > 0.85 {
                            "CRITICAL: severe overcrowding"
                        } else if density > 0.6 {
                            "WARNING: density rising"
                        } else {
                            "Normal"
                        };
                        slot.history.push(HistoryEntry {
                            time: Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
                            people_count,
                        });
                        if slot.history.len() > HISTORY_CAP {
                            slot.history.remove(0);
                        }
                        warp::reply::json(&json!({
                            "success": true,
                            "people_count": people_count,
                            "density": density,
                            "pred_density": predicted,
                            "alert_message": alert_message
                        }))
                    }
                    Some(_) => warp::reply::json(&json!({
                        "success": true,
                        "people_count": 0,
                        "density": null,
                        "pred_density": null,
                        "alert_message": "Normal"
                    })),
                    None => warp::reply::json(&json!({"success": false})),
                }
            });

        let history = warp::path("get_head_count_history")
            .and(warp::get())
            .and(warp::query::<FeedQuery>())
            .and(with_state)
            .map(|query: FeedQuery, state: SharedState| {
                let slots = state.read().unwrap();
                match slots.get(query.feed) {
                    Some(slot) => warp::reply::json(&json!({
                        "success": true,
                        "history": slot.history
                    })),
                    None => warp::reply::json(&json!({"success": false})),
                }
            });

        let video = warp::path("video_feed")
            .and(warp::path::param::<usize>())
            .and(warp::get())
            .map(|_feed: usize| warp::reply::json(&json!({"stream": "placeholder"})));

        set_roi
            .or(start)
            .or(stop)
            .or(upload)
            .or(stats)
            .or(history)
            .or(video)
    }
}

type SharedState = Arc<RwLock<Vec<FeedSlot>>>;
