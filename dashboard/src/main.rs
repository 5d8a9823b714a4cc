use anyhow::Context;
use clap::Parser;
use crowdcore::feed::FeedSource;
use crowdcore::geometry::SurfaceSize;
use crowdcore::history::{HistoryTable, TableRow};
use dashboard::history::{ALL_ACTIVE_REFRESH_PERIOD, SELECTED_REFRESH_PERIOD};
use dashboard::{BackendClient, FeedController, HistoryView, MockBackend, StatsPoller};
use log::{debug, info, warn};
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::signal;
use tokio::time::interval;

#[derive(Parser)]
#[command(author, version, about = "Multi-feed crowd-monitoring dashboard client")]
struct Args {
    /// Base URL of the analysis backend
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    backend_url: String,
    /// Number of independent feeds
    #[arg(long, default_value_t = 4)]
    feeds: usize,
    /// Feed shown in the selected-history view
    #[arg(long, default_value_t = 0)]
    history_feed: usize,
    /// Rendering-surface size reported for every feed
    #[arg(long, default_value_t = 640.0)]
    surface_width: f64,
    #[arg(long, default_value_t = 480.0)]
    surface_height: f64,
    /// Start feed 0 from this webcam index immediately
    #[arg(long)]
    autostart_webcam: Option<String>,
    /// Run this many poll rounds, then exit (default: run until Ctrl+C)
    #[arg(long)]
    rounds: Option<u64>,
    /// Export the selected feed's history to this directory on shutdown
    #[arg(long)]
    export_dir: Option<PathBuf>,
    /// Serve an in-process mock backend and point the client at it
    #[arg(long, default_value_t = false)]
    serve_mock: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let backend_url = if args.serve_mock {
        let mock = MockBackend::new(args.feeds);
        let (addr, server) = mock.bind(SocketAddr::from(([127, 0, 0, 1], 0)));
        tokio::spawn(server);
        info!("mock backend listening on {addr}");
        format!("http://{addr}")
    } else {
        args.backend_url.clone()
    };

    let client = BackendClient::new(&backend_url);
    let mut controller = FeedController::new(client, args.feeds);
    for feed in 0..args.feeds {
        controller.set_surface(
            feed,
            SurfaceSize::new(args.surface_width, args.surface_height),
        );
    }

    if let Some(index) = args.autostart_webcam.clone() {
        controller
            .start(0, FeedSource::Webcam(index))
            .await
            .context("starting feed 0")?;
    }

    let poller = StatsPoller::default();
    let history = HistoryView::new(args.history_feed);

    // Single-task event loop: the three cadences are independent and
    // unsynchronized, and every completion mutates state from this
    // task only.
    let mut poll_tick = interval(poller.period());
    let mut selected_tick = interval(SELECTED_REFRESH_PERIOD);
    let mut all_active_tick = interval(ALL_ACTIVE_REFRESH_PERIOD);
    let mut rounds_done: u64 = 0;

    loop {
        tokio::select! {
            _ = poll_tick.tick() => {
                let aggregate = poller.poll_round(&mut controller).await;
                poller.report(&controller, &aggregate);
                rounds_done += 1;
                if args.rounds.is_some_and(|max| rounds_done >= max) {
                    break;
                }
            }
            _ = selected_tick.tick() => {
                match history.refresh_selected(controller.client()).await {
                    Ok(table) => render_table(&table),
                    Err(err) => debug!("selected history refresh failed: {err}"),
                }
            }
            _ = all_active_tick.tick() => {
                for table in history.refresh_all_active(&controller).await {
                    render_table(&table);
                }
            }
            _ = signal::ctrl_c() => {
                info!("shutting down");
                break;
            }
        }
    }

    if let Some(dir) = args.export_dir {
        match history.export_selected(controller.client(), &dir).await {
            Ok(path) => info!("history exported to {}", path.display()),
            Err(err) => warn!("export skipped: {err}"),
        }
    }

    Ok(())
}

fn render_table(table: &HistoryTable) {
    for row in table.rows() {
        match row {
            TableRow::Entry {
                camera,
                time,
                people_count,
            } => info!("{camera} | {time} | {people_count}"),
            TableRow::Placeholder => {
                info!("{}: {}", table.camera_label(), HistoryTable::PLACEHOLDER_TEXT);
            }
        }
    }
}
