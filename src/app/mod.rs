mod run;
mod view_state;

use std::time::Duration;

use eframe::egui;

use crate::config::AppConfig;
use crate::fetch::{FetchRuntime, Poller};
use crate::model::{DashboardStats, LogDetail, LogId, LogsPage};

pub use run::run;
pub use view_state::{Category, ViewState};

pub struct SiemAtlasApp {
    pub config: AppConfig,
    pub view: ViewState,
    pub show_about: bool,
    rt: FetchRuntime,
    pub stats: Poller<DashboardStats>,
    pub logs: Poller<LogsPage>,
    pub detail: Poller<LogDetail>,
}

impl SiemAtlasApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig, mut rt: FetchRuntime) -> Self {
        rt.set_repaint(cc.egui_ctx.clone());
        let refresh = Duration::from_secs(config.api.refresh_secs);
        Self {
            config,
            view: ViewState::default(),
            show_about: false,
            rt,
            stats: Poller::new(Some(refresh)),
            logs: Poller::new(Some(refresh)),
            // Details are fetched once per selection change, no recurring poll.
            detail: Poller::new(None),
        }
    }

    pub fn stats_url(&self) -> String {
        format!("{}/dashboard/stats", self.config.api.base_url)
    }

    pub fn listing_url(&self) -> String {
        self.view
            .listing_url(&self.config.api.base_url, self.config.api.page_size)
    }

    /// The listing page currently on screen, if any response has arrived for
    /// the active request key.
    pub fn current_page(&self) -> Option<&LogsPage> {
        self.logs.value(&self.listing_url())
    }

    pub fn current_stats(&self) -> Option<&DashboardStats> {
        self.stats.value(&self.stats_url())
    }

    pub fn current_detail(&self) -> Option<&LogDetail> {
        self.view
            .detail_url(&self.config.api.base_url)
            .and_then(|url| self.detail.value(&url))
    }

    /// Open the detail window for `id` and revalidate its entry. The cached
    /// copy, if any, stays visible while the fresh fetch is in flight.
    pub fn open_detail(&mut self, id: LogId) {
        self.view.open_detail(id);
        if let Some(url) = self.view.detail_url(&self.config.api.base_url) {
            self.detail.refresh(&self.rt, &url);
        }
    }

    /// Force an immediate revalidation of the stats and listing panels.
    pub fn refresh_now(&mut self) {
        let stats_url = self.stats_url();
        let listing_url = self.listing_url();
        self.stats.refresh(&self.rt, &stats_url);
        self.logs.refresh(&self.rt, &listing_url);
    }
}

impl eframe::App for SiemAtlasApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        // Apply resolved fetches before anything reads the caches.
        self.stats.tick();
        self.logs.tick();
        self.detail.tick();

        // Derived request keys: whatever the view state demands right now is
        // kept fetched; keys no longer demanded simply stop being re-issued.
        let stats_url = self.stats_url();
        let listing_url = self.listing_url();
        self.stats.ensure(&self.rt, &stats_url);
        self.logs.ensure(&self.rt, &listing_url);
        if let Some(url) = self.view.detail_url(&self.config.api.base_url) {
            self.detail.ensure(&self.rt, &url);
        }

        crate::ui::render_app(ctx, frame, self);

        // Keep the poll loops ticking even without user input.
        ctx.request_repaint_after(Duration::from_secs(1));
    }
}
