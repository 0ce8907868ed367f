use crate::model::LogId;

/// The filter dimension over log records. Maps bijectively onto the backend's
/// own query vocabulary via [`Category::backend_name`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Collected,
    Suspicious,
    Malicious,
}

impl Category {
    /// The value the backend expects in the `tipo` query parameter.
    pub fn backend_name(self) -> &'static str {
        match self {
            Category::Collected => "coletados",
            Category::Suspicious => "suspeitos",
            Category::Malicious => "maliciosos",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Collected => "Collected",
            Category::Suspicious => "Suspicious",
            Category::Malicious => "Malicious",
        }
    }
}

/// The interactive state driving every derived request: the category filter
/// (`None` means all), the current listing page, and the entry whose detail
/// window is open. Mutation happens only through the methods below; the URL
/// derivations are pure functions of the state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub category: Option<Category>,
    pub page: u32,
    pub selected: Option<LogId>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            category: None,
            page: 1,
            selected: None,
        }
    }
}

impl ViewState {
    /// Filter to `category` and jump back to the first page. Re-selecting the
    /// current category still resets the page.
    pub fn select_category(&mut self, category: Category) {
        self.category = Some(category);
        self.page = 1;
    }

    /// Drop the filter and jump back to the first page.
    pub fn clear_filter(&mut self) {
        self.category = None;
        self.page = 1;
    }

    /// Jump to `page`. Callers keep this within the last known page range;
    /// no clamping happens here.
    pub fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    pub fn open_detail(&mut self, id: LogId) {
        self.selected = Some(id);
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    /// Listing request URL for this state. The `tipo` parameter is omitted
    /// when no filter is active ("all categories" on the backend).
    pub fn listing_url(&self, base: &str, limit: u32) -> String {
        match self.category {
            Some(c) => format!(
                "{base}/logs?tipo={}&page={}&limit={limit}",
                c.backend_name(),
                self.page
            ),
            None => format!("{base}/logs?page={}&limit={limit}", self.page),
        }
    }

    /// Detail request URL, or `None` when no detail window is open.
    pub fn detail_url(&self, base: &str) -> Option<String> {
        self.selected.map(|id| format!("{base}/logs/{}", id.0))
    }
}
