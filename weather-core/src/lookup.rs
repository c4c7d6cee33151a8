//! The weather lookup component: input, result list, latest error and the
//! transient highlight, plus the search workflow that ties them together.

use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

use crate::{
    Config,
    model::{IdGenerator, Reading, RecordId, WeatherRecord},
    provider::{WeatherProvider, provider_from_config},
    store::{Merge, ResultStore},
};

/// Cities offered for one-click selection.
pub const QUICK_PICKS: [&str; 4] = ["London", "New York", "Los Angeles", "Las Vegas"];

/// Shown in the empty table when there is no error to report.
pub const NO_DATA: &str = "No Data";

/// What a call to [`WeatherLookup::search`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The input was empty; nothing was requested.
    Skipped,
    Appended { id: RecordId, index: usize },
    Replaced { id: RecordId, index: usize },
    Failed(String),
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView<'a> {
    pub id: RecordId,
    pub city: &'a str,
    pub description: &'a str,
    pub temperature: Reading,
    pub pressure: Reading,
    pub age_hours: i64,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableView<'a> {
    Rows(Vec<RowView<'a>>),
    /// No records; carries the latest error or [`NO_DATA`].
    Empty(&'a str),
}

type HighlightSlot = Arc<Mutex<Option<RecordId>>>;

#[derive(Debug)]
pub struct WeatherLookup {
    provider: Box<dyn WeatherProvider>,
    input: String,
    store: ResultStore,
    error: Option<String>,
    highlighted: HighlightSlot,
    highlight_delay: Duration,
    ids: IdGenerator,
    lifetime: CancellationToken,
}

impl WeatherLookup {
    pub fn new(provider: Box<dyn WeatherProvider>, highlight_delay: Duration) -> Self {
        Self {
            provider,
            input: String::new(),
            store: ResultStore::new(),
            error: None,
            highlighted: Arc::new(Mutex::new(None)),
            highlight_delay,
            ids: IdGenerator::default(),
            lifetime: CancellationToken::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(provider_from_config(config), config.highlight_delay())
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, city: impl Into<String>) {
        self.input = city.into();
    }

    pub fn quick_picks() -> &'static [&'static str] {
        &QUICK_PICKS
    }

    /// Select a quick-pick city. Only fills the input; searching is separate.
    pub fn pick(&mut self, city: &str) {
        self.set_input(city);
    }

    pub fn records(&self) -> &[WeatherRecord] {
        self.store.records()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn highlighted(&self) -> Option<RecordId> {
        *self.highlighted.lock()
    }

    /// Fetch the current input's weather and merge it into the list.
    ///
    /// Failures are stored as the latest error and never leave this method.
    /// Outside a Tokio runtime the highlight is set but never cleared.
    pub async fn search(&mut self) -> SearchOutcome {
        if self.input.is_empty() {
            return SearchOutcome::Skipped;
        }

        let city = self.input.clone();
        let report = match self.provider.current(&city).await {
            Ok(report) => report,
            Err(err) => {
                let message = err.user_message();
                tracing::warn!(city = %city, error = %message, "weather lookup failed");
                self.error = Some(message.clone());
                return SearchOutcome::Failed(message);
            }
        };

        let now = Utc::now();
        let id = self.ids.next_id(now);
        let record = WeatherRecord::from_report(id, city.as_str(), report, now);

        let merged = self.store.merge(record);
        tracing::info!(city = %city, %id, ?merged, "stored weather record");

        self.error = None;
        self.highlight(id);

        match merged {
            Merge::Appended { index } => SearchOutcome::Appended { id, index },
            Merge::Replaced { index } => SearchOutcome::Replaced { id, index },
        }
    }

    pub fn edit_description(&mut self, id: RecordId, description: impl Into<String>) -> bool {
        self.store.set_description(id, description)
    }

    pub fn delete(&mut self, id: RecordId) -> bool {
        self.store.remove(id).is_some()
    }

    /// Build the table as it should look at `now`.
    pub fn view(&self, now: DateTime<Utc>) -> TableView<'_> {
        if self.store.is_empty() {
            return TableView::Empty(self.error.as_deref().unwrap_or(NO_DATA));
        }

        let highlighted = self.highlighted();
        let rows = self
            .store
            .records()
            .iter()
            .map(|r| RowView {
                id: r.id,
                city: &r.city,
                description: &r.description,
                temperature: r.temperature.clone(),
                pressure: r.pressure.clone(),
                age_hours: r.age_hours(now),
                highlighted: highlighted == Some(r.id),
            })
            .collect();

        TableView::Rows(rows)
    }

    // Every timer clears whatever is highlighted when it fires, so an older
    // timer may end a newer highlight early.
    fn highlight(&self, id: RecordId) {
        *self.highlighted.lock() = Some(id);

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::debug!(%id, "no runtime, highlight will not be cleared");
            return;
        };

        let slot = Arc::clone(&self.highlighted);
        let cancelled = self.lifetime.child_token();
        let delay = self.highlight_delay;

        runtime.spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    slot.lock().take();
                }
            }
        });
    }
}

impl Drop for WeatherLookup {
    fn drop(&mut self) {
        self.lifetime.cancel();
    }
}
