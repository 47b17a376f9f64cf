use anyhow::{Context, Result};
use campus_api::{CatalogClient, BOOKINGS_PATH, EVENTS_PATH, FACILITIES_PATH};
use colored::Colorize;

use crate::app::render::{format_booking, format_event, format_facility};

/// The read-only lists the backend serves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogView {
    Events,
    Facilities,
    Bookings,
}

impl CatalogView {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "events" | "event" => Some(Self::Events),
            "facilities" | "facility" | "rooms" => Some(Self::Facilities),
            "bookings" | "booking" => Some(Self::Bookings),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Events => "events",
            Self::Facilities => "facilities",
            Self::Bookings => "bookings",
        }
    }

    /// Endpoint serving this list
    pub fn path(&self) -> &'static str {
        match self {
            Self::Events => EVENTS_PATH,
            Self::Facilities => FACILITIES_PATH,
            Self::Bookings => BOOKINGS_PATH,
        }
    }

    /// Header line shown above the list
    pub fn summary(&self, count: usize) -> String {
        match self {
            Self::Events => format!("{} upcoming events on campus", count),
            Self::Facilities => format!("{} facilities on campus", count),
            Self::Bookings => format!("{} bookings", count),
        }
    }
}

/// Fetch one list and render it as text, or as the backend's own JSON
pub async fn render_view(catalog: &CatalogClient, view: CatalogView, json: bool) -> Result<String> {
    let context = || format!("Failed to load {}", view.as_str());

    if json {
        let records = catalog.list_raw(view.path()).await.with_context(context)?;
        return Ok(serde_json::to_string_pretty(&records)?);
    }

    let (count, blocks): (usize, Vec<String>) = match view {
        CatalogView::Events => {
            let events = catalog.events().await.with_context(context)?;
            (events.len(), events.iter().map(format_event).collect())
        }
        CatalogView::Facilities => {
            let facilities = catalog.facilities().await.with_context(context)?;
            (facilities.len(), facilities.iter().map(format_facility).collect())
        }
        CatalogView::Bookings => {
            let bookings = catalog.bookings().await.with_context(context)?;
            (bookings.len(), bookings.iter().map(format_booking).collect())
        }
    };

    let mut out = format!("{}\n", view.summary(count).bright_cyan().bold());
    for block in blocks {
        out.push('\n');
        out.push_str(&block);
    }
    Ok(out)
}

/// Print a catalog view to stdout
pub async fn run_view(catalog: &CatalogClient, view: CatalogView, json: bool) -> Result<()> {
    let output = render_view(catalog, view, json).await?;
    println!("{}", output.trim_end());
    Ok(())
}
