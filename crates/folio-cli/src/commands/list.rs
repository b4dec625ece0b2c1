// Rust guideline compliant 2026-10-18

//! Implementation of the `folio list` command.
//!
//! Acts as the view layer: restores the saved filter and page, loads the
//! data, applies any requested filter or page, and prints the current page.

use crate::{OutputFormatter, Workspace};
use anyhow::Result;
use folio_core::{EventKind, StoreEvent};

/// Renders the current page of content.
///
/// A requested filter is applied before a requested page, matching how a
/// user would click a filter and then a page number.
///
/// # Errors
///
/// Returns an error if the store cannot be opened or the data is rejected.
pub fn render(
    workspace: &Workspace,
    filter: Option<String>,
    page: Option<i64>,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let store = workspace.open_store()?;

    store.add_event_listener(EventKind::Filter, |event| {
        if let StoreEvent::Filter(filter) = event {
            tracing::info!(filter = %filter, "Filter changed");
        }
        Ok(())
    });
    store.add_event_listener(EventKind::Pagination, |event| {
        if let StoreEvent::Pagination(info) = event {
            tracing::info!(
                page = info.current_page,
                total = info.total_pages,
                "Page changed"
            );
        }
        Ok(())
    });

    workspace.load_data(&store)?;

    if let Some(filter) = filter {
        store.set_current_filter(&filter);
    }
    if let Some(page) = page {
        store.set_current_page(page);
    }

    Ok(formatter.format_page(
        &store.paginated_content(),
        store.page_info(),
        store.current_filter(),
    ))
}

/// Prints the current page of content.
///
/// # Errors
///
/// Returns an error if rendering fails.
pub fn execute(
    workspace: &Workspace,
    filter: Option<String>,
    page: Option<i64>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    println!("{}", render(workspace, filter, page, formatter)?);
    Ok(())
}
