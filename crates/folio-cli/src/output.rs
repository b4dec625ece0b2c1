// Rust guideline compliant 2026-10-18

//! Output formatting module for the Folio CLI.
//!
//! This module renders store state as JSON for machine consumption or as
//! human-readable tables.

use folio_core::{Achievement, CachedContent, ContentItem, Filter, PageInfo, Profile};
use serde_json::json;
use tabled::{builder::Builder, settings::Style};

/// Output formatter trait.
pub trait OutputFormatter {
    /// Formats the profile and achievements.
    fn format_profile(&self, profile: Option<&Profile>, achievements: &[Achievement]) -> String;

    /// Formats one page of the filtered view.
    fn format_page(&self, items: &[ContentItem], page: PageInfo, filter: Filter) -> String;

    /// Formats restored preferences and the state of the view cache.
    fn format_preferences(
        &self,
        filter: Filter,
        page: usize,
        cached: Option<&CachedContent>,
    ) -> String;

    /// Formats a short status message.
    fn format_message(&self, message: &str) -> String;

    /// Formats an error message for display.
    fn format_error(&self, error: &str) -> String;
}

/// JSON output formatter.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_profile(&self, profile: Option<&Profile>, achievements: &[Achievement]) -> String {
        let output = json!({
            "profile": profile,
            "achievements": sorted_achievements(achievements),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize profile" }).to_string())
    }

    fn format_page(&self, items: &[ContentItem], page: PageInfo, filter: Filter) -> String {
        let output = json!({
            "filter": filter,
            "pagination": page,
            "items": items,
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize page" }).to_string())
    }

    fn format_preferences(
        &self,
        filter: Filter,
        page: usize,
        cached: Option<&CachedContent>,
    ) -> String {
        let output = json!({
            "currentFilter": filter,
            "currentPage": page,
            "cache": cached.map(|c| json!({
                "items": c.filtered_content.len(),
                "timestamp": c.timestamp,
            })),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize preferences" }).to_string())
    }

    fn format_message(&self, message: &str) -> String {
        json!({ "message": message }).to_string()
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
pub struct TableFormatter;

impl OutputFormatter for TableFormatter {
    fn format_profile(&self, profile: Option<&Profile>, achievements: &[Achievement]) -> String {
        let mut output = String::new();

        match profile {
            Some(profile) => {
                output.push_str(&format!("Name:     {}\n", profile.name()));
                output.push_str(&format!("Bio:      {}\n", profile.bio()));
                output.push_str(&format!("LinkedIn: {}\n", profile.linkedin_url()));
                output.push_str(&format!(
                    "Image:    {} ({})\n",
                    profile.profile_image().src(),
                    profile.profile_image().fallback_initials()
                ));
            }
            None => output.push_str("No profile.\n"),
        }

        if achievements.is_empty() {
            output.push_str("No achievements.");
            return output;
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Order", "Title", "Description"]);
        for achievement in sorted_achievements(achievements) {
            builder.push_record(vec![
                achievement.order().to_string(),
                achievement.title().to_string(),
                achievement.description().to_string(),
            ]);
        }
        let mut table = builder.build();
        table.with(Style::modern());

        output.push('\n');
        output.push_str(&table.to_string());
        output
    }

    fn format_page(&self, items: &[ContentItem], page: PageInfo, filter: Filter) -> String {
        let footer = format!(
            "Filter: {} | Page {} of {}",
            filter,
            page.current_page,
            page.total_pages.max(1)
        );

        if items.is_empty() {
            return format!("No content found.\n{footer}");
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Date", "Type", "Title", "Link"]);
        for item in items {
            let title = if item.featured() {
                format!("* {}", item.title())
            } else {
                item.title().to_string()
            };
            builder.push_record(vec![
                format_date(item),
                item.content_type().to_string(),
                title,
                item.external_link().unwrap_or("-").to_string(),
            ]);
        }
        let mut table = builder.build();
        table.with(Style::modern());

        format!("{table}\n{footer}")
    }

    fn format_preferences(
        &self,
        filter: Filter,
        page: usize,
        cached: Option<&CachedContent>,
    ) -> String {
        let cache = match cached {
            Some(c) => format!(
                "fresh, {} items cached at {}",
                c.filtered_content.len(),
                format_millis(c.timestamp)
            ),
            None => "none".to_string(),
        };
        format!("Filter: {filter}\nPage:   {page}\nCache:  {cache}")
    }

    fn format_message(&self, message: &str) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `json` - Whether to emit JSON instead of tables
pub fn create_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(TableFormatter)
    }
}

/// Renders a command failure, including its context chain.
pub fn render_error(formatter: &dyn OutputFormatter, error: &anyhow::Error) -> String {
    formatter.format_error(&format!("{error:#}"))
}

fn sorted_achievements(achievements: &[Achievement]) -> Vec<&Achievement> {
    let mut sorted: Vec<&Achievement> = achievements.iter().collect();
    sorted.sort_by_key(|a| a.order());
    sorted
}

fn format_date(item: &ContentItem) -> String {
    if item.published_at() > 0 {
        format_millis(item.published_at())
    } else {
        "-".to_string()
    }
}

fn format_millis(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}
