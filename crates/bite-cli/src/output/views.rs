//! Reply payloads shared by several commands.

use serde::Serialize;

use bite_core::entities::{AuditEntry, Restaurant};

/// Name / City / optional URL block used by add, update, and upsert replies.
pub fn restaurant_block(restaurant: &Restaurant) -> String {
    let mut block = format!("Name: {}\nCity: {}", restaurant.name, restaurant.city);
    if let Some(url) = &restaurant.url {
        block.push_str("\nURL: ");
        block.push_str(url);
    }
    block
}

/// One audit entry as a single line.
pub fn audit_line(entry: &AuditEntry) -> String {
    format!(
        "{} {:<6} by {} ({}): {}",
        entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
        entry.action.as_str(),
        entry.actor_name,
        entry.actor_id,
        entry.change_description.as_deref().unwrap_or("-")
    )
}

/// A page of restaurants.
#[derive(Debug, Serialize)]
pub struct RestaurantPage {
    pub page: u32,
    pub size: u32,
    pub restaurants: Vec<Restaurant>,
}

impl super::Reply for RestaurantPage {
    fn text(&self) -> String {
        if self.restaurants.is_empty() {
            return format!("No restaurants found on page {}.", self.page);
        }
        let mut lines = Vec::with_capacity(self.restaurants.len() + 1);
        lines.push(format!("Page {} (up to {} per page):", self.page, self.size));
        for r in &self.restaurants {
            let mut line = format!("- {} ({}) [{}]", r.name, r.city, r.id);
            if let Some(url) = &r.url {
                line.push(' ');
                line.push_str(url);
            }
            lines.push(line);
        }
        lines.join("\n")
    }
}

/// A list of audit entries, newest first.
#[derive(Debug, Serialize)]
pub struct AuditList {
    pub entries: Vec<AuditEntry>,
}

impl super::Reply for AuditList {
    fn text(&self) -> String {
        if self.entries.is_empty() {
            return "No audit entries found.".to_string();
        }
        self.entries
            .iter()
            .map(audit_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Reply;
    use bite_core::enums::{AuditAction, City};
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    #[test]
    fn block_omits_missing_url() {
        let r = Restaurant::new("Joe's", City::Ramallah, None);
        assert_eq!(restaurant_block(&r), "Name: Joe's\nCity: Ramallah");
    }

    #[test]
    fn block_includes_url() {
        let r = Restaurant::new("Joe's", City::Nablus, Some("https://j.example".into()));
        assert_eq!(
            restaurant_block(&r),
            "Name: Joe's\nCity: Nablus\nURL: https://j.example"
        );
    }

    #[test]
    fn audit_line_format() {
        let entry = AuditEntry {
            id: Uuid::nil(),
            restaurant_id: Uuid::nil(),
            action: AuditAction::Create,
            timestamp: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
            actor_name: "layla".into(),
            actor_id: 42,
            change_details: None,
            change_description: Some("Created restaurant 'Joe's' in Ramallah".into()),
        };
        assert_eq!(
            audit_line(&entry),
            "2026-01-02 03:04:05 create by layla (42): Created restaurant 'Joe's' in Ramallah"
        );
    }

    #[test]
    fn empty_page_text() {
        let page = RestaurantPage {
            page: 3,
            size: 10,
            restaurants: Vec::new(),
        };
        assert_eq!(page.text(), "No restaurants found on page 3.");
    }
}
