//! View formatting - pure functions from the raw payload to displayed values

use chrono::{DateTime, Local};

use crate::constants::{NOT_AVAILABLE, RECENT_APPS_LIMIT};
use crate::models::InstalledApp;

/// Format a Unix timestamp (seconds) in local time. Zero and `None` are unset.
pub fn format_date(timestamp: Option<f64>) -> String {
    let secs = match timestamp {
        Some(t) if t != 0.0 => t,
        _ => return NOT_AVAILABLE.to_string(),
    };

    let whole = secs.floor();
    let nanos = ((secs - whole) * 1e9) as u32;
    match DateTime::from_timestamp(whole as i64, nanos) {
        Some(utc) => utc
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => String::from("Invalid Date"),
    }
}

/// First non-empty of display name, bundle name, name
pub fn display_name(app: &InstalledApp) -> &str {
    [&app.display_name, &app.bundle_name]
        .into_iter()
        .find(|s| !s.is_empty())
        .unwrap_or(&app.name)
}

pub fn version_label(app: &InstalledApp) -> &str {
    if app.bundle_short_version.is_empty() {
        NOT_AVAILABLE
    } else {
        &app.bundle_short_version
    }
}

/// Most recently opened first, at most [`RECENT_APPS_LIMIT`] entries
pub fn recent_apps(apps: &[InstalledApp]) -> Vec<&InstalledApp> {
    let mut recent: Vec<&InstalledApp> = apps.iter().collect();
    recent.sort_by(|a, b| b.last_opened_time.total_cmp(&a.last_opened_time));
    recent.truncate(RECENT_APPS_LIMIT);
    recent
}

/// Whether any application has ever been opened
pub fn has_recent_activity(apps: &[InstalledApp]) -> bool {
    apps.iter().any(|app| app.last_opened_time != 0.0)
}

/// Uninstalled applications, most recently removed first
pub fn deleted_apps(apps: &[InstalledApp]) -> Vec<&InstalledApp> {
    let mut deleted: Vec<&InstalledApp> = apps.iter().filter(|app| app.is_deleted()).collect();
    deleted.sort_by(|a, b| {
        b.end_time
            .unwrap_or(0.0)
            .total_cmp(&a.end_time.unwrap_or(0.0))
    });
    deleted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(name: &str, last_opened: f64, end_time: Option<f64>) -> InstalledApp {
        InstalledApp {
            name: name.to_string(),
            last_opened_time: last_opened,
            end_time,
            ..Default::default()
        }
    }

    #[test]
    fn test_format_date_unset() {
        assert_eq!(format_date(None), "N/A");
        assert_eq!(format_date(Some(0.0)), "N/A");
    }

    #[test]
    fn test_format_date_set() {
        let formatted = format_date(Some(1_700_000_000.0));
        assert_ne!(formatted, "N/A");
        assert!(formatted.starts_with("2023-11-1"), "got {formatted}");
    }

    #[test]
    fn test_format_date_out_of_range() {
        assert_eq!(format_date(Some(1e20)), "Invalid Date");
    }

    #[test]
    fn test_display_name_priority() {
        let mut a = InstalledApp {
            display_name: String::new(),
            bundle_name: "Foo".into(),
            name: "com.foo".into(),
            ..Default::default()
        };
        assert_eq!(display_name(&a), "Foo");

        a.display_name = "Foo Pro".into();
        assert_eq!(display_name(&a), "Foo Pro");

        a.display_name.clear();
        a.bundle_name.clear();
        assert_eq!(display_name(&a), "com.foo");

        a.name.clear();
        assert_eq!(display_name(&a), "");
    }

    #[test]
    fn test_version_label() {
        let mut a = app("a", 0.0, None);
        assert_eq!(version_label(&a), "N/A");
        a.bundle_short_version = "1.2.3".into();
        assert_eq!(version_label(&a), "1.2.3");
    }

    #[test]
    fn test_recent_apps_sorted_and_capped() {
        let apps: Vec<InstalledApp> = (0..15)
            .map(|i| app(&format!("app{i}"), ((i * 7) % 15) as f64 * 100.0, None))
            .collect();

        let recent = recent_apps(&apps);
        assert_eq!(recent.len(), 10);
        assert!(recent
            .windows(2)
            .all(|w| w[0].last_opened_time >= w[1].last_opened_time));
        assert_eq!(recent[0].last_opened_time, 1400.0);
    }

    #[test]
    fn test_recent_apps_does_not_reorder_source() {
        let apps = vec![app("a", 1.0, None), app("b", 3.0, None), app("c", 2.0, None)];
        let recent = recent_apps(&apps);
        let names: Vec<&str> = recent.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["b", "c", "a"]);
        assert_eq!(apps[0].name, "a");
    }

    #[test]
    fn test_recent_activity() {
        assert!(!has_recent_activity(&[]));
        assert!(!has_recent_activity(&[app("a", 0.0, None)]));
        assert!(has_recent_activity(&[app("a", 0.0, None), app("b", 5.0, None)]));
    }

    #[test]
    fn test_deleted_apps_filter_and_order() {
        let apps = vec![
            app("kept", 10.0, None),
            app("old", 0.0, Some(100.0)),
            app("new", 0.0, Some(300.0)),
            app("also-kept", 20.0, None),
            app("mid", 0.0, Some(200.0)),
        ];

        let deleted = deleted_apps(&apps);
        let names: Vec<&str> = deleted.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["new", "mid", "old"]);
        assert!(deleted.iter().all(|a| a.end_time.is_some()));
    }

    #[test]
    fn test_views_of_empty_list() {
        assert!(recent_apps(&[]).is_empty());
        assert!(deleted_apps(&[]).is_empty());
    }
}
