//! # Seminar Offering Catalog
//!
//! The fixed table of schedulable sessions a registrant can select. The
//! catalog size is a configuration axis: the multi-offering form requires a
//! non-empty selection, while a single-offering deployment treats the lone
//! entry as implicitly selected.

use serde::{Deserialize, Serialize};

/// One schedulable session (identifier, display title, date, time).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seminar {
    pub id: String,
    pub title: String,
    pub date: String,
    pub time: String,
}

/// Ordered, in-memory lookup table of offered seminars.
///
/// Built once from configuration at startup and shared read-only across
/// requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeminarCatalog {
    seminars: Vec<Seminar>,
}

impl SeminarCatalog {
    pub fn new(seminars: Vec<Seminar>) -> Self {
        Self { seminars }
    }

    /// Number of offerings in this deployment.
    pub fn len(&self) -> usize {
        self.seminars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seminars.is_empty()
    }

    /// Look up an offering by identifier.
    pub fn get(&self, id: &str) -> Option<&Seminar> {
        self.seminars.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// The single offering of a one-seminar deployment, if that is what this
    /// catalog is.
    pub fn sole_offering(&self) -> Option<&Seminar> {
        match self.seminars.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Seminar> {
        self.seminars.iter()
    }

    /// Human-readable rendering of a selection for the notification body.
    ///
    /// Identifiers without a catalog entry are skipped silently: the original
    /// form never ships unknown ids, and a stale id must not block the
    /// notification.
    pub fn render_selection(&self, selected: &[String]) -> String {
        selected
            .iter()
            .filter_map(|id| self.get(id))
            .map(|s| format!("  - {}\n    {} {}", s.title, s.date, s.time))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for SeminarCatalog {
    /// The four-part series the landing page advertises.
    fn default() -> Self {
        Self::new(vec![
            Seminar {
                id: "vol1".to_string(),
                title: "VOL.1: 「商談時間」を最大化する".to_string(),
                date: "2026年2月3日(火)".to_string(),
                time: "14:00～15:00".to_string(),
            },
            Seminar {
                id: "vol2".to_string(),
                title: "VOL.2: 「売上」を最大化する".to_string(),
                date: "2026年2月10日(火)".to_string(),
                time: "14:00～15:00".to_string(),
            },
            Seminar {
                id: "vol3".to_string(),
                title: "VOL.3: 「売る」以外は、AIに任せる".to_string(),
                date: "2026年2月17日(火)".to_string(),
                time: "14:00～15:00".to_string(),
            },
            Seminar {
                id: "vol4".to_string(),
                title: "VOL.4: AIと働く、次世代の営業組織".to_string(),
                date: "2026年2月24日(火)".to_string(),
                time: "14:00～15:00".to_string(),
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_four_offerings() {
        let catalog = SeminarCatalog::default();
        assert_eq!(catalog.len(), 4);
        assert!(catalog.contains("vol1"));
        assert!(catalog.contains("vol4"));
        assert!(!catalog.contains("vol5"));
        assert!(catalog.sole_offering().is_none());
    }

    #[test]
    fn lookup_returns_display_fields() {
        let catalog = SeminarCatalog::default();
        let vol2 = catalog.get("vol2").expect("vol2 should exist");
        assert_eq!(vol2.title, "VOL.2: 「売上」を最大化する");
        assert_eq!(vol2.date, "2026年2月10日(火)");
        assert_eq!(vol2.time, "14:00～15:00");
    }

    #[test]
    fn render_selection_includes_only_selected() {
        let catalog = SeminarCatalog::default();
        let rendered =
            catalog.render_selection(&["vol1".to_string(), "vol2".to_string()]);
        assert!(rendered.contains("VOL.1"));
        assert!(rendered.contains("2026年2月3日(火)"));
        assert!(rendered.contains("VOL.2"));
        assert!(!rendered.contains("VOL.3"));
        assert!(!rendered.contains("VOL.4"));
    }

    #[test]
    fn render_selection_skips_unknown_ids() {
        let catalog = SeminarCatalog::default();
        let rendered =
            catalog.render_selection(&["vol1".to_string(), "vol99".to_string()]);
        assert!(rendered.contains("VOL.1"));
        assert!(!rendered.contains("vol99"));
    }

    #[test]
    fn sole_offering_for_single_entry_catalog() {
        let catalog = SeminarCatalog::new(vec![Seminar {
            id: "main".to_string(),
            title: "AI営業セミナー".to_string(),
            date: "2026年3月1日(日)".to_string(),
            time: "10:00～11:00".to_string(),
        }]);
        assert_eq!(catalog.sole_offering().map(|s| s.id.as_str()), Some("main"));
    }
}
