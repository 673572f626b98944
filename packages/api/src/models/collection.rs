//! # Collection registry
//!
//! The eleven content collections the admin console manages, in tab order.
//! Each [`Collection`] maps to the path segment the remote API uses
//! (`/admin/{id}`, `/public/{id}`) and to a display label. The set is closed:
//! anything outside it fails to parse, so the console can never point at an
//! unknown resource.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    #[default]
    NewsArticle,
    Announcement,
    GalleryItem,
    AdmissionInfo,
    AcademicCalendarEvent,
    ScheduleEntry,
    OrgNode,
    Staff,
    Extracurricular,
    SchoolPage,
    Achievement,
}

/// Returned when parsing an identifier outside the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown collection: {0}")]
pub struct UnknownCollection(pub String);

impl Collection {
    /// Every collection, in tab order. The first entry is the default.
    pub const ALL: [Collection; 11] = [
        Collection::NewsArticle,
        Collection::Announcement,
        Collection::GalleryItem,
        Collection::AdmissionInfo,
        Collection::AcademicCalendarEvent,
        Collection::ScheduleEntry,
        Collection::OrgNode,
        Collection::Staff,
        Collection::Extracurricular,
        Collection::SchoolPage,
        Collection::Achievement,
    ];

    /// Resource path segment used by the remote API.
    pub fn id(&self) -> &'static str {
        match self {
            Collection::NewsArticle => "newsarticle",
            Collection::Announcement => "announcement",
            Collection::GalleryItem => "galleryitem",
            Collection::AdmissionInfo => "admissioninfo",
            Collection::AcademicCalendarEvent => "academiccalendarevent",
            Collection::ScheduleEntry => "scheduleentry",
            Collection::OrgNode => "orgnode",
            Collection::Staff => "staff",
            Collection::Extracurricular => "extracurricular",
            Collection::SchoolPage => "schoolpage",
            Collection::Achievement => "achievement",
        }
    }

    /// Human-readable name shown on tabs and headings.
    pub fn label(&self) -> &'static str {
        match self {
            Collection::NewsArticle => "News & Articles",
            Collection::Announcement => "Announcements",
            Collection::GalleryItem => "Gallery",
            Collection::AdmissionInfo => "Admissions",
            Collection::AcademicCalendarEvent => "Academic Calendar",
            Collection::ScheduleEntry => "School Schedule",
            Collection::OrgNode => "Organization Chart",
            Collection::Staff => "Staff",
            Collection::Extracurricular => "Extracurriculars",
            Collection::SchoolPage => "Profile Pages",
            Collection::Achievement => "Achievements",
        }
    }

    /// Whether the collection has its own public list page. Profile pages
    /// are shown through the fixed-key profile view instead.
    pub fn is_public(&self) -> bool {
        !matches!(self, Collection::SchoolPage)
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    /// Collections that get a public list page, in tab order.
    pub fn public() -> impl Iterator<Item = Collection> {
        Self::ALL.into_iter().filter(Collection::is_public)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Collection {
    type Err = UnknownCollection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| UnknownCollection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first_entry() {
        assert_eq!(Collection::default(), Collection::ALL[0]);
        assert_eq!(Collection::default().id(), "newsarticle");
    }

    #[test]
    fn test_ids_are_unique_and_resolve_back() {
        for c in Collection::ALL {
            assert_eq!(Collection::from_id(c.id()), Some(c));
            assert_eq!(c.to_string().parse::<Collection>(), Ok(c));
        }
        let mut ids: Vec<&str> = Collection::ALL.iter().map(|c| c.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 11);
    }

    #[test]
    fn test_unknown_identifier_is_rejected() {
        assert_eq!(Collection::from_id("users"), None);
        assert_eq!(
            "NewsArticle".parse::<Collection>(),
            Err(UnknownCollection("NewsArticle".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_wire_ids() {
        let json = serde_json::to_string(&Collection::AcademicCalendarEvent).unwrap();
        assert_eq!(json, "\"academiccalendarevent\"");
        let parsed: Collection = serde_json::from_str("\"orgnode\"").unwrap();
        assert_eq!(parsed, Collection::OrgNode);
    }

    #[test]
    fn test_school_pages_are_not_listed_publicly() {
        assert_eq!(Collection::public().count(), 10);
        assert!(Collection::public().all(|c| c != Collection::SchoolPage));
    }
}
