use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::{
    DomainError, ElementId, GalleryImage, Project, interaction::counter::CounterSpec,
};

/// Static content the page is built from, loaded once at startup.
///
/// Invariant after [`SiteContent::validate`]: projects and gallery are
/// non-empty and the featured index points at a project. Cyclic navigation
/// relies on this instead of guarding every modulo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub projects: Vec<Project>,
    pub gallery: Vec<GalleryImage>,
    pub featured_project: usize,
    /// Top-level sections tracked for the call-to-action label.
    pub sections: Vec<ElementId>,
    pub counters: Vec<CounterSpec>,
    /// Containers whose descendants fade in once on first view.
    pub reveal_containers: Vec<ElementId>,
    pub featured_block: Option<ElementId>,
}

impl SiteContent {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.projects.is_empty() {
            return Err(DomainError::EmptyProjects);
        }
        if self.gallery.is_empty() {
            return Err(DomainError::EmptyGallery);
        }
        if self.featured_project >= self.projects.len() {
            return Err(DomainError::UnknownProject {
                index: self.featured_project,
                len: self.projects.len(),
            });
        }

        // Sections share ids with the page, but reveal watches must be unique
        // among themselves or one-shot bookkeeping would collide.
        let mut seen = HashSet::new();
        let watched = self
            .counters
            .iter()
            .map(|c| &c.element)
            .chain(self.reveal_containers.iter())
            .chain(self.featured_block.iter());
        for id in watched {
            if !seen.insert(id) {
                return Err(DomainError::DuplicateElement { id: id.to_string() });
            }
        }

        let mut sections = HashSet::new();
        for id in &self.sections {
            if !sections.insert(id) {
                return Err(DomainError::DuplicateElement { id: id.to_string() });
            }
        }
        Ok(())
    }

    pub fn featured(&self) -> Option<&Project> {
        self.projects.get(self.featured_project)
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        let choreomania = Project::new(
            "ChoreoMania",
            "Narrative web experience based on Wheel of Death.",
            "https://res.cloudinary.com/dhbjoltyy/image/upload/v1766936504/choreomania.png",
            "https://github.com/Miguelean1/Choreomania",
        );

        Self {
            projects: vec![
                Project::new(
                    "FocusQuest",
                    "A gamified to-do list web application.",
                    "https://res.cloudinary.com/dhbjoltyy/image/upload/v1766937256/focusquest.png",
                    "https://github.com/alvaroosanchezz34/FocusQuest",
                ),
                choreomania.clone(),
                Project::new(
                    "LaLiga360",
                    "Final degree project with Angular, Node.js and MySQL.",
                    "https://res.cloudinary.com/dhbjoltyy/image/upload/v1766938106/laliga360.png",
                    "https://github.com/alvaroosanchezz34/LaLiga360",
                ),
                choreomania.clone(),
                choreomania.clone(),
                choreomania,
            ],
            gallery: vec![
                GalleryImage::new(
                    "https://res.cloudinary.com/dhbjoltyy/image/upload/v1766926211/workly-users.png",
                    "Workly - Users",
                ),
                GalleryImage::new(
                    "https://res.cloudinary.com/dhbjoltyy/image/upload/v1766926160/workly-clients.png",
                    "Workly - Clients",
                ),
                GalleryImage::new(
                    "https://res.cloudinary.com/dhbjoltyy/image/upload/v1766926069/workly-dashboard.png",
                    "Workly - Dashboard",
                ),
            ],
            featured_project: 0,
            sections: ["home", "about", "stack", "projects", "experience", "contact"]
                .into_iter()
                .map(ElementId::from)
                .collect(),
            counters: vec![
                CounterSpec::new("stat-projects", 6, true),
                CounterSpec::new("stat-years", 2, false),
                CounterSpec::new("stat-technologies", 12, true),
            ],
            reveal_containers: ["about", "stack", "projects", "experience"]
                .into_iter()
                .map(ElementId::from)
                .collect(),
            featured_block: Some(ElementId::from("featured-project")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_site_is_valid() {
        assert!(SiteContent::default().validate().is_ok());
    }

    #[test]
    fn empty_gallery_fails_fast() {
        let site = SiteContent {
            gallery: Vec::new(),
            ..SiteContent::default()
        };
        assert_eq!(site.validate(), Err(DomainError::EmptyGallery));
    }

    #[test]
    fn empty_projects_fails_fast() {
        let site = SiteContent {
            projects: Vec::new(),
            ..SiteContent::default()
        };
        assert_eq!(site.validate(), Err(DomainError::EmptyProjects));
    }

    #[test]
    fn featured_index_must_exist() {
        let site = SiteContent {
            featured_project: 42,
            ..SiteContent::default()
        };
        assert!(matches!(
            site.validate(),
            Err(DomainError::UnknownProject { index: 42, .. })
        ));
    }

    #[test]
    fn counter_and_reveal_ids_must_not_collide() {
        let mut site = SiteContent::default();
        site.reveal_containers.push(ElementId::from("stat-years"));
        assert!(matches!(
            site.validate(),
            Err(DomainError::DuplicateElement { .. })
        ));
    }
}
