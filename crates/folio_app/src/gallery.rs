//! Project gallery view-model
//!
//! Holds the active filter tab and exposes the filtered record view the
//! cards render from.

use folio_content::{filter_projects, ProjectRecord, ProjectTab, PROJECTS};

/// The filterable project gallery
pub struct ProjectGallery {
    records: &'static [ProjectRecord],
    active_tab: ProjectTab,
}

impl ProjectGallery {
    /// Gallery over the built-in record set, showing everything
    pub fn new() -> Self {
        Self::with_records(&PROJECTS)
    }

    /// Gallery over an explicit record set
    pub fn with_records(records: &'static [ProjectRecord]) -> Self {
        Self {
            records,
            active_tab: ProjectTab::All,
        }
    }

    /// The tab row, in display order
    pub fn tabs(&self) -> &'static [ProjectTab] {
        ProjectTab::all()
    }

    pub fn active_tab(&self) -> ProjectTab {
        self.active_tab
    }

    /// Activate a filter tab
    pub fn select_tab(&mut self, tab: ProjectTab) {
        self.active_tab = tab;
    }

    /// The records passing the active tab, in original order
    pub fn visible_projects(&self) -> Vec<&ProjectRecord> {
        filter_projects(self.records, self.active_tab)
    }
}

impl Default for ProjectGallery {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_content::ProjectCategory;

    #[test]
    fn defaults_to_showing_all_projects() {
        let gallery = ProjectGallery::new();
        assert_eq!(gallery.active_tab(), ProjectTab::All);
        assert_eq!(gallery.visible_projects().len(), 4);
    }

    #[test]
    fn selecting_a_category_narrows_the_view() {
        let mut gallery = ProjectGallery::new();
        gallery.select_tab(ProjectTab::Category(ProjectCategory::Backend));

        let visible = gallery.visible_projects();
        assert_eq!(visible.len(), 3);
        assert!(visible
            .iter()
            .all(|p| p.category == ProjectCategory::Backend));
    }

    #[test]
    fn switching_back_to_all_restores_the_full_set() {
        let mut gallery = ProjectGallery::new();
        gallery.select_tab(ProjectTab::Category(ProjectCategory::Fullstack));
        assert_eq!(gallery.visible_projects().len(), 1);

        gallery.select_tab(ProjectTab::All);
        assert_eq!(gallery.visible_projects().len(), 4);
    }
}
