//! Custom test assertions
//!
//! Domain-specific assertions for navigation output.

use hr_console::auth::rbac::PageKey;
use hr_console::console::NavSection;

/// Assertions for a rendered sidebar
pub trait SidebarAssertions {
    /// Page keys in display order, across all groups
    fn pages(&self) -> Vec<PageKey>;

    /// Assert the sidebar lists the page
    fn assert_lists(&self, page: PageKey);

    /// Assert the sidebar does not list the page
    fn assert_omits(&self, page: PageKey);
}

impl SidebarAssertions for Vec<NavSection> {
    fn pages(&self) -> Vec<PageKey> {
        self.iter()
            .flat_map(|section| section.items.iter().map(|item| item.page))
            .collect()
    }

    fn assert_lists(&self, page: PageKey) {
        assert!(
            self.pages().contains(&page),
            "Expected sidebar to list {}, got {:?}",
            page,
            self.pages()
        );
    }

    fn assert_omits(&self, page: PageKey) {
        assert!(
            !self.pages().contains(&page),
            "Expected sidebar to omit {}, got {:?}",
            page,
            self.pages()
        );
    }
}
