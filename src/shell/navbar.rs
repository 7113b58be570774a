// Navigation bar entries and active-route matching

use crate::router::Route;

#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    /// Function key that opens this entry
    pub key: u8,
}

#[derive(Debug, Clone)]
pub struct Navbar {
    pub brand: &'static str,
    items: Vec<NavItem>,
}

impl Default for Navbar {
    fn default() -> Self {
        Self {
            brand: "Job Board",
            items: vec![
                NavItem { label: "Home", path: "/", key: 2 },
                NavItem { label: "Jobs", path: "/jobs", key: 3 },
                NavItem { label: "Add Job", path: "/add-job", key: 4 },
            ],
        }
    }
}

impl Navbar {
    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Entry highlighted for `route`. Detail and edit pages highlight nothing.
    pub fn active(&self, route: &Route) -> Option<&NavItem> {
        let path = route.path();
        self.items.iter().find(|item| item.path == path)
    }

    /// Entry bound to function key `F{n}`
    pub fn by_key(&self, n: u8) -> Option<&NavItem> {
        self.items.iter().find(|item| item.key == n)
    }
}
