//! Navigation item trees for the navbar and the app sidebar.
//!
//! Trees are plain owned data rebuilt from static configuration on each
//! render; expansion and collapse state lives in the rendering components.

use crate::IconName;

/// Scroll offset in pixels past which the navbar shows its scroll shadow.
pub const SCROLL_SHADOW_THRESHOLD: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One sidebar entry, optionally with nested children.
pub struct NavItem {
    /// Visible label.
    pub label: String,
    /// Link target; group headers usually have none.
    pub href: Option<String>,
    /// Leading icon, also the only content shown while the sidebar is collapsed.
    pub icon: Option<IconName>,
    /// Trailing badge text.
    pub badge: Option<String>,
    /// Disabled items are rendered but inert.
    pub disabled: bool,
    /// Nested entries.
    pub children: Vec<NavItem>,
}

impl NavItem {
    /// Entry without a link target.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
            icon: None,
            badge: None,
            disabled: false,
            children: Vec::new(),
        }
    }

    /// Entry linking to `href`.
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Self::new(label)
        }
    }

    /// Sets the leading icon.
    pub fn with_icon(mut self, icon: IconName) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Sets the badge text.
    pub fn with_badge(mut self, badge: impl ToString) -> Self {
        self.badge = Some(badge.to_string());
        self
    }

    /// Replaces the nested entries.
    pub fn with_children(mut self, children: Vec<NavItem>) -> Self {
        self.children = children;
        self
    }

    /// Marks the entry inert.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Whether the entry has nested entries.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Whether the entry links to `current_path`.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.href.as_deref() == Some(current_path)
    }

    /// Depth of the deepest descendant; a leaf has depth 0.
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

/// Next expansion state after a click: only entries with children toggle.
pub fn toggle_expanded(expanded: bool, has_children: bool) -> bool {
    if has_children {
        !expanded
    } else {
        expanded
    }
}

/// Whether nested entries render: they need children, an expanded parent and
/// a sidebar that is not collapsed to icons.
pub fn children_visible(has_children: bool, expanded: bool, sidebar_collapsed: bool) -> bool {
    has_children && expanded && !sidebar_collapsed
}

/// Whether the page has scrolled far enough for the navbar shadow.
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_SHADOW_THRESHOLD
}

/// Sidebar entries used when the host passes none.
pub fn default_sidebar_items() -> Vec<NavItem> {
    vec![
        NavItem::link("Dashboard", "/").with_icon(IconName::Home),
        NavItem::link("Analytics", "/analytics")
            .with_icon(IconName::BarChart)
            .with_badge("New"),
        NavItem::new("Users")
            .with_icon(IconName::Users)
            .with_children(vec![
                NavItem::link("All Users", "/users"),
                NavItem::link("Teams", "/users/teams"),
                NavItem::link("Roles", "/users/roles"),
            ]),
        NavItem::link("Documents", "/documents").with_icon(IconName::FileText),
        NavItem::link("Settings", "/settings").with_icon(IconName::Settings),
        NavItem::link("Help", "/help").with_icon(IconName::HelpCircle),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Dropdown entry under a navbar group.
pub struct NavbarLink {
    /// Visible label.
    pub label: String,
    /// Link target.
    pub href: String,
    /// Secondary line under the label.
    pub description: Option<String>,
}

impl NavbarLink {
    /// Link without a description.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            description: None,
        }
    }

    /// Sets the secondary line.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Top-level navbar entry: a plain link or a dropdown group.
pub struct NavbarItem {
    /// Visible label.
    pub label: String,
    /// Link target for plain entries.
    pub href: Option<String>,
    /// Dropdown links; non-empty makes the entry a group.
    pub children: Vec<NavbarLink>,
}

impl NavbarItem {
    /// Plain link entry.
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
            children: Vec::new(),
        }
    }

    /// Dropdown group entry.
    pub fn group(label: impl Into<String>, children: Vec<NavbarLink>) -> Self {
        Self {
            label: label.into(),
            href: None,
            children,
        }
    }

    /// Whether the entry renders as a dropdown.
    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }

    /// Link target for the desktop button; groups and bare entries fall back to `#`.
    pub fn target(&self) -> &str {
        self.href.as_deref().unwrap_or("#")
    }
}

/// Navbar entries used when the host passes none.
pub fn default_navbar_items() -> Vec<NavbarItem> {
    vec![
        NavbarItem::link("Home", "/"),
        NavbarItem::group(
            "Products",
            vec![
                NavbarLink::new("Overview", "/products").with_description("All our products"),
                NavbarLink::new("Pricing", "/pricing").with_description("Simple pricing"),
                NavbarLink::new("Features", "/features").with_description("What we offer"),
            ],
        ),
        NavbarItem::link("About", "/about"),
        NavbarItem::link("Contact", "/contact"),
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn toggling_only_flips_entries_with_children() {
        assert!(toggle_expanded(false, true));
        assert!(!toggle_expanded(true, true));
        assert!(!toggle_expanded(false, false));
        assert!(toggle_expanded(true, false));
    }

    #[test]
    fn children_need_expansion_and_an_open_sidebar() {
        for has_children in [false, true] {
            for expanded in [false, true] {
                for collapsed in [false, true] {
                    assert_eq!(
                        children_visible(has_children, expanded, collapsed),
                        has_children && expanded && !collapsed,
                        "children={has_children} expanded={expanded} collapsed={collapsed}"
                    );
                }
            }
        }
    }

    #[test]
    fn active_entry_matches_current_path_exactly() {
        let item = NavItem::link("Teams", "/users/teams");
        assert!(item.is_active("/users/teams"));
        assert!(!item.is_active("/users"));
        assert!(!NavItem::new("Users").is_active("/users"));
    }

    #[test]
    fn default_sidebar_has_one_nested_group() {
        let items = default_sidebar_items();
        assert_eq!(items.len(), 6);
        let groups: Vec<&str> = items
            .iter()
            .filter(|item| item.has_children())
            .map(|item| item.label.as_str())
            .collect();
        assert_eq!(groups, vec!["Users"]);
        assert_eq!(items[1].badge.as_deref(), Some("New"));
        assert_eq!(items.iter().map(NavItem::depth).max(), Some(1));
    }

    #[test]
    fn scroll_shadow_starts_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(10.0));
        assert!(is_scrolled(10.5));
    }

    #[test]
    fn navbar_groups_have_no_direct_target() {
        let items = default_navbar_items();
        assert!(items[1].is_group());
        assert_eq!(items[1].target(), "#");
        assert_eq!(items[0].target(), "/");
        assert_eq!(
            items[1].children[1].description.as_deref(),
            Some("Simple pricing")
        );
    }
}
