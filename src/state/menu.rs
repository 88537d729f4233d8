#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// Choosing a link always closes the mobile menu, the anchor handles the scroll.
    pub fn after_link_selected(self) -> Self {
        Self::Closed
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Page sections reachable from the navigation, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Skills,
    Services,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Self::Home,
        Self::About,
        Self::Skills,
        Self::Services,
        Self::Projects,
        Self::Contact,
    ];

    /// Element id of the section, and the fragment its links point at.
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Services => "services",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

pub const NAV_LINKS: [NavLink; 6] = [
    NavLink {
        label: "Home",
        anchor: Section::Home.anchor(),
    },
    NavLink {
        label: "About",
        anchor: Section::About.anchor(),
    },
    NavLink {
        label: "Skills",
        anchor: Section::Skills.anchor(),
    },
    NavLink {
        label: "Services",
        anchor: Section::Services.anchor(),
    },
    NavLink {
        label: "Projects",
        anchor: Section::Projects.anchor(),
    },
    NavLink {
        label: "Contact",
        anchor: Section::Contact.anchor(),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        let menu = menu.toggled();
        assert_eq!(menu, MenuState::Open);
        let menu = menu.toggled();
        assert_eq!(menu, MenuState::Closed);
    }

    #[test]
    fn test_link_selection_closes() {
        assert_eq!(MenuState::Open.after_link_selected(), MenuState::Closed);
        // selecting while closed (desktop links) is harmless
        assert_eq!(MenuState::Closed.after_link_selected(), MenuState::Closed);
    }

    #[test]
    fn test_nav_links() {
        let hrefs = NAV_LINKS.iter().map(NavLink::href).collect::<Vec<_>>();
        assert_eq!(
            hrefs,
            vec!["#home", "#about", "#skills", "#services", "#projects", "#contact"]
        );
    }

    #[test]
    fn test_nav_links_cover_every_section() {
        // sections render `id = section.anchor()`, so each link must name exactly one of them
        let anchors = NAV_LINKS.iter().map(|l| l.anchor).collect::<Vec<_>>();
        let sections = Section::ALL.map(Section::anchor).to_vec();
        assert_eq!(anchors, sections);
        assert_eq!(Section::Contact.href(), "#contact");
    }
}
