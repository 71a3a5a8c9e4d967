/// Every view the site can show. `NotFound` is the catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Features,
    Learn,
    Chatbot,
    Community,
    Demo,
    About,
    NotFound,
}

impl Page {
    /// Navigable pages, in navbar order.
    pub const NAV: [Page; 7] = [
        Page::Home,
        Page::Features,
        Page::Learn,
        Page::Chatbot,
        Page::Community,
        Page::Demo,
        Page::About,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Features => "/features",
            Page::Learn => "/learn",
            Page::Chatbot => "/chatbot",
            Page::Community => "/community",
            Page::Demo => "/demo",
            Page::About => "/about",
            Page::NotFound => "/404",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Features => "Features",
            Page::Learn => "Learn",
            Page::Chatbot => "Chatbot",
            Page::Community => "Community",
            Page::Demo => "Demo",
            Page::About => "About",
            Page::NotFound => "Not Found",
        }
    }

    pub fn document_title(self) -> String {
        match self {
            Page::Home => "AI Defense".to_string(),
            page => format!("{} | AI Defense", page.label()),
        }
    }

    /// Query string, fragment and a trailing slash are ignored.
    pub fn from_path(path: &str) -> Page {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Page::NAV
            .into_iter()
            .find(|page| page.path() == normalized)
            .unwrap_or(Page::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_path_round_trips() {
        for page in Page::NAV {
            assert_eq!(Page::from_path(page.path()), page);
        }
    }

    #[test]
    fn test_path_normalization() {
        assert_eq!(Page::from_path(""), Page::Home);
        assert_eq!(Page::from_path("/learn/"), Page::Learn);
        assert_eq!(Page::from_path("/community?filter=crisis"), Page::Community);
        assert_eq!(Page::from_path("/demo#step-3"), Page::Demo);
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        assert_eq!(Page::from_path("/pricing"), Page::NotFound);
        assert_eq!(Page::from_path("/learn/extra"), Page::NotFound);
        assert_eq!(Page::from_path("/404"), Page::NotFound);
    }

    #[test]
    fn test_document_title() {
        assert_eq!(Page::Home.document_title(), "AI Defense");
        assert_eq!(Page::Chatbot.document_title(), "Chatbot | AI Defense");
    }
}
