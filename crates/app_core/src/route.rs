//! Page routes and navigation history

use crate::session::Session;
use reqwest::Url;
use std::fmt;

/// Editor id that opens a fresh draft
pub const NEW_PROJECT_ID: &str = "new";

/// Oldest entries are dropped past this many back steps
pub const MAX_HISTORY: usize = 100;

/// Base for query encoding; only its query part is ever used
const QUERY_BASE: &str = "lumina://app/";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    About,
    Services,
    Contact,
    Portfolio {
        category: Option<String>,
    },
    Project {
        slug: String,
    },
    Login,
    AdminDashboard,
    AdminSeo,
    AdminProject {
        id: String,
    },
    AdminSettings,
}

impl Route {
    /// Parse a location such as `#/portfolio?category=weddings`. Unknown
    /// paths fall back to `Home`.
    pub fn parse(location: &str) -> Self {
        let location = location.trim().trim_start_matches('#');
        let (path, query) = match location.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (location, None),
        };
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["about"] => Route::About,
            ["services"] => Route::Services,
            ["contact"] => Route::Contact,
            ["portfolio"] => Route::Portfolio {
                category: query.and_then(|q| query_param(q, "category")),
            },
            ["portfolio", slug] => Route::Project {
                slug: slug.to_string(),
            },
            ["login"] => Route::Login,
            ["admin"] | ["admin", "dashboard"] => Route::AdminDashboard,
            ["admin", "seo"] => Route::AdminSeo,
            ["admin", "project", id] => Route::AdminProject { id: id.to_string() },
            ["admin", "settings"] => Route::AdminSettings,
            _ => {
                tracing::debug!(location, "Unknown route, redirecting home");
                Route::Home
            }
        }
    }

    /// Canonical path
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".into(),
            Route::About => "/about".into(),
            Route::Services => "/services".into(),
            Route::Contact => "/contact".into(),
            Route::Portfolio { category: None } => "/portfolio".into(),
            Route::Portfolio {
                category: Some(category),
            } => format!("/portfolio?{}", encode_query("category", category)),
            Route::Project { slug } => format!("/portfolio/{}", slug),
            Route::Login => "/login".into(),
            Route::AdminDashboard => "/admin/dashboard".into(),
            Route::AdminSeo => "/admin/seo".into(),
            Route::AdminProject { id } => format!("/admin/project/{}", id),
            Route::AdminSettings => "/admin/settings".into(),
        }
    }

    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Route::AdminDashboard | Route::AdminSeo | Route::AdminProject { .. } | Route::AdminSettings
        )
    }

    pub fn is_admin(&self) -> bool {
        self.is_protected() || *self == Route::Login
    }

    pub fn new_project() -> Self {
        Route::AdminProject {
            id: NEW_PROJECT_ID.into(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// First non-empty value of `name`, percent- and `+`-decoded
fn query_param(query: &str, name: &str) -> Option<String> {
    let url = Url::parse(&format!("{}?{}", QUERY_BASE, query)).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

fn encode_query(name: &str, value: &str) -> String {
    match Url::parse(QUERY_BASE) {
        Ok(mut url) => {
            url.query_pairs_mut().append_pair(name, value);
            url.query().unwrap_or_default().to_string()
        }
        Err(_) => format!("{}={}", name, value),
    }
}

/// Protected routes redirect to the login page without a session
pub fn guard(route: Route, session: &Session) -> Route {
    if route.is_protected() && !session.is_authenticated() {
        tracing::debug!(%route, "Redirecting to login");
        Route::Login
    } else {
        route
    }
}

/// Current route plus back history
#[derive(Debug, Default)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Router {
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Go to `route` after guarding it. Returns false if nothing changed.
    pub fn navigate(&mut self, route: Route, session: &Session) -> bool {
        let route = guard(route, session);
        if route == self.current {
            return false;
        }
        let old = std::mem::replace(&mut self.current, route);
        self.history.push(old);
        if self.history.len() > MAX_HISTORY {
            self.history.remove(0);
        }
        true
    }

    /// Swap the current route without recording history
    pub fn replace(&mut self, route: Route, session: &Session) {
        self.current = guard(route, session);
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn back(&mut self, session: &Session) -> bool {
        match self.history.pop() {
            Some(prev) => {
                self.current = guard(prev, session);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_public_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("#/about"), Route::About);
        assert_eq!(Route::parse("/portfolio"), Route::Portfolio { category: None });
        assert_eq!(
            Route::parse("#/portfolio?category=weddings"),
            Route::Portfolio {
                category: Some("weddings".into())
            }
        );
        assert_eq!(
            Route::parse("/portfolio/urban-shadows"),
            Route::Project {
                slug: "urban-shadows".into()
            }
        );
    }

    #[test]
    fn test_parse_admin_routes() {
        assert_eq!(Route::parse("/admin"), Route::AdminDashboard);
        assert_eq!(Route::parse("/admin/dashboard"), Route::AdminDashboard);
        assert_eq!(Route::parse("/admin/project/new"), Route::new_project());
        assert_eq!(Route::parse("/admin/settings/"), Route::AdminSettings);
    }

    #[test]
    fn test_unknown_goes_home() {
        assert_eq!(Route::parse("/blog/2024"), Route::Home);
        assert_eq!(Route::parse("/admin/project"), Route::Home);
    }

    #[test]
    fn test_path_round_trip() {
        for route in [
            Route::Home,
            Route::Contact,
            Route::Portfolio {
                category: Some("editorial".into()),
            },
            Route::Project { slug: "x".into() },
            Route::AdminSeo,
            Route::AdminProject { id: "3".into() },
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_guard() {
        let anonymous = Session::default();
        let admin = Session::authenticated();

        assert_eq!(guard(Route::AdminSeo, &anonymous), Route::Login);
        assert_eq!(guard(Route::AdminSeo, &admin), Route::AdminSeo);
        assert_eq!(guard(Route::About, &anonymous), Route::About);
        assert!(!Route::Login.is_protected());
    }

    #[test]
    fn test_router_history() {
        let session = Session::authenticated();
        let mut router = Router::new(Route::Home);

        assert!(router.navigate(Route::About, &session));
        assert!(!router.navigate(Route::About, &session));
        assert!(router.navigate(Route::AdminDashboard, &session));

        assert!(router.back(&session));
        assert_eq!(router.current(), &Route::About);
        assert!(router.back(&session));
        assert_eq!(router.current(), &Route::Home);
        assert!(!router.can_go_back());
        assert!(!router.back(&session));
    }

    #[test]
    fn test_category_query_is_decoded() {
        assert_eq!(
            Route::parse("/portfolio?category=black%20%26%20white"),
            Route::Portfolio {
                category: Some("black & white".into())
            }
        );
        assert_eq!(
            Route::parse("/portfolio?sort=new&category=caf%C3%A9+noir"),
            Route::Portfolio {
                category: Some("café noir".into())
            }
        );
        assert_eq!(
            Route::parse("/portfolio?category="),
            Route::Portfolio { category: None }
        );

        let route = Route::Portfolio {
            category: Some("b&w?".into()),
        };
        assert_eq!(route.path(), "/portfolio?category=b%26w%3F");
        assert_eq!(Route::parse(&route.path()), route);
    }

    #[test]
    fn test_history_is_capped() {
        let session = Session::default();
        let mut router = Router::new(Route::Home);
        for i in 0..MAX_HISTORY + 20 {
            router.navigate(Route::Project { slug: i.to_string() }, &session);
        }

        let mut steps = 0;
        while router.back(&session) {
            steps += 1;
        }
        assert_eq!(steps, MAX_HISTORY);
        // The oldest entries were the ones dropped
        assert_eq!(router.current(), &Route::Project { slug: "19".into() });
    }

    #[test]
    fn test_back_after_logout_is_guarded() {
        let mut session = Session::authenticated();
        let mut router = Router::new(Route::AdminDashboard);
        router.navigate(Route::Home, &session);

        session.logout();
        router.back(&session);
        assert_eq!(router.current(), &Route::Login);
    }
}
