use std::fmt;

use uuid::Uuid;

/* Pages of the site. Only the portfolio page takes a parameter: the id of the user owning it. */
#[derive(Hash, Eq, PartialEq, Debug, Clone, Copy)]
pub enum Route {
    Home,
    Explore,
    Login,
    Onboarding,
    Portfolio(Uuid),
    Terms,
    Privacy,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Explore => "/explore".to_string(),
            Route::Login => "/login".to_string(),
            Route::Onboarding => "/onboarding".to_string(),
            Route::Portfolio(user_id) => format!("/portfolio/{user_id}"),
            Route::Terms => "/terms".to_string(),
            Route::Privacy => "/privacy".to_string(),
        }
    }

    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let relative = path.strip_prefix('/')?.trim_end_matches('/');
        if relative.is_empty() {
            return Some(Route::Home);
        }
        let segments: Vec<&str> = relative.split('/').collect();
        match segments.as_slice() {
            ["explore"] => Some(Route::Explore),
            ["login"] => Some(Route::Login),
            ["onboarding"] => Some(Route::Onboarding),
            ["terms"] => Some(Route::Terms),
            ["privacy"] => Some(Route::Privacy),
            ["portfolio", id] => Uuid::parse_str(id).ok().map(Route::Portfolio),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}
