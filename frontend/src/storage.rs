//! Persistent bits of the session (the bearer token in `localStorage`) and the
//! hash route that selects the visible page.

use wasm_bindgen::JsValue;

use crate::constants::TOKEN_STORAGE_KEY;

/// The page currently shown in the content area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActiveView {
    Login,
    Register,
    Dashboard,
    Evaluation,
    Profile,
    CareerPlan,
}

impl ActiveView {
    pub fn path(self) -> &'static str {
        match self {
            ActiveView::Login => "login",
            ActiveView::Register => "register",
            ActiveView::Dashboard => "dashboard",
            ActiveView::Evaluation => "evaluation",
            ActiveView::Profile => "profile",
            ActiveView::CareerPlan => "career-plan",
        }
    }

    fn from_path(path: &str) -> Self {
        match path {
            "login" => ActiveView::Login,
            "register" => ActiveView::Register,
            "evaluation" => ActiveView::Evaluation,
            "profile" => ActiveView::Profile,
            "career-plan" => ActiveView::CareerPlan,
            _ => ActiveView::Dashboard,
        }
    }

    /// Every page except the two auth forms needs a token.
    pub fn requires_auth(self) -> bool {
        !matches!(self, ActiveView::Login | ActiveView::Register)
    }

    /// Sidebar label for the authenticated pages.
    pub fn nav_label(self) -> &'static str {
        match self {
            ActiveView::Login => "Log in",
            ActiveView::Register => "Sign up",
            ActiveView::Dashboard => "Dashboard",
            ActiveView::Evaluation => "Evaluation",
            ActiveView::Profile => "Profile",
            ActiveView::CareerPlan => "Career plan",
        }
    }
}

/// A parsed `#/view?key=value` location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub view: ActiveView,
    pub query: Vec<(String, String)>,
}

impl Default for Route {
    fn default() -> Self {
        Route::new(ActiveView::Dashboard)
    }
}

impl Route {
    pub fn new(view: ActiveView) -> Self {
        Self { view, query: Vec::new() }
    }

    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Parse `location.hash`. Anything unrecognised lands on the dashboard.
    pub fn parse_hash(hash: &str) -> Self {
        let trimmed = hash.trim_start_matches('#').trim_start_matches('/');
        let (path, query) = match trimmed.split_once('?') {
            Some((path, query)) => (path, query),
            None => (trimmed, ""),
        };

        let query = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((k, v)) => (k.to_string(), v.to_string()),
                None => (pair.to_string(), String::new()),
            })
            .collect();

        Self { view: ActiveView::from_path(path.trim_end_matches('/')), query }
    }

    pub fn to_hash(&self) -> String {
        let mut hash = format!("#/{}", self.view.path());
        if !self.query.is_empty() {
            let pairs: Vec<String> = self
                .query
                .iter()
                .map(|(k, v)| if v.is_empty() { k.clone() } else { format!("{}={}", k, v) })
                .collect();
            hash.push('?');
            hash.push_str(&pairs.join("&"));
        }
        hash
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn requires_auth(&self) -> bool {
        self.view.requires_auth()
    }
}

// ---------------------------------------------------------------------------
// Token persistence
// ---------------------------------------------------------------------------

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_token() -> Option<String> {
    local_storage()?
        .get_item(TOKEN_STORAGE_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.is_empty())
}

pub fn store_token(token: &str) -> Result<(), JsValue> {
    let storage = local_storage().ok_or_else(|| JsValue::from_str("localStorage unavailable"))?;
    storage.set_item(TOKEN_STORAGE_KEY, token)
}

pub fn clear_token() -> Result<(), JsValue> {
    match local_storage() {
        Some(storage) => storage.remove_item(TOKEN_STORAGE_KEY),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_view_and_query() {
        let route = Route::parse_hash("#/dashboard?evaluation=completed");
        assert_eq!(route.view, ActiveView::Dashboard);
        assert_eq!(route.query_value("evaluation"), Some("completed"));
        assert_eq!(route.query_value("missing"), None);
    }

    #[test]
    fn unknown_and_empty_hashes_fall_back_to_dashboard() {
        assert_eq!(Route::parse_hash("").view, ActiveView::Dashboard);
        assert_eq!(Route::parse_hash("#/").view, ActiveView::Dashboard);
        assert_eq!(Route::parse_hash("#/nowhere").view, ActiveView::Dashboard);
    }

    #[test]
    fn career_plan_path_round_trips() {
        let route = Route::new(ActiveView::CareerPlan);
        assert_eq!(route.to_hash(), "#/career-plan");
        assert_eq!(Route::parse_hash(&route.to_hash()), route);
    }

    #[test]
    fn auth_pages_are_public() {
        assert!(!ActiveView::Login.requires_auth());
        assert!(!ActiveView::Register.requires_auth());
        assert!(ActiveView::Profile.requires_auth());
        assert!(Route::parse_hash("#/evaluation").requires_auth());
    }
}
