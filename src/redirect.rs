//! Login Redirects
//!
//! Where to send a visitor before and after logging in.

use url::form_urlencoded;

/// Query parameter carrying the page a visitor was turned away from
pub const FROM_PARAM: &str = "from";

/// Login URL that remembers `from` (path plus query) for after login
pub fn login_redirect_path(from: &str) -> String {
    if from.is_empty() || from == "/" {
        return "/login".to_string();
    }
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(FROM_PARAM, from)
        .finish();
    format!("/login?{}", query)
}

/// Post-login destination. Only local paths are honoured.
pub fn redirect_target(from: Option<&str>) -> String {
    match from {
        Some(path)
            if path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/login") =>
        {
            path.to_string()
        }
        _ => "/".to_string(),
    }
}

/// `pathname` plus `?search` when there is one
pub fn path_with_query(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        pathname.to_string()
    } else {
        format!("{}?{}", pathname, search)
    }
}
