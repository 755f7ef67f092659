//! Path-to-screen routing.
//!
//! A path string (what a link's href carries) resolves deterministically
//! to a [`Route`]. Routes are derived, never stored anywhere but the
//! current app state, and carry whatever parameters the path encodes.

/// The resolved destination for a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/` - posts list with the create-post form
    Home,
    /// `/users` - member list with the selected member's posts
    Users,
    /// `/notifications` - mock notification feed
    Notifications,
    /// `/posts/<id>` - a single post with a view/edit toggle
    Post { id: String },
    /// Anything else
    NotFound,
}

impl Route {
    /// The canonical path for this route, used when seeding history.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Users => "/users".to_string(),
            Route::Notifications => "/notifications".to_string(),
            Route::Post { id } => format!("/posts/{id}"),
            Route::NotFound => "/404".to_string(),
        }
    }
}

/// Resolve a path to a route.
///
/// Rules, checked in order: exact `/`, exact `/users`, exact
/// `/notifications`, then `/posts/<id>` where `<id>` is a single
/// non-empty segment. Everything else is [`Route::NotFound`]. There is
/// no query-string or hash handling; a path carrying either simply
/// fails these checks.
pub fn match_route(path: &str) -> Route {
    match path {
        "/" => Route::Home,
        "/users" => Route::Users,
        "/notifications" => Route::Notifications,
        _ => match path.strip_prefix("/posts/") {
            Some(id) if !id.is_empty() && !id.contains('/') => Route::Post { id: id.to_string() },
            _ => Route::NotFound,
        },
    }
}
