// Navigable screens and their access requirements.

pub mod guard;

pub use guard::{decide, Access, GuardOutcome, RouteRequirement};

use crate::models::Role;

/// Every screen the app can navigate to. Parsed from the URL path and
/// rendered back for history entries.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Route {
    Home,
    Search,
    MovieDetail(String),
    Login,
    AdminMovies,
    AdminMovieNew,
    AdminMovieEdit(String),
    AdminUsers,
    AdminUserNew,
    AdminUserEdit(String),
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        let path = if trimmed.is_empty() { "/" } else { trimmed };
        let segments: Vec<&str> = path.split('/').skip(1).collect();

        match segments.as_slice() {
            [""] => Route::Home,
            ["search"] => Route::Search,
            ["login"] => Route::Login,
            ["movies", id] => Route::MovieDetail((*id).to_string()),
            ["admin", "movies"] => Route::AdminMovies,
            ["admin", "movies", "new"] => Route::AdminMovieNew,
            ["admin", "movies", id, "edit"] => Route::AdminMovieEdit((*id).to_string()),
            ["admin", "users"] => Route::AdminUsers,
            ["admin", "users", "new"] => Route::AdminUserNew,
            ["admin", "users", id, "edit"] => Route::AdminUserEdit((*id).to_string()),
            _ => Route::NotFound,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Search => "/search".to_string(),
            Route::MovieDetail(id) => format!("/movies/{}", id),
            Route::Login => "/login".to_string(),
            Route::AdminMovies => "/admin/movies".to_string(),
            Route::AdminMovieNew => "/admin/movies/new".to_string(),
            Route::AdminMovieEdit(id) => format!("/admin/movies/{}/edit", id),
            Route::AdminUsers => "/admin/users".to_string(),
            Route::AdminUserNew => "/admin/users/new".to_string(),
            Route::AdminUserEdit(id) => format!("/admin/users/{}/edit", id),
            Route::NotFound => "/".to_string(),
        }
    }

    /// Static access table. Movie admin screens take admin OR superadmin;
    /// user admin screens take superadmin only. Roles are never implied.
    pub fn requirement(&self) -> RouteRequirement {
        match self {
            Route::Home
            | Route::Search
            | Route::MovieDetail(_)
            | Route::Login
            | Route::NotFound => RouteRequirement::public(),
            Route::AdminMovies | Route::AdminMovieNew | Route::AdminMovieEdit(_) => {
                RouteRequirement::roles(&[Role::Admin, Role::Superadmin])
            }
            Route::AdminUsers | Route::AdminUserNew | Route::AdminUserEdit(_) => {
                RouteRequirement::roles(&[Role::Superadmin])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_public_paths() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/search"), Route::Search);
        assert_eq!(Route::from_path("/login"), Route::Login);
        assert_eq!(
            Route::from_path("/movies/abc123"),
            Route::MovieDetail("abc123".to_string())
        );
    }

    #[test]
    fn parses_admin_paths() {
        assert_eq!(Route::from_path("/admin/movies"), Route::AdminMovies);
        assert_eq!(Route::from_path("/admin/movies/new"), Route::AdminMovieNew);
        assert_eq!(
            Route::from_path("/admin/movies/42/edit"),
            Route::AdminMovieEdit("42".to_string())
        );
        assert_eq!(Route::from_path("/admin/users"), Route::AdminUsers);
        assert_eq!(
            Route::from_path("/admin/users/42/edit"),
            Route::AdminUserEdit("42".to_string())
        );
    }

    #[test]
    fn trailing_slash_is_ignored() {
        assert_eq!(Route::from_path("/admin/movies/"), Route::AdminMovies);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::from_path("/nope"), Route::NotFound);
        assert_eq!(Route::from_path("/admin"), Route::NotFound);
        assert_eq!(Route::from_path("/admin/movies/42"), Route::NotFound);
    }

    #[test]
    fn paths_round_trip() {
        for route in [
            Route::Home,
            Route::Search,
            Route::MovieDetail("m1".to_string()),
            Route::Login,
            Route::AdminMovies,
            Route::AdminMovieNew,
            Route::AdminMovieEdit("m1".to_string()),
            Route::AdminUsers,
            Route::AdminUserNew,
            Route::AdminUserEdit("u1".to_string()),
        ] {
            assert_eq!(Route::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn user_admin_screens_are_superadmin_only() {
        let req = Route::AdminUsers.requirement();
        assert!(req.auth_required);
        assert!(matches!(req.access, Access::Roles(&[Role::Superadmin])));
    }

    #[test]
    fn movie_admin_screens_take_both_admin_roles() {
        let req = Route::AdminMovies.requirement();
        assert!(req.auth_required);
        assert!(matches!(
            req.access,
            Access::Roles(&[Role::Admin, Role::Superadmin])
        ));
    }
}
