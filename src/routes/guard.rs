// ============================================================================
// ROUTE GUARD - pure decision function gating navigation
// ============================================================================
// Re-evaluated on every render against the current SessionState; no memory
// between calls, never throws, total over all inputs.
// ============================================================================

use crate::models::Role;
use crate::state::SessionState;

use super::Route;

/// Who may enter a screen once authentication is settled.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Access {
    /// No restriction at all.
    Public,
    /// Any logged-in identity, role irrelevant.
    AnyAuthenticated,
    /// Closed role list; membership is exact, nothing is implied.
    Roles(&'static [Role]),
}

/// Per-screen access declaration. Static, defined by `Route::requirement`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RouteRequirement {
    pub auth_required: bool,
    pub access: Access,
}

impl RouteRequirement {
    pub const fn public() -> Self {
        Self {
            auth_required: false,
            access: Access::Public,
        }
    }

    pub const fn any_authenticated() -> Self {
        Self {
            auth_required: true,
            access: Access::AnyAuthenticated,
        }
    }

    pub const fn roles(roles: &'static [Role]) -> Self {
        Self {
            auth_required: true,
            access: Access::Roles(roles),
        }
    }
}

/// Outcome of a guard evaluation, consumed by the app shell.
/// Redirects are normal control flow here, never errors.
#[derive(Clone, PartialEq, Debug)]
pub enum GuardOutcome {
    /// Session restore still in flight: render nothing, do not redirect.
    Pending,
    Allow,
    /// Not logged in; `from` remembers where the user wanted to go so the
    /// login flow can return there (best effort).
    RedirectToLogin { from: Route },
    /// Logged in but the role is not on the screen's list.
    RedirectToHome,
}

pub fn decide(requirement: &RouteRequirement, requested: &Route, auth: &SessionState) -> GuardOutcome {
    if auth.initializing {
        // A not-yet-restored session would look exactly like "logged out"
        // and produce a false redirect. Hold rendering instead.
        return GuardOutcome::Pending;
    }

    if !requirement.auth_required {
        return GuardOutcome::Allow;
    }

    let Some(identity) = auth.session.identity() else {
        return GuardOutcome::RedirectToLogin {
            from: requested.clone(),
        };
    };

    match requirement.access {
        Access::Public | Access::AnyAuthenticated => GuardOutcome::Allow,
        Access::Roles(allowed) if allowed.contains(&identity.role) => GuardOutcome::Allow,
        Access::Roles(_) => GuardOutcome::RedirectToHome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Credential, Identity};
    use crate::state::Session;

    fn session_with_role(role: Role) -> SessionState {
        SessionState {
            session: Session::authenticated(
                Identity {
                    id: "u1".to_string(),
                    name: "Ada".to_string(),
                    email: "ada@example.com".to_string(),
                    role,
                },
                Credential {
                    token: "tok".to_string(),
                },
            ),
            initializing: false,
        }
    }

    fn empty_session() -> SessionState {
        SessionState {
            session: Session::empty(),
            initializing: false,
        }
    }

    fn movie_admin() -> RouteRequirement {
        RouteRequirement::roles(&[Role::Admin, Role::Superadmin])
    }

    #[test]
    fn initializing_session_is_always_pending() {
        // P4: while restore is in flight nothing is allowed or redirected.
        let pending = SessionState::default();
        assert!(pending.initializing);

        for requirement in [
            RouteRequirement::public(),
            RouteRequirement::any_authenticated(),
            movie_admin(),
            RouteRequirement::roles(&[Role::Superadmin]),
        ] {
            assert_eq!(
                decide(&requirement, &Route::AdminMovies, &pending),
                GuardOutcome::Pending
            );
        }
    }

    #[test]
    fn roles_are_not_hierarchical() {
        // P5: superadmin is denied an admin-only screen unless listed.
        let requirement = RouteRequirement::roles(&[Role::Admin]);
        assert_eq!(
            decide(&requirement, &Route::AdminMovies, &session_with_role(Role::Superadmin)),
            GuardOutcome::RedirectToHome
        );
    }

    #[test]
    fn anonymous_user_is_sent_to_login() {
        // Scenario A, with the origin recorded for the return trip.
        assert_eq!(
            decide(&movie_admin(), &Route::AdminMovies, &empty_session()),
            GuardOutcome::RedirectToLogin {
                from: Route::AdminMovies
            }
        );
    }

    #[test]
    fn plain_user_is_sent_home() {
        // Scenario B
        assert_eq!(
            decide(&movie_admin(), &Route::AdminMovies, &session_with_role(Role::User)),
            GuardOutcome::RedirectToHome
        );
    }

    #[test]
    fn admin_is_allowed() {
        // Scenario C
        assert_eq!(
            decide(&movie_admin(), &Route::AdminMovies, &session_with_role(Role::Admin)),
            GuardOutcome::Allow
        );
    }

    #[test]
    fn superadmin_is_allowed_where_listed() {
        assert_eq!(
            decide(&movie_admin(), &Route::AdminMovies, &session_with_role(Role::Superadmin)),
            GuardOutcome::Allow
        );
    }

    #[test]
    fn public_screens_ignore_the_session() {
        // Scenario D
        let requirement = RouteRequirement::public();
        assert_eq!(
            decide(&requirement, &Route::Home, &empty_session()),
            GuardOutcome::Allow
        );
        assert_eq!(
            decide(&requirement, &Route::Home, &session_with_role(Role::User)),
            GuardOutcome::Allow
        );
    }

    #[test]
    fn any_authenticated_accepts_every_role() {
        let requirement = RouteRequirement::any_authenticated();
        for role in [Role::User, Role::Admin, Role::Superadmin] {
            assert_eq!(
                decide(&requirement, &Route::Home, &session_with_role(role)),
                GuardOutcome::Allow
            );
        }
        assert_eq!(
            decide(&requirement, &Route::Home, &empty_session()),
            GuardOutcome::RedirectToLogin { from: Route::Home }
        );
    }
}
