//! Navigation seam.
//!
//! The routing library itself is an external collaborator; the store only
//! ever pushes one of two named routes after an auth action.

/// Named routes the store navigates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Boards,
}

impl Route {
    /// The route name as the routing layer knows it.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Login => "login",
            Route::Boards => "boards",
        }
    }
}

pub trait Router: Send + Sync {
    /// Navigate to the given named route.
    fn push(&self, route: Route);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_names() {
        assert_eq!(Route::Login.name(), "login");
        assert_eq!(Route::Boards.name(), "boards");
    }
}
