use yew_router::prelude::*;

#[derive(Routable, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/general-statistics")]
    Statistics,
    #[at("/top-scorers")]
    Scorers,
    #[at("/top-assists")]
    Assists,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_resolve() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/general-statistics"), Some(Route::Statistics));
        assert_eq!(Route::recognize("/top-scorers"), Some(Route::Scorers));
        assert_eq!(Route::recognize("/top-assists"), Some(Route::Assists));
        assert_eq!(Route::recognize("/login"), Some(Route::Login));
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(Route::recognize("/no-such-page"), Some(Route::NotFound));
    }
}
