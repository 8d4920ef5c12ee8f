use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NavbarProps {
    pub is_admin: bool,
    pub on_logout: Callback<()>,
}

#[function_component(NavbarComp)]
pub fn navbar_comp(props: &NavbarProps) -> Html {
    let route = use_route::<Route>().unwrap_or(Route::Home);
    let navigator = use_navigator();

    let link_class = |target: Route| {
        classes!(
            "futsal-navbar__link",
            (route == target).then_some("futsal-navbar__link--active")
        )
    };

    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| {
            on_logout.emit(());
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    html! {
        <nav class="futsal-navbar">
            <Link<Route> to={Route::Home} classes={link_class(Route::Home)}>
                <i class="fa-solid fa-house"></i>{" Home"}
            </Link<Route>>
            <Link<Route> to={Route::Statistics} classes={link_class(Route::Statistics)}>
                <i class="fa-solid fa-chart-line"></i>{" Statistics"}
            </Link<Route>>
            <Link<Route> to={Route::Scorers} classes={link_class(Route::Scorers)}>
                <i class="fa-solid fa-futbol"></i>{" Top Scorers"}
            </Link<Route>>
            <Link<Route> to={Route::Assists} classes={link_class(Route::Assists)}>
                <i class="fa-solid fa-bullseye"></i>{" Top Assists"}
            </Link<Route>>
            if props.is_admin {
                <button class="futsal-navbar__link futsal-navbar__logout" onclick={on_logout}>
                    <i class="fa-solid fa-right-from-bracket"></i>{" Log out"}
                </button>
            } else {
                <Link<Route> to={Route::Login} classes={classes!("futsal-navbar__link", "futsal-navbar__admin")}>
                    <i class="fa-solid fa-user-shield"></i>{" Admin"}
                </Link<Route>>
            }
        </nav>
    }
}
