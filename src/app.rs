use crate::components::NavbarComp;
use crate::model::storage;
use crate::model::{LocalRosterCommandHandler, RosterCommand, RosterCommandHandler, Session};
use crate::pages::{AssistsPage, HomePage, LoginPage, ScorersPage, StatsPage};
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let roster = use_state(storage::load_roster);
    let session = use_state(storage::load_session);

    let on_command = {
        let roster = roster.clone();
        Callback::from(move |command: RosterCommand| {
            let handler = LocalRosterCommandHandler;
            let mut next = (*roster).clone();
            match handler.handle_command(&mut next, command) {
                Ok(()) => {
                    storage::save_roster(&next);
                    roster.set(next);
                }
                Err(err) => log::error!("roster command failed: {err}"),
            }
        })
    };

    let on_session_change = {
        let session = session.clone();
        Callback::from(move |next: Session| {
            storage::save_session(&next);
            session.set(next);
        })
    };

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_: ()| {
            let mut next = *session;
            next.logout();
            storage::save_session(&next);
            session.set(next);
        })
    };

    let render = {
        let roster = roster.clone();
        let session = session.clone();
        let on_command = on_command.clone();
        let on_session_change = on_session_change.clone();
        Callback::from(move |route: Route| {
            let players = roster.players().to_vec();
            match route {
                Route::Home => html! {
                    <HomePage
                        {players}
                        is_admin={session.is_admin()}
                        on_command={on_command.clone()}
                    />
                },
                Route::Statistics => html! { <StatsPage {players} /> },
                Route::Scorers => html! { <ScorersPage {players} /> },
                Route::Assists => html! { <AssistsPage {players} /> },
                Route::Login => html! {
                    <LoginPage
                        session={*session}
                        on_session_change={on_session_change.clone()}
                    />
                },
                Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
            }
        })
    };

    html! {
        <HashRouter>
            <div class="futsal-app">
                <NavbarComp is_admin={session.is_admin()} on_logout={on_logout} />
                <main class="futsal-app__main">
                    <Switch<Route> render={render} />
                </main>
            </div>
        </HashRouter>
    }
}
