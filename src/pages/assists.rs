use crate::components::LeaderboardComp;
use crate::model::{Player, StatKind};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AssistsPageProps {
    pub players: Vec<Player>,
}

#[function_component(AssistsPage)]
pub fn assists_page(props: &AssistsPageProps) -> Html {
    html! {
        <div>
            <h2 class="futsal-page__title">
                <i class="fa-solid fa-shoe-prints"></i>{" Top assists"}
            </h2>
            <LeaderboardComp
                players={props.players.clone()}
                kind={StatKind::Assists}
                value_heading="Total assists"
                empty_message="No assists recorded yet."
            />
        </div>
    }
}
