use crate::components::LeaderboardComp;
use crate::model::{Player, StatKind};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ScorersPageProps {
    pub players: Vec<Player>,
}

#[function_component(ScorersPage)]
pub fn scorers_page(props: &ScorersPageProps) -> Html {
    html! {
        <div>
            <h2 class="futsal-page__title">
                <i class="fa-solid fa-ranking-star"></i>{" Top scorers"}
            </h2>
            <LeaderboardComp
                players={props.players.clone()}
                kind={StatKind::Goals}
                value_heading="Total goals"
                empty_message="No goals recorded yet."
            />
        </div>
    }
}
