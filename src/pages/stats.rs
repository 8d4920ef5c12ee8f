use crate::components::AvatarComp;
use crate::model::{Player, StatKind};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPageProps {
    pub players: Vec<Player>,
}

#[function_component(StatsPage)]
pub fn stats_page(props: &StatsPageProps) -> Html {
    html! {
        <div class="futsal-stats">
            <h2 class="futsal-page__title">{"General statistics"}</h2>
            if props.players.is_empty() {
                <div class="futsal-page__placeholder">{"Add players to see their statistics."}</div>
            } else {
                <div class="futsal-stats__grid">
                    {for props.players.iter().map(|player| html! {
                        <div class="futsal-player-card" key={player.id.to_string()}>
                            <AvatarComp
                                player_id={player.id}
                                photo_url={player.photo_url.clone()}
                                alt={player.name.clone()}
                            />
                            <h4 class="futsal-player-card__name">{&player.name}</h4>
                            <p class="futsal-player-card__position">{player.position.label()}</p>
                            <div class="futsal-stat-card__counters">
                                {for StatKind::ALL.iter().map(|kind| html! {
                                    <div class="futsal-stat-card__counter">
                                        <span class="futsal-stat-card__value">
                                            {player.stats.get(*kind)}
                                        </span>
                                        <span class="futsal-stat-card__label">{kind.label()}</span>
                                    </div>
                                })}
                            </div>
                        </div>
                    })}
                </div>
            }
        </div>
    }
}
