use crate::components::AvatarComp;
use crate::model::{ranking, Player, StatKind};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LeaderboardProps {
    pub players: Vec<Player>,
    pub kind: StatKind,
    pub value_heading: AttrValue,
    pub empty_message: AttrValue,
}

#[function_component(LeaderboardComp)]
pub fn leaderboard_comp(props: &LeaderboardProps) -> Html {
    if props.players.is_empty() {
        return html! {
            <div class="futsal-leaderboard">
                <div class="futsal-page__placeholder">{props.empty_message.clone()}</div>
            </div>
        };
    }

    let ranked = ranking(&props.players, props.kind);

    html! {
        <div class="futsal-leaderboard">
            <table class="futsal-leaderboard__table">
                <thead>
                    <tr>
                        <th>{"Rank"}</th>
                        <th>{"Player"}</th>
                        <th>{props.value_heading.clone()}</th>
                    </tr>
                </thead>
                <tbody>
                    {for ranked.iter().enumerate().map(|(index, player)| html! {
                        <tr key={player.id.to_string()}>
                            <td class="futsal-leaderboard__rank">{format!("#{}", index + 1)}</td>
                            <td>
                                <div class="futsal-leaderboard__player">
                                    <AvatarComp
                                        player_id={player.id}
                                        photo_url={player.photo_url.clone()}
                                        alt={player.name.clone()}
                                        small={true}
                                    />
                                    <div>
                                        <div>{&player.name}</div>
                                        <small>{player.position.label()}</small>
                                    </div>
                                </div>
                            </td>
                            <td>
                                <span class="futsal-leaderboard__value">
                                    {player.stats.get(props.kind)}
                                </span>
                            </td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
