use crate::components::AvatarComp;
use crate::model::Player;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PlayerCardProps {
    pub player: Player,
    pub on_select: Callback<Player>,
}

#[function_component(PlayerCardComp)]
pub fn player_card_comp(props: &PlayerCardProps) -> Html {
    let onclick = {
        let player = props.player.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(player.clone()))
    };

    let player = &props.player;

    html! {
        <div class="futsal-player-card" {onclick}>
            <AvatarComp
                player_id={player.id}
                photo_url={player.photo_url.clone()}
                alt={player.name.clone()}
            />
            <h3 class="futsal-player-card__name">{&player.name}</h3>
            <p class="futsal-player-card__position">{player.position.label()}</p>
            <div class="futsal-player-card__summary">
                <span><i class="fa-solid fa-futbol"></i>{format!(" {}", player.stats.goals)}</span>
                <span><i class="fa-solid fa-shoe-prints"></i>{format!(" {}", player.stats.assists)}</span>
                <span><i class="fa-solid fa-square"></i>{format!(" {}", player.stats.absences)}</span>
            </div>
        </div>
    }
}
