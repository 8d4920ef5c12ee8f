use crate::components::{EditorMode, PlayerCardComp, PlayerEditorComp};
use crate::model::{Player, PlayerId, RosterCommand};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HomePageProps {
    pub players: Vec<Player>,
    pub is_admin: bool,
    pub on_command: Callback<RosterCommand>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    // Mode and initial draft are fixed together when the panel opens.
    let editor = use_state(|| None::<(EditorMode, Player)>);

    let open_add = {
        let editor = editor.clone();
        Callback::from(move |_: MouseEvent| {
            editor.set(Some((EditorMode::New, Player::new())));
        })
    };

    let open_edit = {
        let editor = editor.clone();
        Callback::from(move |player: Player| {
            editor.set(Some((EditorMode::Edit(player.id), player)));
        })
    };

    let on_close = {
        let editor = editor.clone();
        Callback::from(move |_: ()| editor.set(None))
    };

    let on_save = {
        let editor = editor.clone();
        let on_command = props.on_command.clone();
        Callback::from(move |player: Player| {
            let command = match *editor {
                Some((EditorMode::New, _)) => RosterCommand::AddPlayer { player },
                _ => RosterCommand::UpdatePlayer { player },
            };
            on_command.emit(command);
            editor.set(None);
        })
    };

    let on_delete = {
        let editor = editor.clone();
        let on_command = props.on_command.clone();
        Callback::from(move |player_id: PlayerId| {
            on_command.emit(RosterCommand::RemovePlayer { player_id });
            editor.set(None);
        })
    };

    html! {
        <div class="futsal-roster">
            if props.is_admin {
                <div class="futsal-roster__actions">
                    <button class="futsal-roster__add" onclick={open_add}>
                        <i class="fa-solid fa-plus"></i>{" New player"}
                    </button>
                </div>
            }

            if props.players.is_empty() {
                <div class="futsal-page__placeholder">{"No players registered yet."}</div>
            } else {
                <div class="futsal-roster__grid">
                    {for props.players.iter().map(|player| html! {
                        <PlayerCardComp
                            key={player.id.to_string()}
                            player={player.clone()}
                            on_select={open_edit.clone()}
                        />
                    })}
                </div>
            }

            if let Some((mode, player)) = (*editor).clone() {
                <PlayerEditorComp
                    {mode}
                    {player}
                    is_admin={props.is_admin}
                    on_save={on_save.clone()}
                    on_delete={on_delete.clone()}
                    on_close={on_close.clone()}
                />
            }
        </div>
    }
}
