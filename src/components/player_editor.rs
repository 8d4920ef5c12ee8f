use crate::components::{PaymentGridComp, StatCounterComp};
use crate::model::{Player, PlayerId, Position, StatKind};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Fixed at open time; closing and reopening the panel is the only way to
/// switch between creating and editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    New,
    Edit(PlayerId),
}

#[derive(Properties, PartialEq, Clone)]
pub struct PlayerEditorProps {
    pub mode: EditorMode,
    /// Initial draft: a blank record in `New` mode, a copy of the selected
    /// player in `Edit` mode.
    pub player: Player,
    pub is_admin: bool,
    pub on_save: Callback<Player>,
    pub on_delete: Callback<PlayerId>,
    pub on_close: Callback<()>,
}

#[function_component(PlayerEditorComp)]
pub fn player_editor_comp(props: &PlayerEditorProps) -> Html {
    let draft = use_state(|| props.player.clone());
    let is_admin = props.is_admin;

    let title = if !is_admin {
        "Player profile"
    } else {
        match props.mode {
            EditorMode::New => "New player",
            EditorMode::Edit(_) => "Edit player",
        }
    };

    let on_name_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.name = input.value();
            draft.set(next);
        })
    };

    let on_position_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(position) = Position::from_label(&select.value()) {
                let mut next = (*draft).clone();
                next.position = position;
                draft.set(next);
            }
        })
    };

    let on_photo_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.photo_url = input.value();
            draft.set(next);
        })
    };

    let on_increment = {
        let draft = draft.clone();
        Callback::from(move |kind: StatKind| {
            let mut next = (*draft).clone();
            next.stats.increment(kind);
            draft.set(next);
        })
    };

    let on_decrement = {
        let draft = draft.clone();
        Callback::from(move |kind: StatKind| {
            let mut next = (*draft).clone();
            next.stats.decrement(kind);
            draft.set(next);
        })
    };

    let on_toggle_payment = {
        let draft = draft.clone();
        Callback::from(move |index: usize| {
            let mut next = (*draft).clone();
            next.payments[index] = !next.payments[index];
            draft.set(next);
        })
    };

    let on_save = {
        let draft = draft.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| on_save.emit((*draft).clone()))
    };

    let on_delete = {
        let mode = props.mode;
        let on_delete = props.on_delete.clone();
        Callback::from(move |_: MouseEvent| {
            if let EditorMode::Edit(player_id) = mode {
                on_delete.emit(player_id);
            }
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="futsal-editor">
            <div class="futsal-editor__panel">
                <button class="futsal-editor__close" onclick={on_close}>
                    <i class="fa-solid fa-xmark"></i>
                </button>
                <h2 class="futsal-editor__title">{title}</h2>

                <label class="futsal-editor__label">{"Name"}</label>
                if is_admin {
                    <input
                        class="futsal-editor__input"
                        type="text"
                        value={draft.name.clone()}
                        oninput={on_name_input}
                        placeholder="e.g. Yan"
                    />
                } else {
                    <div class="futsal-editor__readonly">
                        {if draft.name.is_empty() { "---" } else { draft.name.as_str() }}
                    </div>
                }

                <label class="futsal-editor__label">{"Position"}</label>
                if is_admin {
                    <select class="futsal-editor__select" onchange={on_position_change}>
                        {for Position::ALL.iter().map(|position| html! {
                            <option
                                value={position.label()}
                                selected={*position == draft.position}
                            >
                                {position.label()}
                            </option>
                        })}
                    </select>
                } else {
                    <div class="futsal-editor__readonly">{draft.position.label()}</div>
                }

                if is_admin {
                    <label class="futsal-editor__label">{"Photo URL"}</label>
                    <input
                        class="futsal-editor__input"
                        type="text"
                        value={draft.photo_url.clone()}
                        oninput={on_photo_input}
                        placeholder="img/players/photo.jpg"
                    />
                }

                {for StatKind::ALL.iter().map(|kind| html! {
                    <StatCounterComp
                        kind={*kind}
                        value={draft.stats.get(*kind)}
                        editable={is_admin}
                        on_increment={on_increment.clone()}
                        on_decrement={on_decrement.clone()}
                    />
                })}

                <label class="futsal-editor__label">{"Monthly dues"}</label>
                <PaymentGridComp
                    payments={draft.payments}
                    editable={is_admin}
                    on_toggle={on_toggle_payment}
                />

                if is_admin {
                    <div class="futsal-editor__actions">
                        <button class="futsal-editor__save" onclick={on_save}>
                            {"Save"}
                        </button>
                        if matches!(props.mode, EditorMode::Edit(_)) {
                            <button class="futsal-editor__delete" onclick={on_delete}>
                                {"Delete"}
                            </button>
                        }
                    </div>
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_mode_carries_the_player_id() {
        let player = Player::new();
        let mode = EditorMode::Edit(player.id);
        assert!(matches!(mode, EditorMode::Edit(id) if id == player.id));
    }

    #[test]
    fn modes_are_distinct() {
        assert_ne!(EditorMode::New, EditorMode::Edit(Player::new().id));
    }
}
