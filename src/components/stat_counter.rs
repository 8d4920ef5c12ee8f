use crate::model::StatKind;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatCounterProps {
    pub kind: StatKind,
    pub value: u32,
    pub editable: bool,
    #[prop_or_default]
    pub on_increment: Callback<StatKind>,
    #[prop_or_default]
    pub on_decrement: Callback<StatKind>,
}

#[function_component(StatCounterComp)]
pub fn stat_counter_comp(props: &StatCounterProps) -> Html {
    let kind = props.kind;

    let on_decrement = {
        let on_decrement = props.on_decrement.clone();
        Callback::from(move |_: MouseEvent| on_decrement.emit(kind))
    };

    let on_increment = {
        let on_increment = props.on_increment.clone();
        Callback::from(move |_: MouseEvent| on_increment.emit(kind))
    };

    html! {
        <div class="futsal-counter">
            <span class="futsal-counter__label">{kind.label()}</span>
            <div class="futsal-counter__controls">
                if props.editable {
                    <button class="futsal-counter__button" onclick={on_decrement}>
                        <i class="fa-solid fa-minus"></i>
                    </button>
                }
                <span class="futsal-counter__value">{props.value}</span>
                if props.editable {
                    <button class="futsal-counter__button" onclick={on_increment}>
                        <i class="fa-solid fa-plus"></i>
                    </button>
                }
            </div>
        </div>
    }
}
