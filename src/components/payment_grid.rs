use crate::model::{current_month_index, PaymentStatus, MONTHS_PER_YEAR, MONTH_LABELS};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PaymentGridProps {
    pub payments: [bool; MONTHS_PER_YEAR],
    pub editable: bool,
    #[prop_or_default]
    pub on_toggle: Callback<usize>,
}

fn slot_class(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Paid => "futsal-payments__slot--paid",
        PaymentStatus::Overdue => "futsal-payments__slot--overdue",
        PaymentStatus::NotYetDue => "futsal-payments__slot--upcoming",
    }
}

#[function_component(PaymentGridComp)]
pub fn payment_grid_comp(props: &PaymentGridProps) -> Html {
    let current_month = current_month_index();

    html! {
        <div class="futsal-payments">
            {for MONTH_LABELS.iter().enumerate().map(|(index, label)| {
                let status = PaymentStatus::evaluate(props.payments[index], index, current_month);
                let onclick = {
                    let on_toggle = props.on_toggle.clone();
                    Callback::from(move |_: MouseEvent| on_toggle.emit(index))
                };
                html! {
                    <button
                        class={classes!("futsal-payments__slot", slot_class(status))}
                        disabled={!props.editable}
                        {onclick}
                    >
                        {*label}
                    </button>
                }
            })}
        </div>
    }
}
