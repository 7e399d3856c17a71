use shared::shared_group_questionnaire::{next_discount_tier, Step};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct StepProgressProps {
    pub step: Step,
    pub percent: u32,
    pub group_size: u32,
    pub discount_percent: u32,
}

#[function_component(StepProgress)]
pub fn step_progress(props: &StepProgressProps) -> Html {
    let hint = next_discount_tier(props.group_size).map(|(size, pct)| {
        let more = size - props.group_size;
        format!(
            "Add {} more {} to unlock {}% off",
            more,
            if more == 1 { "traveller" } else { "travellers" },
            pct
        )
    });

    html! {
        <div class="mb-8">
            <div class="flex items-center justify-between mb-2">
                <span class={styles::TEXT_SMALL}>
                    {format!("Step {} of {}", props.step.number(), Step::ALL.len())}
                </span>
                if props.discount_percent > 0 {
                    <span class={styles::BADGE}>{format!("🎉 {}% group discount", props.discount_percent)}</span>
                }
            </div>
            <div class="h-2 w-full bg-rose-100 dark:bg-gray-700 rounded-full overflow-hidden">
                <div
                    class="h-full bg-gradient-to-r from-rose-500 to-fuchsia-500 transition-all duration-500"
                    style={format!("width: {}%", props.percent.max(4))}
                />
            </div>
            if props.step == Step::Size {
                if let Some(hint) = hint {
                    <p class={styles::TEXT_HINT}>{hint}</p>
                }
            }
        </div>
    }
}
