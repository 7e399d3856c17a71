use shared::constants::{BUDGET_STEP, MAX_GROUP_SIZE, MIN_BUDGET_PER_PERSON, MIN_GROUP_SIZE};
use shared::shared_group_questionnaire::{
    CelebrationTag, GroupBookingDraft, ProcedureTag, Tag, WizardAction,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{TagOption, TagPicker};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct StepProps {
    pub draft: GroupBookingDraft,
    pub dispatch: Callback<WizardAction>,
}

fn parse_number(e: &InputEvent) -> u32 {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value().trim().parse().unwrap_or(0)
}

fn text_action(dispatch: &Callback<WizardAction>, make: fn(String) -> WizardAction) -> Callback<InputEvent> {
    let dispatch = dispatch.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        dispatch.emit(make(input.value()));
    })
}

fn tag_options<T: Tag>(all: &[T], selected: impl Fn(T) -> bool, label: impl Fn(T) -> &'static str) -> Vec<TagOption> {
    all.iter()
        .map(|&tag| TagOption {
            label: label(tag),
            selected: selected(tag),
            exclusive: tag.is_sentinel(),
        })
        .collect()
}

/// Inline note shown under the head-count picker at either bound.
pub fn group_size_notice(size: u32) -> Option<String> {
    if size < MIN_GROUP_SIZE {
        Some(format!("Group trips start at {} travellers.", MIN_GROUP_SIZE))
    } else if size >= MAX_GROUP_SIZE {
        Some(format!(
            "Online requests go up to {} travellers. Our concierge will plan bigger groups with you directly.",
            MAX_GROUP_SIZE
        ))
    } else {
        None
    }
}

/// Formats whole dollars for display, e.g. 12500 -> "$12,500".
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("${}", out)
}

#[function_component(SizeStep)]
pub fn size_step(props: &StepProps) -> Html {
    let size = props.draft.group_size;

    let set = {
        let dispatch = props.dispatch.clone();
        move |value: u32| dispatch.emit(WizardAction::SetGroupSize(value.min(MAX_GROUP_SIZE)))
    };
    let oninput = {
        let set = set.clone();
        Callback::from(move |e: InputEvent| set(parse_number(&e)))
    };
    let minus = {
        let set = set.clone();
        Callback::from(move |_: MouseEvent| set(size.saturating_sub(1)))
    };
    let plus = Callback::from(move |_: MouseEvent| set(size + 1));

    html! {
        <div class="flex flex-col items-center">
            <div class="flex items-center gap-4">
                <button type="button" class={styles::BUTTON_SECONDARY} onclick={minus}>{"−"}</button>
                <input
                    type="number"
                    min={MIN_GROUP_SIZE.to_string()}
                    max={MAX_GROUP_SIZE.to_string()}
                    class={classes!(styles::INPUT, "w-24", "text-center", "text-2xl", "mt-0")}
                    value={size.to_string()}
                    {oninput}
                />
                <button type="button" class={styles::BUTTON_SECONDARY} onclick={plus}>{"+"}</button>
            </div>
            if let Some(notice) = group_size_notice(size) {
                <p class={classes!(if size < MIN_GROUP_SIZE { styles::TEXT_ERROR } else { styles::TEXT_HINT }, "mt-3", "text-center")}>{notice}</p>
            }
        </div>
    }
}

#[function_component(CelebrationStep)]
pub fn celebration_step(props: &StepProps) -> Html {
    let draft = &props.draft;
    let options = tag_options(
        &CelebrationTag::ALL,
        |tag| draft.celebrations.contains(&tag),
        CelebrationTag::label,
    );
    let on_toggle = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |index: usize| {
            dispatch.emit(WizardAction::ToggleCelebration(CelebrationTag::ALL[index]));
        })
    };

    html! {
        <div>
            <TagPicker {options} {on_toggle} />
            if draft.celebrations.contains(&CelebrationTag::Custom) {
                <div class="mt-6">
                    <label class={styles::TEXT_LABEL} for="custom-celebration">{"Tell us about it"}</label>
                    <input
                        id="custom-celebration"
                        type="text"
                        class={styles::INPUT}
                        placeholder="Promotion, reunion, new job..."
                        value={draft.custom_celebration.clone()}
                        oninput={text_action(&props.dispatch, WizardAction::SetCustomCelebration)}
                    />
                </div>
            }
        </div>
    }
}

#[function_component(BudgetStep)]
pub fn budget_step(props: &StepProps) -> Html {
    let draft = &props.draft;
    let estimate = draft.estimate();
    let oninput = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: InputEvent| dispatch.emit(WizardAction::SetBudget(parse_number(&e))))
    };

    html! {
        <div>
            <div class="text-center text-4xl font-bold text-rose-600 dark:text-rose-300 mb-4">
                {format_usd(u64::from(draft.budget_per_person))}
                <span class={styles::TEXT_SMALL}>{" / person"}</span>
            </div>
            <input
                type="range"
                class="w-full accent-rose-500"
                min={MIN_BUDGET_PER_PERSON.to_string()}
                max="15000"
                step={BUDGET_STEP.to_string()}
                value={draft.budget_per_person.to_string()}
                {oninput}
            />
            <div class="mt-6 grid grid-cols-3 gap-3 text-center">
                <div>
                    <div class={styles::TEXT_SMALL}>{"Group total"}</div>
                    <div class="font-semibold">{format_usd(estimate.subtotal)}</div>
                </div>
                <div>
                    <div class={styles::TEXT_SMALL}>{format!("You save ({}%)", estimate.discount_percent)}</div>
                    <div class="font-semibold text-green-600">{format_usd(estimate.savings)}</div>
                </div>
                <div>
                    <div class={styles::TEXT_SMALL}>{"Estimated"}</div>
                    <div class="font-semibold">{format_usd(estimate.total)}</div>
                </div>
            </div>
            if draft.budget_per_person < MIN_BUDGET_PER_PERSON {
                <p class={classes!(styles::TEXT_ERROR, "mt-3")}>
                    {format!("Packages start at {} per person.", format_usd(u64::from(MIN_BUDGET_PER_PERSON)))}
                </p>
            }
        </div>
    }
}

#[function_component(ProceduresStep)]
pub fn procedures_step(props: &StepProps) -> Html {
    let draft = &props.draft;
    let options = tag_options(
        &ProcedureTag::ALL,
        |tag| draft.procedures.contains(&tag),
        ProcedureTag::label,
    );
    let on_toggle = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |index: usize| {
            dispatch.emit(WizardAction::ToggleProcedure(ProcedureTag::ALL[index]));
        })
    };

    html! {
        <div>
            <p class={classes!(styles::TEXT_SMALL, "mb-4")}>{"Pick everything your group is curious about."}</p>
            <TagPicker {options} {on_toggle} />
        </div>
    }
}

#[function_component(CoordinatorStep)]
pub fn coordinator_step(props: &StepProps) -> Html {
    let draft = &props.draft;
    let on_gift = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatch.emit(WizardAction::SetGiftBooking(input.checked()));
        })
    };

    html! {
        <div class="space-y-4">
            <div>
                <label class={styles::TEXT_LABEL} for="coordinator-name">{"Full name"}</label>
                <input id="coordinator-name" type="text" class={styles::INPUT}
                    value={draft.coordinator_name.clone()}
                    oninput={text_action(&props.dispatch, WizardAction::SetCoordinatorName)} />
            </div>
            <div>
                <label class={styles::TEXT_LABEL} for="coordinator-email">{"Email"}</label>
                <input id="coordinator-email" type="email" class={styles::INPUT}
                    value={draft.coordinator_email.clone()}
                    oninput={text_action(&props.dispatch, WizardAction::SetCoordinatorEmail)} />
            </div>
            <div>
                <label class={styles::TEXT_LABEL} for="coordinator-phone">{"Phone"}</label>
                <input id="coordinator-phone" type="tel" class={styles::INPUT}
                    value={draft.coordinator_phone.clone()}
                    oninput={text_action(&props.dispatch, WizardAction::SetCoordinatorPhone)} />
            </div>
            <label class="flex items-center gap-3 mt-2">
                <input type="checkbox" class="h-4 w-4 accent-rose-500" checked={draft.gift_booking} onchange={on_gift} />
                <span class={styles::TEXT_BODY}>{"This trip is a gift. Keep it a surprise!"}</span>
            </label>
        </div>
    }
}
