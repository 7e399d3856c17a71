mod steps;

pub use steps::format_usd;

use shared::constants::STORAGE_KEY_GROUP_SUMMARY;
use shared::shared_group_questionnaire::{GroupBookingDraft, Step, WizardAction};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::StepProgress;
use crate::hooks::use_group_wizard;
use crate::storage::BrowserStore;
use crate::{styles, Route};
use steps::{BudgetStep, CelebrationStep, CoordinatorStep, ProceduresStep, SizeStep};

#[function_component(GroupTrip)]
pub fn group_trip() -> Html {
    let navigator = use_navigator();

    // The wizard only hands the draft over; keeping it for the thanks page is our job.
    let on_submit = {
        let navigator = navigator.clone();
        Callback::from(move |draft: GroupBookingDraft| {
            log::info!(
                "group trip request: {} travellers, ${} pp, gift: {}",
                draft.group_size,
                draft.budget_per_person,
                draft.gift_booking
            );
            if let Err(e) = BrowserStore::session().set_json(STORAGE_KEY_GROUP_SUMMARY, &draft) {
                log::warn!("could not keep group summary: {}", e);
            }
            if let Some(navigator) = &navigator {
                navigator.push(&Route::GroupTripThanks);
            }
        })
    };

    let on_exit = {
        let navigator = navigator.clone();
        Callback::from(move |_: ()| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    let wizard = use_group_wizard(on_submit, on_exit);
    let state = &wizard.state;
    let draft = state.draft.clone();
    let dispatch = wizard.dispatch.clone();

    let on_back = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(WizardAction::Retreat))
    };
    let on_next = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(WizardAction::Advance))
    };

    let content = match state.step {
        Step::Size => html! { <SizeStep draft={draft.clone()} dispatch={dispatch.clone()} /> },
        Step::Celebration => html! { <CelebrationStep draft={draft.clone()} dispatch={dispatch.clone()} /> },
        Step::Budget => html! { <BudgetStep draft={draft.clone()} dispatch={dispatch.clone()} /> },
        Step::Procedures => html! { <ProceduresStep draft={draft.clone()} dispatch={dispatch.clone()} /> },
        Step::Coordinator => html! { <CoordinatorStep draft={draft.clone()} dispatch={dispatch.clone()} /> },
    };

    let next_label = if state.step.is_last() { "Send my group request" } else { "Continue" };

    html! {
        <div class={styles::CONTAINER_SM}>
            <div class="text-center mb-6">
                <p class={classes!(styles::BADGE, "mb-3")}>{"Group trips"}</p>
                <h1 class={styles::TEXT_H2}>{state.step.title()}</h1>
            </div>
            <StepProgress
                step={state.step}
                percent={state.progress_percent()}
                group_size={draft.group_size}
                discount_percent={draft.discount_percent()}
            />
            <div class={styles::CARD}>
                {content}
            </div>
            <div class="mt-6 flex justify-between">
                <button type="button" class={styles::BUTTON_SECONDARY} onclick={on_back}>
                    {if state.step == Step::Size { "Cancel" } else { "Back" }}
                </button>
                <button
                    type="button"
                    class={styles::BUTTON_PRIMARY}
                    disabled={!state.can_advance()}
                    onclick={on_next}
                >
                    {next_label}
                </button>
            </div>
        </div>
    }
}
