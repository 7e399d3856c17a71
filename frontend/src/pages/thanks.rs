use shared::constants::STORAGE_KEY_GROUP_SUMMARY;
use shared::shared_group_questionnaire::GroupBookingDraft;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::pages::group_trip::format_usd;
use crate::storage::BrowserStore;
use crate::{styles, Route};

#[function_component(GroupTripThanks)]
pub fn group_trip_thanks() -> Html {
    let draft = use_state(|| BrowserStore::session().get_json::<GroupBookingDraft>(STORAGE_KEY_GROUP_SUMMARY));

    let summary = match &*draft {
        Some(draft) => {
            let estimate = draft.estimate();
            html! {
                <div class="mt-6 text-left space-y-2">
                    <p class={styles::TEXT_BODY}>{format!("Travellers: {}", draft.group_size)}</p>
                    <p class={styles::TEXT_BODY}>
                        {format!("Estimated total: {} ({}% group discount applied)", format_usd(estimate.total), estimate.discount_percent)}
                    </p>
                    if draft.gift_booking {
                        <p class={styles::TEXT_BODY}>{"🎁 We'll keep it a surprise."}</p>
                    }
                    <p class={styles::TEXT_SMALL}>
                        {format!("We'll reach {} at {} within one business day.", draft.coordinator_name.trim(), draft.coordinator_email.trim())}
                    </p>
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <div class={styles::CONTAINER_SM}>
            <div class={classes!(styles::CARD, "text-center")}>
                <div class="text-5xl mb-4">{"💖"}</div>
                <h1 class={styles::TEXT_H2}>{"Your group request is in!"}</h1>
                {summary}
                <Link<Route> to={Route::Home} classes={classes!(styles::BUTTON_PRIMARY, "mt-8")}>
                    {"Back to home"}
                </Link<Route>>
            </div>
        </div>
    }
}
