mod wheel_canvas;
mod wheel_utils;

use gloo_timers::future::TimeoutFuture;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use shared::shared_prize_wheel::{PrizeCatalog, SpinWheel, DEFAULT_CATALOG, SPIN_DURATION_MS};
use shared::visitor::{PrizeWonRecord, VisitorForm, VisitorRegistry, VisitorTicket};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::CountdownBanner;
use crate::config::{now_ms, promo_deadline_ms};
use crate::hooks::use_form_state;
use crate::storage::BrowserStore;
use crate::styles;
use wheel_canvas::WheelCanvas;
use wheel_utils::{odds_label, registration_message, visitor_badge, ResultCard, SpinButton};

fn registry() -> VisitorRegistry<BrowserStore> {
    VisitorRegistry::new(BrowserStore::local())
}

fn text_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

#[function_component(SpinWheelPage)]
pub fn spin_wheel_page() -> Html {
    let catalog: PrizeCatalog = DEFAULT_CATALOG.clone();

    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let form_state = use_form_state();

    let ticket = use_state(|| None::<VisitorTicket>);
    let wheel = use_state(SpinWheel::new);
    let rotation = use_state(|| 0.0f64);
    let already_won = use_state(|| None::<PrizeWonRecord>);

    // A device that already won sees its prize instead of the wheel
    {
        let already_won = already_won.clone();
        use_effect_with((), move |_| {
            match registry().won_prize() {
                Ok(record) => already_won.set(record),
                Err(e) => log::warn!("could not read prize flag: {}", e),
            }
            || ()
        });
    }

    let on_register = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let ticket = ticket.clone();
        let handle_error = form_state.handle_error.clone();
        let handle_success = form_state.handle_success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = VisitorForm::new(&name, &email, &phone);
            match registry().register(form, now_ms()) {
                Ok(new_ticket) => {
                    handle_success.emit(registration_message(&new_ticket));
                    ticket.set(Some(new_ticket));
                }
                Err(err) => {
                    log::warn!("visitor registration failed: {}", err);
                    handle_error.emit(err.user_message().to_string());
                }
            }
        })
    };

    let on_spin = {
        let catalog = catalog.clone();
        let ticket = ticket.clone();
        let wheel = wheel.clone();
        let rotation = rotation.clone();
        let handle_error = form_state.handle_error.clone();
        let clear = form_state.clear.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(current_ticket) = *ticket else {
                return;
            };
            if wheel.is_spinning || wheel.last_result.is_some() {
                return;
            }
            clear.emit(());

            let mut rng = SmallRng::from_entropy();
            let mut spinning = (*wheel).clone();
            let result = spinning.spin(&catalog, current_ticket.forced_winner(), &mut rng);

            if let Err(err) = registry().mark_won(&result.prize.id, &current_ticket) {
                log::warn!("could not persist prize flag: {}", err);
                handle_error.emit(err.user_message().to_string());
            }

            rotation.set(result.rotation);
            wheel.set(spinning.clone());

            let wheel = wheel.clone();
            spawn_local(async move {
                TimeoutFuture::new(SPIN_DURATION_MS).await;
                spinning.complete_spin(result);
                wheel.set(spinning);
            });
        })
    };

    let visitor_form = html! {
        <form class={styles::FORM} onsubmit={on_register}>
            <div>
                <label class={styles::TEXT_LABEL} for="visitor-name">{"Your name"}</label>
                <input id="visitor-name" class={styles::INPUT} type="text" value={(*name).clone()} oninput={text_input(&name)} />
            </div>
            <div>
                <label class={styles::TEXT_LABEL} for="visitor-email">{"Email"}</label>
                <input id="visitor-email" class={styles::INPUT} type="email" value={(*email).clone()} oninput={text_input(&email)} />
            </div>
            <div>
                <label class={styles::TEXT_LABEL} for="visitor-phone">{"Phone (optional)"}</label>
                <input id="visitor-phone" class={styles::INPUT} type="tel" value={(*phone).clone()} oninput={text_input(&phone)} />
            </div>
            <button type="submit" class={classes!(styles::BUTTON_PRIMARY, "w-full")}>{"Unlock my free spin"}</button>
        </form>
    };

    let body = if let Some(record) = (*already_won).clone() {
        match catalog.get(&record.prize_id) {
            Some(prize) => html! {
                <div class="text-center">
                    <p class={styles::TEXT_BODY}>{"You've already spun on this device. Here's your prize:"}</p>
                    <ResultCard prize={prize.clone()} forced={false} />
                </div>
            },
            None => html! {
                <p class={styles::TEXT_BODY}>{"You've already spun on this device."}</p>
            },
        }
    } else if let Some(current_ticket) = *ticket {
        html! {
            <div class="flex flex-col items-center">
                <span class={classes!(styles::BADGE, "mb-6")}>{visitor_badge(current_ticket.visitor_number)}</span>
                <WheelCanvas
                    catalog={catalog.clone()}
                    rotation={*rotation}
                    is_spinning={wheel.is_spinning}
                />
                <div class="w-full max-w-xs mt-8">
                    <SpinButton
                        is_spinning={wheel.is_spinning}
                        disabled={wheel.last_result.is_some()}
                        onclick={on_spin}
                    />
                </div>
                if let Some(result) = wheel.last_result.clone() {
                    <ResultCard prize={result.prize} forced={result.forced} />
                }
            </div>
        }
    } else {
        visitor_form
    };

    html! {
        <>
            <CountdownBanner deadline_ms={promo_deadline_ms()} />
            <div class={styles::CONTAINER_SM}>
                <div class="text-center mb-8">
                    <h1 class={styles::TEXT_H1}>{"Spin & Win"}</h1>
                    <p class={classes!(styles::TEXT_BODY, "mt-3")}>
                        {"One free spin per traveller. Every slice is a real perk for your beauty trip."}
                    </p>
                </div>
                <div class={styles::CARD}>
                    if !form_state.error.is_empty() {
                        <div class={classes!(styles::CARD_ERROR, "mb-4")}>{form_state.error.clone()}</div>
                    }
                    if !form_state.success.is_empty() {
                        <div class={classes!(styles::CARD_SUCCESS, "mb-4")}>{form_state.success.clone()}</div>
                    }
                    {body}
                </div>
                <details class="mt-6">
                    <summary class={classes!(styles::TEXT_SMALL, "cursor-pointer")}>{"Prize odds"}</summary>
                    <ul class="mt-2 space-y-1">
                        { for catalog.prizes().iter().map(|prize| html! {
                            <li class={classes!(styles::TEXT_SMALL, "flex", "justify-between")}>
                                <span>{format!("{} {}", prize.emoji, prize.label)}</span>
                                <span>{odds_label(catalog.probability(&prize.id).unwrap_or(0.0))}</span>
                            </li>
                        }) }
                    </ul>
                </details>
            </div>
        </>
    }
}
