use shared::constants::BRAND_NAME;
use shared::shared_group_questionnaire::compute_group_discount;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::components::CountdownBanner;
use crate::config::{get_asset_url, promo_deadline_ms};
use crate::{styles, Route};

const DISCOUNT_TIERS: [(u32, &str); 4] = [(4, "4–5"), (6, "6–9"), (10, "10–14"), (15, "15+")];

#[derive(Properties, PartialEq)]
struct FeatureCardProps {
    emoji: &'static str,
    title: &'static str,
    body: &'static str,
}

#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div class={classes!(styles::CARD, "hover:-translate-y-1", "transition-transform", "duration-300")}>
            <div class="text-4xl mb-3">{props.emoji}</div>
            <h3 class="text-lg font-semibold text-gray-900 dark:text-white">{props.title}</h3>
            <p class={classes!(styles::TEXT_BODY, "mt-2", "text-sm")}>{props.body}</p>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <CountdownBanner deadline_ms={promo_deadline_ms()} />
            <section class={styles::HERO_CONTAINER}>
                <div class={styles::HERO_CONTENT}>
                    <img
                        src={get_asset_url("/assets/hero-villa.webp")}
                        alt="Recovery villa overlooking the sea"
                        class="mx-auto mb-8 w-full max-w-3xl h-64 object-cover rounded-3xl shadow-2xl"
                    />
                    <h1 class={styles::HERO_TITLE}>{BRAND_NAME}</h1>
                    <p class={classes!(styles::TEXT_BODY, "text-xl", "mb-10")}>
                        {"Vetted specialists, five-star recovery and a concierge who handles everything in between."}
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <Link<Route> to={Route::Spin} classes={styles::BUTTON_PRIMARY}>{"🎡 Spin for a free perk"}</Link<Route>>
                        <Link<Route> to={Route::GroupTrip} classes={styles::BUTTON_SECONDARY}>{"👯 Plan a group trip"}</Link<Route>>
                    </div>
                </div>
            </section>

            <section class={styles::CONTAINER_LG}>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    <FeatureCard emoji="🩺" title="Vetted specialists" body="Board-certified surgeons, dentists and dermatologists we have met in person." />
                    <FeatureCard emoji="🏝️" title="Recovery in comfort" body="Private villas and partner resorts with nurses on call." />
                    <FeatureCard emoji="🧳" title="Door-to-door concierge" body="Flights, transfers and translators arranged for you." />
                </div>
            </section>

            <section class={styles::CONTAINER_LG}>
                <h2 class={classes!(styles::TEXT_H2, "text-center", "mb-6")}>{"Travel together, save together"}</h2>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    { for DISCOUNT_TIERS.iter().map(|(size, label)| html! {
                        <div class={classes!(styles::CARD, "text-center")}>
                            <div class="text-3xl font-bold text-rose-600 dark:text-rose-300">
                                {format!("{}%", compute_group_discount(*size))}
                            </div>
                            <div class={styles::TEXT_SMALL}>{format!("{} travellers", label)}</div>
                        </div>
                    }) }
                </div>
            </section>
        </>
    }
}
