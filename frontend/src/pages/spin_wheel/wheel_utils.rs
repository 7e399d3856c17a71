use shared::shared_prize_wheel::Prize;
use shared::visitor::VisitorTicket;
use yew::prelude::*;

use crate::styles;

/// "1 in 20" style odds for a probability in (0, 1].
pub fn odds_label(probability: f64) -> String {
    if probability <= 0.0 {
        return "never".to_string();
    }
    let one_in = (1.0 / probability).round().max(1.0) as u64;
    format!("1 in {}", one_in)
}

pub fn visitor_badge(visitor_number: u64) -> String {
    let suffix = match (visitor_number % 10, visitor_number % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("You are our {}{} visitor", visitor_number, suffix)
}

pub fn registration_message(ticket: &VisitorTicket) -> String {
    if ticket.is_special {
        format!("Visitor #{}! Something special is waiting on the wheel.", ticket.visitor_number)
    } else {
        "You're in! Your free spin is ready.".to_string()
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultCardProps {
    pub prize: Prize,
    pub forced: bool,
}

#[function_component(ResultCard)]
pub fn result_card(props: &ResultCardProps) -> Html {
    let prize = &props.prize;
    html! {
        <div class="mt-8 flex flex-col items-center text-center animate-bounce-in">
            <div
                class="px-8 py-5 rounded-2xl text-white shadow-xl border-2 border-white/60"
                style={format!("background: {};", prize.color)}
            >
                <div class="text-4xl mb-2">{prize.emoji.clone()}</div>
                <div class="text-2xl font-extrabold tracking-wide">{prize.label.clone()}</div>
                <div class="text-sm uppercase opacity-90">{prize.sub_label.clone()}</div>
            </div>
            if props.forced {
                <p class="mt-3 text-sm font-semibold text-amber-600">{"🌟 Lucky visitor! You hit our grand prize."}</p>
            }
            <p class={classes!(styles::TEXT_BODY, "mt-4", "max-w-md")}>{prize.description.clone()}</p>
            if prize.requires_booking {
                <p class={styles::TEXT_HINT}>{"Redeemable with a confirmed trip booking. Our concierge will email you the details."}</p>
            } else {
                <p class={styles::TEXT_HINT}>{"Your code is on its way to your inbox."}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub disabled: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let text = if props.is_spinning { "Spinning..." } else { "Spin the wheel" };
    let is_disabled = props.is_spinning || props.disabled;

    html! {
        <button
            type="button"
            onclick={props.onclick.clone()}
            disabled={is_disabled}
            class={classes!(
                styles::BUTTON_PRIMARY,
                "w-full",
                "text-lg",
                "py-4",
                (!is_disabled).then_some("animate-pulse-subtle"),
            )}
        >
            {text}
        </button>
    }
}
