use yew::prelude::*;

use crate::hooks::use_countdown;

#[derive(Properties, PartialEq)]
pub struct CountdownBannerProps {
    pub deadline_ms: u64,
    #[prop_or(AttrValue::Static("Today's spin-to-win offer ends in"))]
    pub message: AttrValue,
}

#[function_component(CountdownBanner)]
pub fn countdown_banner(props: &CountdownBannerProps) -> Html {
    let parts = use_countdown(props.deadline_ms);

    let units = [
        (parts.hours, "hrs"),
        (parts.minutes, "min"),
        (parts.seconds, "sec"),
    ];

    html! {
        <div class="w-full bg-gradient-to-r from-rose-100 to-fuchsia-100 dark:from-rose-900/30 dark:to-fuchsia-900/30 border-b border-rose-200 dark:border-rose-800/30">
            <div class="max-w-7xl mx-auto px-4 py-3 flex flex-col sm:flex-row items-center justify-center gap-3">
                if parts.expired {
                    <span class="text-sm font-semibold text-rose-800 dark:text-rose-300">{parts.format_compact()}</span>
                } else {
                    <span class="text-sm font-semibold text-rose-800 dark:text-rose-300">{props.message.clone()}</span>
                    <div class="flex items-center gap-2">
                        { for units.iter().map(|(value, unit)| html! {
                            <div class="flex flex-col items-center px-3 py-1 rounded-lg bg-white/70 dark:bg-gray-900/60 shadow-sm">
                                <span class="text-lg font-bold tabular-nums text-rose-600 dark:text-rose-300">
                                    {format!("{:02}", value)}
                                </span>
                                <span class="text-[10px] uppercase tracking-wide text-gray-500">{*unit}</span>
                            </div>
                        }) }
                    </div>
                }
            </div>
        </div>
    }
}
