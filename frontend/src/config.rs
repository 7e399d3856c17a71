use shared::countdown::Countdown;
use web_sys::window;

const PRODUCTION_HOST: &str = "thebeautytrip.com";
const ASSET_CDN: &str = "https://cdn.thebeautytrip.com";

pub fn is_production() -> bool {
    window()
        .and_then(|w| w.location().host().ok())
        .map_or(false, |host| host.contains(PRODUCTION_HOST))
}

pub fn get_asset_url(path: &str) -> String {
    if path.starts_with("http") {
        path.to_string()
    } else if is_production() {
        format!("{}{}", ASSET_CDN, path)
    } else {
        // Local builds serve assets from the trunk dist folder
        path.to_string()
    }
}

pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// End of the current daily promo window.
pub fn promo_deadline_ms() -> u64 {
    Countdown::next_daily_reset(now_ms())
}
