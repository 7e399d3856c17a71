pub const BRAND_NAME: &str = "The Beauty Trip";

pub const STORAGE_KEY_VISITOR_COUNT: &str = "beauty_trip_visitor_count";
pub const STORAGE_KEY_VISITOR_ENTRY: &str = "beauty_trip_visitor_entry";
pub const STORAGE_KEY_PRIZE_WON: &str = "beauty_trip_prize_won";
pub const STORAGE_KEY_GROUP_SUMMARY: &str = "beauty_trip_group_summary";

// The 7777th visitor always lands on the top prize.
pub const SPECIAL_VISITOR_NUMBER: u64 = 7777;
pub const TOP_PRIZE_ID: &str = "free-trip";

pub const MIN_GROUP_SIZE: u32 = 2;
pub const MAX_GROUP_SIZE: u32 = 50;
pub const MIN_BUDGET_PER_PERSON: u32 = 800;
pub const DEFAULT_BUDGET_PER_PERSON: u32 = 3000;
pub const BUDGET_STEP: u32 = 100;

pub const INVALID_EMAIL_ERROR: &str = "Please enter a valid email address";
pub const INVALID_PHONE_ERROR: &str = "Please enter a valid phone number";
pub const NAME_REQUIRED_ERROR: &str = "Please tell us your name";
pub const INAPPROPRIATE_NAME_ERROR: &str = "Please use a different name";
pub const ALREADY_WON_ERROR: &str = "You have already claimed your prize on this device";
pub const STORAGE_ERROR: &str = "Your browser blocked storage. Please enable cookies and try again";
