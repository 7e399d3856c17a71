pub mod constants;
pub mod countdown;
pub mod shared_group_questionnaire;
pub mod shared_prize_wheel;
pub mod validation;
pub mod visitor;
