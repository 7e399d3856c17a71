pub mod form_state;
pub mod use_countdown;
pub mod use_group_wizard;

pub use form_state::*;
pub use use_countdown::*;
pub use use_group_wizard::*;
