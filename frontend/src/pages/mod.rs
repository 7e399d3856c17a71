pub mod home;
pub mod spin_wheel;
pub mod group_trip;
pub mod thanks;
