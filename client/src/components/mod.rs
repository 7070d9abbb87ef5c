//! Reusable UI components.

pub mod member_card;
pub mod member_profile_modal;
pub mod nav_bar;
pub mod recommendation_strip;
