pub mod auth;
pub mod layout;
pub mod lead_card;
pub mod lead_form;
pub mod toast;
