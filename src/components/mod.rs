pub mod alerts;
pub mod card_layout;
pub mod copy;
pub mod loading;
pub mod svg;
