pub mod badge;
pub mod button;
pub mod card;
pub mod icons;
pub mod navigation;
