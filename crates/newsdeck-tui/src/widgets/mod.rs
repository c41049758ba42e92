mod deck;
mod status_bar;

pub use deck::DeckWidget;
pub use status_bar::StatusBarWidget;
