pub mod numeric;
pub mod quote;
pub mod rate_card;
pub mod view;

pub use quote::{QuoteEngine, QuoteInput, QuoteResult, StandardQuote};
pub use rate_card::{Plan, RateCard, RateCardError};
pub use view::QuoteView;
