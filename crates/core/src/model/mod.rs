mod card;
mod ids;
mod review;
mod set;

pub use card::{Card, CardSource};
pub use ids::{CardId, ParseIdError, SetId};
pub use review::{ReviewEntry, ReviewError, ReviewQuality, ReviewState};
pub use set::{CardSet, SetStats};
