pub mod card;
pub mod lookup;
pub mod recent;
