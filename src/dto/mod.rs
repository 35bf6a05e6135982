pub mod coordinate;
pub mod detail_query;
pub mod reading;

pub use coordinate::Coordinate;
pub use detail_query::DetailQuery;
pub use reading::Reading;
