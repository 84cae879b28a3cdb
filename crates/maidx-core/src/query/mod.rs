//! Filter state and its query-string form.
//!
//! - `FilterCriteria` - search, badge, difficulty and page state
//! - `SearchField`, `DsRange` - criteria components
//! - `ViewState` - criteria plus the presentation-owned expanded set

mod codec;
mod criteria;
mod view;

pub use codec::param;
pub use criteria::*;
pub use view::*;
