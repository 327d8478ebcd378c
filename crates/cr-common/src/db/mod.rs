pub mod catalog;
pub mod pool;
pub mod util;

pub use catalog::PgCatalog;
pub use pool::{DbPoolError, PgPool, create_pool_from_url};
