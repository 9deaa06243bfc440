use crate::{config::AppConfig, db::Db};

/// Everything an operation needs, built once at startup and passed down
/// explicitly. The store handle lives here for the whole process.
pub struct AppContext {
    pub config: AppConfig,
    pub db: Db,
}
