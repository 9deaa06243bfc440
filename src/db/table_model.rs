use crate::error::TrackerError;

pub trait TableModel: Sized {
    fn table_name() -> &'static str;
    fn from_row(row: &rusqlite::Row) -> Result<Self, TrackerError>;
}
