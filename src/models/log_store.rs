use mongodb::bson::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_i32(self) -> i32 {
        match self {
            SortDirection::Ascending => 1,
            SortDirection::Descending => -1,
        }
    }
}

/// The logging collection and its single index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogStoreSpec {
    pub database: String,
    pub collection: String,
    pub index_field: String,
    pub direction: SortDirection,
}

impl LogStoreSpec {
    pub fn index_keys(&self) -> Document {
        let mut keys = Document::new();
        keys.insert(self.index_field.clone(), self.direction.as_i32());
        keys
    }

    /// Name the server assigns when none is given, e.g. `uuid_-1`.
    pub fn index_name(&self) -> String {
        format!("{}_{}", self.index_field, self.direction.as_i32())
    }

    pub fn namespace(&self) -> String {
        format!("{}.{}", self.database, self.collection)
    }
}
