use serde::{Deserialize, Serialize};

/// Province model representing Indonesian provinces (provinsi)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Province {
    pub id: i64,
    pub name: String,
}
