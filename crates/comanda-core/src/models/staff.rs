use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Body of `POST /funcionarios/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveEmployee {
    pub name: String,
    pub email: String,
}

/// Body of `GET /funcionarios/disponivel-funcionarios`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffAvailability {
    #[serde(rename = "total_funcionarios")]
    pub total: u32,
    #[serde(rename = "funcionarios_disponiveis")]
    pub available: u32,
    /// Whether the team is large enough to take orders.
    #[serde(rename = "disponivel")]
    pub sufficient: bool,
    #[serde(rename = "funcionarios_ativos", default)]
    pub active: Vec<ActiveEmployee>,
}
