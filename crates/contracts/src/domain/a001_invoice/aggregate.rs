use serde::{Deserialize, Serialize};

// ============================================================================
// Parts
// ============================================================================

/// Посылка, для которой выписывается счёт
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageSummary {
    pub tracking_code: String,
    pub label: String,
    pub weight_kg: f64,
    pub product_type: String,
    pub state: String,
}

/// Named point with coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// Груз (cargaison), в составе которого едет посылка
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentSummary {
    pub number: String,
    #[serde(rename = "type")]
    pub shipment_type: String,
    pub global_state: String,
    pub progress_state: String,
    #[serde(rename = "originPlace")]
    pub origin: Place,
    #[serde(rename = "destinationPlace")]
    pub destination: Place,
    pub distance_km: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SenderInfo {
    pub last_name: String,
    pub first_name: String,
    pub phone: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl SenderInfo {
    /// Email, если он действительно указан (пустая строка считается отсутствием)
    pub fn email(&self) -> Option<&str> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientInfo {
    pub last_name: String,
    pub first_name: String,
    pub phone: String,
    pub address: String,
}

// ============================================================================
// Invoice record
// ============================================================================

/// Полный набор данных для одного счёта.
///
/// Запись приходит от вызывающего кода уже проверенной и отформатированной;
/// презентер её только читает.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceData {
    pub package: PackageSummary,
    pub shipment: ShipmentSummary,
    pub sender: SenderInfo,
    pub recipient: RecipientInfo,
    pub computed_price: f64,
}

impl InvoiceData {
    /// Разобрать запись из JSON (camelCase, как её отдаёт JS-слой)
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid invoice data: {}", e))
    }
}
