use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор клиента. Присваивается удалённым хранилищем,
/// на стороне приложения никогда не генерируется.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(pub Uuid);

impl ClientId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ClientId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Клиент — строка таблицы `clients` удалённого хранилища.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,

    #[serde(flatten)]
    pub fields: NewClient,
}

impl Client {
    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Поля клиента без ID: тело вставки, тело обновления и буфер формы.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClient {
    pub custom_id: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
}

impl NewClient {
    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.custom_id.trim().is_empty() {
            return Err("Код клиента не может быть пустым".into());
        }
        if self.name.trim().is_empty() {
            return Err("Наименование не может быть пустым".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> NewClient {
        NewClient {
            custom_id: "C1".to_string(),
            name: "Dupont".to_string(),
            phone: "0102030405".to_string(),
            address: "1 Rue A".to_string(),
            city: "Paris".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_filled_form() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn test_validate_requires_custom_id_and_name() {
        let mut dto = filled();
        dto.custom_id = "   ".to_string();
        assert!(dto.validate().is_err());

        let mut dto = filled();
        dto.name = String::new();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_validate_allows_empty_contact_fields() {
        let mut dto = filled();
        dto.phone = String::new();
        dto.address = String::new();
        dto.city = String::new();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_client_deserializes_flat_row_json() {
        // Ровно та форма строки, которую возвращает табличный API.
        let json = r#"{
            "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
            "custom_id": "C1",
            "name": "Dupont",
            "phone": "0102030405",
            "address": "1 Rue A",
            "city": "Paris"
        }"#;

        let client: Client = serde_json::from_str(json).unwrap();
        assert_eq!(
            client.id.as_string(),
            "7c9e6679-7425-40de-944b-e07fc1f90ae7"
        );
        assert_eq!(client.fields.name, "Dupont");
        assert_eq!(client.fields.city, "Paris");

        // И обратно сериализуется без вложенного объекта.
        let back = serde_json::to_value(&client).unwrap();
        assert_eq!(back["custom_id"], "C1");
        assert!(back.get("fields").is_none());
    }
}
