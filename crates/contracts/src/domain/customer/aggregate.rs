use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::letter_gap::missing_letter;

// ============================================================================
// Canonical entity
// ============================================================================

/// Canonical customer record used throughout the UI, regardless of which
/// raw backend shape produced it. Constructed fresh on every
/// normalization; never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,

    #[serde(rename = "fullName")]
    pub full_name: String,

    pub email: String,

    #[serde(rename = "birthDate")]
    pub birth_date: String,

    pub sales: Vec<Sale>,

    /// First letter of the alphabet absent from the name (display badge).
    #[serde(rename = "missingLetter")]
    pub missing_letter: char,
}

/// Single sale as the backend reports it, order preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub date: String,
    pub amount: f64,
}

impl Customer {
    /// Fresh client-side id for records the backend ships without one.
    /// Only a placeholder for a missing backend id, never a general
    /// identity scheme.
    pub fn generated_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Build the record for a customer the backend just created. The
    /// backend-assigned id wins; sales start empty.
    pub fn created(id: Option<String>, dto: &CustomerDto) -> Self {
        Self {
            id: id.unwrap_or_else(Self::generated_id),
            full_name: dto.full_name.clone(),
            email: dto.email.clone(),
            birth_date: dto.birth_date.clone(),
            sales: Vec::new(),
            missing_letter: missing_letter(&dto.full_name),
        }
    }

    /// Edits never mutate in place: merge caller-supplied form fields
    /// with the retained id and sales into a new value. An empty name
    /// gets the `'X'` placeholder badge.
    pub fn with_updates(id: String, dto: &CustomerDto, sales: Vec<Sale>) -> Self {
        let missing_letter = if dto.full_name.is_empty() {
            'X'
        } else {
            missing_letter(&dto.full_name)
        };

        Self {
            id,
            full_name: dto.full_name.clone(),
            email: dto.email.clone(),
            birth_date: dto.birth_date.clone(),
            sales,
            missing_letter,
        }
    }

    /// Sum of all sale amounts, `0.0` for a customer without sales.
    pub fn total_sales(&self) -> f64 {
        crate::dashboards::sales_summary::total_sales(&self.sales)
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Create/update form payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerDto {
    #[serde(rename = "fullName")]
    pub full_name: String,

    pub email: String,

    #[serde(rename = "birthDate")]
    pub birth_date: String,
}

/// Wire body for `POST /customers` and `PATCH /customers/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerWrite {
    pub name: String,
    pub email: String,

    #[serde(rename = "birthDate")]
    pub birth_date: String,
}

impl From<&CustomerDto> for CustomerWrite {
    fn from(dto: &CustomerDto) -> Self {
        Self {
            name: dto.full_name.clone(),
            email: dto.email.clone(),
            birth_date: dto.birth_date.clone(),
        }
    }
}

/// Query filters for the customer list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl CustomerFilters {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(name: &str) -> CustomerDto {
        CustomerDto {
            full_name: name.to_string(),
            email: "a@b.com".to_string(),
            birth_date: "1990-01-01".to_string(),
        }
    }

    #[test]
    fn created_prefers_backend_id() {
        let c = Customer::created(Some("42".to_string()), &dto("Ana Silva"));
        assert_eq!(c.id, "42");
        assert_eq!(c.full_name, "Ana Silva");
        assert_eq!(c.missing_letter, 'B');
        assert!(c.sales.is_empty());
    }

    #[test]
    fn created_generates_id_when_backend_omits_one() {
        let a = Customer::created(None, &dto("Ana"));
        let b = Customer::created(None, &dto("Ana"));
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn with_updates_recomputes_letter_and_keeps_sales() {
        let sales = vec![Sale {
            date: "2024-01-01".to_string(),
            amount: 10.0,
        }];
        let c = Customer::with_updates("7".to_string(), &dto("Bruno"), sales.clone());
        assert_eq!(c.id, "7");
        assert_eq!(c.missing_letter, 'A');
        assert_eq!(c.sales, sales);
    }

    #[test]
    fn with_updates_empty_name_gets_placeholder_letter() {
        let c = Customer::with_updates("7".to_string(), &dto(""), Vec::new());
        assert_eq!(c.missing_letter, 'X');
    }

    #[test]
    fn filters_serialize_to_query_pairs() {
        let f = CustomerFilters {
            name: Some("ana".to_string()),
            email: None,
        };
        let json = serde_json::to_value(&f).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "ana" }));
        assert!(CustomerFilters::default().is_empty());
    }
}
