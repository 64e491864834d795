//! Raw backend payload shapes and their normalization into [`Customer`].
//!
//! The backend answers with two inconsistent shapes: a nested "report"
//! shape (`info`/`details`/`stats`) and a flat entity shape whose fields
//! mix primary names with localized aliases. Which variant applies is
//! decided once, at the deserialization boundary, by an untagged union —
//! the report shape is tried first and anything else falls through to
//! the all-optional entity shape, so normalization stays total.

use serde::Deserialize;
use serde_json::Value;

use super::aggregate::{Customer, Sale};
use super::letter_gap::missing_letter;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawCustomer {
    Report(ReportShape),
    Entity(EntityShape),
}

/// Nested report shape:
/// `{ info: { fullName, details: { email, birthDate } }, stats: { sales } }`.
/// Carries no usable external id.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportShape {
    pub info: ReportInfo,
    #[serde(default)]
    pub stats: ReportStats,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportInfo {
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub details: ReportDetails,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportDetails {
    #[serde(default)]
    pub email: String,
    #[serde(rename = "birthDate", default)]
    pub birth_date: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportStats {
    #[serde(default)]
    pub sales: Vec<Sale>,
}

/// Flat entity shape. Every field is optional: this variant doubles as
/// the catch-all for records matching neither recognizable shape, which
/// then normalize to best-effort empty values instead of failing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntityShape {
    /// String or number on the wire.
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "birthDate", default)]
    pub birth_date: Option<String>,
    /// Localized alias for the birth date.
    #[serde(default)]
    pub nascimento: Option<String>,
    #[serde(default)]
    pub sales: Option<Vec<RawSale>>,
}

/// Flat-shape sale element, primary key first, localized alias second.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSale {
    #[serde(rename = "saleDate", default)]
    pub sale_date: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub valor: Option<f64>,
}

impl RawSale {
    fn resolve(self) -> Sale {
        Sale {
            date: self.sale_date.or(self.date).unwrap_or_default(),
            amount: self.amount.or(self.valor).unwrap_or_default(),
        }
    }
}

impl RawCustomer {
    /// Total normalization into the canonical record. Missing optional
    /// fields degrade to `""`/`[]`; the missing letter is computed last,
    /// from the resolved name.
    pub fn normalize(self) -> Customer {
        match self {
            RawCustomer::Report(report) => {
                let full_name = report.info.full_name;
                Customer {
                    id: Customer::generated_id(),
                    missing_letter: missing_letter(&full_name),
                    full_name,
                    email: report.info.details.email,
                    birth_date: report.info.details.birth_date,
                    sales: report.stats.sales,
                }
            }
            RawCustomer::Entity(entity) => {
                let full_name = entity.name.or(entity.full_name).unwrap_or_default();
                let sales = entity
                    .sales
                    .unwrap_or_default()
                    .into_iter()
                    .map(RawSale::resolve)
                    .collect();
                Customer {
                    id: entity
                        .id
                        .and_then(stringify_id)
                        .unwrap_or_else(Customer::generated_id),
                    missing_letter: missing_letter(&full_name),
                    full_name,
                    email: entity.email.unwrap_or_default(),
                    birth_date: entity.birth_date.or(entity.nascimento).unwrap_or_default(),
                    sales,
                }
            }
        }
    }
}

fn stringify_id(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// ============================================================================
// List envelope
// ============================================================================

/// Wrapper around `GET /customers` responses:
/// `{ data: { customers: [...] }, meta: { totalRecords, page } }`.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomersEnvelope {
    pub data: CustomersPage,
    #[serde(default)]
    pub meta: Option<ListMeta>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomersPage {
    #[serde(default)]
    pub customers: Vec<RawCustomer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListMeta {
    #[serde(rename = "totalRecords", default)]
    pub total_records: u64,
    #[serde(default)]
    pub page: u64,
}

impl CustomersEnvelope {
    pub fn into_customers(self) -> Vec<Customer> {
        self.data
            .customers
            .into_iter()
            .map(RawCustomer::normalize)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> RawCustomer {
        serde_json::from_value(value).expect("raw customer")
    }

    #[test]
    fn report_shape_takes_nested_fields_verbatim() {
        let customer = parse(json!({
            "info": {
                "fullName": "Ana Silva",
                "details": { "email": "ana@toy.com", "birthDate": "1990-05-01" }
            },
            "stats": {
                "sales": [
                    { "date": "2024-01-02", "amount": 100.0 },
                    { "date": "2024-01-01", "amount": 50.0 }
                ]
            }
        }))
        .normalize();

        assert_eq!(customer.full_name, "Ana Silva");
        assert_eq!(customer.email, "ana@toy.com");
        assert_eq!(customer.birth_date, "1990-05-01");
        // backend order, not re-sorted
        assert_eq!(customer.sales[0].date, "2024-01-02");
        assert_eq!(customer.sales[1].amount, 50.0);
        assert_eq!(customer.missing_letter, 'B');
        assert!(!customer.id.is_empty());
    }

    #[test]
    fn report_shape_without_stats_defaults_to_empty_sales() {
        let customer = parse(json!({
            "info": {
                "fullName": "Ana",
                "details": { "email": "", "birthDate": "" }
            }
        }))
        .normalize();

        assert!(customer.sales.is_empty());
    }

    #[test]
    fn entity_shape_prefers_primary_fields_over_aliases() {
        let customer = parse(json!({
            "id": 7,
            "name": "Bruno Costa",
            "fullName": "ignored",
            "email": "bruno@toy.com",
            "birthDate": "1985-03-10",
            "nascimento": "ignored",
            "sales": [
                { "saleDate": "2024-02-01", "date": "ignored", "amount": 30.0, "valor": 1.0 }
            ]
        }))
        .normalize();

        assert_eq!(customer.id, "7");
        assert_eq!(customer.full_name, "Bruno Costa");
        assert_eq!(customer.birth_date, "1985-03-10");
        assert_eq!(customer.sales[0].date, "2024-02-01");
        assert_eq!(customer.sales[0].amount, 30.0);
    }

    #[test]
    fn entity_shape_falls_back_to_localized_aliases() {
        let customer = parse(json!({
            "fullName": "Carla Dias",
            "nascimento": "1992-12-12",
            "sales": [ { "date": "2024-03-01", "valor": 12.5 } ]
        }))
        .normalize();

        assert_eq!(customer.full_name, "Carla Dias");
        assert_eq!(customer.birth_date, "1992-12-12");
        assert_eq!(customer.sales[0].date, "2024-03-01");
        assert_eq!(customer.sales[0].amount, 12.5);
    }

    #[test]
    fn unrecognized_record_degrades_to_empty_fields() {
        let customer = parse(json!({ "unexpected": true })).normalize();

        assert_eq!(customer.full_name, "");
        assert_eq!(customer.email, "");
        assert_eq!(customer.birth_date, "");
        assert!(customer.sales.is_empty());
        assert_eq!(customer.missing_letter, 'A');
        assert!(!customer.id.is_empty());
    }

    #[test]
    fn renormalizing_a_canonical_record_is_idempotent() {
        let first = parse(json!({
            "id": "abc",
            "name": "Ana Silva",
            "email": "ana@toy.com",
            "birthDate": "1990-05-01",
            "sales": [ { "saleDate": "2024-01-01", "amount": 10.0 } ]
        }))
        .normalize();

        let reparsed = serde_json::to_value(&first).expect("canonical json");
        let second = parse(reparsed).normalize();

        assert_eq!(second.full_name, first.full_name);
        assert_eq!(second.email, first.email);
        assert_eq!(second.birth_date, first.birth_date);
        assert_eq!(second.sales, first.sales);
        assert_eq!(second.missing_letter, first.missing_letter);
        assert_eq!(second.id, first.id);
    }

    #[test]
    fn envelope_normalizes_every_record() {
        let envelope: CustomersEnvelope = serde_json::from_value(json!({
            "data": {
                "customers": [
                    { "info": { "fullName": "Ana", "details": { "email": "", "birthDate": "" } } },
                    { "id": 1, "name": "Bruno" }
                ]
            },
            "meta": { "totalRecords": 2, "page": 1 }
        }))
        .expect("envelope");

        let customers = envelope.into_customers();
        assert_eq!(customers.len(), 2);
        assert_eq!(customers[0].full_name, "Ana");
        assert_eq!(customers[1].id, "1");
    }
}
