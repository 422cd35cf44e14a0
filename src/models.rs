//! Invocation input, job records, and the result envelope.

use serde::{Deserialize, Serialize};

use crate::parse::JobField;

/// Input object supplied by the invoking platform.
///
/// Unknown keys are ignored. A missing or `null` `shid` selects the default
/// session handle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    /// Session handle of the saved search
    #[serde(default)]
    pub shid: Option<String>,
}

impl Invocation {
    /// Invocation for an explicit session handle.
    pub fn with_shid(shid: impl Into<String>) -> Self {
        Self {
            shid: Some(shid.into()),
        }
    }
}

/// One job listing, flattened.
///
/// `id` is the identifier that produced the record, never a scraped value.
/// Every other field is `None` when its element was not found in the detail
/// fragment. Fields serialize in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    /// Identifier the record was fetched for
    pub id: String,
    /// Position title
    pub title: Option<String>,
    /// Work location
    pub location: Option<String>,
    /// Pay rate as displayed
    pub rate: Option<String>,
    /// Contract duration
    pub duration: Option<String>,
    /// Recruiting agency
    pub agency: Option<String>,
    /// Date the listing was posted
    pub posted_date: Option<String>,
    /// Agency reference
    pub reference: Option<String>,
    /// Permanent link (`href` of the permalink anchor)
    pub permalink: Option<String>,
    /// Full description text
    pub description: Option<String>,
}

impl JobRecord {
    /// Empty record for `id`; all scraped fields absent.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Value of a scraped field.
    pub fn get(&self, field: JobField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Sets a scraped field.
    pub fn set(&mut self, field: JobField, value: Option<String>) {
        *self.slot_mut(field) = value;
    }

    fn slot(&self, field: JobField) -> &Option<String> {
        match field {
            JobField::Title => &self.title,
            JobField::Location => &self.location,
            JobField::Rate => &self.rate,
            JobField::Duration => &self.duration,
            JobField::Agency => &self.agency,
            JobField::PostedDate => &self.posted_date,
            JobField::Reference => &self.reference,
            JobField::Permalink => &self.permalink,
            JobField::Description => &self.description,
        }
    }

    fn slot_mut(&mut self, field: JobField) -> &mut Option<String> {
        match field {
            JobField::Title => &mut self.title,
            JobField::Location => &mut self.location,
            JobField::Rate => &mut self.rate,
            JobField::Duration => &mut self.duration,
            JobField::Agency => &mut self.agency,
            JobField::PostedDate => &mut self.posted_date,
            JobField::Reference => &mut self.reference,
            JobField::Permalink => &mut self.permalink,
            JobField::Description => &mut self.description,
        }
    }

    /// Number of scraped fields that came back absent.
    pub fn missing_field_count(&self) -> usize {
        use strum::IntoEnumIterator;
        JobField::iter().filter(|f| self.get(*f).is_none()).count()
    }
}

/// Output handed back to the invoking platform.
///
/// `body` is the JSON text of the record array, not a nested value, matching
/// what API-gateway style platforms expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    /// Always 200; failures never produce an envelope
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// Pretty-printed JSON array of `JobRecord`, in resolution order
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_invocation_shid_optional() {
        let empty: Invocation = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.shid, None);

        let null: Invocation = serde_json::from_str(r#"{"shid": null}"#).unwrap();
        assert_eq!(null.shid, None);

        let extra: Invocation =
            serde_json::from_str(r#"{"shid": "ABC", "source": "aws.events"}"#).unwrap();
        assert_eq!(extra, Invocation::with_shid("ABC"));
    }

    #[test]
    fn test_invocation_rejects_non_string_shid() {
        assert!(serde_json::from_str::<Invocation>(r#"{"shid": 42}"#).is_err());
    }

    #[test]
    fn test_record_serializes_keys_in_order_with_nulls() {
        let mut record = JobRecord::new("101");
        record.set(JobField::Title, Some("Rust Engineer".to_string()));
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"id":"101","title":"Rust Engineer","location":null,"rate":null,"duration":null,"agency":null,"posted_date":null,"reference":null,"permalink":null,"description":null}"#
        );
    }

    #[test]
    fn test_get_set_cover_every_field() {
        let mut record = JobRecord::new("1");
        assert_eq!(record.missing_field_count(), 9);
        for field in JobField::iter() {
            record.set(field, Some(field.name().to_string()));
        }
        for field in JobField::iter() {
            assert_eq!(record.get(field), Some(field.name()));
        }
        assert_eq!(record.missing_field_count(), 0);
        assert_eq!(record.posted_date.as_deref(), Some("posted_date"));
    }

    #[test]
    fn test_envelope_uses_status_code_key() {
        let envelope = ResultEnvelope {
            status_code: 200,
            body: "[]".to_string(),
        };
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value, serde_json::json!({"statusCode": 200, "body": "[]"}));
    }
}
