//! Field table: which element fills which record field.
//!
//! Selectors track a third-party page we do not control, so they are data.
//! The built-in table matches the current JobServe markup; a replacement can
//! be loaded from JSON without touching code:
//!
//! ```json
//! [
//!   { "field": "title", "selector": "h1.positiontitle" },
//!   { "field": "permalink", "selector": "#md_permalink",
//!     "extract": { "mode": "attribute", "name": "href" } }
//! ]
//! ```
//!
//! Several rules may target the same field; the first one that yields a value
//! wins, which lets a table list fallback selectors.

use scraper::{ElementRef, Selector};
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::error_handling::InitializationError;
use crate::utils::{stripped_text, try_parse_selector};

/// Scraped fields of a `JobRecord` (everything except `id`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobField {
    /// Position title
    Title,
    /// Work location
    Location,
    /// Pay rate as displayed
    Rate,
    /// Contract duration
    Duration,
    /// Recruiting agency
    Agency,
    /// Date the listing was posted
    PostedDate,
    /// Agency reference
    Reference,
    /// Permanent link to the listing
    Permalink,
    /// Full description text
    Description,
}

impl JobField {
    /// Key of this field in the serialized record.
    pub fn name(&self) -> &'static str {
        match self {
            JobField::Title => "title",
            JobField::Location => "location",
            JobField::Rate => "rate",
            JobField::Duration => "duration",
            JobField::Agency => "agency",
            JobField::PostedDate => "posted_date",
            JobField::Reference => "reference",
            JobField::Permalink => "permalink",
            JobField::Description => "description",
        }
    }
}

/// How a value is read from a matched element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum Extraction {
    /// Stripped text content
    #[default]
    Text,
    /// Raw value of the named attribute; absent attribute means no value
    Attribute {
        /// Attribute name, e.g. `href`
        name: String,
    },
}

impl Extraction {
    fn extract(&self, element: &ElementRef<'_>) -> Option<String> {
        match self {
            Extraction::Text => Some(stripped_text(element)),
            Extraction::Attribute { name } => element.value().attr(name).map(str::to_string),
        }
    }
}

/// One row of the field table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    /// Record field this rule fills
    pub field: JobField,
    /// CSS selector; the first matching element is used
    pub selector: String,
    /// How the value is read, text by default
    #[serde(default)]
    pub extract: Extraction,
}

impl FieldRule {
    fn text(field: JobField, selector: &str) -> Self {
        Self {
            field,
            selector: selector.to_string(),
            extract: Extraction::Text,
        }
    }

    fn attribute(field: JobField, selector: &str, name: &str) -> Self {
        Self {
            field,
            selector: selector.to_string(),
            extract: Extraction::Attribute {
                name: name.to_string(),
            },
        }
    }
}

/// Ordered set of field rules, serialized as a bare JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldTable {
    rules: Vec<FieldRule>,
}

impl Default for FieldTable {
    /// The JobServe detail page layout.
    fn default() -> Self {
        Self {
            rules: vec![
                FieldRule::text(JobField::Title, "h1.positiontitle"),
                FieldRule::text(JobField::Location, "#md_location"),
                FieldRule::text(JobField::Rate, "#md_rate"),
                FieldRule::text(JobField::Duration, "#md_duration"),
                FieldRule::text(JobField::Agency, "#md_recruiter"),
                FieldRule::text(JobField::PostedDate, "#md_posted_date"),
                FieldRule::text(JobField::Reference, "#md_ref"),
                FieldRule::attribute(JobField::Permalink, "#md_permalink", "href"),
                FieldRule::text(JobField::Description, ".main_detail_content"),
            ],
        }
    }
}

impl FieldTable {
    /// Table from explicit rules.
    pub fn new(rules: Vec<FieldRule>) -> Self {
        Self { rules }
    }

    /// Parses a table from its JSON form.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Rules in table order.
    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Parses every selector once so extraction never re-parses.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::SelectorError` for the first rule whose
    /// selector does not parse.
    pub fn compile(&self) -> Result<CompiledFieldTable, InitializationError> {
        let rules = self
            .rules
            .iter()
            .map(|rule| -> Result<CompiledRule, InitializationError> {
                let selector = try_parse_selector(&rule.selector).map_err(|message| {
                    InitializationError::SelectorError {
                        field: rule.field.name().to_string(),
                        selector: rule.selector.clone(),
                        message,
                    }
                })?;
                Ok(CompiledRule {
                    field: rule.field,
                    selector,
                    selector_str: rule.selector.clone(),
                    extract: rule.extract.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CompiledFieldTable { rules })
    }
}

/// A field rule with its selector parsed.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    /// Record field this rule fills
    pub field: JobField,
    /// Parsed selector
    pub selector: Selector,
    /// Selector source, for logs
    pub selector_str: String,
    /// How the value is read
    pub extract: Extraction,
}

impl CompiledRule {
    /// Value for this rule in `root`: `None` if no element matches.
    pub(crate) fn apply(&self, root: &ElementRef<'_>) -> Option<String> {
        root.select(&self.selector)
            .next()
            .and_then(|element| self.extract.extract(&element))
    }
}

/// Field table ready for extraction.
#[derive(Debug, Clone)]
pub struct CompiledFieldTable {
    rules: Vec<CompiledRule>,
}

impl CompiledFieldTable {
    /// Compiled rules in table order.
    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }
}

impl Default for CompiledFieldTable {
    fn default() -> Self {
        FieldTable::default()
            .compile()
            .unwrap_or_else(|e| panic!("built-in field table must compile: {}", e))
    }
}
