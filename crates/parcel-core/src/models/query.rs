use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::source::SourceId;

/// Broad classification of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    #[default]
    Urban,
    Rural,
}

impl PropertyType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Urban => "urban",
            Self::Rural => "rural",
        }
    }
}

/// Which portals a query should reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PortalSelector {
    /// Every registered portal, in routing priority order.
    #[default]
    Auto,
    /// Exactly one portal.
    Specific(SourceId),
}

impl fmt::Display for PortalSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Specific(source) => f.write_str(source.as_str()),
        }
    }
}

impl FromStr for PortalSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("auto") || s.trim().is_empty() {
            return Ok(Self::Auto);
        }
        s.parse::<SourceId>().map(Self::Specific)
    }
}

impl TryFrom<String> for PortalSelector {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PortalSelector> for String {
    fn from(selector: PortalSelector) -> Self {
        selector.to_string()
    }
}

/// Structured postal address.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub line: String,
    pub district: String,
    pub state: String,
    pub pincode: String,
}

impl Address {
    /// Whether the address can identify a property on its own.
    pub fn is_identifying(&self) -> bool {
        !self.line.trim().is_empty()
    }

    /// "line, district, state - pincode", skipping blank parts.
    pub fn to_display_line(&self) -> String {
        let parts: Vec<&str> = [self.line.as_str(), self.district.as_str(), self.state.as_str()]
            .into_iter()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        let mut out = parts.join(", ");
        if !self.pincode.trim().is_empty() {
            if !out.is_empty() {
                out.push_str(" - ");
            }
            out.push_str(self.pincode.trim());
        }
        out
    }
}

/// Inclusive registration date window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// One property-identity query. Built once per request and shared read-only
/// with every portal task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub owner_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub property_type: PropertyType,
    #[serde(default, rename = "portal", alias = "portalSelector")]
    pub portal_selector: PortalSelector,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    #[serde(default)]
    pub include_historical: bool,
}

impl SearchQuery {
    /// Start a query with the two always-required fields.
    pub fn new(owner_name: impl Into<String>, pincode: impl Into<String>) -> Self {
        Self {
            owner_name: owner_name.into(),
            property_id: None,
            registration_number: None,
            address: Address {
                pincode: pincode.into(),
                ..Default::default()
            },
            property_type: PropertyType::default(),
            portal_selector: PortalSelector::default(),
            date_range: None,
            include_historical: false,
        }
    }

    pub fn with_property_id(mut self, id: impl Into<String>) -> Self {
        self.property_id = Some(id.into());
        self
    }

    pub fn with_registration_number(mut self, number: impl Into<String>) -> Self {
        self.registration_number = Some(number.into());
        self
    }

    /// Fill in the address, keeping the pincode given to [`SearchQuery::new`].
    pub fn with_address(
        mut self,
        line: impl Into<String>,
        district: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        self.address.line = line.into();
        self.address.district = district.into();
        self.address.state = state.into();
        self
    }

    pub fn with_property_type(mut self, property_type: PropertyType) -> Self {
        self.property_type = property_type;
        self
    }

    pub fn with_portal(mut self, selector: PortalSelector) -> Self {
        self.portal_selector = selector;
        self
    }

    pub fn with_date_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date_range = Some(DateRange { from, to });
        self
    }

    pub fn with_historical(mut self, include: bool) -> Self {
        self.include_historical = include;
        self
    }

    /// Whether any of property id, registration number or address is given.
    pub fn has_identifier(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        present(&self.property_id)
            || present(&self.registration_number)
            || self.address.is_identifying()
    }
}
