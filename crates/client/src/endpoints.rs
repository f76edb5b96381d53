//! Endpoint registry
//!
//! Each remote entity lives behind its own web-app deployment. Brands,
//! customers, employees, and the account sheet each have a single URL;
//! categories and products share four per-group deployments (espresso,
//! iced, non-coffee, pastries) that are selected by the active product
//! group. The employee deployment additionally wants an `apiKey` on every
//! call and supports server-side search.

use cafe_core::{ConsoleError, ConsoleResult};
use cafe_schema::EntityKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Default deployments
// ============================================================================

const BRANDS_URL: &str = "https://script.google.com/macros/s/AKfycbw_Fu5pv814sGjNJlK2GWvmzzxyKkvuAExvX018imL2tImbYH4EbSA63knQKyp2sEkg/exec";
const CUSTOMERS_URL: &str = "https://script.google.com/macros/s/AKfycbzVZmrAtxQt6cEnwNyvqRGiya4d8m01w35x0SjHXZR5al0NSq8KP5hDzxFbAv6BF7qF/exec";
const EMPLOYEES_URL: &str = "https://script.google.com/macros/s/AKfycbyPwHN19J2mjodybVmgfNwa1l3f50PAT9JYkILUcbt1DxuzEJjW4GTt1A7mYpvmi1_xCw/exec";
const ACCOUNTS_URL: &str = "https://script.google.com/macros/s/AKfycbyGMGfyqzTlxB7LQ-aL2jl52y45QmJYwJo93eO-o2va6sx9Sl7gf1epjfctiiOpF71y/exec";

const ESPRESSO_URL: &str = "https://script.google.com/macros/s/AKfycbzbEeBBV0tO3QC003lx--Jt-iJa84usx4zAHuzmMUIJ0xFwXyBtAUVNXgtrjofDGVzA/exec";
const ICED_URL: &str = "https://script.google.com/macros/s/AKfycbzjxO5Ge2NMGzYcR2Zzjmpfdw2WJacrMTCEkRXszkdWa7vHEXFQgk8SoGUpluZt2e5qXA/exec";
const NON_COFFEE_URL: &str = "https://script.google.com/macros/s/AKfycbybZAegH2UA44idH9HKwfrwBZmZiAye04WRFZqJhJ8QILeOs7VxXYvx84yJqllydiNrLA/exec";
const PASTRIES_URL: &str = "https://script.google.com/macros/s/AKfycbyYMixTHz2VXSpRdw-rV6l0UUvieMWC7GH_fK_dkDFuYYHoglp-J6CRkj_i0Oz7gth6/exec";

const EMPLOYEE_API_KEY: &str = "your-api-key";

// ============================================================================
// ProductGroup
// ============================================================================

/// The four menu groups that have their own category/product deployments
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum ProductGroup {
    #[default]
    Espresso,
    Iced,
    NonCoffee,
    Pastries,
}

impl ProductGroup {
    /// User-facing group name
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductGroup::Espresso => "Espresso",
            ProductGroup::Iced => "Iced",
            ProductGroup::NonCoffee => "Non-Coffee",
            ProductGroup::Pastries => "Pastries",
        }
    }

    /// All groups, in menu order
    pub fn all() -> &'static [ProductGroup] {
        &[
            ProductGroup::Espresso,
            ProductGroup::Iced,
            ProductGroup::NonCoffee,
            ProductGroup::Pastries,
        ]
    }
}

impl std::fmt::Display for ProductGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

// ============================================================================
// EndpointConfig
// ============================================================================

/// One resolved endpoint: URL plus the extras its deployment expects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Deployment URL
    pub url: String,

    /// API key sent as a query parameter on reads and inside mutation
    /// payloads (employee deployment only)
    pub api_key: Option<String>,

    /// Extra query parameters appended to every read
    /// (`dataType=products` for product reads)
    pub read_params: Vec<(String, String)>,

    /// Whether the deployment filters reads itself via a `search` parameter
    pub server_search: bool,
}

impl EndpointConfig {
    /// Create a plain endpoint with no extras
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: None,
            read_params: Vec::new(),
            server_search: false,
        }
    }

    /// Attach an API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Append a fixed read query parameter
    pub fn read_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.read_params.push((name.into(), value.into()));
        self
    }

    /// Mark the deployment as supporting server-side search
    pub fn server_search(mut self) -> Self {
        self.server_search = true;
        self
    }
}

// ============================================================================
// Endpoints registry
// ============================================================================

/// Registry of every remote deployment the console talks to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    brands: EndpointConfig,
    customers: EndpointConfig,
    employees: EndpointConfig,
    accounts: EndpointConfig,
    groups: BTreeMap<ProductGroup, EndpointConfig>,
}

impl Endpoints {
    /// The endpoint serving brand rows
    pub fn brands(&self) -> &EndpointConfig {
        &self.brands
    }

    /// The endpoint serving customer rows
    pub fn customers(&self) -> &EndpointConfig {
        &self.customers
    }

    /// The endpoint serving employee rows
    pub fn employees(&self) -> &EndpointConfig {
        &self.employees
    }

    /// The endpoint backing login and registration
    pub fn accounts(&self) -> &EndpointConfig {
        &self.accounts
    }

    /// The category endpoint of one product group
    pub fn categories(&self, group: ProductGroup) -> &EndpointConfig {
        &self.groups[&group]
    }

    /// The product endpoint of one product group
    ///
    /// Same deployment as the group's categories, with the `dataType`
    /// discriminator appended to reads.
    pub fn products(&self, group: ProductGroup) -> EndpointConfig {
        self.groups[&group]
            .clone()
            .read_param("dataType", "products")
    }

    /// Resolve the endpoint for a remote entity kind
    ///
    /// Categories and products need a group; memory-backed kinds have no
    /// endpoint at all.
    pub fn resolve(
        &self,
        kind: EntityKind,
        group: Option<ProductGroup>,
    ) -> ConsoleResult<EndpointConfig> {
        let need_group = || {
            group.ok_or_else(|| {
                ConsoleError::internal(format!("{} endpoints require a product group", kind))
            })
        };
        match kind {
            EntityKind::Brand => Ok(self.brands.clone()),
            EntityKind::Customer => Ok(self.customers.clone()),
            EntityKind::Employee => Ok(self.employees.clone()),
            EntityKind::Category => Ok(self.categories(need_group()?).clone()),
            EntityKind::Product => Ok(self.products(need_group()?)),
            EntityKind::User | EntityKind::Role | EntityKind::TeamMember => Err(
                ConsoleError::internal(format!("{} records are not served remotely", kind)),
            ),
        }
    }

    /// Registry pointing every entity at one base URL, for tests
    pub fn single_url(url: impl Into<String>) -> Self {
        let url = url.into();
        let plain = EndpointConfig::new(&url);
        Self {
            brands: plain.clone(),
            customers: plain.clone(),
            employees: EndpointConfig::new(&url)
                .api_key(EMPLOYEE_API_KEY)
                .server_search(),
            accounts: plain.clone(),
            groups: ProductGroup::all()
                .iter()
                .map(|g| (*g, plain.clone()))
                .collect(),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            brands: EndpointConfig::new(BRANDS_URL),
            customers: EndpointConfig::new(CUSTOMERS_URL),
            employees: EndpointConfig::new(EMPLOYEES_URL)
                .api_key(EMPLOYEE_API_KEY)
                .server_search(),
            accounts: EndpointConfig::new(ACCOUNTS_URL),
            groups: BTreeMap::from([
                (ProductGroup::Espresso, EndpointConfig::new(ESPRESSO_URL)),
                (ProductGroup::Iced, EndpointConfig::new(ICED_URL)),
                (ProductGroup::NonCoffee, EndpointConfig::new(NON_COFFEE_URL)),
                (ProductGroup::Pastries, EndpointConfig::new(PASTRIES_URL)),
            ]),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
