use chrono::NaiveDate;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Monthly disclosure set (`cve.json`): the CVEs disclosed in one period,
/// plus the products and packages each one affects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CveRecords {
    pub last_updated: String,
    pub title: String,
    pub disclosures: Vec<Cve>,
    pub products: Vec<Product>,
    pub packages: Vec<Package>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commits: Option<HashMap<String, CommitInfo>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_cves: Option<HashMap<String, Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_cves: Option<HashMap<String, Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_cves: Option<HashMap<String, Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity_cves: Option<HashMap<String, Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cve_releases: Option<HashMap<String, Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cve_commits: Option<HashMap<String, Vec<String>>>,
}

/// A disclosed vulnerability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cve {
    pub id: String,
    /// Brief description of the vulnerability type
    pub problem: String,
    pub description: Vec<String>,
    pub cvss: Cvss,
    pub timeline: Timeline,
    pub platforms: Vec<String>,
    pub architectures: Vec<String>,
    pub references: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mitigation: Option<Vec<String>>,
    /// CWE identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weakness: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cna: Option<Cna>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub disclosure: Event,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed: Option<Event>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<Vec<Event>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub date: NaiveDate,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cvss {
    pub version: String,
    pub vector: String,
    #[serde(default)]
    pub score: f64,
    /// Severity label such as "Critical" or "High". Compared case-insensitively.
    #[serde(default)]
    pub severity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temporal_score: Option<f64>,
}

/// CVE Numbering Authority metadata.
///
/// On the wire this is either a bare string holding the authority name or
/// an object with the full record; both decode into this type.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Cna {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acknowledgments: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faq: Option<Vec<CnaFaq>>,
}

impl Cna {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[derive(Deserialize)]
struct CnaObject {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    severity: Option<String>,
    #[serde(default)]
    impact: Option<String>,
    #[serde(default)]
    acknowledgments: Option<Vec<String>>,
    #[serde(default)]
    faq: Option<Vec<CnaFaq>>,
}

struct CnaVisitor;

impl<'de> Visitor<'de> for CnaVisitor {
    type Value = Cna;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a CNA name string or a CNA object")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Cna, E> {
        Ok(Cna::named(value))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Cna, A::Error> {
        let object = CnaObject::deserialize(de::value::MapAccessDeserializer::new(map))?;
        Ok(Cna {
            name: object.name.unwrap_or_default(),
            severity: object.severity,
            impact: object.impact,
            acknowledgments: object.acknowledgments,
            faq: object.faq,
        })
    }
}

impl<'de> Deserialize<'de> for Cna {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CnaVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CnaFaq {
    pub question: String,
    pub answer: String,
}

/// A product version range affected by a CVE.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub cve_id: String,
    pub name: String,
    pub min_vulnerable: String,
    pub max_vulnerable: String,
    pub fixed: String,
    /// Major release the range belongs to, e.g. "9.0"
    pub release: String,
    pub commits: Vec<String>,
}

/// A package version range affected by a CVE.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub cve_id: String,
    pub name: String,
    pub min_vulnerable: String,
    pub max_vulnerable: String,
    pub fixed: String,
    pub release: String,
    pub commits: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitInfo {
    pub repo: String,
    pub branch: String,
    pub hash: String,
    pub org: String,
    pub url: String,
}
