//! JSON fixtures shaped like the published release-notes graph

use serde_json::{json, Value};

pub const BASE: &str = "https://release-notes.example.test/";

pub fn url(path: &str) -> String {
    format!("{}{}", BASE, path)
}

fn self_link(path: &str) -> Value {
    json!({"self": {"href": url(path)}})
}

/// Root index listing 10.0 (preview), 9.0 (STS), 8.0 (LTS) and 6.0 (EOL)
pub fn root_index() -> Value {
    json!({
        "kind": "root",
        "title": ".NET Release Index",
        "latest_major": "9.0",
        "latest_lts_major": "8.0",
        "_links": self_link("index.json"),
        "_embedded": {
            "releases": [
                {"version": "10.0", "release_type": "lts", "support_phase": "preview", "supported": true,
                 "_links": self_link("10.0/index.json")},
                {"version": "9.0", "release_type": "sts", "support_phase": "active", "supported": true,
                 "ga_date": "2024-11-12T00:00:00+00:00", "_links": self_link("9.0/index.json")},
                {"version": "8.0", "release_type": "lts", "support_phase": "active", "supported": true,
                 "ga_date": "2023-11-14T00:00:00+00:00", "_links": self_link("8.0/index.json")},
                {"version": "6.0", "release_type": "lts", "support_phase": "eol", "supported": false,
                 "eol_date": "2024-11-12T00:00:00+00:00", "_links": self_link("6.0/index.json")}
            ]
        }
    })
}

fn patch(version: &str, date: &str, security: bool) -> Value {
    let (year, month) = (&date[0..4], &date[5..7]);
    json!({
        "version": version,
        "date": format!("{}T00:00:00+00:00", date),
        "year": year,
        "month": month,
        "security": security,
        "support_phase": "active",
        "_links": self_link(&format!("9.0/{}/index.json", version))
    })
}

/// 9.0 major-version index with patches newest-first
pub fn patch_index_9_0() -> Value {
    json!({
        "kind": "major",
        "title": ".NET 9.0 Patch Releases",
        "latest_patch": "9.0.2",
        "_links": self_link("9.0/index.json"),
        "_embedded": {
            "patches": [
                patch("9.0.2", "2025-02-11", true),
                patch("9.0.1", "2025-01-14", false),
                patch("9.0.0", "2024-11-12", false)
            ]
        }
    })
}

pub fn patch_detail_9_0_2() -> Value {
    json!({
        "kind": "patch",
        "title": ".NET 9.0.2",
        "version": "9.0.2",
        "date": "2025-02-11T00:00:00+00:00",
        "security": true,
        "cve_records": ["CVE-2025-0001"],
        "_links": self_link("9.0/9.0.2/index.json")
    })
}

pub fn manifest_9_0() -> Value {
    json!({
        "kind": "manifest",
        "title": ".NET 9.0 Manifest",
        "version": "9.0",
        "label": ".NET 9.0",
        "release_type": "sts",
        "support_phase": "active",
        "_links": self_link("9.0/manifest.json")
    })
}

pub fn timeline_index(years: &[&str]) -> Value {
    let entries: Vec<Value> = years
        .iter()
        .map(|year| {
            json!({
                "year": year,
                "major_releases": ["9.0", "8.0"],
                "_links": self_link(&format!("timeline/{}/index.json", year))
            })
        })
        .collect();

    json!({
        "kind": "timeline",
        "title": ".NET Release Timeline",
        "_links": self_link("timeline/index.json"),
        "_embedded": {"years": entries}
    })
}

/// Year index; `months` is `(month id, security flag)` in document order
pub fn year_index(year: &str, months: &[(&str, bool)]) -> Value {
    let entries: Vec<Value> = months
        .iter()
        .map(|(month, security)| {
            json!({
                "month": month,
                "security": security,
                "_links": self_link(&format!("timeline/{}/{}/index.json", year, month))
            })
        })
        .collect();

    json!({
        "kind": "year",
        "title": format!(".NET Release Timeline - {}", year),
        "year": year,
        "_links": self_link(&format!("timeline/{}/index.json", year)),
        "_embedded": {"months": entries}
    })
}

pub fn cve_json_path(year: &str, month: &str) -> String {
    format!("timeline/{}/{}/cve.json", year, month)
}

/// Month index, linking its disclosure set when `has_disclosures` is set
pub fn month_index(year: &str, month: &str, has_disclosures: bool) -> Value {
    let mut links = json!({
        "self": {"href": url(&format!("timeline/{}/{}/index.json", year, month))}
    });
    if has_disclosures {
        links["cve-json"] = json!({
            "href": url(&cve_json_path(year, month)),
            "type": "application/json"
        });
    }

    json!({
        "kind": "month",
        "title": format!(".NET Release Timeline - {}-{}", year, month),
        "year": year,
        "month": month,
        "security": has_disclosures,
        "_links": links
    })
}

/// Disclosure with one affected product per `(release, platforms)` pair
pub fn cve(id: &str, severity: &str, platforms: &[&str]) -> Value {
    json!({
        "id": id,
        "problem": format!("{} problem", id),
        "description": [format!("{} description", id)],
        "cvss": {"version": "3.1", "vector": "CVSS:3.1/AV:N/AC:L", "score": 7.5, "severity": severity},
        "timeline": {"disclosure": {"date": "2025-02-11", "description": "Disclosed"}},
        "platforms": platforms,
        "architectures": ["all"],
        "references": [format!("https://example.test/{}", id)],
        "cna": "microsoft"
    })
}

pub fn product(cve_id: &str, release: &str) -> Value {
    json!({
        "cve_id": cve_id,
        "name": "dotnet-runtime",
        "min_vulnerable": format!("{}.0", release),
        "max_vulnerable": format!("{}.1", release),
        "fixed": format!("{}.2", release),
        "release": release,
        "commits": []
    })
}

pub fn cve_records(title: &str, disclosures: Vec<Value>, products: Vec<Value>) -> Value {
    json!({
        "last_updated": "2025-02-11",
        "title": title,
        "disclosures": disclosures,
        "products": products,
        "packages": []
    })
}
