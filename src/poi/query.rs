//! Overpass QL for supermarket-like shop nodes inside a bounding box.

use crate::location::BoundingBox;

/// Server-side evaluation limit, in seconds.
pub const SERVER_TIMEOUT_SECS: u32 = 30;

/// Tag filters, each applied as its own `node[...]` clause.
const SHOP_FILTERS: &[&str] = &[
    r#"["shop"="supermarket"]"#,
    r#"["shop"="convenience"]"#,
    r#"["shop"="grocery"]"#,
    r#"["shop"="yes"]"#,
    // "supermarket" in English and Persian, plus Persian "store"
    r#"["name"~"supermarket|سوپرمارکت|فروشگاه",i]"#,
];

/// Union of every shop filter, restricted to nodes in `bbox`.
pub fn build(bbox: &BoundingBox) -> String {
    let area = bbox.to_string();
    let mut query = format!("[out:json][timeout:{}];\n(\n", SERVER_TIMEOUT_SECS);
    for filter in SHOP_FILTERS {
        query.push_str(&format!("node{}({});\n", filter, area));
    }
    query.push_str(");\nout body;\n");
    query
}
