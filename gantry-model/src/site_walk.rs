use gantry_types::{IntString, decode_object_or_string};
use serde::{Deserialize, Deserializer, Serialize};

/// A site-walk category as returned by the inspection service.
///
/// The inspection service collapses this to the bare `site_walk_type` key
/// when the caller did not ask for full detail, so the wire form is either
/// the full object or a lone string. Output is always the object form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteWalkType {
    /// Identity key; the only field populated in the collapsed form.
    pub site_walk_type: String,
    pub site_walk_id: IntString,
    pub name: String,
    pub sort_no: IntString,
    pub status: String,
}

impl SiteWalkType {
    /// Creates a value carrying only the identity key, as produced by the
    /// collapsed wire form.
    #[must_use]
    pub fn from_key(site_walk_type: impl Into<String>) -> Self {
        Self {
            site_walk_type: site_walk_type.into(),
            ..Self::default()
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SiteWalkTypeRepr {
    site_walk_type: String,
    #[serde(default)]
    site_walk_id: IntString,
    #[serde(default)]
    name: String,
    #[serde(default)]
    sort_no: IntString,
    #[serde(default)]
    status: String,
}

impl<'de> Deserialize<'de> for SiteWalkType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        decode_object_or_string(
            "site walk type",
            deserializer,
            |r: SiteWalkTypeRepr| Self {
                site_walk_type: r.site_walk_type,
                site_walk_id: r.site_walk_id,
                name: r.name,
                sort_no: r.sort_no,
                status: r.status,
            },
            Self::from_key,
        )
    }
}
