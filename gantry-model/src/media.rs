use gantry_types::{IntString, Object, decode_object_or_string};
use serde::{Deserialize, Deserializer, Serialize};

/// A media reference passed between services when attaching files.
///
/// Three wire shapes: the full object, a bare numeric-id string for media
/// already registered with the media service, or a bare opaque reference
/// key for media still held by an external provider. A collapsed string
/// that parses to a positive integer is a media id; zero or anything
/// non-numeric is a reference key (zero is never a valid id).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaParam {
    pub media_id: IntString,
    /// Opaque external-provider reference key.
    pub ref_key: String,
    pub name: String,
    pub url: String,
}

impl MediaParam {
    /// Interprets a collapsed wire string as either a media id or a
    /// reference key.
    #[must_use]
    pub fn from_key(key: String) -> Self {
        let id = IntString::from_str_lossy(&key);
        if id.is_positive() {
            Self {
                media_id: id,
                ..Self::default()
            }
        } else {
            Self {
                ref_key: key,
                ..Self::default()
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MediaParamRepr {
    #[serde(default)]
    media_id: IntString,
    #[serde(default)]
    ref_key: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    url: String,
}

impl<'de> Deserialize<'de> for MediaParam {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        decode_object_or_string(
            "media param",
            deserializer,
            |r: MediaParamRepr| Self {
                media_id: r.media_id,
                ref_key: r.ref_key,
                name: r.name,
                url: r.url,
            },
            Self::from_key,
        )
    }
}

/// A stored media record as returned by the media service.
///
/// `ref_info` is the provider's own metadata blob; its shape varies per
/// provider and is probed through the dynamic accessors rather than
/// declared up front.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub media_id: IntString,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub ref_info: Object,
}
