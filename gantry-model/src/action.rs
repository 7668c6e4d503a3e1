use gantry_types::{IntString, decode_object_or_string};
use serde::{Deserialize, Deserializer, Serialize};

/// A workflow action as surfaced to clients.
///
/// The workflow service collapses this to the bare `action_key` when the
/// action list is requested without detail. Same wire contract as
/// [`SiteWalkType`](crate::SiteWalkType).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionView {
    /// Identity key; the only field populated in the collapsed form.
    pub action_key: String,
    pub action_id: IntString,
    pub name: String,
    pub icon: String,
    pub enabled: bool,
}

impl ActionView {
    /// Creates a value carrying only the identity key.
    #[must_use]
    pub fn from_key(action_key: impl Into<String>) -> Self {
        Self {
            action_key: action_key.into(),
            ..Self::default()
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActionViewRepr {
    action_key: String,
    #[serde(default)]
    action_id: IntString,
    #[serde(default)]
    name: String,
    #[serde(default)]
    icon: String,
    #[serde(default)]
    enabled: bool,
}

impl<'de> Deserialize<'de> for ActionView {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        decode_object_or_string(
            "action view",
            deserializer,
            |r: ActionViewRepr| Self {
                action_key: r.action_key,
                action_id: r.action_id,
                name: r.name,
                icon: r.icon,
                enabled: r.enabled,
            },
            Self::from_key,
        )
    }
}
