//! Parameter types shared across tools.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::request::ParameterBag;

/// Arguments for endpoints that only need the API key.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ApiKeyParams {
    #[schemars(description = "Neople Open API key")]
    pub apikey: String,
}

/// Arguments for endpoints scoped to a single character.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CharacterParams {
    #[schemars(description = "Neople Open API key")]
    pub apikey: String,

    #[schemars(description = "Server ID (e.g. cain, diregie)")]
    pub server_id: String,

    #[schemars(description = "Character ID")]
    pub character_id: String,
}

impl CharacterParams {
    /// `/df/servers/{serverId}/characters/{characterId}` followed by `suffix`.
    ///
    /// Segments are interpolated as given; callers supply path-safe IDs.
    pub fn character_path(&self, suffix: &str) -> String {
        character_path(&self.server_id, &self.character_id, suffix)
    }
}

pub fn character_path(server_id: &str, character_id: &str, suffix: &str) -> String {
    format!("/df/servers/{}/characters/{}{}", server_id, character_id, suffix)
}

/// The query every endpoint starts with: the trimmed API key.
pub fn api_key_query(apikey: &str) -> ParameterBag {
    ParameterBag::new().with("apikey", apikey.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_params_wire_names() {
        let json = r#"{"apikey": "k", "serverId": "cain", "characterId": "abc123"}"#;
        let params: CharacterParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.server_id, "cain");
        assert_eq!(params.character_id, "abc123");
        assert_eq!(
            params.character_path("/equip/flag"),
            "/df/servers/cain/characters/abc123/equip/flag"
        );
    }

    #[test]
    fn test_api_key_is_trimmed() {
        assert_eq!(api_key_query("  k \n").to_query_string(), "apikey=k");
    }

    #[test]
    fn test_path_segments_are_not_encoded() {
        assert_eq!(
            character_path("all", "a b", ""),
            "/df/servers/all/characters/a b"
        );
    }
}
