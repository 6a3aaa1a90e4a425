//! Character profile tools.
//!
//! These endpoints share one shape: API key, server ID and character ID in,
//! `/df/servers/{serverId}/characters/{characterId}{suffix}` out.

use crate::domains::tools::passthrough::PassthroughTool;
use crate::domains::tools::request::ParameterBag;

use super::super::common::{CharacterParams, api_key_query};

macro_rules! character_profile_tool {
    ($(#[$meta:meta])* $tool:ident, $name:literal, $suffix:literal, $description:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $tool;

        impl $tool {
            /// Path appended after the character ID.
            pub const SUFFIX: &'static str = $suffix;
        }

        impl PassthroughTool for $tool {
            type Params = CharacterParams;

            const NAME: &'static str = $name;
            const DESCRIPTION: &'static str = $description;

            fn path(params: &CharacterParams) -> String {
                params.character_path(Self::SUFFIX)
            }

            fn query(params: &CharacterParams) -> ParameterBag {
                api_key_query(&params.apikey)
            }
        }
    };
}

character_profile_tool!(
    /// Basic character information (level, job, guild, adventure name).
    SearchCharacterBasicInformationTool,
    "searchCharacterBasicInformation",
    "",
    "Get a character's basic information."
);

character_profile_tool!(
    SearchCharacterEquippedEquipmentTool,
    "searchCharacterEquippedEquipment",
    "/equip/equipment",
    "Get the equipment a character has equipped."
);

character_profile_tool!(
    SearchCharacterEquippedAvatarTool,
    "searchCharacterEquippedAvatar",
    "/equip/avatar",
    "Get the avatar items a character has equipped."
);

character_profile_tool!(
    SearchCharacterEquippedCreatureTool,
    "searchCharacterEquippedCreature",
    "/equip/creature",
    "Get the creature a character has equipped."
);

character_profile_tool!(
    SearchCharacterEquippedFlagTool,
    "searchCharacterEquippedFlag",
    "/equip/flag",
    "Get the insignia (flag) a character has equipped."
);

character_profile_tool!(
    SearchCharacterEquippedTalismanTool,
    "searchCharacterEquippedTalisman",
    "/equip/talisman",
    "Get the talismans a character has equipped."
);

character_profile_tool!(
    /// Skill style: active and passive skill levels.
    SearchCharacterSkillTool,
    "searchCharacterSkill",
    "/skill/style",
    "Get a character's skill information."
);

character_profile_tool!(
    SearchCharacterSkillBuffEquipmentTool,
    "searchCharacterSkillBuffEquipment",
    "/skill/buff/equip/equipment",
    "Get the buff-skill enhancement equipment a character has equipped."
);

character_profile_tool!(
    SearchCharacterSkillBuffAvatarTool,
    "searchCharacterSkillBuffAvatar",
    "/skill/buff/equip/avatar",
    "Get the buff-skill enhancement avatar a character has equipped."
);

character_profile_tool!(
    SearchCharacterSkillBuffCreatureTool,
    "searchCharacterSkillBuffCreature",
    "/skill/buff/equip/creature",
    "Get the buff-skill enhancement creature a character has equipped."
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::passthrough::testing::{RecordingUpstream, args, context};
    use crate::domains::tools::ToolError;
    use serde_json::json;

    fn params() -> CharacterParams {
        CharacterParams {
            apikey: "KEY".to_string(),
            server_id: "cain".to_string(),
            character_id: "c0ffee".to_string(),
        }
    }

    #[test]
    fn test_profile_paths() {
        let p = params();
        let base = "/df/servers/cain/characters/c0ffee";
        let cases = [
            (SearchCharacterBasicInformationTool::path(&p), base.to_string()),
            (SearchCharacterEquippedEquipmentTool::path(&p), format!("{}/equip/equipment", base)),
            (SearchCharacterEquippedAvatarTool::path(&p), format!("{}/equip/avatar", base)),
            (SearchCharacterEquippedCreatureTool::path(&p), format!("{}/equip/creature", base)),
            (SearchCharacterEquippedFlagTool::path(&p), format!("{}/equip/flag", base)),
            (SearchCharacterEquippedTalismanTool::path(&p), format!("{}/equip/talisman", base)),
            (SearchCharacterSkillTool::path(&p), format!("{}/skill/style", base)),
            (
                SearchCharacterSkillBuffEquipmentTool::path(&p),
                format!("{}/skill/buff/equip/equipment", base),
            ),
            (
                SearchCharacterSkillBuffAvatarTool::path(&p),
                format!("{}/skill/buff/equip/avatar", base),
            ),
            (
                SearchCharacterSkillBuffCreatureTool::path(&p),
                format!("{}/skill/buff/equip/creature", base),
            ),
        ];

        for (actual, expected) in cases {
            assert_eq!(actual, expected);
        }
    }

    #[tokio::test]
    async fn test_equipment_request() {
        let upstream = RecordingUpstream::replying(r#"{"equipment":[]}"#);
        context(upstream.clone())
            .invoke::<SearchCharacterEquippedEquipmentTool>(args(json!({
                "apikey": "KEY\t",
                "serverId": "cain",
                "characterId": "c0ffee"
            })))
            .await
            .unwrap();

        assert_eq!(
            upstream.requests(),
            vec![
                "https://api.example.test/df/servers/cain/characters/c0ffee/equip/equipment?apikey=KEY"
                    .to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_character_id_is_rejected() {
        let upstream = RecordingUpstream::replying("");
        let result = context(upstream.clone())
            .invoke::<SearchCharacterSkillTool>(args(json!({ "apikey": "KEY", "serverId": "cain" })))
            .await;

        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
        assert!(upstream.requests().is_empty());
    }
}
