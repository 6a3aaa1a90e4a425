//! Character tools.
//!
//! - `search`: name search within a server
//! - `profile`: basic information, equipment, skills and buff loadouts
//! - `timeline`: character history events
//! - `fame`: search by fame across one or all servers

pub mod fame;
pub mod profile;
pub mod search;
pub mod timeline;

pub use fame::{SearchCharactersByFameParams, SearchCharactersByFameTool};
pub use profile::{
    SearchCharacterBasicInformationTool, SearchCharacterEquippedAvatarTool,
    SearchCharacterEquippedCreatureTool, SearchCharacterEquippedEquipmentTool,
    SearchCharacterEquippedFlagTool, SearchCharacterEquippedTalismanTool,
    SearchCharacterSkillBuffAvatarTool, SearchCharacterSkillBuffCreatureTool,
    SearchCharacterSkillBuffEquipmentTool, SearchCharacterSkillTool,
};
pub use search::{SearchCharacterParams, SearchCharacterTool, WordType};
pub use timeline::{GetCharacterTimelineParams, GetCharacterTimelineTool};
