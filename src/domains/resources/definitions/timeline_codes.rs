//! Timeline code reference table.
//!
//! Codes returned in `getCharacterTimeline` rows. The table is appended to
//! that tool's description and also served as a resource.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

/// `(code, meaning)` pairs, ordered by code.
pub const TIMELINE_CODES: &[(u16, &str)] = &[
    (101, "Character created"),
    (102, "Character renamed"),
    (103, "Job advancement"),
    (104, "Reached maximum level"),
    (105, "Adventure group name changed"),
    (201, "Raid"),
    (202, "Tower of Sorrow conquered"),
    (203, "Tower of Despair conquered"),
    (204, "(Legacy) Beast dungeon cleared"),
    (205, "Imperial Arena hard mode cleared"),
    (206, "Beast dungeon cleared"),
    (207, "Fiend War cleared"),
    (208, "Tower of the Tomb conquered"),
    (209, "Legion cleared"),
    (210, "Raid (advance party)"),
    (301, "Arena experience grade up"),
    (401, "Item reinforced"),
    (402, "Item amplified"),
    (403, "Item refined"),
    (404, "Item modified"),
    (405, "Item engraved"),
    (406, "Item inherited"),
    (407, "Item forged"),
    (501, "Item obtained (sealed lockbox)"),
    (502, "Legendary obtained"),
    (503, "Epic legendary obtained"),
    (504, "Item obtained (jar & box)"),
    (505, "Item obtained (dungeon drop)"),
    (506, "Item obtained (engraving exchange)"),
    (507, "Item obtained (raid card reward)"),
    (508, "Item obtained (shop)"),
    (509, "Item transcendence sent (NPC)"),
    (510, "Item exchanged"),
    (511, "Item obtained (upgrade)"),
    (512, "Power"),
    (513, "Item obtained (dungeon card reward)"),
    (514, "Item obtained (recipe)"),
    (515, "Item transcendence received (NPC)"),
    (516, "Item transcended (transcendence stone)"),
    (517, "Item fusion / separation"),
    (518, "Special item obtained"),
    (519, "Item converted"),
    (520, "Item obtained (equipment crafting)"),
    (521, "Item obtained (raid auction reward)"),
    (601, "Rune obtained"),
    (602, "Talisman obtained"),
];

/// Render [`TIMELINE_CODES`] as a markdown table.
pub fn timeline_code_table() -> String {
    let mut table = String::from("|id|detail|\n|:----|:----|\n");
    for (code, detail) in TIMELINE_CODES {
        table.push_str(&format!("|{}|{}|\n", code, detail));
    }
    table
}

pub struct TimelineCodesResource;

impl ResourceDefinition for TimelineCodesResource {
    const URI: &'static str = "dnf://reference/timeline-codes";
    const NAME: &'static str = "Timeline Codes";
    const DESCRIPTION: &'static str = "Meaning of the codes returned by getCharacterTimeline";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::Text(timeline_code_table())
    }
}
