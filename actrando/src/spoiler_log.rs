use crate::randomize::Randomization;
use crate::settings::{BossRushType, MarahnaPath};
use actrando_game::GameData;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize, Deserialize)]
pub struct SpoilerRoom {
    pub map: String,
    pub name: String,
}

#[derive(Serialize, Deserialize)]
pub struct SpoilerLog {
    pub version: String,
    pub seed: usize,
    pub hash: String,
    pub marahna_path: MarahnaPath,
    pub boss_rush_type: BossRushType,
    pub map_order: Vec<SpoilerRoom>,
}

impl SpoilerLog {
    pub fn new(randomization: &Randomization, game_data: &GameData) -> Self {
        let map_order = randomization
            .map_order
            .iter()
            .map(|&map| SpoilerRoom {
                map: format!("{map:03X}"),
                name: game_data.map_name(map).to_string(),
            })
            .collect();
        SpoilerLog {
            version: crate::VERSION.to_string(),
            seed: randomization.seed,
            hash: randomization.hash.clone(),
            marahna_path: randomization.marahna_path,
            boss_rush_type: randomization.boss_rush_type,
            map_order,
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let spoiler_str = serde_json::to_string_pretty(self)?;
        std::fs::write(path, spoiler_str)
            .with_context(|| format!("Unable to write spoiler log at {}", path.display()))?;
        Ok(())
    }
}

/// The console spoiler: the resolved options and the run in rows of ten,
/// ten map numbers filling the exact width of the rule lines.
pub fn spoiler_text(randomization: &Randomization) -> String {
    let mut out = String::new();
    out.push_str(&"-".repeat(39));
    out.push('\n');
    out.push_str(&format!("Marahna II path: {}\n", randomization.marahna_path));
    out.push_str(&format!("Boss rush type: {}\n", randomization.boss_rush_type));
    for row in randomization.map_order.chunks(10) {
        let cells: Vec<String> = row.iter().map(|map| format!("{map:03X}")).collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out.push_str(&"-".repeat(39));
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::randomize::randomize;
    use crate::settings::RandomizerSettings;

    #[test]
    fn text_lists_the_run_in_rows_of_ten() {
        let r = randomize(12345, &RandomizerSettings::default()).unwrap();
        let text = spoiler_text(&r);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "-".repeat(39));
        assert_eq!(lines[1], "Marahna II path: right");
        assert_eq!(lines[2], "Boss rush type: scattered");
        for row in &lines[3..8] {
            assert_eq!(row.split(' ').count(), 10);
            assert_eq!(row.len(), 39);
        }
        assert!(lines[3].starts_with("801 "));
        assert!(lines[7].ends_with(" 801"));
        assert_eq!(lines[8], "-".repeat(39));
    }

    #[test]
    fn json_names_every_room() {
        let game_data = GameData::new().unwrap();
        let r = randomize(12345, &RandomizerSettings::default()).unwrap();
        let log = SpoilerLog::new(&r, &game_data);
        assert_eq!(log.map_order.len(), r.map_order.len());
        assert!(log
            .map_order
            .iter()
            .any(|room| room.name == "Death Heim (Hub room)"));

        let json = serde_json::to_string(&log).unwrap();
        let parsed: SpoilerLog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.seed, 12345);
        assert_eq!(parsed.hash, r.hash);
        assert_eq!(parsed.boss_rush_type, r.boss_rush_type);
        assert_eq!(parsed.map_order[0].map, "801");
    }
}
