use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InitialLives {
    Extra,
    Unlimited,
    DeathCount,
}

#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MarahnaPath {
    Left,
    Right,
}

#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BossRushType {
    Consecutive,
    Scattered,
}

/// Options as chosen on the command line. A `None` means "let the seed
/// decide", which is distinct from either explicit choice: the flag string
/// only includes options the player pinned down.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct RandomizerSettings {
    pub initial_lives: Option<InitialLives>,
    pub zantetsuken: bool,
    pub marahna_path: Option<MarahnaPath>,
    pub boss_rush_type: Option<BossRushType>,
}

impl RandomizerSettings {
    pub fn flag_string(&self) -> String {
        let mut flags = String::new();
        match self.initial_lives {
            Some(InitialLives::Extra) => flags.push('E'),
            Some(InitialLives::Unlimited) => flags.push('U'),
            Some(InitialLives::DeathCount) => flags.push('D'),
            None => {}
        }
        if self.zantetsuken {
            flags.push('Z');
        }
        match self.marahna_path {
            Some(MarahnaPath::Left) => flags.push('L'),
            Some(MarahnaPath::Right) => flags.push('R'),
            None => {}
        }
        match self.boss_rush_type {
            Some(BossRushType::Consecutive) => flags.push('C'),
            Some(BossRushType::Scattered) => flags.push('S'),
            None => {}
        }
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_string_orders_options() {
        let settings = RandomizerSettings {
            initial_lives: Some(InitialLives::Extra),
            zantetsuken: true,
            marahna_path: Some(MarahnaPath::Left),
            boss_rush_type: Some(BossRushType::Consecutive),
        };
        assert_eq!(settings.flag_string(), "EZLC");
        assert_eq!(RandomizerSettings::default().flag_string(), "");
        let settings = RandomizerSettings {
            initial_lives: Some(InitialLives::DeathCount),
            boss_rush_type: Some(BossRushType::Scattered),
            ..RandomizerSettings::default()
        };
        assert_eq!(settings.flag_string(), "DS");
    }

    #[test]
    fn options_render_lowercase() {
        assert_eq!(MarahnaPath::Right.to_string(), "right");
        assert_eq!(BossRushType::Scattered.to_string(), "scattered");
        assert_eq!(InitialLives::DeathCount.to_string(), "deathcount");
    }
}
