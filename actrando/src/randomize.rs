use crate::settings::{BossRushType, MarahnaPath, RandomizerSettings};
use actrando_game::{
    base_map_pool, MapId, BOSS_ROOMS, BOSS_RUSH_PLACEHOLDER, DEATH_HEIM_HUB, ENDING_MAP,
    MARAHNA_II_LEFT, MARAHNA_II_RIGHT,
};
use anyhow::{ensure, Context, Result};
use log::debug;
use md5::{Digest, Md5};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

// The in-game room counter is a two-digit BCD byte.
pub const MAX_RUN_ROOMS: usize = 99;

pub struct Randomization {
    pub seed: usize,
    /// The full run: leading and trailing ending sentinels around every
    /// playable room, in visit order.
    pub map_order: Vec<MapId>,
    pub marahna_path: MarahnaPath,
    pub boss_rush_type: BossRushType,
    pub hash: String,
}

fn seed_hash(map_order: &[MapId]) -> String {
    let mut input = crate::VERSION.to_string();
    for &map in map_order {
        input.push(',');
        input.push_str(&format!("{map:X}"));
    }
    let digest = Md5::digest(input.as_bytes());
    digest[..4].iter().map(|b| format!("{b:02X}")).collect()
}

/// Cap the run length, then bound it with ending sentinels: the leading one
/// is reached when the room counter wraps past 99, the trailing one rolls
/// the credits after the last room.
fn linearize(rooms: Vec<MapId>) -> Result<Vec<MapId>> {
    ensure!(
        rooms.len() <= MAX_RUN_ROOMS,
        "run of {} rooms does not fit the room counter",
        rooms.len()
    );
    ensure!(!rooms.contains(&BOSS_RUSH_PLACEHOLDER));
    let mut run = Vec::with_capacity(rooms.len() + 2);
    run.push(ENDING_MAP);
    run.extend(rooms);
    run.push(ENDING_MAP);
    Ok(run)
}

pub fn randomize(seed: usize, settings: &RandomizerSettings) -> Result<Randomization> {
    let mut rng_seed = [0u8; 32];
    rng_seed[..8].copy_from_slice(&seed.to_le_bytes());
    let mut rng = rand::rngs::StdRng::from_seed(rng_seed);

    // Flip both coins before looking at the overrides, so the shuffle below
    // draws the same values for a given seed no matter which options were
    // pinned on the command line.
    let marahna_flip = if rng.gen_range(0..2) == 0 {
        MarahnaPath::Left
    } else {
        MarahnaPath::Right
    };
    let rush_flip = if rng.gen_range(0..2) == 0 {
        BossRushType::Consecutive
    } else {
        BossRushType::Scattered
    };
    let marahna_path = settings.marahna_path.unwrap_or(marahna_flip);
    let boss_rush_type = settings.boss_rush_type.unwrap_or(rush_flip);
    debug!("Marahna II path: {marahna_path}");
    debug!("Boss rush type: {boss_rush_type}");

    let marahna_map = match marahna_path {
        MarahnaPath::Left => MARAHNA_II_LEFT,
        MarahnaPath::Right => MARAHNA_II_RIGHT,
    };
    let mut rooms = base_map_pool(marahna_map);
    rooms.shuffle(&mut rng);

    // Shuffle the rematches, with the hub clear always closing out the rush.
    let mut boss_rush: Vec<MapId> = BOSS_ROOMS.to_vec();
    boss_rush.shuffle(&mut rng);
    boss_rush.push(DEATH_HEIM_HUB);

    match boss_rush_type {
        BossRushType::Consecutive => {
            rooms.retain(|&map| map != BOSS_RUSH_PLACEHOLDER);
            let idx = rng.gen_range(0..=rooms.len());
            for (i, &map) in boss_rush.iter().enumerate() {
                rooms.insert(idx + i, map);
            }
        }
        BossRushType::Scattered => {
            let mut rush = boss_rush.iter().copied();
            for slot in rooms.iter_mut() {
                if *slot == BOSS_RUSH_PLACEHOLDER {
                    *slot = rush.next().context("ran out of rush rooms")?;
                }
            }
            ensure!(rush.next().is_none(), "unplaced rush rooms remain");
        }
    }

    let map_order = linearize(rooms)?;
    let hash = seed_hash(&map_order);
    Ok(Randomization {
        seed,
        map_order,
        marahna_path,
        boss_rush_type,
        hash,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actrando_game::is_death_heim;

    fn run_for(seed: usize, settings: &RandomizerSettings) -> Randomization {
        randomize(seed, settings).unwrap()
    }

    fn family_rooms(map_order: &[MapId]) -> Vec<MapId> {
        map_order.iter().copied().filter(|&m| is_death_heim(m)).collect()
    }

    fn ordinary_rooms(map_order: &[MapId]) -> Vec<MapId> {
        map_order
            .iter()
            .copied()
            .filter(|&m| m != ENDING_MAP && !is_death_heim(m))
            .collect()
    }

    #[test]
    fn seed_12345_default_run() {
        let r = run_for(12345, &RandomizerSettings::default());
        assert_eq!(r.marahna_path, MarahnaPath::Right);
        assert_eq!(r.boss_rush_type, BossRushType::Scattered);
        assert_eq!(
            r.map_order,
            vec![
                0x801, 0x501, 0x402, 0x603, 0x207, 0x301, 0x706, 0x505, 0x608, 0x704,
                0x303, 0x503, 0x405, 0x306, 0x602, 0x407, 0x401, 0x707, 0x504, 0x406,
                0x705, 0x703, 0x604, 0x203, 0x403, 0x206, 0x708, 0x104, 0x201, 0x702,
                0x202, 0x507, 0x302, 0x607, 0x102, 0x103, 0x502, 0x701, 0x204, 0x404,
                0x101, 0x605, 0x208, 0x205, 0x305, 0x304, 0x508, 0x601, 0x606, 0x801,
            ]
        );
        assert_eq!(r.hash, "54B4708A");
    }

    #[test]
    fn seed_12345_consecutive_override() {
        let settings = RandomizerSettings {
            boss_rush_type: Some(BossRushType::Consecutive),
            ..RandomizerSettings::default()
        };
        let r = run_for(12345, &settings);
        assert_eq!(r.boss_rush_type, BossRushType::Consecutive);
        assert_eq!(
            r.map_order,
            vec![
                0x801, 0x501, 0x402, 0x603, 0x207, 0x301, 0x505, 0x608, 0x303, 0x503,
                0x405, 0x306, 0x602, 0x407, 0x401, 0x504, 0x406, 0x604, 0x203, 0x403,
                0x206, 0x104, 0x201, 0x202, 0x507, 0x302, 0x607, 0x102, 0x103, 0x502,
                0x204, 0x404, 0x101, 0x706, 0x704, 0x707, 0x705, 0x703, 0x708, 0x702,
                0x701, 0x605, 0x208, 0x205, 0x305, 0x304, 0x508, 0x601, 0x606, 0x801,
            ]
        );
        assert_eq!(r.hash, "4EA2A721");
    }

    #[test]
    fn small_seed_coin_flips() {
        let cases = [
            (0, MarahnaPath::Left, BossRushType::Scattered),
            (1, MarahnaPath::Left, BossRushType::Consecutive),
            (2, MarahnaPath::Right, BossRushType::Consecutive),
            (3, MarahnaPath::Right, BossRushType::Scattered),
        ];
        for (seed, path, policy) in cases {
            let r = run_for(seed, &RandomizerSettings::default());
            assert_eq!(r.marahna_path, path, "seed {seed}");
            assert_eq!(r.boss_rush_type, policy, "seed {seed}");
        }
    }

    #[test]
    fn overrides_do_not_disturb_the_shuffle() {
        for seed in 0..50 {
            let left = run_for(
                seed,
                &RandomizerSettings {
                    marahna_path: Some(MarahnaPath::Left),
                    ..RandomizerSettings::default()
                },
            );
            let right = run_for(
                seed,
                &RandomizerSettings {
                    marahna_path: Some(MarahnaPath::Right),
                    ..RandomizerSettings::default()
                },
            );
            // Same room order, with only the Marahna variant substituted.
            let masked = |run: &[MapId]| -> Vec<MapId> {
                run.iter()
                    .map(|&m| if m == MARAHNA_II_LEFT || m == MARAHNA_II_RIGHT { 0x5FF } else { m })
                    .collect::<Vec<_>>()
            };
            assert_eq!(masked(&left.map_order), masked(&right.map_order), "seed {seed}");

            let consecutive = run_for(
                seed,
                &RandomizerSettings {
                    boss_rush_type: Some(BossRushType::Consecutive),
                    ..RandomizerSettings::default()
                },
            );
            let scattered = run_for(
                seed,
                &RandomizerSettings {
                    boss_rush_type: Some(BossRushType::Scattered),
                    ..RandomizerSettings::default()
                },
            );
            assert_eq!(
                family_rooms(&consecutive.map_order),
                family_rooms(&scattered.map_order),
                "seed {seed}"
            );
            assert_eq!(
                ordinary_rooms(&consecutive.map_order),
                ordinary_rooms(&scattered.map_order),
                "seed {seed}"
            );
        }
    }

    #[test]
    fn every_run_visits_every_room_once() {
        for seed in 0..300 {
            let r = run_for(seed, &RandomizerSettings::default());
            assert_eq!(r.map_order.len(), 50, "seed {seed}");
            assert_eq!(r.map_order[0], ENDING_MAP);
            assert_eq!(r.map_order[49], ENDING_MAP);
            assert!(!r.map_order.contains(&BOSS_RUSH_PLACEHOLDER));

            let mut ordinary = ordinary_rooms(&r.map_order);
            ordinary.sort_unstable();
            let marahna_map = match r.marahna_path {
                MarahnaPath::Left => MARAHNA_II_LEFT,
                MarahnaPath::Right => MARAHNA_II_RIGHT,
            };
            let mut expected: Vec<MapId> = base_map_pool(marahna_map)
                .into_iter()
                .filter(|&m| m != BOSS_RUSH_PLACEHOLDER)
                .collect();
            expected.sort_unstable();
            assert_eq!(ordinary, expected, "seed {seed}");

            let family = family_rooms(&r.map_order);
            assert_eq!(family.len(), 8, "seed {seed}");
            assert_eq!(family[7], DEATH_HEIM_HUB, "seed {seed}");
            let mut bosses: Vec<MapId> = family[..7].to_vec();
            bosses.sort_unstable();
            assert_eq!(bosses, BOSS_ROOMS.to_vec(), "seed {seed}");
        }
    }

    #[test]
    fn consecutive_runs_keep_the_rush_contiguous() {
        let settings = RandomizerSettings {
            boss_rush_type: Some(BossRushType::Consecutive),
            ..RandomizerSettings::default()
        };
        for seed in 0..300 {
            let r = run_for(seed, &settings);
            let idx: Vec<usize> = r
                .map_order
                .iter()
                .enumerate()
                .filter(|(_, &m)| is_death_heim(m))
                .map(|(i, _)| i)
                .collect();
            assert_eq!(idx.len(), 8, "seed {seed}");
            assert!(idx.windows(2).all(|w| w[1] == w[0] + 1), "seed {seed}");
            assert_eq!(r.map_order[idx[7]], DEATH_HEIM_HUB, "seed {seed}");
        }
    }

    #[test]
    fn consecutive_insertion_reaches_every_position() {
        let settings = RandomizerSettings {
            boss_rush_type: Some(BossRushType::Consecutive),
            ..RandomizerSettings::default()
        };
        let mut seen = [false; 41];
        for seed in 0..=200 {
            let r = run_for(seed, &settings);
            let first = r
                .map_order
                .iter()
                .position(|&m| is_death_heim(m))
                .unwrap();
            seen[first - 1] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn boss_order_varies_between_seeds() {
        let settings = RandomizerSettings {
            boss_rush_type: Some(BossRushType::Scattered),
            ..RandomizerSettings::default()
        };
        let mut orders = std::collections::HashSet::new();
        let mut first_bosses = std::collections::HashSet::new();
        for seed in 0..200 {
            let r = run_for(seed, &settings);
            let family = family_rooms(&r.map_order);
            first_bosses.insert(family[0]);
            orders.insert(family);
        }
        assert!(orders.len() >= 50);
        assert_eq!(first_bosses.len(), BOSS_ROOMS.len());
    }

    #[test]
    fn linearize_rejects_oversized_runs() {
        assert!(linearize(vec![0x101; MAX_RUN_ROOMS]).is_ok());
        assert!(linearize(vec![0x101; MAX_RUN_ROOMS + 1]).is_err());
        let run = linearize(vec![0x101, 0x102]).unwrap();
        assert_eq!(run, vec![ENDING_MAP, 0x101, 0x102, ENDING_MAP]);
    }
}
