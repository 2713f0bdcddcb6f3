use anyhow::{ensure, Result};
use hashbrown::HashMap;

pub type MapId = u16; // Map identifier as the game encodes it: area in the high byte, room in the low byte
pub type PcAddr = usize; // Unmapped byte offset into the 1 MiB ROM image

pub const MARAHNA_II_LEFT: MapId = 0x506;
pub const MARAHNA_II_RIGHT: MapId = 0x507;
pub const BOSS_RUSH_PLACEHOLDER: MapId = 0x700;
pub const DEATH_HEIM_HUB: MapId = 0x701;
pub const ENDING_MAP: MapId = 0x801;

pub const BOSS_ROOMS: [MapId; 7] = [0x702, 0x703, 0x704, 0x705, 0x706, 0x707, 0x708];

// Relocated data, placed in the expansion area past the original 0xF8000 end
// of bank use. The metadata block runs to 0xF9600, leaving the last page for
// the map-change routine and its two tables.
pub const EXTENDED_METADATA_ADDR: PcAddr = 0xF8000;
pub const MAP_CHANGE_ROUTINE_ADDR: PcAddr = 0xF9700;
pub const BOSS_ORDER_TABLE_ADDR: PcAddr = 0xF9780;
pub const EXIT_SLOT_TABLE_ADDR: PcAddr = 0xF9800;
pub const BOSS_ORDER_COUNT: usize = BOSS_ROOMS.len() + 1; // seven rematches plus the hub clear
pub const EXIT_SLOT_COUNT: usize = BOSS_ROOMS.len() + 1; // hub entry plus one per rematch

// Operands inside the original code that the exit compiler rewrites in place.
pub const FIRST_MAP_OPERAND: PcAddr = 0x12B26;
pub const CREDITS_THRESHOLD_OPERAND: PcAddr = 0x12AAA;

/// The seven boss rematch rooms inside Death Heim.
pub fn is_boss_room(map: MapId) -> bool {
    (0x702..=0x708).contains(&map)
}

/// Death Heim family: the hub plus the rematch rooms. These keep their exit
/// destinations in the relocated slot table rather than in level data.
pub fn is_death_heim(map: MapId) -> bool {
    (map >> 8) == 7
}

/// Every ordinary action stage in release order, with Marahna Act II-2
/// resolved to the given variant, followed by one rush placeholder per
/// Death Heim room.
pub fn base_map_pool(marahna_map: MapId) -> Vec<MapId> {
    let mut pool = vec![
        0x101, 0x102, 0x103, 0x104, // Fillmore
        0x201, 0x202, 0x203, 0x204, 0x205, 0x206, 0x207, 0x208, // Bloodpool
        0x301, 0x302, 0x303, 0x304, 0x305, 0x306, // Kasandora
        0x401, 0x402, 0x403, 0x404, 0x405, 0x406, 0x407, // Aitos
        0x501, 0x502, 0x503, 0x504, 0x505, marahna_map, 0x508, // Marahna
        0x601, 0x602, 0x603, 0x604, 0x605, 0x606, 0x607, 0x608, // Northwall
    ];
    pool.extend(std::iter::repeat(BOSS_RUSH_PLACEHOLDER).take(BOSS_ORDER_COUNT));
    pool
}

#[derive(Default)]
pub struct GameData {
    pub exit_operands: HashMap<MapId, &'static [PcAddr]>,
    pub map_names: HashMap<MapId, &'static str>,
}

impl GameData {
    pub fn new() -> Result<GameData> {
        let mut game_data = GameData::default();
        for &(map, addrs) in EXIT_OPERANDS {
            ensure!(!is_death_heim(map), "map {map:03X} must use the slot table");
            ensure!(!addrs.is_empty(), "map {map:03X} has no exit operands");
            for &addr in addrs {
                ensure!(
                    addr + 1 < EXTENDED_METADATA_ADDR,
                    "exit operand {addr:05X} for map {map:03X} out of range"
                );
            }
            let prev = game_data.exit_operands.insert(map, addrs);
            ensure!(prev.is_none(), "duplicate exit operands for map {map:03X}");
        }
        for &(map, name) in MAP_NAMES {
            game_data.map_names.insert(map, name);
        }
        for map in base_map_pool(MARAHNA_II_LEFT) {
            if map != BOSS_RUSH_PLACEHOLDER {
                ensure!(
                    game_data.exit_operands.contains_key(&map),
                    "map {map:03X} missing exit operands"
                );
            }
        }
        ensure!(game_data.exit_operands.contains_key(&MARAHNA_II_RIGHT));
        ensure!(
            EXTENDED_MAP_METADATA.len() == 0x1600,
            "metadata block has drifted from its reserved size"
        );
        Ok(game_data)
    }

    pub fn map_name(&self, map: MapId) -> &'static str {
        self.map_names.get(&map).copied().unwrap_or("(unknown map)")
    }
}

pub const EXIT_OPERANDS: &[(MapId, &[PcAddr])] = &[
    // Fillmore
    (0x101, &[0x30267]),
    (0x102, &[0x30396]),
    (0x103, &[0x30514]),
    (0x104, &[0x30654]),
    // Bloodpool
    (0x201, &[0x3429B]),
    (0x202, &[0x34442]),
    (0x203, &[0x344EC]),
    (0x204, &[0x34694]),
    (0x205, &[0x347E4]),
    (0x206, &[0x348CD]),
    (0x207, &[0x34AA2]),
    (0x208, &[0x34C38]),
    // Kasandora
    (0x301, &[0x38334]),
    (0x302, &[0x38482]),
    (0x303, &[0x38526]),
    (0x304, &[0x387A8]),
    (0x305, &[0x389B6, 0x38A67]),
    (0x306, &[0x38B71]),
    // Aitos
    (0x401, &[0x3C2B4]),
    (0x402, &[0x3C4D3]),
    (0x403, &[0x3C54F]),
    (0x404, &[0x3C755]),
    (0x405, &[0x3C903]),
    (0x406, &[0x3CAA7]),
    (0x407, &[0x3CCE6]),
    // Marahna
    (0x501, &[0x4023A]),
    (0x502, &[0x403D3]),
    (0x503, &[0x40517]),
    (0x504, &[0x40578]),
    (0x505, &[0x406A0, 0x40788]),
    (0x506, &[0x40853]),
    (0x507, &[0x40A1D]),
    (0x508, &[0x40C51]),
    // Northwall
    (0x601, &[0x44221]),
    (0x602, &[0x443DF]),
    (0x603, &[0x44581]),
    (0x604, &[0x44746]),
    (0x605, &[0x44859]),
    (0x606, &[0x44A93]),
    (0x607, &[0x44C83]),
    (0x608, &[0x44D5D]),
];

pub const MAP_NAMES: &[(MapId, &str)] = &[
    (0x000, "Title Screen"),
    (0x001, "Town of Fillmore"),
    (0x002, "Town of Bloodpool"),
    (0x003, "Town of Kasandora"),
    (0x004, "Town of Aitos"),
    (0x005, "Town of Marahna"),
    (0x006, "Town of Northwall"),
    (0x007, "Sky Palace"),
    (0x008, "Temple Interior"),
    (0x009, "Overworld"),
    (0x101, "Forest (Centaur Knight)"),
    (0x102, "Caves I (Skeltous)"),
    (0x103, "Caves II (Endless climb)"),
    (0x104, "Caves III (Minotaurus)"),
    (0x201, "Swamp (Manticore)"),
    (0x202, "Castle I (Front gate)"),
    (0x203, "Castle II (First elevator)"),
    (0x204, "Castle III (Glowing cellar)"),
    (0x205, "Castle IV (Second elevator)"),
    (0x206, "Castle V (Atop the wall)"),
    (0x207, "Castle VI (Yoku blocks)"),
    (0x208, "Castle VII (Zeppelin Wolf)"),
    (0x301, "Desert I (Shifting sands)"),
    (0x302, "Desert II (Dagoba)"),
    (0x303, "Pyramid I (Mummy crypt)"),
    (0x304, "Pyramid II (Anubis statues)"),
    (0x305, "Pyramid III (Elevator race)"),
    (0x306, "Pyramid IV (Pharaoh)"),
    (0x401, "Mountains I (Auto-scroller)"),
    (0x402, "Mountains II (Waterfall)"),
    (0x403, "Mountains III (Serpent)"),
    (0x404, "Volcano I (Hall of giants)"),
    (0x405, "Volcano II (Magma chamber)"),
    (0x406, "Volcano III (Samurai archers)"),
    (0x407, "Volcano IV (Fire Wheel)"),
    (0x501, "Jungle I (Overgrown ruins)"),
    (0x502, "Jungle II (Falling snakes)"),
    (0x503, "Jungle III (Rafflasher)"),
    (0x504, "Temple I (Stone elevator)"),
    (0x505, "Temple II (Choose a path)"),
    (0x506, "Temple III (Left path)"),
    (0x507, "Temple IV (Right path)"),
    (0x508, "Temple V (Kalia)"),
    (0x601, "Arctic I (Snowfield)"),
    (0x602, "Arctic II (Ice-cube rafts)"),
    (0x603, "Arctic III (Ride the sled)"),
    (0x604, "Arctic IV (Merman Fly)"),
    (0x605, "Great Tree I (Tree entrance)"),
    (0x606, "Great Tree II (Lower trunk)"),
    (0x607, "Great Tree III (Upper trunk)"),
    (0x608, "Great Tree IV (Arctic Wyvern)"),
    (0x701, "Death Heim (Hub room)"),
    (0x702, "Death Heim (Minotaurus)"),
    (0x703, "Death Heim (Zeppelin Wolf)"),
    (0x704, "Death Heim (Pharaoh)"),
    (0x705, "Death Heim (Fire Wheel)"),
    (0x706, "Death Heim (Kalia)"),
    (0x707, "Death Heim (Arctic Wyvern)"),
    (0x708, "Death Heim (Tanzra)"),
    (0x801, "Ending"),
];

pub const EXTENDED_MAP_METADATA: &[u8] = &[
    // [53 59]
    0x53, 0x59, 0x00,
    // [00 00] Title Screen
    0x00, 0x00, 0x08, 0x01, 0x20, 0x80, 0x20, 0x00, 0x01, 0x1A, 0x88, 0x0C, 0x20, 0x80, 0x20, 0x00,
    0x04, 0x1A, 0x90, 0x0C, 0x02, 0x00, 0x00, 0xB8, 0x14, 0x0D, 0x40, 0x00, 0x80, 0x00, 0x93, 0x3A,
    0x0E, 0x80, 0x80, 0x20, 0xFF, 0x00, 0x83, 0x05, 0x10, 0x80, 0x7D, 0x8E, 0x02, 0x80, 0x00, 0x08,
    0x50, 0xFB, 0xEC, 0x0B, 0x00,
    // [00 01] Town of Fillmore
    0x00, 0x01, 0x08, 0x02, 0x40, 0x00, 0x80, 0x00, 0x93, 0x3B, 0x0E, 0x20, 0x80, 0x20, 0x00, 0x01,
    0x1A, 0x88, 0x0C, 0x80, 0x80, 0x20, 0x00, 0x00, 0x00, 0x06, 0x80, 0x80, 0x20, 0x00, 0x00, 0x40,
    0x06, 0x20, 0x80, 0x20, 0x00, 0x02, 0x1A, 0x98, 0x0C, 0x20, 0x80, 0x20, 0x00, 0x04, 0x1A, 0x90,
    0x0C, 0x40, 0x00, 0x80, 0x80, 0x93, 0x3C, 0x0E, 0x80, 0x80, 0x20, 0x20, 0x00, 0x80, 0x06, 0x10,
    0x82, 0x98, 0xDE, 0x0D, 0x02, 0x01, 0x00, 0xED, 0xAB, 0x0D, 0x02, 0x01, 0x01, 0x63, 0x6F, 0x0D,
    0x02, 0x01, 0x02, 0x54, 0x85, 0x0D, 0x02, 0x01, 0x03, 0xAB, 0xA2, 0x0D, 0x00,
    // [00 02] Town of Bloodpool
    0x00, 0x02, 0x08, 0x02, 0x40, 0x00, 0x80, 0x00, 0x93, 0x3B, 0x0E, 0x20, 0x80, 0x20, 0x00, 0x01,
    0x1A, 0x88, 0x0C, 0x80, 0x80, 0x20, 0x00, 0x00, 0x00, 0x06, 0x80, 0x80, 0x20, 0x00, 0x00, 0x40,
    0x06, 0x20, 0x80, 0x20, 0x00, 0x02, 0x1A, 0x98, 0x0C, 0x20, 0x80, 0x20, 0x00, 0x04, 0x1A, 0x90,
    0x0C, 0x40, 0x00, 0x80, 0x80, 0x93, 0x3C, 0x0E, 0x80, 0x80, 0x20, 0x20, 0x00, 0x80, 0x06, 0x10,
    0x82, 0x98, 0xDE, 0x0D, 0x02, 0x01, 0x00, 0xED, 0xAB, 0x0D, 0x02, 0x01, 0x01, 0x63, 0x6F, 0x0D,
    0x02, 0x01, 0x02, 0x54, 0x85, 0x0D, 0x02, 0x01, 0x03, 0xAB, 0xA2, 0x0D, 0x00,
    // [00 03] Town of Kasandora
    0x00, 0x03, 0x08, 0x02, 0x40, 0x00, 0x80, 0x00, 0x93, 0x3B, 0x0E, 0x20, 0x80, 0x20, 0x00, 0x01,
    0x1A, 0x88, 0x0C, 0x80, 0x80, 0x20, 0x00, 0x00, 0x00, 0x06, 0x80, 0x80, 0x20, 0x00, 0x00, 0x40,
    0x06, 0x20, 0x80, 0x20, 0x00, 0x02, 0x1A, 0x98, 0x0C, 0x20, 0x80, 0x20, 0x00, 0x04, 0x1A, 0x90,
    0x0C, 0x40, 0x00, 0x80, 0x80, 0x93, 0x3C, 0x0E, 0x80, 0x80, 0x20, 0x20, 0x00, 0x80, 0x06, 0x10,
    0x82, 0x98, 0xDE, 0x0D, 0x02, 0x01, 0x00, 0xED, 0xAB, 0x0D, 0x02, 0x01, 0x01, 0x63, 0x6F, 0x0D,
    0x02, 0x01, 0x02, 0x54, 0x85, 0x0D, 0x02, 0x01, 0x03, 0xAB, 0xA2, 0x0D, 0x00,
    // [00 04] Town of Aitos
    0x00, 0x04, 0x08, 0x02, 0x40, 0x00, 0x80, 0x00, 0x93, 0x3B, 0x0E, 0x20, 0x80, 0x20, 0x00, 0x01,
    0x1A, 0x88, 0x0C, 0x80, 0x80, 0x20, 0x00, 0x00, 0x00, 0x06, 0x80, 0x80, 0x20, 0x00, 0x00, 0x40,
    0x06, 0x20, 0x80, 0x20, 0x00, 0x02, 0x1A, 0x98, 0x0C, 0x20, 0x80, 0x20, 0x00, 0x04, 0x1A, 0x90,
    0x0C, 0x40, 0x00, 0x80, 0x80, 0x93, 0x3C, 0x0E, 0x80, 0x80, 0x20, 0x20, 0x00, 0x80, 0x06, 0x10,
    0x82, 0x98, 0xDE, 0x0D, 0x02, 0x01, 0x00, 0xED, 0xAB, 0x0D, 0x02, 0x01, 0x01, 0x63, 0x6F, 0x0D,
    0x02, 0x01, 0x02, 0x54, 0x85, 0x0D, 0x02, 0x01, 0x03, 0xAB, 0xA2, 0x0D, 0x00,
    // [00 05] Town of Marahna
    0x00, 0x05, 0x08, 0x02, 0x40, 0x00, 0x80, 0x00, 0x93, 0x3B, 0x0E, 0x20, 0x80, 0x20, 0x00, 0x01,
    0x1A, 0x88, 0x0C, 0x80, 0x80, 0x20, 0x00, 0x00, 0x00, 0x06, 0x80, 0x80, 0x20, 0x00, 0x00, 0x40,
    0x06, 0x20, 0x80, 0x20, 0x00, 0x02, 0x1A, 0x98, 0x0C, 0x20, 0x80, 0x20, 0x00, 0x04, 0x1A, 0x90,
    0x0C, 0x40, 0x00, 0x80, 0x80, 0x93, 0x3C, 0x0E, 0x80, 0x80, 0x20, 0x20, 0x00, 0x80, 0x06, 0x10,
    0x82, 0x98, 0xDE, 0x0D, 0x02, 0x01, 0x00, 0xED, 0xAB, 0x0D, 0x02, 0x01, 0x01, 0x63, 0x6F, 0x0D,
    0x02, 0x01, 0x02, 0x54, 0x85, 0x0D, 0x02, 0x01, 0x03, 0xAB, 0xA2, 0x0D, 0x00,
    // [00 06] Town of Northwall
    0x00, 0x06, 0x08, 0x02, 0x40, 0x00, 0x80, 0x00, 0x93, 0x3D, 0x0E, 0x20, 0x80, 0x20, 0x00, 0x01,
    0x1A, 0x88, 0x0C, 0x80, 0x80, 0x20, 0x00, 0x00, 0x00, 0x06, 0x80, 0x80, 0x20, 0x00, 0x00, 0x40,
    0x06, 0x20, 0x80, 0x20, 0x00, 0x02, 0x1A, 0x98, 0x0C, 0x20, 0x80, 0x20, 0x00, 0x04, 0x1A, 0x90,
    0x0C, 0x40, 0x00, 0x80, 0x80, 0x93, 0x3C, 0x0E, 0x80, 0x80, 0x20, 0x20, 0x00, 0x80, 0x06, 0x10,
    0x82, 0x98, 0xDE, 0x0D, 0x02, 0x01, 0x00, 0xED, 0xAB, 0x0D, 0x02, 0x01, 0x01, 0x63, 0x6F, 0x0D,
    0x02, 0x01, 0x02, 0x54, 0x85, 0x0D, 0x02, 0x01, 0x03, 0xAB, 0xA2, 0x0D, 0x00,
    // [00 07] Sky Palace
    0x00, 0x07, 0x08, 0x00, 0x40, 0x00, 0x80, 0x00, 0x93, 0x3E, 0x0E, 0x20, 0x80, 0x20, 0x00, 0x03,
    0x1A, 0xA0, 0x0C, 0x80, 0x80, 0x20, 0x00, 0x00, 0xC0, 0x06, 0x40, 0x00, 0x80, 0x80, 0x93, 0x3C,
    0x0E, 0x80, 0x80, 0x20, 0x20, 0x00, 0x80, 0x06, 0x10, 0x81, 0x8F, 0x38, 0x0E, 0x10, 0x82, 0x9A,
    0xE2, 0x0D, 0x02, 0x01, 0x00, 0x88, 0x29, 0x0E, 0x02, 0x01, 0x03, 0xAB, 0xA2, 0x0D, 0x02, 0x01,
    0x04, 0x8F, 0x2B, 0x03, 0x00,
    // [00 08] Temple Interior
    0x00, 0x08, 0x08, 0x00, 0x40, 0x00, 0x80, 0x00, 0x93, 0x3E, 0x0E, 0x20, 0x80, 0x20, 0x00, 0x01,
    0x1A, 0xA0, 0x0C, 0x80, 0x80, 0x20, 0x00, 0x00, 0xC0, 0x06, 0x80, 0x80, 0x10, 0x20, 0x7F, 0xCE,
    0x02, 0x10, 0x81, 0x91, 0x39, 0x0E, 0x10, 0x82, 0x9C, 0xE6, 0x0D, 0x02, 0x01, 0x00, 0xED, 0xAB,
    0x0D, 0x02, 0x01, 0x01, 0x63, 0x6F, 0x0D, 0x02, 0x01, 0x02, 0x54, 0x85, 0x0D, 0x02, 0x01, 0x03,
    0xAB, 0xA2, 0x0D, 0x00,
    // [00 09] Overworld
    0x00, 0x09, 0x08, 0x01, 0x40, 0x00, 0x80, 0x00, 0x93, 0x3F, 0x0E, 0x80, 0x80, 0x20, 0xFF, 0x00,
    0x00, 0x07, 0x02, 0x01, 0x01, 0xCC, 0x27, 0x0E, 0x10, 0x80, 0x3F, 0x33, 0x03, 0x40, 0x00, 0x80,
    0x80, 0x93, 0x40, 0x0E, 0x80, 0x80, 0x08, 0x40, 0x7F, 0xCE, 0x02, 0x02, 0x01, 0x00, 0x88, 0x29,
    0x0E, 0x02, 0x01, 0x03, 0xAB, 0xA2, 0x0D, 0x00,
    // [01 01] Forest (Centaur Knight)
    0x01, 0x01, 0x08, 0x03, 0x40, 0x00, 0x40, 0x40, 0x80, 0xFF, 0x02, 0x40, 0x00, 0x40, 0x00, 0x80,
    0xFF, 0x0A, 0x20, 0x00, 0x20, 0x00, 0x01, 0xCA, 0x41, 0x0D, 0x20, 0x00, 0x20, 0x00, 0x02, 0x87,
    0xD6, 0x0D, 0x80, 0x00, 0x10, 0x00, 0x00, 0x40, 0x07, 0x80, 0x00, 0x10, 0x10, 0x00, 0x80, 0x07,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0x31, 0xF1, 0x0A, 0x10, 0x02, 0x04, 0x07,
    0x0D, 0x80, 0x00, 0x10, 0x30, 0x00, 0x00, 0x08, 0x40, 0x00, 0x40, 0x80, 0xF8, 0x4E, 0x0E, 0x80,
    0x00, 0x10, 0x40, 0x2F, 0xB1, 0x09, 0x01, 0x00, 0x00, 0x00, 0x95, 0xD6, 0x0C, 0x01, 0x01, 0x00,
    0x00, 0xC7, 0xEF, 0x03, 0x02, 0x01, 0x00, 0x7F, 0x14, 0x0C, 0x00,
    // [01 02] Caves I (Skeltous)
    0x01, 0x02, 0x08, 0x04, 0x40, 0x00, 0x40, 0x40, 0x78, 0x4F, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x4F, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0xA6, 0x3B, 0x0D, 0x20, 0x00, 0x20, 0x00, 0x02, 0x5D,
    0xF2, 0x0D, 0x80, 0x00, 0x10, 0x00, 0x00, 0x80, 0x0A, 0x80, 0x00, 0x10, 0x10, 0xC8, 0x56, 0x0B,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0xEE, 0xCF, 0x0B, 0x10, 0x02, 0x62, 0xB9,
    0x0D, 0x80, 0x00, 0x10, 0x30, 0x43, 0x46, 0x0A, 0x40, 0x00, 0x40, 0x80, 0x78, 0x50, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0x35, 0xF3, 0x0C, 0x02, 0x01, 0x00, 0x9F, 0x76, 0x07, 0x00,
    // [01 03] Caves II (Endless climb)
    0x01, 0x03, 0x08, 0x05, 0x40, 0x00, 0x40, 0x40, 0x78, 0x4F, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x4F, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0xA6, 0x3B, 0x0D, 0x20, 0x00, 0x20, 0x00, 0x02, 0x5D,
    0xF2, 0x0D, 0x80, 0x00, 0x10, 0x00, 0x00, 0x80, 0x0A, 0x80, 0x00, 0x10, 0x10, 0xC8, 0x56, 0x0B,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0x73, 0x53, 0x0D, 0x10, 0x02, 0x15, 0x6A,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0x43, 0x46, 0x0A, 0x40, 0x00, 0x40, 0x80, 0x78, 0x50, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0x35, 0xF3, 0x0C, 0x02, 0x01, 0x00, 0x9F, 0x76, 0x07, 0x00,
    // [01 04] Caves III (Minotaurus)
    0x01, 0x04, 0x08, 0x06, 0x40, 0x00, 0x40, 0x40, 0x78, 0x4F, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x4F, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0xA6, 0x3B, 0x0D, 0x20, 0x00, 0x20, 0x00, 0x02, 0x5D,
    0xF2, 0x0D, 0x80, 0x00, 0x10, 0x00, 0x00, 0x80, 0x0A, 0x80, 0x00, 0x10, 0x10, 0xC8, 0x56, 0x0B,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0x67, 0x67, 0x0E, 0x10, 0x02, 0x41, 0x69,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0x76, 0x5D, 0x0A, 0x40, 0x00, 0x40, 0x80, 0xF8, 0x50, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0x35, 0xF3, 0x0C, 0x01, 0x01, 0x00, 0x00, 0x17, 0xB0, 0x0C, 0x02, 0x01, 0x00,
    0x70, 0x94, 0x0D, 0x00,
    // [02 01] Swamp (Manticore)
    0x02, 0x01, 0x08, 0x07, 0x40, 0x00, 0x40, 0x40, 0x78, 0x51, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x51, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0xE6, 0xC1, 0x0D, 0x20, 0x00, 0x20, 0x00, 0x02, 0xA2,
    0x1C, 0x0E, 0x80, 0x00, 0x10, 0x00, 0xC3, 0xAD, 0x0A, 0x80, 0x00, 0x10, 0x10, 0x00, 0x80, 0x0B,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0xC6, 0xBF, 0x0C, 0x10, 0x02, 0x78, 0x65,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0x00, 0xC3, 0x05, 0x40, 0x00, 0x40, 0x80, 0x78, 0x52, 0x0E, 0x80,
    0x00, 0x10, 0x40, 0x00, 0x00, 0x0A, 0x01, 0x00, 0x00, 0x00, 0x1F, 0x07, 0x0E, 0x01, 0x01, 0x00,
    0x00, 0x77, 0x1B, 0x03, 0x02, 0x01, 0x00, 0xCC, 0x5D, 0x0C, 0x00,
    // [02 02] Castle I (Front gate)
    0x02, 0x02, 0x08, 0x09, 0x40, 0x00, 0x40, 0x40, 0xF8, 0x52, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x51, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0xFD, 0x2E, 0x0D, 0x20, 0x00, 0x20, 0x00, 0x02, 0xA2,
    0x1C, 0x0E, 0x80, 0x00, 0x10, 0x00, 0xBD, 0xB3, 0x08, 0x80, 0x00, 0x10, 0x10, 0x00, 0x80, 0x0B,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0x84, 0x37, 0x0E, 0x10, 0x02, 0x74, 0x4E,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0xC8, 0xDA, 0x0A, 0x40, 0x00, 0x40, 0x80, 0x78, 0x53, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0x2E, 0x78, 0x05, 0x02, 0x01, 0x00, 0xCC, 0x5D, 0x0C, 0x00,
    // [02 03] Castle II (First elevator)
    0x02, 0x03, 0x08, 0x0A, 0x40, 0x00, 0x40, 0x40, 0xF8, 0x52, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x51, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0xFD, 0x2E, 0x0D, 0x20, 0x00, 0x20, 0x00, 0x02, 0xA2,
    0x1C, 0x0E, 0x80, 0x00, 0x10, 0x00, 0xBD, 0xB3, 0x08, 0x80, 0x00, 0x10, 0x10, 0x00, 0x80, 0x0B,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0x4A, 0x7A, 0x0D, 0x10, 0x02, 0x74, 0x4E,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0xC8, 0xDA, 0x0A, 0x40, 0x00, 0x40, 0x80, 0x78, 0x53, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0x2E, 0x78, 0x05, 0x02, 0x01, 0x00, 0xCC, 0x5D, 0x0C, 0x00,
    // [02 04] Castle III (Glowing cellar)
    0x02, 0x04, 0x08, 0x0B, 0x40, 0x00, 0x40, 0x40, 0xF8, 0x52, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x51, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0xFD, 0x2E, 0x0D, 0x20, 0x00, 0x20, 0x00, 0x02, 0xA2,
    0x1C, 0x0E, 0x80, 0x00, 0x10, 0x00, 0xBD, 0xB3, 0x08, 0x80, 0x00, 0x10, 0x10, 0x00, 0x80, 0x0B,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0x86, 0xFE, 0x07, 0x10, 0x02, 0x74, 0x4E,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0xC8, 0xDA, 0x0A, 0x40, 0x00, 0x40, 0x80, 0x78, 0x53, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0x2E, 0x78, 0x05, 0x02, 0x01, 0x00, 0xCC, 0x5D, 0x0C, 0x00,
    // [02 05] Castle IV (Second elevator)
    0x02, 0x05, 0x08, 0x0C, 0x40, 0x00, 0x40, 0x40, 0xF8, 0x53, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x4F, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0xFD, 0x2E, 0x0D, 0x20, 0x00, 0x20, 0x00, 0x02, 0x5D,
    0xF2, 0x0D, 0x80, 0x00, 0x10, 0x00, 0xBD, 0xB3, 0x08, 0x80, 0x00, 0x10, 0x10, 0xC8, 0x56, 0x0B,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0x5D, 0x66, 0x0C, 0x10, 0x02, 0x2E, 0xFD,
    0x04, 0x80, 0x00, 0x10, 0x30, 0xC8, 0xDA, 0x0A, 0x40, 0x00, 0x40, 0x80, 0x78, 0x53, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0x2E, 0x78, 0x05, 0x02, 0x01, 0x00, 0xCC, 0x5D, 0x0C, 0x00,
    // [02 06] Castle V (Atop the wall)
    0x02, 0x06, 0x08, 0x0D, 0x40, 0x00, 0x40, 0x40, 0xF8, 0x52, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x51, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0xFD, 0x2E, 0x0D, 0x20, 0x00, 0x20, 0x00, 0x02, 0xA2,
    0x1C, 0x0E, 0x80, 0x00, 0x10, 0x00, 0xBD, 0xB3, 0x08, 0x80, 0x00, 0x10, 0x10, 0x00, 0x80, 0x0B,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0x28, 0x43, 0x0E, 0x10, 0x02, 0x74, 0x66,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0xC8, 0xDA, 0x0A, 0x40, 0x00, 0x40, 0x80, 0x78, 0x53, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0x2E, 0x78, 0x05, 0x02, 0x01, 0x00, 0xCC, 0x5D, 0x0C, 0x00,
    // [02 07] Castle VI (Yoku blocks)
    0x02, 0x07, 0x08, 0x0E, 0x40, 0x00, 0x40, 0x40, 0xF8, 0x52, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x51, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0xFD, 0x2E, 0x0D, 0x20, 0x00, 0x20, 0x00, 0x02, 0xA2,
    0x1C, 0x0E, 0x80, 0x00, 0x10, 0x00, 0xBD, 0xB3, 0x08, 0x80, 0x00, 0x10, 0x10, 0x00, 0x80, 0x0B,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0x93, 0xEE, 0x0D, 0x10, 0x02, 0x74, 0x66,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0xC8, 0xDA, 0x0A, 0x40, 0x00, 0x40, 0x80, 0x78, 0x53, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0x2E, 0x78, 0x05, 0x02, 0x01, 0x00, 0xCC, 0x5D, 0x0C, 0x00,
    // [02 08] Castle VII (Zeppelin Wolf)
    0x02, 0x08, 0x08, 0x0F, 0x40, 0x00, 0x40, 0x40, 0xF8, 0x52, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x51, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0xFD, 0x2E, 0x0D, 0x20, 0x00, 0x20, 0x00, 0x02, 0xA2,
    0x1C, 0x0E, 0x80, 0x00, 0x10, 0x00, 0xBD, 0xB3, 0x08, 0x80, 0x00, 0x10, 0x10, 0x00, 0x80, 0x0B,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0x57, 0x49, 0x0E, 0x10, 0x02, 0x74, 0x66,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0x00, 0x00, 0x0B, 0x40, 0x00, 0x40, 0x80, 0x78, 0x54, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0x2E, 0x78, 0x05, 0x01, 0x01, 0x00, 0x00, 0xCF, 0x27, 0x0C, 0x02, 0x01, 0x00,
    0x70, 0x94, 0x0D, 0x00,
    // [03 01] Desert I (Shifting sands)
    0x03, 0x01, 0x08, 0x10, 0x40, 0x00, 0x40, 0x40, 0xF8, 0x54, 0x0E, 0x40, 0x00, 0x40, 0x00, 0x78,
    0x55, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0xAF, 0x4D, 0x0D, 0x20, 0x00, 0x20, 0x00, 0x02, 0x02,
    0xB5, 0x0D, 0x80, 0x00, 0x10, 0x00, 0xE2, 0x99, 0x08, 0x80, 0x00, 0x10, 0x10, 0x3C, 0xE1, 0x09,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0x41, 0x3A, 0x0C, 0x10, 0x02, 0x47, 0x4C,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0xD5, 0xE6, 0x08, 0x40, 0x00, 0x40, 0x80, 0xF8, 0x55, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x0D, 0x02, 0x01, 0x00, 0xCC, 0x5D, 0x0C, 0x00,
    // [03 02] Desert II (Dagoba)
    0x03, 0x02, 0x08, 0x11, 0x40, 0x00, 0x40, 0x40, 0xF8, 0x54, 0x0E, 0x40, 0x00, 0x40, 0x00, 0x78,
    0x55, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0xAF, 0x4D, 0x0D, 0x20, 0x00, 0x20, 0x00, 0x02, 0x02,
    0xB5, 0x0D, 0x80, 0x00, 0x10, 0x00, 0xE2, 0x99, 0x08, 0x80, 0x00, 0x10, 0x10, 0x3C, 0xE1, 0x09,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0xA2, 0xF7, 0x0B, 0x10, 0x02, 0x63, 0x42,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0xD5, 0xE6, 0x08, 0x40, 0x00, 0x40, 0x80, 0xF8, 0x55, 0x0E, 0x80,
    0x00, 0x10, 0x40, 0x68, 0xA0, 0x0B, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0D, 0x01, 0x01, 0x00,
    0x00, 0x7E, 0xB0, 0x0D, 0x02, 0x01, 0x00, 0xCC, 0x5D, 0x0C, 0x00,
    // [03 03] Pyramid I (Mummy crypt)
    0x03, 0x03, 0x08, 0x12, 0x40, 0x00, 0x40, 0x40, 0x78, 0x56, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x56, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0x57, 0x64, 0x0D, 0x20, 0x00, 0x20, 0x00, 0x02, 0x56,
    0x14, 0x0E, 0x80, 0x00, 0x10, 0x00, 0x00, 0x00, 0x09, 0x80, 0x00, 0x10, 0x10, 0x04, 0x42, 0x0B,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0xDE, 0x0D, 0x0E, 0x10, 0x02, 0xA0, 0x32,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0x34, 0x32, 0x09, 0x40, 0x00, 0x40, 0x80, 0x78, 0x57, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0x43, 0x99, 0x0D, 0x01, 0x01, 0x00, 0x00, 0x7A, 0xD2, 0x0D, 0x02, 0x01, 0x00,
    0x9F, 0x76, 0x07, 0x00,
    // [03 04] Pyramid II (Anubis statues)
    0x03, 0x04, 0x08, 0x13, 0x40, 0x00, 0x40, 0x40, 0x78, 0x56, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x56, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0x57, 0x64, 0x0D, 0x20, 0x00, 0x20, 0x00, 0x02, 0x56,
    0x14, 0x0E, 0x80, 0x00, 0x10, 0x00, 0x00, 0x00, 0x09, 0x80, 0x00, 0x10, 0x10, 0x04, 0x42, 0x0B,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0x8F, 0x8A, 0x0D, 0x10, 0x02, 0xA0, 0x32,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0x6A, 0xCD, 0x08, 0x40, 0x00, 0x40, 0x80, 0xF8, 0x57, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0x43, 0x99, 0x0D, 0x01, 0x01, 0x00, 0x00, 0x7A, 0xD2, 0x0D, 0x02, 0x01, 0x00,
    0x9F, 0x76, 0x07, 0x00,
    // [03 05] Pyramid III (Elevator race)
    0x03, 0x05, 0x08, 0x14, 0x40, 0x00, 0x40, 0x40, 0x78, 0x56, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x56, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0x57, 0x64, 0x0D, 0x20, 0x00, 0x20, 0x00, 0x02, 0x56,
    0x14, 0x0E, 0x80, 0x00, 0x10, 0x00, 0x00, 0x00, 0x09, 0x80, 0x00, 0x10, 0x10, 0x04, 0x42, 0x0B,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0x03, 0xE5, 0x0C, 0x10, 0x02, 0xA0, 0x32,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0x34, 0x32, 0x09, 0x40, 0x00, 0x40, 0x80, 0x78, 0x57, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0x43, 0x99, 0x0D, 0x01, 0x01, 0x00, 0x00, 0x7A, 0xD2, 0x0D, 0x02, 0x01, 0x00,
    0x9F, 0x76, 0x07, 0x00,
    // [03 06] Pyramid IV (Pharaoh)
    0x03, 0x06, 0x08, 0x15, 0x40, 0x00, 0x40, 0x40, 0x78, 0x56, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x56, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0x57, 0x64, 0x0D, 0x20, 0x00, 0x20, 0x00, 0x02, 0x56,
    0x14, 0x0E, 0x80, 0x00, 0x10, 0x00, 0x00, 0x00, 0x09, 0x80, 0x00, 0x10, 0x10, 0x04, 0x42, 0x0B,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0x6F, 0x36, 0x0E, 0x10, 0x02, 0xA0, 0x32,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0x6A, 0xCD, 0x08, 0x40, 0x00, 0x40, 0x80, 0xF8, 0x57, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0x43, 0x99, 0x0D, 0x01, 0x01, 0x00, 0x00, 0x7A, 0xD2, 0x0D, 0x02, 0x01, 0x00,
    0x70, 0x94, 0x0D, 0x00,
    // [04 01] Mountains I (Auto-scroller)
    0x04, 0x01, 0x08, 0x16, 0x40, 0x00, 0x40, 0x40, 0x78, 0x58, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x58, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0xFB, 0x0D, 0x0D, 0x20, 0x00, 0x20, 0x00, 0x02, 0x0D,
    0x45, 0x05, 0x80, 0x00, 0x10, 0x00, 0x2F, 0x19, 0x09, 0x80, 0x00, 0x10, 0x10, 0x09, 0x6B, 0x0B,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0x8E, 0xDF, 0x0B, 0x10, 0x02, 0xDF, 0x67,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0x00, 0x80, 0x08, 0x40, 0x00, 0x40, 0x80, 0x78, 0x59, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0x17, 0x4C, 0x0C, 0x02, 0x01, 0x00, 0x54, 0x85, 0x0D, 0x00,
    // [04 02] Mountains II (Waterfall)
    0x04, 0x02, 0x08, 0x17, 0x40, 0x00, 0x40, 0x40, 0x78, 0x58, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x59, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0xFB, 0x0D, 0x0D, 0x20, 0x00, 0x20, 0x00, 0x02, 0x06,
    0x1A, 0x0E, 0x80, 0x00, 0x10, 0x00, 0x2F, 0x19, 0x09, 0x80, 0x00, 0x10, 0x10, 0x01, 0x50, 0x08,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0x58, 0xA7, 0x0D, 0x10, 0x02, 0x65, 0x7F,
    0x0C, 0x80, 0x00, 0x10, 0x30, 0x00, 0x80, 0x08, 0x40, 0x00, 0x40, 0x80, 0x78, 0x59, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0x17, 0x4C, 0x0C, 0x02, 0x01, 0x00, 0x54, 0x85, 0x0D, 0x00,
    // [04 03] Mountains III (Serpent)
    0x04, 0x03, 0x08, 0x18, 0x40, 0x00, 0x40, 0x40, 0x78, 0x58, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x59, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0xFB, 0x0D, 0x0D, 0x20, 0x00, 0x20, 0x00, 0x02, 0x06,
    0x1A, 0x0E, 0x80, 0x00, 0x10, 0x00, 0x2F, 0x19, 0x09, 0x80, 0x00, 0x10, 0x10, 0x01, 0x50, 0x08,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0xB3, 0x4B, 0x0E, 0x10, 0x02, 0x65, 0x7F,
    0x0C, 0x80, 0x00, 0x10, 0x30, 0x50, 0x16, 0x0B, 0x40, 0x00, 0x40, 0x80, 0x78, 0x5A, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0x17, 0x4C, 0x0C, 0x01, 0x01, 0x00, 0x00, 0x24, 0xCC, 0x03, 0x02, 0x01, 0x00,
    0xE2, 0x69, 0x0D, 0x00,
    // [04 04] Volcano I (Hall of giants)
    0x04, 0x04, 0x08, 0x19, 0x40, 0x00, 0x40, 0x40, 0xF8, 0x5A, 0x0E, 0x40, 0x00, 0x40, 0x00, 0x78,
    0x5B, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0x1A, 0xF6, 0x0D, 0x20, 0x00, 0x20, 0x00, 0x02, 0x92,
    0x03, 0x0E, 0x80, 0x00, 0x10, 0x00, 0x00, 0x80, 0x09, 0x80, 0x00, 0x10, 0x10, 0xE6, 0x1A, 0x08,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0x93, 0xDA, 0x0D, 0x10, 0x02, 0x8E, 0x0A,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0x4A, 0xC9, 0x09, 0x40, 0x00, 0x40, 0x80, 0xF8, 0x5B, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0xE6, 0x6E, 0x0C, 0x02, 0x01, 0x00, 0x54, 0x85, 0x0D, 0x00,
    // [04 05] Volcano II (Magma chamber)
    0x04, 0x05, 0x08, 0x1A, 0x40, 0x00, 0x40, 0x40, 0xF8, 0x5A, 0x0E, 0x40, 0x00, 0x40, 0x00, 0x78,
    0x5B, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0x1A, 0xF6, 0x0D, 0x20, 0x00, 0x20, 0x00, 0x02, 0x92,
    0x03, 0x0E, 0x80, 0x00, 0x10, 0x00, 0x00, 0x80, 0x09, 0x80, 0x00, 0x10, 0x10, 0xE6, 0x1A, 0x08,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0xC7, 0x46, 0x0E, 0x10, 0x02, 0xEE, 0x66,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0x4A, 0xC9, 0x09, 0x40, 0x00, 0x40, 0x80, 0xF8, 0x5B, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0xE6, 0x6E, 0x0C, 0x02, 0x01, 0x00, 0x54, 0x85, 0x0D, 0x00,
    // [04 06] Volcano III (Samurai archers)
    0x04, 0x06, 0x08, 0x1B, 0x40, 0x00, 0x40, 0x40, 0xF8, 0x5A, 0x0E, 0x40, 0x00, 0x40, 0x00, 0x78,
    0x5B, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0x1A, 0xF6, 0x0D, 0x20, 0x00, 0x20, 0x00, 0x02, 0x92,
    0x03, 0x0E, 0x80, 0x00, 0x10, 0x00, 0x00, 0x80, 0x09, 0x80, 0x00, 0x10, 0x10, 0xE6, 0x1A, 0x08,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0x9D, 0x8F, 0x0D, 0x10, 0x02, 0xA7, 0xBD,
    0x0D, 0x80, 0x00, 0x10, 0x30, 0x4A, 0xC9, 0x09, 0x40, 0x00, 0x40, 0x80, 0xF8, 0x5B, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0xE6, 0x6E, 0x0C, 0x02, 0x01, 0x00, 0x54, 0x85, 0x0D, 0x00,
    // [04 07] Volcano IV (Fire Wheel)
    0x04, 0x07, 0x08, 0x1C, 0x40, 0x00, 0x40, 0x40, 0xF8, 0x5A, 0x0E, 0x40, 0x00, 0x40, 0x00, 0x78,
    0x5B, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0x1A, 0xF6, 0x0D, 0x20, 0x00, 0x20, 0x00, 0x02, 0x92,
    0x03, 0x0E, 0x80, 0x00, 0x10, 0x00, 0x00, 0x80, 0x09, 0x80, 0x00, 0x10, 0x10, 0xE6, 0x1A, 0x08,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0x71, 0x47, 0x0E, 0x10, 0x02, 0xEC, 0x43,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0x7F, 0xEE, 0x02, 0x40, 0x00, 0x40, 0x80, 0x78, 0x5C, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0xE6, 0x6E, 0x0C, 0x01, 0x01, 0x00, 0x00, 0x76, 0x7C, 0x09, 0x02, 0x01, 0x00,
    0x70, 0x94, 0x0D, 0x00,
    // [05 01] Jungle I (Overgrown ruins)
    0x05, 0x01, 0x08, 0x1D, 0x40, 0x00, 0x40, 0x40, 0xF8, 0x5C, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x59, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0x00, 0x80, 0x0D, 0x20, 0x00, 0x20, 0x00, 0x02, 0x06,
    0x1A, 0x0E, 0x80, 0x00, 0x10, 0x00, 0x3A, 0xB6, 0x07, 0x80, 0x00, 0x10, 0x10, 0x01, 0x50, 0x08,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0xF8, 0xB7, 0x0C, 0x10, 0x02, 0xF7, 0x65,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0x8A, 0x17, 0x0A, 0x40, 0x00, 0x40, 0x80, 0x78, 0x5D, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0xF8, 0x21, 0x0D, 0x02, 0x01, 0x00, 0x9F, 0x76, 0x07, 0x00,
    // [05 02] Jungle II (Falling snakes)
    0x05, 0x02, 0x08, 0x1E, 0x40, 0x00, 0x40, 0x40, 0xF8, 0x5C, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x59, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0x00, 0x80, 0x0D, 0x20, 0x00, 0x20, 0x00, 0x02, 0x06,
    0x1A, 0x0E, 0x80, 0x00, 0x10, 0x00, 0x3A, 0xB6, 0x07, 0x80, 0x00, 0x10, 0x10, 0x01, 0x50, 0x08,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0xD7, 0x47, 0x0D, 0x10, 0x02, 0xF7, 0x65,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0x8A, 0x17, 0x0A, 0x40, 0x00, 0x40, 0x80, 0x78, 0x5D, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0xF8, 0x21, 0x0D, 0x02, 0x01, 0x00, 0x9F, 0x76, 0x07, 0x00,
    // [05 03] Jungle III (Rafflasher)
    0x05, 0x03, 0x08, 0x1F, 0x40, 0x00, 0x40, 0x40, 0xF8, 0x5C, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x59, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0x00, 0x80, 0x0D, 0x20, 0x00, 0x20, 0x00, 0x02, 0x06,
    0x1A, 0x0E, 0x80, 0x00, 0x10, 0x00, 0x3A, 0xB6, 0x07, 0x80, 0x00, 0x10, 0x10, 0x01, 0x50, 0x08,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0xDA, 0x2C, 0x0E, 0x10, 0x02, 0xB2, 0x7F,
    0x0D, 0x80, 0x00, 0x10, 0x30, 0x05, 0x4B, 0x09, 0x40, 0x00, 0x40, 0x80, 0xF8, 0x5D, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0xF8, 0x21, 0x0D, 0x01, 0x01, 0x00, 0x00, 0x9D, 0x74, 0x0A, 0x02, 0x01, 0x00,
    0xE2, 0x69, 0x0D, 0x00,
    // [05 04] Temple I (Stone elevator)
    0x05, 0x04, 0x08, 0x20, 0x40, 0x00, 0x40, 0x40, 0x78, 0x5E, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x4F, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0xDC, 0xDD, 0x0C, 0x20, 0x00, 0x20, 0x00, 0x02, 0x5D,
    0xF2, 0x0D, 0x80, 0x00, 0x10, 0x00, 0x17, 0x5B, 0x05, 0x80, 0x00, 0x10, 0x10, 0xC8, 0x56, 0x0B,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0xE1, 0x74, 0x0D, 0x10, 0x02, 0x93, 0x41,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0x86, 0x2C, 0x0B, 0x40, 0x00, 0x40, 0x80, 0xF8, 0x5E, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0x22, 0xCF, 0x0C, 0x02, 0x01, 0x00, 0x54, 0x85, 0x0D, 0x00,
    // [05 05] Temple II (Choose a path)
    0x05, 0x05, 0x08, 0x21, 0x40, 0x00, 0x40, 0x40, 0x78, 0x5E, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x4F, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0xDC, 0xDD, 0x0C, 0x20, 0x00, 0x20, 0x00, 0x02, 0x5D,
    0xF2, 0x0D, 0x80, 0x00, 0x10, 0x00, 0x17, 0x5B, 0x05, 0x80, 0x00, 0x10, 0x10, 0xC8, 0x56, 0x0B,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0x63, 0x17, 0x0E, 0x10, 0x02, 0xB0, 0x44,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0x86, 0x2C, 0x0B, 0x40, 0x00, 0x40, 0x80, 0xF8, 0x5E, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0x22, 0xCF, 0x0C, 0x02, 0x01, 0x00, 0x54, 0x85, 0x0D, 0x00,
    // [05 06] Temple III (Left path)
    0x05, 0x06, 0x08, 0x22, 0x40, 0x00, 0x40, 0x40, 0x78, 0x5E, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x4F, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0xDC, 0xDD, 0x0C, 0x20, 0x00, 0x20, 0x00, 0x02, 0x5D,
    0xF2, 0x0D, 0x80, 0x00, 0x10, 0x00, 0x17, 0x5B, 0x05, 0x80, 0x00, 0x10, 0x10, 0xC8, 0x56, 0x0B,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0x22, 0xDF, 0x05, 0x10, 0x02, 0x00, 0x00,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0x86, 0x2C, 0x0B, 0x40, 0x00, 0x40, 0x80, 0xF8, 0x5E, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0x22, 0xCF, 0x0C, 0x02, 0x01, 0x00, 0x54, 0x85, 0x0D, 0x00,
    // [05 07] Temple IV (Right path)
    0x05, 0x07, 0x08, 0x23, 0x40, 0x00, 0x40, 0x40, 0x78, 0x5E, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x4F, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0xDC, 0xDD, 0x0C, 0x20, 0x00, 0x20, 0x00, 0x02, 0x5D,
    0xF2, 0x0D, 0x80, 0x00, 0x10, 0x00, 0x17, 0x5B, 0x05, 0x80, 0x00, 0x10, 0x10, 0xC8, 0x56, 0x0B,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0x22, 0xDF, 0x05, 0x10, 0x02, 0x00, 0x00,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0x86, 0x2C, 0x0B, 0x40, 0x00, 0x40, 0x80, 0xF8, 0x5E, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0x22, 0xCF, 0x0C, 0x02, 0x01, 0x00, 0x54, 0x85, 0x0D, 0x00,
    // [05 08] Temple V (Kalia)
    0x05, 0x08, 0x08, 0x24, 0x40, 0x00, 0x40, 0x40, 0x78, 0x5E, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x4F, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0xDC, 0xDD, 0x0C, 0x20, 0x00, 0x20, 0x00, 0x02, 0x5D,
    0xF2, 0x0D, 0x80, 0x00, 0x10, 0x00, 0x17, 0x5B, 0x05, 0x80, 0x00, 0x10, 0x10, 0xC8, 0x56, 0x0B,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0x67, 0x2E, 0x0E, 0x10, 0x02, 0x65, 0x45,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0x4D, 0xC4, 0x0A, 0x40, 0x00, 0x40, 0x80, 0x78, 0x5F, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0x22, 0xCF, 0x0C, 0x01, 0x01, 0x00, 0x00, 0x00, 0x80, 0x0C, 0x02, 0x01, 0x00,
    0x70, 0x94, 0x0D, 0x00,
    // [06 01] Arctic I (Snowfield)
    0x06, 0x01, 0x08, 0x25, 0x40, 0x00, 0x40, 0x40, 0xF8, 0x5F, 0x0E, 0x40, 0x00, 0x40, 0x00, 0x78,
    0x60, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0x8A, 0xFA, 0x05, 0x20, 0x00, 0x20, 0x00, 0x02, 0xF9,
    0x9D, 0x0D, 0x80, 0x00, 0x10, 0x00, 0xA8, 0x98, 0x09, 0x80, 0x00, 0x10, 0x10, 0x4B, 0xEC, 0x07,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0x7B, 0x28, 0x0D, 0x10, 0x02, 0x1A, 0x46,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0x05, 0x2F, 0x0A, 0x40, 0x00, 0x40, 0x80, 0xF8, 0x60, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0x75, 0x35, 0x0D, 0x02, 0x01, 0x00, 0x4B, 0xFA, 0x0C, 0x00,
    // [06 02] Arctic II (Ice-cube rafts)
    0x06, 0x02, 0x08, 0x26, 0x40, 0x00, 0x40, 0x40, 0xF8, 0x5F, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x4F, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0x8A, 0xFA, 0x05, 0x20, 0x00, 0x20, 0x00, 0x02, 0x5D,
    0xF2, 0x0D, 0x80, 0x00, 0x10, 0x00, 0xA8, 0x98, 0x09, 0x80, 0x00, 0x10, 0x10, 0xC8, 0x56, 0x0B,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0x34, 0x59, 0x0D, 0x10, 0x02, 0x9E, 0x21,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0x05, 0x2F, 0x0A, 0x40, 0x00, 0x40, 0x80, 0xF8, 0x60, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0x75, 0x35, 0x0D, 0x02, 0x01, 0x00, 0x4B, 0xFA, 0x0C, 0x00,
    // [06 03] Arctic III (Ride the sled)
    0x06, 0x03, 0x08, 0x27, 0x40, 0x00, 0x40, 0x40, 0xF8, 0x5F, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x4F, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0x8A, 0xFA, 0x05, 0x20, 0x00, 0x20, 0x00, 0x02, 0x5D,
    0xF2, 0x0D, 0x80, 0x00, 0x10, 0x00, 0xA8, 0x98, 0x09, 0x80, 0x00, 0x10, 0x10, 0xC8, 0x56, 0x0B,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0x92, 0x0A, 0x0C, 0x10, 0x02, 0x9E, 0x21,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0x05, 0x2F, 0x0A, 0x40, 0x00, 0x40, 0x80, 0xF8, 0x60, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0x75, 0x35, 0x0D, 0x02, 0x01, 0x00, 0x4B, 0xFA, 0x0C, 0x00,
    // [06 04] Arctic IV (Merman Fly)
    0x06, 0x04, 0x08, 0x28, 0x40, 0x00, 0x40, 0x40, 0xF8, 0x5F, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x4F, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0x8A, 0xFA, 0x05, 0x20, 0x00, 0x20, 0x00, 0x02, 0x5D,
    0xF2, 0x0D, 0x80, 0x00, 0x10, 0x00, 0xA8, 0x98, 0x09, 0x80, 0x00, 0x10, 0x10, 0xC8, 0x56, 0x0B,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0x3D, 0x35, 0x0E, 0x10, 0x02, 0x77, 0x7F,
    0x03, 0x80, 0x00, 0x10, 0x30, 0xA2, 0x35, 0x08, 0x40, 0x00, 0x40, 0x80, 0x78, 0x61, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0x75, 0x35, 0x0D, 0x01, 0x01, 0x00, 0x00, 0x22, 0xC6, 0x0D, 0x02, 0x01, 0x00,
    0xE2, 0x69, 0x0D, 0x00,
    // [06 05] Great Tree I (Tree entrance)
    0x06, 0x05, 0x08, 0x29, 0x40, 0x00, 0x40, 0x40, 0xF8, 0x61, 0x0E, 0x40, 0x00, 0x40, 0x00, 0x78,
    0x60, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0x27, 0xF9, 0x09, 0x20, 0x00, 0x20, 0x00, 0x02, 0xF9,
    0x9D, 0x0D, 0x80, 0x00, 0x10, 0x00, 0x28, 0x9B, 0x07, 0x80, 0x00, 0x10, 0x10, 0x4B, 0xEC, 0x07,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0x2D, 0x11, 0x0E, 0x10, 0x02, 0x1A, 0x46,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0x1C, 0x97, 0x0A, 0x40, 0x00, 0x40, 0x80, 0x78, 0x62, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0x1D, 0xEC, 0x0C, 0x02, 0x01, 0x00, 0x27, 0xC0, 0x0B, 0x00,
    // [06 06] Great Tree II (Lower trunk)
    0x06, 0x06, 0x08, 0x2A, 0x40, 0x00, 0x40, 0x40, 0xF8, 0x61, 0x0E, 0x40, 0x00, 0x40, 0x00, 0x78,
    0x60, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0x27, 0xF9, 0x09, 0x20, 0x00, 0x20, 0x00, 0x02, 0xF9,
    0x9D, 0x0D, 0x80, 0x00, 0x10, 0x00, 0x28, 0x9B, 0x07, 0x80, 0x00, 0x10, 0x10, 0x4B, 0xEC, 0x07,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0x41, 0x73, 0x03, 0x10, 0x02, 0xD0, 0x23,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0x1C, 0x97, 0x0A, 0x40, 0x00, 0x40, 0x80, 0x78, 0x62, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0x1D, 0xEC, 0x0C, 0x02, 0x01, 0x00, 0x27, 0xC0, 0x0B, 0x00,
    // [06 07] Great Tree III (Upper trunk)
    0x06, 0x07, 0x08, 0x2B, 0x40, 0x00, 0x40, 0x40, 0xF8, 0x61, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x62, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0x27, 0xF9, 0x09, 0x20, 0x00, 0x20, 0x00, 0x02, 0xF9,
    0x9D, 0x0D, 0x80, 0x00, 0x10, 0x00, 0x28, 0x9B, 0x07, 0x80, 0x00, 0x10, 0x10, 0x4B, 0xEC, 0x07,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0xC6, 0x5E, 0x0D, 0x10, 0x02, 0x49, 0x31,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0x1C, 0x97, 0x0A, 0x40, 0x00, 0x40, 0x80, 0x78, 0x62, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0x1D, 0xEC, 0x0C, 0x02, 0x01, 0x00, 0x27, 0xC0, 0x0B, 0x00,
    // [06 08] Great Tree IV (Arctic Wyvern)
    0x06, 0x08, 0x08, 0x2C, 0x40, 0x00, 0x40, 0x40, 0xF8, 0x61, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x62, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0x27, 0xF9, 0x09, 0x20, 0x00, 0x20, 0x00, 0x02, 0xF9,
    0x9D, 0x0D, 0x80, 0x00, 0x10, 0x00, 0x28, 0x9B, 0x07, 0x80, 0x00, 0x10, 0x10, 0x4B, 0xEC, 0x07,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0xF1, 0x49, 0x0E, 0x10, 0x02, 0x55, 0x68,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0x62, 0x5B, 0x07, 0x40, 0x00, 0x40, 0x80, 0x78, 0x63, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0x1D, 0xEC, 0x0C, 0x01, 0x01, 0x00, 0x00, 0x37, 0x31, 0x0C, 0x02, 0x01, 0x00,
    0x70, 0x94, 0x0D, 0x00,
    // [07 01] Death Heim (Hub room)
    0x07, 0x01, 0x08, 0x2D, 0x40, 0x00, 0x40, 0x40, 0xF8, 0x63, 0x0E, 0x40, 0x00, 0x40, 0x00, 0x78,
    0x64, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0x56, 0xCA, 0x0D, 0x20, 0x00, 0x20, 0x00, 0x02, 0x9E,
    0xEA, 0x0D, 0x80, 0x00, 0x10, 0x00, 0x27, 0x6A, 0x08, 0x80, 0x00, 0x10, 0x10, 0x46, 0xD1, 0x07,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0x65, 0x4D, 0x0E, 0x10, 0x02, 0x13, 0x7F,
    0x0B, 0x80, 0x00, 0x10, 0x30, 0x58, 0x90, 0x0B, 0x40, 0x00, 0x40, 0x80, 0xF8, 0x64, 0x0E, 0x01,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x02, 0x01, 0x00, 0x70, 0x94, 0x0D, 0x02, 0x01, 0x01, 0xFA,
    0x54, 0x0C, 0x00,
    // [07 02] Death Heim (Minotaurus)
    0x07, 0x02, 0x08, 0x06, 0x40, 0x00, 0x40, 0x40, 0x78, 0x4F, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x59, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0xA6, 0x3B, 0x0D, 0x20, 0x00, 0x20, 0x00, 0x02, 0x06,
    0x1A, 0x0E, 0x80, 0x00, 0x10, 0x00, 0x00, 0x80, 0x0A, 0x80, 0x00, 0x10, 0x10, 0x01, 0x50, 0x08,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0xD8, 0x4C, 0x0E, 0x10, 0x02, 0xB5, 0x69,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0x58, 0x90, 0x0B, 0x40, 0x00, 0x40, 0x80, 0xF8, 0x64, 0x0E, 0x80,
    0x00, 0x10, 0x40, 0x76, 0x5D, 0x0A, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x01, 0x01, 0x00,
    0x00, 0x78, 0xC7, 0x0C, 0x02, 0x01, 0x00, 0x70, 0x94, 0x0D, 0x00,
    // [07 03] Death Heim (Zeppelin Wolf)
    0x07, 0x03, 0x08, 0x0F, 0x40, 0x00, 0x40, 0x40, 0xF8, 0x52, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x59, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0xFD, 0x2E, 0x0D, 0x20, 0x00, 0x20, 0x00, 0x02, 0x06,
    0x1A, 0x0E, 0x80, 0x00, 0x10, 0x00, 0xBD, 0xB3, 0x08, 0x80, 0x00, 0x10, 0x10, 0x01, 0x50, 0x08,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0x87, 0x4A, 0x0E, 0x10, 0x02, 0xB5, 0x69,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0x58, 0x90, 0x0B, 0x40, 0x00, 0x40, 0x80, 0xF8, 0x64, 0x0E, 0x80,
    0x00, 0x10, 0x40, 0x00, 0x00, 0x0B, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x01, 0x01, 0x00,
    0x00, 0x65, 0x1E, 0x0C, 0x02, 0x01, 0x00, 0x70, 0x94, 0x0D, 0x00,
    // [07 04] Death Heim (Pharaoh)
    0x07, 0x04, 0x08, 0x15, 0x40, 0x00, 0x40, 0x40, 0x78, 0x56, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x59, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0x57, 0x64, 0x0D, 0x20, 0x00, 0x20, 0x00, 0x02, 0x06,
    0x1A, 0x0E, 0x80, 0x00, 0x10, 0x00, 0x00, 0x00, 0x09, 0x80, 0x00, 0x10, 0x10, 0x01, 0x50, 0x08,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0xBC, 0x48, 0x0E, 0x10, 0x02, 0xB5, 0x69,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0x58, 0x90, 0x0B, 0x40, 0x00, 0x40, 0x80, 0xF8, 0x64, 0x0E, 0x80,
    0x00, 0x10, 0x40, 0x6A, 0xCD, 0x08, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x01, 0x01, 0x00,
    0x00, 0x6A, 0xCE, 0x0D, 0x02, 0x01, 0x00, 0x70, 0x94, 0x0D, 0x00,
    // [07 05] Death Heim (Fire Wheel)
    0x07, 0x05, 0x08, 0x1C, 0x40, 0x00, 0x40, 0x40, 0xF8, 0x5A, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x59, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0x1A, 0xF6, 0x0D, 0x20, 0x00, 0x20, 0x00, 0x02, 0x06,
    0x1A, 0x0E, 0x80, 0x00, 0x10, 0x00, 0x00, 0x80, 0x09, 0x80, 0x00, 0x10, 0x10, 0x01, 0x50, 0x08,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0x17, 0x48, 0x0E, 0x10, 0x02, 0xB5, 0x69,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0x58, 0x90, 0x0B, 0x40, 0x00, 0x40, 0x80, 0xF8, 0x64, 0x0E, 0x80,
    0x00, 0x10, 0x40, 0x7F, 0xEE, 0x02, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x01, 0x01, 0x00,
    0x00, 0xD7, 0xF9, 0x0D, 0x02, 0x01, 0x00, 0x70, 0x94, 0x0D, 0x00,
    // [07 06] Death Heim (Kalia)
    0x07, 0x06, 0x08, 0x24, 0x40, 0x00, 0x40, 0x40, 0x78, 0x5E, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x59, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0xDC, 0xDD, 0x0C, 0x20, 0x00, 0x20, 0x00, 0x02, 0x06,
    0x1A, 0x0E, 0x80, 0x00, 0x10, 0x00, 0x17, 0x5B, 0x05, 0x80, 0x00, 0x10, 0x10, 0x01, 0x50, 0x08,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0x41, 0x2B, 0x0E, 0x10, 0x02, 0xB5, 0x69,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0x58, 0x90, 0x0B, 0x40, 0x00, 0x40, 0x80, 0xF8, 0x64, 0x0E, 0x80,
    0x00, 0x10, 0x40, 0x4D, 0xC4, 0x0A, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x01, 0x01, 0x00,
    0x00, 0x1A, 0xA8, 0x0C, 0x02, 0x01, 0x00, 0x70, 0x94, 0x0D, 0x00,
    // [07 07] Death Heim (Arctic Wyvern)
    0x07, 0x07, 0x08, 0x2C, 0x40, 0x00, 0x40, 0x40, 0xF8, 0x61, 0x0E, 0x40, 0x00, 0x40, 0x00, 0xF8,
    0x59, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0x27, 0xF9, 0x09, 0x20, 0x00, 0x20, 0x00, 0x02, 0x06,
    0x1A, 0x0E, 0x80, 0x00, 0x10, 0x00, 0x28, 0x9B, 0x07, 0x80, 0x00, 0x10, 0x10, 0x01, 0x50, 0x08,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0x1D, 0x4B, 0x0E, 0x10, 0x02, 0xB5, 0x69,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0x58, 0x90, 0x0B, 0x40, 0x00, 0x40, 0x80, 0xF8, 0x64, 0x0E, 0x80,
    0x00, 0x10, 0x40, 0x62, 0x5B, 0x07, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x01, 0x01, 0x00,
    0x00, 0x2C, 0x43, 0x0C, 0x02, 0x01, 0x00, 0x70, 0x94, 0x0D, 0x00,
    // [07 08] Death Heim (Tanzra)
    0x07, 0x08, 0x08, 0x2E, 0x40, 0x00, 0x40, 0x40, 0xF8, 0x63, 0x0E, 0x40, 0x00, 0x40, 0x00, 0x78,
    0x64, 0x0E, 0x20, 0x00, 0x20, 0x00, 0x01, 0x56, 0xCA, 0x0D, 0x20, 0x00, 0x20, 0x00, 0x02, 0x9E,
    0xEA, 0x0D, 0x80, 0x00, 0x10, 0x00, 0x27, 0x6A, 0x08, 0x80, 0x00, 0x10, 0x10, 0x46, 0xD1, 0x07,
    0x80, 0x00, 0x08, 0x50, 0xFB, 0xEC, 0x0B, 0x10, 0x01, 0xEF, 0x4D, 0x0E, 0x10, 0x02, 0xCB, 0x68,
    0x0E, 0x80, 0x00, 0x10, 0x30, 0x58, 0x90, 0x0B, 0x40, 0x00, 0x40, 0x80, 0xF8, 0x64, 0x0E, 0x80,
    0x00, 0x10, 0x40, 0xC0, 0x63, 0x09, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x01, 0x01, 0x00,
    0x00, 0x27, 0x77, 0x0C, 0x02, 0x01, 0x00, 0xFA, 0x54, 0x0C, 0x00,
    // [08 01] Ending
    0x08, 0x01, 0x08, 0x2F, 0x40, 0x00, 0x10, 0x00, 0xC5, 0xC7, 0x03, 0x80, 0x00, 0x08, 0x50, 0x6F,
    0x1B, 0x0D, 0x01, 0x00, 0x00, 0x00, 0xA0, 0xD1, 0x03, 0x02, 0x01, 0x00, 0x5C, 0xB0, 0x0B, 0x02,
    0x01, 0x01, 0x88, 0x29, 0x0E, 0x00,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_has_one_slot_per_room() {
        let pool = base_map_pool(MARAHNA_II_LEFT);
        assert_eq!(pool.len(), 48);
        assert_eq!(
            pool.iter().filter(|&&m| m == BOSS_RUSH_PLACEHOLDER).count(),
            BOSS_ORDER_COUNT
        );
    }

    #[test]
    fn pool_resolves_marahna_to_one_variant() {
        let left = base_map_pool(MARAHNA_II_LEFT);
        assert!(left.contains(&MARAHNA_II_LEFT));
        assert!(!left.contains(&MARAHNA_II_RIGHT));
        let right = base_map_pool(MARAHNA_II_RIGHT);
        assert!(right.contains(&MARAHNA_II_RIGHT));
        assert!(!right.contains(&MARAHNA_II_LEFT));
    }

    #[test]
    fn exit_operands_cover_both_variants() {
        let game_data = GameData::new().unwrap();
        for map in base_map_pool(MARAHNA_II_RIGHT) {
            if map != BOSS_RUSH_PLACEHOLDER {
                assert!(game_data.exit_operands.contains_key(&map), "{map:03X}");
            }
        }
        assert!(game_data.exit_operands.contains_key(&MARAHNA_II_LEFT));
    }

    #[test]
    fn only_branching_rooms_have_two_exits() {
        let game_data = GameData::new().unwrap();
        for (&map, addrs) in &game_data.exit_operands {
            let expected = if map == 0x305 || map == 0x505 { 2 } else { 1 };
            assert_eq!(addrs.len(), expected, "{map:03X}");
        }
    }

    #[test]
    fn relocated_tables_do_not_overlap() {
        assert!(EXTENDED_METADATA_ADDR + EXTENDED_MAP_METADATA.len() <= MAP_CHANGE_ROUTINE_ADDR);
        assert!(MAP_CHANGE_ROUTINE_ADDR < BOSS_ORDER_TABLE_ADDR);
        assert!(BOSS_ORDER_TABLE_ADDR + 2 * BOSS_ORDER_COUNT <= EXIT_SLOT_TABLE_ADDR);
    }

    #[test]
    fn death_heim_family_membership() {
        assert!(is_death_heim(DEATH_HEIM_HUB));
        assert!(!is_boss_room(DEATH_HEIM_HUB));
        for map in BOSS_ROOMS {
            assert!(is_boss_room(map));
            assert!(is_death_heim(map));
        }
        assert!(!is_death_heim(ENDING_MAP));
        assert!(!is_death_heim(0x101));
    }

    #[test]
    fn every_run_map_has_a_name() {
        let game_data = GameData::new().unwrap();
        for map in base_map_pool(MARAHNA_II_LEFT) {
            if map != BOSS_RUSH_PLACEHOLDER {
                assert!(game_data.map_names.contains_key(&map), "{map:03X}");
            }
        }
        assert!(game_data.map_names.contains_key(&DEATH_HEIM_HUB));
        for map in BOSS_ROOMS {
            assert!(game_data.map_names.contains_key(&map), "{map:03X}");
        }
        assert_eq!(game_data.map_name(ENDING_MAP), "Ending");
    }
}
