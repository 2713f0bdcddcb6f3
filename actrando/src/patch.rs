use crate::randomize::{Randomization, MAX_RUN_ROOMS};
use crate::settings::{InitialLives, RandomizerSettings};
use actrando_game::{
    is_boss_room, is_death_heim, GameData, MapId, PcAddr, BOSS_ORDER_COUNT,
    BOSS_ORDER_TABLE_ADDR, CREDITS_THRESHOLD_OPERAND, DEATH_HEIM_HUB, ENDING_MAP,
    EXIT_SLOT_COUNT, EXIT_SLOT_TABLE_ADDR, EXTENDED_MAP_METADATA, EXTENDED_METADATA_ADDR,
    FIRST_MAP_OPERAND, MAP_CHANGE_ROUTINE_ADDR,
};
use anyhow::{bail, ensure, Context, Result};
use hashbrown::HashSet;
use log::debug;
use std::path::Path;

pub const ROM_SIZE: usize = 0x100000;
pub const ROM_NAME_ADDR: PcAddr = 0x7FC0;
pub const ROM_NAME: &[u8] = b"ACTRAISER-USA        ";

#[derive(Clone)]
pub struct Rom {
    pub data: Vec<u8>,
    track_touched: bool,
    touched: HashSet<usize>,
}

impl Rom {
    pub fn new(data: Vec<u8>) -> Self {
        Rom {
            data,
            track_touched: false,
            touched: HashSet::new(),
        }
    }

    pub fn enable_tracking(&mut self) {
        self.track_touched = true;
        self.touched.clear();
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)
            .with_context(|| format!("Unable to load ROM at path {}", path.display()))?;
        Ok(Rom::new(data))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.data)
            .with_context(|| format!("Unable to save ROM at path {}", path.display()))?;
        Ok(())
    }

    pub fn read_u8(&self, addr: usize) -> Result<isize> {
        ensure!(addr < self.data.len(), "read_u8 address out of bounds");
        Ok(self.data[addr] as isize)
    }

    pub fn read_u16(&self, addr: usize) -> Result<isize> {
        ensure!(
            addr + 2 <= self.data.len(),
            "read_u16 address out of bounds"
        );
        let b0 = self.data[addr] as isize;
        let b1 = self.data[addr + 1] as isize;
        Ok(b0 | b1 << 8)
    }

    pub fn read_n(&self, addr: usize, n: usize) -> Result<&[u8]> {
        ensure!(addr + n <= self.data.len(), "read_n address out of bounds");
        Ok(&self.data[addr..(addr + n)])
    }

    pub fn write_u8(&mut self, addr: usize, x: isize) -> Result<()> {
        ensure!(addr < self.data.len(), "write_u8 address out of bounds");
        ensure!((0..=0xFF).contains(&x), "write_u8 data does not fit");
        self.data[addr] = x as u8;
        if self.track_touched {
            self.touched.insert(addr);
        }
        Ok(())
    }

    pub fn write_u16(&mut self, addr: usize, x: isize) -> Result<()> {
        ensure!(
            addr + 2 <= self.data.len(),
            "write_u16 address out of bounds"
        );
        ensure!((0..=0xFFFF).contains(&x), "write_u16 data does not fit");
        self.write_u8(addr, x & 0xFF)?;
        self.write_u8(addr + 1, x >> 8)?;
        Ok(())
    }

    pub fn write_n(&mut self, addr: usize, x: &[u8]) -> Result<()> {
        ensure!(
            addr + x.len() <= self.data.len(),
            "write_n address out of bounds"
        );
        for (i, &b) in x.iter().enumerate() {
            self.write_u8(addr + i, b as isize)?;
        }
        Ok(())
    }

    // Returns a list of [start, end) ranges.
    pub fn get_modified_ranges(&self) -> Vec<(usize, usize)> {
        let mut addresses: Vec<usize> = self.touched.iter().copied().collect();
        addresses.sort();
        let mut ranges: Vec<(usize, usize)> = vec![];
        for &addr in &addresses {
            match ranges.last_mut() {
                Some(range) if range.1 == addr => range.1 = addr + 1,
                _ => ranges.push((addr, addr + 1)),
            }
        }
        ranges
    }
}

pub fn check_rom(rom: &Rom) -> Result<()> {
    ensure!(
        rom.data.len() == ROM_SIZE,
        "input is {} bytes, expected an unheadered {} byte image",
        rom.data.len(),
        ROM_SIZE
    );
    let name = rom.read_n(ROM_NAME_ADDR, ROM_NAME.len())?;
    ensure!(
        name == ROM_NAME,
        "unexpected internal ROM name: {:?}",
        String::from_utf8_lossy(name)
    );
    Ok(())
}

/// One ROM write produced by the exit compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOp {
    Byte { addr: PcAddr, value: u8 },
    Word { addr: PcAddr, value: u16 },
}

pub fn apply_patches(rom: &mut Rom, ops: &[PatchOp]) -> Result<()> {
    for op in ops {
        match *op {
            PatchOp::Byte { addr, value } => rom.write_u8(addr, value as isize)?,
            PatchOp::Word { addr, value } => rom.write_u16(addr, value as isize)?,
        }
    }
    Ok(())
}

fn bcd(value: usize) -> u8 {
    (((value / 10) << 4) | (value % 10)) as u8
}

/// Rematch rooms are never stored as raw destinations: the chain always
/// routes through the hub, which forwards using the boss order table.
fn resolve_destination(map: MapId) -> MapId {
    if is_boss_room(map) {
        DEATH_HEIM_HUB
    } else {
        map
    }
}

/// Turn a sentinel-bounded run into the writes that realize it: the boot
/// operand, one destination per ordinary exit, the Death Heim slot and order
/// tables, and the credits threshold.
pub fn compile_exit_patches(game_data: &GameData, map_order: &[MapId]) -> Result<Vec<PatchOp>> {
    ensure!(map_order.len() >= 2, "run is empty");
    ensure!(
        map_order[0] == ENDING_MAP && map_order[map_order.len() - 1] == ENDING_MAP,
        "run must be bounded by ending sentinels"
    );
    let rooms = &map_order[1..map_order.len() - 1];
    ensure!(rooms.len() <= MAX_RUN_ROOMS, "run has too many rooms");

    let mut ops = vec![PatchOp::Word {
        addr: FIRST_MAP_OPERAND,
        value: resolve_destination(map_order[1]),
    }];
    let mut boss_order: Vec<MapId> = vec![];
    let mut family_exits: Vec<MapId> = vec![];
    for i in 1..map_order.len() - 1 {
        let room = map_order[i];
        let dest = resolve_destination(map_order[i + 1]);
        if is_death_heim(room) {
            boss_order.push(room);
            family_exits.push(dest);
        } else {
            let operands = game_data
                .exit_operands
                .get(&room)
                .with_context(|| format!("no exit operands for map {room:03X}"))?;
            for &addr in *operands {
                ops.push(PatchOp::Word { addr, value: dest });
            }
        }
    }
    ensure!(
        boss_order.len() == BOSS_ORDER_COUNT,
        "expected {} Death Heim rooms in the run, found {}",
        BOSS_ORDER_COUNT,
        boss_order.len()
    );
    ensure!(
        boss_order[BOSS_ORDER_COUNT - 1] == DEATH_HEIM_HUB,
        "the hub clear must come after every rematch"
    );
    for (i, &room) in boss_order.iter().enumerate() {
        ops.push(PatchOp::Word {
            addr: BOSS_ORDER_TABLE_ADDR + 2 * i,
            value: room,
        });
    }
    for (i, &dest) in family_exits.iter().enumerate() {
        ops.push(PatchOp::Word {
            addr: EXIT_SLOT_TABLE_ADDR + 2 * i,
            value: dest,
        });
    }
    // Highest room number in BCD, plus one: at or above this, roll credits.
    ops.push(PatchOp::Byte {
        addr: CREDITS_THRESHOLD_OPERAND,
        value: bcd(rooms.len() + 1),
    });
    Ok(ops)
}

/// Walk the patched exit chain the way the game would and reconstruct the
/// run. Used as a consistency check after patching.
pub fn read_back_run(rom: &Rom, game_data: &GameData) -> Result<Vec<MapId>> {
    let mut run = vec![ENDING_MAP];
    let mut boss_cursor = 0;
    let mut slot_cursor = 0;
    let mut value = rom.read_u16(FIRST_MAP_OPERAND)? as MapId;
    for _ in 0..=MAX_RUN_ROOMS {
        if value == ENDING_MAP {
            run.push(ENDING_MAP);
            return Ok(run);
        }
        let room = if value == DEATH_HEIM_HUB {
            ensure!(boss_cursor < BOSS_ORDER_COUNT, "boss order table exhausted");
            let room = rom.read_u16(BOSS_ORDER_TABLE_ADDR + 2 * boss_cursor)? as MapId;
            boss_cursor += 1;
            room
        } else {
            value
        };
        run.push(room);
        value = if is_death_heim(room) {
            ensure!(slot_cursor < EXIT_SLOT_COUNT, "exit slot table exhausted");
            let next = rom.read_u16(EXIT_SLOT_TABLE_ADDR + 2 * slot_cursor)? as MapId;
            slot_cursor += 1;
            next
        } else {
            let operands = game_data
                .exit_operands
                .get(&room)
                .with_context(|| format!("no exit operands for map {room:03X}"))?;
            rom.read_u16(operands[0])? as MapId
        };
    }
    bail!("exit chain does not terminate");
}

pub struct Patcher<'a> {
    pub rom: &'a mut Rom,
    pub randomization: &'a Randomization,
    pub settings: &'a RandomizerSettings,
    pub title: &'a str,
}

impl Patcher<'_> {
    // Move the map metadata into expansion space, where the extended block
    // with per-stage vanilla destinations lives.
    fn apply_map_metadata(&mut self) -> Result<()> {
        self.rom
            .write_n(EXTENDED_METADATA_ADDR, EXTENDED_MAP_METADATA)?;
        self.rom.write_n(0x13E28, &[0xA9, 0x1F])?; // LDA #$1F ; metadata bank (was #$05)
        Ok(())
    }

    fn apply_map_change_routine(&mut self) -> Result<()> {
        // Hook the map-change function; the displaced write runs at the end
        // of the new routine.
        self.rom.write_n(0x26C, &[0x22, 0x00, 0x97, 0x1F])?; // JSL $1F9700
        let routine: &[u8] = &[
            0xA5, 0x21, 0xF0, 0x49, // LDA $21 : BEQ advance           ; counter 0: new game boot
            0xA5, 0x1B, 0xC9, 0x08, 0xD0, 0x0D, 0xA5, 0x1A, 0xC9, 0x01, 0xD0, 0x07, // dest == $0801?                  ; ending / game over map
            0xAD, 0x2C, 0x03, 0xF0, 0x38, // LDA $032C : BEQ advance         ; run complete: count it, credits
            0x80, 0x59, // BRA finish                      ; game over passes through
            0xAD, 0x2C, 0x03, 0xF0, 0x0A, // LDA $032C : BEQ not_death
            0xA5, 0x18, 0x85, 0x1B, 0xA5, 0x19, 0x85, 0x1A, 0x80, 0x4A, // copy $18/$19 over $1B/$1A, BRA  ; death reloads the current room
            0xA5, 0x18, 0xC9, 0x07, 0xD0, 0x21, // LDA $18 : CMP #$07 : BNE adv    ; leaving Death Heim?
            0xA5, 0x19, 0xC9, 0x01, 0xD0, 0x07, // LDA $19 : CMP #$01 : BNE slot   ; boss room exits take a slot
            0xAD, 0x47, 0x03, 0xC9, 0x07, 0xD0, 0x37, // LDA $0347 : CMP #$07 : BNE fin  ; hub into an open boss door
            0xAD, 0x4D, 0x03, 0x0A, 0xAA, // slot: LDA $034D : ASL : TAX
            0xBF, 0x00, 0x98, 0x1F, 0x85, 0x1A, // LDA $1F9800,X : STA $1A         ; exit slot, low byte
            0xBF, 0x01, 0x98, 0x1F, 0x85, 0x1B, // LDA $1F9801,X : STA $1B         ; exit slot, high byte
            0xEE, 0x4D, 0x03, // INC $034D
            0xF8, 0xA5, 0x21, 0x18, 0x69, 0x01, 0x85, 0x21, 0xD8, // adv: SED : LDA $21 : CLC : ADC #$01 : STA $21 : CLD
            0xA5, 0x1B, 0xC9, 0x07, 0xD0, 0x14, // LDA $1B : CMP #$07 : BNE fin    ; hub-bound?
            0xAD, 0x4B, 0x03, 0x0A, 0xAA, // LDA $034B : ASL : TAX
            0xEE, 0x4B, 0x03, // INC $034B
            0xBF, 0x80, 0x97, 0x1F, // LDA $1F9780,X                   ; next rush entry, low byte
            0x38, 0xE9, 0x02, 0x29, 0x07, // SEC : SBC #$02 : AND #$07       ; Clear (0x701) maps to door 7
            0x8D, 0x47, 0x03, // STA $0347                       ; hub door selector
            0xA5, 0x1A, 0x85, 0x19, 0x6B, // fin: LDA $1A : STA $19 : RTL    ; displaced write, then return
        ];
        ensure!(MAP_CHANGE_ROUTINE_ADDR + routine.len() <= BOSS_ORDER_TABLE_ADDR);
        self.rom.write_n(MAP_CHANGE_ROUTINE_ADDR, routine)?;
        Ok(())
    }

    fn apply_title_screen_patches(&mut self) -> Result<()> {
        // Show exactly one menu option, the way the game presents "> START"
        // when there is no save data.
        self.rom.write_n(0x1270D, &[0xEA, 0xEA])?;
        // Widen that option into the space of the menu-cursor strings and
        // fill it with the seed and flags.
        self.rom.write_n(0x12711, &[
            0xA9, 0x00, 0x11, // LDA #$1100 ; text location (was #$120C)
            0xA0, 0x34, 0xAA, // LDY #$AA34 ; text pointer  (was #$A9D6)
        ])?;
        let display: String = self.title.chars().take(25).collect();
        let mut menu_line = format!("{:^32.32}", format!("> {display}"));
        menu_line.push('\0');
        ensure!(menu_line.is_ascii());
        self.rom.write_n(0x12A34, menu_line.as_bytes())?;
        // Prepend a hash-and-version line to the copyright text.
        self.rom.write_n(0x1271B, &[
            0xA9, 0x00, 0x15, // LDA #$1500 ; text location (was #$1700)
            0xA0, 0xBF, 0xA9, // LDY #$A9BF ; text pointer  (was #$A9DE)
        ])?;
        let version: String = crate::VERSION.chars().take(15).collect();
        let hash_line = format!(
            "  {:<8.8}  {:>17.17}\r\r",
            self.randomization.hash,
            format!("v.{version}")
        );
        ensure!(hash_line.is_ascii());
        self.rom.write_n(0x129BF, hash_line.as_bytes())?;
        // Enter Professional Mode straight from the menu.
        self.rom.write_n(0x40, &[0xEA, 0xEA])?;
        Ok(())
    }

    // Magic cannot be gained or used in Professional Mode, so the MP scroll
    // readout becomes a room counter.
    fn apply_hud_patches(&mut self) -> Result<()> {
        let counter_draw: &[u8] = &[
            0xE2, 0x20,             // SEP #$20
            0xA5, 0x21,             // LDA $21
            0x4A, 0x4A, 0x4A, 0x4A, // LSR x4
            0x09, 0x30,             // ORA #$30
            0x8F, 0x46, 0xB0, 0x7F, // STA $7FB046 ; tens digit
            0xA5, 0x21,             // LDA $21
            0x29, 0x0F,             // AND #$0F
            0x09, 0x30,             // ORA #$30
            0x8F, 0x48, 0xB0, 0x7F, // STA $7FB048 ; ones digit
            0xEA, 0xEA, 0xEA, 0xEA, 0xEA, 0xEA, 0xEA, 0xEA,
        ];
        self.rom.write_n(0x142C8, counter_draw)?;
        // "[ACT]" on the fixed HUD becomes a person icon plus two digit
        // cells for the counter.
        let act_tiles: [u16; 6] = [0x0000, 0x003A, 0x003B, 0x0030, 0x0030, 0x0000];
        for (i, &tile) in act_tiles.iter().enumerate() {
            self.rom.write_u16(0x10E7E + 2 * i, tile as isize)?;
        }
        // The fixed content ships with ten scroll icons already drawn in,
        // and nothing erases them once the scroll code is gone.
        for i in 0..10 {
            self.rom.write_u16(0x10EE8 + 2 * i, 0x0000)?;
        }
        Ok(())
    }

    fn apply_death_heim_patches(&mut self) -> Result<()> {
        // Entering the hub mid-run: always show the warp-in effect and play
        // both of its sound cues.
        self.rom.write_n(0x74FE, &[0xEA, 0xEA])?;
        self.rom.write_n(0x7677, &[0xEA, 0xEA])?;
        self.rom.write_n(0x7687, &[0xEA, 0xEA])?;
        // Show only the eye-and-gem pair of the open door, and skip the
        // dimming and shattering animations.
        let hub_eyes: &[u8] = &[
            0xA0, 0x00, 0x00,       // LDY #$0000
            0xDA,                   // PHX
            0xCC, 0x47, 0x03,       // CPY $0347
            0xF0, 0x09,             // BEQ +
            0xA9, 0x00, 0x40,       // LDA #$4000
            0x9D, 0x40, 0x00,       // STA $0040,X ; hide eyes
            0x9D, 0x80, 0x00,       // STA $0080,X ; hide gem
            0x8A,                   // TXA
            0x18,                   // CLC
            0x69, 0x80, 0x00,       // ADC #$0080
            0xAA,                   // TAX
            0xC8,                   // INY
            0xC0, 0x07, 0x00,       // CPY #$0007
            0x90, 0xE6,             // BCC loop
            0xFA,                   // PLX
            0xAD, 0x47, 0x03,       // LDA $0347
            0xC9, 0x07, 0x00,       // CMP #$0007
            0xF0, 0x4E,             // BEQ ; door 7 is the clear exit
            0x80, 0x20,             // BRA
        ];
        self.rom.write_n(0x7534, hub_eyes)?;
        // Defeating a rematch drops the sword upgrade in place of the
        // vanilla defeat-counter update; the order table drives the doors.
        self.rom.write_n(0x7EEE, &[
            0xE2, 0x20, // SEP #$20
            0x64, 0xE4, // STZ $E4
            0xC2, 0x20, // REP #$20
        ])?;
        // Stop Tanzra's theme when leaving his room.
        self.rom.write_n(0x7F00, &[0x80, 0x05])?; // BRA (was BNE)
        Ok(())
    }

    fn apply_progression_patches(&mut self) -> Result<()> {
        // Credits or Game Over is decided by the room counter, not by the
        // vanilla count of cleared Acts. A counter of zero means it wrapped
        // after room 99, which also rolls the credits. The threshold byte
        // between these two writes comes from the exit compiler.
        self.rom.write_n(0x12AA4, &[
            0xEA,       // NOP
            0xA5, 0x21, // LDA $21
            0xF0, 0x04, // BEQ ; roll credits on counter wrap
            0xC9,       // CMP #$..
        ])?;
        self.rom.write_n(0x12AAB, &[0x90, 0x3C])?; // BCC ; Game Over below threshold
        // Pin the "current Act" counter at 1 so the vanilla end-of-game
        // selector never feeds its own 0x801 into the chain.
        self.rom.write_n(0x788, &[
            0xA9, 0x01, 0x00, // LDA #$0001
            0x8D, 0x49, 0x03, // STA $0349
        ])?;
        Ok(())
    }

    fn apply_misc_patches(&mut self) -> Result<()> {
        // Skip the statue-awakening light on stage entry; under a shuffled
        // order some stages deal unavoidable damage during it.
        self.rom.write_n(0x12B0D, &[0x9C, 0xFC, 0x00])?; // STZ $00FC
        // Clear the tile-animation high bit in every stage header so the
        // relocated metadata does not glitch animated tiles.
        let mut addr = 0x1093E + 0x18;
        while addr < 0x10E7E {
            let value = self.rom.read_u8(addr)?;
            self.rom.write_u8(addr, value & 0x7F)?;
            addr += 0x1C;
        }
        Ok(())
    }

    fn apply_lives_patches(&mut self) -> Result<()> {
        // The stored count is BCD and one less than the HUD shows.
        match self.settings.initial_lives {
            None => {}
            Some(InitialLives::Extra) => {
                self.rom.write_n(0x12B13, &[0xA9, 0x09])?; // LDA #$09 (was #$04)
            }
            Some(InitialLives::Unlimited) => {
                self.rom.write_n(0x12B13, &[0xA9, 0x98])?; // 99 on the HUD
                self.rom.write_n(0x2AD, &[0xEA; 9])?; // death does not take a life
                self.rom.write_n(0x7C7, &[0xEA; 3])?; // 1-Ups do not grant one
            }
            Some(InitialLives::DeathCount) => {
                // Heart icon becomes a red slash, and the readout shows the
                // raw count instead of count-plus-one.
                self.rom.write_u16(0x10E8A, 0x0C2F)?;
                self.rom.write_n(0x14285, &[0xEA; 3])?; // tens digit
                self.rom.write_n(0x14297, &[0xEA; 3])?; // ones digit
                self.rom.write_n(0x12B13, &[0xA9, 0x00])?; // zero deaths
                // Dying at zero must not look like a Game Over.
                self.rom.write_n(0x13D1B, &[0x80, 0x1C])?; // BRA (was BNE)
                // Death calls the vanilla gain-a-life routine, which already
                // saturates at 99.
                self.rom.write_n(0x2AD, &[
                    0x20, 0x50, 0x88, // JSR $8850
                    0xEA, 0xEA, 0xEA, 0xEA, 0xEA, 0xEA,
                ])?;
                self.rom.write_n(0x7C7, &[0xEA; 3])?; // 1-Ups do not change it
            }
        }
        Ok(())
    }

    fn apply_zantetsuken_patches(&mut self) -> Result<()> {
        if self.settings.zantetsuken {
            self.rom.write_n(0x8CE, &[0xEA, 0xEA])?; // sword check: always upgraded
            self.rom.write_n(0x1DD9, &[0x80, 0x01])?; // attack power: always 2
        }
        Ok(())
    }
}

pub fn make_rom(
    base_rom: &Rom,
    settings: &RandomizerSettings,
    randomization: &Randomization,
    game_data: &GameData,
    title: &str,
) -> Result<Rom> {
    let mut rom = base_rom.clone();
    rom.enable_tracking();

    let ops = compile_exit_patches(game_data, &randomization.map_order)?;
    debug!("{} exit patches for the run", ops.len());
    apply_patches(&mut rom, &ops)?;

    let mut patcher = Patcher {
        rom: &mut rom,
        randomization,
        settings,
        title,
    };
    patcher.apply_map_metadata()?;
    patcher.apply_map_change_routine()?;
    patcher.apply_title_screen_patches()?;
    patcher.apply_hud_patches()?;
    patcher.apply_death_heim_patches()?;
    patcher.apply_progression_patches()?;
    patcher.apply_misc_patches()?;
    patcher.apply_lives_patches()?;
    patcher.apply_zantetsuken_patches()?;

    let run = read_back_run(&rom, game_data)?;
    ensure!(
        run == randomization.map_order,
        "patched exit chain does not reproduce the run"
    );
    Ok(rom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::randomize::randomize;
    use crate::settings::BossRushType;

    fn blank_rom() -> Rom {
        let mut rom = Rom::new(vec![0u8; ROM_SIZE]);
        rom.data[ROM_NAME_ADDR..ROM_NAME_ADDR + ROM_NAME.len()].copy_from_slice(ROM_NAME);
        rom
    }

    #[test]
    fn bcd_two_digit_values() {
        assert_eq!(bcd(20), 0x20);
        assert_eq!(bcd(49), 0x49);
        assert_eq!(bcd(99), 0x99);
        assert_eq!(bcd(100), 0xA0);
    }

    #[test]
    fn compiler_output_for_a_known_seed() {
        let game_data = GameData::new().unwrap();
        let r = randomize(12345, &RandomizerSettings::default()).unwrap();
        let ops = compile_exit_patches(&game_data, &r.map_order).unwrap();

        // One boot operand, 42 ordinary exits (two rooms fork), both Death
        // Heim tables, one threshold byte.
        assert_eq!(ops.len(), 60);
        assert_eq!(
            ops[0],
            PatchOp::Word {
                addr: FIRST_MAP_OPERAND,
                value: 0x501,
            }
        );
        assert!(ops.contains(&PatchOp::Byte {
            addr: CREDITS_THRESHOLD_OPERAND,
            value: 0x49,
        }));
        // 0x501 leads to 0x402.
        assert!(ops.contains(&PatchOp::Word {
            addr: 0x4023A,
            value: 0x402,
        }));
        // Both forks of Pyramid III lead to the same room.
        assert!(ops.contains(&PatchOp::Word {
            addr: 0x389B6,
            value: 0x304,
        }));
        assert!(ops.contains(&PatchOp::Word {
            addr: 0x38A67,
            value: 0x304,
        }));
        // The last ordinary room exits into the trailing sentinel.
        assert!(ops.contains(&PatchOp::Word {
            addr: 0x44A93,
            value: ENDING_MAP,
        }));
        // First rush entry in run order.
        assert!(ops.contains(&PatchOp::Word {
            addr: BOSS_ORDER_TABLE_ADDR,
            value: 0x706,
        }));
        // The room after the fourth rematch is itself a rematch, so its
        // slot resolves to the hub.
        assert!(ops.contains(&PatchOp::Word {
            addr: EXIT_SLOT_TABLE_ADDR + 2 * 3,
            value: DEATH_HEIM_HUB,
        }));
    }

    #[test]
    fn threshold_counts_one_past_the_last_room() {
        // 19 rooms: highest room number 0x19 in BCD, threshold 0x20.
        let mut run = vec![
            ENDING_MAP,
            0x101, 0x102, 0x103, 0x104, 0x201, 0x202, 0x203, 0x204, 0x205, 0x206, 0x207,
        ];
        run.extend([0x706, 0x704, 0x707, 0x705, 0x703, 0x708, 0x702, DEATH_HEIM_HUB, ENDING_MAP]);
        let game_data = GameData::new().unwrap();
        let ops = compile_exit_patches(&game_data, &run).unwrap();
        assert!(ops.contains(&PatchOp::Byte {
            addr: CREDITS_THRESHOLD_OPERAND,
            value: 0x20,
        }));
    }

    #[test]
    fn compiler_rejects_malformed_runs() {
        let game_data = GameData::new().unwrap();
        // No sentinels.
        assert!(compile_exit_patches(&game_data, &[0x101, 0x102]).is_err());
        // Rush without the hub clear.
        let run = [
            ENDING_MAP, 0x101, 0x702, 0x703, 0x704, 0x705, 0x706, 0x707, 0x708, ENDING_MAP,
        ];
        assert!(compile_exit_patches(&game_data, &run).is_err());
    }

    #[test]
    fn patched_chain_reproduces_the_run() {
        let game_data = GameData::new().unwrap();
        for seed in 0..100 {
            let r = randomize(seed, &RandomizerSettings::default()).unwrap();
            let mut rom = blank_rom();
            let ops = compile_exit_patches(&game_data, &r.map_order).unwrap();
            apply_patches(&mut rom, &ops).unwrap();
            let run = read_back_run(&rom, &game_data).unwrap();
            assert_eq!(run, r.map_order, "seed {seed}");
        }
        let settings = RandomizerSettings {
            boss_rush_type: Some(BossRushType::Consecutive),
            ..RandomizerSettings::default()
        };
        for seed in 0..50 {
            let r = randomize(seed, &settings).unwrap();
            let mut rom = blank_rom();
            let ops = compile_exit_patches(&game_data, &r.map_order).unwrap();
            apply_patches(&mut rom, &ops).unwrap();
            let run = read_back_run(&rom, &game_data).unwrap();
            assert_eq!(run, r.map_order, "seed {seed}");
        }
    }

    #[test]
    fn boot_operand_resolves_a_leading_rematch_to_the_hub() {
        // Seed 6 opens with a rematch room under default options.
        let r = randomize(6, &RandomizerSettings::default()).unwrap();
        assert!(is_death_heim(r.map_order[1]));
        let game_data = GameData::new().unwrap();
        let ops = compile_exit_patches(&game_data, &r.map_order).unwrap();
        assert_eq!(
            ops[0],
            PatchOp::Word {
                addr: FIRST_MAP_OPERAND,
                value: DEATH_HEIM_HUB,
            }
        );
        let mut rom = blank_rom();
        apply_patches(&mut rom, &ops).unwrap();
        assert_eq!(read_back_run(&rom, &game_data).unwrap(), r.map_order);
    }

    #[test]
    fn modified_ranges_merge_adjacent_writes() {
        let mut rom = blank_rom();
        rom.enable_tracking();
        rom.write_u8(0x100, 0x12).unwrap();
        rom.write_u8(0x101, 0x34).unwrap();
        rom.write_u16(0x200, 0x5678).unwrap();
        rom.write_u8(0x104, 0x9A).unwrap();
        assert_eq!(
            rom.get_modified_ranges(),
            vec![(0x100, 0x102), (0x104, 0x105), (0x200, 0x202)]
        );
    }

    #[test]
    fn check_rom_validates_size_and_name() {
        assert!(check_rom(&blank_rom()).is_ok());
        let mut short = blank_rom();
        short.data.truncate(0x80000);
        assert!(check_rom(&short).is_err());
        let mut bad_name = blank_rom();
        bad_name.data[ROM_NAME_ADDR] = b'X';
        assert!(check_rom(&bad_name).is_err());
    }
}
