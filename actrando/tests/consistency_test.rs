use actrando::patch::{check_rom, make_rom, Rom, ROM_NAME, ROM_NAME_ADDR, ROM_SIZE};
use actrando::randomize::randomize;
use actrando::settings::RandomizerSettings;
use actrando_game::GameData;
use anyhow::Result;
use std::{path::Path, process::Command};

fn test_rom() -> Rom {
    let mut rom = Rom::new(vec![0u8; ROM_SIZE]);
    rom.data[ROM_NAME_ADDR..ROM_NAME_ADDR + ROM_NAME.len()].copy_from_slice(ROM_NAME);
    rom
}

/// Consistency test to ensure that given the same settings and seed values,
/// the same ROM is produced. This helps catch any unintended
/// non-deterministic behavior in the patching process.
#[test]
fn same_seed_same_rom() -> Result<()> {
    let game_data = GameData::new()?;
    let settings = RandomizerSettings::default();
    let base = test_rom();

    let r = randomize(12345, &settings)?;
    let rom1 = make_rom(&base, &settings, &r, &game_data, "12345")?;
    let rom2 = make_rom(&base, &settings, &r, &game_data, "12345")?;
    assert_eq!(rom1.data, rom2.data);

    let other = randomize(54321, &settings)?;
    let rom3 = make_rom(&base, &settings, &other, &game_data, "54321")?;
    assert_ne!(rom1.data, rom3.data);
    Ok(())
}

#[test]
fn writes_stay_inside_known_regions() -> Result<()> {
    let game_data = GameData::new()?;
    let settings = RandomizerSettings::default();
    let r = randomize(12345, &settings)?;
    let rom = make_rom(&test_rom(), &settings, &r, &game_data, "12345")?;

    let ranges = rom.get_modified_ranges();
    assert!(!ranges.is_empty());
    for &(start, end) in &ranges {
        assert!(end <= ROM_SIZE);
        let in_engine = end <= 0x15000;
        let in_operands = start >= 0x30000 && end <= 0x45000;
        let in_expansion = start >= 0xF8000 && end <= 0xF9810;
        assert!(
            in_engine || in_operands || in_expansion,
            "unexpected write range {start:#X}..{end:#X}"
        );
    }
    // The relocated metadata block is rewritten in full.
    assert!(ranges.contains(&(0xF8000, 0xF9600)));
    Ok(())
}

#[test]
fn options_change_the_patched_bytes() -> Result<()> {
    let game_data = GameData::new()?;
    let base = test_rom();
    let plain = RandomizerSettings::default();
    let r = randomize(7, &plain)?;
    let rom_plain = make_rom(&base, &plain, &r, &game_data, "7")?;

    let zantetsuken = RandomizerSettings {
        zantetsuken: true,
        ..plain
    };
    let rom_z = make_rom(&base, &zantetsuken, &r, &game_data, "7 -Z")?;
    assert_ne!(rom_plain.data, rom_z.data);
    assert_eq!(rom_z.data[0x8CE..0x8D0], [0xEA, 0xEA]);
    assert_eq!(rom_plain.data[0x8CE..0x8D0], [0x00, 0x00]);
    Ok(())
}

/// The seed is a 32-bit value no matter how it is supplied: a wider command
/// line seed reduces to its low 32 bits, so the report and the run must match
/// what the reduced seed produces.
#[test]
fn wide_seeds_reduce_to_32_bits() -> Result<()> {
    let cli = env!("CARGO_BIN_EXE_actrando-cli");
    let wide = Command::new(cli)
        .args(["--dry-run", "--seed", "4294967296"])
        .output()?;
    let zero = Command::new(cli)
        .args(["--dry-run", "--seed", "0"])
        .output()?;
    assert!(wide.status.success());
    assert!(zero.status.success());

    let wide_report = String::from_utf8(wide.stdout)?;
    let zero_report = String::from_utf8(zero.stdout)?;
    assert!(wide_report.contains("Seed: 0\n"));
    assert!(wide_report.contains("Hash: 4EC1595C\n"));
    assert!(zero_report.contains("Hash: 4EC1595C\n"));
    Ok(())
}

/// Full check against a real image. Ignored by default because it requires
/// the US ROM, which cannot be distributed. Point ACTRAISER_ROM at an
/// unheadered image and run with --ignored.
#[test]
#[ignore]
fn real_rom_generation() -> Result<()> {
    let rom_path =
        std::env::var("ACTRAISER_ROM").expect("set ACTRAISER_ROM to an unheadered US image");
    let base = Rom::load(Path::new(&rom_path))?;
    check_rom(&base)?;

    let game_data = GameData::new()?;
    let settings = RandomizerSettings::default();
    let r = randomize(12345, &settings)?;
    let rom1 = make_rom(&base, &settings, &r, &game_data, "12345")?;
    let rom2 = make_rom(&base, &settings, &r, &game_data, "12345")?;
    assert_eq!(rom1.data, rom2.data);

    // The menu line shows the seed.
    let menu = rom1.read_n(0x12A34, 33)?;
    let text = std::str::from_utf8(&menu[..32])?;
    assert!(text.trim().starts_with("> 12345"));
    Ok(())
}
