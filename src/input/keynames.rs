//! Key name mappings
//!
//! Maps SDL keycodes to the lowercase names games print and compare
//! against, and resolves the character a key produces.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::events::Modifiers;

/// SDL keycode to name mapping
static KEY_NAMES: LazyLock<HashMap<i32, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    // Common keys
    m.insert(0, "unknown");
    m.insert(8, "backspace");
    m.insert(9, "tab");
    m.insert(13, "return");
    m.insert(27, "escape");
    m.insert(32, "space");
    m.insert(39, "'");
    m.insert(44, ",");
    m.insert(45, "-");
    m.insert(46, ".");
    m.insert(47, "/");

    // Numbers
    m.insert(48, "0");
    m.insert(49, "1");
    m.insert(50, "2");
    m.insert(51, "3");
    m.insert(52, "4");
    m.insert(53, "5");
    m.insert(54, "6");
    m.insert(55, "7");
    m.insert(56, "8");
    m.insert(57, "9");

    m.insert(59, ";");
    m.insert(61, "=");

    // Letters (SDL keycodes are the lowercase ASCII values)
    m.insert(97, "a");
    m.insert(98, "b");
    m.insert(99, "c");
    m.insert(100, "d");
    m.insert(101, "e");
    m.insert(102, "f");
    m.insert(103, "g");
    m.insert(104, "h");
    m.insert(105, "i");
    m.insert(106, "j");
    m.insert(107, "k");
    m.insert(108, "l");
    m.insert(109, "m");
    m.insert(110, "n");
    m.insert(111, "o");
    m.insert(112, "p");
    m.insert(113, "q");
    m.insert(114, "r");
    m.insert(115, "s");
    m.insert(116, "t");
    m.insert(117, "u");
    m.insert(118, "v");
    m.insert(119, "w");
    m.insert(120, "x");
    m.insert(121, "y");
    m.insert(122, "z");

    m.insert(91, "[");
    m.insert(92, "\\");
    m.insert(93, "]");
    m.insert(96, "`");
    m.insert(127, "delete");

    m.insert(0x40000039, "caps lock");

    // Function keys (SDL scancodes | 0x40000000)
    m.insert(0x4000003A, "f1");
    m.insert(0x4000003B, "f2");
    m.insert(0x4000003C, "f3");
    m.insert(0x4000003D, "f4");
    m.insert(0x4000003E, "f5");
    m.insert(0x4000003F, "f6");
    m.insert(0x40000040, "f7");
    m.insert(0x40000041, "f8");
    m.insert(0x40000042, "f9");
    m.insert(0x40000043, "f10");
    m.insert(0x40000044, "f11");
    m.insert(0x40000045, "f12");

    // Navigation keys
    m.insert(0x40000049, "insert");
    m.insert(0x4000004A, "home");
    m.insert(0x4000004B, "page up");
    m.insert(0x4000004D, "end");
    m.insert(0x4000004E, "page down");

    // Arrow keys
    m.insert(0x4000004F, "right");
    m.insert(0x40000050, "left");
    m.insert(0x40000051, "down");
    m.insert(0x40000052, "up");

    // Numpad
    m.insert(0x40000053, "numlock");
    m.insert(0x40000054, "[/]");
    m.insert(0x40000055, "[*]");
    m.insert(0x40000056, "[-]");
    m.insert(0x40000057, "[+]");
    m.insert(0x40000058, "enter");
    m.insert(0x40000059, "[1]");
    m.insert(0x4000005A, "[2]");
    m.insert(0x4000005B, "[3]");
    m.insert(0x4000005C, "[4]");
    m.insert(0x4000005D, "[5]");
    m.insert(0x4000005E, "[6]");
    m.insert(0x4000005F, "[7]");
    m.insert(0x40000060, "[8]");
    m.insert(0x40000061, "[9]");
    m.insert(0x40000062, "[0]");
    m.insert(0x40000063, "[.]");

    // Modifier keys
    m.insert(0x400000E0, "left ctrl");
    m.insert(0x400000E1, "left shift");
    m.insert(0x400000E2, "left alt");
    m.insert(0x400000E3, "left meta");
    m.insert(0x400000E4, "right ctrl");
    m.insert(0x400000E5, "right shift");
    m.insert(0x400000E6, "right alt");
    m.insert(0x400000E7, "right meta");

    m
});

/// Name to SDL keycode mapping (reverse lookup)
static NAME_TO_KEY: LazyLock<HashMap<&'static str, i32>> = LazyLock::new(|| {
    KEY_NAMES
        .iter()
        .map(|(&code, &name)| (name, code))
        .collect()
});

/// Keypad keys that type a character
const KEYPAD_TEXT: [(i32, char); 15] = [
    (0x40000054, '/'),
    (0x40000055, '*'),
    (0x40000056, '-'),
    (0x40000057, '+'),
    (0x40000059, '1'),
    (0x4000005A, '2'),
    (0x4000005B, '3'),
    (0x4000005C, '4'),
    (0x4000005D, '5'),
    (0x4000005E, '6'),
    (0x4000005F, '7'),
    (0x40000060, '8'),
    (0x40000061, '9'),
    (0x40000062, '0'),
    (0x40000063, '.'),
];

/// Get the name for a keycode
pub fn key_name(keycode: i32) -> &'static str {
    KEY_NAMES.get(&keycode).copied().unwrap_or("unknown")
}

/// Get the keycode for a key name (case-insensitive)
pub fn key_from_name(name: &str) -> Option<i32> {
    if let Some(&code) = NAME_TO_KEY.get(name) {
        return Some(code);
    }

    let lower = name.to_lowercase();
    NAME_TO_KEY.get(lower.as_str()).copied()
}

/// Character a key types when the platform reports no text.
///
/// SDL keycodes below the scancode mask are the Unicode character of the
/// unshifted key on the active layout, so letters from any layout come
/// through. Shifted symbols assume a US layout. Keypad keys type only with
/// num lock on. Whitespace and control keys return `None` so they are
/// reported by name.
pub fn key_text(keycode: i32, modifiers: Modifiers) -> Option<char> {
    if let Some(&(_, c)) = KEYPAD_TEXT.iter().find(|(code, _)| *code == keycode) {
        return modifiers.num_lock.then_some(c);
    }

    let c = u32::try_from(keycode).ok().and_then(char::from_u32)?;
    if c.is_control() || c.is_whitespace() {
        return None;
    }

    if c.is_lowercase() {
        if modifiers.shift == modifiers.caps_lock {
            return Some(c);
        }
        let mut upper = c.to_uppercase();
        return match (upper.next(), upper.next()) {
            (Some(u), None) => Some(u),
            _ => Some(c),
        };
    }

    if modifiers.shift && c.is_ascii() {
        Some(shifted(c))
    } else {
        Some(c)
    }
}

/// Text reported for a key press: its character, or its name.
pub fn key_label(keycode: i32, modifiers: Modifiers) -> String {
    match key_text(keycode, modifiers) {
        Some(c) => c.to_string(),
        None => key_name(keycode).to_string(),
    }
}

fn shifted(c: char) -> char {
    match c {
        '1' => '!',
        '2' => '@',
        '3' => '#',
        '4' => '$',
        '5' => '%',
        '6' => '^',
        '7' => '&',
        '8' => '*',
        '9' => '(',
        '0' => ')',
        '-' => '_',
        '=' => '+',
        '[' => '{',
        ']' => '}',
        '\\' => '|',
        ';' => ':',
        '\'' => '"',
        ',' => '<',
        '.' => '>',
        '/' => '?',
        '`' => '~',
        other => other,
    }
}
