//! Text message packing into the 77-bit FT8 payload.
//!
//! Two layouts are produced:
//!
//! - **Standard** (`i3 = 1`, or `i3 = 2` when a call carries `/P`): two
//!   28-bit call fields, each with a suffix flag, a 16-bit grid/report field
//!   and the 3-bit type. The first call may be `CQ`, `CQ nnn`, `CQ ABCD`,
//!   `DE` or `QRZ`.
//! - **Free text** (`i3 = 0`, `n3 = 0`): up to 13 characters as a base-42
//!   number in 71 bits.
//!
//! Standard parsing is tried first; anything it rejects falls back to free
//! text.

use crate::PackError;
use crate::constants::PAYLOAD_BYTES;
use core::fmt;

/// Call field values below this are special tokens (DE, QRZ, CQ forms).
const NTOKENS: u32 = 2_063_592;
/// Call field range reserved for 22-bit callsign hashes.
const MAX22: u32 = 4_194_304;
/// Grid field values above this are reports and acknowledgements.
const MAXGRID4: u16 = 32_400;
/// Acknowledge flag in the grid field.
const R_FLAG: u16 = 0x8000;

const FREE_TEXT_LEN: usize = 13;

const ALPHANUM_SPACE: &[u8] = b" 0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ALPHANUM: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const NUMERIC: &[u8] = b"0123456789";
const LETTERS_SPACE: &[u8] = b" ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const FREE_TEXT: &[u8] = b" 0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ+-./?";

fn char_index(alphabet: &[u8], c: u8) -> Option<u32> {
    alphabet.iter().position(|&a| a == c).map(|i| i as u32)
}

/// A packed 77-bit message.
///
/// Bits are stored MSB first; the low three bits of the last byte are
/// always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Payload([u8; PAYLOAD_BYTES]);

impl Payload {
    /// Wrap raw bytes, clearing the three bits past the payload.
    pub fn from_bytes(mut bytes: [u8; PAYLOAD_BYTES]) -> Self {
        bytes[PAYLOAD_BYTES - 1] &= 0xf8;
        Self(bytes)
    }

    fn from_bits(bits: u128) -> Self {
        let wide = (bits << 3).to_be_bytes();
        let mut bytes = [0u8; PAYLOAD_BYTES];
        bytes.copy_from_slice(&wide[16 - PAYLOAD_BYTES..]);
        Self(bytes)
    }

    /// The 77 payload bits as an integer.
    pub fn bits(&self) -> u128 {
        let mut wide = [0u8; 16];
        wide[16 - PAYLOAD_BYTES..].copy_from_slice(&self.0);
        u128::from_be_bytes(wide) >> 3
    }

    /// Raw payload bytes.
    pub fn as_bytes(&self) -> &[u8; PAYLOAD_BYTES] {
        &self.0
    }

    /// Message type field `i3`.
    pub fn i3(&self) -> u8 {
        (self.bits() & 0x7) as u8
    }

    /// Free-text subtype `n3`, meaningful when `i3 == 0`.
    pub fn n3(&self) -> u8 {
        ((self.bits() >> 3) & 0x7) as u8
    }
}

impl fmt::Display for Payload {
    /// Lowercase hex bytes separated by spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Turns a text message into a packed payload.
pub trait MessagePacker {
    /// Pack `message`, or explain why it cannot be sent.
    fn pack(&self, message: &str) -> Result<Payload, PackError>;
}

/// FT8 message packer for standard and free-text messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ft8Packer;

impl MessagePacker for Ft8Packer {
    fn pack(&self, message: &str) -> Result<Payload, PackError> {
        pack77(message)
    }
}

/// Pack `message` into a 77-bit payload.
///
/// The message is upper-cased and runs of whitespace collapse to one space.
///
/// # Example
///
/// ```rust
/// use ft8gen_protocol::pack77;
///
/// let payload = pack77("CQ K1ABC FN42").unwrap();
/// assert_eq!(payload.i3(), 1);
/// assert_eq!(payload.to_string(), "00 00 00 20 4d ef 1a 8a 19 88");
/// ```
pub fn pack77(message: &str) -> Result<Payload, PackError> {
    let text = normalize(message);
    if text.is_empty() {
        return Err(PackError::Empty);
    }

    if let Some(bits) = pack_standard(&text) {
        tracing::debug!(text = %text, "packed standard message");
        return Ok(Payload::from_bits(bits));
    }

    let bits = pack_free_text(&text)?;
    tracing::debug!(text = %text, "packed free text");
    Ok(Payload::from_bits(bits))
}

fn normalize(message: &str) -> String {
    message
        .split_whitespace()
        .map(str::to_ascii_uppercase)
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Standard messages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Suffix {
    None,
    Rover,
    Portable,
}

#[derive(Debug, Clone, Copy)]
struct CallField {
    n28: u32,
    suffix: Suffix,
}

impl CallField {
    fn token(n28: u32) -> Self {
        Self {
            n28,
            suffix: Suffix::None,
        }
    }

    fn n29(self) -> u128 {
        (u128::from(self.n28) << 1) | u128::from(self.suffix != Suffix::None)
    }
}

fn pack_standard(text: &str) -> Option<u128> {
    let tokens: Vec<&str> = text.split(' ').collect();

    let (first, rest) = match tokens.as_slice() {
        ["CQ", modifier, rest @ ..] if !rest.is_empty() && is_cq_modifier(modifier) => {
            (CallField::token(pack_cq_modifier(modifier)?), rest)
        }
        ["CQ", rest @ ..] => (CallField::token(2), rest),
        ["QRZ", rest @ ..] => (CallField::token(1), rest),
        ["DE", rest @ ..] => (CallField::token(0), rest),
        [call, rest @ ..] => (parse_call(call)?, rest),
        [] => return None,
    };

    let (second, igrid4) = match rest {
        [call] => (parse_call(call)?, MAXGRID4 + 1),
        [call, extra] => (parse_call(call)?, pack_extra(extra)?),
        [call, "R", grid] => (parse_call(call)?, pack_grid4(grid)? | R_FLAG),
        _ => return None,
    };

    let suffixes = [first.suffix, second.suffix];
    let i3: u128 = if suffixes.contains(&Suffix::Portable) {
        if suffixes.contains(&Suffix::Rover) {
            return None;
        }
        2
    } else {
        1
    };

    Some((first.n29() << 48) | (second.n29() << 19) | (u128::from(igrid4) << 3) | i3)
}

fn parse_call(token: &str) -> Option<CallField> {
    let (base, suffix) = if let Some(base) = token.strip_suffix("/R") {
        (base, Suffix::Rover)
    } else if let Some(base) = token.strip_suffix("/P") {
        (base, Suffix::Portable)
    } else {
        (token, Suffix::None)
    };

    Some(CallField {
        n28: pack_basecall(base)?,
        suffix,
    })
}

fn is_cq_modifier(token: &str) -> bool {
    let b = token.as_bytes();
    (b.len() == 3 && b.iter().all(u8::is_ascii_digit))
        || ((1..=4).contains(&b.len()) && b.iter().all(u8::is_ascii_uppercase))
}

/// Call field for `CQ nnn` (directed to a frequency) or `CQ ABCD`.
fn pack_cq_modifier(token: &str) -> Option<u32> {
    let b = token.as_bytes();
    if b.iter().all(u8::is_ascii_digit) {
        return token.parse::<u32>().ok().map(|n| 3 + n);
    }
    let m = b
        .iter()
        .fold(0u32, |m, &c| 27 * m + u32::from(c - b'A' + 1));
    Some(1003 + m)
}

/// Call field for a standard callsign (prefix, one digit, up to 3 letters).
pub(crate) fn pack_basecall(call: &str) -> Option<u32> {
    let b = call.as_bytes();
    let n = b.len();
    if n < 3 {
        return None;
    }

    // Right-align so the call-area digit lands in the third slot.
    let mut c6 = [b' '; 6];
    if call.starts_with("3DA0") && n <= 7 {
        c6[..3].copy_from_slice(b"3D0");
        c6[3..n - 1].copy_from_slice(&b[4..]);
    } else if call.starts_with("3X") && b[2].is_ascii_uppercase() && n <= 7 {
        c6[0] = b'Q';
        c6[1..n - 1].copy_from_slice(&b[2..]);
    } else if b[2].is_ascii_digit() && n <= 6 {
        c6[..n].copy_from_slice(b);
    } else if b[1].is_ascii_digit() && n <= 5 {
        c6[1..=n].copy_from_slice(b);
    } else {
        return None;
    }

    let mut value = char_index(ALPHANUM_SPACE, c6[0])?;
    value = value * 36 + char_index(ALPHANUM, c6[1])?;
    value = value * 10 + char_index(NUMERIC, c6[2])?;
    for &c in &c6[3..] {
        value = value * 27 + char_index(LETTERS_SPACE, c)?;
    }

    Some(NTOKENS + MAX22 + value)
}

/// Grid field: locator, report, or acknowledgement.
fn pack_extra(token: &str) -> Option<u16> {
    match token {
        "RRR" => Some(MAXGRID4 + 2),
        "RR73" => Some(MAXGRID4 + 3),
        "73" => Some(MAXGRID4 + 4),
        _ => pack_grid4(token).or_else(|| match token.strip_prefix('R') {
            Some(report) => pack_report(report).map(|r| r | R_FLAG),
            None => pack_report(token),
        }),
    }
}

/// Four-character Maidenhead locator, `AA00` to `RR99`.
pub(crate) fn pack_grid4(token: &str) -> Option<u16> {
    let &[a, b, c, d] = token.as_bytes() else {
        return None;
    };
    if !(b'A'..=b'R').contains(&a) || !(b'A'..=b'R').contains(&b) {
        return None;
    }
    if !c.is_ascii_digit() || !d.is_ascii_digit() {
        return None;
    }

    let field = u16::from(a - b'A') * 18 + u16::from(b - b'A');
    Some((field * 10 + u16::from(c - b'0')) * 10 + u16::from(d - b'0'))
}

/// Signed signal report in dB, `-30` to `+49`.
fn pack_report(token: &str) -> Option<u16> {
    let digits = token.strip_prefix('+').or_else(|| token.strip_prefix('-'))?;
    if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let magnitude: i32 = digits.parse().ok()?;
    let db = if token.starts_with('-') { -magnitude } else { magnitude };
    if !(-30..=49).contains(&db) {
        return None;
    }
    Some(MAXGRID4 + (db + 35) as u16)
}

// ---------------------------------------------------------------------------
// Free text
// ---------------------------------------------------------------------------

fn pack_free_text(text: &str) -> Result<u128, PackError> {
    let len = text.chars().count();
    if len > FREE_TEXT_LEN {
        return Err(PackError::TooLong {
            len,
            max: FREE_TEXT_LEN,
        });
    }

    let mut value: u128 = 0;
    let padded = text.chars().chain(core::iter::repeat(' ')).take(FREE_TEXT_LEN);
    for ch in padded {
        let index = u8::try_from(ch)
            .ok()
            .and_then(|c| char_index(FREE_TEXT, c))
            .ok_or(PackError::InvalidCharacter(ch))?;
        value = value * 42 + u128::from(index);
    }

    // n3 = 0, i3 = 0
    Ok(value << 6)
}
