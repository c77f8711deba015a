//! WOFF2 container header and table-directory parsing.
//!
//! Validates the fixed 48-byte header and walks the variable-length table
//! directory. The declared length in the header must equal the buffer size;
//! that check runs before any directory parsing so every wrong-length
//! buffer fails the same way regardless of what follows the header.
//! Brotli decompression and table reconstruction are out of scope.

use crate::error::{Error, Result};

/// Fixed header size in bytes.
const HEADER_LEN: usize = 48;

/// Known table tags, indexed by the 6-bit tag field of a directory entry.
/// Index 63 signals an explicit 4-byte tag instead.
const KNOWN_TAGS: [&[u8; 4]; 63] = [
    b"cmap", b"head", b"hhea", b"hmtx", b"maxp", b"name", b"OS/2", b"post", b"cvt ", b"fpgm",
    b"glyf", b"loca", b"prep", b"CFF ", b"VORG", b"EBDT", b"EBLC", b"gasp", b"hdmx", b"kern",
    b"LTSH", b"PCLT", b"VDMX", b"vhea", b"vmtx", b"BASE", b"GDEF", b"GPOS", b"GSUB", b"EBSC",
    b"JSTF", b"MATH", b"CBDT", b"CBLC", b"COLR", b"CPAL", b"SVG ", b"sbix", b"acnt", b"avar",
    b"bdat", b"bloc", b"bsln", b"cvar", b"fdsc", b"feat", b"fmtx", b"fvar", b"gvar", b"hsty",
    b"just", b"lcar", b"mort", b"morx", b"opbd", b"prop", b"trak", b"Zapf", b"Silf", b"Glat",
    b"Gloc", b"Feat", b"Sill",
];

/// A parsed table-directory entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Woff2Table {
    /// Four-byte table tag.
    pub tag: [u8; 4],
    /// Preprocessing transformation version (0-3).
    pub transform: u8,
    /// Length of the original (untransformed) table.
    pub orig_length: u32,
    /// Length of the transformed table, when a transform applies.
    pub transform_length: Option<u32>,
}

/// A structurally validated WOFF2 container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Woff2 {
    /// The sfnt flavor of the packed font.
    pub flavor: u32,
    /// Reported size of the uncompressed sfnt.
    pub total_sfnt_size: u32,
    /// Size of the compressed data block.
    pub total_compressed_size: u32,
    pub major_version: u16,
    pub minor_version: u16,
    pub meta_offset: u32,
    pub meta_length: u32,
    pub priv_offset: u32,
    pub priv_length: u32,
    /// Table directory, in file order.
    pub tables: Vec<Woff2Table>,
}

fn be_u16(data: &[u8], pos: usize) -> u16 {
    u16::from_be_bytes([data[pos], data[pos + 1]])
}

fn be_u32(data: &[u8], pos: usize) -> u32 {
    u32::from_be_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]])
}

/// Read a UIntBase128 variable-length integer.
fn read_base128(data: &[u8], pos: &mut usize) -> Result<u32> {
    let mut accum: u32 = 0;
    for i in 0..5 {
        let byte = *data.get(*pos).ok_or(Error::Truncated {
            need: *pos + 1,
            len: data.len(),
        })?;
        *pos += 1;
        if i == 0 && byte == 0x80 {
            return Err(Error::Directory("leading zeros in base-128 number".into()));
        }
        if accum & 0xFE00_0000 != 0 {
            return Err(Error::Directory("base-128 number overflow".into()));
        }
        accum = (accum << 7) | u32::from(byte & 0x7F);
        if byte & 0x80 == 0 {
            return Ok(accum);
        }
    }
    Err(Error::Directory("base-128 number too long".into()))
}

/// Whether a table with `tag` and transformation `version` carries an
/// explicit transformed length. glyf and loca are transformed at version
/// 0; every other table is transformed at any nonzero version.
fn has_transform(tag: &[u8; 4], version: u8) -> bool {
    match tag {
        b"glyf" | b"loca" => version == 0,
        _ => version != 0,
    }
}

/// Parse and validate a WOFF2 container.
///
/// # Errors
///
/// - [`Error::Truncated`] when the buffer is shorter than the fixed header
///   or ends inside the table directory.
/// - [`Error::BadSignature`] when the buffer does not start with `wOF2`.
/// - [`Error::LengthMismatch`] when the header's length field disagrees
///   with the buffer size.
/// - [`Error::Directory`] for malformed varints or a compressed-data block
///   that overruns the buffer.
pub fn parse_woff2(data: &[u8]) -> Result<Woff2> {
    if data.len() < HEADER_LEN {
        return Err(Error::Truncated {
            need: HEADER_LEN,
            len: data.len(),
        });
    }
    if &data[0..4] != b"wOF2" {
        return Err(Error::BadSignature);
    }
    if be_u32(data, 8) as usize != data.len() {
        return Err(Error::LengthMismatch);
    }

    let num_tables = be_u16(data, 12);
    let total_compressed_size = be_u32(data, 20);

    let mut pos = HEADER_LEN;
    let mut tables = Vec::with_capacity(usize::from(num_tables));
    for _ in 0..num_tables {
        let flags = *data.get(pos).ok_or(Error::Truncated {
            need: pos + 1,
            len: data.len(),
        })?;
        pos += 1;

        let tag_index = flags & 0x3F;
        let transform = flags >> 6;
        let tag = if let Some(tag) = KNOWN_TAGS.get(usize::from(tag_index)) {
            **tag
        } else {
            // Index 63: explicit tag follows.
            if data.len() < pos + 4 {
                return Err(Error::Truncated {
                    need: pos + 4,
                    len: data.len(),
                });
            }
            let tag = [data[pos], data[pos + 1], data[pos + 2], data[pos + 3]];
            pos += 4;
            tag
        };

        let orig_length = read_base128(data, &mut pos)?;
        let transform_length = if has_transform(&tag, transform) {
            Some(read_base128(data, &mut pos)?)
        } else {
            None
        };
        tables.push(Woff2Table {
            tag,
            transform,
            orig_length,
            transform_length,
        });
    }

    let compressed_end = pos.checked_add(total_compressed_size as usize);
    if compressed_end.is_none_or(|end| end > data.len()) {
        return Err(Error::Directory(
            "compressed data block exceeds file size".into(),
        ));
    }

    Ok(Woff2 {
        flavor: be_u32(data, 4),
        total_sfnt_size: be_u32(data, 16),
        total_compressed_size,
        major_version: be_u16(data, 24),
        minor_version: be_u16(data, 26),
        meta_offset: be_u32(data, 28),
        meta_length: be_u32(data, 32),
        priv_offset: be_u32(data, 36),
        priv_length: be_u32(data, 40),
        tables,
    })
}
