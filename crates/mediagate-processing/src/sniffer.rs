//! File type detection from leading bytes.
//!
//! Audio and video containers are matched against a local signature table.
//! Everything else falls through to `infer`, which covers images, archives and
//! documents well enough to name them in a rejection message.

use mediagate_core::DetectedType;

const MP4: DetectedType = DetectedType::new("mp4", "video/mp4");
const MOV: DetectedType = DetectedType::new("mov", "video/quicktime");
const M4A: DetectedType = DetectedType::new("m4a", "audio/x-m4a");
const M4B: DetectedType = DetectedType::new("m4b", "audio/mp4");
const M4P: DetectedType = DetectedType::new("m4p", "video/mp4");
const M4V: DetectedType = DetectedType::new("m4v", "video/x-m4v");
const THREE_G2: DetectedType = DetectedType::new("3g2", "video/3gpp2");
const THREE_GP: DetectedType = DetectedType::new("3gp", "video/3gpp");
const AVIF: DetectedType = DetectedType::new("avif", "image/avif");
const HEIC: DetectedType = DetectedType::new("heic", "image/heic");
const MKV: DetectedType = DetectedType::new("mkv", "video/x-matroska");
const WEBM: DetectedType = DetectedType::new("webm", "video/webm");
const MP3: DetectedType = DetectedType::new("mp3", "audio/mpeg");
const MP2: DetectedType = DetectedType::new("mp2", "audio/mpeg");
const MP1: DetectedType = DetectedType::new("mp1", "audio/mpeg");
const AAC: DetectedType = DetectedType::new("aac", "audio/aac");
const WAV: DetectedType = DetectedType::new("wav", "audio/wav");
const AVI: DetectedType = DetectedType::new("avi", "video/vnd.avi");
const OGG: DetectedType = DetectedType::new("ogg", "audio/ogg");
const FLAC: DetectedType = DetectedType::new("flac", "audio/flac");

const EBML_MAGIC: [u8; 4] = [0x1A, 0x45, 0xDF, 0xA3];
const EBML_DOCTYPE_ID: [u8; 2] = [0x42, 0x82];
/// How far into an EBML header the DocType element is searched for.
const EBML_SCAN_LIMIT: usize = 4096;

/// Best guess of the file type of `buf`, from content only.
///
/// Returns `None` for empty, all-zero, truncated or unrecognised input.
pub fn sniff(buf: &[u8]) -> Option<DetectedType> {
    if buf.iter().all(|&b| b == 0) {
        return None;
    }

    sniff_media(buf).or_else(|| {
        infer::get(buf).map(|kind| DetectedType::new(kind.extension(), kind.mime_type()))
    })
}

fn sniff_media(buf: &[u8]) -> Option<DetectedType> {
    if buf.len() >= 12 && &buf[4..8] == b"ftyp" {
        return Some(ftyp_brand(&buf[8..12]));
    }

    if buf.len() >= 8 && matches!(&buf[4..8], b"free" | b"mdat" | b"moov" | b"wide") {
        return Some(MOV);
    }

    if buf.starts_with(&EBML_MAGIC) {
        return match ebml_doctype(buf)? {
            b"matroska" => Some(MKV),
            b"webm" => Some(WEBM),
            _ => None,
        };
    }

    if buf.starts_with(b"ID3") {
        return Some(MP3);
    }

    if buf.len() >= 12 && buf.starts_with(b"RIFF") {
        match &buf[8..12] {
            b"WAVE" => return Some(WAV),
            b"AVI " => return Some(AVI),
            _ => {}
        }
    }

    if buf.starts_with(b"OggS") {
        return Some(OGG);
    }

    if buf.starts_with(b"fLaC") {
        return Some(FLAC);
    }

    if buf.len() >= 2 && buf[0] == 0xFF && buf[1] & 0xE0 == 0xE0 {
        return mpeg_audio_frame(buf[1]);
    }

    None
}

fn ftyp_brand(brand: &[u8]) -> DetectedType {
    match brand {
        b"qt  " => MOV,
        b"M4A " => M4A,
        b"M4B " => M4B,
        b"M4P " => M4P,
        b"M4V " | b"M4VH" | b"M4VP" => M4V,
        b"avif" | b"avis" => AVIF,
        b"heic" | b"heix" | b"mif1" => HEIC,
        b if b.starts_with(b"3g2") => THREE_G2,
        b if b.starts_with(b"3g") => THREE_GP,
        _ => MP4,
    }
}

/// Classify the second byte of an MPEG audio or ADTS frame header.
fn mpeg_audio_frame(header: u8) -> Option<DetectedType> {
    // 12-bit sync with layer 00
    if header & 0x16 == 0x10 {
        return Some(AAC);
    }

    match (header >> 1) & 0b11 {
        0b01 => Some(MP3),
        0b10 => Some(MP2),
        0b11 => Some(MP1),
        _ => None,
    }
}

/// Value of the DocType element of an EBML header, if present.
fn ebml_doctype(buf: &[u8]) -> Option<&[u8]> {
    let header = &buf[..buf.len().min(EBML_SCAN_LIMIT)];
    let id_at = header
        .windows(EBML_DOCTYPE_ID.len())
        .position(|w| w == EBML_DOCTYPE_ID)?;

    let rest = &header[id_at + EBML_DOCTYPE_ID.len()..];
    let (size, size_len) = read_vint(rest)?;
    let value = rest.get(size_len..size_len.checked_add(size)?)?;

    let end = value.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    Some(&value[..end])
}

/// Decode an EBML variable-length integer, returning the value and its width.
fn read_vint(buf: &[u8]) -> Option<(usize, usize)> {
    let first = *buf.first()?;
    if first == 0 {
        return None;
    }

    let width = first.leading_zeros() as usize + 1;
    let bytes = buf.get(..width)?;

    let mut value = first as usize & (0xFF >> width);
    for &b in &bytes[1..] {
        value = (value << 8) | b as usize;
    }
    Some((value, width))
}
