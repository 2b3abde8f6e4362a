//! Test fixtures: minimal headers of each container format.

fn iso_media(brand: &[u8; 4]) -> Vec<u8> {
    let mut buf = vec![0x00, 0x00, 0x00, 0x18];
    buf.extend_from_slice(b"ftyp");
    buf.extend_from_slice(brand);
    buf.extend_from_slice(&[0x00, 0x00, 0x02, 0x00]);
    buf.extend_from_slice(b"isomiso2");
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x08]);
    buf.extend_from_slice(b"free");
    buf
}

pub fn mp4() -> Vec<u8> {
    iso_media(b"isom")
}

pub fn mov() -> Vec<u8> {
    iso_media(b"qt  ")
}

pub fn m4a() -> Vec<u8> {
    iso_media(b"M4A ")
}

pub fn mkv() -> Vec<u8> {
    let mut buf = vec![0x1A, 0x45, 0xDF, 0xA3, 0xA3];
    buf.extend_from_slice(&[0x42, 0x86, 0x81, 0x01]);
    buf.extend_from_slice(&[0x42, 0x82, 0x88]);
    buf.extend_from_slice(b"matroska");
    buf.extend_from_slice(&[0x42, 0x87, 0x81, 0x04]);
    buf
}

/// MP3 with an ID3v2 tag.
pub fn mp3() -> Vec<u8> {
    let mut buf = b"ID3".to_vec();
    buf.extend_from_slice(&[0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
    buf.extend_from_slice(&[0xFF, 0xFB, 0x90, 0x64, 0x00, 0x00, 0x00, 0x00]);
    buf
}

/// Bare MPEG-1 Layer III frame, no tag.
pub fn mp3_frame() -> Vec<u8> {
    vec![0xFF, 0xFB, 0x90, 0x64, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
}

pub fn wav() -> Vec<u8> {
    let mut buf = b"RIFF".to_vec();
    buf.extend_from_slice(&36u32.to_le_bytes());
    buf.extend_from_slice(b"WAVEfmt ");
    buf.extend_from_slice(&16u32.to_le_bytes());
    buf.extend_from_slice(&[0x01, 0x00, 0x01, 0x00]);
    buf.extend_from_slice(&44_100u32.to_le_bytes());
    buf.extend_from_slice(&88_200u32.to_le_bytes());
    buf.extend_from_slice(&[0x02, 0x00, 0x10, 0x00]);
    buf.extend_from_slice(b"data");
    buf.extend_from_slice(&0u32.to_le_bytes());
    buf
}

/// Minimal valid 1x1 PNG bytes.
pub fn png() -> Vec<u8> {
    vec![
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x02, 0x00, 0x00, 0x00, 0x90,
        0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49, 0x44, 0x41, 0x54, 0x08, 0xD7, 0x63, 0xF8,
        0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x18, 0xDD, 0x8D, 0x89, 0x00, 0x00, 0x00,
        0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ]
}

/// Bytes matching no known signature.
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut state: u32 = 0x1357_9BDF;
    let mut buf = vec![0x13, 0x57, 0x9B, 0xD1];
    while buf.len() < len {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        buf.push((state >> 24) as u8);
    }
    buf
}

/// A valid MP4 header padded to `len` bytes.
pub fn mp4_of_size(len: usize) -> Vec<u8> {
    let mut buf = mp4();
    buf.resize(len, 0);
    buf
}
