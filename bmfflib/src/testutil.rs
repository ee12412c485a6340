//! Byte-stream builders shared by the unit tests.
#![allow(dead_code)]

/// A box: 32-bit size, fourcc, payload.
pub(crate) fn boxb(fourcc: &str, payload: &[u8]) -> Vec<u8> {
    assert_eq!(fourcc.len(), 4);
    let mut v = Vec::new();
    v.extend_from_slice(&((payload.len() as u32) + 8).to_be_bytes());
    v.extend_from_slice(fourcc.as_bytes());
    v.extend_from_slice(payload);
    v
}

/// A full box: version and flags packed in front of the payload.
pub(crate) fn full_boxb(fourcc: &str, version: u8, flags: u32, payload: &[u8]) -> Vec<u8> {
    let mut p = Vec::new();
    p.extend_from_slice(&(((version as u32) << 24) | (flags & 0x00ff_ffff)).to_be_bytes());
    p.extend_from_slice(payload);
    boxb(fourcc, &p)
}

pub(crate) fn concat(parts: &[Vec<u8>]) -> Vec<u8> {
    let mut v = Vec::new();
    for p in parts {
        v.extend_from_slice(p);
    }
    v
}

pub(crate) fn identity_matrix() -> Vec<u8> {
    let mut v = Vec::new();
    for n in &[0x00010000i32, 0, 0, 0, 0x00010000, 0, 0, 0, 0x40000000] {
        v.extend_from_slice(&n.to_be_bytes());
    }
    v
}

/// Version 0 tkhd payload (after version/flags).
pub(crate) fn tkhd_v0_payload(track_id: u32, width: u16, height: u16) -> Vec<u8> {
    let mut p = Vec::new();
    p.extend_from_slice(&0u32.to_be_bytes()); // cr_time
    p.extend_from_slice(&0u32.to_be_bytes()); // mod_time
    p.extend_from_slice(&track_id.to_be_bytes());
    p.extend_from_slice(&[0u8; 4]); // reserved
    p.extend_from_slice(&0u32.to_be_bytes()); // duration
    p.extend_from_slice(&[0u8; 8]); // reserved
    p.extend_from_slice(&0u16.to_be_bytes()); // layer
    p.extend_from_slice(&0u16.to_be_bytes()); // alt_group
    p.extend_from_slice(&0u16.to_be_bytes()); // volume
    p.extend_from_slice(&[0u8; 2]); // reserved
    p.extend_from_slice(&identity_matrix());
    p.extend_from_slice(&((width as u32) << 16).to_be_bytes());
    p.extend_from_slice(&((height as u32) << 16).to_be_bytes());
    p
}

/// Version 0 mdhd payload (after version/flags).
pub(crate) fn mdhd_v0_payload(timescale: u32, duration: u32, language: u16) -> Vec<u8> {
    let mut p = Vec::new();
    p.extend_from_slice(&0u32.to_be_bytes()); // cr_time
    p.extend_from_slice(&0u32.to_be_bytes()); // mod_time
    p.extend_from_slice(&timescale.to_be_bytes());
    p.extend_from_slice(&duration.to_be_bytes());
    p.extend_from_slice(&language.to_be_bytes());
    p.extend_from_slice(&[0u8; 2]); // pre_defined
    p
}

/// A minimal hdlr payload: handler type plus a trailing name.
pub(crate) fn hdlr_payload(handler: &str, name: &[u8]) -> Vec<u8> {
    let mut p = Vec::new();
    p.extend_from_slice(&[0u8; 4]); // pre_defined
    p.extend_from_slice(handler.as_bytes());
    p.extend_from_slice(&[0u8; 12]); // reserved
    p.extend_from_slice(name);
    p
}

/// A descriptor: tag, short-form length, payload.
pub(crate) fn desc(tag: u8, payload: &[u8]) -> Vec<u8> {
    assert!(payload.len() < 128);
    let mut v = vec![tag, payload.len() as u8];
    v.extend_from_slice(payload);
    v
}

/// AudioSpecificConfig: profile, frequency index 4 (44100), 2 channels.
pub(crate) fn asc_bytes(profile: u8) -> Vec<u8> {
    let sfi = 4u8;
    let channels = 2u8;
    vec![(profile << 3) | (sfi >> 1), ((sfi & 1) << 7) | (channels << 3)]
}

/// DecoderConfigDescriptor for MPEG-4 audio (object type 0x40).
pub(crate) fn decoder_config_desc(profile: u8) -> Vec<u8> {
    let mut p = Vec::new();
    p.push(0x40); // object_type
    p.push(0x15); // stream_type 5 (audio) | reserved
    p.extend_from_slice(&[0, 0, 0]); // buffer_size
    p.extend_from_slice(&128_000u32.to_be_bytes()); // max_bitrate
    p.extend_from_slice(&128_000u32.to_be_bytes()); // avg_bitrate
    p.extend_from_slice(&desc(0x05, &asc_bytes(profile)));
    desc(0x04, &p)
}

/// A complete esds box with an AAC descriptor tree.
pub(crate) fn esds_box(profile: u8) -> Vec<u8> {
    let mut es = Vec::new();
    es.extend_from_slice(&1u16.to_be_bytes()); // es_id
    es.push(0); // no optional fields, priority 0
    es.extend_from_slice(&decoder_config_desc(profile));
    es.extend_from_slice(&desc(0x06, &[0x02])); // sl_config
    full_boxb("esds", 0, 0, &desc(0x03, &es))
}

/// A complete mp4a sample entry containing an esds box.
pub(crate) fn mp4a_box() -> Vec<u8> {
    let mut p = Vec::new();
    p.extend_from_slice(&[0u8; 6]);
    p.extend_from_slice(&1u16.to_be_bytes()); // data_reference_index
    p.extend_from_slice(&[0u8; 8]);
    p.extend_from_slice(&2u16.to_be_bytes()); // channel_count
    p.extend_from_slice(&16u16.to_be_bytes()); // sample_size
    p.extend_from_slice(&[0u8; 4]);
    p.extend_from_slice(&(44100u32 << 16).to_be_bytes()); // sample_rate 16.16
    p.extend_from_slice(&esds_box(2));
    boxb("mp4a", &p)
}

/// A complete avc1 sample entry containing an avcC box.
pub(crate) fn avc1_box(width: u16, height: u16) -> Vec<u8> {
    let mut avcc_payload = vec![
        1u8,  // configuration_version
        0x4d, // profile_idc (Main)
        0x40, // constraint_set_flags
        0x1f, // level_idc
    ];
    avcc_payload.extend_from_slice(&[0xff, 0xe1, 0x00, 0x00]); // opaque tail

    let mut p = Vec::new();
    p.extend_from_slice(&[0u8; 6]);
    p.extend_from_slice(&1u16.to_be_bytes()); // data_reference_index
    p.extend_from_slice(&[0u8; 16]);
    p.extend_from_slice(&width.to_be_bytes());
    p.extend_from_slice(&height.to_be_bytes());
    p.extend_from_slice(&0x00480000u32.to_be_bytes()); // 72 dpi
    p.extend_from_slice(&0x00480000u32.to_be_bytes());
    p.extend_from_slice(&[0u8; 4]);
    p.extend_from_slice(&1u16.to_be_bytes()); // frame_count
    let mut name = [0u8; 32];
    name[0] = 4;
    name[1..5].copy_from_slice(b"x264");
    p.extend_from_slice(&name);
    p.extend_from_slice(&0x0018u16.to_be_bytes()); // depth
    p.extend_from_slice(&0xffffu16.to_be_bytes()); // pre_defined
    p.extend_from_slice(&boxb("avcC", &avcc_payload));
    boxb("avc1", &p)
}

/// A minimal stbl for one track: stsd entry + empty-ish tables.
pub(crate) fn stbl_box(sample_entry: Vec<u8>, sample_count: u32, delta: u32) -> Vec<u8> {
    let mut stsd = Vec::new();
    stsd.extend_from_slice(&1u32.to_be_bytes());
    stsd.extend_from_slice(&sample_entry);

    let mut stts = Vec::new();
    stts.extend_from_slice(&1u32.to_be_bytes());
    stts.extend_from_slice(&sample_count.to_be_bytes());
    stts.extend_from_slice(&delta.to_be_bytes());

    let mut stsc = Vec::new();
    stsc.extend_from_slice(&1u32.to_be_bytes());
    stsc.extend_from_slice(&1u32.to_be_bytes());
    stsc.extend_from_slice(&sample_count.to_be_bytes());
    stsc.extend_from_slice(&1u32.to_be_bytes());

    let mut stsz = Vec::new();
    stsz.extend_from_slice(&100u32.to_be_bytes()); // constant sample size
    stsz.extend_from_slice(&sample_count.to_be_bytes());

    let mut stco = Vec::new();
    stco.extend_from_slice(&1u32.to_be_bytes());
    stco.extend_from_slice(&4096u32.to_be_bytes());

    boxb(
        "stbl",
        &concat(&[
            full_boxb("stsd", 0, 0, &stsd),
            full_boxb("stts", 0, 0, &stts),
            full_boxb("stsc", 0, 0, &stsc),
            full_boxb("stsz", 0, 0, &stsz),
            full_boxb("stco", 0, 0, &stco),
        ]),
    )
}

/// A complete trak box with the given handler type and sample entry.
pub(crate) fn trak_box(track_id: u32, handler: &str, sample_entry: Vec<u8>) -> Vec<u8> {
    let header = match handler {
        "vide" => full_boxb("vmhd", 0, 1, &[0u8; 8]),
        _ => full_boxb("smhd", 0, 0, &[0u8; 4]),
    };
    let minf = boxb(
        "minf",
        &concat(&[header, boxb("dinf", &[]), stbl_box(sample_entry, 30, 1000)]),
    );
    let mdia = boxb(
        "mdia",
        &concat(&[
            full_boxb("mdhd", 0, 0, &mdhd_v0_payload(30000, 900_000, 0x55c4)),
            full_boxb("hdlr", 0, 0, &hdlr_payload(handler, b"handler\0")),
            minf,
        ]),
    );
    boxb(
        "trak",
        &concat(&[full_boxb("tkhd", 0, 7, &tkhd_v0_payload(track_id, 1280, 720)), mdia]),
    )
}

/// A minimal complete movie file: ftyp + moov with the given tracks.
pub(crate) fn movie_file(tracks: &[Vec<u8>]) -> Vec<u8> {
    let mut ftyp = Vec::new();
    ftyp.extend_from_slice(b"isom");
    ftyp.extend_from_slice(&512u32.to_be_bytes());
    ftyp.extend_from_slice(b"isom");
    ftyp.extend_from_slice(b"mp41");

    let mut mvhd = Vec::new();
    mvhd.extend_from_slice(&0u32.to_be_bytes());
    mvhd.extend_from_slice(&0u32.to_be_bytes());
    mvhd.extend_from_slice(&1000u32.to_be_bytes()); // timescale
    mvhd.extend_from_slice(&30000u32.to_be_bytes()); // duration
    mvhd.extend_from_slice(&0x00010000u32.to_be_bytes());
    mvhd.extend_from_slice(&0x0100u16.to_be_bytes());
    mvhd.extend_from_slice(&[0u8; 10]);
    mvhd.extend_from_slice(&identity_matrix());
    mvhd.extend_from_slice(&[0u8; 24]);
    mvhd.extend_from_slice(&(tracks.len() as u32 + 1).to_be_bytes());

    let mut moov_payload = full_boxb("mvhd", 0, 0, &mvhd);
    for t in tracks {
        moov_payload.extend_from_slice(t);
    }

    concat(&[
        boxb("ftyp", &ftyp),
        boxb("moov", &moov_payload),
        boxb("mdat", &[0u8; 64]),
    ])
}
