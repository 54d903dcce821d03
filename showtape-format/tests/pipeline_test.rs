//! Integration tests for the showtape file pipelines
//!
//! Generates a real WAV, then drives it through binary, archive, and loose forms.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use showtape_format::constants::{FRAMING_SIZE, REFERENCE_FOOTER};
use showtape_format::{
    ContainerKind, ErrorKind, LooseFiles, ReadOptions, ShowtapeDocument, ShowtapeError,
    TrailerMode, WavInfo, classify, read_container, write_container,
};
use tempfile::tempdir;

/// 16-bit mono WAV with `frames` samples at 8 kHz.
fn generate_wav(frames: u32) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 8000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut buf = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut buf, spec).expect("Failed to create WAV");
        for i in 0..frames {
            let t = i as f32 / 8000.0;
            let sample = (t * 440.0 * 2.0 * std::f32::consts::PI).sin() * 12000.0;
            writer.write_sample(sample as i16).expect("Failed to write sample");
        }
        writer.finalize().expect("Failed to finalize WAV");
    }
    buf.into_inner()
}

/// Signal track with `frames` frames of two channels each.
fn generate_signal(frames: usize) -> Vec<i32> {
    (0..frames)
        .flat_map(|f| [(f % 90 + 1) as i32, (f % 7 + 100) as i32, 0])
        .collect()
}

fn write_binary_fixture(path: &Path, audio: &[u8], signal: &[i32]) {
    let doc = ShowtapeDocument::new(audio.to_vec(), signal.to_vec());
    write_container(path, ContainerKind::Binary, &doc).expect("Failed to write fixture");
}

#[test]
fn test_binary_archive_binary_byte_identical() {
    let dir = tempdir().expect("Failed to create temp dir");
    let shw = dir.path().join("tape.rshw");
    let shz = dir.path().join("tape.rshz");
    let shw2 = dir.path().join("tape2.rshw");

    write_binary_fixture(&shw, &generate_wav(4000), &generate_signal(100));

    let detected = classify(shw.to_str().unwrap()).unwrap();
    assert_eq!(detected.kind, ContainerKind::Binary);
    assert_eq!(detected.output_path(&shw, ContainerKind::Archive), shz);

    let options = ReadOptions::default();
    let doc = read_container(&shw, ContainerKind::Binary, &options).unwrap();
    write_container(&shz, ContainerKind::Archive, &doc).unwrap();

    let doc = read_container(&shz, ContainerKind::Archive, &options).unwrap();
    assert_eq!(doc.trailer, None);
    write_container(&shw2, ContainerKind::Binary, &doc).unwrap();

    assert_eq!(fs::read(&shw).unwrap(), fs::read(&shw2).unwrap());
}

#[test]
fn test_custom_trailer_replaced_by_reference() {
    let dir = tempdir().expect("Failed to create temp dir");
    let shw = dir.path().join("old.shw");
    let shz = dir.path().join("old.shz");
    let shw2 = dir.path().join("new.shw");

    let original = ShowtapeDocument {
        audio: generate_wav(100),
        signal: generate_signal(10),
        trailer: Some(b"v1.0,App=legacy\x00".to_vec()),
    };
    write_container(&shw, ContainerKind::Binary, &original).unwrap();

    let strict = ReadOptions {
        trailer_mode: TrailerMode::Strict,
        ..ReadOptions::default()
    };
    let err = read_container(&shw, ContainerKind::Binary, &strict).unwrap_err();
    assert!(matches!(err, ShowtapeError::FooterMismatch));

    let doc = read_container(&shw, ContainerKind::Binary, &ReadOptions::default()).unwrap();
    write_container(&shz, ContainerKind::Archive, &doc).unwrap();
    let doc = read_container(&shz, ContainerKind::Archive, &strict).unwrap();
    write_container(&shw2, ContainerKind::Binary, &doc).unwrap();

    let back = read_container(&shw2, ContainerKind::Binary, &strict).unwrap();
    assert_eq!(back.audio, original.audio);
    assert_eq!(back.signal, original.signal);
    assert_eq!(back.trailer.as_deref(), Some(&REFERENCE_FOOTER[..]));
}

#[test]
fn test_scenario_sizes() {
    let dir = tempdir().expect("Failed to create temp dir");
    let shw = dir.path().join("scenario.shw");

    let audio = generate_wav(7978);
    assert_eq!(audio.len(), 16_000);
    let signal: Vec<i32> = (0..300).map(|i| i % 5).collect();
    write_binary_fixture(&shw, &audio, &signal);

    let len = fs::metadata(&shw).unwrap().len() as usize;
    assert_eq!(len, FRAMING_SIZE + 16_000 + 1200 + REFERENCE_FOOTER.len());

    let doc = read_container(&shw, ContainerKind::Binary, &ReadOptions::default()).unwrap();
    assert_eq!(doc.signal.len(), 300);
    assert_eq!(doc.audio.len(), 16_000);
    assert_eq!(doc.signal_stats().frames, 60);
    assert_eq!(WavInfo::probe(&doc.audio).unwrap().frames, 7978);
}

#[test]
fn test_unpack_then_pack() {
    let dir = tempdir().expect("Failed to create temp dir");
    let shz = dir.path().join("tape.shz");
    let packed = dir.path().join("packed.shw");
    let loose_dir = dir.path().join("loose");
    fs::create_dir(&loose_dir).unwrap();

    let original = ShowtapeDocument::new(generate_wav(500), generate_signal(25));
    write_container(&shz, ContainerKind::Archive, &original).unwrap();

    let files = LooseFiles::in_dir(&loose_dir);
    let doc = read_container(&shz, ContainerKind::Archive, &ReadOptions::default()).unwrap();
    files.write(&doc).unwrap();

    // Editing the JSON by hand is the point of the loose form
    fs::write(&files.signal, "[1, 2, 0,\n 3, 0]\n").unwrap();

    let edited = files.read(ReadOptions::default().max_input_bytes).unwrap();
    let edited = edited.validated().unwrap();
    write_container(&packed, ContainerKind::Binary, &edited).unwrap();

    let back = read_container(&packed, ContainerKind::Binary, &ReadOptions::default()).unwrap();
    assert_eq!(back.signal, vec![1, 2, 0, 3, 0]);
    assert_eq!(back.audio, original.audio);

    // Second unpack into the same place is refused
    let err = files.write(&back).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Existence);
}

#[test]
fn test_repaired_audio_written_out() {
    let dir = tempdir().expect("Failed to create temp dir");
    let shw = dir.path().join("bad.shw");
    let shz = dir.path().join("bad.shz");

    let mut audio = generate_wav(64);
    audio[4..8].copy_from_slice(&0u32.to_le_bytes());
    write_binary_fixture(&shw, &audio, &[0]);

    let doc = read_container(&shw, ContainerKind::Binary, &ReadOptions::default()).unwrap();
    write_container(&shz, ContainerKind::Archive, &doc).unwrap();

    let doc = read_container(&shz, ContainerKind::Archive, &ReadOptions::default()).unwrap();
    let declared = u32::from_le_bytes(doc.audio[4..8].try_into().unwrap());
    assert_eq!(declared as usize, audio.len() - 8);
    assert_eq!(&doc.audio[8..], &audio[8..]);
}

#[test]
fn test_corrupt_header_writes_nothing() {
    let dir = tempdir().expect("Failed to create temp dir");
    let shw = dir.path().join("corrupt.shw");
    let shz = dir.path().join("corrupt.shz");

    write_binary_fixture(&shw, &generate_wav(10), &[0]);
    let mut data = fs::read(&shw).unwrap();
    data[40] ^= 0xff;
    fs::write(&shw, &data).unwrap();

    let result = read_container(&shw, ContainerKind::Binary, &ReadOptions::default())
        .and_then(|doc| write_container(&shz, ContainerKind::Archive, &doc));
    assert!(matches!(result, Err(ShowtapeError::HeaderMismatch)));
    assert!(!shz.exists());
}
