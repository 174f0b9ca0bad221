use std::fs;
use std::process::Command;

use harmoniq_eq::Cookbook;

fn encode(samples: &[f64]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

fn decode(bytes: &[u8]) -> Vec<f64> {
    bytes
        .chunks_exact(8)
        .map(|c| f64::from_le_bytes(c.try_into().unwrap()))
        .collect()
}

#[test]
fn renders_stereo_band_pass_like_the_library() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.raw");
    let output = dir.path().join("output.raw");

    let frames = 512;
    let interleaved: Vec<f64> = (0..frames * 2)
        .map(|i| {
            let n = (i / 2) as f64;
            if i % 2 == 0 {
                (n * 0.0627).sin()
            } else {
                0.5 * (n * 0.31).cos()
            }
        })
        .collect();
    fs::write(&input, encode(&interleaved)).unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_harmoniq-eq-cli"))
        .args(["render", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .args([
            "--kind",
            "band-pass",
            "--sample-rate",
            "44100",
            "--frequency",
            "440",
            "--width",
            "0.5",
        ])
        .status()
        .unwrap();
    assert!(status.success());

    let rendered = decode(&fs::read(&output).unwrap());
    assert_eq!(rendered.len(), interleaved.len());

    let cookbook = Cookbook::default();
    let mut left = cookbook.band_pass(44_100.0, 440.0, 0.5);
    let mut right = cookbook.band_pass(44_100.0, 440.0, 0.5);
    for (i, (x, y)) in interleaved.iter().zip(&rendered).enumerate() {
        let expected = if i % 2 == 0 { left.apply(*x) } else { right.apply(*x) };
        assert_eq!(*y, expected, "sample {i}");
    }
}

#[test]
fn preset_with_pi_override_is_honoured() {
    let dir = tempfile::tempdir().unwrap();
    let preset = dir.path().join("preset.json");
    fs::write(
        &preset,
        r#"{ "pi": 3.0, "filter": { "kind": "low-shelf", "sample_rate": 48000.0, "frequency": 200.0, "q": 0.707, "gain": -6.0 } }"#,
    )
    .unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_harmoniq-eq-cli"))
        .arg("coeffs")
        .arg("--preset")
        .arg(&preset)
        .output()
        .unwrap();
    assert!(out.status.success());

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["kind"], "low-shelf");
    let expected = Cookbook::with_pi(3.0).low_shelf(48_000.0, 200.0, 0.707, -6.0);
    let a0 = report["coefficients"]["a0"].as_f64().unwrap();
    assert!((a0 - expected.coefficients().a0).abs() < 1e-12);
    let reference = Cookbook::default().low_shelf(48_000.0, 200.0, 0.707, -6.0);
    assert!((a0 - reference.coefficients().a0).abs() > 1e-9);
}

#[test]
fn checked_mode_rejects_zero_width() {
    let out = Command::new(env!("CARGO_BIN_EXE_harmoniq-eq-cli"))
        .args([
            "coeffs",
            "--kind",
            "peaking",
            "--sample-rate",
            "44100",
            "--frequency",
            "1000",
            "--width",
            "0",
            "--gain",
            "-3",
            "--checked",
        ])
        .output()
        .unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("bandwidth"), "{stderr}");
}

#[test]
fn truncated_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.raw");
    fs::write(&input, [0u8; 13]).unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_harmoniq-eq-cli"))
        .args(["render", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(dir.path().join("out.raw"))
        .args(["--kind", "low-pass", "--sample-rate", "44100", "--frequency", "1000", "--q", "0.707"])
        .status()
        .unwrap();
    assert!(!status.success());
}
