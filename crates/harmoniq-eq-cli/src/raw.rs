//! Headerless little-endian `f64` PCM.

use anyhow::{bail, Result};

const SAMPLE_BYTES: usize = std::mem::size_of::<f64>();

pub fn decode(bytes: &[u8]) -> Result<Vec<f64>> {
    if bytes.len() % SAMPLE_BYTES != 0 {
        bail!(
            "raw input is {} bytes, which is not a whole number of {SAMPLE_BYTES}-byte samples",
            bytes.len()
        );
    }
    Ok(bytes
        .chunks_exact(SAMPLE_BYTES)
        .map(|chunk| {
            let mut word = [0u8; SAMPLE_BYTES];
            word.copy_from_slice(chunk);
            f64::from_le_bytes(word)
        })
        .collect())
}

pub fn encode(samples: &[f64]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(samples.len() * SAMPLE_BYTES);
    for sample in samples {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_little_endian_words() {
        let mut bytes = 1.5f64.to_le_bytes().to_vec();
        bytes.extend_from_slice(&(-0.25f64).to_le_bytes());
        assert_eq!(decode(&bytes).unwrap(), vec![1.5, -0.25]);
        assert_eq!(encode(&[1.5, -0.25]), bytes);
    }

    #[test]
    fn rejects_partial_trailing_sample() {
        let err = decode(&[0u8; 12]).unwrap_err();
        assert!(err.to_string().contains("12 bytes"));
    }

    #[test]
    fn empty_input_is_empty_stream() {
        assert!(decode(&[]).unwrap().is_empty());
    }
}
