//! RGB565 to ARGB8888 buffer conversion.
//!
//! The software backend's texture wants 32-bit pixels while the compositor
//! renders packed RGB565. [`ConvertScratch`] owns the intermediate buffer,
//! growing it lazily to the largest region seen and never shrinking, so
//! steady-state refreshes allocate nothing.

use radioface_types::color::expand_rgb565;
use radioface_types::error::{RadioError, Result};

/// Growable scratch buffer for pixel format conversion.
///
/// Single-writer: only the flush bridge path calls in, at most one flush is
/// outstanding at a time, so no synchronization is needed.
#[derive(Default)]
pub struct ConvertScratch {
    buf: Vec<u32>,
}

impl ConvertScratch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pixels the scratch can currently hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Convert a run of RGB565 pixels to opaque ARGB8888.
    ///
    /// Grows the scratch if `src` exceeds its capacity. When growth fails the
    /// scratch is left unchanged and usable at its previous capacity, no
    /// pixels are converted, and the caller gets an error; partial output is
    /// never produced.
    pub fn convert(&mut self, src: &[u16]) -> Result<&[u32]> {
        if src.len() > self.buf.len() {
            let additional = src.len() - self.buf.len();
            self.buf.try_reserve(additional).map_err(|_| {
                RadioError::Convert(format!("scratch growth to {} px failed", src.len()))
            })?;
            self.buf.resize(src.len(), 0);
        }
        for (dst, &px) in self.buf.iter_mut().zip(src) {
            *dst = expand_rgb565(px);
        }
        Ok(&self.buf[..src.len()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_equal_length_run() {
        let mut scratch = ConvertScratch::new();
        let src = [0x0000u16, 0xFFFF, 0xF800];
        let out = scratch.convert(&src).unwrap();
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], 0xFF00_0000);
        assert_eq!(out[1], 0xFFFF_FFFF);
    }

    #[test]
    fn white_expands_to_opaque_white() {
        let mut scratch = ConvertScratch::new();
        let out = scratch.convert(&[0xFFFF]).unwrap();
        assert_eq!(out, &[0xFFFF_FFFF]);
    }

    #[test]
    fn capacity_grows_and_never_shrinks() {
        let mut scratch = ConvertScratch::new();
        assert_eq!(scratch.capacity(), 0);

        scratch.convert(&[0u16; 1000]).unwrap();
        assert_eq!(scratch.capacity(), 1000);

        scratch.convert(&[0u16; 10]).unwrap();
        assert_eq!(scratch.capacity(), 1000);

        scratch.convert(&[0u16; 2000]).unwrap();
        assert_eq!(scratch.capacity(), 2000);
    }

    #[test]
    fn smaller_run_returns_its_own_length() {
        let mut scratch = ConvertScratch::new();
        scratch.convert(&[0u16; 100]).unwrap();
        let out = scratch.convert(&[0xFFFFu16; 4]).unwrap();
        assert_eq!(out.len(), 4);
        assert!(out.iter().all(|&px| px == 0xFFFF_FFFF));
    }

    #[test]
    fn empty_run_is_fine() {
        let mut scratch = ConvertScratch::new();
        let out = scratch.convert(&[]).unwrap();
        assert!(out.is_empty());
        assert_eq!(scratch.capacity(), 0);
    }

    #[test]
    fn conversion_is_elementwise() {
        let mut scratch = ConvertScratch::new();
        let src: Vec<u16> = (0..64).map(|i| i * 1021).collect();
        let out = scratch.convert(&src).unwrap().to_vec();
        for (i, &px) in src.iter().enumerate() {
            assert_eq!(out[i], expand_rgb565(px));
        }
    }
}
