//! BGR <-> RGB conversion
//!
//! Swapping the first and third channel is its own inverse, so the same
//! routine converts OpenCV frames to RGB and RGB frames back for encoding.

const PIXEL_SIZE: usize = 3;
const CHUNK_PIXELS: usize = 4;
const CHUNK_SIZE: usize = PIXEL_SIZE * CHUNK_PIXELS;

/// Returns a copy of `pixels` with red and blue swapped in every 3-byte pixel.
///
/// Trailing bytes that do not form a whole pixel are dropped.
pub fn swap_red_blue(pixels: &[u8]) -> Vec<u8> {
    let pixel_bytes = pixels.len() - pixels.len() % PIXEL_SIZE;
    let mut swapped = vec![0u8; pixel_bytes];

    // Four pixels per step keeps the inner loop branch-free
    let mut src_chunks = pixels[..pixel_bytes].chunks_exact(CHUNK_SIZE);
    let mut dst_chunks = swapped.chunks_exact_mut(CHUNK_SIZE);
    for (src, dst) in (&mut src_chunks).zip(&mut dst_chunks) {
        for (s, d) in src.chunks_exact(PIXEL_SIZE).zip(dst.chunks_exact_mut(PIXEL_SIZE)) {
            swap_pixel(s, d);
        }
    }

    let src_rest = src_chunks.remainder();
    let dst_rest = dst_chunks.into_remainder();
    for (s, d) in src_rest
        .chunks_exact(PIXEL_SIZE)
        .zip(dst_rest.chunks_exact_mut(PIXEL_SIZE))
    {
        swap_pixel(s, d);
    }

    swapped
}

#[inline]
fn swap_pixel(src: &[u8], dst: &mut [u8]) {
    dst[0] = src[2];
    dst[1] = src[1];
    dst[2] = src[0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pixel() {
        assert_eq!(swap_red_blue(&[255, 128, 0]), vec![0, 128, 255]);
    }

    #[test]
    fn test_full_chunk_and_remainder() {
        // 5 pixels: one full chunk plus one trailing pixel
        let bgr: Vec<u8> = [10u8, 20, 30].repeat(5);

        let rgb = swap_red_blue(&bgr);

        assert_eq!(rgb.len(), 15);
        for pixel in rgb.chunks_exact(3) {
            assert_eq!(pixel, [30, 20, 10]);
        }
    }

    #[test]
    fn test_swap_is_its_own_inverse() {
        let original: Vec<u8> = (0..=89).collect();
        assert_eq!(swap_red_blue(&swap_red_blue(&original)), original);
    }

    #[test]
    fn test_partial_pixel_dropped() {
        assert_eq!(swap_red_blue(&[1, 2, 3, 4]), vec![3, 2, 1]);
        assert!(swap_red_blue(&[]).is_empty());
    }
}
