/*! Packing and unpacking of 32 integers at a fixed bit width.

Values are laid out least significant bit first: value `i` occupies bits `[i * width, (i + 1) * width)` of the output
words, continuing into the next word when it straddles a word boundary. 32 values at `width` bits fill exactly
`width` words, so a packed sub-block never shares a word with its neighbours.

Each width has its own monomorphized routine so that all shifts and word offsets are constant once the 32-value loop
is unrolled.
*/

use crate::{MAX_BIT_WIDTH, SUB_BLOCK_SIZE};
use crunchy::unroll;

// Invokes `$f::<W>($src, $dst)` for a runtime width in 1..=32.
macro_rules! dispatch_width {
    (@arms $f:ident, $width:expr, $src:expr, $dst:expr, [$($w:literal),*]) => {
        match $width {
            $($w => $f::<$w>($src, $dst),)*
            w => panic!("bit width {} exceeds {}", w, MAX_BIT_WIDTH),
        }
    };
    ($f:ident, $width:expr, $src:expr, $dst:expr) => {
        dispatch_width!(@arms $f, $width, $src, $dst,
            [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
             17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32])
    };
}

#[inline(always)]
fn pack_width<const W: usize>(src: &[u32], dst: &mut [u32]) {
    let src = &src[..SUB_BLOCK_SIZE];
    let dst = &mut dst[..W];
    dst.fill(0);
    unroll! {
        for i in 0..32 {
            let bit = i * W;
            let word = bit / 32;
            let shift = bit % 32;
            let v = (src[i] as u64) << shift;
            dst[word] |= v as u32;
            if shift + W > 32 {
                dst[word + 1] |= (v >> 32) as u32;
            }
        }
    }
}

#[inline(always)]
fn unpack_width<const W: usize>(src: &[u32], dst: &mut [u32]) {
    let src = &src[..W];
    let dst = &mut dst[..SUB_BLOCK_SIZE];
    let mask = ((1u64 << W) - 1) as u32;
    unroll! {
        for i in 0..32 {
            let bit = i * W;
            let word = bit / 32;
            let shift = bit % 32;
            let mut v = (src[word] as u64) >> shift;
            if shift + W > 32 {
                v |= (src[word + 1] as u64) << (32 - shift);
            }
            dst[i] = v as u32 & mask;
        }
    }
}

/// Packs the first 32 values of `src` into the first `width` words of `dst`.
///
/// High bits are not masked off: the output is only meaningful if every value fits in `width` bits, as is the case
/// when `width` was computed with [`crate::bit_width::max_bits`]. The `width` target words are overwritten.
///
/// # Panics
///
/// - If `width > 32`.
/// - If `src.len() < 32` or `dst.len() < width` (for non-zero `width`).
#[inline]
pub fn pack_unmasked(src: &[u32], dst: &mut [u32], width: u32) {
    if width == 0 {
        return;
    }
    dispatch_width!(pack_width, width, src, dst)
}

/// Unpacks 32 values of `width` bits from the first `width` words of `src` into the first 32 entries of `dst`.
///
/// A `width` of 0 reads nothing and writes 32 zeroes.
///
/// # Panics
///
/// - If `width > 32`.
/// - If `src.len() < width` or `dst.len() < 32`.
#[inline]
pub fn unpack(src: &[u32], dst: &mut [u32], width: u32) {
    if width == 0 {
        dst[..SUB_BLOCK_SIZE].fill(0);
        return;
    }
    dispatch_width!(unpack_width, width, src, dst)
}

#[cfg(test)]
mod tests {
    use super::{pack_unmasked, unpack};
    use crate::bit_width::max_bits;
    use crate::tests::generate_array;

    #[test]
    fn pack_unpack_all_widths() {
        for width in 0..=32u32 {
            let values = generate_array(32, width);
            assert!(max_bits(&values) <= width);

            let mut packed = [0u32; 33];
            pack_unmasked(&values, &mut packed, width);
            // Nothing is written past the packed width.
            assert!(packed[width as usize..].iter().all(|w| *w == 0));

            let mut unpacked = [u32::MAX; 32];
            unpack(&packed, &mut unpacked, width);
            assert_eq!(values, unpacked, "width {}", width);
        }
    }

    #[test]
    fn pack_overwrites_stale_output() {
        for width in 1..=32u32 {
            let values = generate_array(32, width);
            let mut clean = [0u32; 32];
            pack_unmasked(&values, &mut clean, width);
            let mut stale = [0xdeadbeefu32; 32];
            pack_unmasked(&values, &mut stale, width);
            assert_eq!(clean[..width as usize], stale[..width as usize]);
        }
    }

    #[test]
    fn layout_is_lsb_first() {
        let mut values = [0u32; 32];
        values[0] = 0b101;
        values[1] = 0b011;
        values[10] = 0b111;
        values[11] = 0b001;
        let mut packed = [0u32; 3];
        pack_unmasked(&values, &mut packed, 3);
        // Value 10 starts at bit 30 and straddles into the second word.
        assert_eq!(packed[0], 0b011_101 | (0b11 << 30));
        assert_eq!(packed[1], 0b1 | (0b001 << 1));
        assert_eq!(packed[2], 0);
    }

    #[test]
    fn unpack_zero_width() {
        let mut out = [7u32; 40];
        unpack(&[], &mut out, 0);
        assert!(out[..32].iter().all(|v| *v == 0));
        assert!(out[32..].iter().all(|v| *v == 7));
    }

    #[test]
    fn full_width_is_a_copy() {
        let values = generate_array(32, 32);
        let mut packed = [0u32; 32];
        pack_unmasked(&values, &mut packed, 32);
        assert_eq!(values, packed);
    }

    #[test]
    #[should_panic]
    fn width_out_of_range() {
        let mut out = [0u32; 32];
        unpack(&[0u32; 64], &mut out, 33);
    }
}
