use crate::bit_width::max_bits;
use crate::{BLOCK_SIZE, SUB_BLOCKS_PER_BLOCK, SUB_BLOCK_SIZE};

/// Bit widths of the 4 sub-blocks of a single block.
///
/// Encoded as one descriptor word with the first sub-block width in the most significant byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct BlockDescriptor {
    pub widths: [u32; SUB_BLOCKS_PER_BLOCK],
}

impl BlockDescriptor {
    /// Measure the widths of each sub-block in `block`.
    ///
    /// `block` must contain at least `BLOCK_SIZE` values.
    #[inline]
    pub fn measure(block: &[u32]) -> Self {
        let mut widths = [0u32; SUB_BLOCKS_PER_BLOCK];
        for (width, sub_block) in widths
            .iter_mut()
            .zip(block[..BLOCK_SIZE].chunks_exact(SUB_BLOCK_SIZE))
        {
            *width = max_bits(sub_block);
        }
        BlockDescriptor { widths }
    }

    #[inline]
    pub fn to_word(self) -> u32 {
        (self.widths[0] << 24) | (self.widths[1] << 16) | (self.widths[2] << 8) | self.widths[3]
    }

    #[inline]
    pub fn from_word(word: u32) -> Self {
        BlockDescriptor {
            widths: [
                word >> 24,
                (word >> 16) & 0xff,
                (word >> 8) & 0xff,
                word & 0xff,
            ],
        }
    }

    /// Returns the number of packed words following the descriptor.
    #[inline]
    pub fn data_len(self) -> usize {
        self.widths.iter().map(|w| *w as usize).sum()
    }
}
