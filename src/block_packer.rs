use crate::bit_width::floor_by;
use crate::bitpacking::{pack_unmasked, unpack};
use crate::descriptor::BlockDescriptor;
use crate::{
    Cursor, Error, IntegerCodec, Result, BLOCK_SIZE, MAX_BIT_WIDTH, SUB_BLOCKS_PER_BLOCK,
    SUB_BLOCK_SIZE,
};
use tracing::{debug, trace};

/// `BlockPacker` bit packs whole blocks of 128 32-bit integers.
///
/// Each block is split into 4 sub-blocks of 32 values and every sub-block is packed at the smallest bit width that
/// holds its largest value. A block is written as one descriptor word carrying the 4 widths followed by the packed
/// sub-blocks, so a block costs between 1 and 129 words. A compressed region starts with a single header word holding
/// the number of values it decompresses to.
///
/// Only whole blocks are compressed; any trailing values are left for another codec to consume.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlockPacker;

impl BlockPacker {
    pub fn new() -> Self {
        BlockPacker
    }

    /// Returns the maximum number of words `compress()` may write for `len` input values, including the header.
    pub fn max_compressed_len(len: usize) -> usize {
        1 + (len / BLOCK_SIZE) * (1 + SUB_BLOCKS_PER_BLOCK * MAX_BIT_WIDTH as usize)
    }
}

impl IntegerCodec for BlockPacker {
    /// Compresses the largest whole number of blocks in `input[in_pos..in_pos + in_len]`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InsufficientInput` if `in_len < 128`. Nothing is written and neither cursor moves.
    fn compress(
        &self,
        input: &[u32],
        in_pos: &mut Cursor,
        in_len: usize,
        output: &mut [u32],
        out_pos: &mut Cursor,
    ) -> Result<()> {
        let len = floor_by(in_len, BLOCK_SIZE);
        if len == 0 {
            debug!(in_len, "input is smaller than one block");
            return Err(Error::InsufficientInput { len: in_len });
        }

        let start = in_pos.get();
        debug_assert!(start + len <= input.len());
        debug_assert!(len <= u32::MAX as usize);

        output[out_pos.get()] = len as u32;
        let mut tmp_out = out_pos.get() + 1;
        for block in input[start..(start + len)].chunks_exact(BLOCK_SIZE) {
            let descriptor = BlockDescriptor::measure(block);
            let block_start = tmp_out;
            output[tmp_out] = descriptor.to_word();
            tmp_out += 1;
            for (sub_block, width) in block
                .chunks_exact(SUB_BLOCK_SIZE)
                .zip(descriptor.widths)
            {
                pack_unmasked(sub_block, &mut output[tmp_out..], width);
                tmp_out += width as usize;
            }
            debug_assert_eq!(tmp_out - block_start, 1 + descriptor.data_len());
        }

        trace!(
            values = len,
            blocks = len / BLOCK_SIZE,
            words = tmp_out - out_pos.get(),
            "compressed"
        );
        in_pos.add(len);
        out_pos.set(tmp_out);
        Ok(())
    }

    /// Decompresses one region written by `compress()` starting at `in_pos`.
    ///
    /// The number of values produced comes from the region header; `in_len` is only checked to be non-zero.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidLength` if `in_len == 0`. Nothing is read and neither cursor moves.
    ///
    /// # Panics
    ///
    /// If the region describes more data than `input` holds or more values than `output` can take, or if a
    /// descriptor records a width above 32. Such regions were not produced by `compress()`.
    fn uncompress(
        &self,
        input: &[u32],
        in_pos: &mut Cursor,
        in_len: usize,
        output: &mut [u32],
        out_pos: &mut Cursor,
    ) -> Result<()> {
        if in_len == 0 {
            debug!("uncompress called with a zero length");
            return Err(Error::InvalidLength);
        }

        let out_len = input[in_pos.get()] as usize;
        debug_assert_eq!(out_len % BLOCK_SIZE, 0);
        let mut tmp_in = in_pos.get() + 1;
        let start = out_pos.get();
        for block in output[start..(start + out_len)].chunks_exact_mut(BLOCK_SIZE) {
            let descriptor = BlockDescriptor::from_word(input[tmp_in]);
            tmp_in += 1;
            for (sub_block, width) in block
                .chunks_exact_mut(SUB_BLOCK_SIZE)
                .zip(descriptor.widths)
            {
                unpack(&input[tmp_in..], sub_block, width);
                tmp_in += width as usize;
            }
        }

        trace!(
            values = out_len,
            words = tmp_in - in_pos.get(),
            "uncompressed"
        );
        out_pos.add(out_len);
        in_pos.set(tmp_in);
        Ok(())
    }
}
