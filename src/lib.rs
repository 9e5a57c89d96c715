/*! # Binary Packing of 32-bit Integers
This crate implements a block oriented binary packing codec for sequences of `u32` values, the kind of codec used to
store posting lists and integer columns. Values are compressed in blocks of 128: each block is split into 4
sub-blocks of 32 values and each sub-block is packed at the smallest bit width that can hold its largest value.

Codecs implement the [`IntegerCodec`] trait, which reads and writes slices of `u32` at caller-owned [`Cursor`]
positions. This makes it possible to chain codecs over the same buffers, e.g. `BlockPacker` for the block aligned
prefix of a sequence and some other codec for the remainder.

## Example

```
use bp32::{BlockPacker, Cursor, IntegerCodec};

let coder = BlockPacker::new();
let values = (0..300u32).map(|i| i * 997 % 1024).collect::<Vec<_>>();
let mut compressed = vec![0u32; BlockPacker::max_compressed_len(values.len())];
let mut in_pos = Cursor::default();
let mut out_pos = Cursor::default();
coder
    .compress(&values, &mut in_pos, values.len(), &mut compressed, &mut out_pos)
    .unwrap();
// Only whole blocks are compressed: the last 44 values are left for another codec.
assert_eq!(in_pos.get(), 256);
// Every sub-block needs exactly 10 bits, so each block takes a descriptor and 4 * 10 words.
assert_eq!(out_pos.get(), 1 + 2 * (1 + 40));

let mut decoded = vec![0u32; 256];
let compressed_len = out_pos.get();
let mut in_pos = Cursor::default();
let mut out_pos = Cursor::default();
coder
    .uncompress(&compressed, &mut in_pos, compressed_len, &mut decoded, &mut out_pos)
    .unwrap();
assert_eq!(values[..256], decoded[..]);
assert_eq!(in_pos.get(), compressed_len);
```
*/

pub mod bit_width;
pub mod bitpacking;
mod block_packer;
mod cursor;
mod descriptor;
mod error;

pub use block_packer::BlockPacker;
pub use cursor::Cursor;
pub use error::{Error, Result};

/// Number of values in a block, the unit of compression.
pub const BLOCK_SIZE: usize = 128;

/// Number of values in a sub-block, the unit of bit width measurement and packing.
pub const SUB_BLOCK_SIZE: usize = 32;

/// Number of sub-blocks in each block.
pub const SUB_BLOCKS_PER_BLOCK: usize = BLOCK_SIZE / SUB_BLOCK_SIZE;

/// Page size used by pipelines that split long sequences before handing them to a codec.
pub const PAGE_SIZE: usize = 65536;

/// Largest bit width a value may be packed at.
pub const MAX_BIT_WIDTH: u32 = 32;

/// `IntegerCodec` compresses and decompresses sequences of `u32` values between slices.
///
/// Positions in the input and output slices are tracked by caller-owned cursors that are advanced on success and left
/// untouched on error. Implementations hold no mutable state, so one instance may be shared freely; the trait is
/// object safe so that heterogeneous codecs can be composed as `&dyn IntegerCodec`.
pub trait IntegerCodec {
    /// Compresses up to `in_len` values from `input` starting at `in_pos`, writing to `output` at `out_pos`.
    ///
    /// On success `in_pos` is advanced past the values consumed, which may be fewer than `in_len`, and `out_pos` past
    /// the words written. `output` must have enough room from `out_pos` for the compressed data.
    fn compress(
        &self,
        input: &[u32],
        in_pos: &mut Cursor,
        in_len: usize,
        output: &mut [u32],
        out_pos: &mut Cursor,
    ) -> Result<()>;

    /// Decompresses values from `input` starting at `in_pos`, writing them to `output` at `out_pos`.
    ///
    /// On success `in_pos` is advanced past the words read and `out_pos` past the values written.
    fn uncompress(
        &self,
        input: &[u32],
        in_pos: &mut Cursor,
        in_len: usize,
        output: &mut [u32],
        out_pos: &mut Cursor,
    ) -> Result<()>;
}
