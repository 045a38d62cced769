//! C bindings. Buffers are raw pointer and length pairs, and errors are
//! reported through sentinel return values instead of Result: usize::MAX
//! for a null pointer paired with a positive length, bufsize + 1 when the
//! output buffer is too small.

use std::os::raw::c_void;
use std::slice;

use crate::error::CodecError;

/// Compress [input, input + len) into [output, output + bufsize).
/// Returns the compressed size, bufsize + 1 if the output buffer is too
/// small (it then holds bufsize bytes of partial output with no meaning
/// of their own), or usize::MAX if a null pointer is paired with a
/// positive length.
///
/// # Safety
/// Unless null, input must be valid for reading len bytes and output
/// for writing bufsize bytes.
#[no_mangle]
pub unsafe extern "C" fn fpaq0f2_compress(
    input:   *const c_void,
    len:     usize,
    output:  *mut c_void,
    bufsize: usize,
) -> usize {
    if input.is_null() && len > 0 {
        return usize::MAX;
    }
    if output.is_null() && bufsize > 0 {
        return usize::MAX;
    }

    let input: &[u8] = if input.is_null() { &[] }
        else { slice::from_raw_parts(input as *const u8, len) };
    let output: &mut [u8] = if output.is_null() { &mut [] }
        else { slice::from_raw_parts_mut(output as *mut u8, bufsize) };

    match crate::compress(input, output) {
        Ok(size) => size,
        Err(CodecError::BufferTooSmall) => bufsize + 1,
    }
}

/// Decompress [input, input + len) into [output, output + bufsize).
/// Returns the decompressed size, bufsize + 1 if the output buffer is
/// too small, or usize::MAX if a null pointer is paired with a positive
/// length.
///
/// # Safety
/// Unless null, input must be valid for reading len bytes and output
/// for writing bufsize bytes.
#[no_mangle]
pub unsafe extern "C" fn fpaq0f2_decompress(
    input:   *const c_void,
    len:     usize,
    output:  *mut c_void,
    bufsize: usize,
) -> usize {
    if input.is_null() && len > 0 {
        return usize::MAX;
    }
    if output.is_null() && bufsize > 0 {
        return usize::MAX;
    }

    let input: &[u8] = if input.is_null() { &[] }
        else { slice::from_raw_parts(input as *const u8, len) };
    let output: &mut [u8] = if output.is_null() { &mut [] }
        else { slice::from_raw_parts_mut(output as *mut u8, bufsize) };

    match crate::decompress(input, output) {
        Ok(size) => size,
        Err(CodecError::BufferTooSmall) => bufsize + 1,
    }
}
