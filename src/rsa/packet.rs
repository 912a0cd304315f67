// Packet Codec
// Packs message bytes into big integers (little-endian base 256) and back

use num_traits::Zero;

use super::bigint::RsaBigInt;

/// Default number of message bytes per packet
pub const DEFAULT_PACKET_SIZE: usize = 3;

/// Pack up to `packet_size` bytes of `chunk` into one integer
///
/// Byte `j` is weighted by `256^j`; positions past the end of a short chunk
/// count as zero bytes.
pub fn pack(chunk: &[u8], packet_size: usize) -> RsaBigInt {
    let len = chunk.len().min(packet_size);
    RsaBigInt::from_bytes_le(&chunk[..len])
}

/// Unpack an integer into bytes by repeated division by 256
///
/// Stops once the value reaches zero, so trailing zero bytes of a packet are
/// never reconstructed. A packet whose last real byte is `0` is therefore
/// indistinguishable from padding and comes back shorter.
pub fn unpack(code: &RsaBigInt) -> Vec<u8> {
    if code.is_zero() {
        return Vec::new();
    }
    code.to_bytes_le()
}

/// Split a message into consecutive packets of `packet_size` bytes
pub fn packets(message: &[u8], packet_size: usize) -> impl Iterator<Item = RsaBigInt> + '_ {
    message
        .chunks(packet_size)
        .map(move |chunk| pack(chunk, packet_size))
}

/// Largest packet size `s` with `256^s - 1 < modulus`
///
/// Larger sizes let distinct byte patterns collide modulo `modulus`.
pub fn packet_capacity(modulus: &RsaBigInt) -> usize {
    if modulus.is_zero() {
        return 0;
    }
    ((modulus.bits() - 1) / 8) as usize
}
