//! FIPS 180-4 / NIST example vectors for every supported function.
//!
//! The vector classes cover the interesting padding shapes: the empty
//! message (pure padding), a short single-block message, a message that
//! forces a second padding block, and a million-byte message spanning many
//! blocks.

use libhash::{sha1, sha224, sha256, sha384, sha512, sha512_224, sha512_256};

/// 448-bit two-block message for the 512-bit block functions.
const TWO_BLOCK_32: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";

/// 896-bit two-block message for the 1024-bit block functions.
const TWO_BLOCK_64: &[u8] = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmno\
ijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";

fn million_a() -> Vec<u8> {
    vec![b'a'; 1_000_000]
}

#[test]
fn sha1_vectors() {
    assert_eq!(
        sha1(b"").to_string(),
        "da39a3ee5e6b4b0d3255bfef95601890afd80709"
    );
    assert_eq!(
        sha1(b"abc").to_string(),
        "a9993e364706816aba3e25717850c26c9cd0d89d"
    );
    assert_eq!(
        sha1(TWO_BLOCK_32).to_string(),
        "84983e441c3bd26ebaae4aa1f95129e5e54670f1"
    );
    assert_eq!(
        sha1(&million_a()).to_string(),
        "34aa973cd4c4daa4f61eeb2bdbad27316534016f"
    );
}

#[test]
fn sha224_vectors() {
    assert_eq!(
        sha224(b"").to_string(),
        "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f"
    );
    assert_eq!(
        sha224(b"abc").to_string(),
        "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"
    );
    assert_eq!(
        sha224(TWO_BLOCK_32).to_string(),
        "75388b16512776cc5dba5da1fd890150b0c6455cb4f58b1952522525"
    );
    assert_eq!(
        sha224(&million_a()).to_string(),
        "20794655980c91d8bbb4c1ea97618a4bf03f42581948b2ee4ee7ad67"
    );
}

#[test]
fn sha256_vectors() {
    assert_eq!(
        sha256(b"").to_string(),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(
        sha256(b"abc").to_string(),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert_eq!(
        sha256(TWO_BLOCK_32).to_string(),
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
    );
    assert_eq!(
        sha256(&million_a()).to_string(),
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
    );
}

#[test]
fn sha384_vectors() {
    assert_eq!(
        sha384(b"").to_string(),
        "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da\
         274edebfe76f65fbd51ad2f14898b95b"
    );
    assert_eq!(
        sha384(b"abc").to_string(),
        "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed\
         8086072ba1e7cc2358baeca134c825a7"
    );
    assert_eq!(
        sha384(TWO_BLOCK_64).to_string(),
        "09330c33f71147e83d192fc782cd1b4753111b173b3b05d22fa08086e3b0f712\
         fcc7c71a557e2db966c3e9fa91746039"
    );
    assert_eq!(
        sha384(&million_a()).to_string(),
        "9d0e1809716474cb086e834e310a4a1ced149e9c00f248527972cec5704c2a5b\
         07b8b3dc38ecc4ebae97ddd87f3d8985"
    );
}

#[test]
fn sha512_vectors() {
    assert_eq!(
        sha512(b"").to_string(),
        "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
         47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
    );
    assert_eq!(
        sha512(b"abc").to_string(),
        "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
         2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
    );
    assert_eq!(
        sha512(TWO_BLOCK_64).to_string(),
        "8e959b75dae313da8cf4f72814fc143f8f7779c6eb9f7fa17299aeadb6889018\
         501d289e4900f7e4331b99dec4b5433ac7d329eeb6dd26545e96e55b874be909"
    );
    assert_eq!(
        sha512(&million_a()).to_string(),
        "e718483d0ce769644e2e42c7bc15b4638e1f98b13b2044285632a803afa973eb\
         de0ff244877ea60a4cb0432ce577c31beb009c5c2c49aa2e4eadb217ad8cc09b"
    );
}

#[test]
fn sha512_224_vectors() {
    assert_eq!(
        sha512_224(b"").to_string(),
        "6ed0dd02806fa89e25de060c19d3ac86cabb87d6a0ddd05c333b84f4"
    );
    assert_eq!(
        sha512_224(b"abc").to_string(),
        "4634270f707b6a54daae7530460842e20e37ed265ceee9a43e8924aa"
    );
    assert_eq!(
        sha512_224(TWO_BLOCK_64).to_string(),
        "23fec5bb94d60b23308192640b0c453335d664734fe40e7268674af9"
    );
}

#[test]
fn sha512_256_vectors() {
    assert_eq!(
        sha512_256(b"").to_string(),
        "c672b8d1ef56ed28ab87c3622c5114069bdd3ad7b8f9737498d0c01ecef0967a"
    );
    assert_eq!(
        sha512_256(b"abc").to_string(),
        "53048e2681941ef99b2e29b76b4c7dabe4c2d0c634fc6d46e0e2f13107e7af23"
    );
    assert_eq!(
        sha512_256(TWO_BLOCK_64).to_string(),
        "3928e184fb8690f840da3988121d31be65cb9d3ef83ee6146feac861e19b563a"
    );
}

#[test]
fn digest_debug_formats_as_hex() {
    insta::assert_snapshot!(
        format!("{:?}", sha256(b"abc")),
        @"Digest(0xba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad)"
    );
}

#[test]
fn digest_display_matches_hex_helper() {
    let digest = sha1(b"abc");
    assert_eq!(digest.to_string(), digest.to_hex().to_string());
}
