use eth_keysign::{
    keccak256, sign, verify, Address, CryptoError, Keypair, MessageDigest, PublicKey, Report,
    Signature,
};

const GOLDEN_DIGEST: &str = "47cd17384c9aaf53b5ac1ec02f9dc66e58d16509e7883cc0558e2bccfaf6a0cf";

#[test]
fn golden_message_digest() {
    let digest = MessageDigest::hash_message("My name is Christopher Eze");
    assert_eq!(digest.to_hex(), GOLDEN_DIGEST);
    assert_eq!(hex::encode(keccak256(b"My name is Christopher Eze")), GOLDEN_DIGEST);
}

#[test]
fn fresh_key_walkthrough() {
    let report = Report::build(Keypair::generate().unwrap(), "My name is Christopher Eze", false);
    assert!(report.valid);
    assert_eq!(report.digest.to_hex(), GOLDEN_DIGEST);

    let address = report.address();
    assert!(address.starts_with("0x"));
    assert_eq!(address.len(), 42);
    assert_eq!(address, address.to_lowercase());
}

#[test]
fn each_run_uses_an_unrelated_key() {
    let a = Report::build(Keypair::generate().unwrap(), "m", false);
    let b = Report::build(Keypair::generate().unwrap(), "m", false);
    assert_ne!(a.keypair.address(), b.keypair.address());
    assert_eq!(a.digest, b.digest);
    assert_ne!(a.signature, b.signature);
}

#[test]
fn verify_with_exported_material() {
    // Round-trip everything through its printed hex form, as a second tool would.
    let keypair = Keypair::generate().unwrap();
    let digest = MessageDigest::hash_message("exported");
    let signature = sign(&digest, &keypair);

    let public_key = PublicKey::from_hex(&keypair.public_key().to_hex()).unwrap();
    let signature = Signature::from_hex(&signature.to_hex()).unwrap();
    let digest = MessageDigest::from_slice(&hex::decode(digest.to_hex()).unwrap()).unwrap();

    assert!(verify(&signature, &digest, &public_key));
    assert_eq!(public_key.address(), *keypair.address());
}

#[test]
fn imported_key_matches_known_address() {
    let keypair = Keypair::from_hex(
        "0x0000000000000000000000000000000000000000000000000000000000000001",
    )
    .unwrap();
    let expected: Address = "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf".parse().unwrap();
    assert_eq!(keypair.address(), &expected);
}

#[test]
fn mismatch_is_false_not_error() {
    let signer = Keypair::generate().unwrap();
    let other = Keypair::generate().unwrap();
    let digest = MessageDigest::hash_message("who signed this?");
    let signature = sign(&digest, &signer);
    assert!(!verify(&signature, &digest, other.public_key()));
}

#[test]
fn malformed_inputs_are_errors() {
    assert!(matches!(
        MessageDigest::from_slice(&[0u8; 20]),
        Err(CryptoError::InvalidDigestLength(20))
    ));
    assert!(matches!(
        MessageDigest::hash_utf8(b"\xc3\x28"),
        Err(CryptoError::InvalidEncoding(_))
    ));
    assert!(matches!(
        Signature::from_bytes(&[0u8; 64]),
        Err(CryptoError::InvalidSignature(_))
    ));
    assert!(matches!(
        PublicKey::from_bytes(&[0u8; 33]),
        Err(CryptoError::InvalidPublicKey(_))
    ));
    assert!(matches!(
        Keypair::from_secret_bytes([0u8; 32]),
        Err(CryptoError::InvalidPrivateKey(_))
    ));
}
