use infrastructure::crypto::password::{hash_password, verify_password};

#[test]
fn test_password_hash_roundtrip() {
    let hash = hash_password("secret1").expect("hashing failed");
    assert_ne!(hash, "secret1");
    assert!(verify_password("secret1", &hash).expect("verify failed"));
    assert!(!verify_password("secret2", &hash).expect("verify failed"));
}

#[test]
fn test_password_hashes_are_salted() {
    let first = hash_password("secret1").expect("hashing failed");
    let second = hash_password("secret1").expect("hashing failed");
    assert_ne!(first, second);
    assert!(verify_password("secret1", &first).expect("verify failed"));
    assert!(verify_password("secret1", &second).expect("verify failed"));
}

#[test]
fn test_verify_rejects_garbage_hash() {
    assert!(verify_password("secret1", "not-a-phc-string").is_err());
}
