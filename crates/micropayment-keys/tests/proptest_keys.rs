use proptest::prelude::*;

use micropayment_keys::ec::PrivateKey;
use micropayment_keys::keys::*;
use micropayment_keys::{KeyError, NetworkTable};

/// Flip bits of the byte at `index` in a hex string.
fn mutate_hex(hex_str: &str, index: usize, mask: u8) -> String {
    let mut bytes = hex::decode(hex_str).unwrap();
    let i = index % bytes.len();
    bytes[i] ^= mask;
    hex::encode(bytes)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn der_and_wif_round_trip(seed in prop::array::uniform32(any::<u8>())) {
        // Not every 32-byte array is a valid secret exponent (must be nonzero and < n).
        if let Ok(key) = PrivateKey::from_bytes(&seed) {
            let networks = NetworkTable::default();
            let privkey = key.to_hex();
            prop_assert_eq!(der_to_privkey(&privkey_to_der(&privkey).unwrap()).unwrap(), privkey.clone());
            prop_assert_eq!(pem_to_privkey(&privkey_to_pem(&privkey).unwrap()).unwrap(), privkey.clone());
            for network in networks.iter() {
                let wif = privkey_to_wif(&privkey, &networks, &network.code).unwrap();
                prop_assert_eq!(wif_to_privkey(&wif).unwrap(), privkey.clone());
            }
        }
    }

    #[test]
    fn pubkey_compression_round_trip(seed in prop::array::uniform32(any::<u8>())) {
        if let Ok(key) = PrivateKey::from_bytes(&seed) {
            let pubkey = pubkey_from_privkey(&key.to_hex()).unwrap();
            prop_assert_eq!(pubkey.len(), 66);
            let uncompressed = uncompress_pubkey(&pubkey).unwrap();
            prop_assert_eq!(uncompressed.len(), 130);
            prop_assert!(uncompressed.starts_with("04"));
            prop_assert_eq!(compress_pubkey(&uncompressed).unwrap(), pubkey);
        }
    }

    #[test]
    fn pubkey_is_deterministic(seed in prop::array::uniform32(any::<u8>())) {
        if let Ok(key) = PrivateKey::from_bytes(&seed) {
            let privkey = key.to_hex();
            prop_assert_eq!(pubkey_from_privkey(&privkey).unwrap(), pubkey_from_privkey(&privkey).unwrap());
            prop_assert_eq!(
                pubkey_from_privkey(&privkey.to_uppercase()).unwrap(),
                pubkey_from_privkey(&privkey).unwrap()
            );
        }
    }

    #[test]
    fn address_paths_agree(seed in prop::array::uniform32(any::<u8>())) {
        if let Ok(key) = PrivateKey::from_bytes(&seed) {
            let networks = NetworkTable::default();
            let privkey = key.to_hex();
            let pubkey = pubkey_from_privkey(&privkey).unwrap();
            let der = privkey_to_der(&privkey).unwrap();
            for network in networks.iter() {
                let code = network.code.as_str();
                let address = address_from_privkey(&privkey, &networks, code).unwrap();
                prop_assert_eq!(&address, &address_from_pubkey(&pubkey, &networks, code).unwrap());
                prop_assert_eq!(&address, &address_from_der(&der, &networks, code).unwrap());
                // netcode_from_address returns the first network sharing the prefix
                let resolved = netcode_from_address(&address, &networks).unwrap();
                prop_assert_eq!(networks.get(&resolved).unwrap().address_prefix, network.address_prefix);
            }
        }
    }

    #[test]
    fn sign_then_verify(
        seed in prop::array::uniform32(any::<u8>()),
        message in prop::collection::vec(any::<u8>(), 0..256)
    ) {
        if let Ok(key) = PrivateKey::from_bytes(&seed) {
            let wif = key.to_wif(0x80);
            let signature = sign(&wif, &message).unwrap();
            prop_assert!(verify(&pubkey_from_wif(&wif).unwrap(), &signature, &message).is_ok());
        }
    }

    #[test]
    fn mutated_inputs_fail_verification(
        seed in prop::array::uniform32(any::<u8>()),
        message in prop::collection::vec(any::<u8>(), 1..128),
        index in any::<usize>(),
        mask in 1u8..=255,
    ) {
        if let Ok(key) = PrivateKey::from_bytes(&seed) {
            let wif = key.to_wif(0x80);
            let pubkey = pubkey_from_wif(&wif).unwrap();
            let signature = sign(&wif, &message).unwrap();

            let mut bad_message = message.clone();
            let i = index % bad_message.len();
            bad_message[i] ^= mask;
            let is_invalid_signature =
                |r: Result<(), KeyError>| matches!(r, Err(KeyError::InvalidSignature { .. }));

            prop_assert!(is_invalid_signature(verify(&pubkey, &signature, &bad_message)));
            prop_assert!(is_invalid_signature(verify(&pubkey, &mutate_hex(&signature, index, mask), &message)));
            prop_assert!(is_invalid_signature(verify(&mutate_hex(&pubkey, index, mask), &signature, &message)));
        }
    }

    #[test]
    fn unknown_network_never_produces_output(
        seed in prop::array::uniform32(any::<u8>()),
        code in "[a-z]{1,6}"
    ) {
        // every built-in code contains an upper-case letter
        if let Ok(key) = PrivateKey::from_bytes(&seed) {
            let networks = NetworkTable::default();
            let privkey = key.to_hex();
            let is_unknown = |r: Result<String, KeyError>| matches!(r, Err(KeyError::UnknownNetwork(_)));
            prop_assert!(is_unknown(privkey_to_wif(&privkey, &networks, &code)));
            prop_assert!(is_unknown(address_from_privkey(&privkey, &networks, &code)));
            prop_assert!(is_unknown(address_from_pubkey(&key.pub_key().to_hex(), &networks, &code)));
        }
    }

    #[test]
    fn truncated_or_corrupted_strings_fail_decoding(
        seed in prop::array::uniform32(any::<u8>()),
        cut in 1usize..10,
    ) {
        if let Ok(key) = PrivateKey::from_bytes(&seed) {
            let networks = NetworkTable::default();
            let wif = key.to_wif(0x80);
            let address = key.pub_key().to_address(0x00, true);
            let der = key.to_der().unwrap();

            prop_assert!(matches!(wif_to_privkey(&wif[..wif.len() - cut]), Err(KeyError::Decoding(_))));
            prop_assert!(matches!(
                netcode_from_address(&address[..address.len() - cut], &networks),
                Err(KeyError::Decoding(_))
            ));
            prop_assert!(matches!(der_to_privkey(&der[..der.len() - cut]), Err(KeyError::Decoding(_))));

            let mut corrupted = wif.clone();
            let last = corrupted.pop().unwrap();
            corrupted.push(if last == 'z' { 'y' } else { 'z' });
            prop_assert!(matches!(wif_to_privkey(&corrupted), Err(KeyError::Decoding(_))));
        }
    }
}
