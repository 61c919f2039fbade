// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pvdcore

//! Traversal-composed round-trip tests: the codec never assumes an
//! ordering, it only requires encode and decode to agree on one.

use pvd_core::traversal::{apply_order, invert_order};
use pvd_core::traversal::permute::keyed_order;
use pvd_core::traversal::serpentine::serpentine_order;
use pvd_core::{decode, embed_message, encode, extract_message, RangeTable};

/// A 32×16 "image" with a mild horizontal gradient plus texture.
fn gradient_image() -> Vec<u8> {
    let (w, h) = (32usize, 16usize);
    (0..w * h)
        .map(|i| {
            let (x, y) = (i % w, i / w);
            (40 + x * 3 + (y * 7) % 20) as u8
        })
        .collect()
}

#[test]
fn serpentine_scan_round_trip() {
    let table = RangeTable::wu_tsai();
    let pixels = gradient_image();
    let order = serpentine_order(32, 16);
    let secret = b"scan order".to_vec();

    // Encode over the scanned sequence, then write pixels back to the grid.
    let stego_scan = encode(apply_order(&pixels, &order), &secret, &table).unwrap();
    let stego_grid = apply_order(&stego_scan, &invert_order(&order));

    // The decoder re-imposes the same scan.
    let rescanned = apply_order(&stego_grid, &order);
    assert_eq!(decode(&rescanned, secret.len(), &table), secret);
}

#[test]
fn keyed_order_round_trip() {
    let table = RangeTable::wu_tsai();
    let pixels = gradient_image();
    let seed = [0x5Au8; 32];
    let order = keyed_order(pixels.len(), &seed);
    let payload = b"keyed".to_vec();

    let stego_perm = embed_message(apply_order(&pixels, &order), &payload, &table).unwrap();
    let stego_grid = apply_order(&stego_perm, &invert_order(&order));

    let reordered = apply_order(&stego_grid, &keyed_order(stego_grid.len(), &seed));
    assert_eq!(extract_message(&reordered, &table).unwrap(), payload);
}

#[test]
fn wrong_seed_fails_to_extract() {
    let table = RangeTable::wu_tsai();
    let pixels = gradient_image();
    let order = keyed_order(pixels.len(), &[1u8; 32]);

    let stego_perm = embed_message(apply_order(&pixels, &order), b"hidden", &table).unwrap();
    let stego_grid = apply_order(&stego_perm, &invert_order(&order));

    let wrong = apply_order(&stego_grid, &keyed_order(stego_grid.len(), &[2u8; 32]));
    assert!(
        extract_message(&wrong, &table).is_err(),
        "wrong traversal key must not reveal the payload"
    );
}

#[test]
fn grid_pixels_outside_carriers_unchanged() {
    // Embedding touches only carrier pairs; with a short secret most of the
    // grid must come back bit-identical.
    let table = RangeTable::wu_tsai();
    let pixels = gradient_image();
    let order = serpentine_order(32, 16);

    let stego_scan = encode(apply_order(&pixels, &order), &[0xC3], &table).unwrap();
    let stego_grid = apply_order(&stego_scan, &invert_order(&order));

    let changed = pixels
        .iter()
        .zip(&stego_grid)
        .filter(|(a, b)| a != b)
        .count();
    // 8 bits at 3+ bits per pair: at most 3 pairs are touched.
    assert!(changed <= 6, "{changed} pixels changed for a 1-byte secret");
}
