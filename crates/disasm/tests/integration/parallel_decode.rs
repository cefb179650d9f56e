//! Decoding is pure, so a batch split across threads and stitched back
//! together by index must match the serial listing.

use std::thread;

use pretty_assertions::assert_eq;

use mipsdis::listing::{Line, from_words};

#[test]
fn test_threaded_batch_matches_serial() {
    let words: Vec<u32> = (0u32..4096).map(|i| i.wrapping_mul(0x9E37_79B9)).collect();
    let serial = from_words(words.iter().copied());

    let chunk = 512;
    let mut parallel: Vec<Line> = thread::scope(|s| {
        let handles: Vec<_> = words
            .chunks(chunk)
            .enumerate()
            .map(|(n, part)| {
                s.spawn(move || {
                    part.iter()
                        .enumerate()
                        .map(|(i, &w)| Line::new(n * chunk + i, w))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .rev()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });
    parallel.sort_by_key(|l| l.index);

    assert_eq!(parallel, serial);
}
