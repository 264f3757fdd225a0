#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp24(dib_size: u32, width: i32, height: i32, bgr: &[u8]) -> Vec<u8> {
    let offset = 14 + dib_size;
    let mut bmp = vec![0u8; offset as usize];
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&(offset + bgr.len() as u32).to_le_bytes()); // file size
    bmp[10..14].copy_from_slice(&offset.to_le_bytes()); // data offset
    bmp[14..18].copy_from_slice(&dib_size.to_le_bytes()); // DIB header size
    bmp[18..22].copy_from_slice(&width.to_le_bytes());
    bmp[22..26].copy_from_slice(&height.to_le_bytes());
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&24u16.to_le_bytes()); // bpp
    bmp.extend_from_slice(bgr);
    bmp
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_rows";
    fs::create_dir_all(dir).unwrap();

    // 1x1 with each header variant
    for size in [40u32, 52, 56, 108, 124] {
        let bmp = bmp24(size, 1, 1, &[0xff, 0x00, 0x00, 0x00]);
        fs::write(format!("{dir}/bmp_1x1_v{size}.bmp"), bmp).unwrap();
    }

    // 2x2 top-down, 8 bytes per row (6 + 2 padding)
    let rows = [0, 0, 0xff, 0, 0xff, 0, 0, 0, 0xff, 0, 0, 0x80, 0x80, 0x80, 0, 0];
    fs::write(format!("{dir}/bmp_2x2_topdown.bmp"), bmp24(40, 2, -2, &rows)).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    let mut core = bmp24(40, 1, 1, &[0; 4]);
    core[14..18].copy_from_slice(&12u32.to_le_bytes());
    fs::write(format!("{dir}/core_header.bin"), core).unwrap();

    println!("Generated seed corpus in {dir}/");
}
