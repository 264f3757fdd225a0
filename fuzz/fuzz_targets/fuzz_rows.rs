#![no_main]
use bmprows::{BmpReader, SliceStream};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Every read operation must return an error rather than panic.
    let mut reader = BmpReader::new(SliceStream::new(data));
    let _ = reader.read_file_header();
    let _ = reader.read_dib_header();
    let _ = reader.info();

    if let Ok(height) = reader.height() {
        let last = height.min(i32::MAX as u32) as i32 - 1;
        for row in [-1, 0, last, last.saturating_add(1)] {
            let _ = reader.row(row);
        }
    }
    let _ = reader.for_each_row(enough::Unstoppable, |_, _| {});
});
