#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u64, u64, u64)| {
    let (page_index, page_count, page_show) = data;
    if let Ok(w) = quill::pagination::window(page_index, page_count, page_show) {
        assert!(w.len() as u64 <= page_show);
        assert!(w.iter().all(|p| p >= 2 && p < page_count));
    }
});
