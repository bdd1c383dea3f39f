#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<(String, String, i32)>, String, String)| {
    let mut router = segtrie::Router::new();

    for (method, route, item) in data.0 {
        let _ = router.insert(&method, &route, item);
    }

    let _ = router.at(&data.1, &data.2);
    let _ = router.allowed(&data.2);
});
